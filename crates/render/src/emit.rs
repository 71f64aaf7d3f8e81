//! Table emitters - render a complete table as source text.
//!
//! The contract is the data (7 kinds x 4 orientations x 4 cells, kinds in
//! canonical order, cells ascending row then column), not the punctuation.
//! Two emitters are provided: a Rust `const` initializer ready to paste
//! into an engine, and a JSON document for everything else.

use std::fmt::Write as _;

use anyhow::{bail, Result};
use serde::Serialize;

use piece_tablegen_core::PieceTable;
use piece_tablegen_types::{Orientation, PieceKind, PieceShape};

/// Emit the table as a Rust `const` initializer.
///
/// Refuses an incomplete table; a partially emitted table downstream is
/// worse than a hard failure here.
pub fn emit_rust(table: &PieceTable) -> Result<String> {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "// Generated from the piece orientation diagram. Do not edit by hand."
    );
    let _ = writeln!(out, "pub const PIECE_CELLS: [[[(u8, u8); 4]; 4]; 7] = [");
    for kind in PieceKind::ALL {
        let _ = writeln!(out, "    // {kind}");
        let _ = writeln!(out, "    [");
        for orientation in Orientation::ALL {
            let shape = slot(table, kind, orientation)?;
            let cells: Vec<String> = shape
                .iter()
                .map(|(column, row)| format!("({column}, {row})"))
                .collect();
            let _ = writeln!(out, "        [{}],", cells.join(", "));
        }
        let _ = writeln!(out, "    ],");
    }
    let _ = writeln!(out, "];");
    Ok(out)
}

/// One table entry of the JSON document.
#[derive(Serialize)]
struct PieceEntry {
    piece: char,
    orientations: [PieceShape; 4],
}

/// Emit the table as a JSON array, kinds in canonical order.
///
/// An array (not an object) keeps the canonical kind order on the wire;
/// each cell serializes as a two-element `[column, row]` array.
pub fn emit_json(table: &PieceTable) -> Result<String> {
    let mut entries = Vec::with_capacity(PieceKind::ALL.len());
    for kind in PieceKind::ALL {
        let mut orientations = [[(0, 0); 4]; 4];
        for orientation in Orientation::ALL {
            orientations[orientation.index()] = slot(table, kind, orientation)?;
        }
        entries.push(PieceEntry {
            piece: kind.as_char(),
            orientations,
        });
    }
    let mut doc = serde_json::to_string_pretty(&entries)?;
    doc.push('\n');
    Ok(doc)
}

fn slot(table: &PieceTable, kind: PieceKind, orientation: Orientation) -> Result<PieceShape> {
    match table.get(kind, orientation) {
        Some(shape) => Ok(shape),
        None => bail!("refusing to emit an incomplete table: piece '{kind}' orientation {orientation} missing"),
    }
}
