//! The structural error kind raised by every pipeline stage.
//!
//! Malformed input is an authoring defect, never a transient condition:
//! there are no retries and no partial tables. The first inconsistency
//! aborts the whole decode; completeness violations surface at end of
//! stream once every block boundary is known.

use piece_tablegen_types::{Orientation, PieceKind};
use thiserror::Error;

/// A violation of the diagram's layout convention.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructuralInconsistency {
    /// A single row names two or more distinct piece letters.
    #[error("line {line}: row mixes piece letters '{first}' and '{second}'")]
    MixedRow { line: usize, first: char, second: char },

    /// An occupied cell token is not one of the seven kind letters.
    #[error("line {line}: cell token {token:?} is not a piece letter or blank")]
    UnknownLetter { line: usize, token: String },

    /// Rows of one block belong to different piece kinds.
    #[error("block ending at line {line} mixes pieces '{first}' and '{second}'")]
    MixedBlock { line: usize, first: PieceKind, second: PieceKind },

    /// A block flattened to something other than four occupied cells.
    #[error("piece '{kind}' orientation {orientation} has {count} occupied cells, expected 4")]
    CellCount {
        kind: PieceKind,
        orientation: Orientation,
        count: usize,
    },

    /// The same `(kind, orientation)` slot was produced by two blocks.
    #[error("piece '{kind}' orientation {orientation} is drawn more than once")]
    DuplicateSlot {
        kind: PieceKind,
        orientation: Orientation,
    },

    /// The input ended partway through a four-row block.
    #[error("input ended {rows_seen} row(s) into a block")]
    TruncatedBlock { rows_seen: usize },

    /// End of stream with unpopulated slots; lists every missing one.
    #[error("diagram incomplete, missing: {}", format_missing(.missing))]
    Incomplete {
        missing: Vec<(PieceKind, Orientation)>,
    },
}

fn format_missing(missing: &[(PieceKind, Orientation)]) -> String {
    let slots: Vec<String> = missing
        .iter()
        .map(|(kind, orientation)| format!("{kind}/{orientation}"))
        .collect();
    slots.join(", ")
}
