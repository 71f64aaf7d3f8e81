//! Occupancy extraction - classifies the cell tokens of one diagram row.

use piece_tablegen_types::PieceKind;

use crate::error::StructuralInconsistency;

/// Occupied cells of one recognized diagram row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowOccupancy {
    /// Block-local row index, assigned by the decoder cursor.
    pub row: u8,
    /// Piece kind named by the row, `None` for a fully blank row.
    pub kind: Option<PieceKind>,
    /// Occupied column indices, ascending.
    pub columns: Vec<u8>,
}

/// Classify the cell tokens of one row.
///
/// A token is occupied iff its trimmed text is non-empty. All occupied
/// tokens of a row must name the same piece letter; `line` is the 1-based
/// input line number used for error reporting.
pub fn scan_row(
    tokens: &[&str],
    row: u8,
    line: usize,
) -> Result<RowOccupancy, StructuralInconsistency> {
    let mut kind: Option<PieceKind> = None;
    let mut columns = Vec::new();

    for (column, token) in tokens.iter().enumerate() {
        let text = token.trim();
        if text.is_empty() {
            continue;
        }

        let parsed = single_letter(text)
            .and_then(PieceKind::from_char)
            .ok_or_else(|| StructuralInconsistency::UnknownLetter {
                line,
                token: text.to_string(),
            })?;

        match kind {
            None => kind = Some(parsed),
            Some(k) if k == parsed => {}
            Some(k) => {
                return Err(StructuralInconsistency::MixedRow {
                    line,
                    first: k.as_char(),
                    second: parsed.as_char(),
                });
            }
        }
        columns.push(column as u8);
    }

    Ok(RowOccupancy { row, kind, columns })
}

fn single_letter(text: &str) -> Option<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
