//! Offset assembler - folds a closed block into the table.
//!
//! A block's rows arrive top line first (row 3 down to row 0). Flattening
//! reverses them so offsets come out ascending by row, then column, and
//! applies the per-kind spawn-row correction from the types crate.

use piece_tablegen_types::{MinoOffset, Orientation, PieceKind, PieceShape, CELLS_PER_PIECE};

use crate::error::StructuralInconsistency;
use crate::occupancy::RowOccupancy;
use crate::table::PieceTable;

/// Fold a completed four-row block into `table`.
///
/// A block whose rows are all blank contributes nothing; the slot it
/// would have filled is reported by the completeness check at end of
/// stream. `line` is the input line that closed the block.
pub fn close_block(
    table: &mut PieceTable,
    orientation: Orientation,
    rows: &[RowOccupancy],
    line: usize,
) -> Result<(), StructuralInconsistency> {
    let Some(kind) = unify_kind(rows, line)? else {
        return Ok(());
    };

    let correction = kind.spawn_row_correction();
    let mut cells: Vec<MinoOffset> = Vec::with_capacity(CELLS_PER_PIECE);
    for occupancy in rows.iter().rev() {
        for &column in &occupancy.columns {
            cells.push((column, occupancy.row + correction));
        }
    }

    let count = cells.len();
    let shape: PieceShape = cells.try_into().map_err(|_| {
        StructuralInconsistency::CellCount {
            kind,
            orientation,
            count,
        }
    })?;

    table.insert(kind, orientation, shape)
}

/// The single piece kind a block's occupied rows agree on, if any.
fn unify_kind(
    rows: &[RowOccupancy],
    line: usize,
) -> Result<Option<PieceKind>, StructuralInconsistency> {
    let mut kind = None;
    for occupancy in rows {
        let Some(row_kind) = occupancy.kind else {
            continue;
        };
        match kind {
            None => kind = Some(row_kind),
            Some(k) if k == row_kind => {}
            Some(k) => {
                return Err(StructuralInconsistency::MixedBlock {
                    line,
                    first: k,
                    second: row_kind,
                });
            }
        }
    }
    Ok(kind)
}
