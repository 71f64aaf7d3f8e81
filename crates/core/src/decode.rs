//! Grid decoder - recognizes diagram rows and groups them into blocks.
//!
//! A line is a diagram row iff it contains a bracket; everything else is
//! noise (prose, headings, blank lines) and is skipped without touching
//! any counter, even between two rows of the same block.
//!
//! The source diagram lists each orientation's rows top line first in a
//! coordinate system that grows upward, so the row cursor counts down
//! (3, 2, 1, 0) and a new block opens whenever the cursor is back at 3.
//! Orientation identity is positional: the N-th block of the input is
//! orientation N modulo 4.

use arrayvec::ArrayVec;

use piece_tablegen_types::{Orientation, BLOCK_ROWS};

use crate::assemble;
use crate::error::StructuralInconsistency;
use crate::occupancy::{self, RowOccupancy};
use crate::table::PieceTable;

/// Row index of a block's first (topmost) line.
const TOP_ROW: u8 = BLOCK_ROWS - 1;

/// Incremental diagram decoder.
///
/// Feed lines in input order with [`feed_line`](Self::feed_line), then
/// call [`finish`](Self::finish) at end of stream to run the
/// completeness check and take the table. [`table`](Self::table) exposes
/// the in-progress accumulation.
#[derive(Debug)]
pub struct DiagramDecoder {
    /// Blocks opened so far; drives the positional orientation cycle.
    blocks: usize,
    /// Orientation of the block currently being filled.
    current: Orientation,
    /// Block-local row index the next recognized line lands on.
    next_row: u8,
    /// Rows of the block currently being filled, top line first.
    pending: ArrayVec<RowOccupancy, 4>,
    /// 1-based input line number, counted across noise lines too.
    line: usize,
    table: PieceTable,
}

impl DiagramDecoder {
    pub fn new() -> Self {
        Self {
            blocks: 0,
            current: Orientation::North,
            next_row: TOP_ROW,
            pending: ArrayVec::new(),
            line: 0,
            table: PieceTable::new(),
        }
    }

    /// Consume one input line.
    ///
    /// Noise lines always succeed. A recognized line advances the cursor
    /// and, when it closes a block, folds that block into the table;
    /// structural errors abort the decode at the offending line.
    pub fn feed_line(&mut self, text: &str) -> Result<(), StructuralInconsistency> {
        self.line += 1;
        if !text.contains('[') {
            return Ok(());
        }

        let stripped = text.trim().trim_matches(|c| c == '[' || c == ']');
        let tokens: Vec<&str> = stripped.split(',').collect();

        let row = self.next_row;
        if row == TOP_ROW {
            self.current = Orientation::from_index(self.blocks);
            self.blocks += 1;
        }
        self.next_row = if row == 0 { TOP_ROW } else { row - 1 };

        let occupancy = occupancy::scan_row(&tokens, row, self.line)?;
        self.pending.push(occupancy);

        if row == 0 {
            let rows = std::mem::take(&mut self.pending);
            assemble::close_block(&mut self.table, self.current, &rows, self.line)?;
        }
        Ok(())
    }

    /// The in-progress table.
    pub fn table(&self) -> &PieceTable {
        &self.table
    }

    /// End of stream: reject a half-read block, then require all 28
    /// slots to be populated.
    pub fn finish(self) -> Result<PieceTable, StructuralInconsistency> {
        if !self.pending.is_empty() {
            return Err(StructuralInconsistency::TruncatedBlock {
                rows_seen: self.pending.len(),
            });
        }

        let missing = self.table.missing_slots();
        if !missing.is_empty() {
            return Err(StructuralInconsistency::Incomplete { missing });
        }
        Ok(self.table)
    }
}

/// Decode a whole diagram in one pass.
pub fn decode_str(input: &str) -> Result<PieceTable, StructuralInconsistency> {
    let mut decoder = DiagramDecoder::new();
    for line in input.lines() {
        decoder.feed_line(line)?;
    }
    decoder.finish()
}
