//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the pipeline.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (decoding, assembly, emission).
//!
//! # Diagram conventions
//!
//! The source diagram describes each piece orientation as a block of four
//! bracketed rows. Rows are listed top line first, but the coordinate
//! system grows upward: the bottom line of a block is row 0. Cells are
//! addressed as `(column, row)`, both 0-based.
//!
//! # Canonical piece order
//!
//! The diagram lists the seven tetrominoes in a fixed order, which is also
//! the declaration order of [`PieceKind`] and the order of every emitted
//! table:
//!
//! | Index | Kind | Letter |
//! |-------|------|--------|
//! | 0 | Z | `z` |
//! | 1 | L | `l` |
//! | 2 | O | `o` |
//! | 3 | S | `s` |
//! | 4 | I | `i` |
//! | 5 | J | `j` |
//! | 6 | T | `t` |
//!
//! # Examples
//!
//! ```
//! use piece_tablegen_types::{Orientation, PieceKind};
//!
//! // Parse a kind letter (case-insensitive)
//! assert_eq!(PieceKind::from_char('z'), Some(PieceKind::Z));
//! assert_eq!(PieceKind::from_char('T'), Some(PieceKind::T));
//! assert_eq!(PieceKind::from_char('x'), None);
//!
//! // Orientation identity is positional: index modulo 4
//! assert_eq!(Orientation::from_index(0), Orientation::North);
//! assert_eq!(Orientation::from_index(5), Orientation::East);
//!
//! // Only the square piece carries a spawn-row correction
//! assert_eq!(PieceKind::O.spawn_row_correction(), 1);
//! assert_eq!(PieceKind::T.spawn_row_correction(), 0);
//! ```

use std::fmt;

/// Rows per diagram block (blocks are always exactly four rows tall)
pub const BLOCK_ROWS: u8 = 4;

/// Occupied cells per piece (a tetromino is four minoes)
pub const CELLS_PER_PIECE: usize = 4;

/// Offset of a single mino relative to the block-local origin, `(column, row)`
pub type MinoOffset = (u8, u8);

/// Shape of one piece orientation - 4 mino offsets, ascending row then column
///
/// The ordering is stable for emission, but consumers must treat the four
/// offsets as an unordered set.
pub type PieceShape = [MinoOffset; 4];

/// The seven tetromino piece kinds
///
/// Declaration order is the canonical diagram order (`z l o s i j t`), so
/// [`PieceKind::index`] doubles as the table row index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Z,
    L,
    O,
    S,
    I,
    J,
    T,
}

/// Per-kind vertical correction added to every row offset at assembly
///
/// Indexed by [`PieceKind::index`]. The source diagram draws the square
/// piece one row below the guideline spawn position; shifting its rows by
/// one re-aligns it with the other six kinds. Future per-kind corrections
/// are new table entries, not new code.
pub const SPAWN_ROW_CORRECTIONS: [u8; 7] = [0, 0, 1, 0, 0, 0, 0];

impl PieceKind {
    /// All kinds in canonical diagram order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::Z,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::I,
        PieceKind::J,
        PieceKind::T,
    ];

    /// Parse a kind from its diagram letter (case-insensitive)
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'z' => Some(PieceKind::Z),
            'l' => Some(PieceKind::L),
            'o' => Some(PieceKind::O),
            's' => Some(PieceKind::S),
            'i' => Some(PieceKind::I),
            'j' => Some(PieceKind::J),
            't' => Some(PieceKind::T),
            _ => None,
        }
    }

    /// Lowercase diagram letter
    pub fn as_char(&self) -> char {
        match self {
            PieceKind::Z => 'z',
            PieceKind::L => 'l',
            PieceKind::O => 'o',
            PieceKind::S => 's',
            PieceKind::I => 'i',
            PieceKind::J => 'j',
            PieceKind::T => 't',
        }
    }

    /// Position in the canonical order, `0..=6`
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Vertical correction for this kind, from [`SPAWN_ROW_CORRECTIONS`]
    pub fn spawn_row_correction(&self) -> u8 {
        SPAWN_ROW_CORRECTIONS[self.index()]
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// The four rotation states of a piece
///
/// - **North**: spawn orientation, the first block of each piece
/// - **East**: rotated 90 degrees clockwise
/// - **South**: rotated 180 degrees
/// - **West**: rotated 90 degrees counter-clockwise
///
/// Identity is purely positional: the decoder assigns the N-th block of
/// the input orientation index N modulo 4, trusting the diagram to list
/// states in this cycle. Displays as its index, which is how orientations
/// appear in emitted tables and error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    North,
    East,
    South,
    West,
}

impl Orientation {
    /// All orientations in cycle order
    pub const ALL: [Orientation; 4] = [
        Orientation::North,
        Orientation::East,
        Orientation::South,
        Orientation::West,
    ];

    /// Position in the cycle, `0..=3`
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Orientation at a block position, wrapping modulo 4
    pub fn from_index(i: usize) -> Self {
        Self::ALL[i % 4]
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}
