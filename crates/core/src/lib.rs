//! Decoding pipeline - pure, deterministic, and testable
//!
//! This crate turns the ASCII orientation diagram into a fully populated
//! [`PieceTable`]. It has **zero dependencies** on I/O: callers hand it
//! text lines and receive either a complete table or a
//! [`StructuralInconsistency`].
//!
//! # Module Structure
//!
//! - [`decode`]: line recognition and the block/row counter state machine
//! - [`occupancy`]: per-row cell token classification
//! - [`assemble`]: block flattening, spawn correction, cardinality checks
//! - [`table`]: the accumulating 7x4 slot table
//! - [`error`]: the single structural error kind with per-cause variants
//!
//! # Pipeline
//!
//! Data flows strictly forward: raw text lines are grouped into four-row
//! blocks, each block's occupancy is extracted, and each closed block is
//! folded into the table. Decoding is single-pass and idempotent; the
//! same input always yields the same table.
//!
//! # Example
//!
//! ```
//! use piece_tablegen_core::DiagramDecoder;
//! use piece_tablegen_types::{Orientation, PieceKind};
//!
//! let diagram = "\
//! the square piece, drawn one row low in the source text
//! [ ,o,o, ]
//! [ ,o,o, ]
//! [ , , , ]
//! [ , , , ]
//! ";
//!
//! let mut decoder = DiagramDecoder::new();
//! for line in diagram.lines() {
//!     decoder.feed_line(line).unwrap();
//! }
//! let shape = decoder.table().get(PieceKind::O, Orientation::North);
//! assert_eq!(shape, Some([(1, 3), (2, 3), (1, 4), (2, 4)]));
//!
//! // finish() would fail here: 27 of the 28 slots are still missing.
//! assert!(decoder.finish().is_err());
//! ```

pub mod assemble;
pub mod decode;
pub mod error;
pub mod occupancy;
pub mod table;

pub use piece_tablegen_types as types;

// Re-export the pipeline surface for convenience
pub use decode::{decode_str, DiagramDecoder};
pub use error::StructuralInconsistency;
pub use occupancy::RowOccupancy;
pub use table::PieceTable;
