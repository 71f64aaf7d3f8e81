//! Output wrappers for a decoded piece table.
//!
//! Everything here is mechanical: the decode pipeline produced the data,
//! these modules only choose punctuation for it.
//!
//! - [`emit`]: Rust-source and JSON table emitters
//! - [`diagram`]: ASCII dump of a table, for eyeballing a decode

pub mod diagram;
pub mod emit;

pub use piece_tablegen_core as core;
pub use piece_tablegen_types as types;

pub use diagram::render_diagram;
pub use emit::{emit_json, emit_rust};
