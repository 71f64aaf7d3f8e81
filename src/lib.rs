//! Piece tablegen (workspace facade crate).
//!
//! This package exposes the `piece_tablegen::{core,render,types}` public
//! API while the implementation lives in dedicated crates under `crates/`.

pub use piece_tablegen_core as core;
pub use piece_tablegen_render as render;
pub use piece_tablegen_types as types;
