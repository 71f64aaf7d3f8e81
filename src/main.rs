//! Diagram compiler (default binary).
//!
//! Reads the ASCII orientation diagram from standard input and writes the
//! offset table to standard output. No flags; configuration, where it
//! exists at all, follows the environment-variable convention:
//!
//! - `PIECE_TABLEGEN_FORMAT`: `rust` (default) or `json`
//! - `PIECE_TABLEGEN_DUMP`: set to "1" or "true" to echo the decoded
//!   table to stderr as an ASCII diagram
//!
//! Any structural inconsistency in the input aborts the run with a
//! non-zero exit status and nothing on stdout.

use std::env;
use std::io::{self, Read};

use anyhow::{bail, Result};

use piece_tablegen::core::decode_str;
use piece_tablegen::render::{emit_json, emit_rust, render_diagram};

/// Output format selected via `PIECE_TABLEGEN_FORMAT`.
enum Format {
    Rust,
    Json,
}

fn format_from_env() -> Result<Format> {
    match env::var("PIECE_TABLEGEN_FORMAT") {
        Ok(value) => match value.to_ascii_lowercase().as_str() {
            "rust" => Ok(Format::Rust),
            "json" => Ok(Format::Json),
            other => bail!("PIECE_TABLEGEN_FORMAT: unknown format {other:?}"),
        },
        Err(_) => Ok(Format::Rust),
    }
}

fn dump_enabled() -> bool {
    matches!(
        env::var("PIECE_TABLEGEN_DUMP").as_deref(),
        Ok("1") | Ok("true")
    )
}

fn main() -> Result<()> {
    let format = format_from_env()?;

    let mut input = String::new();
    io::stdin().lock().read_to_string(&mut input)?;
    let table = decode_str(&input)?;

    if dump_enabled() {
        eprint!("{}", render_diagram(&table));
    }

    let rendered = match format {
        Format::Rust => emit_rust(&table)?,
        Format::Json => emit_json(&table)?,
    };
    print!("{rendered}");
    Ok(())
}
