//! Visual dump - renders decoded shapes back as bracketed diagram rows.
//!
//! Intended for eyeballing a decode against the source text. Rows print
//! top line first, matching the input convention; the grid grows taller
//! than four rows when a spawn-row correction pushed cells past row 3
//! (the square piece). Works on partial tables, which is exactly when a
//! human wants to look at one.

use piece_tablegen_types::{Orientation, PieceKind, BLOCK_ROWS};

use piece_tablegen_core::PieceTable;

/// Render every populated slot of `table` as an ASCII diagram.
pub fn render_diagram(table: &PieceTable) -> String {
    let mut out = String::new();
    for kind in PieceKind::ALL {
        for orientation in Orientation::ALL {
            let Some(shape) = table.get(kind, orientation) else {
                continue;
            };

            out.push_str(&format!("piece '{kind}' orientation {orientation}\n"));

            let mut height = BLOCK_ROWS;
            let mut width = BLOCK_ROWS;
            for &(column, row) in shape.iter() {
                height = height.max(row + 1);
                width = width.max(column + 1);
            }

            for row in (0..height).rev() {
                out.push('[');
                for column in 0..width {
                    if column > 0 {
                        out.push(',');
                    }
                    if shape.contains(&(column, row)) {
                        out.push(kind.as_char());
                    } else {
                        out.push(' ');
                    }
                }
                out.push_str("]\n");
            }
            out.push('\n');
        }
    }
    out
}
