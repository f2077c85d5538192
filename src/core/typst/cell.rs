//! Cell and row rendering

use super::escape::escape_typst_inline;
use crate::core::model::{Align, Cell};

/// Render a cell as a Typst content block
///
/// Italic is applied before bold, so a bold italic cell reads
/// `#strong[#emph[...]]`. A `table.cell(align: ...)` wrapper is only emitted
/// when the cell's alignment differs from its column's.
pub fn render_cell(cell: &Cell, column_align: Align) -> String {
    let mut content = escape_typst_inline(&cell.text);
    if cell.is_italic() {
        content = format!("#emph[{content}]");
    }
    if cell.is_bold() {
        content = format!("#strong[{content}]");
    }

    match cell.align {
        Some(align) if align != column_align => {
            format!("table.cell(align: {})[{}]", align.to_typst(), content)
        }
        _ => format!("[{content}]"),
    }
}

/// Render a row as comma separated cells
pub fn render_row(row: &[Cell], column_aligns: &[Align]) -> String {
    row.iter()
        .enumerate()
        .map(|(i, cell)| render_cell(cell, column_aligns.get(i).copied().unwrap_or(Align::DEFAULT)))
        .collect::<Vec<_>>()
        .join(", ")
}
