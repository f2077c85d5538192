//! Typst table export
//!
//! Renders a [`TableModel`] into a `#table(...)` call, optionally wrapped in
//! `#figure(...)` when the table has a caption.
//!
//! - Column widths become `columns: (auto | <n>pt, ...)`.
//! - `align: (...)` only appears when some column deviates from `left`.
//! - Header rows go into `table.header(...)`.
//! - Row/column strokes become `table.hline` / `table.vline` calls.
//!
//! # Example
//!
//! ```
//! use tytable::{create_empty_table, render_table_model_to_typst, EmptyTableOptions, TypstExportOptions};
//!
//! let model = create_empty_table(1, 2, EmptyTableOptions::default()).unwrap();
//! let typst = render_table_model_to_typst(&model, &TypstExportOptions::default());
//! assert!(typst.starts_with("#table("));
//! ```

mod cell;
mod escape;
mod format;
mod lines;


use serde::{Deserialize, Serialize};

use crate::core::model::{normalize_table_model, Align, ColumnWidth, TableModel, TableModelInit};
use crate::utils::error::TableResult;

// Re-export public API
pub use cell::{render_cell, render_row};
pub use escape::escape_typst_inline;
pub use format::{format_array, format_numeric, format_points};
pub use lines::{collect_stroke_commands, BoundaryLine, StrokeCommands};

/// Formatting options for [`render_table_model_to_typst`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TypstExportOptions {
    /// Indentation for nested lines
    pub indent: String,
    /// `repeat` flag of `table.header`, so long tables keep their headings
    /// across pages
    pub repeat_header: bool,
    /// Wrap captioned tables in `#figure` with `caption: [...]`
    pub wrap_figure: bool,
}

impl Default for TypstExportOptions {
    fn default() -> Self {
        Self {
            indent: "  ".to_string(),
            repeat_header: true,
            wrap_figure: true,
        }
    }
}

impl TypstExportOptions {
    /// Bare `#table(...)` without figure wrapping, for callers that place the
    /// caption themselves
    pub fn table_only() -> Self {
        Self {
            wrap_figure: false,
            ..Default::default()
        }
    }

    /// Indent with `width` spaces
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent = " ".repeat(width);
        self
    }
}

/// Render a model to Typst code
pub fn render_table_model_to_typst(model: &TableModel, options: &TypstExportOptions) -> String {
    let indent = options.indent.as_str();

    match model.caption() {
        Some(caption) if options.wrap_figure => {
            log::trace!("wrapping table in figure");
            let mut lines = vec!["#figure(".to_string()];
            let mut table = render_table_lines(model, indent, options.repeat_header, "");
            if let Some(last) = table.last_mut() {
                last.push(',');
            }
            lines.extend(format::indent_lines(table, indent));
            lines.push(format!(
                "{indent}caption: [{}],",
                escape_typst_inline(caption)
            ));
            lines.push(")".to_string());
            lines.join("\n")
        }
        _ => render_table_lines(model, indent, options.repeat_header, "#").join("\n"),
    }
}

/// Normalize loose input, then render it
///
/// For models that did not go through the model algebra (ragged rows,
/// out-of-range header counts, ...).
pub fn render_table_init_to_typst(
    init: TableModelInit,
    options: &TypstExportOptions,
) -> TableResult<String> {
    let model = normalize_table_model(init)?;
    Ok(render_table_model_to_typst(&model, options))
}

/// Resolved `columns:` entries
pub fn column_widths(model: &TableModel) -> Vec<String> {
    (0..model.column_count())
        .map(|i| {
            let width = model
                .column_spec(i)
                .and_then(|spec| spec.width)
                .unwrap_or(ColumnWidth::Auto);
            format::format_width(width)
        })
        .collect()
}

/// Resolved per-column alignment (`left` when unset)
pub fn column_aligns(model: &TableModel) -> Vec<Align> {
    (0..model.column_count())
        .map(|i| {
            model
                .column_spec(i)
                .and_then(|spec| spec.align)
                .unwrap_or(Align::DEFAULT)
        })
        .collect()
}

/// Lines of the `table(...)` call; `prefix` is `#` in markup position
fn render_table_lines(
    model: &TableModel,
    indent: &str,
    repeat_header: bool,
    prefix: &str,
) -> Vec<String> {
    let mut lines = vec![format!("{prefix}table(")];

    lines.push(format!(
        "{indent}columns: {},",
        format_array(&column_widths(model))
    ));

    let aligns = column_aligns(model);
    if aligns.iter().any(|align| *align != Align::DEFAULT) {
        let items: Vec<String> = aligns.iter().map(|a| a.to_typst().to_string()).collect();
        lines.push(format!("{indent}align: {},", format_array(&items)));
    }

    let header_rows = model.header_rows();
    if header_rows > 0 {
        lines.push(format!("{indent}table.header("));
        lines.push(format!("{indent}{indent}repeat: {repeat_header},"));
        for row in &model.rows()[..header_rows] {
            lines.push(format!("{indent}{indent}{},", render_row(row, &aligns)));
        }
        lines.push(format!("{indent}),"));
    }

    let commands = collect_stroke_commands(model);
    for line in &commands.hlines {
        lines.push(format!("{indent}{},", line.to_hline()));
    }
    for line in &commands.vlines {
        lines.push(format!("{indent}{},", line.to_vline()));
    }

    for row in &model.rows()[header_rows..] {
        lines.push(format!("{indent}{},", render_row(row, &aligns)));
    }

    lines.push(")".to_string());
    lines
}
