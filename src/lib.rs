//! # tytable
//!
//! Table model and Typst table serializer written in Rust.
//!
//! ## Features
//!
//! - **Normalized Model**: every table value keeps rectangular rows, a clamped
//!   header count and column/stroke arrays sized to the grid
//! - **Immutable Edits**: cell, row, column, header, caption and stroke updates
//!   return a fresh model
//! - **Typst Export**: `#table(...)` with `table.header`, `table.hline`,
//!   `table.vline`, per-cell alignment and `#figure` captions
//! - **JSON Interchange**: tolerant import, normalized export
//! - **WASM Support**: compiles to WebAssembly for browser editors
//!
//! ## Usage Examples
//!
//! ### Building and Rendering a Table
//!
//! ```rust
//! use tytable::{create_empty_table, render_table_model_to_typst};
//! use tytable::{CellPatch, CellPosition, EmptyTableOptions, RowStroke, TypstExportOptions};
//!
//! let model = create_empty_table(3, 2, EmptyTableOptions { header_rows: Some(1), ..Default::default() })
//!     .unwrap()
//!     .patch_cell(CellPosition::new(0, 1), &CellPatch::text("Value"))
//!     .unwrap()
//!     .update_row_stroke(0, Some(RowStroke::bottom(0.6)))
//!     .unwrap();
//!
//! let typst = render_table_model_to_typst(&model, &TypstExportOptions::default());
//! assert!(typst.contains("table.hline(y: 1, stroke: 0.6pt)"));
//! ```
//!
//! ### From JSON
//!
//! ```rust
//! use tytable::{table_from_json, table_to_json};
//!
//! let model = table_from_json(r#"{"rows": [[{"text": "a"}, {"text": "b"}], [{"text": "c"}]]}"#).unwrap();
//! assert_eq!(model.column_count(), 2);
//! assert_eq!(
//!     table_to_json(&model).unwrap(),
//!     r#"{"rows":[[{"text":"a"},{"text":"b"}],[{"text":"c"},{"text":""}]]}"#
//! );
//! ```

/// Core modules: model and Typst serializer
pub mod core;

/// Feature modules: JSON interchange and selections
pub mod features;

/// Utility modules
pub mod utils;

/// WASM bindings (feature-gated)
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export the model
pub use core::model::{
    create_empty_table, create_table_model, normalize_table_model, Align, Cell, CellPatch,
    CellPosition, ColumnSpec, ColumnStroke, ColumnWidth, EmptyTableOptions, RowStroke,
    StrokeValue, TableDimensions, TableModel, TableModelInit, TableStrokes, TableStrokesInit,
};

// Re-export the serializer
pub use core::typst;
pub use core::typst::{
    escape_typst_inline, render_table_init_to_typst, render_table_model_to_typst,
    TypstExportOptions,
};

// Re-export feature modules
pub use features::json::{table_from_json, table_from_value, table_to_json, table_to_json_pretty};
pub use features::selection::{column_title, CellRange};

// Re-export utilities
pub use utils::error::{Axis, TableError, TableResult};

/// Render model JSON straight to Typst
///
/// Shorthand for [`table_from_json`] followed by [`render_table_model_to_typst`].
pub fn json_to_typst(input: &str, options: &TypstExportOptions) -> TableResult<String> {
    let model = table_from_json(input)?;
    Ok(render_table_model_to_typst(&model, options))
}
