//! Core table modules
//!
//! - `model`: the normalized table structure and its immutable operations
//! - `typst`: rendering a model to Typst `#table(...)` markup

pub mod model;
pub mod typst;

// Re-export main types and functions from model
pub use model::{
    create_empty_table, create_table_model, normalize_table_model, Align, Cell, CellPatch,
    CellPosition, ColumnSpec, ColumnStroke, ColumnWidth, EmptyTableOptions, RowStroke,
    StrokeValue, TableDimensions, TableModel, TableModelInit, TableStrokes, TableStrokesInit,
};

// Re-export main types and functions from typst
pub use typst::{render_table_init_to_typst, render_table_model_to_typst, TypstExportOptions};
