//! Feature modules built on top of the core model
//!
//! - JSON import/export of models
//! - Cell ranges, range patches and multi-row removal for grid editors

pub mod json;
pub mod selection;

// Re-export commonly used items
pub use json::{table_from_json, table_from_value, table_to_json, table_to_json_pretty};
pub use selection::{column_title, CellRange};
