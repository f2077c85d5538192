//! JSON import/export of table models
//!
//! Import is tolerant: ragged rows, out-of-range `headerRows`, `null`
//! spec/stroke entries and missing optional fields are repaired by
//! normalization. Export always writes the normalized shape.

use crate::core::model::{normalize_table_model, TableModel, TableModelInit};
use crate::utils::error::TableResult;

/// Parse and normalize a model from JSON
pub fn table_from_json(input: &str) -> TableResult<TableModel> {
    let init: TableModelInit = serde_json::from_str(input)?;
    normalize_table_model(init)
}

/// Parse a model from an already decoded JSON value
pub fn table_from_value(value: serde_json::Value) -> TableResult<TableModel> {
    let init: TableModelInit = serde_json::from_value(value)?;
    normalize_table_model(init)
}

/// Compact JSON of the normalized model
pub fn table_to_json(model: &TableModel) -> TableResult<String> {
    Ok(serde_json::to_string(model)?)
}

/// Indented JSON of the normalized model
pub fn table_to_json_pretty(model: &TableModel) -> TableResult<String> {
    Ok(serde_json::to_string_pretty(model)?)
}
