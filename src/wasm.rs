//! WASM bindings for tytable
//!
//! JavaScript-accessible functions for browser table editors. Models cross
//! the boundary as JSON strings; render options as plain JS objects.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "wasm")]
use crate::{
    create_empty_table, render_table_model_to_typst, table_from_json, table_to_json,
    EmptyTableOptions, TableResult, TypstExportOptions,
};

/// Render options (exposed to WASM)
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderOptions {
    /// Spaces per indentation level
    #[serde(default = "default_indent")]
    pub indent: usize,
    /// Repeat header rows on every page
    #[serde(default = "default_true")]
    pub repeat_header: bool,
    /// Wrap captioned tables in a figure
    #[serde(default = "default_true")]
    pub wrap_figure: bool,
}

#[cfg(feature = "wasm")]
impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent: default_indent(),
            repeat_header: true,
            wrap_figure: true,
        }
    }
}

#[cfg(feature = "wasm")]
impl From<RenderOptions> for TypstExportOptions {
    fn from(options: RenderOptions) -> Self {
        TypstExportOptions {
            repeat_header: options.repeat_header,
            wrap_figure: options.wrap_figure,
            ..Default::default()
        }
        .with_indent_width(options.indent)
    }
}

#[cfg(feature = "wasm")]
fn default_true() -> bool {
    true
}

#[cfg(feature = "wasm")]
fn default_indent() -> usize {
    2
}

/// Render or normalize result
#[cfg(feature = "wasm")]
#[derive(Debug, Serialize, Deserialize)]
pub struct RenderResult {
    /// Typst code or normalized JSON
    pub output: String,
    /// Whether the call succeeded
    pub success: bool,
    /// Error message on failure
    pub error: Option<String>,
}

#[cfg(feature = "wasm")]
impl From<TableResult<String>> for RenderResult {
    fn from(result: TableResult<String>) -> Self {
        match result {
            Ok(output) => RenderResult {
                output,
                success: true,
                error: None,
            },
            Err(e) => RenderResult {
                output: String::new(),
                success: false,
                error: Some(e.to_string()),
            },
        }
    }
}

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Render model JSON to Typst
///
/// Malformed options fall back to the defaults.
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "renderTableJson")]
pub fn render_table_json_wasm(input: &str, options: JsValue) -> JsValue {
    let opts: RenderOptions = serde_wasm_bindgen::from_value(options).unwrap_or_default();
    let result = render_json(input, opts.into());
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

/// Normalize model JSON
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "normalizeTableJson")]
pub fn normalize_table_json_wasm(input: &str) -> JsValue {
    let result = normalize_json(input);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

/// JSON of an empty `rows` x `columns` model
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "createEmptyTableJson")]
pub fn create_empty_table_json_wasm(rows: usize, columns: usize) -> JsValue {
    let result = empty_json(rows, columns);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

/// Get version information
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "getVersion")]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(feature = "wasm")]
fn render_json(input: &str, options: TypstExportOptions) -> RenderResult {
    table_from_json(input)
        .map(|model| render_table_model_to_typst(&model, &options))
        .into()
}

#[cfg(feature = "wasm")]
fn normalize_json(input: &str) -> RenderResult {
    table_from_json(input)
        .and_then(|model| table_to_json(&model))
        .into()
}

#[cfg(feature = "wasm")]
fn empty_json(rows: usize, columns: usize) -> RenderResult {
    create_empty_table(rows, columns, EmptyTableOptions::default())
        .and_then(|model| table_to_json(&model))
        .into()
}
