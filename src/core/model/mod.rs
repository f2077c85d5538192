//! Table model
//!
//! An immutable-update table structure. Every constructor and every mutation
//! funnels through [`normalize_table_model`], so a [`TableModel`] value always
//! satisfies the shape invariants:
//!
//! - at least one row and one column, every row exactly `column_count` cells long
//! - `header_rows` within `[0, row_count]` (zero stored as absent)
//! - no empty caption
//! - column specs and stroke arrays either absent or sized to the table, with
//!   non-positive widths/strokes discarded
//!
//! # Architecture
//!
//! ```text
//! TableModelInit (loose, ragged) -> normalize_table_model -> TableModel
//! TableModel -> to_init -> edit -> normalize_table_model -> TableModel
//! ```

mod cell;
mod column;
mod ops;
mod stroke;


use serde::{Deserialize, Serialize};

use crate::utils::error::{check_index, Axis, TableError, TableResult};

// Re-export public API
pub use cell::{Align, Cell, CellPatch};
pub use column::{ColumnSpec, ColumnWidth};
pub use stroke::{ColumnStroke, RowStroke, StrokeValue, TableStrokes, TableStrokesInit};

pub(crate) use cell::fit_row;

/// Integral pt values are written to JSON without a fractional part
fn whole_points(pt: f64) -> Option<i64> {
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;
    (pt.fract() == 0.0 && pt.abs() < MAX_EXACT).then_some(pt as i64)
}

/// Coordinates of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellPosition {
    pub row_index: usize,
    pub column_index: usize,
}

impl CellPosition {
    pub fn new(row_index: usize, column_index: usize) -> Self {
        CellPosition {
            row_index,
            column_index,
        }
    }
}

/// Row and column counts of a table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableDimensions {
    pub row_count: usize,
    pub column_count: usize,
}

/// Loose input shape accepted by the normalizer and by JSON import
///
/// Rows may be ragged, the header count may be negative or too large, and
/// spec/stroke entries may be `null` or sized differently from the table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableModelInit {
    #[serde(default)]
    pub rows: Vec<Vec<Cell>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_rows: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_specs: Option<Vec<Option<ColumnSpec>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strokes: Option<TableStrokesInit>,
}

impl TableModelInit {
    pub fn new(rows: Vec<Vec<Cell>>) -> Self {
        TableModelInit {
            rows,
            ..Default::default()
        }
    }
}

/// Extra settings for [`create_empty_table`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmptyTableOptions {
    pub header_rows: Option<usize>,
    pub caption: Option<String>,
    pub column_specs: Option<Vec<Option<ColumnSpec>>>,
    pub strokes: Option<TableStrokesInit>,
}

/// A normalized table
///
/// Fields are private; use the accessors and the mutation methods, each of
/// which returns a new model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "TableModelInit")]
pub struct TableModel {
    rows: Vec<Vec<Cell>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    header_rows: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    column_specs: Option<Vec<ColumnSpec>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    strokes: Option<TableStrokes>,
}

impl TryFrom<TableModelInit> for TableModel {
    type Error = TableError;

    fn try_from(init: TableModelInit) -> Result<Self, Self::Error> {
        normalize_table_model(init)
    }
}

impl From<TableModel> for TableModelInit {
    fn from(model: TableModel) -> Self {
        TableModelInit {
            rows: model.rows,
            header_rows: model.header_rows.map(|n| n as i64),
            caption: model.caption,
            column_specs: model
                .column_specs
                .map(|specs| specs.into_iter().map(Some).collect()),
            strokes: model.strokes.map(TableStrokesInit::from),
        }
    }
}

/// Create a table filled with blank cells
///
/// Fails with a domain error when either count is zero.
pub fn create_empty_table(
    row_count: usize,
    column_count: usize,
    options: EmptyTableOptions,
) -> TableResult<TableModel> {
    if row_count == 0 {
        return Err(TableError::empty(Axis::Row));
    }
    if column_count == 0 {
        return Err(TableError::empty(Axis::Column));
    }

    normalize_table_model(TableModelInit {
        rows: vec![vec![Cell::empty(); column_count]; row_count],
        header_rows: options.header_rows.map(|n| n as i64),
        caption: options.caption,
        column_specs: options.column_specs,
        strokes: options.strokes,
    })
}

/// Build a normalized model from loose input
pub fn create_table_model(init: TableModelInit) -> TableResult<TableModel> {
    normalize_table_model(init)
}

/// The single normalization chokepoint
///
/// Repairs ragged rows, out-of-range header counts, mis-sized spec/stroke
/// arrays and empty captions. Fails only when there is no row or no column.
pub fn normalize_table_model(init: TableModelInit) -> TableResult<TableModel> {
    if init.rows.is_empty() {
        return Err(TableError::empty(Axis::Row));
    }
    let column_count = init.rows.iter().map(Vec::len).max().unwrap_or(0);
    if column_count == 0 {
        return Err(TableError::empty(Axis::Column));
    }
    Ok(assemble(init, column_count))
}

/// Normalize input whose rows are known to be non-empty
fn assemble(init: TableModelInit, column_count: usize) -> TableModel {
    if init.rows.iter().any(|row| row.len() != column_count) {
        log::debug!("fitting ragged rows to {column_count} columns");
    }
    let rows: Vec<Vec<Cell>> = init
        .rows
        .into_iter()
        .map(|row| fit_row(row, column_count))
        .collect();
    let row_count = rows.len();

    let requested = init.header_rows.unwrap_or(0);
    let header_rows = requested.clamp(0, row_count as i64) as usize;
    if header_rows as i64 != requested {
        log::debug!("clamping header rows from {requested} to {header_rows}");
    }

    TableModel {
        rows,
        header_rows: (header_rows > 0).then_some(header_rows),
        caption: init.caption.filter(|caption| !caption.is_empty()),
        column_specs: normalize_column_specs(init.column_specs, column_count),
        strokes: normalize_strokes(init.strokes, row_count, column_count),
    }
}

fn normalize_column_specs(
    specs: Option<Vec<Option<ColumnSpec>>>,
    column_count: usize,
) -> Option<Vec<ColumnSpec>> {
    let specs = specs.filter(|specs| !specs.is_empty())?;
    let normalized: Vec<ColumnSpec> = (0..column_count)
        .map(|i| match specs.get(i) {
            Some(Some(spec)) => spec.normalized(),
            _ => ColumnSpec::default(),
        })
        .collect();

    normalized
        .iter()
        .any(ColumnSpec::has_values)
        .then_some(normalized)
}

fn normalize_strokes(
    strokes: Option<TableStrokesInit>,
    row_count: usize,
    column_count: usize,
) -> Option<TableStrokes> {
    let strokes = strokes?;
    let rows = stroke::fit_strokes(strokes.rows.as_deref(), row_count, RowStroke::normalized)
        .filter(|rows| rows.iter().any(RowStroke::has_values));
    let columns = stroke::fit_strokes(
        strokes.columns.as_deref(),
        column_count,
        ColumnStroke::normalized,
    )
    .filter(|columns| columns.iter().any(ColumnStroke::has_values));

    if rows.is_none() && columns.is_none() {
        return None;
    }
    Some(TableStrokes { rows, columns })
}

impl TableModel {
    /// Current number of rows and columns
    pub fn dimensions(&self) -> TableDimensions {
        TableDimensions {
            row_count: self.row_count(),
            column_count: self.column_count(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn row(&self, row_index: usize) -> TableResult<&[Cell]> {
        check_index(Axis::Row, row_index, self.row_count())?;
        Ok(&self.rows[row_index])
    }

    pub fn cell(&self, position: CellPosition) -> TableResult<&Cell> {
        check_index(Axis::Row, position.row_index, self.row_count())?;
        check_index(Axis::Column, position.column_index, self.column_count())?;
        Ok(&self.rows[position.row_index][position.column_index])
    }

    /// Number of header rows (zero when the table has no header)
    pub fn header_rows(&self) -> usize {
        self.header_rows.unwrap_or(0)
    }

    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    pub fn column_specs(&self) -> Option<&[ColumnSpec]> {
        self.column_specs.as_deref()
    }

    pub fn column_spec(&self, column_index: usize) -> Option<&ColumnSpec> {
        self.column_specs.as_ref()?.get(column_index)
    }

    pub fn strokes(&self) -> Option<&TableStrokes> {
        self.strokes.as_ref()
    }

    pub fn row_strokes(&self) -> Option<&[RowStroke]> {
        self.strokes.as_ref()?.rows.as_deref()
    }

    pub fn column_strokes(&self) -> Option<&[ColumnStroke]> {
        self.strokes.as_ref()?.columns.as_deref()
    }

    /// Loose copy of this model, ready to be edited and re-normalized
    pub fn to_init(&self) -> TableModelInit {
        TableModelInit::from(self.clone())
    }

    /// Re-normalize an edited copy whose column count is unchanged
    fn rebuild(&self, init: TableModelInit) -> TableModel {
        assemble(init, self.column_count())
    }
}
