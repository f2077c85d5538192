//! Model algebra: pure mutations returning a new normalized model

use super::{
    assemble, fit_row, Cell, CellPatch, CellPosition, ColumnSpec, ColumnStroke, RowStroke,
    TableModel, TableStrokes, TableStrokesInit,
};
use crate::utils::error::{check_index, check_insert_index, Axis, TableError, TableResult};

impl TableModel {
    /// Replace one cell with the result of `updater`
    pub fn update_cell<F>(&self, position: CellPosition, updater: F) -> TableResult<TableModel>
    where
        F: FnOnce(Cell) -> Cell,
    {
        let cell = self.cell(position)?.clone();
        let mut init = self.to_init();
        init.rows[position.row_index][position.column_index] = updater(cell);
        Ok(self.rebuild(init))
    }

    /// Shallow-merge `patch` into one cell
    pub fn patch_cell(&self, position: CellPosition, patch: &CellPatch) -> TableResult<TableModel> {
        self.update_cell(position, |cell| cell.apply(patch))
    }

    /// Insert a row at `row_index` (`row_count` appends)
    ///
    /// The row is padded or truncated to the column count. When the table has a
    /// header, inserting at or above its last row grows the header.
    pub fn insert_row(&self, row_index: usize, row: Option<Vec<Cell>>) -> TableResult<TableModel> {
        check_insert_index(Axis::Row, row_index, self.row_count())?;

        let mut init = self.to_init();
        init.rows
            .insert(row_index, fit_row(row.unwrap_or_default(), self.column_count()));
        let header_rows = self.header_rows();
        if header_rows > 0 && row_index <= header_rows {
            init.header_rows = Some(header_rows as i64 + 1);
        }
        if let Some(rows) = init.strokes.as_mut().and_then(|s| s.rows.as_mut()) {
            rows.insert(row_index, None);
        }
        Ok(self.rebuild(init))
    }

    /// Remove the row at `row_index`
    ///
    /// Fails with a bounds error for an invalid index and with a domain error
    /// when it is the last row.
    pub fn remove_row(&self, row_index: usize) -> TableResult<TableModel> {
        check_index(Axis::Row, row_index, self.row_count())?;
        if self.row_count() <= 1 {
            return Err(TableError::last_entry(Axis::Row));
        }

        let mut init = self.to_init();
        init.rows.remove(row_index);
        let header_rows = self.header_rows();
        if row_index < header_rows {
            init.header_rows = Some(header_rows as i64 - 1);
        }
        if let Some(rows) = init.strokes.as_mut().and_then(|s| s.rows.as_mut()) {
            rows.remove(row_index);
        }
        Ok(self.rebuild(init))
    }

    /// Insert a column at `column_index` (`column_count` appends)
    ///
    /// `column` supplies cells top to bottom; missing entries are blank. Column
    /// specs and column strokes get a blank entry at the same index.
    pub fn insert_column(
        &self,
        column_index: usize,
        column: Option<Vec<Cell>>,
    ) -> TableResult<TableModel> {
        let column_count = self.column_count();
        check_insert_index(Axis::Column, column_index, column_count)?;

        let mut init = self.to_init();
        let mut column = column.unwrap_or_default().into_iter();
        for row in &mut init.rows {
            row.insert(column_index, column.next().unwrap_or_default());
        }
        if let Some(specs) = init.column_specs.as_mut() {
            specs.insert(column_index, None);
        }
        if let Some(columns) = init.strokes.as_mut().and_then(|s| s.columns.as_mut()) {
            columns.insert(column_index, None);
        }
        Ok(assemble(init, column_count + 1))
    }

    /// Remove the column at `column_index` together with its spec and stroke entry
    pub fn remove_column(&self, column_index: usize) -> TableResult<TableModel> {
        let column_count = self.column_count();
        check_index(Axis::Column, column_index, column_count)?;
        if column_count <= 1 {
            return Err(TableError::last_entry(Axis::Column));
        }

        let mut init = self.to_init();
        for row in &mut init.rows {
            row.remove(column_index);
        }
        if let Some(specs) = init.column_specs.as_mut() {
            specs.remove(column_index);
        }
        if let Some(columns) = init.strokes.as_mut().and_then(|s| s.columns.as_mut()) {
            columns.remove(column_index);
        }
        Ok(assemble(init, column_count - 1))
    }

    /// Set the header row count, clamped into `[0, row_count]`
    pub fn set_header_rows(&self, header_rows: usize) -> TableModel {
        let mut init = self.to_init();
        init.header_rows = Some(i64::try_from(header_rows).unwrap_or(i64::MAX));
        self.rebuild(init)
    }

    /// Set or clear the caption; `None` and `""` both clear it
    pub fn set_caption(&self, caption: Option<&str>) -> TableModel {
        let mut init = self.to_init();
        init.caption = caption.map(str::to_string);
        self.rebuild(init)
    }

    /// Replace one column's spec; `None` clears all hints for the column
    pub fn update_column_spec(
        &self,
        column_index: usize,
        spec: Option<ColumnSpec>,
    ) -> TableResult<TableModel> {
        let column_count = self.column_count();
        check_index(Axis::Column, column_index, column_count)?;

        let mut init = self.to_init();
        let specs = init
            .column_specs
            .get_or_insert_with(|| vec![None; column_count]);
        specs[column_index] = spec;
        Ok(self.rebuild(init))
    }

    /// Replace one row's stroke entry; `None` clears it
    pub fn update_row_stroke(
        &self,
        row_index: usize,
        stroke: Option<RowStroke>,
    ) -> TableResult<TableModel> {
        let row_count = self.row_count();
        check_index(Axis::Row, row_index, row_count)?;

        let mut init = self.to_init();
        let rows = init
            .strokes
            .get_or_insert_with(TableStrokesInit::default)
            .rows
            .get_or_insert_with(|| vec![None; row_count]);
        rows[row_index] = stroke;
        Ok(self.rebuild(init))
    }

    /// Replace one column's stroke entry; `None` clears it
    pub fn update_column_stroke(
        &self,
        column_index: usize,
        stroke: Option<ColumnStroke>,
    ) -> TableResult<TableModel> {
        let column_count = self.column_count();
        check_index(Axis::Column, column_index, column_count)?;

        let mut init = self.to_init();
        let columns = init
            .strokes
            .get_or_insert_with(TableStrokesInit::default)
            .columns
            .get_or_insert_with(|| vec![None; column_count]);
        columns[column_index] = stroke;
        Ok(self.rebuild(init))
    }

    /// Replace the whole stroke configuration
    pub fn set_strokes(&self, strokes: Option<TableStrokes>) -> TableModel {
        let mut init = self.to_init();
        init.strokes = strokes.map(TableStrokesInit::from);
        self.rebuild(init)
    }
}
