//! Cell ranges and bulk edits
//!
//! Grid front-ends select rectangular ranges and apply one style change to
//! every cell in them, or delete several rows at once.

use serde::{Deserialize, Serialize};

use crate::core::model::{CellPatch, CellPosition, TableModel};
use crate::utils::error::{check_index, Axis, TableError, TableResult};

/// Rectangular cell range given by two corners (inclusive, in any order)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRange {
    pub start: CellPosition,
    pub end: CellPosition,
}

impl CellRange {
    pub fn new(start: CellPosition, end: CellPosition) -> Self {
        CellRange { start, end }
    }

    /// A range covering one cell
    pub fn single(position: CellPosition) -> Self {
        CellRange::new(position, position)
    }

    /// Clamp the corners into the table and order them
    ///
    /// Returns `None` when both corners lie outside the table.
    pub fn normalize(&self, model: &TableModel) -> Option<CellRange> {
        let dims = model.dimensions();
        let inside = |p: &CellPosition| p.row_index < dims.row_count && p.column_index < dims.column_count;
        if !inside(&self.start) && !inside(&self.end) {
            return None;
        }

        let clamp = |p: &CellPosition| {
            CellPosition::new(
                p.row_index.min(dims.row_count - 1),
                p.column_index.min(dims.column_count - 1),
            )
        };
        let (a, b) = (clamp(&self.start), clamp(&self.end));

        Some(CellRange {
            start: CellPosition::new(a.row_index.min(b.row_index), a.column_index.min(b.column_index)),
            end: CellPosition::new(a.row_index.max(b.row_index), a.column_index.max(b.column_index)),
        })
    }

    /// Positions of the range in row-major order, as given (not clamped)
    pub fn positions(&self) -> impl Iterator<Item = CellPosition> {
        let rows = self.start.row_index.min(self.end.row_index)..=self.start.row_index.max(self.end.row_index);
        let columns = self.start.column_index.min(self.end.column_index)
            ..=self.start.column_index.max(self.end.column_index);
        rows.flat_map(move |row| columns.clone().map(move |column| CellPosition::new(row, column)))
    }
}

impl TableModel {
    /// Apply `patch` to every cell of `range`
    ///
    /// The range is normalized first; a range entirely outside the table
    /// leaves the model unchanged.
    pub fn patch_range(&self, range: &CellRange, patch: &CellPatch) -> TableResult<TableModel> {
        let Some(range) = range.normalize(self) else {
            log::debug!("range {range:?} lies outside the table");
            return Ok(self.clone());
        };

        range
            .positions()
            .try_fold(self.clone(), |model, position| model.patch_cell(position, patch))
    }

    /// Remove several rows at once
    ///
    /// Every index is validated before anything is removed, so the call either
    /// removes all requested rows or fails leaving the model untouched.
    /// Duplicates are ignored. Rows are removed from the highest index down.
    pub fn remove_rows(&self, row_indices: &[usize]) -> TableResult<TableModel> {
        let row_count = self.row_count();
        for &index in row_indices {
            check_index(Axis::Row, index, row_count)?;
        }

        let mut indices = row_indices.to_vec();
        indices.sort_unstable();
        indices.dedup();
        if indices.len() >= row_count {
            return Err(TableError::last_entry(Axis::Row));
        }

        indices
            .into_iter()
            .rev()
            .try_fold(self.clone(), |model, index| model.remove_row(index))
    }
}

/// Spreadsheet-style column title: 0 → `A`, 25 → `Z`, 26 → `AA`
pub fn column_title(index: usize) -> String {
    let mut title = Vec::new();
    let mut n = index + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        title.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    title.reverse();
    String::from_utf8_lossy(&title).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{create_empty_table, Cell, EmptyTableOptions};
    use pretty_assertions::assert_eq;

    fn model(rows: usize, columns: usize) -> TableModel {
        create_empty_table(rows, columns, EmptyTableOptions::default()).unwrap()
    }

    #[test]
    fn test_normalize_orders_and_clamps() {
        let table = model(3, 3);
        let range = CellRange::new(CellPosition::new(2, 5), CellPosition::new(0, 1));
        assert_eq!(
            range.normalize(&table),
            Some(CellRange::new(CellPosition::new(0, 1), CellPosition::new(2, 2)))
        );
    }

    #[test]
    fn test_normalize_outside() {
        let table = model(2, 2);
        let range = CellRange::new(CellPosition::new(5, 5), CellPosition::new(2, 7));
        assert_eq!(range.normalize(&table), None);
    }

    #[test]
    fn test_positions() {
        let range = CellRange::new(CellPosition::new(1, 1), CellPosition::new(0, 0));
        let positions: Vec<_> = range.positions().collect();
        assert_eq!(
            positions,
            vec![
                CellPosition::new(0, 0),
                CellPosition::new(0, 1),
                CellPosition::new(1, 0),
                CellPosition::new(1, 1),
            ]
        );
    }

    #[test]
    fn test_patch_range() {
        let table = model(3, 3);
        let range = CellRange::new(CellPosition::new(0, 0), CellPosition::new(1, 1));
        let bolded = table.patch_range(&range, &CellPatch::bold(true)).unwrap();

        assert!(bolded.rows()[1][1].is_bold());
        assert!(!bolded.rows()[2][0].is_bold());
        assert!(!bolded.rows()[0][2].is_bold());

        let outside = CellRange::single(CellPosition::new(9, 9));
        assert_eq!(table.patch_range(&outside, &CellPatch::bold(true)).unwrap(), table);
    }

    #[test]
    fn test_remove_rows() {
        let table = create_empty_table(4, 1, EmptyTableOptions::default())
            .unwrap()
            .update_cell(CellPosition::new(3, 0), |_| Cell::new("last"))
            .unwrap();

        let trimmed = table.remove_rows(&[0, 2, 2]).unwrap();
        assert_eq!(trimmed.row_count(), 2);
        assert_eq!(trimmed.rows()[1][0], Cell::new("last"));
    }

    #[test]
    fn test_remove_rows_is_atomic() {
        let table = model(3, 1);
        assert!(table.remove_rows(&[0, 5]).unwrap_err().is_bounds());
        assert!(table.remove_rows(&[0, 1, 2]).unwrap_err().is_domain());
    }

    #[test]
    fn test_column_title() {
        assert_eq!(column_title(0), "A");
        assert_eq!(column_title(25), "Z");
        assert_eq!(column_title(26), "AA");
        assert_eq!(column_title(27), "AB");
        assert_eq!(column_title(701), "ZZ");
        assert_eq!(column_title(702), "AAA");
    }
}
