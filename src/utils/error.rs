//! Error handling for table operations
//!
//! This module provides a unified error type and result type for the model
//! algebra, JSON import and the outer surfaces.

use std::fmt;

/// Table axis an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

impl Axis {
    /// Plural noun used in messages
    pub fn plural(&self) -> &'static str {
        match self {
            Axis::Row => "rows",
            Axis::Column => "columns",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Column => write!(f, "column"),
        }
    }
}

/// Table error type
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// Index outside `[0, len)` for a read, update or removal
    #[error("{axis} index {index} is out of bounds (table has {len} {})", .axis.plural())]
    OutOfBounds { axis: Axis, index: usize, len: usize },

    /// Index outside `[0, len]` for an insertion
    #[error("{axis} index {index} is out of bounds for insertion (table has {len} {})", .axis.plural())]
    InsertOutOfBounds { axis: Axis, index: usize, len: usize },

    /// A table needs at least one row and one column
    #[error("table must contain at least one {axis}")]
    EmptyDimension { axis: Axis },

    /// Removing the last remaining row or column
    #[error("cannot remove the last {axis}: table must contain at least one {axis}")]
    LastEntry { axis: Axis },

    /// Malformed JSON model
    #[error("invalid table JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for table operations
pub type TableResult<T> = Result<T, TableError>;

// Convenience constructors for errors
impl TableError {
    pub fn out_of_bounds(axis: Axis, index: usize, len: usize) -> Self {
        TableError::OutOfBounds { axis, index, len }
    }

    pub fn insert_out_of_bounds(axis: Axis, index: usize, len: usize) -> Self {
        TableError::InsertOutOfBounds { axis, index, len }
    }

    pub fn empty(axis: Axis) -> Self {
        TableError::EmptyDimension { axis }
    }

    pub fn last_entry(axis: Axis) -> Self {
        TableError::LastEntry { axis }
    }

    /// Whether the error is a bounds error (as opposed to a domain error)
    pub fn is_bounds(&self) -> bool {
        matches!(
            self,
            TableError::OutOfBounds { .. } | TableError::InsertOutOfBounds { .. }
        )
    }

    /// Whether the error is a structural (domain) violation
    pub fn is_domain(&self) -> bool {
        matches!(
            self,
            TableError::EmptyDimension { .. } | TableError::LastEntry { .. }
        )
    }
}

/// Fail with a bounds error unless `index < len`
pub(crate) fn check_index(axis: Axis, index: usize, len: usize) -> TableResult<()> {
    if index < len {
        Ok(())
    } else {
        Err(TableError::out_of_bounds(axis, index, len))
    }
}

/// Fail with a bounds error unless `index <= len`
pub(crate) fn check_insert_index(axis: Axis, index: usize, len: usize) -> TableResult<()> {
    if index <= len {
        Ok(())
    } else {
        Err(TableError::insert_out_of_bounds(axis, index, len))
    }
}
