//! Utility modules
//!
//! Error and result types shared by every table operation.

pub mod error;

// Re-export commonly used items
pub use error::{Axis, TableError, TableResult};
