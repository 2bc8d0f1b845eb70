//! Rectangular cell ranges

use serde::{Deserialize, Serialize};

/// An inclusive, 0-indexed rectangle of cells
///
/// The column bound is applied per row: rows narrower than `last_column`
/// contribute only the cells they actually have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellRange {
    pub first_row: usize,
    pub first_column: usize,
    pub last_row: usize,
    pub last_column: usize,
}

impl CellRange {
    /// Create a range from its corners
    pub fn new(first_row: usize, first_column: usize, last_row: usize, last_column: usize) -> Self {
        Self {
            first_row,
            first_column,
            last_row,
            last_column,
        }
    }

    /// A single row, columns `0..=last_column`
    pub fn row(row: usize, last_column: usize) -> Self {
        Self::new(row, 0, row, last_column)
    }

    /// A single column, rows `0..=last_row`
    pub fn column(column: usize, last_row: usize) -> Self {
        Self::new(0, column, last_row, column)
    }

    /// True when the range selects no rows or no columns at all
    pub fn is_empty(&self) -> bool {
        self.first_row > self.last_row || self.first_column > self.last_column
    }
}
