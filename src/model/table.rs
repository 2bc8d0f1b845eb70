//! Table, Row, and Cell data structures

use serde::{Deserialize, Serialize};

use super::range::CellRange;

/// A single numeric cell, or the marker for absent/unparseable data
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Missing,
    Number(f64),
}

impl CellValue {
    /// Check if the cell holds no usable value
    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }

    /// The numeric value, if present
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Missing => None,
            CellValue::Number(v) => Some(*v),
        }
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellValue::Missing => Ok(()),
            CellValue::Number(v) => write!(f, "{}", v),
        }
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        CellValue::Number(v)
    }
}

impl From<Option<f64>> for CellValue {
    fn from(opt: Option<f64>) -> Self {
        match opt {
            Some(v) => CellValue::Number(v),
            None => CellValue::Missing,
        }
    }
}

/// A row in the table
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Cell values in column order
    pub cells: Vec<CellValue>,
    /// Original line number in the source (1-indexed)
    pub source_line: usize,
}

impl Row {
    /// Create a new row
    pub fn new(cells: Vec<CellValue>, source_line: usize) -> Self {
        Self { cells, source_line }
    }

    /// Number of columns in this row, missing cells included
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Present values among columns `first..=last`, clamped to this row's width
    pub fn values_between(&self, first: usize, last: usize) -> impl Iterator<Item = f64> + '_ {
        let end = last.saturating_add(1).min(self.cells.len());
        let cells: &[CellValue] = if first < end {
            &self.cells[first..end]
        } else {
            &[]
        };
        cells.iter().filter_map(CellValue::as_f64)
    }
}

/// A ragged table: rows keep their own widths
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    /// Create a new empty table
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Drop every row and release the storage backing them
    pub fn reset(&mut self) {
        self.rows = Vec::new();
    }

    /// Append a row, numbering it after the rows already present
    pub fn append_row(&mut self, cells: Vec<CellValue>) {
        let source_line = self.rows.len() + 1;
        self.append_row_at(cells, source_line);
    }

    /// Append a row that came from a known source line
    pub fn append_row_at(&mut self, cells: Vec<CellValue>, source_line: usize) {
        self.rows.push(Row::new(cells, source_line));
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Nominal number of columns: the width of the first row
    pub fn column_count(&self) -> usize {
        self.rows.first().map_or(0, Row::len)
    }

    /// Width of the widest row
    pub fn max_column_count(&self) -> usize {
        self.rows.iter().map(Row::len).max().unwrap_or(0)
    }

    /// Number of columns in one row
    pub fn row_column_count(&self, row: usize) -> usize {
        self.row(row).len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get a row by index
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.row_count()`.
    pub fn row(&self, row: usize) -> &Row {
        assert!(
            row < self.rows.len(),
            "row index {} out of bounds for table with {} rows",
            row,
            self.rows.len()
        );
        &self.rows[row]
    }

    /// Get a cell by position
    ///
    /// # Panics
    ///
    /// Panics if the row does not exist or is narrower than `column + 1`.
    pub fn cell(&self, row: usize, column: usize) -> CellValue {
        let r = self.row(row);
        assert!(
            column < r.len(),
            "column index {} out of bounds for row {} with {} columns",
            column,
            row,
            r.len()
        );
        r.cells[column]
    }

    /// All rows in load order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// The range covering every cell of every row, or `None` when there are no cells
    pub fn extent(&self) -> Option<CellRange> {
        let width = self.max_column_count();
        if self.rows.is_empty() || width == 0 {
            return None;
        }
        Some(CellRange::new(0, 0, self.rows.len() - 1, width - 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ragged() -> Table {
        let mut table = Table::new();
        table.append_row(vec![1.0.into(), 2.0.into(), 3.0.into()]);
        table.append_row(vec![4.0.into(), CellValue::Missing]);
        table.append_row(vec![
            CellValue::Missing,
            6.0.into(),
            CellValue::Missing,
            7.0.into(),
        ]);
        table
    }

    #[test]
    fn test_empty_table() {
        let table = Table::new();
        assert!(table.is_empty());
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.column_count(), 0);
        assert_eq!(table.max_column_count(), 0);
        assert_eq!(table.extent(), None);
    }

    #[test]
    fn test_ragged_widths() {
        let table = ragged();
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.column_count(), 3);
        assert_eq!(table.max_column_count(), 4);
        assert_eq!(table.row_column_count(1), 2);
        assert_eq!(table.extent(), Some(CellRange::new(0, 0, 2, 3)));
        assert_eq!(table.row(2).source_line, 3);
        let widths: Vec<usize> = table.rows().iter().map(Row::len).collect();
        assert_eq!(widths, vec![3, 2, 4]);
    }

    #[test]
    fn test_cell_lookup() {
        let table = ragged();
        assert_eq!(table.cell(0, 2), CellValue::Number(3.0));
        assert!(table.cell(1, 1).is_missing());
        assert_eq!(table.cell(2, 3).as_f64(), Some(7.0));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_cell_past_row_width_panics() {
        ragged().cell(1, 2);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_row_past_end_panics() {
        ragged().row(3);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut table = ragged();
        table.reset();
        assert!(table.is_empty());
        table.reset();
        assert!(table.is_empty());
        assert_eq!(table.column_count(), 0);
    }

    #[test]
    fn test_values_between_clamps_to_row() {
        let table = ragged();
        let values: Vec<f64> = table.row(2).values_between(1, 10).collect();
        assert_eq!(values, vec![6.0, 7.0]);
        assert_eq!(table.row(1).values_between(2, 5).count(), 0);
    }

    #[test]
    fn test_cell_display() {
        assert_eq!(CellValue::Number(2.5).to_string(), "2.5");
        assert_eq!(CellValue::Missing.to_string(), "");
    }
}
