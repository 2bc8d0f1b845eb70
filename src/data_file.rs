//! Loaded data file and its query surface

use log::{trace, warn};

use crate::config::ParseOptions;
use crate::error::LoadError;
use crate::model::{CellRange, CellValue, Table};
use crate::parser::{read_table, Source};
use crate::stats;

/// A ragged numeric table loaded from a delimited text source
///
/// Whole-table and per-row queries cover every cell of each row, however
/// wide. Column queries take a column index below [`DataFile::column_count`].
#[derive(Debug, Clone, Default)]
pub struct DataFile {
    table: Table,
    options: ParseOptions,
}

impl DataFile {
    /// Create an empty data file with default parse options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty data file that will load with `options`
    pub fn with_options(options: ParseOptions) -> Self {
        Self {
            table: Table::new(),
            options,
        }
    }

    /// Create a data file and try to load `source` into it
    ///
    /// If loading fails the data file is empty. Use [`DataFile::load`] to
    /// see the error.
    pub fn with_source<S: Source + ?Sized>(source: &S) -> Self {
        let mut data_file = Self::new();
        data_file.reload(source);
        data_file
    }

    /// Load `source` with default parse options
    pub fn load<S: Source + ?Sized>(source: &S) -> Result<Self, LoadError> {
        let mut data_file = Self::new();
        data_file.try_reload(source)?;
        Ok(data_file)
    }

    /// Replace the contents with `source`, reporting success
    pub fn reload<S: Source + ?Sized>(&mut self, source: &S) -> bool {
        match self.try_reload(source) {
            Ok(()) => true,
            Err(e) => {
                warn!("{}", e);
                false
            }
        }
    }

    /// Replace the contents with `source`
    ///
    /// Prior rows are dropped before reading starts. On error the table
    /// stays empty.
    pub fn try_reload<S: Source + ?Sized>(&mut self, source: &S) -> Result<(), LoadError> {
        self.reset();
        self.table = read_table(source, &self.options)?;
        Ok(())
    }

    /// Drop all rows
    pub fn reset(&mut self) {
        trace!("resetting data file with {} rows", self.table.row_count());
        self.table.reset();
    }

    /// The underlying table
    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.table.row_count()
    }

    /// Width of the first row, or 0 when empty
    pub fn column_count(&self) -> usize {
        self.table.column_count()
    }

    pub fn row_column_count(&self, row: usize) -> usize {
        self.table.row_column_count(row)
    }

    /// Cell at `row`, `column`
    ///
    /// # Panics
    ///
    /// Panics if the position is outside the table.
    pub fn item(&self, row: usize, column: usize) -> CellValue {
        self.table.cell(row, column)
    }

    /// Number of present cells in the table
    pub fn item_count(&self) -> usize {
        self.table
            .extent()
            .map_or(0, |range| self.range_item_count(&range))
    }

    /// Number of present cells in one row
    ///
    /// Counts every column the row has, including columns past
    /// [`DataFile::column_count`] when the row is wider than the first one.
    pub fn row_item_count(&self, row: usize) -> usize {
        self.range_item_count(&self.row_range(row))
    }

    pub fn column_item_count(&self, column: usize) -> usize {
        self.range_item_count(&self.column_range(column))
    }

    /// Sum of `value^power` over the table
    pub fn sum(&self, power: f64) -> f64 {
        self.table
            .extent()
            .map_or(0.0, |range| self.range_sum(&range, power))
    }

    /// Sum of `value^power` over one row, across all of that row's columns
    pub fn row_sum(&self, row: usize, power: f64) -> f64 {
        self.range_sum(&self.row_range(row), power)
    }

    pub fn column_sum(&self, column: usize, power: f64) -> f64 {
        self.range_sum(&self.column_range(column), power)
    }

    /// Power mean of order `mean_number` over the table; NaN when empty
    pub fn mean(&self, mean_number: f64) -> f64 {
        assert!(mean_number != 0.0, "mean number must be non-zero");
        self.table
            .extent()
            .map_or(f64::NAN, |range| self.range_mean(&range, mean_number))
    }

    /// Power mean over one row, across all of that row's columns
    ///
    /// Like [`DataFile::row_item_count`], not capped at the first row's width.
    pub fn row_mean(&self, row: usize, mean_number: f64) -> f64 {
        self.range_mean(&self.row_range(row), mean_number)
    }

    pub fn column_mean(&self, column: usize, mean_number: f64) -> f64 {
        self.range_mean(&self.column_range(column), mean_number)
    }

    pub fn range_item_count(&self, range: &CellRange) -> usize {
        stats::range_item_count(&self.table, range)
    }

    pub fn range_sum(&self, range: &CellRange, power: f64) -> f64 {
        stats::range_sum(&self.table, range, power)
    }

    pub fn range_mean(&self, range: &CellRange, mean_number: f64) -> f64 {
        stats::range_mean(&self.table, range, mean_number)
    }

    fn row_range(&self, row: usize) -> CellRange {
        let width = self.table.row_column_count(row);
        CellRange::new(row, 0, row, width.saturating_sub(1))
    }

    fn column_range(&self, column: usize) -> CellRange {
        assert!(
            column < self.column_count(),
            "column index {} out of bounds for table with {} columns",
            column,
            self.column_count()
        );
        CellRange::column(column, self.row_count() - 1)
    }
}
