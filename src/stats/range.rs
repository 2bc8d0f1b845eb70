//! Aggregates over rectangular ranges of a ragged table

use crate::model::{CellRange, Row, Table};

/// Present values inside `range`, row by row
///
/// Each row contributes columns `first_column..=last_column` clamped to its
/// own width. Missing cells are skipped.
///
/// # Panics
///
/// Panics if the range selects rows past the end of the table.
pub fn range_values<'a>(table: &'a Table, range: &CellRange) -> impl Iterator<Item = f64> + 'a {
    let CellRange {
        first_row,
        first_column,
        last_row,
        last_column,
    } = *range;

    let rows: &[Row] = if range.is_empty() {
        &[]
    } else {
        assert!(
            last_row < table.row_count(),
            "range ends at row {} but table has {} rows",
            last_row,
            table.row_count()
        );
        &table.rows()[first_row..=last_row]
    };

    rows.iter()
        .flat_map(move |row| row.values_between(first_column, last_column))
}

/// Number of present cells in `range`
pub fn range_item_count(table: &Table, range: &CellRange) -> usize {
    range_values(table, range).count()
}

/// Sum of `value^power` over present cells in `range`
pub fn range_sum(table: &Table, range: &CellRange, power: f64) -> f64 {
    range_values(table, range).map(|v| v.powf(power)).sum()
}

/// Power mean `(sum(value^k) / n)^(1/k)` over present cells in `range`
///
/// An empty range yields NaN.
///
/// # Panics
///
/// Panics if `mean_number` is zero.
pub fn range_mean(table: &Table, range: &CellRange, mean_number: f64) -> f64 {
    assert!(mean_number != 0.0, "mean number must be non-zero");

    let (sum, n) = range_values(table, range)
        .fold((0.0, 0usize), |(sum, n), v| (sum + v.powf(mean_number), n + 1));

    (sum / n as f64).powf(1.0 / mean_number)
}
