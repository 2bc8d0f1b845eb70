//! Data model for ragged numeric tables

mod range;
mod table;

pub use range::CellRange;
pub use table::{CellValue, Row, Table};
