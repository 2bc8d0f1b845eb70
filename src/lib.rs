//! raggedstat - Statistics over ragged numeric tables
//!
//! Loads comma-separated numeric text whose rows may differ in width and
//! whose cells may be empty or malformed, then answers count, sum-of-powers
//! and power-mean queries over rectangular ranges of it.

pub mod config;
pub mod data_file;
pub mod error;
pub mod model;
pub mod parser;
pub mod stats;

pub use config::ParseOptions;
pub use data_file::DataFile;
pub use error::LoadError;
pub use model::{CellRange, CellValue, Table};
pub use parser::{MemorySource, Source};
