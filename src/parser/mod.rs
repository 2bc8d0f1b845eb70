//! Reading data sources into tables

mod line;

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::ParseOptions;
use crate::error::LoadError;
use crate::model::Table;

pub use self::line::{parse_cell, parse_line, DELIMITER};

/// Something a table can be loaded from
pub trait Source {
    /// Open the source for sequential reading
    fn open(&self) -> io::Result<Box<dyn BufRead + '_>>;

    /// Human-readable name used in errors and logs
    fn describe(&self) -> String;
}

impl Source for Path {
    fn open(&self) -> io::Result<Box<dyn BufRead + '_>> {
        let file = File::open(self)?;
        Ok(Box::new(BufReader::new(file)))
    }

    fn describe(&self) -> String {
        self.display().to_string()
    }
}

impl Source for PathBuf {
    fn open(&self) -> io::Result<Box<dyn BufRead + '_>> {
        self.as_path().open()
    }

    fn describe(&self) -> String {
        self.as_path().describe()
    }
}

/// An in-memory source over borrowed bytes
#[derive(Debug, Clone, Copy)]
pub struct MemorySource<'a> {
    data: &'a [u8],
}

impl<'a> MemorySource<'a> {
    /// Create a source over raw bytes
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    /// Create a source over text
    pub fn text(text: &'a str) -> Self {
        Self::new(text.as_bytes())
    }
}

impl Source for MemorySource<'_> {
    fn open(&self) -> io::Result<Box<dyn BufRead + '_>> {
        Ok(Box::new(self.data))
    }

    fn describe(&self) -> String {
        format!("<memory: {} bytes>", self.data.len())
    }
}

/// Read a whole source into a new table
///
/// Lines end at `\n` or at end of input. A newline right before end of
/// input does not start another row.
pub fn read_table<S: Source + ?Sized>(source: &S, options: &ParseOptions) -> Result<Table, LoadError> {
    let source_name = source.describe();
    let mut reader = source.open().map_err(|e| LoadError::Open {
        source_name: source_name.clone(),
        source: e,
    })?;

    let mut table = Table::new();
    let mut buffer = Vec::new();
    let mut line_number = 0;

    loop {
        buffer.clear();
        let read = reader
            .read_until(b'\n', &mut buffer)
            .map_err(|e| LoadError::Read {
                source_name: source_name.clone(),
                line: line_number + 1,
                source: e,
            })?;
        if read == 0 {
            break;
        }
        line_number += 1;

        if buffer.last() == Some(&b'\n') {
            buffer.pop();
        }
        let line = String::from_utf8_lossy(&buffer);
        table.append_row_at(parse_line(&line, options), line_number);
    }

    debug!(
        "loaded {} rows ({} columns in first row) from {}",
        table.row_count(),
        table.column_count(),
        source_name
    );
    Ok(table)
}
