//! Errors raised while loading a data file

use std::io;

use thiserror::Error;

/// A load could not complete; the target table is left empty
///
/// Unparseable cells never produce an error, they become missing values.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source could not be opened
    #[error("failed to open {source_name}: {source}")]
    Open {
        source_name: String,
        source: io::Error,
    },

    /// Reading stopped partway through the source
    #[error("failed to read line {line} of {source_name}: {source}")]
    Read {
        source_name: String,
        line: usize,
        source: io::Error,
    },
}

impl LoadError {
    /// Name of the source that failed
    pub fn source_name(&self) -> &str {
        match self {
            LoadError::Open { source_name, .. } => source_name,
            LoadError::Read { source_name, .. } => source_name,
        }
    }
}
