//! Configuration handling for raggedstat

use serde::{Deserialize, Serialize};

/// Options controlling how cell text is turned into numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Accept `nan`, `inf` and `infinity` literals as numbers
    pub accept_special_values: bool,
    /// Skip whitespace before the numeric text of a cell
    pub skip_leading_whitespace: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            accept_special_values: false,
            skip_leading_whitespace: true,
        }
    }
}

impl ParseOptions {
    /// Create options with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept or reject special floating-point literals
    pub fn with_special_values(mut self, accept: bool) -> Self {
        self.accept_special_values = accept;
        self
    }

    /// Skip or reject whitespace in front of a number
    pub fn with_skip_leading_whitespace(mut self, skip: bool) -> Self {
        self.skip_leading_whitespace = skip;
        self
    }
}
