//! Error types for conversion options

use std::fmt;

/// Errors that can occur while preparing a conversion
///
/// The conversion itself never fails: any input string is rewritten on a best effort basis.
/// Only the options handed to [`crate::convert_with`] can be rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// An option value that cannot produce valid Markdown
    InvalidOption(String),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::InvalidOption(msg) => write!(f, "Invalid option: {msg}"),
        }
    }
}

impl std::error::Error for ConvertError {}
