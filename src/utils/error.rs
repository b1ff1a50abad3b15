//! Error handling for tabular conversions
//!
//! This module provides a unified error type and result type for the
//! parse and spreadsheet-writing operations.

use std::fmt;

/// Conversion error type
#[derive(Debug)]
pub enum ConvertError {
    /// Configuration error - the caller asked for something the input
    /// cannot satisfy (e.g. multi-index with a one-column header)
    Configuration { message: String },
    /// Parse error - input could not be parsed
    Parse {
        message: String,
        line: Option<usize>,
    },
    /// IO error (for file operations)
    Io { message: String },
    /// Spreadsheet writer error
    Xlsx { message: String },
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::Configuration { message } => {
                write!(f, "Configuration error: {}", message)
            }
            ConvertError::Parse { message, line } => {
                if let Some(l) = line {
                    write!(f, "Parse error at line {}: {}", l, message)
                } else {
                    write!(f, "Parse error: {}", message)
                }
            }
            ConvertError::Io { message } => {
                write!(f, "IO error: {}", message)
            }
            ConvertError::Xlsx { message } => {
                write!(f, "Spreadsheet error: {}", message)
            }
        }
    }
}

impl std::error::Error for ConvertError {}

impl From<std::io::Error> for ConvertError {
    fn from(err: std::io::Error) -> Self {
        ConvertError::Io {
            message: err.to_string(),
        }
    }
}

impl From<rust_xlsxwriter::XlsxError> for ConvertError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        ConvertError::Xlsx {
            message: err.to_string(),
        }
    }
}

/// Result type for conversion operations
pub type ConvertResult<T> = Result<T, ConvertError>;

// Convenience constructors for errors
impl ConvertError {
    pub fn configuration(message: impl Into<String>) -> Self {
        ConvertError::Configuration {
            message: message.into(),
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        ConvertError::Parse {
            message: message.into(),
            line: None,
        }
    }

    pub fn parse_at(message: impl Into<String>, line: usize) -> Self {
        ConvertError::Parse {
            message: message.into(),
            line: Some(line),
        }
    }
}
