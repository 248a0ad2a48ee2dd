//! Error types for the CD rate calculator
//!
//! This module defines all error types that can occur while loading a rate
//! dataset. Query operations themselves never fail: empty results are reported
//! through sentinel messages, not errors.
//!
//! # Error Categories
//!
//! - **File I/O Errors**: File not found, permission denied, etc.
//! - **CSV Parsing Errors**: Malformed rows, wrongly typed fields
//! - **Schema Errors**: Header set differs from the expected column names

use thiserror::Error;

/// Main error type for the rate calculator
///
/// Every variant is fatal for the load that produced it: a dataset is either
/// loaded completely or not at all.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RateError {
    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading the dataset
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error occurred
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// Amount bound that is not a number once thousands separators are removed
    #[error("Invalid amount '{value}' at line {line}")]
    InvalidAmount {
        /// The raw amount text
        value: String,
        /// Line number of the offending row
        line: u64,
    },

    /// Column headers do not match the expected schema
    ///
    /// The message lists the expected columns so the user can fix the file.
    #[error(
        "El archivo no tiene las columnas correctas, favor ingresar un archivo con las siguientes columnas: {}",
        expected.join(", ")
    )]
    SchemaError {
        /// Expected header names, in canonical order
        expected: Vec<String>,
        /// Header names actually present in the source
        found: Vec<String>,
    },
}

impl From<std::io::Error> for RateError {
    fn from(error: std::io::Error) -> Self {
        RateError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for RateError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        RateError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

impl RateError {
    /// Create a FileNotFound error
    pub fn file_not_found(path: &str) -> Self {
        RateError::FileNotFound {
            path: path.to_string(),
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(value: &str, line: u64) -> Self {
        RateError::InvalidAmount {
            value: value.to_string(),
            line,
        }
    }

    /// Create a SchemaError from the expected and found header names
    pub fn schema_error<E, F>(expected: E, found: F) -> Self
    where
        E: IntoIterator,
        E::Item: Into<String>,
        F: IntoIterator,
        F::Item: Into<String>,
    {
        RateError::SchemaError {
            expected: expected.into_iter().map(Into::into).collect(),
            found: found.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether this error means the source does not have the expected columns
    pub fn is_schema_error(&self) -> bool {
        matches!(self, RateError::SchemaError { .. })
    }
}
