//! Error types for the checkout validator
//!
//! This module defines all error types that can occur while reading the
//! catalog and the scanner event stream. Errors are designed to be
//! descriptive and user-friendly for CLI output.
//!
//! Anomalies found while evaluating a transaction (bad checksum, unknown
//! product, weight out of tolerance) are not errors: they are reported in the
//! transaction's [`Verdict`](crate::types::Verdict).
//!
//! # Error Categories
//!
//! - **I/O Errors**: File not found, read or write failures
//! - **Parsing Errors**: Malformed records, missing fields, bad numbers
//! - **Catalog Errors**: Bad catalog header, truncated catalog, unsupported identifiers

use thiserror::Error;

/// Main error type for the checkout validator
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CheckoutError {
    /// Input file not found at the specified path
    ///
    /// Fatal: processing cannot start.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error while reading input or writing verdicts
    ///
    /// Fatal.
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// The input could not be split into records
    #[error("Parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// The first line is missing or is not a product count
    ///
    /// Fatal: the catalog cannot be delimited.
    #[error("Invalid catalog size '{value}'")]
    InvalidCatalogSize {
        /// The text found where the count was expected
        value: String,
    },

    /// Input ended before all announced catalog rows were read
    ///
    /// Fatal.
    #[error("Catalog truncated: expected {expected} products, found {found}")]
    TruncatedCatalog {
        /// Number of rows announced by the header
        expected: usize,
        /// Number of rows actually present
        found: usize,
    },

    /// Catalog identifier length matches neither product kind
    ///
    /// Recoverable: the catalog row is skipped.
    #[error("Unsupported product identifier '{id}'{}: expected 5 or 12 characters", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    UnsupportedIdentifier {
        /// The offending identifier
        id: String,
        /// Line number (if available)
        line: Option<u64>,
    },

    /// A required field is absent from a record
    ///
    /// Recoverable: the record is skipped.
    #[error("Missing {field}{}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    MissingField {
        /// Name of the missing field
        field: String,
        /// Line number (if available)
        line: Option<u64>,
    },

    /// A numeric field does not parse
    ///
    /// Recoverable: the record is skipped. Only raised under the strict
    /// numeric policy.
    #[error("Invalid {field} '{value}'{}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    InvalidNumber {
        /// Name of the field
        field: String,
        /// The text that failed to parse
        value: String,
        /// Line number (if available)
        line: Option<u64>,
    },
}

// Conversion from io::Error to CheckoutError
impl From<std::io::Error> for CheckoutError {
    fn from(error: std::io::Error) -> Self {
        CheckoutError::IoError {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to CheckoutError
impl From<csv::Error> for CheckoutError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());
        let message = error.to_string();

        match error.into_kind() {
            csv::ErrorKind::Io(io_error) => io_error.into(),
            _ => CheckoutError::ParseError { line, message },
        }
    }
}

// Helper functions for creating common errors

impl CheckoutError {
    /// Create a FileNotFound error
    pub fn file_not_found(path: &str) -> Self {
        CheckoutError::FileNotFound {
            path: path.to_string(),
        }
    }

    /// Create an InvalidCatalogSize error
    pub fn invalid_catalog_size(value: &str) -> Self {
        CheckoutError::InvalidCatalogSize {
            value: value.to_string(),
        }
    }

    /// Create a TruncatedCatalog error
    pub fn truncated_catalog(expected: usize, found: usize) -> Self {
        CheckoutError::TruncatedCatalog { expected, found }
    }

    /// Create an UnsupportedIdentifier error
    pub fn unsupported_identifier(id: &str, line: Option<u64>) -> Self {
        CheckoutError::UnsupportedIdentifier {
            id: id.to_string(),
            line,
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: &str, line: Option<u64>) -> Self {
        CheckoutError::MissingField {
            field: field.to_string(),
            line,
        }
    }

    /// Create an InvalidNumber error
    pub fn invalid_number(field: &str, value: &str, line: Option<u64>) -> Self {
        CheckoutError::InvalidNumber {
            field: field.to_string(),
            value: value.to_string(),
            line,
        }
    }

    /// Whether processing can continue after this error
    ///
    /// Recoverable errors concern a single record, which is skipped.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            CheckoutError::ParseError { .. }
                | CheckoutError::UnsupportedIdentifier { .. }
                | CheckoutError::MissingField { .. }
                | CheckoutError::InvalidNumber { .. }
        )
    }
}
