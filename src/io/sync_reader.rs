//! Synchronous input reader
//!
//! Reads the catalog section and then streams the scanner events that
//! follow it. Delegates record conversion to the line_format module.
//!
//! # Design
//!
//! The SyncReader uses a `csv::Reader` configured for the space-separated,
//! header-less input format. The catalog is read eagerly with
//! [`read_catalog`](SyncReader::read_catalog); afterwards the reader is an
//! iterator over [`ScanEvent`]s, one input line at a time:
//!
//! ```no_run
//! use checkout_validator::io::sync_reader::{open_input, SyncReader};
//! use checkout_validator::types::NumericPolicy;
//! use std::path::Path;
//!
//! let input = open_input(Some(Path::new("input.txt"))).unwrap();
//! let mut reader = SyncReader::new(input, NumericPolicy::Strict);
//! let catalog = reader.read_catalog().unwrap();
//! for result in reader {
//!     match result {
//!         Ok(event) => println!("{:?}", event),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, bad catalog header, truncated catalog)
//!   are returned from `open_input()` and `read_catalog()`
//! - Malformed catalog rows are logged and skipped
//! - Malformed event records are yielded as [`ScanEvent::Unreadable`], so
//!   the transaction they belong to can be marked
//! - Records the tokenizer itself rejects are yielded as Err variants
//! - Line numbers are included in error messages for debugging

use crate::core::Catalog;
use crate::io::line_format::{convert_catalog_row, convert_event_record, parse_catalog_size};
use crate::types::{CheckoutError, NumericPolicy, ScanEvent};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;
use tracing::{debug, warn};

/// Synchronous input reader
///
/// Yields scanner events with constant memory usage.
#[derive(Debug)]
pub struct SyncReader<R: Read> {
    reader: csv::Reader<R>,
    policy: NumericPolicy,
}

/// Open the validator input
///
/// Reads standard input when `path` is `None` or `-`.
///
/// # Returns
///
/// * `Ok(Box<dyn Read>)` if the input is readable
/// * `Err(CheckoutError)` if the file could not be opened
pub fn open_input(path: Option<&Path>) -> Result<Box<dyn Read>, CheckoutError> {
    match path {
        None => Ok(Box::new(std::io::stdin().lock())),
        Some(path) if path == Path::new("-") => Ok(Box::new(std::io::stdin().lock())),
        Some(path) => {
            let file = File::open(path).map_err(|e| match e.kind() {
                ErrorKind::NotFound => CheckoutError::file_not_found(&path.display().to_string()),
                _ => CheckoutError::from(e),
            })?;
            Ok(Box::new(file))
        }
    }
}

impl<R: Read> SyncReader<R> {
    /// Create a SyncReader over any byte source
    ///
    /// The tokenizer is configured to:
    /// - Split fields on single spaces, with no header row and no quoting
    /// - Allow records of different lengths
    /// - Trim whitespace (including `\r`) from all fields
    pub fn new(reader: R, policy: NumericPolicy) -> Self {
        let reader = ReaderBuilder::new()
            .has_headers(false)
            .delimiter(b' ')
            .quoting(false)
            .flexible(true)
            .trim(Trim::All)
            .buffer_capacity(8 * 1024)
            .from_reader(reader);

        Self { reader, policy }
    }

    fn next_record(&mut self) -> Option<Result<StringRecord, CheckoutError>> {
        let mut record = StringRecord::new();
        match self.reader.read_record(&mut record) {
            Ok(true) => Some(Ok(record)),
            Ok(false) => None,
            Err(e) => Some(Err(e.into())),
        }
    }

    /// Read the catalog section
    ///
    /// The first record holds the number of catalog rows that follow. Rows
    /// that fail to convert are logged and skipped; they still count towards
    /// the announced number of rows.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The header is missing or not a non-negative integer
    /// - The input ends before the announced number of rows
    /// - A fatal I/O error occurs
    pub fn read_catalog(&mut self) -> Result<Catalog, CheckoutError> {
        let header = self
            .next_record()
            .ok_or_else(|| CheckoutError::invalid_catalog_size(""))??;
        let expected = parse_catalog_size(&header)?;

        let policy = self.policy;
        let mut catalog = Catalog::new();

        for found in 0..expected {
            let row = self
                .next_record()
                .ok_or_else(|| CheckoutError::truncated_catalog(expected, found))?
                .and_then(|record| convert_catalog_row(&record, policy));

            match row {
                Ok(product) => {
                    if let Some(replaced) = catalog.insert(product) {
                        debug!(id = replaced.id(), "Catalog entry replaced by a later row");
                    }
                }
                Err(e) if e.is_recoverable() => warn!(error = %e, "Skipping catalog row"),
                Err(e) => return Err(e),
            }
        }

        Ok(catalog)
    }
}

impl<R: Read> Iterator for SyncReader<R> {
    type Item = Result<ScanEvent, CheckoutError>;

    /// Get the next scanner event
    ///
    /// # Returns
    ///
    /// * `Some(Ok(ScanEvent))` - Converted record, possibly unreadable
    /// * `Some(Err(CheckoutError))` - Tokenizer or I/O error
    /// * `None` - End of input reached
    fn next(&mut self) -> Option<Self::Item> {
        let policy = self.policy;
        Some(self.next_record()?.map(|record| convert_event_record(&record, policy)))
    }
}
