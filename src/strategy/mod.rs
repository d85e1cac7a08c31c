//! Processing strategy module
//!
//! This module defines the interface for complete processing pipelines,
//! covering input tokenizing, transaction reconstruction, evaluation and
//! verdict output, together with the configuration they run under.

use crate::types::{CheckoutError, NumericPolicy};
use std::io::{Read, Write};

pub mod sync;

pub use sync::SyncProcessingStrategy;

/// Runtime configuration for a processing run
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// How malformed numeric text is treated
    pub numeric_policy: NumericPolicy,

    /// Precede every verdict with an `account: <n>` line
    pub show_index: bool,
}

/// Counters reported at the end of a processing run
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProcessingSummary {
    /// Number of distinct products in the catalog
    pub catalog_size: usize,

    /// Number of transactions evaluated
    pub transactions: usize,

    /// Number of transactions that ended in a staff call
    pub staff_calls: usize,

    /// Number of event records skipped because they could not be read
    pub skipped_records: usize,
}

/// Processing strategy trait for complete validation pipelines
pub trait ProcessingStrategy: Send + Sync {
    /// Validate every transaction in `input` and write one verdict per
    /// transaction to `output`
    ///
    /// # Returns
    ///
    /// * `Ok(ProcessingSummary)` if the input was processed to the end (possibly
    ///   skipping unreadable records)
    /// * `Err(CheckoutError)` if a fatal error occurred
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The catalog header is missing or invalid, or the catalog is truncated
    /// - A fatal I/O error occurs during reading or writing
    ///
    /// Unreadable event records are logged and mark the transaction they
    /// occur in; they do not cause this method to return an error.
    fn process(
        &self,
        input: &mut dyn Read,
        output: &mut dyn Write,
    ) -> Result<ProcessingSummary, CheckoutError>;
}
