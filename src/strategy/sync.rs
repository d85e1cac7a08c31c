//! Synchronous processing strategy
//!
//! This module provides a single-threaded implementation of the
//! ProcessingStrategy trait. It orchestrates processing by coordinating
//! between the SyncReader (input), the ScanReconstructor (transaction
//! boundaries and weights) and the TransactionEvaluator (verdicts).
//!
//! # Memory Efficiency
//!
//! Each transaction is evaluated and its verdict written as soon as its end
//! marker is read. Memory usage is O(catalog + one open transaction), not
//! O(input).

use crate::core::{ScanReconstructor, TransactionEvaluator};
use crate::io::line_format::write_verdict;
use crate::io::sync_reader::SyncReader;
use crate::strategy::{ProcessingStrategy, ProcessingSummary, ValidatorConfig};
use crate::types::{CheckoutError, ScanEvent};
use std::io::{Read, Write};
use tracing::{debug, info, warn};

/// Synchronous processing strategy
///
/// # Examples
///
/// ```
/// use checkout_validator::strategy::{ProcessingStrategy, SyncProcessingStrategy, ValidatorConfig};
///
/// let input = "1\n490000000001 150 500 10\nstart\n4900000000014 0\nend 505\n";
/// let mut output = Vec::new();
///
/// let strategy = SyncProcessingStrategy::new(ValidatorConfig::default());
/// strategy
///     .process(&mut input.as_bytes(), &mut output)
///     .expect("Processing failed");
///
/// assert_eq!(String::from_utf8(output).unwrap(), "150\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SyncProcessingStrategy {
    config: ValidatorConfig,
}

impl SyncProcessingStrategy {
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }
}

impl ProcessingStrategy for SyncProcessingStrategy {
    /// Process the input and write verdicts to output
    ///
    /// This method orchestrates the complete pipeline:
    /// 1. Reads the catalog with a SyncReader
    /// 2. Streams events into a ScanReconstructor
    /// 3. Evaluates each sealed transaction against the catalog
    /// 4. Writes the verdict before reading further input
    fn process(
        &self,
        input: &mut dyn Read,
        output: &mut dyn Write,
    ) -> Result<ProcessingSummary, CheckoutError> {
        let policy = self.config.numeric_policy;
        let mut reader = SyncReader::new(input, policy);

        let catalog = reader.read_catalog()?;
        info!(products = catalog.len(), "Catalog loaded");

        let evaluator = TransactionEvaluator::new(&catalog, policy);
        let mut reconstructor = ScanReconstructor::new();
        let mut summary = ProcessingSummary {
            catalog_size: catalog.len(),
            ..ProcessingSummary::default()
        };

        for result in reader {
            let event = match result {
                Ok(event) => event,
                Err(error) if error.is_recoverable() => ScanEvent::Unreadable {
                    closes_transaction: false,
                    error,
                },
                Err(e) => return Err(e),
            };

            if let ScanEvent::Unreadable { error, .. } = &event {
                warn!(
                    %error,
                    in_transaction = reconstructor.in_transaction(),
                    "Unreadable event record"
                );
                summary.skipped_records += 1;
            }

            if let Some(transaction) = reconstructor.push(event) {
                let verdict = evaluator.evaluate(&transaction);
                debug!(
                    index = summary.transactions,
                    scans = transaction.scans.len(),
                    %verdict,
                    "Transaction evaluated"
                );

                write_verdict(output, summary.transactions, &verdict, self.config.show_index)?;

                summary.transactions += 1;
                if verdict.is_staff_call() {
                    summary.staff_calls += 1;
                }
            }
        }
        reconstructor.finish();

        output.flush()?;

        info!(
            transactions = summary.transactions,
            staff_calls = summary.staff_calls,
            skipped_records = summary.skipped_records,
            "Processing complete"
        );
        Ok(summary)
    }
}
