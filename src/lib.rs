//! Checkout Validator Library
//! # Overview
//!
//! This library validates self-checkout transactions. Given a product catalog
//! and the event stream produced by a checkout's scanner and bagging scale, it
//! rebuilds each customer transaction, checks every scanned barcode and
//! measured item weight, and reports either the amount payable or a call for
//! staff assistance.
//!
//! # Architecture
//!
//! - [`types`] - Core data types (products, scans, transactions, verdicts, errors)
//! - [`cli`] - CLI arguments parsing and logging setup
//! - [`core`] - Business logic components:
//!   - [`core::catalog`] - Product catalog
//!   - [`core::checksum`] - Barcode check digit
//!   - [`core::barcode`] - Barcode sub-fields (kind prefix, product key, declared price)
//!   - [`core::pricing`] - Weight tolerance and price rules per product kind
//!   - [`core::reconstructor`] - Transaction reconstruction from scale readings
//!   - [`core::evaluator`] - Verdict per transaction
//! - [`io`] - Input tokenizing and verdict output
//! - [`strategy`] - The processing pipeline
//!
//! # Product Kinds
//!
//! - **Regular**: fixed price; the item must weigh its standard weight, within
//!   an allowable error
//! - **Quantitative**: weight-priced; the barcode carries the price, which
//!   implies an expected weight
//!
//! # Verdicts
//!
//! - A total price when every scan is valid
//! - `staff call: 1` for an invalid code (bad check digit or unknown product)
//! - `staff call: 2` for an invalid weight
//! - `staff call: 1 2` when both occur in one transaction

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod strategy;
pub mod types;

pub use crate::core::{Catalog, ProductLookup, ScanReconstructor, TransactionEvaluator};
pub use crate::io::write_verdict;
pub use crate::types::{
    CheckoutError, NumericPolicy, Price, ProductKind, ProductRecord, ProductScan,
    QuantitativeProduct, RegularProduct, ScanEvent, Transaction, Verdict,
};
