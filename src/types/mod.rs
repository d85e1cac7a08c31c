//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `product`: Catalog product definitions
//! - `scan`: Scanner events, product scans and transactions
//! - `verdict`: Per-transaction outcomes
//! - `numeric`: Policy for malformed numeric fields
//! - `error`: Error types for the checkout validator

pub mod error;
pub mod numeric;
pub mod product;
pub mod scan;
pub mod verdict;

pub use error::CheckoutError;
pub use numeric::NumericPolicy;
pub use product::{Price, ProductKind, ProductRecord, QuantitativeProduct, RegularProduct};
pub use scan::{ProductScan, ScanEvent, Transaction};
pub use verdict::Verdict;
