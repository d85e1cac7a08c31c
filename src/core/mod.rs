//! Core business logic module
//!
//! This module contains the checkout validation components:
//! - `traits` - Trait abstraction for catalog lookups
//! - `catalog` - Immutable product catalog
//! - `checksum` - Barcode check digit validation
//! - `barcode` - Sub-field layout of store barcodes
//! - `pricing` - Weight validation and price derivation per product kind
//! - `reconstructor` - Rebuilds transactions from the scanner event stream
//! - `evaluator` - Produces the verdict for a transaction

pub mod barcode;
pub mod catalog;
pub mod checksum;
pub mod evaluator;
pub mod pricing;
pub mod reconstructor;
pub mod traits;

pub use catalog::Catalog;
pub use evaluator::TransactionEvaluator;
pub use reconstructor::ScanReconstructor;
pub use traits::ProductLookup;
