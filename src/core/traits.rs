//! Core trait for catalog lookups
//!
//! The evaluator only needs to resolve a product identifier to its catalog
//! entry. Abstracting this behind a trait keeps the evaluator independent of
//! where product definitions come from.

use crate::types::ProductRecord;
use std::collections::HashMap;

/// Resolve product identifiers to catalog entries
pub trait ProductLookup {
    /// Get the product registered under `id`
    fn lookup(&self, id: &str) -> Option<&ProductRecord>;
}

impl ProductLookup for HashMap<String, ProductRecord> {
    fn lookup(&self, id: &str) -> Option<&ProductRecord> {
        self.get(id)
    }
}
