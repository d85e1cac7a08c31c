//! Product catalog
//!
//! The catalog maps product identifiers to product definitions. It is built
//! once from the catalog section of the input and is read-only afterwards, so
//! a single instance can be shared by any number of evaluators.
//!
//! # Duplicate Handling
//!
//! If the same identifier appears more than once, the last occurrence wins.

use crate::core::traits::ProductLookup;
use crate::types::ProductRecord;
use std::collections::HashMap;

/// Immutable product catalog
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Map of product identifier to product definition
    products: HashMap<String, ProductRecord>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Catalog {
            products: HashMap::new(),
        }
    }

    /// Add a product, replacing any earlier product with the same identifier
    ///
    /// # Returns
    ///
    /// The replaced product, if there was one
    pub fn insert(&mut self, record: ProductRecord) -> Option<ProductRecord> {
        self.products.insert(record.id().to_string(), record)
    }

    /// Get the product registered under `id`
    pub fn get(&self, id: &str) -> Option<&ProductRecord> {
        self.products.get(id)
    }

    /// Number of distinct products
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl FromIterator<ProductRecord> for Catalog {
    fn from_iter<I: IntoIterator<Item = ProductRecord>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        for record in iter {
            catalog.insert(record);
        }
        catalog
    }
}

impl ProductLookup for Catalog {
    fn lookup(&self, id: &str) -> Option<&ProductRecord> {
        self.get(id)
    }
}
