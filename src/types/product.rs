//! Product catalog types
//!
//! A catalog entry is either a fixed-price ("regular") product or a
//! weight-priced ("quantitative") product. The kind is fixed by the length of
//! the product identifier.

use rust_decimal::Decimal;

/// Price in whole currency units
pub type Price = u64;

/// Identifier length of a quantitative (weight-priced) product
pub const QUANTITATIVE_ID_LEN: usize = 5;

/// Identifier length of a regular (fixed-price) product
pub const REGULAR_ID_LEN: usize = 12;

/// The two kinds of product the store sells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductKind {
    /// Fixed price, fixed standard weight
    Regular,

    /// Price encoded in the barcode, weight derived from the price
    Quantitative,
}

impl ProductKind {
    /// Select the product kind from the length of a catalog identifier
    ///
    /// Returns `None` for identifiers that are neither 5 nor 12 characters long.
    pub fn from_id(id: &str) -> Option<Self> {
        match id.len() {
            QUANTITATIVE_ID_LEN => Some(ProductKind::Quantitative),
            REGULAR_ID_LEN => Some(ProductKind::Regular),
            _ => None,
        }
    }
}

/// Fixed-price product
#[derive(Debug, Clone, PartialEq)]
pub struct RegularProduct {
    /// 12-character product identifier
    pub id: String,

    /// Price charged per item
    pub price: Price,

    /// Expected weight of one item
    pub standard_weight: Decimal,

    /// Maximum accepted deviation from `standard_weight`
    pub allowable_error_weight: Decimal,
}

/// Weight-priced product
///
/// The barcode of a weight-priced item carries its price; the catalog only
/// describes how much such an item is expected to weigh for a given price.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantitativeProduct {
    /// 5-character product identifier
    pub id: String,

    /// Weight of goods per 100 currency units
    pub weight_per_hundred: Decimal,

    /// Weight of the packaging, independent of price
    pub package_weight: Decimal,

    /// Maximum accepted deviation from the expected weight
    pub allowable_error_weight: Decimal,
}

/// Catalog entry
#[derive(Debug, Clone, PartialEq)]
pub enum ProductRecord {
    Regular(RegularProduct),
    Quantitative(QuantitativeProduct),
}

impl ProductRecord {
    /// Product identifier used as catalog key
    pub fn id(&self) -> &str {
        match self {
            ProductRecord::Regular(product) => &product.id,
            ProductRecord::Quantitative(product) => &product.id,
        }
    }

    pub fn kind(&self) -> ProductKind {
        match self {
            ProductRecord::Regular(_) => ProductKind::Regular,
            ProductRecord::Quantitative(_) => ProductKind::Quantitative,
        }
    }
}
