//! Scanner events and the transactions rebuilt from them

use crate::types::CheckoutError;
use rust_decimal::Decimal;

/// One record of the scale/scanner event stream
///
/// Weight readings are cumulative: they report the total weight on the
/// bagging scale at the moment the record was produced.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanEvent {
    /// Customer started a new checkout
    Start,

    /// An item was scanned; `reading` is the scale total before it is placed
    Scan { barcode: String, reading: Decimal },

    /// Customer finished; `reading` is the final scale total
    End { reading: Decimal },

    /// A record that could not be read
    ///
    /// `closes_transaction` is set when the record was recognizably an end
    /// marker, so the transaction it belongs to can still be closed.
    Unreadable {
        closes_transaction: bool,
        error: CheckoutError,
    },
}

/// One scanned item within a transaction
#[derive(Debug, Clone, PartialEq)]
pub struct ProductScan {
    /// Scanned barcode, nominally 13 digits
    pub barcode: String,

    /// Weight attributed to this item by the scale
    pub weight: Decimal,
}

impl ProductScan {
    /// Create a scan whose weight is not yet known
    pub fn pending(barcode: impl Into<String>) -> Self {
        ProductScan {
            barcode: barcode.into(),
            weight: Decimal::ZERO,
        }
    }
}

/// A customer's checkout session, bounded by start and end markers
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transaction {
    /// Scanned items in scan order
    pub scans: Vec<ProductScan>,

    /// Set when a record inside the transaction could not be read, or a
    /// scale delta could not be computed; item weights are then unreliable
    pub unreadable: bool,
}

impl Transaction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.scans.is_empty()
    }
}
