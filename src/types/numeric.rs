//! Handling of malformed numeric fields
//!
//! Catalog values, scale readings, barcode digits and barcode-encoded prices
//! are all numeric text. The policy decides what happens when that text does
//! not parse.

use clap::ValueEnum;

/// How malformed numeric text is treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum NumericPolicy {
    /// Reject the value: records are skipped, barcodes fail validation
    #[default]
    Strict,

    /// Substitute zero for any value that does not parse
    Lenient,
}

impl NumericPolicy {
    /// Numeric value of a single barcode character
    ///
    /// Under the lenient policy a non-digit counts as 0.
    pub fn digit(self, c: char) -> Option<u32> {
        match (c.to_digit(10), self) {
            (Some(d), _) => Some(d),
            (None, NumericPolicy::Lenient) => Some(0),
            (None, NumericPolicy::Strict) => None,
        }
    }
}
