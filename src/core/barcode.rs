//! Layout of store barcodes
//!
//! Every barcode is 13 characters. Regular items carry their 12-character
//! product identifier followed by the check digit. Weight-priced items start
//! with the `02` prefix and pack a 5-character product identifier and a
//! 5-digit price in front of the check digit:
//!
//! ```text
//! regular:       IIIIIIIIIIII C
//! quantitative:  02 IIIII PPPPP C
//! ```

use crate::types::{NumericPolicy, Price, ProductKind};
use std::ops::Range;

/// Length of a complete barcode, check digit included
pub const BARCODE_LEN: usize = 13;

/// Prefix reserved for weight-priced items
pub const QUANTITATIVE_PREFIX: &str = "02";

const REGULAR_KEY: Range<usize> = 0..12;
const QUANTITATIVE_KEY: Range<usize> = 2..7;
const DECLARED_PRICE: Range<usize> = 7..12;

/// Classify a barcode by its prefix
pub fn product_kind(barcode: &str) -> ProductKind {
    if barcode.starts_with(QUANTITATIVE_PREFIX) {
        ProductKind::Quantitative
    } else {
        ProductKind::Regular
    }
}

/// Catalog identifier embedded in a barcode of the given kind
///
/// Returns `None` when the barcode is too short to contain the identifier.
pub fn lookup_key(barcode: &str, kind: ProductKind) -> Option<&str> {
    match kind {
        ProductKind::Regular => barcode.get(REGULAR_KEY),
        ProductKind::Quantitative => barcode.get(QUANTITATIVE_KEY),
    }
}

/// Price encoded in a weight-priced barcode
///
/// The price window is read as a whole. Returns `None` when the barcode is
/// too short, or when the window holds a non-digit under the strict policy;
/// under the lenient policy such a window reads as 0.
pub fn declared_price(barcode: &str, policy: NumericPolicy) -> Option<Price> {
    let window = barcode.get(DECLARED_PRICE)?;

    match policy {
        NumericPolicy::Strict => window.chars().try_fold(0, |price: Price, c| {
            c.to_digit(10).map(|d| price * 10 + Price::from(d))
        }),
        NumericPolicy::Lenient => Some(window.parse().unwrap_or(0)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::quantitative("0210001003007", ProductKind::Quantitative)]
    #[case::regular("4900000000014", ProductKind::Regular)]
    #[case::zero_but_not_prefix("0010001003007", ProductKind::Regular)]
    #[case::empty("", ProductKind::Regular)]
    fn test_product_kind(#[case] barcode: &str, #[case] expected: ProductKind) {
        assert_eq!(product_kind(barcode), expected);
    }

    #[rstest]
    #[case::regular("4900000000014", ProductKind::Regular, Some("490000000001"))]
    #[case::quantitative("0210001003007", ProductKind::Quantitative, Some("10001"))]
    #[case::short_regular("49000", ProductKind::Regular, None)]
    #[case::short_quantitative("0210", ProductKind::Quantitative, None)]
    fn test_lookup_key(
        #[case] barcode: &str,
        #[case] kind: ProductKind,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(lookup_key(barcode, kind), expected);
    }

    #[rstest]
    #[case::three_hundred("0210001003007", NumericPolicy::Strict, Some(300))]
    #[case::max("0210001999999", NumericPolicy::Strict, Some(99999))]
    #[case::zero("0210001000004", NumericPolicy::Strict, Some(0))]
    #[case::non_digit_strict("02100010x3007", NumericPolicy::Strict, None)]
    #[case::non_digit_lenient("02100010x3007", NumericPolicy::Lenient, Some(0))]
    #[case::sign_strict("0210001+03007", NumericPolicy::Strict, None)]
    #[case::sign_lenient("0210001+03007", NumericPolicy::Lenient, Some(300))]
    #[case::negative_lenient("0210001-03007", NumericPolicy::Lenient, Some(0))]
    #[case::digits_lenient("0210001003007", NumericPolicy::Lenient, Some(300))]
    #[case::too_short("02100010030", NumericPolicy::Lenient, None)]
    fn test_declared_price(
        #[case] barcode: &str,
        #[case] policy: NumericPolicy,
        #[case] expected: Option<Price>,
    ) {
        assert_eq!(declared_price(barcode, policy), expected);
    }
}
