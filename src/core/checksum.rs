//! Barcode check digit validation
//!
//! The check digit is the sum of the first 12 digits modulo 10.

use crate::core::barcode::BARCODE_LEN;
use crate::types::NumericPolicy;

/// Check whether a barcode carries a correct check digit
///
/// Barcodes that are not exactly 13 characters long never validate. Digits
/// are read according to `policy`; under the strict policy any non-digit
/// character makes the barcode invalid.
pub fn is_valid(barcode: &str, policy: NumericPolicy) -> bool {
    let digits: Option<Vec<u32>> = barcode.chars().map(|c| policy.digit(c)).collect();

    match digits {
        Some(digits) if digits.len() == BARCODE_LEN => {
            let (body, check) = digits.split_at(BARCODE_LEN - 1);
            body.iter().sum::<u32>() % 10 == check[0]
        }
        _ => false,
    }
}
