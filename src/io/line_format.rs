//! Line format handling for catalog rows, scanner events and verdicts
//!
//! This module centralizes all format concerns, providing:
//! - Catalog header and row conversion into domain types
//! - Event record conversion into [`ScanEvent`]s
//! - Verdict output serialization
//!
//! Conversions work on already tokenized records and are pure, for easy
//! testing.
//!
//! # Record Layout
//!
//! ```text
//! <count>
//! <5-char id> <weight per 100> <package weight> <allowable error>
//! <12-char id> <price> <standard weight> <allowable error>
//! start
//! <barcode> <cumulative weight>
//! end <cumulative weight>
//! ```

use crate::types::{
    CheckoutError, NumericPolicy, Price, ProductKind, ProductRecord, QuantitativeProduct,
    RegularProduct, ScanEvent, Verdict,
};
use csv::StringRecord;
use rust_decimal::Decimal;
use std::io::Write;
use std::str::FromStr;

const START_MARKER: &str = "start";
const END_MARKER: &str = "end";

fn line_of(record: &StringRecord) -> Option<u64> {
    record.position().map(|pos| pos.line())
}

/// Numeric field types and their lenient fallback reading
trait NumericField: FromStr + Default {
    /// Value of text that does not parse, under the lenient policy
    fn lenient(_value: &str) -> Self {
        Self::default()
    }
}

impl NumericField for Price {}

impl NumericField for Decimal {
    fn lenient(value: &str) -> Self {
        Decimal::from_scientific(value).unwrap_or_default()
    }
}

/// Parse a numeric field according to `policy`
///
/// Under the lenient policy a missing value is read as zero, and so is a
/// malformed one unless it has a fallback reading (decimals in scientific
/// notation).
fn parse_field<T: NumericField>(
    record: &StringRecord,
    index: usize,
    field: &str,
    policy: NumericPolicy,
) -> Result<T, CheckoutError> {
    let line = line_of(record);

    match (record.get(index).filter(|value| !value.is_empty()), policy) {
        (Some(value), _) => match value.parse::<T>() {
            Ok(number) => Ok(number),
            Err(_) if policy == NumericPolicy::Lenient => Ok(T::lenient(value)),
            Err(_) => Err(CheckoutError::invalid_number(field, value, line)),
        },
        (None, NumericPolicy::Lenient) => Ok(T::default()),
        (None, NumericPolicy::Strict) => Err(CheckoutError::missing_field(field, line)),
    }
}

/// Read the number of catalog rows from the first record
///
/// The count is always parsed strictly: without it the catalog cannot be
/// told apart from the event stream.
pub fn parse_catalog_size(record: &StringRecord) -> Result<usize, CheckoutError> {
    let value = record.get(0).unwrap_or_default();
    value
        .parse()
        .map_err(|_| CheckoutError::invalid_catalog_size(value))
}

/// Convert a catalog row to a ProductRecord
///
/// The identifier length selects the product kind:
/// - 5 characters: `id weight_per_hundred package_weight allowable_error`
/// - 12 characters: `id price standard_weight allowable_error`
///
/// # Returns
///
/// * `Ok(ProductRecord)` - Successfully converted row
/// * `Err(CheckoutError)` - Unsupported identifier, or a missing/malformed
///   number under the strict policy
pub fn convert_catalog_row(
    record: &StringRecord,
    policy: NumericPolicy,
) -> Result<ProductRecord, CheckoutError> {
    let id = record.get(0).unwrap_or_default();

    match ProductKind::from_id(id) {
        Some(ProductKind::Quantitative) => {
            Ok(ProductRecord::Quantitative(QuantitativeProduct {
                id: id.to_string(),
                weight_per_hundred: parse_field::<Decimal>(record, 1, "weight per 100", policy)?,
                package_weight: parse_field::<Decimal>(record, 2, "package weight", policy)?,
                allowable_error_weight: parse_field::<Decimal>(
                    record,
                    3,
                    "allowable error weight",
                    policy,
                )?,
            }))
        }
        Some(ProductKind::Regular) => Ok(ProductRecord::Regular(RegularProduct {
            id: id.to_string(),
            price: parse_field(record, 1, "price", policy)?,
            standard_weight: parse_field::<Decimal>(record, 2, "standard weight", policy)?,
            allowable_error_weight: parse_field::<Decimal>(
                record,
                3,
                "allowable error weight",
                policy,
            )?,
        })),
        None => Err(CheckoutError::unsupported_identifier(id, line_of(record))),
    }
}

/// Convert an event record to a ScanEvent
///
/// `start` and `end` are recognized by their first field; any other first
/// field is taken as a scanned barcode. A record that fails to convert
/// becomes [`ScanEvent::Unreadable`], carrying the error and whether the
/// record was an end marker.
pub fn convert_event_record(record: &StringRecord, policy: NumericPolicy) -> ScanEvent {
    let unreadable = |closes_transaction, error| ScanEvent::Unreadable {
        closes_transaction,
        error,
    };

    match record.get(0).unwrap_or_default() {
        START_MARKER => ScanEvent::Start,
        END_MARKER => match parse_field(record, 1, "weight reading", policy) {
            Ok(reading) => ScanEvent::End { reading },
            Err(error) => unreadable(true, error),
        },
        "" => unreadable(false, CheckoutError::missing_field("barcode", line_of(record))),
        barcode => match parse_field(record, 1, "weight reading", policy) {
            Ok(reading) => ScanEvent::Scan {
                barcode: barcode.to_string(),
                reading,
            },
            Err(error) => unreadable(false, error),
        },
    }
}

/// Write one verdict line
///
/// With `show_index` the verdict is preceded by an `account: <index>` line.
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(CheckoutError)` if a write error occurred
pub fn write_verdict(
    output: &mut dyn Write,
    index: usize,
    verdict: &Verdict,
    show_index: bool,
) -> Result<(), CheckoutError> {
    if show_index {
        writeln!(output, "account: {}", index)?;
    }
    writeln!(output, "{}", verdict)?;
    Ok(())
}
