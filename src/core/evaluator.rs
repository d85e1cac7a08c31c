//! Transaction evaluation
//!
//! This module provides the TransactionEvaluator that turns a reconstructed
//! transaction into its verdict by coordinating the checksum, the barcode
//! layout, the catalog and the pricing rules.
//!
//! Every scan is examined, even after an anomaly has been found, so that the
//! verdict reports every kind of anomaly present in the transaction:
//! - A bad check digit, an unknown product or an unreadable declared price
//!   raises the invalid-code flag
//! - A measured weight outside tolerance raises the invalid-weight flag
//!
//! - A transaction with an unreadable record raises the invalid-weight flag
//!
//! Only scans that pass their weight check contribute to the total.

use crate::core::barcode;
use crate::core::checksum;
use crate::core::traits::ProductLookup;
use crate::types::{NumericPolicy, Price, ProductRecord, ProductScan, Transaction, Verdict};
use tracing::debug;

/// Pricing result for a single scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricingOutcome {
    /// Weight accepted; the item costs this much
    Priced(Price),

    /// No catalog entry of the barcode's kind matches the barcode
    UnknownProduct,

    /// The price window of a weight-priced barcode is not a number
    UnreadablePrice,

    /// Measured weight outside the product's tolerance
    WeightOutOfTolerance,
}

/// Everything the evaluator learned about one scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanAssessment {
    /// Whether the barcode carries a correct check digit
    pub checksum_valid: bool,

    /// Outcome of lookup and weight validation
    pub pricing: PricingOutcome,
}

impl ScanAssessment {
    /// Whether this scan calls for the invalid-code flag
    pub fn invalid_code(&self) -> bool {
        !self.checksum_valid
            || matches!(
                self.pricing,
                PricingOutcome::UnknownProduct | PricingOutcome::UnreadablePrice
            )
    }

    /// Whether this scan calls for the invalid-weight flag
    pub fn invalid_weight(&self) -> bool {
        self.pricing == PricingOutcome::WeightOutOfTolerance
    }

    /// Amount this scan adds to the transaction total
    pub fn price(&self) -> Price {
        match self.pricing {
            PricingOutcome::Priced(price) => price,
            _ => 0,
        }
    }
}

/// Transaction evaluator
///
/// Holds a shared reference to the catalog; evaluation itself keeps no state
/// between transactions.
pub struct TransactionEvaluator<'a, C: ProductLookup + ?Sized> {
    catalog: &'a C,
    policy: NumericPolicy,
}

impl<'a, C: ProductLookup + ?Sized> TransactionEvaluator<'a, C> {
    /// Create an evaluator over `catalog`
    ///
    /// # Arguments
    ///
    /// * `catalog` - Product lookup used to resolve barcodes
    /// * `policy` - How non-digit barcode characters are read
    pub fn new(catalog: &'a C, policy: NumericPolicy) -> Self {
        TransactionEvaluator { catalog, policy }
    }

    /// Evaluate a transaction
    ///
    /// Flags and the running total are local to this call, so no state leaks
    /// from one transaction into the next.
    pub fn evaluate(&self, transaction: &Transaction) -> Verdict {
        let mut total: Price = 0;
        let mut invalid_code = false;
        let mut invalid_weight = transaction.unreadable;

        for scan in &transaction.scans {
            let assessment = self.assess(scan);
            debug!(barcode = %scan.barcode, weight = %scan.weight, ?assessment, "Assessed scan");

            invalid_code |= assessment.invalid_code();
            invalid_weight |= assessment.invalid_weight();
            total = total.saturating_add(assessment.price());
        }

        Verdict::from_flags(total, invalid_code, invalid_weight)
    }

    /// Examine a single scan
    pub fn assess(&self, scan: &ProductScan) -> ScanAssessment {
        ScanAssessment {
            checksum_valid: checksum::is_valid(&scan.barcode, self.policy),
            pricing: self.price_scan(scan),
        }
    }

    fn price_scan(&self, scan: &ProductScan) -> PricingOutcome {
        let kind = barcode::product_kind(&scan.barcode);
        let product = barcode::lookup_key(&scan.barcode, kind)
            .and_then(|id| self.catalog.lookup(id))
            .filter(|product| product.kind() == kind);

        match product {
            Some(ProductRecord::Regular(product)) => {
                if product.is_valid_weight(scan.weight) {
                    PricingOutcome::Priced(product.price())
                } else {
                    PricingOutcome::WeightOutOfTolerance
                }
            }
            Some(ProductRecord::Quantitative(product)) => {
                match barcode::declared_price(&scan.barcode, self.policy) {
                    Some(declared) if product.is_valid_weight(scan.weight, declared) => {
                        PricingOutcome::Priced(product.price(declared))
                    }
                    Some(_) => PricingOutcome::WeightOutOfTolerance,
                    None => PricingOutcome::UnreadablePrice,
                }
            }
            None => PricingOutcome::UnknownProduct,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Catalog;
    use crate::types::{QuantitativeProduct, RegularProduct};
    use rstest::rstest;
    use rust_decimal::Decimal;
    use std::collections::HashMap;

    /// Regular product 490000000001: 150, 500 +/- 10
    const REGULAR_BARCODE: &str = "4900000000014";
    /// Regular product 490000000002: 98, 200 +/- 3
    const OTHER_REGULAR_BARCODE: &str = "4900000000025";
    /// Weight-priced product 10001 declared at 300: expected 56 +/- 5
    const QUANTITATIVE_BARCODE: &str = "0210001003007";
    /// Valid check digit, product not in the catalog
    const UNKNOWN_BARCODE: &str = "4900000000036";

    fn catalog() -> Catalog {
        vec![
            ProductRecord::Regular(RegularProduct {
                id: "490000000001".to_string(),
                price: 150,
                standard_weight: Decimal::new(500, 0),
                allowable_error_weight: Decimal::new(10, 0),
            }),
            ProductRecord::Regular(RegularProduct {
                id: "490000000002".to_string(),
                price: 98,
                standard_weight: Decimal::new(200, 0),
                allowable_error_weight: Decimal::new(3, 0),
            }),
            ProductRecord::Quantitative(QuantitativeProduct {
                id: "10001".to_string(),
                weight_per_hundred: Decimal::new(20, 1),
                package_weight: Decimal::new(50, 0),
                allowable_error_weight: Decimal::new(5, 0),
            }),
        ]
        .into_iter()
        .collect()
    }

    fn scan(barcode: &str, weight: i64) -> ProductScan {
        ProductScan {
            barcode: barcode.to_string(),
            weight: Decimal::new(weight, 0),
        }
    }

    fn transaction(scans: Vec<ProductScan>) -> Transaction {
        Transaction {
            scans,
            ..Transaction::default()
        }
    }

    #[test]
    fn test_empty_transaction_totals_zero() {
        let catalog = catalog();
        let evaluator = TransactionEvaluator::new(&catalog, NumericPolicy::Strict);

        assert_eq!(evaluator.evaluate(&Transaction::new()), Verdict::Total(0));
    }

    #[test]
    fn test_valid_scans_are_summed() {
        let catalog = catalog();
        let evaluator = TransactionEvaluator::new(&catalog, NumericPolicy::Strict);

        let verdict = evaluator.evaluate(&transaction(vec![
            scan(REGULAR_BARCODE, 505),
            scan(QUANTITATIVE_BARCODE, 60),
            scan(OTHER_REGULAR_BARCODE, 198),
        ]));

        assert_eq!(verdict, Verdict::Total(150 + 300 + 98));
    }

    #[rstest]
    #[case::bad_check_digit(
        "4900000000015",
        500,
        Verdict::StaffCall { invalid_code: true, invalid_weight: false }
    )]
    #[case::unknown_product(
        UNKNOWN_BARCODE,
        500,
        Verdict::StaffCall { invalid_code: true, invalid_weight: false }
    )]
    #[case::regular_weight(
        REGULAR_BARCODE,
        515,
        Verdict::StaffCall { invalid_code: false, invalid_weight: true }
    )]
    #[case::quantitative_weight(
        QUANTITATIVE_BARCODE,
        62,
        Verdict::StaffCall { invalid_code: false, invalid_weight: true }
    )]
    #[case::bad_check_digit_and_weight(
        "4900000000015",
        515,
        Verdict::StaffCall { invalid_code: true, invalid_weight: true }
    )]
    #[case::short_barcode(
        "4900",
        500,
        Verdict::StaffCall { invalid_code: true, invalid_weight: false }
    )]
    fn test_single_scan_anomalies(
        #[case] barcode: &str,
        #[case] weight: i64,
        #[case] expected: Verdict,
    ) {
        let catalog = catalog();
        let evaluator = TransactionEvaluator::new(&catalog, NumericPolicy::Strict);

        assert_eq!(evaluator.evaluate(&transaction(vec![scan(barcode, weight)])), expected);
    }

    #[test]
    fn test_unknown_product_contributes_nothing() {
        let catalog = catalog();
        let evaluator = TransactionEvaluator::new(&catalog, NumericPolicy::Strict);

        let assessment = evaluator.assess(&scan(UNKNOWN_BARCODE, 500));

        assert!(assessment.checksum_valid);
        assert_eq!(assessment.pricing, PricingOutcome::UnknownProduct);
        assert!(assessment.invalid_code());
        assert_eq!(assessment.price(), 0);
    }

    #[test]
    fn test_bad_checksum_still_prices_scan() {
        let catalog = catalog();
        let evaluator = TransactionEvaluator::new(&catalog, NumericPolicy::Strict);

        let assessment = evaluator.assess(&scan("4900000000015", 500));

        assert!(!assessment.checksum_valid);
        assert_eq!(assessment.pricing, PricingOutcome::Priced(150));
    }

    #[test]
    fn test_both_anomalies_from_different_scans_give_one_verdict() {
        let catalog = catalog();
        let evaluator = TransactionEvaluator::new(&catalog, NumericPolicy::Strict);

        let verdict = evaluator.evaluate(&transaction(vec![
            scan(UNKNOWN_BARCODE, 500),
            scan(REGULAR_BARCODE, 505),
            scan(OTHER_REGULAR_BARCODE, 150),
        ]));

        assert_eq!(
            verdict,
            Verdict::StaffCall {
                invalid_code: true,
                invalid_weight: true
            }
        );
    }

    #[test]
    fn test_flags_do_not_leak_between_transactions() {
        let catalog = catalog();
        let evaluator = TransactionEvaluator::new(&catalog, NumericPolicy::Strict);

        let bad = transaction(vec![scan(UNKNOWN_BARCODE, 500), scan(REGULAR_BARCODE, 999)]);
        let good = transaction(vec![scan(REGULAR_BARCODE, 500)]);

        assert!(evaluator.evaluate(&bad).is_staff_call());
        assert_eq!(evaluator.evaluate(&good), Verdict::Total(150));
    }

    #[rstest]
    #[case::strict(NumericPolicy::Strict, PricingOutcome::UnreadablePrice)]
    #[case::lenient(NumericPolicy::Lenient, PricingOutcome::WeightOutOfTolerance)]
    fn test_unreadable_declared_price(
        #[case] policy: NumericPolicy,
        #[case] expected: PricingOutcome,
    ) {
        let catalog = catalog();
        let evaluator = TransactionEvaluator::new(&catalog, policy);

        // Price window "0x300" reads as 0 leniently, and 0 expects 50, not 80
        let assessment = evaluator.assess(&scan("02100010x3007", 80));

        assert_eq!(assessment.pricing, expected);
    }

    #[test]
    fn test_lenient_unreadable_price_is_free_at_package_weight() {
        let catalog = catalog();
        let evaluator = TransactionEvaluator::new(&catalog, NumericPolicy::Lenient);

        let verdict = evaluator.evaluate(&transaction(vec![scan("02100010x3007", 50)]));

        assert_eq!(verdict, Verdict::Total(0));
    }

    #[test]
    fn test_unreadable_transaction_calls_staff() {
        let catalog = catalog();
        let evaluator = TransactionEvaluator::new(&catalog, NumericPolicy::Strict);

        let verdict = evaluator.evaluate(&Transaction {
            scans: vec![scan(REGULAR_BARCODE, 500)],
            unreadable: true,
        });

        assert_eq!(
            verdict,
            Verdict::StaffCall {
                invalid_code: false,
                invalid_weight: true
            }
        );
    }

    #[test]
    fn test_kind_mismatch_is_unknown_product() {
        let mut lookup = HashMap::new();
        lookup.insert(
            "10001".to_string(),
            ProductRecord::Regular(RegularProduct {
                id: "10001".to_string(),
                price: 10,
                standard_weight: Decimal::new(56, 0),
                allowable_error_weight: Decimal::new(5, 0),
            }),
        );
        let evaluator = TransactionEvaluator::new(&lookup, NumericPolicy::Strict);

        let assessment = evaluator.assess(&scan(QUANTITATIVE_BARCODE, 56));

        assert_eq!(assessment.pricing, PricingOutcome::UnknownProduct);
    }

    #[test]
    fn test_evaluator_accepts_trait_object() {
        let catalog = catalog();
        let lookup: &dyn ProductLookup = &catalog;
        let evaluator = TransactionEvaluator::new(lookup, NumericPolicy::Strict);

        let verdict = evaluator.evaluate(&transaction(vec![scan(REGULAR_BARCODE, 500)]));

        assert_eq!(verdict, Verdict::Total(150));
    }
}
