//! Weight validation and price derivation
//!
//! Regular products have a fixed price and a fixed standard weight. Weight-
//! priced products take their price from the barcode, and that price implies
//! how much the item should weigh:
//!
//! ```text
//! expected = weight_per_hundred * price / 100 + package_weight
//! ```
//!
//! In both cases a measured weight is accepted when it lies within
//! `allowable_error_weight` of the expected weight, boundaries included.

use crate::types::{Price, QuantitativeProduct, RegularProduct};
use rust_decimal::Decimal;

/// Whether `measured` lies within `tolerance` of `expected`
fn within_tolerance(expected: Decimal, measured: Decimal, tolerance: Decimal) -> bool {
    expected
        .checked_sub(measured)
        .is_some_and(|deviation| deviation.abs() <= tolerance)
}

impl RegularProduct {
    /// Check a measured item weight against the standard weight
    pub fn is_valid_weight(&self, weight: Decimal) -> bool {
        within_tolerance(self.standard_weight, weight, self.allowable_error_weight)
    }

    /// Price of one item, independent of its measured weight
    pub fn price(&self) -> Price {
        self.price
    }
}

impl QuantitativeProduct {
    /// Weight an item with the given declared price should have
    ///
    /// Returns `None` if the computation overflows.
    pub fn expected_weight(&self, declared_price: Price) -> Option<Decimal> {
        self.weight_per_hundred
            .checked_mul(Decimal::from(declared_price))?
            .checked_div(Decimal::ONE_HUNDRED)?
            .checked_add(self.package_weight)
    }

    /// Check a measured item weight against the weight implied by its price
    pub fn is_valid_weight(&self, weight: Decimal, declared_price: Price) -> bool {
        self.expected_weight(declared_price)
            .is_some_and(|expected| within_tolerance(expected, weight, self.allowable_error_weight))
    }

    /// Price of one item: the price its barcode declares
    pub fn price(&self, declared_price: Price) -> Price {
        declared_price
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn regular() -> RegularProduct {
        RegularProduct {
            id: "490000000001".to_string(),
            price: 150,
            standard_weight: Decimal::new(500, 0),
            allowable_error_weight: Decimal::new(10, 0),
        }
    }

    fn quantitative() -> QuantitativeProduct {
        QuantitativeProduct {
            id: "10001".to_string(),
            weight_per_hundred: Decimal::new(20, 1), // 2.0
            package_weight: Decimal::new(50, 0),
            allowable_error_weight: Decimal::new(5, 0),
        }
    }

    #[rstest]
    #[case::exact(Decimal::new(500, 0), true)]
    #[case::within(Decimal::new(505, 0), true)]
    #[case::upper_boundary(Decimal::new(510, 0), true)]
    #[case::lower_boundary(Decimal::new(490, 0), true)]
    #[case::just_over(Decimal::new(51001, 2), false)] // 510.01
    #[case::just_under(Decimal::new(48999, 2), false)] // 489.99
    #[case::far_over(Decimal::new(515, 0), false)]
    #[case::negative(Decimal::new(-500, 0), false)]
    fn test_regular_weight(#[case] weight: Decimal, #[case] expected: bool) {
        assert_eq!(regular().is_valid_weight(weight), expected);
    }

    #[test]
    fn test_regular_price_ignores_weight() {
        assert_eq!(regular().price(), 150);
    }

    #[rstest]
    #[case::three_hundred(300, Decimal::new(56, 0))]
    #[case::zero_price(0, Decimal::new(50, 0))]
    #[case::fractional(125, Decimal::new(525, 1))] // 2.0 * 125 / 100 + 50 = 52.5
    fn test_expected_weight(#[case] declared_price: Price, #[case] expected: Decimal) {
        assert_eq!(quantitative().expected_weight(declared_price), Some(expected));
    }

    #[rstest]
    #[case::exact(Decimal::new(56, 0), true)]
    #[case::within(Decimal::new(60, 0), true)]
    #[case::upper_boundary(Decimal::new(61, 0), true)]
    #[case::lower_boundary(Decimal::new(51, 0), true)]
    #[case::over(Decimal::new(62, 0), false)]
    #[case::under(Decimal::new(50, 0), false)]
    fn test_quantitative_weight(#[case] weight: Decimal, #[case] expected: bool) {
        assert_eq!(quantitative().is_valid_weight(weight, 300), expected);
    }

    #[test]
    fn test_quantitative_price_is_declared_price() {
        assert_eq!(quantitative().price(300), 300);
    }

    #[test]
    fn test_expected_weight_overflow_is_rejected() {
        let product = QuantitativeProduct {
            weight_per_hundred: Decimal::MAX,
            ..quantitative()
        };

        assert_eq!(product.expected_weight(99999), None);
        assert!(!product.is_valid_weight(Decimal::new(56, 0), 99999));
    }
}
