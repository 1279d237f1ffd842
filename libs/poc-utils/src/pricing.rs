//! Price adjustments and discount rates.

use std::convert::Infallible;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

const PREMIUM_MARKUP: f64 = 1.25;
const DISCOUNT_FACTOR: f64 = 0.85;
const HANDLING_FEE: f64 = 15.50;
const BULK_THRESHOLD: f64 = 1000.0;
const BULK_REBATE: f64 = 50.0;

/// Pricing tier of a product. Unrecognized names are `Standard`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PriceCategory {
    Premium,
    Discount,
    #[default]
    Standard,
}

impl FromStr for PriceCategory {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "premium" => Self::Premium,
            "discount" => Self::Discount,
            _ => Self::Standard,
        })
    }
}

/// Final price for `base_price`: tier adjustment, plus the handling fee, minus
/// the bulk rebate above 1000, rounded to cents (halves round up).
#[must_use]
pub fn calculate_price(base_price: f64, category: PriceCategory) -> f64 {
    let mut price = match category {
        PriceCategory::Premium => base_price * PREMIUM_MARKUP,
        PriceCategory::Discount => base_price * DISCOUNT_FACTOR,
        PriceCategory::Standard => base_price,
    };

    price += HANDLING_FEE;
    if price > BULK_THRESHOLD {
        price -= BULK_REBATE;
    }

    (price * 100.0 + 0.5).floor() / 100.0
}

/// Customer segment. Unrecognized names are `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerType {
    Regular,
    Premium,
    Vip,
    Corporate,
    Government,
    NonProfit,
    Student,
    Senior,
    Employee,
    Other,
}

impl FromStr for CustomerType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "regular" => Self::Regular,
            "premium" => Self::Premium,
            "vip" => Self::Vip,
            "corporate" => Self::Corporate,
            "government" => Self::Government,
            "non-profit" => Self::NonProfit,
            "student" => Self::Student,
            "senior" => Self::Senior,
            "employee" => Self::Employee,
            _ => Self::Other,
        })
    }
}

#[must_use]
pub fn discount_rate(customer: CustomerType) -> f64 {
    match customer {
        CustomerType::Regular => 0.05,
        CustomerType::Premium => 0.10,
        CustomerType::Vip => 0.15,
        CustomerType::Corporate => 0.20,
        CustomerType::Government => 0.25,
        CustomerType::NonProfit => 0.30,
        CustomerType::Student => 0.35,
        CustomerType::Senior => 0.40,
        CustomerType::Employee => 0.50,
        CustomerType::Other => 0.0,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(default)]
    pub name: String,
    pub price: f64,
}

/// Sum of item prices.
#[must_use]
pub fn calc_total(items: &[LineItem]) -> f64 {
    items.iter().map(|item| item.price).sum()
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use proptest::prelude::*;

    fn category(s: &str) -> PriceCategory {
        s.parse().unwrap()
    }

    #[test]
    fn price_per_category() {
        assert_eq!(calculate_price(100.0, category("premium")), 140.5);
        assert_eq!(calculate_price(100.0, category("discount")), 100.5);
        assert_eq!(calculate_price(100.0, category("regular")), 115.5);
        assert_eq!(calculate_price(0.0, PriceCategory::Standard), 15.5);
    }

    #[test]
    fn bulk_rebate_above_threshold() {
        assert_eq!(calculate_price(1000.0, PriceCategory::Standard), 965.5);
        assert_eq!(calculate_price(984.5, PriceCategory::Standard), 1000.0);
        assert_eq!(calculate_price(2000.0, PriceCategory::Premium), 2465.5);
    }

    #[test]
    fn rounds_to_cents() {
        assert_eq!(calculate_price(10.004, PriceCategory::Standard), 25.5);
        assert_eq!(calculate_price(1.0 / 3.0, PriceCategory::Standard), 15.83);
    }

    #[test]
    fn discount_rates() {
        let cases = [
            ("regular", 0.05),
            ("premium", 0.10),
            ("vip", 0.15),
            ("corporate", 0.20),
            ("government", 0.25),
            ("non-profit", 0.30),
            ("student", 0.35),
            ("senior", 0.40),
            ("employee", 0.50),
            ("unknown", 0.0),
            ("", 0.0),
            ("VIP", 0.0),
        ];
        for (name, rate) in cases {
            let customer: CustomerType = name.parse().unwrap();
            assert_eq!(discount_rate(customer), rate, "{name}");
        }
    }

    #[test]
    fn totals() {
        assert_eq!(calc_total(&[]), 0.0);
        let items = [
            LineItem {
                name: "a".to_owned(),
                price: 10.0,
            },
            LineItem {
                name: "b".to_owned(),
                price: 2.5,
            },
        ];
        assert_eq!(calc_total(&items), 12.5);
    }

    #[test]
    fn line_items_deserialize_without_name() {
        let items: Vec<LineItem> = serde_json::from_str(r#"[{"price": 1.5}, {"price": 2}]"#).unwrap();
        assert_eq!(calc_total(&items), 3.5);
    }

    proptest! {
        #[test]
        fn price_has_at_most_two_decimals(base in 0.0f64..100_000.0) {
            let price = calculate_price(base, PriceCategory::Standard);
            let cents = price * 100.0;
            prop_assert!((cents - cents.round()).abs() < 1e-6);
        }

        #[test]
        fn premium_never_cheaper_than_discount(base in 0.0f64..100_000.0) {
            prop_assert!(
                calculate_price(base, PriceCategory::Premium)
                    >= calculate_price(base, PriceCategory::Discount)
            );
        }
    }
}
