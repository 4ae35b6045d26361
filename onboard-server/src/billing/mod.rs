//! Billing totals
//!
//! Pure totals computation over a cart. Amounts are whole currency units;
//! the percentage math runs on `Decimal` and rounds back to whole units,
//! midpoint away from zero.

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use shared::models::{SelectionEntry, Totals};

/// Advance rate quoted on the selection-step summary
pub const SUMMARY_ADVANCE_PERCENT: f64 = 20.0;
/// Advance rate charged at checkout when not configured otherwise
pub const BILLING_ADVANCE_PERCENT: f64 = 30.0;

/// Which advance rate a totals read is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdvanceContext {
    /// Selection-step summary quote
    Summary,
    /// Checkout charge
    Billing,
}

impl AdvanceContext {
    /// The advance rate for this context
    ///
    /// The summary quote is fixed; the checkout rate follows the
    /// configured billing rate.
    pub fn advance_percent(self, billing_rate: f64) -> f64 {
        match self {
            AdvanceContext::Summary => SUMMARY_ADVANCE_PERCENT,
            AdvanceContext::Billing => billing_rate,
        }
    }
}

/// Convert f64 to Decimal for calculation
#[inline]
fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Round to whole currency units, midpoint away from zero
#[inline]
fn round_units(value: Decimal) -> i64 {
    value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or_default()
}

/// Compute cart totals at the given discount and advance rates
///
/// The discount applies to the eligible base only; ineligible entries
/// count toward the subtotal but never shrink under a discount.
pub fn totals(entries: &[SelectionEntry], discount_percent: f64, advance_percent: f64) -> Totals {
    let subtotal: i64 = entries.iter().map(SelectionEntry::price).sum();
    let discountable_base: i64 = entries
        .iter()
        .filter(|e| e.discount_eligible())
        .map(SelectionEntry::price)
        .sum();

    let discount_amount = round_units(
        Decimal::from(discountable_base) * to_decimal(discount_percent) / Decimal::ONE_HUNDRED,
    );
    let total = subtotal - discount_amount;
    let advance_amount =
        round_units(Decimal::from(total) * to_decimal(advance_percent) / Decimal::ONE_HUNDRED);

    Totals {
        subtotal,
        discountable_base,
        discount_amount,
        total,
        advance_amount,
    }
}

/// Gateway amount in minor units (paise)
#[inline]
pub fn to_minor_units(amount: i64) -> i64 {
    amount * 100
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::OptionSelection;

    fn entry(price: i64, eligible: bool) -> SelectionEntry {
        SelectionEntry::Option(OptionSelection {
            section_id: "s".to_string(),
            option_id: format!("o-{}-{}", price, eligible),
            name: "Test".to_string(),
            price,
            quantity: None,
            discount_eligible: eligible,
            language: None,
            catalog_version: 1,
        })
    }

    #[test]
    fn test_empty_cart() {
        let t = totals(&[], 10.0, 20.0);
        assert_eq!(t.subtotal, 0);
        assert_eq!(t.discountable_base, 0);
        assert_eq!(t.discount_amount, 0);
        assert_eq!(t.total, 0);
        assert_eq!(t.advance_amount, 0);
    }

    #[test]
    fn test_discount_skips_ineligible_entries() {
        // 1000 eligible + 5000 ineligible at 10%
        let entries = vec![entry(1000, true), entry(5000, false)];
        let t = totals(&entries, 10.0, 20.0);

        assert_eq!(t.subtotal, 6000);
        assert_eq!(t.discountable_base, 1000);
        assert_eq!(t.discount_amount, 100);
        assert_eq!(t.total, 5900);
        assert_eq!(t.advance_amount, 1180);
    }

    #[test]
    fn test_zero_discount() {
        let entries = vec![entry(1000, true)];
        let t = totals(&entries, 0.0, 20.0);
        assert_eq!(t.discount_amount, 0);
        assert_eq!(t.total, 1000);
        assert_eq!(t.advance_amount, 200);
    }

    #[test]
    fn test_half_percent_discount() {
        // 0.5% of 10000 = 50, no rounding needed
        let entries = vec![entry(10000, true)];
        let t = totals(&entries, 0.5, 20.0);
        assert_eq!(t.discount_amount, 50);

        // 0.5% of 9999 = 49.995, rounds to 50
        let entries = vec![entry(9999, true)];
        let t = totals(&entries, 0.5, 20.0);
        assert_eq!(t.discount_amount, 50);
    }

    #[test]
    fn test_discount_rounds_midpoint_away_from_zero() {
        // 2.5% of 101 = 2.525 -> 3
        let entries = vec![entry(101, true)];
        let t = totals(&entries, 2.5, 20.0);
        assert_eq!(t.discount_amount, 3);

        // 0.5% of 100 = 0.5 -> 1
        let entries = vec![entry(100, true)];
        let t = totals(&entries, 0.5, 20.0);
        assert_eq!(t.discount_amount, 1);
    }

    #[test]
    fn test_advance_rounding() {
        // Total 10001 at 30% = 3000.3 -> 3000
        let entries = vec![entry(10001, true)];
        let t = totals(&entries, 0.0, 30.0);
        assert_eq!(t.total, 10001);
        assert_eq!(t.advance_amount, 3000);

        // Total 10005 at 30% = 3001.5 -> 3002
        let entries = vec![entry(10005, true)];
        let t = totals(&entries, 0.0, 30.0);
        assert_eq!(t.advance_amount, 3002);
    }

    #[test]
    fn test_totals_idempotent() {
        let entries = vec![entry(1000, true), entry(5000, false), entry(3500, true)];
        let first = totals(&entries, 7.5, 30.0);
        let second = totals(&entries, 7.5, 30.0);
        assert_eq!(first, second);
    }

    #[test]
    fn test_advance_context_rates() {
        assert_eq!(AdvanceContext::Summary.advance_percent(30.0), 20.0);
        assert_eq!(AdvanceContext::Billing.advance_percent(30.0), 30.0);
        assert_eq!(AdvanceContext::Billing.advance_percent(25.0), 25.0);
    }

    #[test]
    fn test_advance_context_serde() {
        assert_eq!(
            serde_json::to_string(&AdvanceContext::Summary).unwrap(),
            "\"summary\""
        );
        let parsed: AdvanceContext = serde_json::from_str("\"billing\"").unwrap();
        assert_eq!(parsed, AdvanceContext::Billing);
    }

    #[test]
    fn test_minor_units() {
        assert_eq!(to_minor_units(2950), 295_000);
        assert_eq!(to_minor_units(0), 0);
    }
}
