//! Billing Model

use serde::{Deserialize, Serialize};

/// Computed totals for a selection
///
/// All amounts are whole currency units. The advance is the slice of the
/// discounted total actually charged through the payment gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    /// Sum over every entry's price
    pub subtotal: i64,
    /// Sum over discount-eligible entries only
    pub discountable_base: i64,
    /// Rounded discount taken off the subtotal
    pub discount_amount: i64,
    /// `subtotal - discount_amount`
    pub total: i64,
    /// Rounded advance at the requested rate
    pub advance_amount: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals_serde() {
        let totals = Totals {
            subtotal: 6000,
            discountable_base: 1000,
            discount_amount: 100,
            total: 5900,
            advance_amount: 1770,
        };
        let json = serde_json::to_string(&totals).unwrap();
        let parsed: Totals = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, totals);
        assert!(json.contains("\"discountable_base\":1000"));
    }
}
