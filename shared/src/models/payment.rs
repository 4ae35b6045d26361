//! Payment Model

use serde::{Deserialize, Serialize};

/// Payment lifecycle of an onboarding session
///
/// Moves strictly forward: `Pending` -> `OrderCreated` -> `Paid`.
/// Timestamps are Unix milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentState {
    /// No gateway order yet
    Pending,
    /// Gateway order created, awaiting checkout
    OrderCreated {
        order_id: String,
        /// Advance charged, whole currency units
        advance_amount: i64,
        created_at: i64,
    },
    /// Signature verified; the session is read-only history
    Paid {
        order_id: String,
        payment_id: String,
        verified_at: i64,
    },
}

impl PaymentState {
    pub fn is_paid(&self) -> bool {
        matches!(self, PaymentState::Paid { .. })
    }
}

/// Gateway order handed to the hosted checkout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayOrder {
    pub order_id: String,
    /// Minor currency units, as the gateway quotes them
    pub amount: i64,
    pub currency: String,
    /// Public key id the checkout widget needs
    pub key_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_state_serde_tag() {
        let state = PaymentState::Pending;
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, r#"{"status":"PENDING"}"#);

        let state = PaymentState::OrderCreated {
            order_id: "order_123".to_string(),
            advance_amount: 1770,
            created_at: 1_700_000_000_000,
        };
        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains("\"status\":\"ORDER_CREATED\""));

        let parsed: PaymentState = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, state);
    }

    #[test]
    fn test_is_paid() {
        assert!(!PaymentState::Pending.is_paid());
        assert!(
            PaymentState::Paid {
                order_id: "order_123".to_string(),
                payment_id: "pay_456".to_string(),
                verified_at: 1_700_000_000_000,
            }
            .is_paid()
        );
    }
}
