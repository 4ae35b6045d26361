//! Payment gateway integration via REST API (no SDK dependency)
//!
//! Two halves: order creation against the gateway's REST API, and
//! HMAC-SHA256 verification of the signature the gateway hands back after
//! the hosted checkout. Verification is authoritative: a mismatch is a
//! rejection, never a transient error.

use hmac::{Hmac, Mac};
use serde_json::{Value, json};
use sha2::Sha256;
use shared::error::{AppError, ErrorCode};
use shared::models::GatewayOrder;
use thiserror::Error;

/// Payment failures
#[derive(Debug, Error)]
pub enum PaymentError {
    #[error("Gateway unreachable: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Order creation failed: {0}")]
    OrderRejected(String),

    #[error("Payment signature mismatch")]
    VerificationFailed,
}

impl From<PaymentError> for AppError {
    fn from(e: PaymentError) -> Self {
        let code = match &e {
            PaymentError::Network(_) => ErrorCode::NetworkError,
            PaymentError::OrderRejected(_) => ErrorCode::OrderCreationFailed,
            PaymentError::VerificationFailed => ErrorCode::VerificationFailed,
        };
        AppError::with_message(code, e.to_string())
    }
}

pub type PaymentResult<T> = Result<T, PaymentError>;

/// Receipt id in the gateway's expected shape
pub fn receipt_id() -> String {
    format!("order_{}", chrono::Utc::now().timestamp_millis())
}

/// Razorpay-style order API client
#[derive(Debug, Clone)]
pub struct GatewayClient {
    http: reqwest::Client,
    api_base: String,
    key_id: String,
    key_secret: String,
}

impl GatewayClient {
    pub fn new(api_base: impl Into<String>, key_id: impl Into<String>, key_secret: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: api_base.into(),
            key_id: key_id.into(),
            key_secret: key_secret.into(),
        }
    }

    /// The public key id the hosted checkout widget needs
    pub fn key_id(&self) -> &str {
        &self.key_id
    }

    /// Create a gateway order for the advance amount
    ///
    /// `amount` is minor currency units. Gateway rejections surface the
    /// gateway's own `error.description` when present; the call is never
    /// retried here.
    pub async fn create_order(
        &self,
        amount: i64,
        currency: &str,
        receipt: &str,
        notes: Value,
    ) -> PaymentResult<GatewayOrder> {
        let resp = self
            .http
            .post(format!("{}/v1/orders", self.api_base))
            .basic_auth(&self.key_id, Some(&self.key_secret))
            .json(&json!({
                "amount": amount,
                "currency": currency,
                "receipt": receipt,
                "notes": notes,
            }))
            .send()
            .await?;

        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(Value::Null);

        if !status.is_success() {
            let description = body["error"]["description"]
                .as_str()
                .unwrap_or("gateway rejected the order")
                .to_string();
            tracing::warn!(status = %status, description = %description, "Order creation rejected");
            return Err(PaymentError::OrderRejected(description));
        }

        let order_id = body["id"]
            .as_str()
            .ok_or_else(|| PaymentError::OrderRejected(format!("malformed order response: {body}")))?
            .to_string();

        tracing::info!(order_id = %order_id, amount = amount, "Gateway order created");
        Ok(GatewayOrder {
            order_id,
            amount: body["amount"].as_i64().unwrap_or(amount),
            currency: body["currency"].as_str().unwrap_or(currency).to_string(),
            key_id: self.key_id.clone(),
        })
    }

    /// Verify the checkout callback signature with this client's secret
    pub fn verify_signature(
        &self,
        order_id: &str,
        payment_id: &str,
        signature: &str,
    ) -> PaymentResult<()> {
        verify_signature(order_id, payment_id, signature, &self.key_secret)
    }
}

/// Verify a checkout callback signature (HMAC-SHA256)
///
/// The gateway signs `"{order_id}|{payment_id}"` with the key secret and
/// sends the hex digest. Comparison is constant-time via `verify_slice`.
pub fn verify_signature(
    order_id: &str,
    payment_id: &str,
    signature: &str,
    secret: &str,
) -> PaymentResult<()> {
    let payload = format!("{order_id}|{payment_id}");
    let mut mac = Hmac::<Sha256>::new_from_slice(secret.as_bytes())
        .map_err(|_| PaymentError::VerificationFailed)?;
    mac.update(payload.as_bytes());

    let sig_bytes = hex::decode(signature).map_err(|_| PaymentError::VerificationFailed)?;
    mac.verify_slice(&sig_bytes)
        .map_err(|_| PaymentError::VerificationFailed)?;

    Ok(())
}
