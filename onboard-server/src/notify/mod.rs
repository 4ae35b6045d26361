//! Transactional email dispatch
//!
//! Best-effort notification after a verified payment: one receipt to the
//! customer, one alert per configured admin address. Failures are logged
//! and never propagate; verification must not hinge on the mail provider.

pub mod templates;

use async_trait::async_trait;
use serde_json::json;
use shared::models::{BusinessDetails, SelectionEntry, Totals};
use thiserror::Error;

/// Email delivery failures
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Email provider unreachable: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Email rejected: {0}")]
    Rejected(String),
}

/// Outgoing mail seam
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, to: &str, subject: &str, html: &str) -> Result<(), NotifyError>;
}

/// HTTP JSON provider (Resend-style `POST /emails` with a bearer key)
pub struct HttpMailer {
    http: reqwest::Client,
    api_base: String,
    api_key: String,
    from: String,
}

impl HttpMailer {
    pub fn new(
        api_base: impl Into<String>,
        api_key: impl Into<String>,
        from: impl Into<String>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: api_base.into(),
            api_key: api_key.into(),
            from: from.into(),
        }
    }
}

#[async_trait]
impl Mailer for HttpMailer {
    async fn send(&self, to: &str, subject: &str, html: &str) -> Result<(), NotifyError> {
        let resp = self
            .http
            .post(format!("{}/emails", self.api_base))
            .bearer_auth(&self.api_key)
            .json(&json!({
                "from": self.from,
                "to": [to],
                "subject": subject,
                "html": html,
            }))
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(NotifyError::Rejected(format!("{status}: {body}")));
        }

        tracing::info!(to = to, subject = subject, "Email sent");
        Ok(())
    }
}

/// No-op mailer used when no provider key is configured
pub struct DisabledMailer;

#[async_trait]
impl Mailer for DisabledMailer {
    async fn send(&self, to: &str, subject: &str, _html: &str) -> Result<(), NotifyError> {
        tracing::debug!(to = to, subject = subject, "Mailer disabled, email skipped");
        Ok(())
    }
}

/// Send the post-payment emails, best-effort
///
/// Each failure is logged and swallowed; the caller has already marked
/// the payment verified and must stay that way.
pub async fn dispatch_payment_emails(
    mailer: &dyn Mailer,
    admin_emails: &[String],
    business: &BusinessDetails,
    entries: &[SelectionEntry],
    totals: &Totals,
    payment_id: &str,
) {
    let (subject, html) = templates::receipt(business, entries, totals, payment_id);
    if let Err(e) = mailer.send(&business.email, &subject, &html).await {
        tracing::warn!(to = %business.email, error = %e, "Receipt email failed");
    }

    let (subject, html) = templates::admin_alert(business, entries, totals);
    let sends = admin_emails
        .iter()
        .map(|to| mailer.send(to, &subject, &html));
    for (to, result) in admin_emails.iter().zip(futures::future::join_all(sends).await) {
        if let Err(e) = result {
            tracing::warn!(to = %to, error = %e, "Admin alert failed");
        }
    }
}
