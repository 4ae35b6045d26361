//! Server configuration
//!
//! All settings load from environment variables with development
//! defaults. Secrets (gateway credentials, redeem code) must be set
//! explicitly outside the development environment.
//!
//! | Variable | Default | Purpose |
//! |----------|---------|---------|
//! | ENVIRONMENT | development | development \| staging \| production |
//! | HTTP_PORT | 3000 | HTTP API port |
//! | CATALOG_PATH | (built-in) | JSON catalog override file |
//! | RAZORPAY_KEY_ID | (dev placeholder) | Gateway public key id |
//! | RAZORPAY_KEY_SECRET | (dev placeholder) | Gateway secret, also signs callbacks |
//! | RAZORPAY_API_BASE | https://api.razorpay.com | Gateway REST endpoint |
//! | REDEEM_CODE | (dev placeholder) | Shared secret unlocking the discount |
//! | MAX_DISCOUNT_PERCENT | 10 | Cap for the redeem-gated discount |
//! | ADVANCE_PERCENT | 30 | Advance rate charged at checkout |
//! | RESEND_API_KEY | (unset = mail disabled) | Email provider key |
//! | EMAIL_API_BASE | https://api.resend.com | Email provider endpoint |
//! | EMAIL_FROM | Zboost <onboarding@zboost.in> | Sender address |
//! | ADMIN_EMAILS | (empty) | Comma-separated admin recipients |
//! | LOG_DIR | (unset = stdout) | Daily-rolling log directory |

use std::path::PathBuf;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Onboarding server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Environment: development | staging | production
    pub environment: String,
    /// HTTP API port
    pub http_port: u16,
    /// JSON catalog override; `None` serves the built-in dataset
    pub catalog_path: Option<PathBuf>,
    /// Payment gateway public key id (handed to the hosted checkout)
    pub razorpay_key_id: String,
    /// Payment gateway secret: basic-auth password and callback HMAC key
    pub razorpay_key_secret: String,
    /// Payment gateway REST base URL
    pub razorpay_api_base: String,
    /// Shared secret that unlocks the discount entry
    pub redeem_code: String,
    /// Cap for the redeem-gated discount percent
    pub max_discount_percent: f64,
    /// Advance rate charged at checkout
    pub advance_percent: f64,
    /// Email provider API key; unset disables sending
    pub resend_api_key: Option<String>,
    /// Email provider base URL
    pub email_api_base: String,
    /// Sender address for outgoing mail
    pub email_from: String,
    /// Admin addresses alerted on every verified payment
    pub admin_emails: Vec<String>,
    /// Daily-rolling log directory; unset logs to stdout only
    pub log_dir: Option<String>,
}

impl Config {
    /// Require a secret env var: must be set and non-empty outside development
    fn require_secret(name: &str, environment: &str) -> Result<String, BoxError> {
        let val = match std::env::var(name) {
            Ok(v) => v,
            Err(_) => {
                if environment != "development" {
                    return Err(format!("{name} must be set in {environment} environment").into());
                }
                format!("dev-{name}-not-for-production")
            }
        };
        if val.is_empty() && environment != "development" {
            return Err(format!("{name} must not be empty in {environment} environment").into());
        }
        Ok(val)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());

        Ok(Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            catalog_path: std::env::var("CATALOG_PATH")
                .ok()
                .filter(|s| !s.is_empty())
                .map(PathBuf::from),
            razorpay_key_id: Self::require_secret("RAZORPAY_KEY_ID", &environment)?,
            razorpay_key_secret: Self::require_secret("RAZORPAY_KEY_SECRET", &environment)?,
            razorpay_api_base: std::env::var("RAZORPAY_API_BASE")
                .unwrap_or_else(|_| "https://api.razorpay.com".into()),
            redeem_code: Self::require_secret("REDEEM_CODE", &environment)?,
            max_discount_percent: std::env::var("MAX_DISCOUNT_PERCENT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(10.0),
            advance_percent: std::env::var("ADVANCE_PERCENT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30.0),
            resend_api_key: std::env::var("RESEND_API_KEY").ok().filter(|s| !s.is_empty()),
            email_api_base: std::env::var("EMAIL_API_BASE")
                .unwrap_or_else(|_| "https://api.resend.com".into()),
            email_from: std::env::var("EMAIL_FROM")
                .unwrap_or_else(|_| "Zboost <onboarding@zboost.in>".into()),
            admin_emails: std::env::var("ADMIN_EMAILS")
                .map(|v| {
                    v.split(',')
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(String::from)
                        .collect()
                })
                .unwrap_or_default(),
            log_dir: std::env::var("LOG_DIR").ok().filter(|s| !s.is_empty()),
            environment,
        })
    }

    /// Development config with overridden redeem code and catalog source
    ///
    /// Used by tests that need deterministic secrets without touching the
    /// process environment.
    pub fn with_overrides(redeem_code: impl Into<String>, catalog_path: Option<PathBuf>) -> Self {
        Self {
            environment: "development".into(),
            http_port: 0,
            catalog_path,
            razorpay_key_id: "rzp_test_key".into(),
            razorpay_key_secret: "rzp_test_secret".into(),
            razorpay_api_base: "https://api.razorpay.com".into(),
            redeem_code: redeem_code.into(),
            max_discount_percent: 10.0,
            advance_percent: 30.0,
            resend_api_key: None,
            email_api_base: "https://api.resend.com".into(),
            email_from: "Zboost <onboarding@zboost.in>".into(),
            admin_emails: vec![],
            log_dir: None,
        }
    }

    /// Whether this is the production environment
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Whether this is the development environment
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_secret_dev_placeholder() {
        let val = Config::require_secret("ONBOARD_TEST_UNSET_SECRET", "development").unwrap();
        assert!(val.starts_with("dev-"));
    }

    #[test]
    fn test_require_secret_rejected_in_production() {
        assert!(Config::require_secret("ONBOARD_TEST_UNSET_SECRET", "production").is_err());
    }

    #[test]
    fn test_overrides() {
        let config = Config::with_overrides("CODE@123", None);
        assert!(config.is_development());
        assert!(!config.is_production());
        assert_eq!(config.redeem_code, "CODE@123");
        assert_eq!(config.advance_percent, 30.0);
        assert!(config.admin_emails.is_empty());
    }
}
