//! API routes
//!
//! # Structure
//!
//! - [`health`] - liveness check
//! - [`catalog`] - published service catalog
//! - [`onboarding`] - session lifecycle, survey, selection operations
//! - [`payment`] - gateway order creation and callback verification
//!
//! Every route answers with the [`ApiResponse`] envelope; domain errors
//! map through the shared error-code table.

pub mod catalog;
pub mod health;
pub mod onboarding;
pub mod payment;

// Re-export common types for handlers
pub use crate::utils::{ApiResponse, AppError, AppResult};

/// Run a payload's validation rules, mapping failures to the envelope
pub(crate) fn validated<T: validator::Validate>(payload: T) -> AppResult<T> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;
    Ok(payload)
}
