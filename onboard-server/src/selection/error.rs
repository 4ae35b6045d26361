//! Selection engine errors

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Engine failure conditions
///
/// Every condition is recoverable by correcting the input; none of them
/// abort the session or touch the cart.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SelectionError {
    #[error("Option not found: {0}")]
    OptionNotFound(String),

    #[error("Option not available: {0}")]
    OptionUnavailable(String),

    #[error("Not metered: {0}")]
    NotMetered(String),

    #[error("Plan not found: {0}")]
    PlanNotFound(String),

    #[error("Plan not selected: {0}")]
    PlanNotSelected(String),

    #[error("Add-on not found: {0}")]
    AddOnNotFound(String),

    #[error("No language choice pending")]
    NoPendingChoice,

    #[error("Invalid redeem code")]
    InvalidCode,

    #[error("Discount locked until a valid redeem code is applied")]
    DiscountLocked,
}

impl From<SelectionError> for AppError {
    fn from(e: SelectionError) -> Self {
        let code = match &e {
            SelectionError::OptionNotFound(_) => ErrorCode::OptionNotFound,
            SelectionError::OptionUnavailable(_) => ErrorCode::OptionUnavailable,
            SelectionError::NotMetered(_) => ErrorCode::NotMetered,
            SelectionError::PlanNotFound(_) => ErrorCode::PlanNotFound,
            SelectionError::PlanNotSelected(_) => ErrorCode::PlanNotSelected,
            SelectionError::AddOnNotFound(_) => ErrorCode::AddOnNotFound,
            SelectionError::NoPendingChoice => ErrorCode::NoPendingLanguageChoice,
            SelectionError::InvalidCode => ErrorCode::InvalidRedeemCode,
            SelectionError::DiscountLocked => ErrorCode::DiscountLocked,
        };
        AppError::with_message(code, e.to_string())
    }
}

/// Result type for engine operations
pub type SelectionResult<T> = Result<T, SelectionError>;
