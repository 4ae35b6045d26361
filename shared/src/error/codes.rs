//! Unified error codes for the Zboost onboarding platform
//!
//! This module defines all error codes used across the onboarding server and frontend.
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Session errors
//! - 2xxx: Catalog errors
//! - 3xxx: Selection errors
//! - 4xxx: Discount errors
//! - 5xxx: Payment errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Session ====================
    /// Onboarding session not found
    SessionNotFound = 1001,
    /// Session has already completed payment
    SessionAlreadyPaid = 1002,
    /// Business profile is missing required fields
    ProfileIncomplete = 1003,

    // ==================== 2xxx: Catalog ====================
    /// Catalog option not found
    OptionNotFound = 2001,
    /// Fixed plan not found
    PlanNotFound = 2002,
    /// Plan add-on not found
    AddOnNotFound = 2003,
    /// Option is marked as not yet available
    OptionUnavailable = 2004,
    /// Catalog data failed validation
    CatalogInvalid = 2005,

    // ==================== 3xxx: Selection ====================
    /// Option does not support per-unit quantity
    NotMetered = 3001,
    /// No fixed plan is currently selected
    PlanNotSelected = 3002,
    /// No language choice is pending confirmation
    NoPendingLanguageChoice = 3003,
    /// Selection contains no entries
    SelectionEmpty = 3004,

    // ==================== 4xxx: Discount ====================
    /// Redeem code did not match
    InvalidRedeemCode = 4001,
    /// Discount requires a verified redeem code
    DiscountLocked = 4002,

    // ==================== 5xxx: Payment ====================
    /// Payment processing failed
    PaymentFailed = 5001,
    /// Payment signature verification failed
    VerificationFailed = 5002,
    /// Gateway order creation failed
    OrderCreationFailed = 5003,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Network error
    NetworkError = 9003,
    /// Configuration error
    ConfigError = 9005,
    /// Notification delivery failed
    NotificationFailed = 9101,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Session
            ErrorCode::SessionNotFound => "Onboarding session not found",
            ErrorCode::SessionAlreadyPaid => "Session has already been paid",
            ErrorCode::ProfileIncomplete => "Business profile is incomplete",

            // Catalog
            ErrorCode::OptionNotFound => "Catalog option not found",
            ErrorCode::PlanNotFound => "Plan not found",
            ErrorCode::AddOnNotFound => "Add-on not found",
            ErrorCode::OptionUnavailable => "Option is not yet available",
            ErrorCode::CatalogInvalid => "Catalog data is invalid",

            // Selection
            ErrorCode::NotMetered => "Option does not support quantity",
            ErrorCode::PlanNotSelected => "No plan is selected",
            ErrorCode::NoPendingLanguageChoice => "No language choice is pending",
            ErrorCode::SelectionEmpty => "Selection is empty",

            // Discount
            ErrorCode::InvalidRedeemCode => "Invalid redeem code",
            ErrorCode::DiscountLocked => "Discount requires a redeem code",

            // Payment
            ErrorCode::PaymentFailed => "Payment processing failed",
            ErrorCode::VerificationFailed => "Payment verification failed",
            ErrorCode::OrderCreationFailed => "Gateway order creation failed",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::NetworkError => "Network error",
            ErrorCode::ConfigError => "Configuration error",
            ErrorCode::NotificationFailed => "Notification delivery failed",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Session
            1001 => Ok(ErrorCode::SessionNotFound),
            1002 => Ok(ErrorCode::SessionAlreadyPaid),
            1003 => Ok(ErrorCode::ProfileIncomplete),

            // Catalog
            2001 => Ok(ErrorCode::OptionNotFound),
            2002 => Ok(ErrorCode::PlanNotFound),
            2003 => Ok(ErrorCode::AddOnNotFound),
            2004 => Ok(ErrorCode::OptionUnavailable),
            2005 => Ok(ErrorCode::CatalogInvalid),

            // Selection
            3001 => Ok(ErrorCode::NotMetered),
            3002 => Ok(ErrorCode::PlanNotSelected),
            3003 => Ok(ErrorCode::NoPendingLanguageChoice),
            3004 => Ok(ErrorCode::SelectionEmpty),

            // Discount
            4001 => Ok(ErrorCode::InvalidRedeemCode),
            4002 => Ok(ErrorCode::DiscountLocked),

            // Payment
            5001 => Ok(ErrorCode::PaymentFailed),
            5002 => Ok(ErrorCode::VerificationFailed),
            5003 => Ok(ErrorCode::OrderCreationFailed),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9003 => Ok(ErrorCode::NetworkError),
            9005 => Ok(ErrorCode::ConfigError),
            9101 => Ok(ErrorCode::NotificationFailed),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
