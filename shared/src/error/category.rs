//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 1xxx: Session errors
/// - 2xxx: Catalog errors
/// - 3xxx: Selection errors
/// - 4xxx: Discount errors
/// - 5xxx: Payment errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Session errors (1xxx)
    Session,
    /// Catalog errors (2xxx)
    Catalog,
    /// Selection errors (3xxx)
    Selection,
    /// Discount errors (4xxx)
    Discount,
    /// Payment errors (5xxx)
    Payment,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Session,
            2000..3000 => Self::Catalog,
            3000..4000 => Self::Selection,
            4000..5000 => Self::Discount,
            5000..6000 => Self::Payment,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Session => "session",
            Self::Catalog => "catalog",
            Self::Selection => "selection",
            Self::Discount => "discount",
            Self::Payment => "payment",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCategory::from_code(0), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(8), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(999), ErrorCategory::General);

        assert_eq!(ErrorCategory::from_code(1001), ErrorCategory::Session);
        assert_eq!(ErrorCategory::from_code(1999), ErrorCategory::Session);

        assert_eq!(ErrorCategory::from_code(2001), ErrorCategory::Catalog);
        assert_eq!(ErrorCategory::from_code(3001), ErrorCategory::Selection);
        assert_eq!(ErrorCategory::from_code(4001), ErrorCategory::Discount);
        assert_eq!(ErrorCategory::from_code(5001), ErrorCategory::Payment);
        assert_eq!(ErrorCategory::from_code(9001), ErrorCategory::System);
        assert_eq!(ErrorCategory::from_code(10000), ErrorCategory::System);
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::Success.category(), ErrorCategory::General);
        assert_eq!(ErrorCode::SessionNotFound.category(), ErrorCategory::Session);
        assert_eq!(ErrorCode::OptionNotFound.category(), ErrorCategory::Catalog);
        assert_eq!(
            ErrorCode::PlanNotSelected.category(),
            ErrorCategory::Selection
        );
        assert_eq!(
            ErrorCode::InvalidRedeemCode.category(),
            ErrorCategory::Discount
        );
        assert_eq!(ErrorCode::PaymentFailed.category(), ErrorCategory::Payment);
        assert_eq!(ErrorCode::InternalError.category(), ErrorCategory::System);
        assert_eq!(
            ErrorCode::NotificationFailed.category(),
            ErrorCategory::System
        );
    }

    #[test]
    fn test_category_name() {
        assert_eq!(ErrorCategory::General.name(), "general");
        assert_eq!(ErrorCategory::Session.name(), "session");
        assert_eq!(ErrorCategory::Catalog.name(), "catalog");
        assert_eq!(ErrorCategory::Selection.name(), "selection");
        assert_eq!(ErrorCategory::Discount.name(), "discount");
        assert_eq!(ErrorCategory::Payment.name(), "payment");
        assert_eq!(ErrorCategory::System.name(), "system");
    }

    #[test]
    fn test_category_serialize() {
        let category = ErrorCategory::Session;
        let json = serde_json::to_string(&category).unwrap();
        assert_eq!(json, "\"session\"");

        let category = ErrorCategory::Discount;
        let json = serde_json::to_string(&category).unwrap();
        assert_eq!(json, "\"discount\"");
    }

    #[test]
    fn test_category_deserialize() {
        let category: ErrorCategory = serde_json::from_str("\"catalog\"").unwrap();
        assert_eq!(category, ErrorCategory::Catalog);

        let category: ErrorCategory = serde_json::from_str("\"system\"").unwrap();
        assert_eq!(category, ErrorCategory::System);
    }
}
