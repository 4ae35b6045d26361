//! Customer Model
//!
//! Business details and survey answers submitted during onboarding.
//! These double as API payloads, so validation rules live on the types.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Business profile collected before checkout
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BusinessDetails {
    #[validate(length(min = 1, message = "business name is required"))]
    pub business_name: String,
    #[serde(default)]
    pub brand_details: String,
    #[validate(length(min = 1, message = "phone is required"))]
    pub phone: String,
    #[validate(email(message = "invalid email address"))]
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(url(message = "invalid website url"))]
    pub website: Option<String>,
}

/// Needs-assessment survey answers
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SurveyAnswers {
    #[validate(length(min = 1, message = "business stage is required"))]
    pub business_stage: String,
    #[validate(length(min = 1, message = "select at least one service"))]
    pub interested_services: Vec<String>,
    pub has_brand_assets: bool,
    #[validate(length(min = 1, message = "biggest challenge is required"))]
    pub biggest_challenge: String,
}
