//! Fixed Plan Model

use serde::{Deserialize, Serialize};

/// Presentation grouping for fixed plans
///
/// Grouping only; pricing never depends on the category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlanCategory {
    #[default]
    Business,
    Content,
    Store,
}

/// A service bundled inside a fixed plan
///
/// Informational for display; the bundle sells at the plan's `base_price`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanService {
    pub name: String,
    /// What the service would cost bought individually
    pub reference_price: i64,
    #[serde(default)]
    pub details: Vec<String>,
}

/// Metered views component of a plan
///
/// `included_units` are covered by `base_price`; the delta above it is
/// charged at `price_per_unit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanMeteredViews {
    pub included_units: i64,
    pub max_units: i64,
    pub price_per_unit: i64,
    pub unit_label: String,
}

/// An option layerable onto a selected plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanAddOn {
    pub add_on_id: String,
    pub name: String,
    pub price: i64,
}

/// A pre-bundled package of services at a fixed price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedPlan {
    pub plan_id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub base_price: i64,
    #[serde(default = "default_true")]
    pub discount_eligible: bool,
    /// Optional display tag ("Popular", "Best Value", ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    #[serde(default)]
    pub category: PlanCategory,
    pub services: Vec<PlanService>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metered_views: Option<PlanMeteredViews>,
    #[serde(default)]
    pub add_ons: Vec<PlanAddOn>,
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_category_default() {
        assert_eq!(PlanCategory::default(), PlanCategory::Business);
    }

    #[test]
    fn test_plan_category_serde() {
        let json = serde_json::to_string(&PlanCategory::Store).unwrap();
        assert_eq!(json, "\"STORE\"");

        let parsed: PlanCategory = serde_json::from_str("\"CONTENT\"").unwrap();
        assert_eq!(parsed, PlanCategory::Content);
    }

    #[test]
    fn test_plan_defaults_from_json() {
        let json = r#"{
            "plan_id": "premium",
            "name": "Premium",
            "base_price": 25000,
            "services": []
        }"#;
        let plan: FixedPlan = serde_json::from_str(json).unwrap();
        assert!(plan.discount_eligible);
        assert_eq!(plan.category, PlanCategory::Business);
        assert!(plan.badge.is_none());
        assert!(plan.metered_views.is_none());
        assert!(plan.add_ons.is_empty());
    }
}
