//! Catalog Model
//!
//! Immutable, versioned definition of the purchasable services. Sections
//! hold individually selectable options; fixed plans bundle services at a
//! package price. Published catalogs are never mutated in place, so every
//! selection can pin the version it was priced against.

use super::plan::{FixedPlan, PlanAddOn, PlanCategory};
use serde::{Deserialize, Serialize};

/// Pricing mode for a catalog option
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OptionPricing {
    /// One-off price, `base_price` applies as-is
    Flat,
    /// Price scales with a customer-chosen unit count
    MeteredByUnit {
        price_per_unit: i64,
        min_units: i64,
        max_units: i64,
        unit_label: String,
    },
}

impl Default for OptionPricing {
    fn default() -> Self {
        Self::Flat
    }
}

/// Second-language surcharge for options offered in one or two languages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageVariant {
    /// Price when delivered in a second language on top of the first
    pub second_language_price: i64,
}

/// A purchasable service option
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogOption {
    pub option_id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Whole currency units; metered options treat this as the price at
    /// `min_units`
    pub base_price: i64,
    #[serde(default)]
    pub pricing: OptionPricing,
    /// `false` excludes this line from percentage-discount math
    #[serde(default = "default_true")]
    pub discount_eligible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_variant: Option<LanguageVariant>,
    /// `false` = listed but not selectable (coming soon)
    #[serde(default = "default_true")]
    pub available: bool,
}

impl CatalogOption {
    /// Whether this option carries a per-unit quantity
    pub fn is_metered(&self) -> bool {
        matches!(self.pricing, OptionPricing::MeteredByUnit { .. })
    }
}

/// A themed group of catalog options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogSection {
    pub section_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub options: Vec<CatalogOption>,
}

/// The full service catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Bumped on every reload; selections snapshot the version they saw
    #[serde(default = "default_version")]
    pub version: u32,
    /// ISO currency code for every price in the catalog
    #[serde(default = "default_currency")]
    pub currency: String,
    pub sections: Vec<CatalogSection>,
    pub plans: Vec<FixedPlan>,
}

impl Catalog {
    /// Look up an option by compound identity
    pub fn find_option(&self, section_id: &str, option_id: &str) -> Option<&CatalogOption> {
        self.sections
            .iter()
            .find(|s| s.section_id == section_id)?
            .options
            .iter()
            .find(|o| o.option_id == option_id)
    }

    /// Look up a fixed plan by id
    pub fn find_plan(&self, plan_id: &str) -> Option<&FixedPlan> {
        self.plans.iter().find(|p| p.plan_id == plan_id)
    }

    /// Look up an add-on within a plan's add-on catalog
    pub fn find_add_on(&self, plan_id: &str, add_on_id: &str) -> Option<&PlanAddOn> {
        self.find_plan(plan_id)?
            .add_ons
            .iter()
            .find(|a| a.add_on_id == add_on_id)
    }

    pub fn sections(&self) -> &[CatalogSection] {
        &self.sections
    }

    pub fn plans(&self) -> &[FixedPlan] {
        &self.plans
    }

    /// Plans grouped for one presentation variant
    pub fn plans_by_category(&self, category: PlanCategory) -> Vec<&FixedPlan> {
        self.plans.iter().filter(|p| p.category == category).collect()
    }
}

fn default_true() -> bool {
    true
}

fn default_currency() -> String {
    "INR".to_string()
}

fn default_version() -> u32 {
    1
}
