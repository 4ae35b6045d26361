//! Selection Model
//!
//! Entries in the customer's cart plus the outcome types returned by the
//! selection engine. Every entry snapshots the resolved name, price and
//! catalog version at selection time; later catalog reloads never touch
//! recorded entries.

use super::plan::PlanAddOn;
use serde::{Deserialize, Serialize};

/// Resolved language choice for a language-variant option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LanguageChoice {
    /// Delivered in one language at the base price
    Single,
    /// Delivered in two languages at the surcharged price
    Dual,
}

impl LanguageChoice {
    pub fn is_dual(&self) -> bool {
        matches!(self, LanguageChoice::Dual)
    }
}

/// A selected catalog option
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionSelection {
    pub section_id: String,
    pub option_id: String,
    /// Resolved display name, annotated for dual-language entries
    pub name: String,
    /// Snapshot price in whole currency units
    pub price: i64,
    /// Unit count, metered options only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    pub discount_eligible: bool,
    /// Recorded choice, language-variant options only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<LanguageChoice>,
    pub catalog_version: u32,
}

/// A selected fixed plan with its attached add-ons
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanSelection {
    pub plan_id: String,
    pub name: String,
    /// Snapshot of the plan's package price
    pub base_price: i64,
    /// Chosen view count, metered-views plans only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub views: Option<i64>,
    #[serde(default)]
    pub add_ons: Vec<PlanAddOn>,
    /// Aggregate price: base + views delta + add-ons
    pub price: i64,
    pub discount_eligible: bool,
    pub catalog_version: u32,
}

/// One line in the cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SelectionEntry {
    Option(OptionSelection),
    Plan(PlanSelection),
}

impl SelectionEntry {
    /// The entry's current aggregate price
    pub fn price(&self) -> i64 {
        match self {
            SelectionEntry::Option(o) => o.price,
            SelectionEntry::Plan(p) => p.price,
        }
    }

    /// Whether the entry participates in percentage-discount math
    pub fn discount_eligible(&self) -> bool {
        match self {
            SelectionEntry::Option(o) => o.discount_eligible,
            SelectionEntry::Plan(p) => p.discount_eligible,
        }
    }

    /// Resolved display name
    pub fn name(&self) -> &str {
        match self {
            SelectionEntry::Option(o) => &o.name,
            SelectionEntry::Plan(p) => &p.name,
        }
    }
}

/// Context for a language choice awaiting confirmation
///
/// Returned when a language-variant option is toggled without a choice;
/// the cart is left untouched until the choice is resolved or cancelled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingLanguageChoice {
    pub section_id: String,
    pub option_id: String,
    pub name: String,
    pub base_price: i64,
    pub second_language_price: i64,
}

/// Outcome of toggling an option or plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ToggleOutcome {
    /// Entry was added to the cart
    Selected { entry: SelectionEntry },
    /// Entry was already present and has been removed
    Removed,
    /// A language choice must be confirmed before selection completes
    PendingLanguageChoice { pending: PendingLanguageChoice },
}

/// Outcome of toggling a plan add-on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AddOnOutcome {
    /// Add-on attached; carries the updated plan entry
    Added { entry: SelectionEntry },
    /// Add-on detached; carries the updated plan entry
    Removed { entry: SelectionEntry },
}

/// Client-facing view of the discount gate
///
/// Deliberately excludes the redeem secret.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscountState {
    pub max_percent: f64,
    pub requires_redeem: bool,
    pub unlocked: bool,
    pub percent: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option_entry(price: i64) -> SelectionEntry {
        SelectionEntry::Option(OptionSelection {
            section_id: "branding".to_string(),
            option_id: "logo".to_string(),
            name: "Logo Design".to_string(),
            price,
            quantity: None,
            discount_eligible: true,
            language: None,
            catalog_version: 1,
        })
    }

    #[test]
    fn test_entry_accessors() {
        let entry = option_entry(1500);
        assert_eq!(entry.price(), 1500);
        assert!(entry.discount_eligible());
        assert_eq!(entry.name(), "Logo Design");
    }

    #[test]
    fn test_language_choice() {
        assert!(LanguageChoice::Dual.is_dual());
        assert!(!LanguageChoice::Single.is_dual());

        let json = serde_json::to_string(&LanguageChoice::Dual).unwrap();
        assert_eq!(json, "\"DUAL\"");
    }

    #[test]
    fn test_entry_serde_tag() {
        let entry = option_entry(1500);
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"type\":\"OPTION\""));

        let parsed: SelectionEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, entry);
    }

    #[test]
    fn test_toggle_outcome_serde() {
        let outcome = ToggleOutcome::Removed;
        let json = serde_json::to_string(&outcome).unwrap();
        assert_eq!(json, r#"{"type":"REMOVED"}"#);

        let outcome = ToggleOutcome::Selected {
            entry: option_entry(1000),
        };
        let json = serde_json::to_string(&outcome).unwrap();
        assert!(json.contains("\"type\":\"SELECTED\""));
        assert!(json.contains("\"entry\""));
    }

    #[test]
    fn test_skipped_optional_fields() {
        let entry = option_entry(1000);
        let json = serde_json::to_string(&entry).unwrap();
        assert!(!json.contains("quantity"));
        assert!(!json.contains("language"));
    }
}
