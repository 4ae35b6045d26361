//! Selection & Pricing Engine
//!
//! Per-session cart over a pinned catalog snapshot. Operations either
//! mutate and succeed or fail with a [`SelectionError`], leaving the cart
//! untouched. Prices are resolved once at selection time; each entry
//! records the catalog version it was priced against.
//!
//! Quantities, plan views and the discount percent clamp to their legal
//! range instead of rejecting out-of-range input.

mod error;

#[cfg(test)]
mod tests;

pub use error::{SelectionError, SelectionResult};

use std::collections::HashMap;
use std::sync::Arc;

use shared::models::{
    AddOnOutcome, Catalog, CatalogOption, DiscountState, FixedPlan, LanguageChoice, OptionPricing,
    OptionSelection, PendingLanguageChoice, PlanAddOn, PlanSelection, SelectionEntry,
    ToggleOutcome, Totals,
};

use crate::billing;

/// Gating rule for the percentage discount
///
/// Never serialized; the client-facing view is [`DiscountState`], which
/// excludes the redeem secret.
#[derive(Debug, Clone, PartialEq)]
pub enum DiscountPolicy {
    /// Discount entry stays locked until the shared code is redeemed
    RedeemGated { max_percent: f64, code: String },
    /// Discount entry is open from the start
    Open { max_percent: f64 },
}

impl DiscountPolicy {
    pub fn max_percent(&self) -> f64 {
        match self {
            DiscountPolicy::RedeemGated { max_percent, .. }
            | DiscountPolicy::Open { max_percent } => *max_percent,
        }
    }

    pub fn requires_redeem(&self) -> bool {
        matches!(self, DiscountPolicy::RedeemGated { .. })
    }
}

/// The cart state machine
///
/// Holds the selected entries, the pending language confirmation (at most
/// one), remembered quantity/views previews and the discount gate.
#[derive(Debug, Clone)]
pub struct SelectionEngine {
    catalog: Arc<Catalog>,
    policy: DiscountPolicy,
    entries: Vec<SelectionEntry>,
    pending_language: Option<PendingLanguageChoice>,
    /// Remembered unit counts for metered options, kept across deselection
    quantity_previews: HashMap<(String, String), i64>,
    /// Remembered view counts per plan, kept across deselection
    views_previews: HashMap<String, i64>,
    discount_unlocked: bool,
    discount_percent: f64,
}

impl SelectionEngine {
    pub fn new(catalog: Arc<Catalog>, policy: DiscountPolicy) -> Self {
        let discount_unlocked = !policy.requires_redeem();
        Self {
            catalog,
            policy,
            entries: Vec::new(),
            pending_language: None,
            quantity_previews: HashMap::new(),
            views_previews: HashMap::new(),
            discount_unlocked,
            discount_percent: 0.0,
        }
    }

    // =========================================================================
    // Option selection
    // =========================================================================

    /// Toggle a catalog option in or out of the cart
    ///
    /// Selecting a language-variant option without a `language` argument
    /// mutates nothing and returns the pending context; the selection
    /// completes through [`resolve_language_choice`](Self::resolve_language_choice).
    pub fn toggle_option(
        &mut self,
        section_id: &str,
        option_id: &str,
        quantity: Option<i64>,
        language: Option<LanguageChoice>,
    ) -> SelectionResult<ToggleOutcome> {
        if let Some(idx) = self.option_position(section_id, option_id) {
            self.entries.remove(idx);
            return Ok(ToggleOutcome::Removed);
        }

        let option = self.find_option(section_id, option_id)?;
        if !option.available {
            return Err(SelectionError::OptionUnavailable(ident(
                section_id, option_id,
            )));
        }

        if let Some(variant) = &option.language_variant
            && language.is_none()
        {
            let pending = PendingLanguageChoice {
                section_id: section_id.to_string(),
                option_id: option_id.to_string(),
                name: option.name.clone(),
                base_price: option.base_price,
                second_language_price: variant.second_language_price,
            };
            self.pending_language = Some(pending.clone());
            return Ok(ToggleOutcome::PendingLanguageChoice { pending });
        }

        let option = option.clone();
        let entry = self.build_option_entry(&option, section_id, quantity, language);

        // An explicit choice supersedes a pending one for the same option
        if self
            .pending_language
            .as_ref()
            .is_some_and(|p| p.section_id == section_id && p.option_id == option_id)
        {
            self.pending_language = None;
        }

        self.entries.push(entry.clone());
        Ok(ToggleOutcome::Selected { entry })
    }

    /// Complete the pending language-variant selection
    pub fn resolve_language_choice(
        &mut self,
        add_second_language: bool,
    ) -> SelectionResult<ToggleOutcome> {
        let pending = self
            .pending_language
            .clone()
            .ok_or(SelectionError::NoPendingChoice)?;

        let choice = if add_second_language {
            LanguageChoice::Dual
        } else {
            LanguageChoice::Single
        };
        let option = self
            .find_option(&pending.section_id, &pending.option_id)?
            .clone();
        self.pending_language = None;

        let entry = self.build_option_entry(&option, &pending.section_id, None, Some(choice));
        self.entries.push(entry.clone());
        Ok(ToggleOutcome::Selected { entry })
    }

    /// Abandon the pending language-variant selection, if any
    pub fn cancel_language_choice(&mut self) {
        self.pending_language = None;
    }

    /// Set or preview the unit count of a metered option
    ///
    /// Updates a selected entry in place; for unselected options the value
    /// is remembered and applied at the next toggle. Returns the clamped
    /// count.
    pub fn set_quantity(
        &mut self,
        section_id: &str,
        option_id: &str,
        quantity: i64,
    ) -> SelectionResult<i64> {
        let option = self.find_option(section_id, option_id)?;
        let (price_per_unit, min_units, max_units) = match &option.pricing {
            OptionPricing::MeteredByUnit {
                price_per_unit,
                min_units,
                max_units,
                ..
            } => (*price_per_unit, *min_units, *max_units),
            OptionPricing::Flat => {
                return Err(SelectionError::NotMetered(ident(section_id, option_id)));
            }
        };

        let clamped = quantity.clamp(min_units, max_units);
        self.quantity_previews
            .insert(key(section_id, option_id), clamped);

        if let Some(idx) = self.option_position(section_id, option_id)
            && let SelectionEntry::Option(entry) = &mut self.entries[idx]
        {
            entry.quantity = Some(clamped);
            entry.price = clamped * price_per_unit;
        }

        Ok(clamped)
    }

    // =========================================================================
    // Fixed plans
    // =========================================================================

    /// Toggle a fixed plan in or out of the cart
    ///
    /// Deselection drops the plan's attached add-ons; a views preview
    /// survives and is honored when the plan is selected again.
    pub fn select_fixed_plan(&mut self, plan_id: &str) -> SelectionResult<ToggleOutcome> {
        if let Some(idx) = self.plan_position(plan_id) {
            self.entries.remove(idx);
            return Ok(ToggleOutcome::Removed);
        }

        let plan = self.find_plan(plan_id)?.clone();
        let views = plan.metered_views.as_ref().map(|mv| {
            self.views_previews
                .get(plan_id)
                .copied()
                .unwrap_or(mv.included_units)
                .clamp(mv.included_units, mv.max_units)
        });

        let entry = SelectionEntry::Plan(PlanSelection {
            plan_id: plan.plan_id.clone(),
            name: plan.name.clone(),
            base_price: plan.base_price,
            views,
            add_ons: Vec::new(),
            price: plan_price(&plan, views, &[]),
            discount_eligible: plan.discount_eligible,
            catalog_version: self.catalog.version,
        });
        self.entries.push(entry.clone());
        Ok(ToggleOutcome::Selected { entry })
    }

    /// Set or preview the view count of a metered-views plan
    ///
    /// Returns the clamped count.
    pub fn set_plan_views(&mut self, plan_id: &str, views: i64) -> SelectionResult<i64> {
        let plan = self.find_plan(plan_id)?.clone();
        let Some(mv) = &plan.metered_views else {
            return Err(SelectionError::NotMetered(plan_id.to_string()));
        };

        let clamped = views.clamp(mv.included_units, mv.max_units);
        self.views_previews.insert(plan_id.to_string(), clamped);

        if let Some(idx) = self.plan_position(plan_id)
            && let SelectionEntry::Plan(entry) = &mut self.entries[idx]
        {
            entry.views = Some(clamped);
            entry.price = plan_price(&plan, Some(clamped), &entry.add_ons);
        }

        Ok(clamped)
    }

    /// Attach or detach an add-on on a selected plan
    pub fn toggle_add_on(
        &mut self,
        plan_id: &str,
        add_on_id: &str,
    ) -> SelectionResult<AddOnOutcome> {
        let plan = self.find_plan(plan_id)?.clone();
        let Some(idx) = self.plan_position(plan_id) else {
            return Err(SelectionError::PlanNotSelected(plan_id.to_string()));
        };
        let add_on = plan
            .add_ons
            .iter()
            .find(|a| a.add_on_id == add_on_id)
            .ok_or_else(|| SelectionError::AddOnNotFound(ident(plan_id, add_on_id)))?
            .clone();

        let SelectionEntry::Plan(entry) = &mut self.entries[idx] else {
            return Err(SelectionError::PlanNotSelected(plan_id.to_string()));
        };

        let removed = if let Some(pos) = entry.add_ons.iter().position(|a| a.add_on_id == add_on_id)
        {
            entry.add_ons.remove(pos);
            true
        } else {
            entry.add_ons.push(add_on);
            false
        };
        entry.price = plan_price(&plan, entry.views, &entry.add_ons);

        let updated = self.entries[idx].clone();
        if removed {
            Ok(AddOnOutcome::Removed { entry: updated })
        } else {
            Ok(AddOnOutcome::Added { entry: updated })
        }
    }

    // =========================================================================
    // Discount
    // =========================================================================

    /// Unlock the discount entry with the shared redeem code
    pub fn apply_redeem_code(&mut self, code: &str) -> SelectionResult<()> {
        match &self.policy {
            DiscountPolicy::RedeemGated { code: expected, .. } => {
                if code == expected {
                    self.discount_unlocked = true;
                    Ok(())
                } else {
                    Err(SelectionError::InvalidCode)
                }
            }
            DiscountPolicy::Open { .. } => Ok(()),
        }
    }

    /// Set the discount percent, clamped to `[0, max_percent]`
    ///
    /// Returns the effective percent. Fails with `DiscountLocked` until a
    /// gated policy has seen a successful redeem.
    pub fn set_discount_percent(&mut self, value: f64) -> SelectionResult<f64> {
        if !self.discount_unlocked {
            return Err(SelectionError::DiscountLocked);
        }
        self.discount_percent = value.clamp(0.0, self.policy.max_percent());
        Ok(self.discount_percent)
    }

    // =========================================================================
    // Read side
    // =========================================================================

    /// Totals for the current cart at the given advance rate
    pub fn totals(&self, advance_percent: f64) -> Totals {
        billing::totals(&self.entries, self.discount_percent, advance_percent)
    }

    pub fn entries(&self) -> &[SelectionEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn pending_language(&self) -> Option<&PendingLanguageChoice> {
        self.pending_language.as_ref()
    }

    pub fn discount_percent(&self) -> f64 {
        self.discount_percent
    }

    pub fn discount_state(&self) -> DiscountState {
        DiscountState {
            max_percent: self.policy.max_percent(),
            requires_redeem: self.policy.requires_redeem(),
            unlocked: self.discount_unlocked,
            percent: self.discount_percent,
        }
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn find_option(&self, section_id: &str, option_id: &str) -> SelectionResult<&CatalogOption> {
        self.catalog
            .find_option(section_id, option_id)
            .ok_or_else(|| SelectionError::OptionNotFound(ident(section_id, option_id)))
    }

    fn find_plan(&self, plan_id: &str) -> SelectionResult<&FixedPlan> {
        self.catalog
            .find_plan(plan_id)
            .ok_or_else(|| SelectionError::PlanNotFound(plan_id.to_string()))
    }

    fn option_position(&self, section_id: &str, option_id: &str) -> Option<usize> {
        self.entries.iter().position(|e| {
            matches!(e, SelectionEntry::Option(o)
                if o.section_id == section_id && o.option_id == option_id)
        })
    }

    fn plan_position(&self, plan_id: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| matches!(e, SelectionEntry::Plan(p) if p.plan_id == plan_id))
    }

    /// Resolve name, price and quantity for an option entry
    ///
    /// `language` must already be resolved for language-variant options.
    fn build_option_entry(
        &mut self,
        option: &CatalogOption,
        section_id: &str,
        quantity: Option<i64>,
        language: Option<LanguageChoice>,
    ) -> SelectionEntry {
        let (quantity, mut price) = match &option.pricing {
            OptionPricing::Flat => (None, option.base_price),
            OptionPricing::MeteredByUnit {
                price_per_unit,
                min_units,
                max_units,
                ..
            } => {
                let requested = quantity
                    .or_else(|| {
                        self.quantity_previews
                            .get(&key(section_id, &option.option_id))
                            .copied()
                    })
                    .unwrap_or(*min_units);
                let clamped = requested.clamp(*min_units, *max_units);
                self.quantity_previews
                    .insert(key(section_id, &option.option_id), clamped);
                (Some(clamped), clamped * price_per_unit)
            }
        };

        let language = option.language_variant.as_ref().and(language);
        let mut name = option.name.clone();
        if let (Some(variant), Some(choice)) = (&option.language_variant, language)
            && choice.is_dual()
        {
            price += variant.second_language_price;
            name = format!("{} (+ 2nd Language)", name);
        }

        SelectionEntry::Option(OptionSelection {
            section_id: section_id.to_string(),
            option_id: option.option_id.clone(),
            name,
            price,
            quantity,
            discount_eligible: option.discount_eligible,
            language,
            catalog_version: self.catalog.version,
        })
    }
}

/// Aggregate price of a plan entry
fn plan_price(plan: &FixedPlan, views: Option<i64>, add_ons: &[PlanAddOn]) -> i64 {
    let views_delta = match (&plan.metered_views, views) {
        (Some(mv), Some(v)) => (v - mv.included_units) * mv.price_per_unit,
        _ => 0,
    };
    let add_on_total: i64 = add_ons.iter().map(|a| a.price).sum();
    plan.base_price + views_delta + add_on_total
}

fn ident(left: &str, right: &str) -> String {
    format!("{}/{}", left, right)
}

fn key(section_id: &str, option_id: &str) -> (String, String) {
    (section_id.to_string(), option_id.to_string())
}
