//! Catalog Provider
//!
//! Versioned, immutable service catalog. [`CatalogService`] hands out
//! `Arc<Catalog>` snapshots; sessions pin the snapshot they were created
//! with, so a reload never reprices an open cart.

pub mod data;

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;
use shared::error::{AppError, ErrorCode};
use shared::models::{Catalog, OptionPricing};
use thiserror::Error;

/// Catalog loading and validation errors
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate section id: {0}")]
    DuplicateSection(String),

    #[error("Duplicate option id: {0}/{1}")]
    DuplicateOption(String, String),

    #[error("Duplicate plan id: {0}")]
    DuplicatePlan(String),

    #[error("Duplicate add-on id in plan {0}: {1}")]
    DuplicateAddOn(String, String),

    #[error("Empty name: {0}")]
    EmptyName(String),

    #[error("Negative price: {0}")]
    NegativePrice(String),

    #[error("Invalid metered bounds for {0}: units {1}..={2} at {3}/unit")]
    InvalidMeteredBounds(String, i64, i64, i64),
}

impl From<CatalogError> for AppError {
    fn from(e: CatalogError) -> Self {
        AppError::with_message(ErrorCode::CatalogInvalid, e.to_string())
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Structural integrity checks for a catalog about to be published
///
/// Identity uniqueness, display names present, prices non-negative and
/// metered ranges well-formed. A catalog that passes is safe for the
/// selection engine to price against without further checks.
pub fn validate(catalog: &Catalog) -> CatalogResult<()> {
    let mut section_ids = HashSet::new();
    for section in catalog.sections() {
        if section.title.trim().is_empty() {
            return Err(CatalogError::EmptyName(format!(
                "section {}",
                section.section_id
            )));
        }
        if !section_ids.insert(section.section_id.clone()) {
            return Err(CatalogError::DuplicateSection(section.section_id.clone()));
        }

        let mut option_ids = HashSet::new();
        for option in &section.options {
            let ident = format!("{}/{}", section.section_id, option.option_id);
            if option.name.trim().is_empty() {
                return Err(CatalogError::EmptyName(format!("option {}", ident)));
            }
            if !option_ids.insert(option.option_id.clone()) {
                return Err(CatalogError::DuplicateOption(
                    section.section_id.clone(),
                    option.option_id.clone(),
                ));
            }
            if option.base_price < 0 {
                return Err(CatalogError::NegativePrice(format!("option {}", ident)));
            }
            if let Some(variant) = &option.language_variant
                && variant.second_language_price < 0
            {
                return Err(CatalogError::NegativePrice(format!(
                    "language variant of {}",
                    ident
                )));
            }
            if let OptionPricing::MeteredByUnit {
                price_per_unit,
                min_units,
                max_units,
                ..
            } = option.pricing
                && (min_units < 0 || max_units < min_units || price_per_unit <= 0)
            {
                return Err(CatalogError::InvalidMeteredBounds(
                    ident,
                    min_units,
                    max_units,
                    price_per_unit,
                ));
            }
        }
    }

    let mut plan_ids = HashSet::new();
    for plan in catalog.plans() {
        if plan.name.trim().is_empty() {
            return Err(CatalogError::EmptyName(format!("plan {}", plan.plan_id)));
        }
        if !plan_ids.insert(plan.plan_id.clone()) {
            return Err(CatalogError::DuplicatePlan(plan.plan_id.clone()));
        }
        if plan.base_price < 0 {
            return Err(CatalogError::NegativePrice(format!("plan {}", plan.plan_id)));
        }
        if let Some(views) = &plan.metered_views
            && (views.included_units < 0
                || views.max_units < views.included_units
                || views.price_per_unit <= 0)
        {
            return Err(CatalogError::InvalidMeteredBounds(
                format!("plan {}", plan.plan_id),
                views.included_units,
                views.max_units,
                views.price_per_unit,
            ));
        }

        let mut add_on_ids = HashSet::new();
        for add_on in &plan.add_ons {
            if add_on.name.trim().is_empty() {
                return Err(CatalogError::EmptyName(format!(
                    "add-on {}/{}",
                    plan.plan_id, add_on.add_on_id
                )));
            }
            if !add_on_ids.insert(add_on.add_on_id.clone()) {
                return Err(CatalogError::DuplicateAddOn(
                    plan.plan_id.clone(),
                    add_on.add_on_id.clone(),
                ));
            }
            if add_on.price < 0 {
                return Err(CatalogError::NegativePrice(format!(
                    "add-on {}/{}",
                    plan.plan_id, add_on.add_on_id
                )));
            }
        }
    }

    Ok(())
}

/// Load and validate a catalog from a JSON file
pub fn load_from_path(path: &Path) -> CatalogResult<Catalog> {
    let raw = fs::read_to_string(path)?;
    let catalog: Catalog = serde_json::from_str(&raw)?;
    validate(&catalog)?;
    Ok(catalog)
}

// =============================================================================
// CatalogService
// =============================================================================

/// Shared catalog slot
///
/// Holds the published catalog behind a lock. `current()` is cheap: it
/// clones the inner `Arc`, never the catalog.
#[derive(Clone)]
pub struct CatalogService {
    /// JSON file override; `None` serves the built-in dataset
    source: Option<PathBuf>,
    current: Arc<RwLock<Arc<Catalog>>>,
}

impl std::fmt::Debug for CatalogService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let catalog = self.current.read();
        f.debug_struct("CatalogService")
            .field("version", &catalog.version)
            .field("sections", &catalog.sections.len())
            .field("plans", &catalog.plans.len())
            .finish()
    }
}

impl CatalogService {
    /// Publish the built-in catalog or the `source` file when given
    pub fn initialize(source: Option<PathBuf>) -> CatalogResult<Self> {
        let catalog = match &source {
            Some(path) => load_from_path(path)?,
            None => builtin()?,
        };
        tracing::info!(
            version = catalog.version,
            sections = catalog.sections.len(),
            plans = catalog.plans.len(),
            source = source.as_deref().map(|p| p.display().to_string()),
            "Catalog published"
        );
        Ok(Self {
            source,
            current: Arc::new(RwLock::new(Arc::new(catalog))),
        })
    }

    /// Current published snapshot
    pub fn current(&self) -> Arc<Catalog> {
        self.current.read().clone()
    }

    /// Version of the published snapshot
    pub fn version(&self) -> u32 {
        self.current.read().version
    }

    /// Re-read the source and publish it at `version + 1`
    ///
    /// Open sessions keep the snapshot they pinned; only new sessions see
    /// the reloaded catalog. Returns the new version.
    pub fn reload(&self) -> CatalogResult<u32> {
        let mut catalog = match &self.source {
            Some(path) => load_from_path(path)?,
            None => builtin()?,
        };

        let mut slot = self.current.write();
        catalog.version = slot.version + 1;
        let version = catalog.version;
        *slot = Arc::new(catalog);
        drop(slot);

        tracing::info!(version = version, "Catalog reloaded");
        Ok(version)
    }
}

fn builtin() -> CatalogResult<Catalog> {
    let catalog = data::builtin_catalog();
    validate(&catalog)?;
    Ok(catalog)
}
