use super::*;
use shared::models::{
    CatalogSection, LanguageVariant, PlanMeteredViews, PlanService,
};
use shared::models::PlanCategory;

const REDEEM: &str = "ZEDMEMBER@123";

fn flat_option(id: &str, name: &str, price: i64) -> CatalogOption {
    CatalogOption {
        option_id: id.to_string(),
        name: name.to_string(),
        description: String::new(),
        base_price: price,
        pricing: OptionPricing::Flat,
        discount_eligible: true,
        language_variant: None,
        available: true,
    }
}

fn test_catalog() -> Arc<Catalog> {
    let branding = CatalogSection {
        section_id: "branding".to_string(),
        title: "Branding".to_string(),
        description: String::new(),
        options: vec![
            flat_option("logo", "Logo Design", 1000),
            CatalogOption {
                discount_eligible: false,
                ..flat_option("hosting", "Domain + Hosting", 5000)
            },
            CatalogOption {
                language_variant: Some(LanguageVariant {
                    second_language_price: 500,
                }),
                ..flat_option("video", "Ad Video", 3000)
            },
            CatalogOption {
                language_variant: Some(LanguageVariant {
                    second_language_price: 500,
                }),
                ..flat_option("video-pack", "Ad Video Pack", 10000)
            },
            CatalogOption {
                available: false,
                ..flat_option("closed", "Coming Soon Service", 0)
            },
        ],
    };

    let reach = CatalogSection {
        section_id: "reach".to_string(),
        title: "Reach".to_string(),
        description: String::new(),
        options: vec![CatalogOption {
            pricing: OptionPricing::MeteredByUnit {
                price_per_unit: 1,
                min_units: 5000,
                max_units: 100_000,
                unit_label: "views".to_string(),
            },
            discount_eligible: false,
            ..flat_option("status", "Status Marketing", 5000)
        }],
    };

    let add_ons = vec![
        PlanAddOn {
            add_on_id: "branding-logo".to_string(),
            name: "Logo Design".to_string(),
            price: 1000,
        },
        PlanAddOn {
            add_on_id: "reach-status".to_string(),
            name: "Status Marketing".to_string(),
            price: 5000,
        },
    ];

    let views = Some(PlanMeteredViews {
        included_units: 5000,
        max_units: 100_000,
        price_per_unit: 1,
        unit_label: "views".to_string(),
    });

    let plans = vec![
        FixedPlan {
            plan_id: "starter".to_string(),
            name: "Starter Plan".to_string(),
            description: String::new(),
            base_price: 14000,
            discount_eligible: false,
            badge: Some("Monthly".to_string()),
            category: PlanCategory::Business,
            services: vec![PlanService {
                name: "Status Marketing".to_string(),
                reference_price: 5000,
                details: vec![],
            }],
            metered_views: views.clone(),
            add_ons: add_ons.clone(),
        },
        FixedPlan {
            plan_id: "growth".to_string(),
            name: "Growth Plan".to_string(),
            description: String::new(),
            base_price: 25000,
            discount_eligible: true,
            badge: Some("Popular".to_string()),
            category: PlanCategory::Business,
            services: vec![],
            metered_views: views,
            add_ons: add_ons.clone(),
        },
        FixedPlan {
            plan_id: "content-pack".to_string(),
            name: "Content Pack".to_string(),
            description: String::new(),
            base_price: 8000,
            discount_eligible: true,
            badge: None,
            category: PlanCategory::Content,
            services: vec![],
            metered_views: None,
            add_ons: vec![],
        },
    ];

    Arc::new(Catalog {
        version: 1,
        currency: "INR".to_string(),
        sections: vec![branding, reach],
        plans,
    })
}

/// Engine under the wizard policy: discount gated at 10%
fn engine() -> SelectionEngine {
    SelectionEngine::new(
        test_catalog(),
        DiscountPolicy::RedeemGated {
            max_percent: 10.0,
            code: REDEEM.to_string(),
        },
    )
}

/// Engine under the customizer policy: open discount capped at 20%
fn open_engine() -> SelectionEngine {
    SelectionEngine::new(test_catalog(), DiscountPolicy::Open { max_percent: 20.0 })
}

fn selected(outcome: ToggleOutcome) -> SelectionEntry {
    match outcome {
        ToggleOutcome::Selected { entry } => entry,
        other => panic!("expected Selected, got {:?}", other),
    }
}

fn option_prices(engine: &SelectionEngine) -> Vec<i64> {
    engine.entries().iter().map(|e| e.price()).collect()
}

mod test_discount;
