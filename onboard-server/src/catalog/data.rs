//! Built-in agency catalog
//!
//! Default dataset served when no `CATALOG_PATH` override is configured.
//! Prices are whole INR.

use shared::models::{
    Catalog, CatalogOption, CatalogSection, FixedPlan, LanguageVariant, OptionPricing, PlanAddOn,
    PlanCategory, PlanMeteredViews, PlanService,
};

/// Surcharge for delivering an ad in a second language
pub const SECOND_LANGUAGE_PRICE: i64 = 500;

/// Views covered by every plan's bundled status-marketing service
const PLAN_INCLUDED_VIEWS: i64 = 5_000;
const PLAN_MAX_VIEWS: i64 = 100_000;
const VIEWS_PRICE_PER_UNIT: i64 = 1;

/// Build the default catalog at version 1
pub fn builtin_catalog() -> Catalog {
    let sections = vec![
        digital_footprint(),
        content_creation(),
        digital_reach(),
        automation(),
    ];
    let plans = business_plans(&sections);

    Catalog {
        version: 1,
        currency: "INR".to_string(),
        sections,
        plans,
    }
}

fn flat(option_id: &str, name: &str, price: i64, description: &str) -> CatalogOption {
    CatalogOption {
        option_id: option_id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        base_price: price,
        pricing: OptionPricing::Flat,
        discount_eligible: true,
        language_variant: None,
        available: true,
    }
}

fn no_discount(option: CatalogOption) -> CatalogOption {
    CatalogOption {
        discount_eligible: false,
        ..option
    }
}

fn with_language(option: CatalogOption) -> CatalogOption {
    CatalogOption {
        language_variant: Some(LanguageVariant {
            second_language_price: SECOND_LANGUAGE_PRICE,
        }),
        ..option
    }
}

fn coming_soon(option_id: &str, name: &str, description: &str) -> CatalogOption {
    CatalogOption {
        available: false,
        ..flat(option_id, name, 0, description)
    }
}

fn digital_footprint() -> CatalogSection {
    CatalogSection {
        section_id: "digital-footprint".to_string(),
        title: "Digital Footprint Setup".to_string(),
        description: String::new(),
        options: vec![
            flat(
                "instagram",
                "Instagram Setup & Management (Monthly)",
                1000,
                "Profile optimization, bio setup, highlights, content strategy, and monthly management",
            ),
            flat(
                "facebook",
                "Facebook Setup & Management (Monthly)",
                1000,
                "Page creation, cover design, about section, business info setup, and monthly management",
            ),
            flat(
                "linkedin",
                "LinkedIn Setup & Management (Monthly)",
                1000,
                "Company page creation, banner design, professional profile optimization, and monthly management",
            ),
            flat(
                "twitter",
                "Twitter/X Setup & Management (Monthly)",
                1000,
                "Profile setup, header design, bio optimization, pinned tweet strategy, and monthly management",
            ),
            flat(
                "youtube",
                "YouTube Setup & Management (Monthly)",
                1000,
                "Channel creation, banner design, about section, video optimization, and monthly management",
            ),
            flat(
                "gmb",
                "Google My Business Setup",
                2500,
                "Complete GMB profile setup, photos, categories, and local SEO optimization",
            ),
            flat(
                "gmb-management",
                "Google My Business Management",
                7000,
                "Monthly GMB management with updates, local SEO, rating management, and review responses",
            ),
            flat(
                "basic-landing",
                "Basic Landing Page",
                5000,
                "Single page website with contact form, responsive design, and basic SEO",
            ),
            no_discount(flat(
                "landing-domain",
                "Landing Page + Domain",
                7500,
                "Landing page with custom domain registration and 1-year hosting",
            )),
            flat(
                "advanced-website",
                "Advanced Website",
                18000,
                "Multi-page website with CMS, blog, SEO optimization, and analytics integration",
            ),
            no_discount(flat(
                "domain-hosting",
                "Domain + Hosting",
                7000,
                "Domain registration and 1-year premium hosting with SSL certificate",
            )),
            flat(
                "mid-app",
                "Mid-Level App",
                20000,
                "Mobile app with essential features, user auth, and basic backend integration",
            ),
            flat(
                "advanced-app",
                "Advanced App",
                25000,
                "Full-featured mobile app with advanced backend, APIs, and premium features",
            ),
        ],
    }
}

fn content_creation() -> CatalogSection {
    CatalogSection {
        section_id: "content-creation".to_string(),
        title: "Digital Content Creation".to_string(),
        description: String::new(),
        options: vec![
            with_language(flat(
                "ad-pack-4",
                "Pack of 4 Ads (Up to 30 sec each)",
                10000,
                "1 language included free. Additional language: \u{20b9}500 per ad",
            )),
            with_language(flat(
                "ad-15sec",
                "Single Ad Video (15 sec)",
                3000,
                "1 language included free. Additional language: \u{20b9}500",
            )),
            with_language(flat(
                "ad-30sec",
                "Single Ad Video (30 sec)",
                3500,
                "1 language included free. Additional language: \u{20b9}500",
            )),
            with_language(flat(
                "ad-above-30",
                "Single Ad Video (Above 30 sec)",
                5000,
                "1 language included free. Additional language: \u{20b9}500",
            )),
            flat(
                "short-movie",
                "Short Movie (Up to 5 minutes)",
                25000,
                "Professional short movie with script, shooting, editing, and color grading",
            ),
        ],
    }
}

fn digital_reach() -> CatalogSection {
    CatalogSection {
        section_id: "digital-reach".to_string(),
        title: "Digital Reach".to_string(),
        description: String::new(),
        options: vec![
            no_discount(flat(
                "one-week-boost",
                "One-week Boost (1,000 reach)",
                1000,
                "7-day paid promotion on social media to reach 1,000+ people",
            )),
            no_discount(flat(
                "boost-pack-4",
                "Package of 4 Boosts",
                3200,
                "4 weekly boosts at discounted price - reach 4,000+ people over a month",
            )),
            flat(
                "whatsapp-broadcast",
                "WhatsApp Broadcast",
                5000,
                "Monthly WhatsApp broadcast campaigns to your customer list",
            ),
            flat(
                "email-marketing",
                "Email Marketing",
                7000,
                "Monthly email campaigns with design, automation, and analytics",
            ),
            CatalogOption {
                pricing: OptionPricing::MeteredByUnit {
                    price_per_unit: VIEWS_PRICE_PER_UNIT,
                    min_units: PLAN_INCLUDED_VIEWS,
                    max_units: PLAN_MAX_VIEWS,
                    unit_label: "views".to_string(),
                },
                ..no_discount(flat(
                    "whatsapp-status",
                    "WhatsApp Status Marketing Software (U.S.P)",
                    5000,
                    "\u{20b9}1 per view (minimum 5000 views) - Automated WhatsApp status marketing. No discount applicable.",
                ))
            },
            flat(
                "whatsapp-chatbot",
                "WhatsApp Chat Bot for Your Brand",
                7000,
                "Automated chatbot for WhatsApp to handle customer queries 24/7",
            ),
            flat(
                "meta-google-boost",
                "Meta & Google Boosting",
                5000,
                "Paid advertising on Meta (Facebook/Instagram) and Google for brand visibility",
            ),
        ],
    }
}

fn automation() -> CatalogSection {
    CatalogSection {
        section_id: "automation".to_string(),
        title: "AI Automation Services".to_string(),
        description: String::new(),
        options: vec![
            coming_soon(
                "lead-automation",
                "Lead Automation (Auto follow-up, WhatsApp Flow, Email)",
                "Custom pricing - Automated lead nurturing with multi-channel follow-ups",
            ),
            coming_soon(
                "crm-setup",
                "CRM Setup (Pipeline, Tagging, Automation)",
                "Custom pricing - Complete CRM setup with sales pipeline and automation",
            ),
            coming_soon(
                "workflow-automation",
                "Workflow Automation (Chatbot, Appointments, Payments)",
                "Custom pricing - End-to-end workflow automation for your business",
            ),
            coming_soon(
                "maintenance",
                "Monthly Automation Maintenance",
                "Custom pricing - Ongoing support and optimization of automation systems",
            ),
        ],
    }
}

fn service(name: &str, reference_price: i64, details: &[&str]) -> PlanService {
    PlanService {
        name: name.to_string(),
        reference_price,
        details: details.iter().map(|d| d.to_string()).collect(),
    }
}

fn plan_views() -> Option<PlanMeteredViews> {
    Some(PlanMeteredViews {
        included_units: PLAN_INCLUDED_VIEWS,
        max_units: PLAN_MAX_VIEWS,
        price_per_unit: VIEWS_PRICE_PER_UNIT,
        unit_label: "views".to_string(),
    })
}

/// Add-on catalog for a plan: every selectable option not already bundled
///
/// Metered options join at their base price; quantity customization is
/// only offered on the standalone selection.
fn derive_add_ons(sections: &[CatalogSection], bundled: &[&str]) -> Vec<PlanAddOn> {
    sections
        .iter()
        .flat_map(|section| {
            section
                .options
                .iter()
                .filter(|o| o.available && !bundled.contains(&o.option_id.as_str()))
                .map(|o| PlanAddOn {
                    add_on_id: format!("{}-{}", section.section_id, o.option_id),
                    name: o.name.clone(),
                    price: o.base_price,
                })
        })
        .collect()
}

fn business_plans(sections: &[CatalogSection]) -> Vec<FixedPlan> {
    let regular_bundle = [
        "instagram",
        "facebook",
        "youtube",
        "gmb",
        "ad-30sec",
        "whatsapp-status",
    ];
    let premium_bundle = [
        "instagram",
        "facebook",
        "linkedin",
        "twitter",
        "youtube",
        "gmb-management",
        "ad-pack-4",
        "whatsapp-status",
    ];
    let pro_premium_bundle = [
        "instagram",
        "facebook",
        "youtube",
        "gmb-management",
        "whatsapp-chatbot",
        "ad-pack-4",
        "meta-google-boost",
        "whatsapp-status",
    ];

    vec![
        FixedPlan {
            plan_id: "regular".to_string(),
            name: "Regular Plan".to_string(),
            description: "Perfect for businesses starting their digital journey".to_string(),
            base_price: 14000,
            discount_eligible: false,
            badge: Some("Monthly".to_string()),
            category: PlanCategory::Business,
            services: vec![
                service(
                    "3 Social Media Setup & Management",
                    3000,
                    &["Instagram", "Facebook", "YouTube"],
                ),
                service(
                    "Google My Business Setup & Management",
                    2500,
                    &["Normal level setup"],
                ),
                service("1 Ad Video (30 sec)", 3500, &["Full customization included"]),
                service(
                    "5,000 Views (Status Marketing)",
                    5000,
                    &["One-time - \u{20b9}1 per view"],
                ),
            ],
            metered_views: plan_views(),
            add_ons: derive_add_ons(sections, &regular_bundle),
        },
        FixedPlan {
            plan_id: "premium".to_string(),
            name: "Premium Plan".to_string(),
            description: "Complete package for growing brands".to_string(),
            base_price: 25000,
            discount_eligible: true,
            badge: Some("Popular".to_string()),
            category: PlanCategory::Business,
            services: vec![
                service("Social Media Management", 3000, &["All platforms managed"]),
                service(
                    "Google My Business Setup & Management",
                    7000,
                    &["Updates, Local SEO, Rating management"],
                ),
                service("Pack of 4 Ad Videos", 10000, &["Full customization included"]),
                service(
                    "5,000 Views (Status Marketing)",
                    5000,
                    &["Customizable (min 5000 views) - \u{20b9}1/view"],
                ),
            ],
            metered_views: plan_views(),
            add_ons: derive_add_ons(sections, &premium_bundle),
        },
        FixedPlan {
            plan_id: "pro-premium".to_string(),
            name: "Pro Premium Plan".to_string(),
            description: "Ultimate solution for serious growth".to_string(),
            base_price: 37000,
            discount_eligible: true,
            badge: Some("Best Value".to_string()),
            category: PlanCategory::Business,
            services: vec![
                service("3 Social Media Management", 3000, &["All major platforms"]),
                service(
                    "Google My Business Setup & Management",
                    7000,
                    &["Full suite management"],
                ),
                service("WhatsApp Chat Bot", 7000, &["24/7 automated customer support"]),
                service("Pack of 4 Ad Videos", 10000, &["Full customization"]),
                service("Meta & Google Boosting", 5000, &["Paid ads management"]),
                service(
                    "5,000 Views (Status Marketing)",
                    5000,
                    &["WhatsApp status marketing"],
                ),
            ],
            metered_views: plan_views(),
            add_ons: derive_add_ons(sections, &pro_premium_bundle),
        },
    ]
}
