//! End-to-end wizard flow against in-process services
//!
//! Drives `ServerState` directly: session creation, survey and business
//! details, selection operations over the built-in catalog, totals, and
//! the payment signature handshake.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use onboard_server::{Config, ErrorCode, ServerState};
use shared::models::{
    BusinessDetails, LanguageChoice, PaymentState, SurveyAnswers, ToggleOutcome,
};

const REDEEM: &str = "WELCOME@10";
const GATEWAY_SECRET: &str = "rzp_test_secret";

fn state() -> ServerState {
    ServerState::initialize(&Config::with_overrides(REDEEM, None)).unwrap()
}

fn business() -> BusinessDetails {
    BusinessDetails {
        business_name: "Acme Studio".into(),
        brand_details: "Boutique design studio".into(),
        phone: "+91 98765 43210".into(),
        email: "hello@acme.example".into(),
        website: None,
    }
}

/// Sign the way the gateway does after hosted checkout
fn gateway_signature(order_id: &str, payment_id: &str) -> String {
    let mut mac = Hmac::<Sha256>::new_from_slice(GATEWAY_SECRET.as_bytes()).unwrap();
    mac.update(format!("{order_id}|{payment_id}").as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

#[tokio::test]
async fn test_full_wizard_flow() {
    let state = state();
    let id = state.create_session();

    // Survey + business details
    state
        .sessions
        .update(id, |s| {
            s.ensure_mutable()?;
            s.survey = Some(SurveyAnswers {
                business_stage: "growing".into(),
                interested_services: vec!["branding".into(), "reach".into()],
                has_brand_assets: true,
                biggest_challenge: "visibility".into(),
            });
            s.business = Some(business());
            Ok(())
        })
        .unwrap();
    state.profiles.save(id, &business()).await.unwrap();

    // Selection: flat option, metered option, language-variant option
    state
        .sessions
        .update(id, |s| {
            let outcome = s
                .engine
                .toggle_option("digital-footprint", "instagram", None, None)?;
            assert!(matches!(outcome, ToggleOutcome::Selected { .. }));

            // Metered with no explicit quantity defaults to the minimum
            s.engine
                .toggle_option("digital-reach", "whatsapp-status", None, None)?;
            assert_eq!(s.engine.entries()[1].price(), 5000);

            // Language variant suspends until resolved; cart unchanged
            let outcome = s
                .engine
                .toggle_option("content-creation", "ad-30sec", None, None)?;
            assert!(matches!(outcome, ToggleOutcome::PendingLanguageChoice { .. }));
            assert_eq!(s.engine.entries().len(), 2);

            let outcome = s.engine.resolve_language_choice(true)?;
            match outcome {
                ToggleOutcome::Selected { entry } => {
                    assert_eq!(entry.price(), 4000);
                    assert!(entry.name().contains("2nd Language"));
                }
                other => panic!("expected Selected, got {:?}", other),
            }

            // Raise the metered quantity
            let clamped = s.engine.set_quantity("digital-reach", "whatsapp-status", 12000)?;
            assert_eq!(clamped, 12000);
            Ok(())
        })
        .unwrap();

    // Discount: locked until the redeem code matches
    state
        .sessions
        .update(id, |s| {
            assert!(s.engine.set_discount_percent(10.0).is_err());
            assert!(s.engine.apply_redeem_code("WRONG").is_err());
            s.engine.apply_redeem_code(REDEEM)?;
            let percent = s.engine.set_discount_percent(10.0)?;
            assert_eq!(percent, 10.0);
            Ok(())
        })
        .unwrap();

    // instagram 1000 (eligible) + status 12000 (ineligible) + ad 4000 (eligible)
    let totals = state
        .sessions
        .read(id, |s| s.engine.totals(state.config.advance_percent))
        .unwrap();
    assert_eq!(totals.subtotal, 17000);
    assert_eq!(totals.discountable_base, 5000);
    assert_eq!(totals.discount_amount, 500);
    assert_eq!(totals.total, 16500);
    assert_eq!(totals.advance_amount, 4950);

    // Gateway order created out-of-band; record it on the session
    state
        .sessions
        .update(id, |s| {
            s.payment = PaymentState::OrderCreated {
                order_id: "order_test1".into(),
                advance_amount: totals.advance_amount,
                created_at: 0,
            };
            Ok(())
        })
        .unwrap();

    // The hosted checkout calls back with a signed confirmation
    let signature = gateway_signature("order_test1", "pay_test1");
    state
        .gateway
        .verify_signature("order_test1", "pay_test1", &signature)
        .unwrap();

    state
        .sessions
        .update(id, |s| {
            s.payment = PaymentState::Paid {
                order_id: "order_test1".into(),
                payment_id: "pay_test1".into(),
                verified_at: 1,
            };
            Ok(())
        })
        .unwrap();

    // Paid sessions are read-only history
    let err = state.sessions.update(id, |s| s.ensure_mutable()).unwrap_err();
    assert_eq!(err.code, ErrorCode::SessionAlreadyPaid);
}

#[tokio::test]
async fn test_plan_flow_with_add_on_and_views() {
    let state = state();
    let id = state.create_session();

    state
        .sessions
        .update(id, |s| {
            s.engine.select_fixed_plan("premium")?;
            assert_eq!(s.engine.entries()[0].price(), 25000);

            // 3000 views above the included 5000 baseline
            s.engine.set_plan_views("premium", 8000)?;
            assert_eq!(s.engine.entries()[0].price(), 28000);

            s.engine.toggle_add_on("premium", "digital-footprint-gmb")?;
            assert_eq!(s.engine.entries()[0].price(), 30500);

            // A second plan prices independently
            s.engine.select_fixed_plan("regular")?;
            Ok(())
        })
        .unwrap();

    let totals = state.sessions.read(id, |s| s.engine.totals(20.0)).unwrap();
    assert_eq!(totals.subtotal, 30500 + 14000);
    // regular is discount-ineligible
    assert_eq!(totals.discountable_base, 30500);
}

#[tokio::test]
async fn test_bad_signature_leaves_session_unpaid() {
    let state = state();
    let id = state.create_session();

    state
        .sessions
        .update(id, |s| {
            s.payment = PaymentState::OrderCreated {
                order_id: "order_x".into(),
                advance_amount: 100,
                created_at: 0,
            };
            Ok(())
        })
        .unwrap();

    // Signed with the wrong key
    let mut mac = Hmac::<Sha256>::new_from_slice(b"attacker-key").unwrap();
    mac.update(b"order_x|pay_x");
    let forged = hex::encode(mac.finalize().into_bytes());

    assert!(state.gateway.verify_signature("order_x", "pay_x", &forged).is_err());

    let paid = state.sessions.read(id, |s| s.payment.is_paid()).unwrap();
    assert!(!paid);
}

#[tokio::test]
async fn test_language_variant_unavailable_and_clamping_rules() {
    let state = state();
    let id = state.create_session();

    state
        .sessions
        .update(id, |s| {
            // Coming-soon options are rejected outright
            let err = s
                .engine
                .toggle_option("automation", "crm-setup", None, None)
                .unwrap_err();
            assert_eq!(err.to_string(), "Option not available: automation/crm-setup");

            // Quantities clamp to the metered bounds
            let clamped = s.engine.set_quantity("digital-reach", "whatsapp-status", 1)?;
            assert_eq!(clamped, 5000);
            let clamped = s
                .engine
                .set_quantity("digital-reach", "whatsapp-status", 9_999_999)?;
            assert_eq!(clamped, 100_000);

            // Previews alone never select
            assert!(s.engine.is_empty());

            // Dual choice resolved inline skips the pending phase
            s.engine.toggle_option(
                "content-creation",
                "ad-15sec",
                None,
                Some(LanguageChoice::Dual),
            )?;
            assert_eq!(s.engine.entries()[0].price(), 3500);
            Ok(())
        })
        .unwrap();
}
