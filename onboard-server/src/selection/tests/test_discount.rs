use super::*;

#[test]
fn test_discount_locked_before_redeem() {
    let mut engine = engine();
    engine.toggle_option("branding", "logo", None, None).unwrap();

    let err = engine.set_discount_percent(10.0).unwrap_err();
    assert_eq!(err, SelectionError::DiscountLocked);

    let totals = engine.totals(20.0);
    assert_eq!(totals.discount_amount, 0);
    assert_eq!(totals.total, 1000);
}

#[test]
fn test_invalid_code_keeps_discount_locked() {
    let mut engine = engine();
    let err = engine.apply_redeem_code("WRONG@CODE").unwrap_err();
    assert_eq!(err, SelectionError::InvalidCode);

    let err = engine.set_discount_percent(5.0).unwrap_err();
    assert_eq!(err, SelectionError::DiscountLocked);
    assert!(!engine.discount_state().unlocked);
}

#[test]
fn test_redeem_code_is_exact_match() {
    let mut engine = engine();
    assert!(engine.apply_redeem_code("zedmember@123").is_err());
    assert!(engine.apply_redeem_code(" ZEDMEMBER@123").is_err());
    assert!(engine.apply_redeem_code(REDEEM).is_ok());
}

#[test]
fn test_redeem_unlocks_discount() {
    let mut engine = engine();
    engine.toggle_option("branding", "logo", None, None).unwrap();

    engine.apply_redeem_code(REDEEM).unwrap();
    assert_eq!(engine.set_discount_percent(10.0).unwrap(), 10.0);

    let totals = engine.totals(20.0);
    assert_eq!(totals.discount_amount, 100);
    assert_eq!(totals.total, 900);
}

#[test]
fn test_discount_state_tracks_gate() {
    let mut engine = engine();
    let state = engine.discount_state();
    assert_eq!(state.max_percent, 10.0);
    assert!(state.requires_redeem);
    assert!(!state.unlocked);
    assert_eq!(state.percent, 0.0);

    engine.apply_redeem_code(REDEEM).unwrap();
    engine.set_discount_percent(7.5).unwrap();

    let state = engine.discount_state();
    assert!(state.unlocked);
    assert_eq!(state.percent, 7.5);
}

#[test]
fn test_discount_only_shrinks_eligible_base() {
    let mut engine = engine();
    engine.toggle_option("branding", "logo", None, None).unwrap();
    engine.toggle_option("branding", "hosting", None, None).unwrap();
    engine.apply_redeem_code(REDEEM).unwrap();
    engine.set_discount_percent(10.0).unwrap();

    let totals = engine.totals(20.0);
    assert_eq!(totals.subtotal, 6000);
    assert_eq!(totals.discountable_base, 1000);
    assert_eq!(totals.discount_amount, 100);
    assert_eq!(totals.total, 5900);
}

#[test]
fn test_discount_ignores_ineligible_only_cart() {
    let mut engine = engine();
    engine.toggle_option("branding", "hosting", None, None).unwrap();
    engine.apply_redeem_code(REDEEM).unwrap();
    engine.set_discount_percent(10.0).unwrap();

    let totals = engine.totals(20.0);
    assert_eq!(totals.discountable_base, 0);
    assert_eq!(totals.discount_amount, 0);
    assert_eq!(totals.total, 5000);
}

#[test]
fn test_open_policy_needs_no_redeem() {
    let mut engine = open_engine();
    let state = engine.discount_state();
    assert!(!state.requires_redeem);
    assert!(state.unlocked);
    assert_eq!(state.max_percent, 20.0);

    assert_eq!(engine.set_discount_percent(15.0).unwrap(), 15.0);
    assert_eq!(engine.set_discount_percent(25.0).unwrap(), 20.0);
}

#[test]
fn test_open_policy_redeem_is_noop() {
    let mut engine = open_engine();
    assert!(engine.apply_redeem_code("anything").is_ok());
    assert!(engine.discount_state().unlocked);
}

#[test]
fn test_open_policy_still_filters_eligibility() {
    let mut engine = open_engine();
    engine.toggle_option("branding", "logo", None, None).unwrap();
    engine.toggle_option("branding", "hosting", None, None).unwrap();
    engine.set_discount_percent(20.0).unwrap();

    let totals = engine.totals(20.0);
    assert_eq!(totals.discountable_base, 1000);
    assert_eq!(totals.discount_amount, 200);
    assert_eq!(totals.total, 5800);
}

#[test]
fn test_discount_can_return_to_zero() {
    let mut engine = engine();
    engine.toggle_option("branding", "logo", None, None).unwrap();
    engine.apply_redeem_code(REDEEM).unwrap();
    engine.set_discount_percent(10.0).unwrap();
    engine.set_discount_percent(0.0).unwrap();

    assert_eq!(engine.totals(20.0).discount_amount, 0);
}

#[test]
fn test_redeem_is_idempotent() {
    let mut engine = engine();
    engine.apply_redeem_code(REDEEM).unwrap();
    engine.apply_redeem_code(REDEEM).unwrap();
    assert!(engine.discount_state().unlocked);
}

#[test]
fn test_failed_redeem_after_unlock_keeps_unlocked() {
    let mut engine = engine();
    engine.apply_redeem_code(REDEEM).unwrap();
    let _ = engine.apply_redeem_code("WRONG");
    assert!(engine.discount_state().unlocked);
}
