//! Unit tests for the Direction model

use sigbridge::models::Direction;

#[test]
fn test_update_token_accepts_buy_and_sell() {
    assert_eq!(Direction::from_update_token("buy"), Some(Direction::Buy));
    assert_eq!(Direction::from_update_token("sell"), Some(Direction::Sell));
}

#[test]
fn test_update_token_is_case_insensitive() {
    assert_eq!(Direction::from_update_token("BUY"), Some(Direction::Buy));
    assert_eq!(Direction::from_update_token("Sell"), Some(Direction::Sell));
    assert_eq!(Direction::from_update_token("  buy \n"), Some(Direction::Buy));
}

#[test]
fn test_update_token_rejects_everything_else() {
    assert_eq!(Direction::from_update_token("hold"), None);
    assert_eq!(Direction::from_update_token(""), None);
    assert_eq!(Direction::from_update_token("buy now"), None);
    // "unknown" is not a settable direction
    assert_eq!(Direction::from_update_token("unknown"), None);
}

#[test]
fn test_payload_matches_own_identifier() {
    assert!(Direction::Buy.matches_payload("buy"));
    assert!(Direction::Sell.matches_payload("sell"));
    assert!(!Direction::Buy.matches_payload("sell"));
    assert!(!Direction::Sell.matches_payload("buy"));
}

#[test]
fn test_unknown_direction_never_matches_any_payload() {
    for payload in ["buy", "sell", "unknown", "", "none"] {
        assert!(
            !Direction::Unknown.matches_payload(payload),
            "unknown must reject payload {:?}",
            payload
        );
    }
}

#[test]
fn test_default_is_unknown() {
    assert_eq!(Direction::default(), Direction::Unknown);
}

#[test]
fn test_display_uses_identifier() {
    assert_eq!(Direction::Buy.to_string(), "buy");
    assert_eq!(Direction::Sell.to_string(), "sell");
    assert_eq!(Direction::Unknown.to_string(), "unknown");
}
