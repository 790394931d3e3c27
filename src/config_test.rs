use super::*;

#[test]
fn chat_config_default_uses_module_constants() {
    let config = ChatConfig::default();
    assert_eq!(config.reveal_interval_ms, 15);
    assert!((config.auto_scroll_threshold_px - 50.0).abs() < f64::EPSILON);
    assert!((config.manual_scroll_cooldown_ms - 2000.0).abs() < f64::EPSILON);
    assert_eq!(config.fallback_reply, "Sorry, there was an error processing your message.");
}

#[test]
fn endpoints_are_rooted_under_api() {
    for endpoint in [
        CHAT_ENDPOINT,
        LOGIN_ENDPOINT,
        SIGNUP_ENDPOINT,
        FORGOT_ENDPOINT,
        RESET_ENDPOINT,
        SUGGEST_ENDPOINT,
        LOGOUT_ENDPOINT,
    ] {
        assert!(endpoint.starts_with("/api/"), "{endpoint}");
    }
}
