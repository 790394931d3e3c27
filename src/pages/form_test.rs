use super::*;

// =============================================================
// submit_label
// =============================================================

#[test]
fn submit_label_idle_shows_action() {
    assert_eq!(submit_label(false, "Log In"), "Log In");
}

#[test]
fn submit_label_busy_shows_loading() {
    assert_eq!(submit_label(true, "Log In"), "Loading...");
    assert_eq!(submit_label(true, "Sign Up"), "Loading...");
}
