use super::*;

#[test]
fn guest_marker_is_case_insensitive() {
    assert!(is_guest_marker(Some("guest")));
    assert!(is_guest_marker(Some(" Guest ")));
    assert!(!is_guest_marker(Some("user")));
    assert!(!is_guest_marker(None));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn no_guest_outside_the_browser() {
    assert!(!host_reports_guest());
}
