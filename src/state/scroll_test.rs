use super::*;

const THRESHOLD: f64 = 50.0;
const COOLDOWN: f64 = 2000.0;

// =============================================================
// allows_auto_scroll
// =============================================================

#[test]
fn follows_when_near_bottom_without_manual_scroll() {
    let scroll = ScrollState::default();
    assert!(scroll.allows_auto_scroll(0.0, 1_000.0, THRESHOLD, COOLDOWN));
    assert!(scroll.allows_auto_scroll(49.9, 1_000.0, THRESHOLD, COOLDOWN));
}

#[test]
fn does_not_follow_at_or_beyond_threshold() {
    let scroll = ScrollState::default();
    assert!(!scroll.allows_auto_scroll(50.0, 1_000.0, THRESHOLD, COOLDOWN));
    assert!(!scroll.allows_auto_scroll(400.0, 1_000.0, THRESHOLD, COOLDOWN));
}

#[test]
fn manual_scroll_suspends_for_cooldown_window() {
    let mut scroll = ScrollState::default();
    scroll.note_manual_scroll(10_000.0);
    assert!(!scroll.allows_auto_scroll(0.0, 10_000.0, THRESHOLD, COOLDOWN));
    assert!(!scroll.allows_auto_scroll(0.0, 11_999.0, THRESHOLD, COOLDOWN));
    assert!(scroll.allows_auto_scroll(0.0, 12_000.0, THRESHOLD, COOLDOWN));
}

#[test]
fn repeated_manual_scroll_refreshes_window() {
    let mut scroll = ScrollState::default();
    scroll.note_manual_scroll(10_000.0);
    scroll.note_manual_scroll(11_500.0);
    assert!(scroll.is_suspended(13_000.0, COOLDOWN));
    assert!(!scroll.is_suspended(13_500.0, COOLDOWN));
}

#[test]
fn out_of_order_manual_scroll_keeps_latest_timestamp() {
    let mut scroll = ScrollState::default();
    scroll.note_manual_scroll(5_000.0);
    scroll.note_manual_scroll(4_000.0);
    assert_eq!(scroll.manual_scroll_at, Some(5_000.0));
}

// =============================================================
// distance_to_bottom
// =============================================================

#[test]
fn distance_to_bottom_is_remaining_scrollable_height() {
    assert!((distance_to_bottom(1_000.0, 600.0, 400.0)).abs() < f64::EPSILON);
    assert!((distance_to_bottom(1_000.0, 500.0, 400.0) - 100.0).abs() < f64::EPSILON);
}
