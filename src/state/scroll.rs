//! Chat viewport pinning and manual-scroll suspension.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Tracks manual scroll input on the chat viewport.
///
/// A manual scroll suspends auto-scroll for a cooldown window measured from
/// the most recent manual event, so repeated wheel input keeps extending it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub manual_scroll_at: Option<f64>,
}

impl ScrollState {
    /// Record a manual scroll event observed at `now_ms`.
    pub fn note_manual_scroll(&mut self, now_ms: f64) {
        self.manual_scroll_at = Some(self.manual_scroll_at.map_or(now_ms, |prev| prev.max(now_ms)));
    }

    /// Whether auto-scroll is currently suspended by a recent manual scroll.
    #[must_use]
    pub fn is_suspended(&self, now_ms: f64, cooldown_ms: f64) -> bool {
        self.manual_scroll_at.is_some_and(|at| now_ms - at < cooldown_ms)
    }

    /// Whether the viewport should follow new content.
    ///
    /// True only when the viewport sits within `threshold_px` of the bottom
    /// and no manual scroll happened in the last `cooldown_ms`.
    #[must_use]
    pub fn allows_auto_scroll(&self, distance_to_bottom: f64, now_ms: f64, threshold_px: f64, cooldown_ms: f64) -> bool {
        distance_to_bottom < threshold_px && !self.is_suspended(now_ms, cooldown_ms)
    }
}

/// Distance in pixels between the viewport's bottom edge and the content end.
#[must_use]
pub fn distance_to_bottom(scroll_height: f64, scroll_top: f64, client_height: f64) -> f64 {
    scroll_height - scroll_top - client_height
}
