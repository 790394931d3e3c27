//! Scroll-triggered reveal of `.animate-on-scroll` sections.

#[cfg(test)]
#[path = "scroll_reveal_test.rs"]
mod scroll_reveal_test;

use crate::config::SCROLL_REVEAL_OFFSET_PX;

/// Whether an element whose top edge sits at `element_top` (viewport
/// coordinates) has scrolled far enough into view to animate.
#[must_use]
pub fn should_reveal(element_top: f64, window_height: f64) -> bool {
    element_top < window_height - SCROLL_REVEAL_OFFSET_PX
}
