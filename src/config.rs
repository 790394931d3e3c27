//! Client timing constants and chat pipeline configuration.
//!
//! The browser has no environment to read from, so everything tunable lives
//! here as a constant and `ChatConfig` carries the chat subset into the
//! pipeline where tests can override it.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Delay between revealed characters of a bot reply.
pub const REVEAL_INTERVAL_MS: u32 = 15;
/// Auto-scroll only follows the reveal when the viewport is this close to the bottom.
pub const AUTO_SCROLL_THRESHOLD_PX: f64 = 50.0;
/// A manual scroll suspends auto-scroll for this long.
pub const MANUAL_SCROLL_COOLDOWN_MS: f64 = 2000.0;
/// Image slider advance period.
pub const SLIDE_INTERVAL_MS: u32 = 1500;
/// Elements reveal once their top edge is this far above the window bottom.
pub const SCROLL_REVEAL_OFFSET_PX: f64 = 150.0;
/// Pause before navigating away after a successful form submission.
pub const REDIRECT_DELAY_MS: u32 = 1000;
/// Theme toggle flips the theme this long after the click animation starts.
pub const THEME_APPLY_DELAY_MS: u32 = 150;
/// Theme toggle animation is cleared this long after the theme flips.
pub const THEME_RESET_DELAY_MS: u32 = 300;
/// Login prompt lift duration.
pub const LOGIN_PROMPT_LIFT_MS: u32 = 220;
/// Login prompt pulse highlight duration.
pub const LOGIN_PROMPT_PULSE_MS: u32 = 600;

pub const CHAT_ENDPOINT: &str = "/api/chat";
pub const LOGIN_ENDPOINT: &str = "/api/login";
pub const SIGNUP_ENDPOINT: &str = "/api/signup";
pub const FORGOT_ENDPOINT: &str = "/api/forgot-email";
pub const RESET_ENDPOINT: &str = "/api/reset";
pub const SUGGEST_ENDPOINT: &str = "/api/suggest_careers";
pub const LOGOUT_ENDPOINT: &str = "/api/logout";

/// Form status text when a request fails without a server message.
pub const NETWORK_ERROR_TEXT: &str = "Network error. Please try again.";
/// Forgot-password status text when the code request fails without a server message.
pub const RESET_CODE_ERROR_TEXT: &str = "Error sending reset code. Please try again.";
/// Dashboard status text when recommendations cannot be fetched.
pub const SUGGEST_ERROR_TEXT: &str = "Could not load recommendations. Please try again.";

/// Bot message shown when a chat request fails for any reason.
pub const CHAT_FALLBACK_REPLY: &str = "Sorry, there was an error processing your message.";

/// Tunables for the chat pipeline.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatConfig {
    pub reveal_interval_ms: u32,
    pub auto_scroll_threshold_px: f64,
    pub manual_scroll_cooldown_ms: f64,
    pub fallback_reply: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            reveal_interval_ms: REVEAL_INTERVAL_MS,
            auto_scroll_threshold_px: AUTO_SCROLL_THRESHOLD_PX,
            manual_scroll_cooldown_ms: MANUAL_SCROLL_COOLDOWN_MS,
            fallback_reply: CHAT_FALLBACK_REPLY.to_owned(),
        }
    }
}
