//! Local UI chrome state (theme, profile menu, guest prompt, form status).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the chat log so each
//! control owns a small field and nothing else reaches into it.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::theme::Theme;

/// UI state for the navigation chrome and the guest login prompt.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub theme: Theme,
    pub profile_menu_open: bool,
    /// The host marked this page view as a guest; the login prompt is shown.
    pub guest: bool,
    /// Bumped on every nudge; the prompt replays its attention animation.
    pub login_prompt_pulse_seq: u64,
}

impl UiState {
    /// Flip the profile menu and return whether it is now open.
    pub fn toggle_profile_menu(&mut self) -> bool {
        self.profile_menu_open = !self.profile_menu_open;
        self.profile_menu_open
    }

    pub fn close_profile_menu(&mut self) {
        self.profile_menu_open = false;
    }

    /// Pulse the login prompt if it is shown. Returns `true` if it pulsed.
    pub fn nudge_login_prompt(&mut self) -> bool {
        if !self.guest {
            return false;
        }
        self.login_prompt_pulse_seq = self.login_prompt_pulse_seq.wrapping_add(1);
        true
    }
}

/// Tone of a form status line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Success,
    Error,
}

/// Message shown in a form's shared status area.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub tone: StatusTone,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self { text: text.into(), tone: StatusTone::Success }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), tone: StatusTone::Error }
    }

    /// CSS modifier for the status line.
    #[must_use]
    pub fn class(&self) -> &'static str {
        match self.tone {
            StatusTone::Success => "status-line status-line--success",
            StatusTone::Error => "status-line status-line--error",
        }
    }
}
