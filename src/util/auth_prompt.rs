//! Guest detection for the "log in to chat" prompt.
//!
//! The host server marks guest page views with `<body data-auth="guest">`;
//! the chat panel then nudges the prompt on clicks instead of staying silent.

#[cfg(test)]
#[path = "auth_prompt_test.rs"]
mod auth_prompt_test;

pub const GUEST_MARKER: &str = "guest";

/// Whether a `data-auth` attribute value marks a guest.
#[must_use]
pub fn is_guest_marker(value: Option<&str>) -> bool {
    value.is_some_and(|v| v.trim().eq_ignore_ascii_case(GUEST_MARKER))
}

/// Whether the host page asked for the login prompt.
pub fn host_reports_guest() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let marker = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .and_then(|b| b.get_attribute("data-auth"));
        is_guest_marker(marker.as_deref())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}
