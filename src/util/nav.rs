//! Navigation helpers: active-link matching and full-page redirects.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Paths rendered by the client router. Anything else on this origin is
/// served by the host, such as `/profile`.
pub const CLIENT_ROUTES: [&str; 6] = ["/", "/login", "/signup", "/forgot", "/dashboard", "/chat"];

#[must_use]
pub fn is_client_route(path: &str) -> bool {
    CLIENT_ROUTES.contains(&path)
}

/// `rel` for a same-origin link. Host-served pages need `external` so the
/// router lets the browser load them instead of showing its fallback.
#[must_use]
pub fn link_rel(href: &str) -> Option<&'static str> {
    (!is_client_route(href)).then_some("external")
}

/// A nav link is active when its href is exactly the current path.
#[must_use]
pub fn is_active(href: &str, current_path: &str) -> bool {
    href == current_path
}

/// Full-page navigation to `path`.
pub fn navigate_to(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}

/// Navigate to `path` after `delay_ms`, leaving the success message visible meanwhile.
pub fn navigate_after(path: &'static str, delay_ms: u32) {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::callback::Timeout::new(delay_ms, move || navigate_to(path)).forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, delay_ms);
    }
}
