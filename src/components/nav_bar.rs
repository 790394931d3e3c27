//! Top navigation: links, theme toggle, and the profile menu.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::theme_toggle::ThemeToggle;
use crate::state::ui::UiState;
use crate::util::nav::{is_active, link_rel};

pub const LINKS: [(&str, &str); 3] = [("/", "Home"), ("/chat", "Chat"), ("/dashboard", "Dashboard")];
pub const PROFILE_HREF: &str = "/profile";

/// Site navigation bar. Guests get login/signup links; signed-in users get
/// the profile menu.
#[component]
pub fn NavBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let pathname = use_location().pathname;

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        // Any click outside the profile area closes the menu.
        let handle = window_event_listener(leptos::ev::click, move |ev| {
            if !ui.with_untracked(|u| u.profile_menu_open) {
                return;
            }
            let inside = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                .and_then(|el| el.closest(".nav-profile").ok().flatten())
                .is_some();
            if !inside {
                ui.update(UiState::close_profile_menu);
            }
        });
        on_cleanup(move || handle.remove());
    }

    let on_logout = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        ui.update(UiState::close_profile_menu);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Err(e) = crate::net::api::logout().await {
                log::warn!("logout failed: {e}");
            }
            crate::util::nav::navigate_to("/");
        });
    };

    let menu_open = move || ui.with(|u| u.profile_menu_open);

    view! {
        <nav class="navbar">
            <a href="/" class="nav-brand">"Career Go"</a>
            <div class="nav-links">
                {LINKS
                    .iter()
                    .map(|&(href, label)| {
                        view! {
                            <a
                                href=href
                                class="nav-link"
                                class:active=move || pathname.with(|path| is_active(href, path))
                            >
                                {label}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <div class="nav-actions">
                <ThemeToggle/>
                <Show
                    when=move || !ui.with(|u| u.guest)
                    fallback=|| {
                        view! {
                            <a href="/login" class="nav-link">"Log In"</a>
                            <a href="/signup" class="btn btn--primary">"Sign Up"</a>
                        }
                    }
                >
                    <div class="nav-profile">
                        <button
                            id="profile-btn"
                            type="button"
                            class="nav-profile__button"
                            aria-haspopup="true"
                            aria-expanded=move || menu_open().to_string()
                            on:click=move |_| {
                                ui.update(|u| {
                                    u.toggle_profile_menu();
                                });
                            }
                        >
                            "Profile"
                        </button>
                        <div
                            id="profile-menu"
                            class="profile-menu"
                            class:hidden=move || !menu_open()
                            aria-hidden=move || (!menu_open()).to_string()
                        >
                            <Show when=menu_open>
                                <a href=PROFILE_HREF rel=link_rel(PROFILE_HREF) class="profile-menu-item">
                                    "View Profile"
                                </a>
                                <a href="#" class="profile-menu-item" on:click=on_logout>"Logout"</a>
                            </Show>
                        </div>
                    </div>
                </Show>
            </div>
        </nav>
    }
}
