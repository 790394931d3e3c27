//! Theme toggle button.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::theme::{self, Theme};

/// Flips between light and dark. The button spins first; the theme switches
/// partway through and the spin clears shortly after.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let spinning = RwSignal::new(false);

    let on_click = move |_| {
        spinning.set(true);

        #[cfg(feature = "hydrate")]
        {
            use crate::config::{THEME_APPLY_DELAY_MS, THEME_RESET_DELAY_MS};
            use gloo_timers::callback::Timeout;

            Timeout::new(THEME_APPLY_DELAY_MS, move || {
                let Some(current) = ui.try_with_untracked(|u| u.theme) else {
                    return;
                };
                let next = theme::toggle(current);
                let _ = ui.try_update(|u| u.theme = next);
                Timeout::new(THEME_RESET_DELAY_MS, move || {
                    let _ = spinning.try_set(false);
                })
                .forget();
            })
            .forget();
        }
        #[cfg(not(feature = "hydrate"))]
        {
            ui.update(|u| u.theme = theme::toggle(u.theme));
            spinning.set(false);
        }
    };

    let label = move || match ui.with(|u| u.theme) {
        Theme::Light => "Switch to dark theme",
        Theme::Dark => "Switch to light theme",
    };

    view! {
        <button
            id="theme-toggle"
            type="button"
            class="theme-toggle"
            class:theme-toggle--spin=move || spinning.get()
            aria-label=label
            title=label
            on:click=on_click
        >
            {move || if ui.with(|u| u.theme == Theme::Dark) { "☀" } else { "☾" }}
        </button>
    }
}
