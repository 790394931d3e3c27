//! Floating "log in to chat" card shown to guests.

use leptos::prelude::*;

use crate::state::ui::UiState;

/// Guest login prompt. Replays a short lift and pulse each time the chat
/// panel nudges it.
#[component]
pub fn AuthPrompt() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let lifted = RwSignal::new(false);
    let pulsing = RwSignal::new(false);

    Effect::new(move || {
        let seq = ui.with(|u| u.login_prompt_pulse_seq);
        if seq == 0 {
            return;
        }
        lifted.set(true);
        pulsing.set(true);

        #[cfg(feature = "hydrate")]
        {
            use crate::config::{LOGIN_PROMPT_LIFT_MS, LOGIN_PROMPT_PULSE_MS};
            use gloo_timers::callback::Timeout;

            Timeout::new(LOGIN_PROMPT_LIFT_MS, move || {
                let _ = lifted.try_set(false);
            })
            .forget();
            Timeout::new(LOGIN_PROMPT_PULSE_MS, move || {
                let _ = pulsing.try_set(false);
            })
            .forget();
        }
    });

    view! {
        <Show when=move || ui.with(|u| u.guest)>
            <div id="auth-float-fixed" class="auth-float">
                <div
                    class="auth-float-message"
                    class:auth-float-message--lifted=move || lifted.get()
                    class:pulse=move || pulsing.get()
                >
                    <p>"Log in to chat with the advisor and keep your recommendations."</p>
                    <a href="/login" class="btn btn--primary">"Log In"</a>
                    <a href="/signup" class="btn">"Sign Up"</a>
                </div>
            </div>
        </Show>
    }
}
