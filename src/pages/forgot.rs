//! Forgot/reset password page.
//!
//! The forgot form requests a reset code; on success it is replaced by the
//! reset form for the same email. A code echoed back by the server is shown
//! inline.

use leptos::prelude::*;

use super::form::submit_label;
use crate::components::nav_bar::NavBar;
use crate::components::password_field::PasswordField;
use crate::components::status_line::StatusLine;
use crate::state::ui::StatusMessage;
use crate::util::validate::{forgot_request, reset_request};

#[component]
pub fn ForgotPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let code = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let status = RwSignal::new(None::<StatusMessage>);
    let busy = RwSignal::new(false);
    let code_sent = RwSignal::new(false);
    let echoed_code = RwSignal::new(None::<String>);

    let on_forgot = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        status.set(None);
        let request = forgot_request(&email.get());
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::config::RESET_CODE_ERROR_TEXT;

            match crate::net::api::forgot_password(&request).await {
                Ok(resp) => {
                    status.set(Some(StatusMessage::success(resp.message)));
                    echoed_code.set(resp.reset_code);
                    code_sent.set(true);
                }
                Err(e) => {
                    log::warn!("reset code request failed: {e}");
                    status.set(Some(StatusMessage::error(e.status_text(RESET_CODE_ERROR_TEXT))));
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            busy.set(false);
        }
    };

    let on_reset = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        status.set(None);
        let request = reset_request(&email.get(), &code.get(), &new_password.get());
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::config::{NETWORK_ERROR_TEXT, REDIRECT_DELAY_MS};

            match crate::net::api::reset_password(&request).await {
                Ok(message) => {
                    status.set(Some(StatusMessage::success(message)));
                    crate::util::nav::navigate_after("/login", REDIRECT_DELAY_MS);
                }
                Err(e) => {
                    log::warn!("password reset failed: {e}");
                    status.set(Some(StatusMessage::error(e.status_text(NETWORK_ERROR_TEXT))));
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            busy.set(false);
        }
    };

    view! {
        <NavBar/>
        <main class="auth-page">
            <div class="auth-card">
                <h1>"Reset your password"</h1>
                <form
                    id="forgot-form"
                    class="auth-form"
                    class:hidden=move || code_sent.get()
                    on:submit=on_forgot
                >
                    <label for="forgot-email">"Email"</label>
                    <input
                        id="forgot-email"
                        name="email"
                        type="email"
                        placeholder="you@example.com"
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || submit_label(busy.get(), "Send Reset Code")}
                    </button>
                </form>
                <form
                    id="reset-form"
                    class="auth-form"
                    class:hidden=move || !code_sent.get()
                    on:submit=on_reset
                >
                    <Show when=move || echoed_code.get().is_some()>
                        <p class="reset-code">
                            "Your reset code: "
                            <strong>{move || echoed_code.get().unwrap_or_default()}</strong>
                        </p>
                    </Show>
                    <label for="reset-code">"Reset code"</label>
                    <input
                        id="reset-code"
                        name="code"
                        type="text"
                        autocomplete="one-time-code"
                        prop:value=move || code.get()
                        on:input=move |ev| code.set(event_target_value(&ev))
                    />
                    <label for="new-password">"New password"</label>
                    <PasswordField
                        id="new-password"
                        value=new_password
                        placeholder="New password"
                        autocomplete="new-password"
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || submit_label(busy.get(), "Reset Password")}
                    </button>
                </form>
                <StatusLine status=status/>
                <p class="auth-card__links">
                    <a href="/login">"Back to log in"</a>
                </p>
            </div>
        </main>
    }
}
