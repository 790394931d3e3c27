//! Login page: email + password, redirecting to the dashboard on success.

use leptos::prelude::*;

use super::form::{field_error, gender_select, submit_label};
use crate::components::nav_bar::NavBar;
use crate::components::password_field::PasswordField;
use crate::components::status_line::StatusLine;
use crate::state::ui::StatusMessage;
use crate::util::validate::{Field, FieldError, validate_login};

#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let gender = RwSignal::new(String::new());
    let errors = RwSignal::new(Vec::<FieldError>::new());
    let status = RwSignal::new(None::<StatusMessage>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        status.set(None);
        let request = match validate_login(&email.get(), &password.get(), &gender.get()) {
            Ok(request) => request,
            Err(found) => {
                errors.set(found);
                return;
            }
        };
        errors.set(Vec::new());
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::config::{NETWORK_ERROR_TEXT, REDIRECT_DELAY_MS};

            match crate::net::api::login(&request).await {
                Ok(message) => {
                    status.set(Some(StatusMessage::success(message)));
                    crate::util::nav::navigate_after("/dashboard", REDIRECT_DELAY_MS);
                }
                Err(e) => {
                    log::warn!("login failed: {e}");
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
                <h1>"Welcome back"</h1>
                <form id="login-form" class="auth-form" on:submit=on_submit novalidate=true>
                    <label for="email">"Email"</label>
                    <input
                        id="email"
                        name="email"
                        type="email"
                        placeholder="you@example.com"
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    {field_error(errors, Field::Email)}
                    <label for="password">"Password"</label>
                    <PasswordField id="password" value=password/>
                    {field_error(errors, Field::Password)}
                    <label for="gender">"Gender"</label>
                    {gender_select(gender)}
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || submit_label(busy.get(), "Log In")}
                    </button>
                </form>
                <StatusLine status=status/>
                <p class="auth-card__links">
                    <a href="/forgot">"Forgot password?"</a>
                    " · "
                    <a href="/signup">"Create an account"</a>
                </p>
            </div>
        </main>
    }
}
