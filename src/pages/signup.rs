//! Signup page: creates an account and sends the user to log in.

use leptos::prelude::*;

use super::form::{field_error, gender_select, submit_label};
use crate::components::nav_bar::NavBar;
use crate::components::password_field::PasswordField;
use crate::components::status_line::StatusLine;
use crate::state::ui::StatusMessage;
use crate::util::validate::{Field, FieldError, validate_signup};

#[component]
pub fn SignupPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
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
        let request = match validate_signup(&name.get(), &email.get(), &password.get(), &gender.get()) {
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

            match crate::net::api::signup(&request).await {
                Ok(message) => {
                    status.set(Some(StatusMessage::success(message)));
                    crate::util::nav::navigate_after("/login", REDIRECT_DELAY_MS);
                }
                Err(e) => {
                    log::warn!("signup failed: {e}");
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
                <h1>"Create your account"</h1>
                <form id="signup-form" class="auth-form" on:submit=on_submit novalidate=true>
                    <label for="name">"Name"</label>
                    <input
                        id="name"
                        name="name"
                        type="text"
                        autocomplete="name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    {field_error(errors, Field::Name)}
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
                    <PasswordField id="password" value=password autocomplete="new-password"/>
                    {field_error(errors, Field::Password)}
                    <label for="gender">"Gender"</label>
                    {gender_select(gender)}
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || submit_label(busy.get(), "Sign Up")}
                    </button>
                </form>
                <StatusLine status=status/>
                <p class="auth-card__links">
                    "Already registered? "
                    <a href="/login">"Log in"</a>
                </p>
            </div>
        </main>
    }
}
