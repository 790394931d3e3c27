//! Form pieces shared by the auth and dashboard pages.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use leptos::prelude::*;

use crate::util::validate::{Field, FieldError, error_for};

/// Inline error under a form field, rendered only when `field` failed.
pub(super) fn field_error(errors: RwSignal<Vec<FieldError>>, field: Field) -> impl IntoView {
    move || {
        errors
            .with(|errors| error_for(errors, field))
            .map(|message| view! { <span class="field-error">{message}</span> })
    }
}

/// Gender select shared by the login and signup forms.
pub(super) fn gender_select(gender: RwSignal<String>) -> impl IntoView {
    view! {
        <select
            id="gender"
            name="gender"
            prop:value=move || gender.get()
            on:change=move |ev| gender.set(event_target_value(&ev))
        >
            <option value="">"Prefer not to say"</option>
            <option value="female">"Female"</option>
            <option value="male">"Male"</option>
            <option value="other">"Other"</option>
        </select>
    }
}

/// Submit button label while a request is in flight.
pub(super) fn submit_label(busy: bool, idle: &'static str) -> &'static str {
    if busy { "Loading..." } else { idle }
}
