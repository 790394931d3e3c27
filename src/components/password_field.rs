//! Password input with a Show/Hide toggle.

#[cfg(test)]
#[path = "password_field_test.rs"]
mod password_field_test;

use leptos::prelude::*;

/// Input `type` for the current visibility.
#[must_use]
pub fn input_type(visible: bool) -> &'static str {
    if visible { "text" } else { "password" }
}

/// Toggle button label for the current visibility.
#[must_use]
pub fn toggle_label(visible: bool) -> &'static str {
    if visible { "Hide" } else { "Show" }
}

#[component]
pub fn PasswordField(
    id: &'static str,
    value: RwSignal<String>,
    #[prop(default = "Password")] placeholder: &'static str,
    #[prop(default = "current-password")] autocomplete: &'static str,
) -> impl IntoView {
    let visible = RwSignal::new(false);

    view! {
        <div class="password-field">
            <input
                id=id
                name=id
                type=move || input_type(visible.get())
                placeholder=placeholder
                autocomplete=autocomplete
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <button
                type="button"
                class="toggle-password"
                aria-pressed=move || visible.get().to_string()
                on:click=move |_| visible.update(|v| *v = !*v)
            >
                {move || toggle_label(visible.get())}
            </button>
        </div>
    }
}
