//! Shared form status area.

use leptos::prelude::*;

use crate::state::ui::StatusMessage;

/// Renders the latest form status, if any.
#[component]
pub fn StatusLine(status: RwSignal<Option<StatusMessage>>) -> impl IntoView {
    view! {
        <div id="message" role="status">
            {move || {
                status
                    .get()
                    .map(|status| {
                        let class = status.class();
                        view! { <p class=class>{status.text}</p> }
                    })
            }}
        </div>
    }
}
