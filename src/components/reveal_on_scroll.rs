//! Section wrapper that animates in once scrolled into view.

use leptos::prelude::*;

/// Adds `animate` to its wrapper the first time the wrapper's top edge
/// scrolls far enough into the window. Checks on mount and on every scroll.
#[component]
pub fn RevealOnScroll(children: Children) -> impl IntoView {
    let node = NodeRef::<leptos::html::Div>::new();
    let revealed = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        use crate::util::scroll_reveal::should_reveal;

        let check = move || {
            if revealed.get_untracked() {
                return;
            }
            let Some(el) = node.get_untracked() else {
                return;
            };
            let top = el.get_bounding_client_rect().top();
            let window_height = web_sys::window()
                .and_then(|w| w.inner_height().ok())
                .and_then(|h| h.as_f64())
                .unwrap_or(0.0);
            if should_reveal(top, window_height) {
                revealed.set(true);
            }
        };

        Effect::new(move || {
            if node.get().is_some() {
                check();
            }
        });
        let handle = window_event_listener(leptos::ev::scroll, move |_| check());
        on_cleanup(move || handle.remove());
    }

    view! {
        <div class="animate-on-scroll" class:animate=move || revealed.get() node_ref=node>
            {children()}
        </div>
    }
}
