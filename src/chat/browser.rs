//! Browser bindings for the chat pipeline seams.
//!
//! `HttpTransport` posts to the chat endpoint, `BrowserTicker` paces reveals
//! with `gloo-timers`, and `PanelView` binds the pipeline to the panel's
//! state signal and scroll container. Outside the browser the DOM pieces
//! no-op.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use super::pipeline::Ticker;
use super::pipeline::{ChatTransport, ChatView};
use crate::net::error::ApiError;
use crate::net::types::ChatReply;
use crate::state::chat::ChatState;

/// Milliseconds since the epoch, or `0.0` outside the browser.
#[must_use]
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Chat endpoint over HTTP.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpTransport;

impl ChatTransport for HttpTransport {
    async fn send(&self, message: &str) -> Result<ChatReply, ApiError> {
        crate::net::api::send_chat(message).await
    }
}

/// Wall clock and `setTimeout`-backed sleeps.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTicker;

#[cfg(feature = "hydrate")]
impl Ticker for BrowserTicker {
    fn now_ms(&self) -> f64 {
        now_ms()
    }

    async fn sleep(&self, ms: u32) {
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
    }
}

/// Chat state signal plus the scrollable message list element.
#[derive(Clone, Copy)]
pub struct PanelView {
    pub chat: RwSignal<ChatState>,
    pub viewport: NodeRef<leptos::html::Div>,
}

impl ChatView for PanelView {
    fn update<R>(&self, f: impl FnOnce(&mut ChatState) -> R) -> Option<R> {
        self.chat.try_update(f)
    }

    fn distance_to_bottom(&self) -> f64 {
        #[cfg(feature = "hydrate")]
        {
            self.viewport.get_untracked().map_or(0.0, |el| {
                crate::state::scroll::distance_to_bottom(
                    f64::from(el.scroll_height()),
                    f64::from(el.scroll_top()),
                    f64::from(el.client_height()),
                )
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            0.0
        }
    }

    fn scroll_to_bottom(&self) {
        #[cfg(feature = "hydrate")]
        {
            // Wait a frame so the row appended by the last update is laid out.
            let viewport = self.viewport;
            request_animation_frame(move || {
                if let Some(el) = viewport.get_untracked() {
                    el.set_scroll_top(el.scroll_height());
                }
            });
        }
    }
}
