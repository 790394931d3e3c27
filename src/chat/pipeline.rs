//! Chat submission and reply reveal sequencing.
//!
//! ARCHITECTURE
//! ============
//! `ChatPipeline` runs one exchange at a time on the UI task:
//!
//! 1. append the user message and pin the viewport to the bottom
//! 2. clear the input
//! 3. insert a typing placeholder and scroll
//! 4. send exactly one request to the chat endpoint
//! 5. remove that placeholder, whatever the outcome
//! 6. reveal the reply one char per tick, or append the fallback message
//!
//! The network, the clock, and the rendered view are seams (`ChatTransport`,
//! `Ticker`, `ChatView`) so the same sequencing runs in the browser and in
//! native tests.
//!
//! While a request is outstanding further submissions are refused, which
//! keeps at most one placeholder in the log. A `CancelFlag` stops an
//! in-progress reveal when the owning panel is torn down.

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod pipeline_test;

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::config::ChatConfig;
use crate::net::error::ApiError;
use crate::net::types::ChatReply;
use crate::state::chat::{ChatState, RevealStep};

/// Sends a message to the chat endpoint.
pub trait ChatTransport {
    fn send(&self, message: &str) -> impl Future<Output = Result<ChatReply, ApiError>>;
}

/// Wall clock and timer used to pace the reveal.
pub trait Ticker {
    fn now_ms(&self) -> f64;
    fn sleep(&self, ms: u32) -> impl Future<Output = ()>;
}

/// The conversation state plus the scrollable viewport that renders it.
pub trait ChatView {
    /// Mutate the chat state. Returns `None` once the view is gone.
    fn update<R>(&self, f: impl FnOnce(&mut ChatState) -> R) -> Option<R>;
    /// Pixels between the viewport bottom and the end of the content.
    fn distance_to_bottom(&self) -> f64;
    fn scroll_to_bottom(&self);
}

/// Shared stop signal for reveals owned by a torn-down panel.
#[derive(Clone, Debug, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// How a submission ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Input was empty after trimming; nothing happened.
    Empty,
    /// A previous request is still outstanding; nothing happened.
    Busy,
    /// The reply was revealed in full.
    Replied { message_id: String },
    /// The request failed and the fallback message was shown.
    Failed { message_id: String },
    /// The view went away or the panel was cancelled mid-exchange.
    Cancelled,
}

/// How a reveal ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    Complete,
    Cancelled,
}

/// Sequencer for one chat panel.
pub struct ChatPipeline<T, K, V> {
    transport: T,
    ticker: K,
    view: V,
    config: ChatConfig,
    cancel: CancelFlag,
}

impl<T, K, V> ChatPipeline<T, K, V>
where
    T: ChatTransport,
    K: Ticker,
    V: ChatView,
{
    pub fn new(transport: T, ticker: K, view: V, config: ChatConfig) -> Self {
        Self { transport, ticker, view, config, cancel: CancelFlag::default() }
    }

    /// Share a cancel flag with the owner of this pipeline.
    #[must_use]
    pub fn with_cancel(mut self, cancel: CancelFlag) -> Self {
        self.cancel = cancel;
        self
    }

    /// Submit whatever is currently in the input field.
    pub async fn submit_input(&self) -> SubmitOutcome {
        let Some(raw) = self.view.update(|chat| chat.input.clone()) else {
            return SubmitOutcome::Cancelled;
        };
        self.submit(&raw).await
    }

    /// Fill the input with a preset prompt and submit it. A refused
    /// suggestion leaves the typed draft alone.
    pub async fn send_suggestion(&self, text: &str) -> SubmitOutcome {
        let accepted = self.view.update(|chat| {
            if chat.awaiting_reply {
                return false;
            }
            chat.input = text.to_owned();
            true
        });
        match accepted {
            None => SubmitOutcome::Cancelled,
            Some(false) => {
                log::debug!("chat suggestion ignored: reply outstanding");
                SubmitOutcome::Busy
            }
            Some(true) => self.submit_input().await,
        }
    }

    /// Run one chat exchange for `raw`.
    pub async fn submit(&self, raw: &str) -> SubmitOutcome {
        let text = raw.trim();
        if text.is_empty() {
            return SubmitOutcome::Empty;
        }

        let accepted = self.view.update(|chat| {
            if chat.awaiting_reply {
                return false;
            }
            chat.awaiting_reply = true;
            chat.push_user(text);
            true
        });
        match accepted {
            None => return SubmitOutcome::Cancelled,
            Some(false) => {
                log::debug!("chat submit ignored: reply outstanding");
                return SubmitOutcome::Busy;
            }
            Some(true) => {}
        }
        self.view.scroll_to_bottom();
        self.view.update(|chat| chat.input.clear());

        let now = self.ticker.now_ms();
        let Some(placeholder_id) = self.view.update(|chat| chat.insert_placeholder(now)) else {
            return SubmitOutcome::Cancelled;
        };
        self.view.scroll_to_bottom();

        log::debug!("chat submit: {} chars", text.chars().count());
        let result = self.transport.send(text).await;

        let removed = self.view.update(|chat| {
            chat.awaiting_reply = false;
            chat.remove_placeholder(&placeholder_id)
        });
        match removed {
            None => return SubmitOutcome::Cancelled,
            Some(false) => log::warn!("typing placeholder {placeholder_id} already gone"),
            Some(true) => {}
        }

        match result {
            Ok(ChatReply { reply, source }) => {
                let Some(message_id) = self.view.update(|chat| chat.push_bot_pending(&reply, source)) else {
                    return SubmitOutcome::Cancelled;
                };
                match self.reveal(&message_id).await {
                    RevealOutcome::Complete => SubmitOutcome::Replied { message_id },
                    RevealOutcome::Cancelled => SubmitOutcome::Cancelled,
                }
            }
            Err(err) => {
                log::warn!("chat request failed: {err}");
                let fallback = self.config.fallback_reply.as_str();
                let Some(message_id) = self.view.update(|chat| chat.push_bot_instant(fallback)) else {
                    return SubmitOutcome::Cancelled;
                };
                self.view.scroll_to_bottom();
                SubmitOutcome::Failed { message_id }
            }
        }
    }

    /// Reveal bot message `id` one char per tick, then apply formatting.
    pub async fn reveal(&self, id: &str) -> RevealOutcome {
        loop {
            if self.cancel.is_cancelled() {
                return RevealOutcome::Cancelled;
            }
            match self.view.update(|chat| chat.reveal_next(id)) {
                None => return RevealOutcome::Cancelled,
                Some(RevealStep::Advanced) => {
                    self.ticker.sleep(self.config.reveal_interval_ms).await;
                    if !self.cancel.is_cancelled() {
                        // Measured after the tick, once the new char is laid out.
                        self.follow_reveal();
                    }
                }
                Some(RevealStep::Exhausted | RevealStep::Missing) => break,
            }
        }
        if self.cancel.is_cancelled() {
            return RevealOutcome::Cancelled;
        }
        match self.view.update(|chat| chat.finish_reveal(id)) {
            Some(_) => RevealOutcome::Complete,
            None => RevealOutcome::Cancelled,
        }
    }

    fn follow_reveal(&self) {
        let distance = self.view.distance_to_bottom();
        let now = self.ticker.now_ms();
        let threshold = self.config.auto_scroll_threshold_px;
        let cooldown = self.config.manual_scroll_cooldown_ms;
        let follow = self
            .view
            .update(|chat| chat.scroll.allows_auto_scroll(distance, now, threshold, cooldown))
            .unwrap_or(false);
        if follow {
            self.view.scroll_to_bottom();
        }
    }
}
