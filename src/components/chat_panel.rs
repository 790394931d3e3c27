//! Advisor chat panel: message log, typing indicator, input, and suggestions.
//!
//! SYSTEM CONTEXT
//! ==============
//! The panel owns its conversation for the lifetime of the page view and
//! hands each exchange to `ChatPipeline`. Tearing the panel down trips the
//! pipeline's cancel flag so no reveal keeps writing into a dead log.

#[cfg(test)]
#[path = "chat_panel_test.rs"]
mod chat_panel_test;

use leptos::prelude::*;

use crate::chat::browser::{PanelView, now_ms};
use crate::chat::pipeline::CancelFlag;
use crate::state::chat::{ChatEntry, ChatMessage, ChatState, MessageBody};
use crate::state::ui::UiState;

/// Preset prompts offered under the input.
pub const SUGGESTIONS: [&str; 4] = [
    "What careers match my Python skills?",
    "How do I become a data scientist?",
    "Which skills are in demand right now?",
    "Suggest careers for a creative person",
];

/// Chat panel showing the conversation and an input for new messages.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let chat = RwSignal::new(ChatState::default());
    let messages_ref = NodeRef::<leptos::html::Div>::new();
    let panel = PanelView { chat, viewport: messages_ref };

    let cancel = CancelFlag::default();
    {
        let cancel = cancel.clone();
        on_cleanup(move || cancel.cancel());
    }

    // `None` submits the typed input; `Some` submits a preset suggestion.
    let start_exchange = move |suggestion: Option<&'static str>| {
        #[cfg(feature = "hydrate")]
        {
            use crate::chat::browser::{BrowserTicker, HttpTransport};
            use crate::chat::pipeline::ChatPipeline;
            use crate::config::ChatConfig;

            let pipeline =
                ChatPipeline::new(HttpTransport, BrowserTicker, panel, ChatConfig::default()).with_cancel(cancel.clone());
            leptos::task::spawn_local(async move {
                let outcome = match suggestion {
                    Some(text) => pipeline.send_suggestion(text).await,
                    None => pipeline.submit_input().await,
                };
                log::debug!("chat exchange finished: {outcome:?}");
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (suggestion, &cancel, panel);
        }
    };

    let on_submit = {
        let start_exchange = start_exchange.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            start_exchange(None);
        }
    };

    let on_viewport_click = move |_| {
        if ui.with_untracked(|u| u.guest) {
            ui.update(|u| {
                u.nudge_login_prompt();
            });
        }
    };

    let on_wheel = move |_| {
        chat.update(|c| c.scroll.note_manual_scroll(now_ms()));
    };

    let awaiting = move || chat.with(|c| c.awaiting_reply);

    view! {
        <div class="chat-container" on:click=on_viewport_click>
            <div id="chat-messages" class="chat-messages" node_ref=messages_ref on:wheel=on_wheel>
                <Show when=move || chat.with(|c| c.entries.is_empty())>
                    <div class="chat-messages__empty">"Tell me your skills and I'll suggest careers."</div>
                </Show>
                <For
                    each=move || chat.with(entry_keys)
                    key=|(id, _)| id.clone()
                    children=move |(id, typing)| render_entry(chat, id, typing)
                />
            </div>

            <form id="chat-form" class="chat-form" on:submit=on_submit>
                <input
                    id="message-input"
                    class="chat-form__input"
                    type="text"
                    placeholder="Ask about careers..."
                    autocomplete="off"
                    disabled=awaiting
                    prop:value=move || chat.with(|c| c.input.clone())
                    on:input=move |ev| chat.update(|c| c.input = event_target_value(&ev))
                />
                <button class="btn btn--primary chat-form__send" type="submit" disabled=awaiting>
                    "Send"
                </button>
            </form>

            <div class="chat-suggestions">
                {SUGGESTIONS
                    .iter()
                    .map(|&text| {
                        let start_exchange = start_exchange.clone();
                        view! {
                            <button
                                type="button"
                                class="suggestion-btn"
                                data-message=text
                                disabled=awaiting
                                on:click=move |_| start_exchange(Some(text))
                            >
                                {text}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

/// Row keys in display order; `true` marks a typing placeholder.
pub fn entry_keys(state: &ChatState) -> Vec<(String, bool)> {
    state
        .entries
        .iter()
        .map(|entry| (entry.id().to_owned(), matches!(entry, ChatEntry::Typing(_))))
        .collect()
}

fn render_entry(chat: RwSignal<ChatState>, id: String, typing: bool) -> AnyView {
    if typing {
        return view! {
            <div id=id class="message bot-message typing-indicator">
                <div class="typing-dots">
                    <span>"."</span>
                    <span>"."</span>
                    <span>"."</span>
                </div>
            </div>
        }
            .into_any();
    }

    // Rebuild this row only when its own body changes, not on input,
    // scroll, or other rows' reveals.
    let version = {
        let id = id.clone();
        Memo::new(move |_| chat.with(|c| c.message(&id).map(ChatMessage::render_version)))
    };
    (move || {
        version.track();
        chat.with_untracked(|c| c.message(&id).map(render_message))
    })
    .into_any()
}

fn render_message(message: &ChatMessage) -> AnyView {
    let class = format!("message {}-message", message.role.as_str());
    let content = match message.body() {
        MessageBody::Html(html) => view! {
            <div class="message-content" style="white-space: pre-wrap" inner_html=html.to_owned()></div>
        }
            .into_any(),
        MessageBody::Text(text) => view! {
            <div class="message-content" style="white-space: pre-wrap">{text.to_owned()}</div>
        }
            .into_any(),
    };
    let source = message
        .source
        .clone()
        .map(|source| view! { <span class="message-source">{source}</span> });

    view! {
        <div class=class>
            {content}
            {source}
        </div>
    }
        .into_any()
}
