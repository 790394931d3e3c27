//! Advisor conversation log.
//!
//! DESIGN
//! ======
//! The log is append-only apart from typing placeholders, which are removed
//! by id exactly once when their request settles. Bot replies arrive whole
//! but are revealed one `char` at a time; `formatted` is derived from the
//! untouched `text` once, when the reveal completes.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use super::scroll::ScrollState;
use crate::chat::markup;

/// State for the advisor chat panel.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub entries: Vec<ChatEntry>,
    /// Current value of the message input.
    pub input: String,
    /// Set while a chat request is outstanding; new submissions are refused.
    pub awaiting_reply: bool,
    pub scroll: ScrollState,
    placeholder_seq: u64,
}

/// A row in the conversation log.
#[derive(Clone, Debug, PartialEq)]
pub enum ChatEntry {
    Message(ChatMessage),
    Typing(TypingPlaceholder),
}

/// Who authored a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Bot,
}

impl ChatRole {
    /// CSS modifier for the message row.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Bot => "bot",
        }
    }
}

/// Reveal progress of a message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenderState {
    #[default]
    Pending,
    Revealing,
    Complete,
}

/// A single chat message.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    /// Full message text. Never modified after creation.
    pub text: String,
    /// Portion of `text` rendered so far.
    pub revealed: String,
    /// Formatted HTML, present once a bot reply has been fully revealed.
    pub formatted: Option<String>,
    pub render_state: RenderState,
    /// Where the reply came from (`ai`, `dataset`), when the server says.
    pub source: Option<String>,
    reveal_cursor: usize,
}

impl ChatEntry {
    /// Stable row key: the message id or the placeholder id.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Message(message) => &message.id,
            Self::Typing(placeholder) => &placeholder.id,
        }
    }
}

/// Ephemeral "typing" row standing in for an in-flight request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypingPlaceholder {
    pub id: String,
}

/// Result of advancing a reveal by one step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealStep {
    /// One more character is now visible.
    Advanced,
    /// Nothing left to reveal.
    Exhausted,
    /// No revealable message with that id.
    Missing,
}

/// What a message row should render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageBody<'a> {
    Text(&'a str),
    Html(&'a str),
}

impl ChatMessage {
    fn complete(role: ChatRole, text: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role,
            revealed: text.clone(),
            reveal_cursor: text.len(),
            text,
            formatted: None,
            render_state: RenderState::Complete,
            source: None,
        }
    }

    /// Changes whenever `body()` would render something different.
    #[must_use]
    pub fn render_version(&self) -> (RenderState, usize) {
        (self.render_state, self.revealed.len())
    }

    /// Body to render for the current reveal state.
    #[must_use]
    pub fn body(&self) -> MessageBody<'_> {
        match &self.formatted {
            Some(html) => MessageBody::Html(html),
            None => MessageBody::Text(&self.revealed),
        }
    }
}

impl ChatState {
    /// Append a user message, fully rendered.
    pub fn push_user(&mut self, text: &str) -> String {
        self.push(ChatMessage::complete(ChatRole::User, text.to_owned()))
    }

    /// Append a bot message rendered instantly with no reveal or formatting.
    pub fn push_bot_instant(&mut self, text: &str) -> String {
        self.push(ChatMessage::complete(ChatRole::Bot, text.to_owned()))
    }

    /// Append a bot reply that still has to be revealed.
    pub fn push_bot_pending(&mut self, text: &str, source: Option<String>) -> String {
        self.push(ChatMessage {
            id: uuid::Uuid::new_v4().to_string(),
            role: ChatRole::Bot,
            text: text.to_owned(),
            revealed: String::new(),
            formatted: None,
            render_state: RenderState::Pending,
            source,
            reveal_cursor: 0,
        })
    }

    fn push(&mut self, message: ChatMessage) -> String {
        let id = message.id.clone();
        self.entries.push(ChatEntry::Message(message));
        id
    }

    /// Insert a typing placeholder and return its id.
    ///
    /// Ids combine the current time with a per-log sequence so two
    /// placeholders created in the same millisecond still differ.
    pub fn insert_placeholder(&mut self, now_ms: f64) -> String {
        self.placeholder_seq += 1;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let id = format!("typing-{}-{}", now_ms.max(0.0) as u64, self.placeholder_seq);
        self.entries.push(ChatEntry::Typing(TypingPlaceholder { id: id.clone() }));
        id
    }

    /// Remove the placeholder with `id`. Returns `false` if it was not present.
    pub fn remove_placeholder(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries
            .retain(|entry| !matches!(entry, ChatEntry::Typing(placeholder) if placeholder.id == id));
        self.entries.len() != before
    }

    /// Number of live typing placeholders.
    #[must_use]
    pub fn placeholder_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| matches!(entry, ChatEntry::Typing(_)))
            .count()
    }

    /// Iterate the messages, skipping placeholders.
    pub fn messages(&self) -> impl Iterator<Item = &ChatMessage> {
        self.entries.iter().filter_map(|entry| match entry {
            ChatEntry::Message(message) => Some(message),
            ChatEntry::Typing(_) => None,
        })
    }

    #[must_use]
    pub fn message(&self, id: &str) -> Option<&ChatMessage> {
        self.messages().find(|message| message.id == id)
    }

    fn message_mut(&mut self, id: &str) -> Option<&mut ChatMessage> {
        self.entries.iter_mut().find_map(|entry| match entry {
            ChatEntry::Message(message) if message.id == id => Some(message),
            _ => None,
        })
    }

    /// Reveal the next character of message `id`.
    pub fn reveal_next(&mut self, id: &str) -> RevealStep {
        let Some(message) = self.message_mut(id) else {
            return RevealStep::Missing;
        };
        if message.render_state == RenderState::Complete {
            return RevealStep::Exhausted;
        }
        let Some(ch) = message.text[message.reveal_cursor..].chars().next() else {
            return RevealStep::Exhausted;
        };
        message.render_state = RenderState::Revealing;
        message.revealed.push(ch);
        message.reveal_cursor += ch.len_utf8();
        RevealStep::Advanced
    }

    /// Mark message `id` complete and apply reply formatting.
    ///
    /// Formatting reads the original `text`, and a message that is already
    /// complete is left untouched, so a reply is formatted at most once.
    /// Returns `true` if this call completed the message.
    pub fn finish_reveal(&mut self, id: &str) -> bool {
        let Some(message) = self.message_mut(id) else {
            return false;
        };
        if message.render_state == RenderState::Complete {
            return false;
        }
        message.revealed.clone_from(&message.text);
        message.reveal_cursor = message.text.len();
        message.formatted = Some(markup::format_reply(&message.text));
        message.render_state = RenderState::Complete;
        true
    }
}
