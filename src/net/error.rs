//! Request failure classification.
//!
//! Every failure is terminal for the attempt that produced it; callers render
//! a message and leave the UI interactive.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Why an API call did not produce a usable response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never completed (offline, CORS, aborted).
    #[error("network error: {0}")]
    Transport(String),
    /// The server answered with a non-success status and a `{message}` body.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    /// The server answered with a non-success status and no usable message.
    #[error("request failed: {0}")]
    Status(u16),
    /// The response body did not match the expected shape.
    #[error("invalid response: {0}")]
    Decode(String),
    /// HTTP is only available in the browser build.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Message the server attached to a rejection, if any.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Text for a form status line: the server's own message when it sent
    /// one, otherwise `fallback`.
    #[must_use]
    pub fn status_text<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.server_message().unwrap_or(fallback)
    }
}
