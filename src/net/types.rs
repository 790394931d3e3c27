//! Request and response bodies for the Career Go endpoints.
//!
//! DESIGN
//! ======
//! Response types default every optional or list field so partially filled
//! server payloads still decode; only the fields the UI cannot do without
//! (`reply`, `career`) are required.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// `POST /api/chat` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    pub message: String,
}

/// `POST /api/chat` success payload.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ChatReply {
    pub reply: String,
    /// `ai` or `dataset` on the reference server; may be absent or null.
    #[serde(default)]
    pub source: Option<String>,
}

/// `POST /api/login` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub gender: String,
}

/// `POST /api/signup` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub gender: String,
}

/// `POST /api/forgot-email` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ForgotRequest {
    pub email: String,
}

/// `POST /api/reset` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResetRequest {
    pub email: String,
    pub code: String,
    pub new_password: String,
}

/// `{message}` payload shared by the auth endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

/// `POST /api/forgot-email` payload. Servers without mail delivery echo the code.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ForgotResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub reset_code: Option<String>,
}

/// `POST /api/suggest_careers` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SuggestRequest {
    pub skills: Vec<String>,
}

/// `POST /api/suggest_careers` payload.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SuggestResponse {
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
}

/// One ranked career suggestion.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Recommendation {
    pub career: String,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub top_skills: Vec<String>,
    #[serde(default = "default_learn_link")]
    pub learn_link: String,
}

fn default_learn_link() -> String {
    "#".to_owned()
}

impl Recommendation {
    /// Score as shown on the card; whole numbers drop the decimal point.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
    pub fn score_label(&self) -> String {
        if self.score.fract() == 0.0 && self.score.abs() < 1e15 {
            format!("{}", self.score as i64)
        } else {
            format!("{:.2}", self.score)
        }
    }

    /// Comma-separated top skills.
    #[must_use]
    pub fn top_skills_label(&self) -> String {
        self.top_skills.join(", ")
    }
}
