//! REST API helpers for communicating with the Career Go server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native builds: every call fails with
//! `ApiError::Unavailable` since these endpoints are only meaningful in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics. A non-success status is
//! a failure even when the body decodes; the body's `message`, when present,
//! rides along in `ApiError::Rejected` so forms can show it.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "hydrate")]
use serde::{Serialize, de::DeserializeOwned};

use super::error::ApiError;
#[cfg(any(test, feature = "hydrate"))]
use super::types::MessageResponse;
use super::types::{
    ChatReply, ChatRequest, ForgotRequest, ForgotResponse, LoginRequest, Recommendation, ResetRequest, SignupRequest,
};
#[cfg(feature = "hydrate")]
use super::types::{SuggestRequest, SuggestResponse};
#[cfg(feature = "hydrate")]
use crate::config;

/// Classify a non-success response from its status and decoded body.
#[cfg(any(test, feature = "hydrate"))]
fn rejection(status: u16, body: Option<MessageResponse>) -> ApiError {
    match body {
        Some(body) if !body.message.trim().is_empty() => ApiError::Rejected { status, message: body.message },
        _ => ApiError::Status(status),
    }
}

#[cfg(feature = "hydrate")]
fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

#[cfg(feature = "hydrate")]
async fn post_json<B, R>(url: &str, body: &B) -> Result<R, ApiError>
where
    B: Serialize,
    R: DeserializeOwned,
{
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;
    if !resp.ok() {
        let status = resp.status();
        log::debug!("{url} rejected with {status}");
        return Err(rejection(status, resp.json::<MessageResponse>().await.ok()));
    }
    resp.json::<R>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Send a chat message via `POST /api/chat`.
///
/// # Errors
///
/// Returns an error if the request fails, the status is not 2xx, or the
/// body is not a `{reply, source}` object.
pub async fn send_chat(message: &str) -> Result<ChatReply, ApiError> {
    let request = ChatRequest { message: message.to_owned() };
    #[cfg(feature = "hydrate")]
    {
        post_json(config::CHAT_ENDPOINT, &request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Log in via `POST /api/login`, returning the server's message.
///
/// # Errors
///
/// Returns an error if the request fails or the credentials are rejected.
pub async fn login(request: &LoginRequest) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body: MessageResponse = post_json(config::LOGIN_ENDPOINT, request).await?;
        Ok(body.message)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Create an account via `POST /api/signup`, returning the server's message.
///
/// # Errors
///
/// Returns an error if the request fails or the server refuses the account.
pub async fn signup(request: &SignupRequest) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body: MessageResponse = post_json(config::SIGNUP_ENDPOINT, request).await?;
        Ok(body.message)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Request a password reset code via `POST /api/forgot-email`.
///
/// # Errors
///
/// Returns an error if the request fails or the email is unknown.
pub async fn forgot_password(request: &ForgotRequest) -> Result<ForgotResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(config::FORGOT_ENDPOINT, request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Set a new password via `POST /api/reset`, returning the server's message.
///
/// # Errors
///
/// Returns an error if the request fails or the code is rejected.
pub async fn reset_password(request: &ResetRequest) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body: MessageResponse = post_json(config::RESET_ENDPOINT, request).await?;
        Ok(body.message)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Fetch ranked careers for `skills` via `POST /api/suggest_careers`.
///
/// # Errors
///
/// Returns an error if the request fails or the payload is malformed.
pub async fn suggest_careers(skills: Vec<String>) -> Result<Vec<Recommendation>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body: SuggestResponse = post_json(config::SUGGEST_ENDPOINT, &SuggestRequest { skills }).await?;
        Ok(body.recommendations)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = skills;
        Err(ApiError::Unavailable)
    }
}

/// End the session via `POST /api/logout`.
///
/// # Errors
///
/// Returns an error if the request fails or the status is not 2xx. Callers
/// navigate home either way.
pub async fn logout() -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(config::LOGOUT_ENDPOINT)
            .send()
            .await
            .map_err(transport)?;
        if resp.ok() { Ok(()) } else { Err(ApiError::Status(resp.status())) }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}
