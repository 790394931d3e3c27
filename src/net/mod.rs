//! Networking modules for the Career Go REST endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `types` defines the request and response
//! bodies, and `error` classifies the ways a call can fail.

pub mod api;
pub mod error;
pub mod types;
