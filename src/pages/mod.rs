//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (validation, requests,
//! redirects) and delegates rendering details to `components`.

pub mod chat;
pub mod dashboard;
pub mod forgot;
mod form;
pub mod home;
pub mod login;
pub mod signup;
