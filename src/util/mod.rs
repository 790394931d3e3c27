//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

pub mod auth_prompt;
pub mod nav;
pub mod scroll_reveal;
pub mod theme;
pub mod validate;
