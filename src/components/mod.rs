//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and interaction surfaces while reading/writing
//! shared state from Leptos context providers.

pub mod auth_prompt;
pub mod chat_panel;
pub mod image_slider;
pub mod nav_bar;
pub mod password_field;
pub mod reveal_on_scroll;
pub mod status_line;
pub mod theme_toggle;
