//! # careergo
//!
//! Leptos + WASM frontend for the Career Go career advisor.
//!
//! This crate contains pages, components, application state, network types,
//! and the chat pipeline that drives the advisor conversation: user input is
//! posted to the chat endpoint behind a typing placeholder and the reply is
//! revealed character by character before light inline formatting applies.

pub mod app;
pub mod chat;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs console logging and hydrates the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
