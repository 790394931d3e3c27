//! Advisor chat: submission pipeline and reply formatting.
//!
//! SYSTEM CONTEXT
//! ==============
//! `pipeline` sequences a single chat exchange against the chat endpoint and
//! drives the typewriter reveal; `markup` turns a finished reply into the
//! lightly formatted HTML shown once the reveal completes; `browser` plugs
//! the pipeline into gloo and the panel's DOM.

pub mod browser;
pub mod markup;
pub mod pipeline;
