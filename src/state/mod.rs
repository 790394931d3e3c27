//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`chat`, `ui`, `slider`) so individual components
//! can depend on small focused models. Everything here is plain data so it can
//! be exercised natively without a browser.

pub mod chat;
pub mod scroll;
pub mod slider;
pub mod ui;
