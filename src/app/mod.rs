//! Binary-local application orchestration helpers.
//!
//! `main.rs` only parses arguments; wiring of the terminal renderer, stdin,
//! and logging lives here.

pub(crate) mod entry;
pub(crate) mod logging;
