//! Terminal-facing UI facade.
//!
//! Orchestration layers depend on `ui::render::RenderSink` instead of the
//! concrete renderer in `tui`.

pub mod render;
