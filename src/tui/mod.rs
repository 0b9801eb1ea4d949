//! Terminal user-interface building blocks.
//!
//! Styled text, prompt chrome, the title banner, spinner stages, and the
//! renderer that writes them. Layout math in `grid` depends only on `text`
//! and `settings`, so it stays testable without a terminal.

mod banner;
pub mod progress;
pub mod prompt;
pub mod renderer;
pub mod settings;
pub mod text;

pub use banner::title_lines;
pub use prompt::Question;
pub use renderer::{layout_width, Renderer};
