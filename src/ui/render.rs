//! Rendering contracts and default terminal renderer bindings.
//!
//! `RenderSink` is the UI contract consumed by the prompt loops and the app
//! flow. Tests substitute a recording sink so no terminal is required.

use crate::partition::Partition;
use std::io;

pub use crate::tui::progress::ProgressHandle;
pub use crate::tui::prompt::Question;
pub use crate::tui::renderer::Renderer;

/// Injectable rendering interface used by orchestration code.
pub trait RenderSink: Send + Sync {
    /// Render the title banner.
    fn title(&self) -> io::Result<()>;
    /// Render the chrome for one question.
    fn prompt(&self, question: Question) -> io::Result<()>;
    /// Render a rejected-answer message.
    fn validation(&self, msg: &str);
    /// Start a spinner for a cosmetic stage.
    fn progress(&self, label: &str) -> ProgressHandle;
    /// Render a completed-stage line.
    fn success(&self, msg: &str);
    /// Render the summary block and card grid.
    fn groups(&self, partition: &Partition, terminal_width: usize) -> io::Result<()>;
    /// Render a fatal error line.
    fn error(&self, msg: &str);
}

impl RenderSink for Renderer {
    fn title(&self) -> io::Result<()> {
        self.title()
    }

    fn prompt(&self, question: Question) -> io::Result<()> {
        self.prompt(question)
    }

    fn validation(&self, msg: &str) {
        self.validation(msg);
    }

    fn progress(&self, label: &str) -> ProgressHandle {
        self.progress(label)
    }

    fn success(&self, msg: &str) {
        self.success(msg);
    }

    fn groups(&self, partition: &Partition, terminal_width: usize) -> io::Result<()> {
        self.groups(partition, terminal_width)
    }

    fn error(&self, msg: &str) {
        self.error(msg);
    }
}
