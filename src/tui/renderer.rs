//! Terminal output renderer for the banner, prompts, stages, and grid.

use crate::grid;
use crate::partition::Partition;
use crate::tui::banner::title_lines;
use crate::tui::progress::{start_progress, ProgressHandle};
use crate::tui::prompt::{write_prompt, Question};
use crate::tui::settings;
use crossterm::cursor::MoveTo;
use crossterm::style::Stylize;
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::QueueableCommand;
use std::io::{self, IsTerminal, Write};

/// Writes everything the user sees. Results go to stdout, chrome to stderr.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Enable color only when stdout is an interactive terminal.
    pub fn detect() -> Self {
        Self::new(io::stdout().is_terminal())
    }

    pub fn color(&self) -> bool {
        self.color
    }

    /// Clear the screen (terminals only) and print the title banner.
    pub fn title(&self) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        if stdout.is_terminal() {
            stdout.queue(Clear(ClearType::All))?;
            stdout.queue(MoveTo(0, 0))?;
        }
        for line in title_lines() {
            writeln!(stdout, "{}", line.paint(self.color))?;
        }
        stdout.flush()
    }

    pub fn prompt(&self, question: Question) -> io::Result<()> {
        let mut stderr = io::stderr().lock();
        write_prompt(&mut stderr, self.color, question)?;
        stderr.flush()
    }

    /// Explain why the last answer was rejected.
    pub fn validation(&self, msg: &str) {
        if self.color {
            eprintln!(
                "{} {}",
                settings::GLYPH_VALIDATION.with(settings::COLOR_VALIDATION),
                msg.with(settings::COLOR_VALIDATION)
            );
        } else {
            eprintln!("{} {msg}", settings::GLYPH_VALIDATION);
        }
    }

    pub fn progress(&self, label: &str) -> ProgressHandle {
        start_progress(label, self.color)
    }

    pub fn success(&self, msg: &str) {
        if self.color {
            eprintln!(
                "{} {msg}",
                settings::GLYPH_SUCCESS.with(settings::COLOR_SUCCESS).bold()
            );
        } else {
            eprintln!("{} {msg}", settings::GLYPH_SUCCESS);
        }
    }

    /// Print the summary block and card grid to stdout.
    pub fn groups(&self, partition: &Partition, terminal_width: usize) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        grid::render_to(&mut stdout, partition, terminal_width, self.color)
    }

    pub fn error(&self, msg: &str) {
        if self.color {
            eprintln!(
                "{} {msg}",
                settings::LABEL_ERROR.with(settings::COLOR_ERROR).bold()
            );
        } else {
            eprintln!("{} {msg}", settings::LABEL_ERROR);
        }
    }
}

/// Columns available for the grid on the current terminal.
pub fn layout_width() -> usize {
    let columns = match terminal::size() {
        Ok((cols, _)) => Some(usize::from(cols)),
        Err(e) => {
            tracing::warn!(error = %e, "terminal size unavailable; using fallback width");
            None
        }
    };
    effective_layout_width(columns)
}

/// Clamp a reported column count; missing or zero falls back to the default.
pub fn effective_layout_width(columns: Option<usize>) -> usize {
    columns
        .filter(|&cols| cols > 0)
        .unwrap_or(settings::FALLBACK_TERMINAL_WIDTH)
        .min(settings::MAX_LAYOUT_WIDTH)
}
