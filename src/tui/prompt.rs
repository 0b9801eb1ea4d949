//! Prompt chrome for the two interactive questions.

use crate::tui::settings;
use crossterm::style::{Print, PrintStyledContent, Stylize};
use crossterm::QueueableCommand;
use std::io::{self, Write};

/// One of the questions asked before shuffling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Question {
    /// Comma-separated names.
    Names,
    /// Number of groups, with the suggestion used for a blank answer.
    GroupCount { default: usize },
}

/// Build the visible prompt string without styling.
pub fn prompt_text(question: Question) -> String {
    let mut out = format!("{}{}", settings::PROMPT_PREFIX, settings::PROMPT_SPACER);
    match question {
        Question::Names => {
            out.push_str(settings::PROMPT_NAMES);
            out.push_str(settings::PROMPT_NAMES_HINT);
            out.push(':');
        }
        Question::GroupCount { default } => {
            out.push_str(settings::PROMPT_GROUPS);
            out.push_str(&format!(" ({default})"));
        }
    }
    out.push_str(settings::PROMPT_SPACER);
    out
}

/// Queue the prompt with color/styling.
pub(crate) fn write_prompt<W>(out: &mut W, color: bool, question: Question) -> io::Result<()>
where
    W: Write + QueueableCommand,
{
    if !color {
        out.queue(Print(prompt_text(question)))?;
        return Ok(());
    }

    out.queue(PrintStyledContent(
        settings::PROMPT_PREFIX.with(settings::COLOR_PROMPT_PREFIX),
    ))?;
    out.queue(Print(settings::PROMPT_SPACER))?;
    match question {
        Question::Names => {
            out.queue(PrintStyledContent(
                settings::PROMPT_NAMES.with(settings::COLOR_PROMPT_TEXT),
            ))?;
            out.queue(PrintStyledContent(
                settings::PROMPT_NAMES_HINT.with(settings::COLOR_PROMPT_HINT),
            ))?;
            out.queue(PrintStyledContent(":".with(settings::COLOR_PROMPT_TEXT)))?;
        }
        Question::GroupCount { default } => {
            out.queue(PrintStyledContent(
                settings::PROMPT_GROUPS.with(settings::COLOR_PROMPT_TEXT),
            ))?;
            out.queue(PrintStyledContent(
                format!(" ({default})").with(settings::COLOR_PROMPT_DEFAULT),
            ))?;
        }
    }
    out.queue(Print(settings::PROMPT_SPACER))?;
    Ok(())
}
