//! Centralized, hardcoded UI settings for the terminal interface.
//!
//! This is the single place to tweak prompt strings, glyphs, colors, card
//! geometry, and spinner behavior.

use crossterm::style::Color;

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

/// Narrowest a group card may be, borders included.
pub const MIN_CARD_WIDTH: usize = 15;
/// Blank columns between cards placed side by side.
pub const CARD_GAP: usize = 2;
/// Blank columns between a card border and its text.
pub const CARD_PADDING_X: usize = 1;
/// Blank rows below a card's last line, inside the border.
pub const CARD_PADDING_BOTTOM: usize = 1;

pub const SUMMARY_PADDING_X: usize = 3;
pub const SUMMARY_PADDING_Y: usize = 1;

/// Upper bound on the width used for grid layout.
pub const MAX_LAYOUT_WIDTH: usize = 80;
/// Width assumed when the terminal size cannot be queried.
pub const FALLBACK_TERMINAL_WIDTH: usize = 80;

// ---------------------------------------------------------------------------
// Box glyphs (rounded)
// ---------------------------------------------------------------------------

pub const BOX_TOP_LEFT: char = '╭';
pub const BOX_TOP_RIGHT: char = '╮';
pub const BOX_BOTTOM_LEFT: char = '╰';
pub const BOX_BOTTOM_RIGHT: char = '╯';
pub const BOX_HORIZONTAL: char = '─';
pub const BOX_VERTICAL: char = '│';

// ---------------------------------------------------------------------------
// Prompt strings
// ---------------------------------------------------------------------------

pub const PROMPT_PREFIX: &str = "❯";
pub const PROMPT_NAMES: &str = "Enter names";
pub const PROMPT_NAMES_HINT: &str = " (separated by commas)";
pub const PROMPT_GROUPS: &str = "Enter desired amount of groups:";
pub const PROMPT_SPACER: &str = " ";

pub const GLYPH_SUCCESS: &str = "✔";
pub const GLYPH_VALIDATION: &str = ">>";
pub const LABEL_ERROR: &str = "An error occurred:";

pub const SUMMARY_TITLE: &str = "RESULTS";
pub const SUMMARY_SEPARATOR: &str = " • ";
pub const GROUP_LABEL_PREFIX: &str = "G";

// ---------------------------------------------------------------------------
// Spinner / progress
// ---------------------------------------------------------------------------

pub const PROGRESS_CLEAR_LINE: &str = "\r\x1b[2K";
pub const PROGRESS_FRAMES: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
pub const PROGRESS_TICK_MS: u64 = 80;

/// One timed spinner step shown while the program "works".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stage {
    pub label: &'static str,
    pub delay_ms: u64,
}

pub const NAME_STAGES: &[Stage] = &[Stage {
    label: "Processing names...",
    delay_ms: 500,
}];

pub const SHUFFLE_STAGES: &[Stage] = &[
    Stage {
        label: "Initializing shuffle algorithm...",
        delay_ms: 700,
    },
    Stage {
        label: "Randomizing names...",
        delay_ms: 500,
    },
    Stage {
        label: "Balancing groups...",
        delay_ms: 300,
    },
];

pub const SHUFFLE_DONE: &str = "Names shuffled successfully!";

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

/// Border colors cycled by group index.
pub const CARD_PALETTE: [Color; 6] = [
    Color::Green,
    Color::Magenta,
    Color::Blue,
    Color::Red,
    Color::Cyan,
    Color::Yellow,
];

pub const COLOR_NAME: Color = Color::White;
pub const COLOR_SUMMARY_BORDER: Color = Color::DarkYellow;
pub const COLOR_SUMMARY_TITLE: Color = Color::Yellow;
pub const COLOR_SUMMARY_LABEL: Color = Color::White;
pub const COLOR_SUMMARY_VALUE: Color = Color::Cyan;

pub const COLOR_PROMPT_PREFIX: Color = Color::Cyan;
pub const COLOR_PROMPT_TEXT: Color = Color::Cyan;
pub const COLOR_PROMPT_HINT: Color = Color::DarkGrey;
pub const COLOR_PROMPT_DEFAULT: Color = Color::DarkGrey;
pub const COLOR_VALIDATION: Color = Color::Red;
pub const COLOR_SUCCESS: Color = Color::Green;
pub const COLOR_ERROR: Color = Color::Red;

pub const COLOR_PROGRESS_FRAME: Color = Color::Cyan;
pub const COLOR_PROGRESS_LABEL: Color = Color::White;

/// Pastel gradient endpoints for the title banner.
pub const RGB_TITLE_START: (u8, u8, u8) = (116, 235, 213);
pub const RGB_TITLE_END: (u8, u8, u8) = (172, 182, 229);

// ---------------------------------------------------------------------------
// Small helpers
// ---------------------------------------------------------------------------

/// Border color for the card at `index`.
pub fn card_color(index: usize) -> Color {
    CARD_PALETTE[index % CARD_PALETTE.len()]
}

/// Label shown at the top of the card at `index`.
pub fn group_label(index: usize) -> String {
    format!("{GROUP_LABEL_PREFIX}{}", index + 1)
}
