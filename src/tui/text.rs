//! Styled text primitives shared by terminal rendering.
//!
//! Layout works on logical text only. Styling rides along on each span and is
//! turned into escape sequences in [`StyledLine::paint`], after every width
//! decision has been made, so colors never disturb padding.

use crossterm::style::{style, Color, Stylize};
use std::borrow::Cow;
use std::fmt::Write as _;
use unicode_width::UnicodeWidthStr;

/// Display attributes for one span of text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpanStyle {
    /// Foreground color, or the terminal default when `None`.
    pub fg: Option<Color>,
    /// Bold attribute flag.
    pub bold: bool,
}

impl SpanStyle {
    pub fn fg(color: Color) -> Self {
        Self {
            fg: Some(color),
            bold: false,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

/// A run of text sharing one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: SpanStyle,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: SpanStyle::default(),
        }
    }

    pub fn styled(text: impl Into<String>, style: SpanStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// One output line made of styled spans.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledLine {
    spans: Vec<Span>,
}

impl StyledLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_span(span: Span) -> Self {
        Self { spans: vec![span] }
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Append a span; empty text is dropped.
    pub fn push(&mut self, span: Span) {
        if !span.text.is_empty() {
            self.spans.push(span);
        }
    }

    /// Append blank columns.
    pub fn push_spaces(&mut self, count: usize) {
        if count > 0 {
            self.push(Span::plain(" ".repeat(count)));
        }
    }

    /// Append every span of `other`.
    pub fn append(&mut self, other: &StyledLine) {
        self.spans.extend(other.spans.iter().cloned());
    }

    /// Visible width in terminal columns.
    pub fn width(&self) -> usize {
        self.spans.iter().map(|s| visible_width(&s.text)).sum()
    }

    /// Logical text with no styling.
    pub fn plain(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    /// Right-pad with spaces up to `width` columns.
    pub fn padded(mut self, width: usize) -> Self {
        let used = self.width();
        self.push_spaces(width.saturating_sub(used));
        self
    }

    /// Render for the terminal; with `color` off this equals [`Self::plain`].
    pub fn paint(&self, color: bool) -> String {
        if !color {
            return self.plain();
        }
        let mut out = String::new();
        for span in &self.spans {
            if span.style == SpanStyle::default() {
                out.push_str(&span.text);
                continue;
            }
            let mut styled = style(span.text.as_str());
            if let Some(fg) = span.style.fg {
                styled = styled.with(fg);
            }
            if span.style.bold {
                styled = styled.bold();
            }
            let _ = write!(out, "{styled}");
        }
        out
    }
}

impl From<Span> for StyledLine {
    fn from(span: Span) -> Self {
        Self::from_span(span)
    }
}

/// Count visible terminal columns (wide glyphs count double).
pub fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Replace control characters (tab, ESC, newline, ...) with spaces so the
/// text occupies exactly the columns `visible_width` reports.
pub fn blank_controls(s: &str) -> Cow<'_, str> {
    if s.chars().any(char::is_control) {
        Cow::Owned(
            s.chars()
                .map(|c| if c.is_control() { ' ' } else { c })
                .collect(),
        )
    } else {
        Cow::Borrowed(s)
    }
}

/// Linear interpolation between two RGB endpoints; `t` is clamped to `[0, 1]`.
pub fn lerp_rgb(start: (u8, u8, u8), end: (u8, u8, u8), t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| -> u8 { (a as f32 + (b as f32 - a as f32) * t).round() as u8 };
    Color::Rgb {
        r: mix(start.0, end.0),
        g: mix(start.1, end.1),
        b: mix(start.2, end.2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_width_counts_columns() {
        assert_eq!(visible_width("abc"), 3);
        assert_eq!(visible_width("Zoë"), 3);
        assert_eq!(visible_width("日本"), 4);
    }

    #[test]
    fn blank_controls_replaces_tabs_and_escapes() {
        assert_eq!(blank_controls("Ann\tLee"), "Ann Lee");
        assert_eq!(blank_controls("\u{1b}[31mX"), " [31mX");
        assert_eq!(visible_width(&blank_controls("\u{1b}[31mX")), 6);
        assert!(matches!(blank_controls("Zoë"), Cow::Borrowed("Zoë")));
    }

    #[test]
    fn width_ignores_styling() {
        let mut line = StyledLine::new();
        line.push(Span::styled("G1", SpanStyle::fg(Color::Green).bold()));
        line.push_spaces(3);
        assert_eq!(line.width(), 5);
        assert!(line.paint(true).len() > line.plain().len());
        assert_eq!(line.paint(false), "G1   ");
    }

    #[test]
    fn padded_fills_to_width() {
        let line = StyledLine::from(Span::plain("ab")).padded(6);
        assert_eq!(line.plain(), "ab    ");
        let wide = StyledLine::from(Span::plain("abcdef")).padded(3);
        assert_eq!(wide.plain(), "abcdef");
    }

    #[test]
    fn push_drops_empty_spans() {
        let mut line = StyledLine::new();
        line.push(Span::plain(""));
        line.push_spaces(0);
        assert!(line.spans().is_empty());
    }

    #[test]
    fn paint_emits_escape_codes_for_styled_spans() {
        let line = StyledLine::from(Span::styled("x", SpanStyle::fg(Color::Red)));
        let painted = line.paint(true);
        assert!(painted.contains('\u{1b}'));
        assert!(painted.contains('x'));
    }

    #[test]
    fn lerp_rgb_hits_endpoints() {
        assert_eq!(
            lerp_rgb((0, 0, 0), (200, 100, 50), 0.0),
            Color::Rgb { r: 0, g: 0, b: 0 }
        );
        assert_eq!(
            lerp_rgb((0, 0, 0), (200, 100, 50), 1.0),
            Color::Rgb {
                r: 200,
                g: 100,
                b: 50
            }
        );
        assert_eq!(
            lerp_rgb((0, 0, 0), (200, 100, 50), 0.5),
            Color::Rgb {
                r: 100,
                g: 50,
                b: 25
            }
        );
    }
}
