//! Card content and bordered-box drawing.

use crate::partition::Partition;
use crate::tui::settings;
use crate::tui::text::{blank_controls, Span, SpanStyle, StyledLine};
use crossterm::style::Color;

/// Raw (unboxed) lines for one group plus its border color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardContent {
    pub lines: Vec<StyledLine>,
    pub color: Color,
}

/// A fully drawn box. Every line has the same visible width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    lines: Vec<StyledLine>,
    width: usize,
}

impl Card {
    pub fn lines(&self) -> &[StyledLine] {
        &self.lines
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }
}

/// How text sits inside a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

/// Geometry and color for [`draw_box`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxSpec {
    /// Total width including both border columns.
    pub width: usize,
    pub padding_x: usize,
    pub padding_top: usize,
    pub padding_bottom: usize,
    pub border: Color,
    pub align: Align,
}

impl BoxSpec {
    /// Columns available for text between the paddings.
    pub fn inner_width(&self) -> usize {
        self.width.saturating_sub(2 + 2 * self.padding_x)
    }
}

/// Columns a box adds around its text (borders plus horizontal padding).
pub fn box_overhead(padding_x: usize) -> usize {
    2 + 2 * padding_x
}

/// Label line, blank separator, then one line per name.
pub fn card_contents(partition: &Partition) -> Vec<CardContent> {
    partition
        .groups()
        .iter()
        .enumerate()
        .map(|(idx, group)| {
            let color = settings::card_color(idx);
            let mut lines = Vec::with_capacity(group.len() + 2);
            lines.push(StyledLine::from(Span::styled(
                settings::group_label(idx),
                SpanStyle::fg(color).bold(),
            )));
            lines.push(StyledLine::new());
            lines.extend(group.iter().map(|name| {
                StyledLine::from(Span::styled(
                    blank_controls(name),
                    SpanStyle::fg(settings::COLOR_NAME).bold(),
                ))
            }));
            CardContent { lines, color }
        })
        .collect()
}

/// Pad every card with trailing blank lines to the tallest card; returns that height.
pub fn equalize_heights(cards: &mut [CardContent]) -> usize {
    let height = cards.iter().map(|c| c.lines.len()).max().unwrap_or(0);
    for card in cards.iter_mut() {
        card.lines.resize(height, StyledLine::new());
    }
    height
}

/// Widest visible content line across all cards.
pub fn max_content_width(cards: &[CardContent]) -> usize {
    cards
        .iter()
        .flat_map(|c| c.lines.iter())
        .map(StyledLine::width)
        .max()
        .unwrap_or(0)
}

/// Uniform outer width for group cards.
pub fn card_width(max_content: usize) -> usize {
    settings::MIN_CARD_WIDTH.max(max_content + box_overhead(settings::CARD_PADDING_X))
}

/// Box spec shared by all group cards of one rendering.
pub fn card_spec(width: usize, border: Color) -> BoxSpec {
    BoxSpec {
        width,
        padding_x: settings::CARD_PADDING_X,
        padding_top: 0,
        padding_bottom: settings::CARD_PADDING_BOTTOM,
        border,
        align: Align::Left,
    }
}

/// Wrap `content` in a rounded border.
///
/// Lines wider than the inner width are left as-is; callers size the box
/// from the content so this does not happen in practice.
pub fn draw_box(content: &[StyledLine], spec: BoxSpec) -> Card {
    let border = SpanStyle::fg(spec.border);
    let inner = spec.inner_width();
    let span_width = spec.width.saturating_sub(2);

    let edge = |left: char, right: char| {
        let mut line = StyledLine::new();
        let mut text = String::with_capacity(spec.width * 3);
        text.push(left);
        text.extend(std::iter::repeat(settings::BOX_HORIZONTAL).take(span_width));
        text.push(right);
        line.push(Span::styled(text, border));
        line
    };
    let framed = |body: StyledLine| {
        let mut line = StyledLine::new();
        line.push(Span::styled(settings::BOX_VERTICAL.to_string(), border));
        line.append(&body);
        line.push(Span::styled(settings::BOX_VERTICAL.to_string(), border));
        line
    };
    let blank_row = || {
        let mut body = StyledLine::new();
        body.push_spaces(span_width);
        framed(body)
    };

    let mut lines = Vec::with_capacity(content.len() + spec.padding_top + spec.padding_bottom + 2);
    lines.push(edge(settings::BOX_TOP_LEFT, settings::BOX_TOP_RIGHT));
    lines.extend((0..spec.padding_top).map(|_| blank_row()));
    for text in content {
        let lead = match spec.align {
            Align::Left => 0,
            Align::Center => inner.saturating_sub(text.width()) / 2,
        };
        let mut body = StyledLine::new();
        body.push_spaces(spec.padding_x + lead);
        body.append(text);
        lines.push(framed(body.padded(span_width)));
    }
    lines.extend((0..spec.padding_bottom).map(|_| blank_row()));
    lines.push(edge(settings::BOX_BOTTOM_LEFT, settings::BOX_BOTTOM_RIGHT));

    Card {
        lines,
        width: spec.width,
    }
}
