//! Responsive grid rendering for a [`Partition`].
//!
//! Each group becomes a bordered card. Cards share one height and one width,
//! are packed greedily into rows that fit the terminal, and are printed line
//! by line beneath a summary block. Every measurement is taken on logical
//! text; color is applied only when lines are painted for output.

pub mod card;
pub mod layout;

use crate::partition::Partition;
use crate::tui::settings;
use crate::tui::text::{Span, SpanStyle, StyledLine};
use card::{
    box_overhead, card_contents, card_spec, card_width, draw_box, equalize_heights,
    max_content_width, Align, BoxSpec, Card,
};
use layout::{cards_per_row, emit_rows};
use std::io::{self, Write};

/// Geometry chosen for one rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    /// Outer width of every group card.
    pub card_width: usize,
    /// Line count of every group card, borders included.
    pub card_height: usize,
    /// Cards placed side by side in each row.
    pub cards_per_row: usize,
}

/// Summary block plus card grid, ready to paint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendering {
    /// Bordered "RESULTS" header lines.
    pub summary: Vec<StyledLine>,
    /// Card rows, blank lines between rows included.
    pub grid: Vec<StyledLine>,
    /// Geometry used for `grid`.
    pub layout: GridLayout,
}

impl Rendering {
    /// All output lines in print order.
    pub fn lines(&self) -> impl Iterator<Item = &StyledLine> {
        self.summary.iter().chain(self.grid.iter())
    }
}

/// Draw one card per group, all with identical width and height.
pub fn build_cards(partition: &Partition) -> Vec<Card> {
    let mut contents = card_contents(partition);
    equalize_heights(&mut contents);
    let width = card_width(max_content_width(&contents));
    contents
        .iter()
        .map(|content| draw_box(&content.lines, card_spec(width, content.color)))
        .collect()
}

/// Bordered header showing how many names and groups were shuffled.
pub fn summary_block(total_names: usize, group_count: usize) -> Vec<StyledLine> {
    let title = StyledLine::from(Span::styled(
        settings::SUMMARY_TITLE,
        SpanStyle::fg(settings::COLOR_SUMMARY_TITLE).bold(),
    ));
    let label = SpanStyle::fg(settings::COLOR_SUMMARY_LABEL);
    let value = SpanStyle::fg(settings::COLOR_SUMMARY_VALUE);
    let mut counts = StyledLine::new();
    counts.push(Span::styled("People: ", label));
    counts.push(Span::styled(total_names.to_string(), value));
    counts.push(Span::styled(
        format!("{}Groups: ", settings::SUMMARY_SEPARATOR),
        label,
    ));
    counts.push(Span::styled(group_count.to_string(), value));

    let content = [title, StyledLine::new(), counts];
    let inner = content.iter().map(StyledLine::width).max().unwrap_or(0);
    let spec = BoxSpec {
        width: inner + box_overhead(settings::SUMMARY_PADDING_X),
        padding_x: settings::SUMMARY_PADDING_X,
        padding_top: settings::SUMMARY_PADDING_Y,
        padding_bottom: settings::SUMMARY_PADDING_Y,
        border: settings::COLOR_SUMMARY_BORDER,
        align: Align::Center,
    };
    draw_box(&content, spec).lines().to_vec()
}

/// Lay out `partition` for a terminal `terminal_width` columns wide.
pub fn render(partition: &Partition, terminal_width: usize) -> Rendering {
    let cards = build_cards(partition);
    let widths: Vec<usize> = cards.iter().map(Card::width).collect();
    let per_row = cards_per_row(&widths, terminal_width, settings::CARD_GAP);
    let layout = GridLayout {
        card_width: widths.first().copied().unwrap_or(settings::MIN_CARD_WIDTH),
        card_height: cards.first().map(Card::height).unwrap_or(0),
        cards_per_row: per_row,
    };
    tracing::debug!(
        terminal_width,
        card_width = layout.card_width,
        card_height = layout.card_height,
        cards_per_row = per_row,
        "laid out group grid"
    );

    Rendering {
        summary: summary_block(partition.total_names(), partition.group_count()),
        grid: emit_rows(&cards, per_row, settings::CARD_GAP),
        layout,
    }
}

/// Logical text of every output line, without styling.
pub fn render_plain(partition: &Partition, terminal_width: usize) -> Vec<String> {
    render(partition, terminal_width)
        .lines()
        .map(StyledLine::plain)
        .collect()
}

/// Write the rendering to `out`, one line at a time, in order.
pub fn render_to<W: Write>(
    out: &mut W,
    partition: &Partition,
    terminal_width: usize,
    color: bool,
) -> io::Result<()> {
    for line in render(partition, terminal_width).lines() {
        writeln!(out, "{}", line.paint(color))?;
    }
    out.flush()
}
