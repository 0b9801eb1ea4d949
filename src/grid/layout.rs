//! Row packing and line-by-line row emission.

use crate::grid::card::Card;
use crate::tui::text::StyledLine;

/// How many cards fit side by side within `terminal_width`.
///
/// Widths are accumulated greedily in order, with `gap` columns between
/// neighbours. The result is never zero, so an over-wide card still gets a
/// row of its own.
pub fn cards_per_row(widths: &[usize], terminal_width: usize, gap: usize) -> usize {
    let mut iter = widths.iter();
    let Some(first) = iter.next() else {
        return 1;
    };
    let mut used = *first;
    let mut count = 1usize;
    for width in iter {
        let next = used + gap + width;
        if next > terminal_width {
            break;
        }
        used = next;
        count += 1;
    }
    count
}

/// Interleave cards into grid rows.
///
/// Cards are chunked by `per_row`; each chunk prints line `j` of every card
/// joined by `gap` spaces. A blank line separates chunks. Cards in a chunk
/// must share one height.
pub fn emit_rows(cards: &[Card], per_row: usize, gap: usize) -> Vec<StyledLine> {
    let per_row = per_row.max(1);
    let mut out = Vec::new();
    let chunk_count = cards.len().div_ceil(per_row);

    for (chunk_idx, chunk) in cards.chunks(per_row).enumerate() {
        let height = chunk.iter().map(Card::height).max().unwrap_or(0);
        for row in 0..height {
            let mut line = StyledLine::new();
            for (pos, card) in chunk.iter().enumerate() {
                if pos > 0 {
                    line.push_spaces(gap);
                }
                match card.lines().get(row) {
                    Some(card_line) => line.append(card_line),
                    None => line.push_spaces(card.width()),
                }
            }
            out.push(line);
        }
        if chunk_idx + 1 < chunk_count {
            out.push(StyledLine::new());
        }
    }
    out
}
