//! End-to-end checks of the public library API: partition, then render.

use name_shuffler::grid::{build_cards, render, render_plain};
use name_shuffler::partition::partition_with_rng;
use name_shuffler::tui::settings;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn names(count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("Person {i}")).collect()
}

#[test]
fn twelve_names_in_five_groups_wrap_at_eighty_columns() {
    let mut rng = StdRng::seed_from_u64(2024);
    let p = partition_with_rng(&names(12), 5, &mut rng).expect("valid input");

    let rendering = render(&p, 80);
    let layout = rendering.layout;
    // "Person 12" is the widest content line: 9 columns + 4 overhead.
    assert_eq!(layout.card_width, settings::MIN_CARD_WIDTH);
    assert_eq!(layout.cards_per_row, 4);

    // One full row, a blank separator, and a second row holding one card.
    assert_eq!(rendering.grid.len(), layout.card_height * 2 + 1);
    let first_row_width = 4 * layout.card_width + 3 * settings::CARD_GAP;
    for line in &rendering.grid[..layout.card_height] {
        assert_eq!(line.width(), first_row_width);
    }
    for line in &rendering.grid[layout.card_height + 1..] {
        assert_eq!(line.width(), layout.card_width);
    }
}

#[test]
fn every_card_line_has_the_card_width() {
    let mut rng = StdRng::seed_from_u64(8);
    let input: Vec<String> = ["Zoë", "Łukasz", "Ana María", "Bo", "Émile", "Kai"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let p = partition_with_rng(&input, 4, &mut rng).expect("valid input");
    let cards = build_cards(&p);
    let width = cards[0].width();
    let height = cards[0].height();
    for card in &cards {
        assert_eq!(card.height(), height);
        assert!(card.lines().iter().all(|l| l.width() == width));
    }
}

#[test]
fn tiny_terminal_still_makes_progress() {
    let mut rng = StdRng::seed_from_u64(1);
    let p = partition_with_rng(&names(6), 3, &mut rng).expect("valid input");
    let rendering = render(&p, 1);
    assert_eq!(rendering.layout.cards_per_row, 1);
    assert_eq!(
        rendering.grid.len(),
        3 * rendering.layout.card_height + 2
    );
}

#[test]
fn plain_output_lists_every_name_once() {
    let mut rng = StdRng::seed_from_u64(77);
    let input = vec![
        "Ada".to_string(),
        "Grace".to_string(),
        "Linus".to_string(),
        "Ken".to_string(),
        "Barbara".to_string(),
    ];
    let p = partition_with_rng(&input, 2, &mut rng).expect("valid input");
    let text = render_plain(&p, 80).join("\n");
    for name in &input {
        assert_eq!(text.matches(name.as_str()).count(), 1, "{name}");
    }
    assert!(text.contains("People: 5 • Groups: 2"));
    assert!(!text.contains('\u{1b}'));
}
