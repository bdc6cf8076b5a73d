//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use std::collections::HashSet;

use once_cell::sync::OnceCell;
use tracing_subscriber::{EnvFilter, fmt};
use unohand::{Card, HandBuilder, HandError, Shuffler, full_deck};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Installs a test-writer subscriber once. Level comes from `TEST_LOG`,
/// then `RUST_LOG`, then defaults to `warn`.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// Deck position of the card dealt to `player` in `round`.
pub fn dealt(num_players: usize, player: usize, round: usize) -> usize {
    round * num_players + player
}

/// Deck position of the starter card.
pub fn starter(num_players: usize, cards_per_player: usize) -> usize {
    num_players * cards_per_player
}

/// Full deck with the given cards moved to the given positions.
pub fn arranged_deck(placements: &[(usize, Card)]) -> Vec<Card> {
    let mut deck = full_deck();
    let mut placed = HashSet::new();
    for &(position, card) in placements {
        assert!(!placed.contains(&position), "position {position} placed twice");
        let from = (0..deck.len())
            .find(|idx| deck[*idx] == card && !placed.contains(idx))
            .unwrap_or_else(|| panic!("no spare {card} left in the deck"));
        deck.swap(from, position);
        placed.insert(position);
    }
    deck
}

/// Shuffler that hands out `deck` on the first call and leaves every later
/// reshuffle in the order it was given.
pub fn stacked(deck: Vec<Card>) -> impl Shuffler + 'static {
    let mut first = Some(deck);
    move |cards: Vec<Card>| first.take().unwrap_or(cards)
}

/// Builder for a hand dealt from an arranged deck.
pub fn hand_with(
    num_players: usize,
    dealer: usize,
    cards_per_player: usize,
    placements: &[(usize, Card)],
) -> Result<HandBuilder, HandError> {
    init_logging();
    let names: Vec<String> = (0..num_players).map(|i| format!("player {i}")).collect();
    Ok(HandBuilder::new(names)?
        .dealer(dealer)
        .cards_per_player(cards_per_player)
        .shuffler(stacked(arranged_deck(placements))))
}
