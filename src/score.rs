//! Scoring utilities for finished hands.
//!
//! Scoring rule (winner-only):
//!   points = sum over every opponent's remaining cards of
//!            number cards at face value, skip/reverse/draw at 20, wilds at 50.
//! The winner's own (empty) hand contributes nothing.

use crate::action::PlayerId;
use crate::card::Card;

/// Points credited to `winner` given every player's remaining cards.
pub fn hand_score<H: AsRef<[Card]>>(hands: &[H], winner: PlayerId) -> u32 {
    hands
        .iter()
        .enumerate()
        .filter(|(idx, _)| *idx != winner)
        .flat_map(|(_, hand)| hand.as_ref().iter())
        .map(Card::points)
        .sum()
}
