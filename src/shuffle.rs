//! Randomness ports consumed by the engine.
//!
//! The hand never reaches for a global RNG: every hand owns a [`Shuffler`]
//! supplied at construction, so tests can swap in a fixed arrangement.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::card::Card;

/// Permutes a sequence of cards. Implementations must return the same
/// multiset they were given.
pub trait Shuffler {
    fn shuffle(&mut self, cards: Vec<Card>) -> Vec<Card>;
}

impl<F> Shuffler for F
where
    F: FnMut(Vec<Card>) -> Vec<Card>,
{
    fn shuffle(&mut self, cards: Vec<Card>) -> Vec<Card> {
        self(cards)
    }
}

/// Uniform shuffler backed by any `rand` generator.
pub struct RngShuffler<R: Rng> {
    rng: R,
}

impl<R: Rng> RngShuffler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngShuffler<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Shuffler for RngShuffler<R> {
    fn shuffle(&mut self, mut cards: Vec<Card>) -> Vec<Card> {
        cards.shuffle(&mut self.rng);
        cards
    }
}

/// Chooses who deals the first hand of a game.
pub trait DealerPicker {
    /// Returns an index in `0..player_count`.
    fn pick_dealer(&mut self, player_count: usize) -> usize;
}

impl<F> DealerPicker for F
where
    F: FnMut(usize) -> usize,
{
    fn pick_dealer(&mut self, player_count: usize) -> usize {
        self(player_count)
    }
}

/// Picks the dealer uniformly at random.
pub struct RandomDealer<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomDealer<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> DealerPicker for RandomDealer<R> {
    fn pick_dealer(&mut self, player_count: usize) -> usize {
        self.rng.gen_range(0..player_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::full_deck;

    #[test]
    fn rng_shuffler_keeps_the_multiset() {
        let mut shuffler = RngShuffler::seeded(7);
        let mut shuffled = shuffler.shuffle(full_deck());
        let mut original = full_deck();
        assert_ne!(shuffled, original);
        shuffled.sort();
        original.sort();
        assert_eq!(shuffled, original);
    }

    #[test]
    fn seeded_shufflers_are_deterministic() {
        let a = RngShuffler::seeded(42).shuffle(full_deck());
        let b = RngShuffler::seeded(42).shuffle(full_deck());
        assert_eq!(a, b);
    }

    #[test]
    fn random_dealer_stays_in_range() {
        let mut picker = RandomDealer::new(StdRng::seed_from_u64(3));
        for count in 2..=10 {
            assert!(picker.pick_dealer(count) < count);
        }
    }
}
