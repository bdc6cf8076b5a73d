use serde::{Deserialize, Serialize};

use crate::card::{Card, Color};

/// Zero-based index of a player within the hand.
pub type PlayerId = usize;

/// Action a caller can issue against a running hand.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Current player takes one card from the draw pile.
    Draw,
    /// Current player plays the card at `card_index` of their hand.
    /// `color` must be set for wild cards and only for them.
    Play {
        card_index: usize,
        color: Option<Color>,
    },
    /// A player announces they are down to one card.
    SayUno { player: PlayerId },
    /// `accuser` claims `accused` failed to announce their last card.
    CatchUno {
        accuser: PlayerId,
        accused: PlayerId,
    },
}

/// Result of applying an [`Action`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum ActionOutcome {
    /// Card taken from the draw pile, if any was left to take.
    Drew(Option<Card>),
    Played(Card),
    Declared,
    /// Whether the accusation stuck.
    Accused(bool),
}

impl Action {
    /// Returns the hand index if the action is a play.
    pub fn card_index(&self) -> Option<usize> {
        match self {
            Action::Play { card_index, .. } => Some(*card_index),
            _ => None,
        }
    }
}
