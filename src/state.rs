use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::action::PlayerId;
use crate::card::{Card, Color, DEFAULT_CARDS_PER_PLAYER, MAX_PLAYERS, MIN_PLAYERS};
use crate::error::HandError;

/// Fixed parameters of a running hand.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandSettings {
    pub num_players: usize,
    pub dealer: PlayerId,
    pub cards_per_player: usize,
}

impl HandSettings {
    pub fn new(num_players: usize) -> Result<Self, HandError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&num_players) {
            return Err(HandError::InvalidPlayerCount(num_players));
        }
        Ok(Self {
            num_players,
            dealer: 0,
            cards_per_player: DEFAULT_CARDS_PER_PLAYER,
        })
    }
}

/// Order in which turns pass around the table.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Direction {
    /// Ascending player index.
    Forward,
    /// Descending player index.
    Backward,
}

impl Direction {
    pub fn reversed(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }

    /// Seat that follows `from` when playing in this direction.
    pub fn next(self, from: PlayerId, num_players: usize) -> PlayerId {
        match self {
            Direction::Forward => (from + 1) % num_players,
            Direction::Backward => (from + num_players - 1) % num_players,
        }
    }
}

/// Lifecycle of a single hand.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum HandStatus {
    InProgress { current_player: PlayerId },
    Ended { winner: PlayerId },
}

/// Event delivered to end-of-hand listeners.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandEnd {
    pub winner: PlayerId,
    pub score: u32,
}

/// Public portion of a player's state that all opponents may observe.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerPublicState {
    pub id: PlayerId,
    pub name: String,
    pub hand_size: usize,
    pub is_current: bool,
    pub declared_uno: bool,
}

/// Hand snapshot as seen from one seat.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandView {
    pub settings: HandSettings,
    pub status: HandStatus,
    pub self_player: PlayerId,
    pub direction: Direction,
    pub current_color: Color,
    pub top_of_discard: Card,
    pub draw_pile_count: usize,
    pub discard_pile_count: usize,
    pub players: Vec<PlayerPublicState>,
    pub hand: Vec<Card>,
    pub uno_declared: BTreeSet<PlayerId>,
}
