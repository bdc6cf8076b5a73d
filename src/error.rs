use thiserror::Error;

use crate::action::PlayerId;
use crate::card::Card;

/// Errors that can occur when manipulating a hand.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HandError {
    #[error("a hand needs between 2 and 10 players, got {0}")]
    InvalidPlayerCount(usize),
    #[error("player index {0} is out of range")]
    InvalidPlayer(PlayerId),
    #[error("hand has already ended")]
    HandEnded,
    #[error("hand is still in progress")]
    HandInProgress,
    #[error("game is already over")]
    GameOver,
    #[error("invalid action: {0}")]
    InvalidAction(#[from] InvalidAction),
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
}

/// Details of rejected plays.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidAction {
    #[error("hand index {0} is out of range")]
    CardIndex(usize),
    #[error("{card} cannot be played right now")]
    IllegalPlay { card: Card },
    #[error("a color must be chosen when playing a wild card")]
    MissingColorChoice,
    #[error("only wild cards take a color choice")]
    UnexpectedColorChoice,
}
