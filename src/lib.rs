//! Rules engine for UNO-style card games: deck, per-hand state machine and
//! a score accumulator across hands.

pub mod action;
pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod score;
pub mod shuffle;
pub mod state;

pub use crate::action::{Action, ActionOutcome, PlayerId};
pub use crate::card::{Card, CardKind, Color, full_deck};
pub use crate::error::{HandError, InvalidAction};
pub use crate::game::{Game, GameConfig, GameStatus};
pub use crate::hand::{Hand, HandBuilder, UNO_PENALTY, is_legal_play};
pub use crate::score::hand_score;
pub use crate::shuffle::{DealerPicker, RandomDealer, RngShuffler, Shuffler};
pub use crate::state::{
    Direction, HandEnd, HandSettings, HandStatus, HandView, PlayerPublicState,
};
