use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::action::PlayerId;
use crate::card::DEFAULT_CARDS_PER_PLAYER;
use crate::error::HandError;
use crate::hand::{Hand, HandBuilder};
use crate::shuffle::{DealerPicker, RandomDealer, RngShuffler};
use crate::state::{HandEnd, HandSettings};

const DEFAULT_SEED: u64 = 0x5EED_5EED_5EED_5EED;
pub const DEFAULT_TARGET_SCORE: u32 = 500;

const DEALER_STREAM: u64 = 0xDEA1;
const SHUFFLE_STREAM: u64 = 0x5EED_15;

/// Configuration required to bootstrap a game of several hands.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameConfig {
    pub players: Vec<String>,
    pub target_score: u32,
    pub cards_per_player: usize,
    pub seed: u64,
}

impl GameConfig {
    pub fn new<I, S>(players: I) -> Result<Self, HandError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let players: Vec<String> = players.into_iter().map(Into::into).collect();
        HandSettings::new(players.len())?;
        Ok(Self {
            players,
            target_score: DEFAULT_TARGET_SCORE,
            cards_per_player: DEFAULT_CARDS_PER_PLAYER,
            seed: DEFAULT_SEED,
        })
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_target_score(mut self, target_score: u32) -> Self {
        self.target_score = target_score;
        self
    }

    pub fn with_cards_per_player(mut self, cards: usize) -> Self {
        self.cards_per_player = cards;
        self
    }
}

/// Status of the whole game.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Finished { winner: PlayerId },
}

/// Sequences hands and credits each hand's score to its winner until
/// someone reaches the target score.
#[derive(Debug)]
pub struct Game {
    config: GameConfig,
    status: GameStatus,
    scores: Vec<u32>,
    dealer: PlayerId,
    hand: Hand,
    history: Vec<HandEnd>,
}

impl Game {
    /// Starts a game whose first dealer is drawn from the configured seed.
    pub fn new(config: GameConfig) -> Result<Self, HandError> {
        let rng = StdRng::seed_from_u64(mix_seed(config.seed, 0, DEALER_STREAM));
        Self::with_dealer_picker(config, &mut RandomDealer::new(rng))
    }

    pub fn with_dealer_picker(
        config: GameConfig,
        picker: &mut impl DealerPicker,
    ) -> Result<Self, HandError> {
        let num_players = config.players.len();
        HandSettings::new(num_players)?;
        if config.target_score == 0 {
            return Err(HandError::InvalidConfiguration(
                "target score must be positive",
            ));
        }
        let dealer = picker.pick_dealer(num_players);
        if dealer >= num_players {
            return Err(HandError::InvalidPlayer(dealer));
        }
        let hand = Self::deal(&config, dealer, 0)?;
        info!(players = num_players, dealer, target = config.target_score, "game started");
        Ok(Self {
            scores: vec![0; num_players],
            config,
            status: GameStatus::Ongoing,
            dealer,
            hand,
            history: Vec::new(),
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.status, GameStatus::Finished { .. })
    }

    pub fn winner(&self) -> Option<PlayerId> {
        match self.status {
            GameStatus::Finished { winner } => Some(winner),
            GameStatus::Ongoing => None,
        }
    }

    pub fn scores(&self) -> &[u32] {
        &self.scores
    }

    pub fn dealer(&self) -> PlayerId {
        self.dealer
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    /// Results of every hand credited so far, oldest first.
    pub fn history(&self) -> &[HandEnd] {
        &self.history
    }

    pub fn hands_played(&self) -> usize {
        self.history.len()
    }

    /// Credits the ended hand to its winner, then either declares the game
    /// winner or deals the next hand with the deal passed one seat on.
    pub fn finish_hand(&mut self) -> Result<GameStatus, HandError> {
        if self.is_finished() {
            return Err(HandError::GameOver);
        }
        let (Some(winner), Some(score)) = (self.hand.winner(), self.hand.score()) else {
            return Err(HandError::HandInProgress);
        };
        self.scores[winner] += score;
        self.history.push(HandEnd { winner, score });
        debug!(
            hand = self.history.len(),
            winner,
            score,
            total = self.scores[winner],
            "hand credited"
        );

        if self.scores[winner] >= self.config.target_score {
            self.status = GameStatus::Finished { winner };
            info!(winner, score = self.scores[winner], hands = self.history.len(), "game finished");
            return Ok(self.status);
        }

        self.dealer = (self.dealer + 1) % self.scores.len();
        self.hand = Self::deal(&self.config, self.dealer, self.history.len())?;
        Ok(self.status)
    }

    fn deal(config: &GameConfig, dealer: PlayerId, hand_index: usize) -> Result<Hand, HandError> {
        let seed = mix_seed(config.seed, hand_index as u64, SHUFFLE_STREAM);
        HandBuilder::new(config.players.iter().cloned())?
            .dealer(dealer)
            .cards_per_player(config.cards_per_player)
            .shuffler(RngShuffler::seeded(seed))
            .build()
    }
}

/// Derives an independent seed per hand from the game seed.
fn mix_seed(base: u64, a: u64, b: u64) -> u64 {
    let mut z =
        base ^ (a.wrapping_mul(0x9E37_79B9_7F4A_7C15)) ^ (b.wrapping_mul(0xBF58_476D_1CE4_E5B9));
    z ^= z >> 12;
    z ^= z << 25;
    z ^= z >> 27;
    z
}
