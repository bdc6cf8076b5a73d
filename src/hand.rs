use std::collections::{BTreeSet, VecDeque};
use std::fmt;

use tracing::{debug, trace};

use crate::action::{Action, ActionOutcome, PlayerId};
use crate::card::{Card, CardKind, Color, DECK_SIZE, full_deck};
use crate::error::{HandError, InvalidAction};
use crate::score::hand_score;
use crate::shuffle::{RngShuffler, Shuffler};
use crate::state::{Direction, HandEnd, HandSettings, HandStatus, HandView, PlayerPublicState};

const DEFAULT_SEED: u64 = 0x5EED_0000_CA4D_0001;

/// Cards an accused player takes for failing to announce their last card.
pub const UNO_PENALTY: usize = 4;

type EndCallback = Box<dyn FnMut(&HandEnd)>;

/// Builder that enables deterministic shuffler injection for tests and replays.
pub struct HandBuilder {
    players: Vec<String>,
    settings: HandSettings,
    shuffler: Option<Box<dyn Shuffler>>,
    seed: u64,
}

impl HandBuilder {
    pub fn new<I, S>(players: I) -> Result<Self, HandError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let players: Vec<String> = players.into_iter().map(Into::into).collect();
        Ok(Self {
            settings: HandSettings::new(players.len())?,
            players,
            shuffler: None,
            seed: DEFAULT_SEED,
        })
    }

    pub fn dealer(mut self, dealer: PlayerId) -> Self {
        self.settings.dealer = dealer;
        self
    }

    pub fn cards_per_player(mut self, cards: usize) -> Self {
        self.settings.cards_per_player = cards;
        self
    }

    /// Seed for the default shuffler. Ignored once a custom shuffler is set.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn shuffler(mut self, shuffler: impl Shuffler + 'static) -> Self {
        self.shuffler = Some(Box::new(shuffler));
        self
    }

    pub fn build(self) -> Result<Hand, HandError> {
        Hand::from_builder(self)
    }
}

/// Rules engine for a single hand, from the deal until someone goes out.
pub struct Hand {
    settings: HandSettings,
    players: Vec<String>,
    hands: Vec<Vec<Card>>,
    /// Front is the next card to be dealt.
    draw_pile: VecDeque<Card>,
    /// Last element is the active discard. Never empty.
    discard_pile: Vec<Card>,
    status: HandStatus,
    direction: Direction,
    current_color: Color,
    uno_declared: BTreeSet<PlayerId>,
    /// Player who went down to one card on the latest play. Any later
    /// play or draw closes the window.
    catchable: Option<PlayerId>,
    shuffler: Box<dyn Shuffler>,
    end_callbacks: Vec<EndCallback>,
}

impl fmt::Debug for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hand")
            .field("settings", &self.settings)
            .field("players", &self.players)
            .field("hands", &self.hands)
            .field("draw_pile", &self.draw_pile.len())
            .field("discard_pile", &self.discard_pile)
            .field("status", &self.status)
            .field("direction", &self.direction)
            .field("current_color", &self.current_color)
            .field("uno_declared", &self.uno_declared)
            .field("catchable", &self.catchable)
            .finish_non_exhaustive()
    }
}

/// Whether `card` may be played onto `top` by a player holding `hand`.
///
/// A wild draw four is only allowed when the hand holds nothing of the
/// current color.
pub fn is_legal_play(card: &Card, top: &Card, current_color: Color, hand: &[Card]) -> bool {
    match card.kind {
        CardKind::Wild => true,
        CardKind::WildDraw => !hand.iter().any(|c| c.color == Some(current_color)),
        kind => card.color == Some(current_color) || kind == top.kind,
    }
}

/// Runs `shuffler` and rejects output that is not a permutation of `cards`.
fn shuffle_checked(shuffler: &mut dyn Shuffler, cards: Vec<Card>) -> Result<Vec<Card>, HandError> {
    if cards.len() <= 1 {
        return Ok(cards);
    }
    let mut expected = cards.clone();
    expected.sort_unstable();
    let shuffled = shuffler.shuffle(cards);
    let mut returned = shuffled.clone();
    returned.sort_unstable();
    if returned != expected {
        return Err(HandError::InvalidConfiguration(
            "shuffler must return a permutation of the cards it was given",
        ));
    }
    Ok(shuffled)
}

impl Hand {
    pub fn settings(&self) -> HandSettings {
        self.settings
    }

    pub fn players(&self) -> &[String] {
        &self.players
    }

    pub fn num_players(&self) -> usize {
        self.players.len()
    }

    pub fn dealer(&self) -> PlayerId {
        self.settings.dealer
    }

    pub fn status(&self) -> HandStatus {
        self.status
    }

    pub fn has_ended(&self) -> bool {
        matches!(self.status, HandStatus::Ended { .. })
    }

    pub fn winner(&self) -> Option<PlayerId> {
        match self.status {
            HandStatus::Ended { winner } => Some(winner),
            HandStatus::InProgress { .. } => None,
        }
    }

    pub fn player_in_turn(&self) -> Option<PlayerId> {
        match self.status {
            HandStatus::InProgress { current_player } => Some(current_player),
            HandStatus::Ended { .. } => None,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn current_color(&self) -> Color {
        self.current_color
    }

    pub fn top_of_discard(&self) -> Card {
        self.discard_pile[self.discard_pile.len() - 1]
    }

    /// Discard pile from bottom to top.
    pub fn discard_pile(&self) -> &[Card] {
        &self.discard_pile
    }

    /// Draw pile from top to bottom.
    pub fn draw_pile(&self) -> &VecDeque<Card> {
        &self.draw_pile
    }

    pub fn player_hand(&self, player: PlayerId) -> Result<&[Card], HandError> {
        self.hands
            .get(player)
            .map(Vec::as_slice)
            .ok_or(HandError::InvalidPlayer(player))
    }

    pub fn uno_declared(&self) -> &BTreeSet<PlayerId> {
        &self.uno_declared
    }

    /// Total cards across every pile and hand. Always equals [`DECK_SIZE`].
    pub fn card_count(&self) -> usize {
        self.draw_pile.len()
            + self.discard_pile.len()
            + self.hands.iter().map(Vec::len).sum::<usize>()
    }

    /// Points owed to the winner; `None` while the hand is in progress.
    pub fn score(&self) -> Option<u32> {
        self.winner().map(|winner| hand_score(&self.hands, winner))
    }

    /// True if it is `player`'s turn and they hold at least one legal card.
    pub fn can_play(&self, player: PlayerId) -> bool {
        self.player_in_turn() == Some(player)
            && self.hands[player].iter().any(|card| self.is_legal(card, player))
    }

    /// True if the player in turn holds at least one legal card.
    pub fn can_play_any(&self) -> bool {
        self.player_in_turn()
            .is_some_and(|player| self.can_play(player))
    }

    /// Whether the card at `card_index` of the current player's hand is legal.
    pub fn can_play_card(&self, card_index: usize) -> bool {
        self.player_in_turn().is_some_and(|player| {
            self.hands[player]
                .get(card_index)
                .is_some_and(|card| self.is_legal(card, player))
        })
    }

    /// Every action the player in turn may take. Wilds are listed once per color.
    pub fn legal_actions(&self) -> Vec<Action> {
        let Some(player) = self.player_in_turn() else {
            return Vec::new();
        };
        let mut actions = Vec::new();
        for (card_index, card) in self.hands[player].iter().enumerate() {
            if !self.is_legal(card, player) {
                continue;
            }
            if card.is_wild() {
                actions.extend(Color::ALL.into_iter().map(|color| Action::Play {
                    card_index,
                    color: Some(color),
                }));
            } else {
                actions.push(Action::Play {
                    card_index,
                    color: None,
                });
            }
        }
        actions.push(Action::Draw);
        actions
    }

    pub fn state_view(&self, perspective: PlayerId) -> Result<HandView, HandError> {
        if perspective >= self.players.len() {
            return Err(HandError::InvalidPlayer(perspective));
        }
        let current = self.player_in_turn();
        let players = self
            .players
            .iter()
            .enumerate()
            .map(|(idx, name)| PlayerPublicState {
                id: idx,
                name: name.clone(),
                hand_size: self.hands[idx].len(),
                is_current: current == Some(idx),
                declared_uno: self.uno_declared.contains(&idx),
            })
            .collect();

        Ok(HandView {
            settings: self.settings,
            status: self.status,
            self_player: perspective,
            direction: self.direction,
            current_color: self.current_color,
            top_of_discard: self.top_of_discard(),
            draw_pile_count: self.draw_pile.len(),
            discard_pile_count: self.discard_pile.len(),
            players,
            hand: self.hands[perspective].clone(),
            uno_declared: self.uno_declared.clone(),
        })
    }

    /// Registers a listener fired once when the hand ends.
    pub fn on_end<F>(&mut self, callback: F)
    where
        F: FnMut(&HandEnd) + 'static,
    {
        self.end_callbacks.push(Box::new(callback));
    }

    pub fn apply_action(&mut self, action: Action) -> Result<ActionOutcome, HandError> {
        match action {
            Action::Draw => self.draw().map(ActionOutcome::Drew),
            Action::Play { card_index, color } => {
                self.play(card_index, color).map(ActionOutcome::Played)
            }
            Action::SayUno { player } => {
                self.say_uno(player)?;
                Ok(ActionOutcome::Declared)
            }
            Action::CatchUno { accuser, accused } => self
                .catch_uno_failure(accuser, accused)
                .map(ActionOutcome::Accused),
        }
    }

    /// The player in turn takes one card. If that card can be played right
    /// away the turn stays with them, otherwise it passes on.
    pub fn draw(&mut self) -> Result<Option<Card>, HandError> {
        let player = self.current_player()?;
        let drawn = self.take_from_draw_pile()?;
        self.catchable = None;
        match drawn {
            Some(card) => {
                self.hands[player].push(card);
                self.revoke_stale_declaration(player);
                if self.is_legal(&card, player) {
                    trace!(player, %card, "drew a playable card");
                    return Ok(Some(card));
                }
                trace!(player, %card, "drew an unplayable card");
            }
            None => debug!(player, "no cards left to draw"),
        }
        self.status = HandStatus::InProgress {
            current_player: self.direction.next(player, self.players.len()),
        };
        Ok(drawn)
    }

    /// The player in turn plays the card at `card_index`, choosing `color`
    /// when it is a wild. Returns the card as it lies on the discard pile.
    pub fn play(&mut self, card_index: usize, color: Option<Color>) -> Result<Card, HandError> {
        let player = self.current_player()?;
        let card = *self.hands[player]
            .get(card_index)
            .ok_or(InvalidAction::CardIndex(card_index))?;
        if !self.is_legal(&card, player) {
            return Err(InvalidAction::IllegalPlay { card }.into());
        }
        let chosen = match (card.is_wild(), color) {
            (true, Some(color)) => color,
            (true, None) => return Err(InvalidAction::MissingColorChoice.into()),
            (false, Some(_)) => return Err(InvalidAction::UnexpectedColorChoice.into()),
            (false, None) => card
                .color
                .ok_or(HandError::InvalidConfiguration("non-wild card without a color"))?,
        };

        let forced = card.kind.forced_draw();
        if self.draw_pile.len() < forced {
            self.reshuffle()?;
        }

        let played = card.with_color(chosen);
        self.hands[player].remove(card_index);
        self.discard_pile.push(played);
        self.current_color = chosen;
        let remaining = self.hands[player].len();
        self.catchable = (remaining == 1).then_some(player);
        if remaining > 1 {
            self.uno_declared.remove(&player);
        }
        trace!(player, card = %played, remaining, "card played");

        let num_players = self.players.len();
        let direction = self.direction;
        let next = direction.next(player, num_players);

        if remaining == 0 {
            // Going out still lands a pending draw on the next player.
            if forced > 0 {
                self.force_draw(next, forced)?;
            }
            self.finish(player);
            return Ok(played);
        }

        let following = match played.kind {
            CardKind::Skip => direction.next(next, num_players),
            CardKind::Reverse => {
                self.direction = direction.reversed();
                if num_players == 2 {
                    player
                } else {
                    self.direction.next(player, num_players)
                }
            }
            CardKind::Draw | CardKind::WildDraw => {
                self.force_draw(next, forced)?;
                direction.next(next, num_players)
            }
            CardKind::Number(_) | CardKind::Wild => next,
        };
        self.status = HandStatus::InProgress {
            current_player: following,
        };
        Ok(played)
    }

    /// Records that `player` announced their last card. Repeating it is
    /// harmless; announcing while holding more than two cards records nothing.
    pub fn say_uno(&mut self, player: PlayerId) -> Result<(), HandError> {
        if self.has_ended() {
            return Err(HandError::HandEnded);
        }
        self.check_player(player)?;
        // Announcing is only meaningful just before or after the second-to-last card.
        if self.hands[player].len() > 2 {
            trace!(player, "uno declared too early, ignored");
            return Ok(());
        }
        if self.uno_declared.insert(player) {
            trace!(player, "uno declared");
        }
        Ok(())
    }

    /// Challenges `accused` for holding one card without announcing it.
    ///
    /// The challenge only sticks between the accused's play and the next
    /// action, while the player right after the accused is in turn. A failed
    /// challenge is not an error; only bad indices are.
    pub fn catch_uno_failure(
        &mut self,
        accuser: PlayerId,
        accused: PlayerId,
    ) -> Result<bool, HandError> {
        self.check_player(accuser)?;
        self.check_player(accused)?;
        let HandStatus::InProgress { current_player } = self.status else {
            return Ok(false);
        };
        let caught = accuser != accused
            && self.catchable == Some(accused)
            && self.hands[accused].len() == 1
            && !self.uno_declared.contains(&accused)
            && current_player == self.direction.next(accused, self.players.len());
        if caught {
            debug!(accuser, accused, "uno failure caught");
            self.force_draw(accused, UNO_PENALTY)?;
            self.catchable = None;
        }
        Ok(caught)
    }

    fn from_builder(builder: HandBuilder) -> Result<Self, HandError> {
        let HandBuilder {
            players,
            settings,
            shuffler,
            seed,
        } = builder;
        if settings.dealer >= settings.num_players {
            return Err(HandError::InvalidPlayer(settings.dealer));
        }
        if settings.cards_per_player == 0 {
            return Err(HandError::InvalidConfiguration(
                "cards per player must be positive",
            ));
        }
        let dealt = settings
            .cards_per_player
            .checked_mul(settings.num_players)
            .unwrap_or(usize::MAX);
        if dealt >= DECK_SIZE {
            return Err(HandError::InvalidConfiguration(
                "deck does not contain enough cards to deal and flip a starter",
            ));
        }

        let mut shuffler =
            shuffler.unwrap_or_else(|| Box::new(RngShuffler::seeded(seed)) as Box<dyn Shuffler>);
        let deck = shuffle_checked(shuffler.as_mut(), full_deck())?;
        let mut draw_pile: VecDeque<Card> = deck.into();

        let mut hands = vec![Vec::with_capacity(settings.cards_per_player); settings.num_players];
        for _ in 0..settings.cards_per_player {
            for hand in hands.iter_mut() {
                hand.push(draw_pile.pop_front().ok_or(HandError::InvalidConfiguration(
                    "deck exhausted while dealing",
                ))?);
            }
        }

        let starter = Self::flip_starter(&mut draw_pile, shuffler.as_mut())?;
        let current_color = starter
            .color
            .ok_or(HandError::InvalidConfiguration("starter card has no color"))?;

        let mut hand = Hand {
            settings,
            players,
            hands,
            draw_pile,
            discard_pile: vec![starter],
            status: HandStatus::InProgress {
                current_player: settings.dealer,
            },
            direction: Direction::Forward,
            current_color,
            uno_declared: BTreeSet::new(),
            catchable: None,
            shuffler,
            end_callbacks: Vec::new(),
        };
        hand.open_with(starter)?;
        debug!(
            players = hand.players.len(),
            dealer = settings.dealer,
            %starter,
            first_player = ?hand.player_in_turn(),
            "hand dealt"
        );
        Ok(hand)
    }

    /// Flips cards off the draw pile until a non-wild comes up. Each wild is
    /// returned to the pile and the undealt cards are reshuffled.
    fn flip_starter(
        draw_pile: &mut VecDeque<Card>,
        shuffler: &mut dyn Shuffler,
    ) -> Result<Card, HandError> {
        for _ in 0..DECK_SIZE {
            let card = draw_pile.pop_front().ok_or(HandError::InvalidConfiguration(
                "deck exhausted while flipping a starter",
            ))?;
            if !card.is_wild() {
                return Ok(card);
            }
            debug!(%card, "wild starter, reshuffling undealt cards");
            draw_pile.push_back(card);
            let remaining: Vec<Card> = draw_pile.drain(..).collect();
            draw_pile.extend(shuffle_checked(shuffler, remaining)?);
        }
        Err(HandError::InvalidConfiguration(
            "shuffler kept turning up wild starters",
        ))
    }

    /// Sets the opening player and direction from the starter card.
    fn open_with(&mut self, starter: Card) -> Result<(), HandError> {
        let num_players = self.players.len();
        let dealer = self.settings.dealer;
        let left_of_dealer = Direction::Forward.next(dealer, num_players);
        let first = match starter.kind {
            CardKind::Reverse => {
                self.direction = Direction::Backward;
                Direction::Backward.next(dealer, num_players)
            }
            CardKind::Skip => Direction::Forward.next(left_of_dealer, num_players),
            CardKind::Draw => {
                self.force_draw(left_of_dealer, starter.kind.forced_draw())?;
                Direction::Forward.next(left_of_dealer, num_players)
            }
            CardKind::Number(_) | CardKind::Wild | CardKind::WildDraw => left_of_dealer,
        };
        self.status = HandStatus::InProgress {
            current_player: first,
        };
        Ok(())
    }

    fn current_player(&self) -> Result<PlayerId, HandError> {
        self.player_in_turn().ok_or(HandError::HandEnded)
    }

    fn check_player(&self, player: PlayerId) -> Result<(), HandError> {
        if player >= self.players.len() {
            return Err(HandError::InvalidPlayer(player));
        }
        Ok(())
    }

    fn is_legal(&self, card: &Card, player: PlayerId) -> bool {
        is_legal_play(
            card,
            &self.top_of_discard(),
            self.current_color,
            &self.hands[player],
        )
    }

    fn take_from_draw_pile(&mut self) -> Result<Option<Card>, HandError> {
        if self.draw_pile.is_empty() {
            self.reshuffle()?;
        }
        Ok(self.draw_pile.pop_front())
    }

    /// Deals up to `count` cards to `player`, reshuffling up front when the
    /// draw pile cannot cover the whole draw.
    fn force_draw(&mut self, player: PlayerId, count: usize) -> Result<(), HandError> {
        if self.draw_pile.len() < count {
            self.reshuffle()?;
        }
        let mut dealt = 0;
        for _ in 0..count {
            let Some(card) = self.take_from_draw_pile()? else {
                break;
            };
            self.hands[player].push(card);
            dealt += 1;
        }
        self.revoke_stale_declaration(player);
        debug!(player, requested = count, dealt, "forced draw");
        Ok(())
    }

    /// An announcement only covers the stretch spent holding a single card.
    fn revoke_stale_declaration(&mut self, player: PlayerId) {
        if self.hands[player].len() > 1 {
            self.uno_declared.remove(&player);
        }
    }

    /// Moves everything under the active discard back into the draw pile,
    /// beneath whatever is still there. Leaves every pile untouched if the
    /// shuffler misbehaves.
    fn reshuffle(&mut self) -> Result<(), HandError> {
        if self.discard_pile.len() <= 1 {
            debug!("nothing to recycle from the discard pile");
            return Ok(());
        }
        let top = self.discard_pile.len() - 1;
        let recycled: Vec<Card> = self.discard_pile[..top]
            .iter()
            .copied()
            .map(Card::recycled)
            .collect();
        let count = recycled.len();
        let shuffled = shuffle_checked(self.shuffler.as_mut(), recycled)?;
        self.discard_pile.drain(..top);
        self.draw_pile.extend(shuffled);
        debug!(
            recycled = count,
            draw_pile = self.draw_pile.len(),
            "reshuffled discard pile into draw pile"
        );
        Ok(())
    }

    fn finish(&mut self, winner: PlayerId) {
        let score = hand_score(&self.hands, winner);
        self.status = HandStatus::Ended { winner };
        debug!(winner, score, "hand ended");
        let event = HandEnd { winner, score };
        for callback in self.end_callbacks.iter_mut() {
            callback(&event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red(n: u8) -> Card {
        Card::number(Color::Red, n)
    }

    #[test]
    fn wild_is_always_legal() {
        let hand = [red(1), Card::wild()];
        assert!(is_legal_play(&Card::wild(), &red(5), Color::Red, &hand));
    }

    #[test]
    fn wild_draw_needs_no_card_of_current_color() {
        let holding_red = [red(1), Card::wild_draw()];
        let no_red = [Card::number(Color::Blue, 1), Card::wild_draw(), Card::wild()];
        assert!(!is_legal_play(&Card::wild_draw(), &red(5), Color::Red, &holding_red));
        assert!(is_legal_play(&Card::wild_draw(), &red(5), Color::Red, &no_red));
    }

    #[test]
    fn matches_on_color_number_or_action() {
        let top = red(5);
        assert!(is_legal_play(&red(9), &top, Color::Red, &[]));
        assert!(is_legal_play(&Card::number(Color::Blue, 5), &top, Color::Red, &[]));
        assert!(!is_legal_play(&Card::number(Color::Blue, 6), &top, Color::Red, &[]));
        assert!(is_legal_play(
            &Card::skip(Color::Green),
            &Card::skip(Color::Red),
            Color::Red,
            &[]
        ));
        assert!(!is_legal_play(&Card::skip(Color::Green), &top, Color::Red, &[]));
    }

    #[test]
    fn reshuffle_keeps_top_and_recycles_the_rest() -> Result<(), HandError> {
        let mut hand = HandBuilder::new(["a", "b", "c"])?.seed(11).build()?;
        let mut moved = Vec::new();
        if let Some(pos) = hand.draw_pile.iter().position(Card::is_wild) {
            let wild = hand.draw_pile.remove(pos).expect("position is in range");
            moved.push(wild.with_color(Color::Blue));
        }
        moved.extend(hand.draw_pile.drain(..5));
        for card in moved {
            hand.discard_pile.insert(0, card);
        }
        let top = hand.top_of_discard();
        let mut expected: Vec<Card> = hand.draw_pile.iter().copied().collect();
        expected.extend(
            hand.discard_pile[..hand.discard_pile.len() - 1]
                .iter()
                .map(|c| c.recycled()),
        );
        expected.sort();

        hand.reshuffle()?;

        assert_eq!(hand.discard_pile, vec![top]);
        let mut after: Vec<Card> = hand.draw_pile.iter().copied().collect();
        after.sort();
        assert_eq!(after, expected);
        assert_eq!(hand.card_count(), DECK_SIZE);
        assert!(hand.draw_pile.iter().all(|c| !c.is_wild() || c.color.is_none()));
        Ok(())
    }

    #[test]
    fn misbehaving_shuffler_leaves_piles_untouched() -> Result<(), HandError> {
        let dropping = |mut cards: Vec<Card>| {
            if cards.len() < DECK_SIZE {
                cards.pop();
            }
            cards
        };
        let mut hand = HandBuilder::new(["a", "b"])?.shuffler(dropping).build()?;
        let moved: Vec<Card> = hand.draw_pile.drain(..5).collect();
        for card in moved {
            hand.discard_pile.insert(0, card);
        }
        let discard_before = hand.discard_pile.clone();
        let draw_before = hand.draw_pile.clone();

        assert!(matches!(
            hand.reshuffle(),
            Err(HandError::InvalidConfiguration(_))
        ));
        assert_eq!(hand.discard_pile, discard_before);
        assert_eq!(hand.draw_pile, draw_before);
        assert_eq!(hand.card_count(), DECK_SIZE);
        Ok(())
    }

    #[test]
    fn dealing_rejects_a_shuffler_that_loses_cards() {
        let result = HandBuilder::new(["a", "b"]).and_then(|builder| {
            builder
                .shuffler(|mut cards: Vec<Card>| {
                    cards.pop();
                    cards
                })
                .build()
        });
        assert!(matches!(result, Err(HandError::InvalidConfiguration(_))));
    }

    #[test]
    fn played_wild_color_governs_matching() {
        let top = Card::wild().with_color(Color::Green);
        assert!(is_legal_play(&Card::number(Color::Green, 2), &top, Color::Green, &[]));
        assert!(!is_legal_play(&red(2), &top, Color::Green, &[]));
    }
}
