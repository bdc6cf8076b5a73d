use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the four suit colors.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Color {
    Red,
    Yellow,
    Green,
    Blue,
}

impl Color {
    pub const ALL: [Color; 4] = [Color::Red, Color::Yellow, Color::Green, Color::Blue];
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Red => "red",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Blue => "blue",
        };
        f.write_str(name)
    }
}

/// Face of a card, independent of its color.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum CardKind {
    /// Numbered card between 0 and 9.
    Number(u8),
    Skip,
    Reverse,
    /// Next player draws two and loses their turn.
    Draw,
    Wild,
    /// Wild card that also forces the next player to draw four.
    WildDraw,
}

impl CardKind {
    #[inline]
    pub fn is_wild(&self) -> bool {
        matches!(self, CardKind::Wild | CardKind::WildDraw)
    }

    /// Number of cards the next player is forced to take.
    #[inline]
    pub fn forced_draw(&self) -> usize {
        match self {
            CardKind::Draw => 2,
            CardKind::WildDraw => 4,
            _ => 0,
        }
    }
}

/// Representation of a single card.
///
/// Wild cards carry no color while in a deck or hand; once played they hold
/// the color chosen by the player until they are recycled into the draw pile.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    pub kind: CardKind,
    pub color: Option<Color>,
}

pub const MAX_CARD_NUMBER: u8 = 9;
pub const COPIES_PER_ACTION: usize = 2;
pub const WILDS_PER_KIND: usize = 4;
pub const DECK_SIZE: usize = 108;
pub const DEFAULT_CARDS_PER_PLAYER: usize = 7;
pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 10;

impl Card {
    pub const fn number(color: Color, number: u8) -> Self {
        Self {
            kind: CardKind::Number(number),
            color: Some(color),
        }
    }

    pub const fn skip(color: Color) -> Self {
        Self {
            kind: CardKind::Skip,
            color: Some(color),
        }
    }

    pub const fn reverse(color: Color) -> Self {
        Self {
            kind: CardKind::Reverse,
            color: Some(color),
        }
    }

    pub const fn draw(color: Color) -> Self {
        Self {
            kind: CardKind::Draw,
            color: Some(color),
        }
    }

    pub const fn wild() -> Self {
        Self {
            kind: CardKind::Wild,
            color: None,
        }
    }

    pub const fn wild_draw() -> Self {
        Self {
            kind: CardKind::WildDraw,
            color: None,
        }
    }

    #[inline]
    pub fn is_wild(&self) -> bool {
        self.kind.is_wild()
    }

    /// Returns a copy with the chosen color applied. Only meaningful for wilds.
    #[inline]
    pub fn with_color(self, color: Color) -> Self {
        Self {
            color: Some(color),
            ..self
        }
    }

    /// Strips the color a wild card picked up when it was played.
    #[inline]
    pub fn recycled(self) -> Self {
        if self.is_wild() {
            Self { color: None, ..self }
        } else {
            self
        }
    }

    /// Points this card is worth when left in a losing hand.
    pub fn points(&self) -> u32 {
        match self.kind {
            CardKind::Number(n) => u32::from(n),
            CardKind::Skip | CardKind::Reverse | CardKind::Draw => 20,
            CardKind::Wild | CardKind::WildDraw => 50,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let face = match self.kind {
            CardKind::Number(n) => n.to_string(),
            CardKind::Skip => "skip".into(),
            CardKind::Reverse => "reverse".into(),
            CardKind::Draw => "draw two".into(),
            CardKind::Wild => "wild".into(),
            CardKind::WildDraw => "wild draw four".into(),
        };
        match self.color {
            Some(color) => write!(f, "{color} {face}"),
            None => f.write_str(&face),
        }
    }
}

/// Builds the standard 108-card deck in deterministic order (unshuffled).
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for color in Color::ALL {
        deck.push(Card::number(color, 0));
        for number in 1..=MAX_CARD_NUMBER {
            for _ in 0..COPIES_PER_ACTION {
                deck.push(Card::number(color, number));
            }
        }
        for _ in 0..COPIES_PER_ACTION {
            deck.push(Card::skip(color));
            deck.push(Card::reverse(color));
            deck.push(Card::draw(color));
        }
    }
    deck.extend(std::iter::repeat(Card::wild()).take(WILDS_PER_KIND));
    deck.extend(std::iter::repeat(Card::wild_draw()).take(WILDS_PER_KIND));
    deck
}
