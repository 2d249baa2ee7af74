//! Card catalog for a fixed 52-card deck.
//!
//! Every card is an identifier in `0..52`. Kind (suit), rank value and display
//! symbol are pure functions of that identifier:
//!
//! | ids      | suit     | kind |
//! |----------|----------|------|
//! | 0..=12   | spades   | 1    |
//! | 13..=25  | hearts   | 2    |
//! | 26..=38  | clubs    | 3    |
//! | 39..=51  | diamonds | 4    |
//!
//! Within a suit, ids run from Two (value 2) up to Ace (value 14).

use std::fmt;
use std::str::FromStr;

/// Number of cards in the deck.
pub const DECK_SIZE: usize = 52;

const RANKS_PER_SUIT: u8 = 13;

/// Card ranks from Two (low) to Ace (high).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Rank text used in card symbols ("10" rather than "T").
    pub const fn label(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RankParseError {
    #[error("invalid rank: '{0}'")]
    Invalid(String),
}

impl FromStr for Rank {
    type Err = RankParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        let r = match upper.as_str() {
            "2" => Rank::Two,
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" | "T" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            _ => return Err(RankParseError::Invalid(s.to_string())),
        };
        Ok(r)
    }
}

/// The four suits in catalog order. `kind()` is the 1-based position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    Spades,
    Hearts,
    Clubs,
    Diamonds,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Clubs, Suit::Diamonds];

    /// Numeric kind: 1 spades, 2 hearts, 3 clubs, 4 diamonds.
    pub const fn kind(self) -> u8 {
        match self {
            Suit::Spades => 1,
            Suit::Hearts => 2,
            Suit::Clubs => 3,
            Suit::Diamonds => 4,
        }
    }

    pub const fn glyph(self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
        }
    }

    /// ASCII letter used in card codes such as `"10d"`.
    pub const fn to_char(self) -> char {
        match self {
            Suit::Spades => 's',
            Suit::Hearts => 'h',
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
        }
    }

    /// Hearts and diamonds render red.
    pub const fn is_red(self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }

    const fn offset(self) -> u8 {
        (self.kind() - 1) * RANKS_PER_SUIT
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SuitParseError {
    #[error("invalid suit: '{0}'")]
    Invalid(String),
}

impl FromStr for Suit {
    type Err = SuitParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let mut chars = t.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Suit::try_from(c);
        }
        match t.to_ascii_lowercase().as_str() {
            "spades" => Ok(Suit::Spades),
            "hearts" => Ok(Suit::Hearts),
            "clubs" => Ok(Suit::Clubs),
            "diamonds" => Ok(Suit::Diamonds),
            _ => Err(SuitParseError::Invalid(s.to_string())),
        }
    }
}

impl TryFrom<char> for Suit {
    type Error = SuitParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        let lower = c.to_ascii_lowercase();
        Suit::ALL
            .into_iter()
            .find(|s| s.to_char() == lower || s.glyph() == c)
            .ok_or_else(|| SuitParseError::Invalid(c.to_string()))
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardError {
    #[error("card id {0} out of range (expected 0..52)")]
    OutOfRange(usize),
    #[error("invalid card: '{0}'")]
    Invalid(String),
    #[error(transparent)]
    Rank(#[from] RankParseError),
    #[error(transparent)]
    Suit(#[from] SuitParseError),
}

/// A card identifier in `0..52`.
///
/// ```
/// use oh_hell_rs::cards::{Card, Rank, Suit};
///
/// let card = Card::new(Rank::Ace, Suit::Spades);
/// assert_eq!(card.id(), 12);
/// assert_eq!(card.kind(), 1);
/// assert_eq!(card.value(), 14);
/// assert_eq!(card.symbol(), "♠A");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card(u8);

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self(suit.offset() + rank.value() - 2)
    }

    /// Look up a card by identifier.
    pub fn try_from_id(id: usize) -> Result<Self, CardError> {
        if id >= DECK_SIZE {
            return Err(CardError::OutOfRange(id));
        }
        Ok(Self(id as u8))
    }

    pub const fn id(self) -> u8 {
        self.0
    }

    pub const fn suit(self) -> Suit {
        Suit::ALL[(self.0 / RANKS_PER_SUIT) as usize]
    }

    pub const fn rank(self) -> Rank {
        Rank::ALL[(self.0 % RANKS_PER_SUIT) as usize]
    }

    /// Numeric suit kind (1..=4).
    pub const fn kind(self) -> u8 {
        self.suit().kind()
    }

    /// Rank value (2..=14, Ace high).
    pub const fn value(self) -> u8 {
        self.rank().value()
    }

    /// Display symbol, e.g. `♥10`.
    pub fn symbol(self) -> String {
        format!("{}{}", self.suit().glyph(), self.rank().label())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.suit().glyph(), self.rank().label())
    }
}

impl TryFrom<usize> for Card {
    type Error = CardError;
    fn try_from(id: usize) -> Result<Self, Self::Error> {
        Card::try_from_id(id)
    }
}

impl FromStr for Card {
    type Err = CardError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let Some(suit_ch) = t.chars().last() else {
            return Err(CardError::Invalid(s.to_string()));
        };
        let rank_str = &t[..t.len() - suit_ch.len_utf8()];
        if rank_str.is_empty() {
            return Err(CardError::Invalid(s.to_string()));
        }
        let rank = Rank::from_str(rank_str)?;
        let suit = Suit::try_from(suit_ch)?;
        Ok(Card::new(rank, suit))
    }
}

/// Suit kind of the card with identifier `id`.
pub fn kind(id: usize) -> Result<u8, CardError> {
    Card::try_from_id(id).map(Card::kind)
}

/// Rank value of the card with identifier `id`.
pub fn value(id: usize) -> Result<u8, CardError> {
    Card::try_from_id(id).map(Card::value)
}

/// Display symbol of the card with identifier `id`.
pub fn symbol(id: usize) -> Result<String, CardError> {
    Card::try_from_id(id).map(Card::symbol)
}

/// Parse multiple cards separated by whitespace or commas.
///
/// ```
/// use oh_hell_rs::cards::{parse_cards, Card, Rank, Suit};
///
/// let cards = parse_cards("5s, Ah 10c").unwrap();
/// assert_eq!(cards[0], Card::new(Rank::Five, Suit::Spades));
/// assert_eq!(cards[1], Card::new(Rank::Ace, Suit::Hearts));
/// assert_eq!(cards[2], Card::new(Rank::Ten, Suit::Clubs));
/// ```
pub fn parse_cards(input: &str) -> Result<Vec<Card>, CardError> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(Card::from_str)
        .collect()
}
