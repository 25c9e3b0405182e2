use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A playing card in a standard 52-card game.
///
/// Cards are the hidden values on the memory board. Two cells match when
/// they hold equal cards.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

/// The suit of a [card](Card).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Suit {
    #[serde(rename = "♦")]
    Diamond,
    #[serde(rename = "♥")]
    Heart,
    #[serde(rename = "♠")]
    Spade,
    #[serde(rename = "♣")]
    Club,
}

/// The rank of a [card](Card).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "6")]
    Six,
    #[serde(rename = "7")]
    Seven,
    #[serde(rename = "8")]
    Eight,
    #[serde(rename = "9")]
    Nine,
    #[serde(rename = "10")]
    Ten,
    #[serde(rename = "J")]
    Jack,
    #[serde(rename = "Q")]
    Queen,
    #[serde(rename = "K")]
    King,
    #[serde(rename = "A")]
    Ace,
}

pub const SUITS: [Suit; 4] = [Suit::Diamond, Suit::Heart, Suit::Spade, Suit::Club];

pub const RANKS: [Rank; 13] = [
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

/// Number of distinct cards, and so the maximum number of pairs on a board.
pub const NUM_CARDS: usize = SUITS.len() * RANKS.len();

/// Every card of the deck, ordered by suit and then by rank.
pub static ALL_CARDS: [Card; NUM_CARDS] = {
    let mut cards = [Card {
        suit: Suit::Diamond,
        rank: Rank::Two,
    }; NUM_CARDS];
    let mut idx = 0;
    while idx < NUM_CARDS {
        cards[idx] = Card {
            suit: SUITS[idx / RANKS.len()],
            rank: RANKS[idx % RANKS.len()],
        };
        idx += 1;
    }
    cards
};

impl Suit {
    pub fn symbol(self) -> &'static str {
        match self {
            Suit::Diamond => "♦",
            Suit::Heart => "♥",
            Suit::Spade => "♠",
            Suit::Club => "♣",
        }
    }
}

impl Rank {
    pub fn symbol(self) -> &'static str {
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

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.symbol())
    }
}

impl Card {
    /// Position of this card in [`ALL_CARDS`], in `0..52`.
    pub fn to_index(self) -> u8 {
        self.suit as u8 * RANKS.len() as u8 + self.rank as u8
    }

    /// Inverse of [`Card::to_index`].
    ///
    /// Panics if `idx` is not below [`NUM_CARDS`].
    pub fn from_index(idx: u8) -> Self {
        ALL_CARDS[usize::from(idx)]
    }
}

/// The error type for the [`FromStr`] instance of [`Card`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardFromStrErr {
    MissingRankOrSuit,
    InvalidRank,
    InvalidSuit,
}

impl std::error::Error for CardFromStrErr {}

impl std::fmt::Display for CardFromStrErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardFromStrErr::MissingRankOrSuit => write!(f, "Card code needs a rank and a suit"),
            CardFromStrErr::InvalidRank => write!(f, "Card code has an unknown rank"),
            CardFromStrErr::InvalidSuit => write!(f, "Card code has an unknown suit"),
        }
    }
}

impl FromStr for Card {
    type Err = CardFromStrErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let suit_char = chars.next_back().ok_or(CardFromStrErr::MissingRankOrSuit)?;
        let rank = match chars.as_str() {
            "" => return Err(CardFromStrErr::MissingRankOrSuit),
            "2" => Rank::Two,
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "T" | "10" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            _ => return Err(CardFromStrErr::InvalidRank),
        };
        let suit = match suit_char {
            '♦' => Suit::Diamond,
            '♥' => Suit::Heart,
            '♠' => Suit::Spade,
            '♣' => Suit::Club,
            _ => return Err(CardFromStrErr::InvalidSuit),
        };
        Ok(Card { rank, suit })
    }
}

/// Shorthand for creating cards from a short string like `"7♥"`.
///
/// The [rank](Rank) comes first (10 may be written `T` or `10`), then
/// the [suit](Suit) as a unicode character (♦, ♥, ♠, or ♣).
///
/// This macro is just calling the [`FromStr`] instance of [`Card`].
/// ```
/// # use memory::{card, Card, Rank, Suit};
/// assert_eq!(
///     card!("T♥"),
///     Card { rank: Rank::Ten, suit: Suit::Heart }
/// );
/// ```
#[macro_export]
macro_rules! card {
    ($rs:literal) => {
        <$crate::Card as std::str::FromStr>::from_str($rs)
            .expect("Invalid card code given to card! macro")
    };
}
// The import is for using the macro in other modules, see https://stackoverflow.com/a/31749071/1726797
#[allow(unused_imports)]
pub(crate) use card;
