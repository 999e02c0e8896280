//! Card types, token parsing, and baccarat point values.

use core::fmt;
use core::str::FromStr;

use crate::error::CardError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All four suits.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Parses a suit character. Uppercase input is accepted.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'c' | 'C' => Some(Self::Clubs),
            'd' | 'D' => Some(Self::Diamonds),
            'h' | 'H' => Some(Self::Hearts),
            's' | 'S' => Some(Self::Spades),
            _ => None,
        }
    }

    /// Returns the canonical lowercase suit character.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Clubs => 'c',
            Self::Diamonds => 'd',
            Self::Hearts => 'h',
            Self::Spades => 's',
        }
    }
}

/// Card rank.
///
/// Ten is written `T` in token form so that every rank is a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Rank {
    /// All thirteen ranks.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Parses a rank character. Ranks are uppercase-only.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '2' => Some(Self::Two),
            '3' => Some(Self::Three),
            '4' => Some(Self::Four),
            '5' => Some(Self::Five),
            '6' => Some(Self::Six),
            '7' => Some(Self::Seven),
            '8' => Some(Self::Eight),
            '9' => Some(Self::Nine),
            'T' => Some(Self::Ten),
            'J' => Some(Self::Jack),
            'Q' => Some(Self::Queen),
            'K' => Some(Self::King),
            'A' => Some(Self::Ace),
            _ => None,
        }
    }

    /// Returns the single-character rank symbol (`T` for ten).
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Two => '2',
            Self::Three => '3',
            Self::Four => '4',
            Self::Five => '5',
            Self::Six => '6',
            Self::Seven => '7',
            Self::Eight => '8',
            Self::Nine => '9',
            Self::Ten => 'T',
            Self::Jack => 'J',
            Self::Queen => 'Q',
            Self::King => 'K',
            Self::Ace => 'A',
        }
    }

    /// Returns the baccarat point value of this rank.
    ///
    /// Aces count 1, twos through nines count their face value, and tens
    /// and face cards count 0.
    #[must_use]
    pub const fn points(self) -> u8 {
        match self {
            Self::Ten | Self::Jack | Self::Queen | Self::King => 0,
            Self::Ace => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
        }
    }
}

/// A playing card.
///
/// Cards are parsed from two-character tokens: a rank symbol followed by a
/// suit letter, e.g. `"Ac"` or `"Td"`. The suit is case-insensitive.
///
/// # Example
///
/// ```
/// use bacrs::Card;
///
/// let card: Card = "Td".parse().unwrap();
/// assert_eq!(card.points(), 0);
/// assert_eq!(card.to_string(), "10d");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Returns the baccarat point value of this card.
    #[must_use]
    pub const fn points(self) -> u8 {
        self.rank.points()
    }
}

impl FromStr for Card {
    type Err = CardError;

    /// Parses a two-character token. Characters past the suit are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let rank = chars
            .next()
            .and_then(Rank::from_char)
            .ok_or(CardError::RankInvalid)?;
        let suit = chars
            .next()
            .and_then(Suit::from_char)
            .ok_or(CardError::SuitInvalid)?;
        Ok(Self { rank, suit })
    }
}

impl fmt::Display for Card {
    /// Writes the canonical notation, with ten expanded to `10`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rank == Rank::Ten {
            write!(f, "10{}", self.suit.as_char())
        } else {
            write!(f, "{}{}", self.rank.as_char(), self.suit.as_char())
        }
    }
}
