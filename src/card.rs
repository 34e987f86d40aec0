//! Card types and their symbolic rendering.

use core::fmt;

use crate::error::CardError;

/// Card suit.
///
/// The discriminant is the suit index used for ordering, so `Spades` sorts
/// lowest and `Clubs` highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Spades (index 0).
    Spades = 0,
    /// Hearts (index 1).
    Hearts = 1,
    /// Diamonds (index 2).
    Diamonds = 2,
    /// Clubs (index 3).
    Clubs = 3,
}

impl Suit {
    /// All suits in index order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    /// Returns the suit with the given index.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidSuit`] if `index` is not in `0..=3`.
    pub const fn from_index(index: u8) -> Result<Self, CardError> {
        match index {
            0 => Ok(Self::Spades),
            1 => Ok(Self::Hearts),
            2 => Ok(Self::Diamonds),
            3 => Ok(Self::Clubs),
            _ => Err(CardError::InvalidSuit(index)),
        }
    }

    /// Returns the suit index.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the single-character suit code.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Spades => 's',
            Self::Hearts => 'h',
            Self::Diamonds => 'd',
            Self::Clubs => 'c',
        }
    }

    /// Start of this suit's row in the Unicode Playing Cards block.
    const fn glyph_base(self) -> u32 {
        match self {
            Self::Spades => 0x1F0A0,
            Self::Hearts => 0x1F0B0,
            Self::Diamonds => 0x1F0C0,
            Self::Clubs => 0x1F0D0,
        }
    }
}

/// Rank of an Ace.
pub const ACE: u8 = 1;
/// Rank of a King, the highest rank.
pub const KING: u8 = 13;

const RANK_CODES: [char; 13] = [
    'A', '2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K',
];

/// A playing card.
///
/// Cards order by suit first, then by rank, which is the key the scorer
/// sorts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    suit: Suit,
    rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] if `rank` is not in `1..=13`.
    pub const fn new(suit: Suit, rank: u8) -> Result<Self, CardError> {
        if rank < ACE || rank > KING {
            return Err(CardError::InvalidRank(rank));
        }
        Ok(Self { suit, rank })
    }

    /// Creates a card from raw suit and rank indices.
    ///
    /// # Errors
    ///
    /// Returns an error if either index is out of range.
    pub const fn from_indices(suit: u8, rank: u8) -> Result<Self, CardError> {
        match Suit::from_index(suit) {
            Ok(suit) => Self::new(suit, rank),
            Err(err) => Err(err),
        }
    }

    /// The suit of the card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    #[must_use]
    pub const fn rank(&self) -> u8 {
        self.rank
    }

    /// Returns whether the card is an Ace.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        self.rank == ACE
    }

    /// Returns the Unicode playing-card glyph for this card.
    ///
    /// ```
    /// use bjround::{Card, Suit};
    ///
    /// let card = Card::new(Suit::Spades, 1)?;
    /// assert_eq!(card.glyph(), '\u{1F0A1}');
    /// # Ok::<(), bjround::CardError>(())
    /// ```
    #[must_use]
    pub fn glyph(&self) -> char {
        // The block has a Knight between Jack and Queen.
        let offset = if self.rank >= 12 {
            u32::from(self.rank) + 1
        } else {
            u32::from(self.rank)
        };
        char::from_u32(self.suit.glyph_base() + offset).unwrap_or('\u{1F0A0}')
    }
}

impl fmt::Display for Card {
    /// Writes the two-character code, e.g. `As`, `Th`, `Kc`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = RANK_CODES[usize::from(self.rank - 1)];
        write!(f, "{rank}{}", self.suit.code())
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
