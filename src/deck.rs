//! The draw pile and the card-collection operations shared with hands.

use alloc::vec::Vec;
use core::fmt;

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{ACE, Card, DECK_SIZE, KING, Suit};
use crate::error::DeckError;
use crate::hand::Hand;

/// An ordered pile of cards. The end of the sequence is the top of the pile.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full 52-card deck in suit-major, rank-minor order.
    ///
    /// ```
    /// use bjround::{DECK_SIZE, Deck};
    ///
    /// let deck = Deck::new();
    /// assert_eq!(deck.len(), DECK_SIZE);
    /// assert_eq!(deck.cards()[0].to_string(), "As");
    /// ```
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in ACE..=KING {
                if let Ok(card) = Card::new(suit, rank) {
                    cards.push(card);
                }
            }
        }
        Self { cards }
    }

    /// Creates an empty pile.
    #[must_use]
    pub const fn empty() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a pile holding exactly `cards`, last card on top.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Returns the cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Puts a card on top of the pile.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes the first card equal to `card`.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::CardNotFound`] if the pile does not hold the card.
    pub fn remove_card(&mut self, card: &Card) -> Result<(), DeckError> {
        let index = self
            .cards
            .iter()
            .position(|c| c == card)
            .ok_or(DeckError::CardNotFound(*card))?;
        self.cards.remove(index);
        Ok(())
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if there are no cards.
    pub fn pop_card(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Empty)
    }

    /// Removes and returns the card at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if there are no cards, or
    /// [`DeckError::IndexOutOfRange`] if `index` is past the end.
    pub fn pop_card_at(&mut self, index: usize) -> Result<Card, DeckError> {
        let len = self.cards.len();
        if len == 0 {
            return Err(DeckError::Empty);
        }
        if index >= len {
            return Err(DeckError::IndexOutOfRange { index, len });
        }
        Ok(self.cards.remove(index))
    }

    /// Shuffles the pile in place with a uniform random permutation.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Sorts the pile in ascending (suit, rank) order.
    pub fn sort(&mut self) {
        self.cards.sort_unstable();
    }

    /// Sorts the pile in descending (suit, rank) order.
    pub fn sort_descending(&mut self) {
        self.cards.sort_unstable_by(|a, b| b.cmp(a));
    }

    /// Moves `count` cards from the top of this pile into `hand`, in pop order.
    ///
    /// Either all `count` cards move or none do.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::NotEnoughCards`] if fewer than `count` cards remain
    /// (or [`DeckError::Empty`] if the pile is empty and `count > 0`).
    pub fn move_cards(&mut self, hand: &mut Hand, count: usize) -> Result<(), DeckError> {
        let available = self.cards.len();
        if count > available {
            if available == 0 {
                return Err(DeckError::Empty);
            }
            return Err(DeckError::NotEnoughCards {
                requested: count,
                available,
            });
        }

        for _ in 0..count {
            let card = self.pop_card()?;
            debug!("{} receives {card}", hand.label());
            hand.add_card(card);
        }
        Ok(())
    }
}

impl fmt::Display for Deck {
    /// Writes the card codes separated by single spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
