//! Player and dealer hand representation.

use alloc::string::String;
use core::fmt;

use crate::card::Card;
use crate::deck::Deck;

/// A labelled hand of cards with its last computed point total.
///
/// The total is not kept in sync with the cards: it reflects the most recent
/// scoring pass, and adding a card leaves it untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    pile: Deck,
    /// Display label, e.g. `Player` or `Dealer`.
    label: String,
    /// Points from the last scoring pass.
    total: u8,
}

impl Hand {
    /// Creates an empty hand with the given label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            pile: Deck::empty(),
            label: label.into(),
            total: 0,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.pile.add_card(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        self.pile.cards()
    }

    /// Returns the hand's cards as a pile.
    #[must_use]
    pub const fn pile(&self) -> &Deck {
        &self.pile
    }

    /// Returns the display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the total from the last scoring pass (0 before any).
    #[must_use]
    pub const fn total(&self) -> u8 {
        self.total
    }

    /// Records a freshly computed total.
    pub(crate) const fn set_total(&mut self, total: u8) {
        self.total = total;
    }

    /// Sorts the cards in descending (suit, rank) order.
    pub fn sort_descending(&mut self) {
        self.pile.sort_descending();
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pile.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pile.is_empty()
    }

    /// Returns the Unicode glyphs of the cards, separated by spaces.
    #[must_use]
    pub fn glyphs(&self) -> String {
        let mut out = String::with_capacity(self.len() * 5);
        for (i, card) in self.cards().iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push(card.glyph());
        }
        out
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.label, self.pile)
    }
}
