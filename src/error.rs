//! Error types for cards, decks, input and round operations.

use alloc::string::String;

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur when building a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Suit index outside `0..=3`.
    #[error("invalid suit index {0}")]
    InvalidSuit(u8),
    /// Rank outside `1..=13`.
    #[error("invalid rank {0}")]
    InvalidRank(u8),
}

/// Errors that can occur when taking cards out of a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The deck has no cards left.
    #[error("the deck is empty")]
    Empty,
    /// More cards were requested than the deck holds.
    #[error("requested {requested} cards but only {available} remain")]
    NotEnoughCards {
        /// Number of cards requested.
        requested: usize,
        /// Number of cards in the deck.
        available: usize,
    },
    /// Position past the end of the deck.
    #[error("index {index} out of range for a deck of {len} cards")]
    IndexOutOfRange {
        /// Requested position.
        index: usize,
        /// Number of cards in the deck.
        len: usize,
    },
    /// The card is not in the deck.
    #[error("card {0} is not in the deck")]
    CardNotFound(Card),
}

/// Errors reported by a [`Console`](crate::console::Console).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    /// No more answers will arrive (e.g. end of input).
    #[error("input closed")]
    Closed,
    /// The input source failed.
    #[error("input unavailable")]
    Unavailable,
}

/// Errors that can occur while playing a round.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Invalid round state for this operation.
    #[error("invalid round state for this operation")]
    InvalidState,
    /// A draw failed.
    #[error(transparent)]
    Deck(#[from] DeckError),
    /// The console failed to provide an answer.
    #[error(transparent)]
    Input(#[from] InputError),
    /// The player answered something other than "hit" or "stay".
    #[error("unrecognized decision {0:?}")]
    InvalidDecision(String),
}
