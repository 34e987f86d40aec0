//! A single-deck blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`Round`] type that runs one game between a player
//! and the house: dealing, the player's hit/stay loop, ace valuation, and the
//! dealer's fixed drawing policy. Questions for the player go through a
//! [`Console`] implementation supplied by the caller.
//!
//! # Example
//!
//! ```no_run
//! use bjround::{Round, RoundOptions};
//!
//! let options = RoundOptions::default();
//! let mut round = Round::new(options, 42);
//! round.deal()?;
//! let card = round.hit()?;
//! println!("drew {card}");
//! # Ok::<(), bjround::RoundError>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod console;
pub mod deck;
pub mod error;
pub mod hand;
pub mod options;
pub mod result;
pub mod round;
pub mod score;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use console::Console;
pub use deck::Deck;
pub use error::{CardError, DeckError, InputError, RoundError};
pub use hand::Hand;
pub use options::{InvalidDecision, RoundOptions};
pub use result::RoundOutcome;
pub use round::{Decision, Round, RoundState};
pub use score::{AceResolver, AceValue, HouseAces, PlayerAces, PlayerTotal};
