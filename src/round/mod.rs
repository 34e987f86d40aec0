//! The round state machine.

use log::{debug, error, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{DeckError, RoundError};
use crate::hand::Hand;
use crate::options::RoundOptions;
use crate::result::RoundOutcome;

mod actions;
mod dealer;
pub mod state;

pub use state::{Decision, RoundState};

/// Cards needed for the opening deal: one to the dealer, two to the player.
const OPENING_CARDS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Seat {
    Player,
    Dealer,
}

/// One game of blackjack between a player and the house, from shuffle to
/// winner.
///
/// The round owns the draw pile and both hands. Cards only ever move between
/// them, so the three collections always hold the same cards they started
/// with.
#[derive(Debug, Clone)]
pub struct Round {
    /// The draw pile.
    deck: Deck,
    /// The player's hand.
    player: Hand,
    /// The dealer's hand.
    dealer: Hand,
    /// Rule options.
    options: RoundOptions,
    /// Current state.
    state: RoundState,
}

impl Round {
    /// Creates a round over a full deck shuffled with the given seed.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use bjround::{Round, RoundOptions};
    ///
    /// let round = Round::new(RoundOptions::default(), 42);
    /// assert_eq!(round.cards_remaining(), 52);
    /// ```
    #[must_use]
    pub fn new(options: RoundOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::new();
        deck.shuffle(&mut rng);
        debug!("shuffled deck with seed {seed}");
        Self::from_deck(options, deck)
    }

    /// Creates a round that draws from `deck` as given, top card first.
    #[must_use]
    pub fn from_deck(options: RoundOptions, deck: Deck) -> Self {
        Self {
            deck,
            player: Hand::new("Player"),
            dealer: Hand::new("Dealer"),
            options,
            state: RoundState::Ready,
        }
    }

    /// Deals the opening cards: one to the dealer, then two to the player.
    ///
    /// # Errors
    ///
    /// Returns an error if the round was already dealt, or if fewer than three
    /// cards remain (in which case nothing is dealt and the round aborts).
    pub fn deal(&mut self) -> Result<(), RoundError> {
        self.ensure_state(RoundState::Ready)?;

        let available = self.deck.len();
        if available < OPENING_CARDS {
            return Err(self.abort(
                DeckError::NotEnoughCards {
                    requested: OPENING_CARDS,
                    available,
                }
                .into(),
            ));
        }

        self.deck.move_cards(&mut self.dealer, 1)?;
        self.deck.move_cards(&mut self.player, 2)?;
        info!("dealt: dealer {} / player {}", self.dealer.pile(), self.player.pile());

        self.state = RoundState::AwaitingDecision;
        Ok(())
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the outcome once the round is finished.
    #[must_use]
    pub const fn outcome(&self) -> Option<RoundOutcome> {
        match self.state {
            RoundState::Finished(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Returns the rule options.
    #[must_use]
    pub const fn options(&self) -> &RoundOptions {
        &self.options
    }

    /// Returns the draw pile.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the number of cards left in the draw pile.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the number of cards across the pile and both hands.
    #[must_use]
    pub fn cards_in_play(&self) -> usize {
        self.deck.len() + self.player.len() + self.dealer.len()
    }

    fn ensure_state(&self, expected: RoundState) -> Result<(), RoundError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(RoundError::InvalidState)
        }
    }

    /// Draws the top card into a hand. An empty pile aborts the round.
    fn draw(&mut self, seat: Seat) -> Result<Card, RoundError> {
        let card = match self.deck.pop_card() {
            Ok(card) => card,
            Err(err) => return Err(self.abort(err.into())),
        };

        let hand = match seat {
            Seat::Player => &mut self.player,
            Seat::Dealer => &mut self.dealer,
        };
        hand.add_card(card);
        debug!("{} draws {card}", hand.label());
        Ok(card)
    }

    fn finish(&mut self, outcome: RoundOutcome) -> RoundOutcome {
        info!(
            "round over: player {} / dealer {}: {outcome:?}",
            self.player.total(),
            self.dealer.total(),
        );
        self.state = RoundState::Finished(outcome);
        outcome
    }

    fn abort(&mut self, err: RoundError) -> RoundError {
        error!("round aborted: {err}");
        self.state = RoundState::Aborted;
        err
    }
}
