//! Hand scoring and ace valuation.
//!
//! Scoring walks the cards in the order given. Callers that want the house
//! ordering sort the hand descending by (suit, rank) first, which is what
//! [`Round`](crate::Round) does before every pass.

use core::convert::Infallible;

use log::{debug, warn};

use crate::card::Card;
use crate::console::Console;
use crate::error::InputError;

/// Highest total that does not bust.
pub const BLACKJACK: u8 = 21;

/// Points an Ace is worth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AceValue {
    /// Ace counted low.
    One = 1,
    /// Ace counted high.
    Eleven = 11,
}

impl AceValue {
    /// Returns the point value.
    #[must_use]
    pub const fn points(self) -> u8 {
        self as u8
    }
}

impl TryFrom<i64> for AceValue {
    type Error = i64;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::One),
            11 => Ok(Self::Eleven),
            other => Err(other),
        }
    }
}

/// Decides what each Ace is worth while a hand is being scored.
pub trait AceResolver {
    /// Values an Ace given the points counted before it.
    ///
    /// # Errors
    ///
    /// Returns an error if the decision needs input that cannot be obtained.
    fn resolve(&mut self, total_so_far: u8) -> Result<AceValue, InputError>;
}

impl<F: FnMut(u8) -> AceValue> AceResolver for F {
    fn resolve(&mut self, total_so_far: u8) -> Result<AceValue, InputError> {
        Ok(self(total_so_far))
    }
}

/// The dealer's automatic policy: an Ace is high while the total so far is at
/// most `high_limit`, low otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HouseAces {
    /// Largest total at which an Ace still counts as 11.
    pub high_limit: u8,
}

impl Default for HouseAces {
    fn default() -> Self {
        Self { high_limit: 10 }
    }
}

impl HouseAces {
    /// Values an Ace given the points counted before it.
    #[must_use]
    pub const fn value(self, total_so_far: u8) -> AceValue {
        if total_so_far <= self.high_limit {
            AceValue::Eleven
        } else {
            AceValue::One
        }
    }
}

impl AceResolver for HouseAces {
    fn resolve(&mut self, total_so_far: u8) -> Result<AceValue, InputError> {
        Ok(self.value(total_so_far))
    }
}

/// Lets the player choose each Ace's value through a [`Console`].
///
/// Answers other than 1 or 11 are rejected and asked again.
pub struct PlayerAces<C> {
    console: C,
}

impl<C: Console> PlayerAces<C> {
    /// Wraps a console.
    pub const fn new(console: C) -> Self {
        Self { console }
    }
}

impl<C: Console> AceResolver for PlayerAces<C> {
    fn resolve(&mut self, total_so_far: u8) -> Result<AceValue, InputError> {
        let mut answer = self.console.ask_int("11 or 1 \n")?;
        loop {
            match answer.map(AceValue::try_from) {
                Some(Ok(value)) => {
                    debug!("player counts ace as {} at {total_so_far}", value.points());
                    return Ok(value);
                }
                Some(Err(other)) => warn!("invalid ace choice {other}, asking again"),
                None => warn!("ace choice was not a number, asking again"),
            }
            answer = self.console.ask_int("11 or 1\n")?;
        }
    }
}

/// Returns the points a non-Ace rank is worth (J/Q/K count 10).
#[must_use]
pub const fn rank_value(rank: u8) -> u8 {
    match rank {
        2..=10 => rank,
        11..=13 => 10,
        _ => 0,
    }
}

fn accumulate<E>(
    cards: &[Card],
    mut ace: impl FnMut(u8) -> Result<AceValue, E>,
) -> Result<u8, E> {
    let mut total: u8 = 0;
    for card in cards {
        let points = if card.is_ace() {
            ace(total)?.points()
        } else {
            rank_value(card.rank())
        };
        total = total.saturating_add(points);
    }
    Ok(total)
}

/// Totals `cards` in order, asking `aces` for every Ace met along the way.
///
/// # Errors
///
/// Returns an error if the resolver cannot value an Ace.
pub fn hand_total<R: AceResolver + ?Sized>(
    cards: &[Card],
    aces: &mut R,
) -> Result<u8, InputError> {
    accumulate(cards, |total| aces.resolve(total))
}

/// Totals a dealer hand with the automatic ace policy.
///
/// ```
/// use bjround::score::{HouseAces, dealer_total};
/// use bjround::{Card, Suit};
///
/// let cards = [Card::new(Suit::Clubs, 1)?, Card::new(Suit::Spades, 9)?];
/// assert_eq!(dealer_total(&cards, HouseAces::default()), 20);
/// # Ok::<(), bjround::CardError>(())
/// ```
#[must_use]
pub fn dealer_total(cards: &[Card], aces: HouseAces) -> u8 {
    match accumulate(cards, |total| Ok::<_, Infallible>(aces.value(total))) {
        Ok(total) => total,
        Err(never) => match never {},
    }
}

/// A scored player hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerTotal {
    /// At most 21 points.
    Stand(u8),
    /// Over 21 points.
    Bust(u8),
}

impl PlayerTotal {
    /// Classifies a raw total.
    #[must_use]
    pub const fn classify(total: u8) -> Self {
        if total > BLACKJACK {
            Self::Bust(total)
        } else {
            Self::Stand(total)
        }
    }

    /// Returns the points regardless of classification.
    #[must_use]
    pub const fn points(self) -> u8 {
        match self {
            Self::Stand(points) | Self::Bust(points) => points,
        }
    }

    /// Returns whether the hand busted.
    #[must_use]
    pub const fn is_bust(self) -> bool {
        matches!(self, Self::Bust(_))
    }
}

/// Totals a player hand and classifies it.
///
/// # Errors
///
/// Returns an error if an Ace choice cannot be obtained.
pub fn player_total<R: AceResolver + ?Sized>(
    cards: &[Card],
    aces: &mut R,
) -> Result<PlayerTotal, InputError> {
    let total = hand_total(cards, aces)?;
    debug!("player total {total}");
    Ok(PlayerTotal::classify(total))
}
