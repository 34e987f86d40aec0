//! Round state types.

use core::str::FromStr;

use alloc::borrow::ToOwned;

use crate::error::RoundError;
use crate::result::RoundOutcome;

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Deck shuffled, nothing dealt yet.
    Ready,
    /// Waiting for the player to hit or stay.
    AwaitingDecision,
    /// The dealer is drawing.
    DealerTurn,
    /// The round was decided.
    Finished(RoundOutcome),
    /// The round ended on an error and cannot continue.
    Aborted,
}

impl RoundState {
    /// Returns whether no further transitions are possible.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Finished(_) | Self::Aborted)
    }
}

/// A player's answer to "hit or stay".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Draw one more card.
    Hit,
    /// Stop drawing and let the dealer play.
    Stay,
}

impl FromStr for Decision {
    type Err = RoundError;

    /// Accepts exactly `hit` or `stay`, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "hit" => Ok(Self::Hit),
            "stay" => Ok(Self::Stay),
            other => Err(RoundError::InvalidDecision(other.to_owned())),
        }
    }
}
