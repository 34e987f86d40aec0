//! Round outcome types.

use core::fmt;

use crate::score::BLACKJACK;

/// How a finished round was decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundOutcome {
    /// The player went over 21 and the dealer never played.
    PlayerBust,
    /// The dealer went over 21.
    DealerBust,
    /// The dealer ended level with or ahead of the player.
    DealerWins,
    /// The player ended ahead of the dealer.
    PlayerWins,
}

impl RoundOutcome {
    /// Decides a round from the final totals once the dealer has stopped
    /// drawing. Ties go to the dealer.
    ///
    /// ```
    /// use bjround::RoundOutcome;
    ///
    /// assert_eq!(RoundOutcome::settle(22, 12), RoundOutcome::DealerBust);
    /// assert_eq!(RoundOutcome::settle(19, 19), RoundOutcome::DealerWins);
    /// assert_eq!(RoundOutcome::settle(18, 20), RoundOutcome::PlayerWins);
    /// ```
    #[must_use]
    pub const fn settle(dealer_total: u8, player_total: u8) -> Self {
        if dealer_total > BLACKJACK {
            Self::DealerBust
        } else if dealer_total >= player_total {
            Self::DealerWins
        } else {
            Self::PlayerWins
        }
    }

    /// Returns whether the player won.
    #[must_use]
    pub const fn player_won(self) -> bool {
        matches!(self, Self::DealerBust | Self::PlayerWins)
    }
}

impl fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::PlayerBust => "BUST\nDealer Wins",
            Self::DealerBust => "Dealer Bust\n Player Wins",
            Self::DealerWins => "Dealer Wins",
            Self::PlayerWins => "Player Wins",
        })
    }
}
