use log::debug;

use crate::console::Console;
use crate::error::RoundError;
use crate::result::RoundOutcome;
use crate::score::{HouseAces, dealer_total};

use super::{Round, RoundState, Seat};

impl Round {
    /// Dealer plays their hand according to the house policy.
    ///
    /// The dealer takes their second card, then keeps drawing while their
    /// total is at most the draw limit. The dealer stops and wins as soon as
    /// they are level with or ahead of the player, even below the limit.
    pub(super) fn dealer_play<C: Console + ?Sized>(
        &mut self,
        console: &mut C,
    ) -> Result<RoundOutcome, RoundError> {
        if self.state != RoundState::DealerTurn {
            return Err(RoundError::InvalidState);
        }

        let limit = self.options.dealer_draw_limit;
        let player = self.player.total();

        self.dealer_draw(console)?;
        while self.dealer.total() <= limit {
            if self.dealer.total() >= player {
                debug!("dealer stops at {} against {player}", self.dealer.total());
                return Ok(self.finish(RoundOutcome::DealerWins));
            }
            self.dealer_draw(console)?;
        }

        Ok(self.finish(RoundOutcome::settle(self.dealer.total(), player)))
    }

    /// Draws one card for the dealer and rescores the hand.
    fn dealer_draw<C: Console + ?Sized>(&mut self, console: &mut C) -> Result<(), RoundError> {
        self.draw(Seat::Dealer)?;
        self.score_dealer();
        console.show_hand(&self.dealer, false);
        Ok(())
    }

    fn score_dealer(&mut self) {
        let aces = HouseAces {
            high_limit: self.options.ace_high_limit,
        };
        self.dealer.sort_descending();
        let total = dealer_total(self.dealer.cards(), aces);
        debug!("dealer total {total}");
        self.dealer.set_total(total);
    }
}
