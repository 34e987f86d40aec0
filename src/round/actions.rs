use log::{debug, warn};

use crate::card::Card;
use crate::console::Console;
use crate::error::RoundError;
use crate::options::InvalidDecision;
use crate::result::RoundOutcome;
use crate::score::{AceResolver, PlayerAces, PlayerTotal, player_total};

use super::{Decision, Round, RoundState, Seat};

const DECISION_PROMPT: &str = "Would you like to hit or stay?\n";

impl Round {
    /// Player action: Hit (draw one card).
    ///
    /// The player's total is not recomputed until they stay.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not waiting for a decision, or if the
    /// deck is empty (which aborts the round).
    pub fn hit(&mut self) -> Result<Card, RoundError> {
        self.ensure_state(RoundState::AwaitingDecision)?;
        self.draw(Seat::Player)
    }

    /// Player action: Stay, asking the player through `console` how to count
    /// each Ace, then playing out the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not waiting for a decision, the
    /// console fails, or the deck runs out during the dealer's turn.
    pub fn stay<C: Console + ?Sized>(
        &mut self,
        console: &mut C,
    ) -> Result<RoundOutcome, RoundError> {
        let total = self.score_player(&mut PlayerAces::new(&mut *console))?;
        self.end_player_turn(total, console)
    }

    /// Player action: Stay, valuing the player's Aces with `aces` instead of
    /// asking through the console.
    ///
    /// # Errors
    ///
    /// Same as [`Round::stay`].
    pub fn stay_with<R, C>(
        &mut self,
        aces: &mut R,
        console: &mut C,
    ) -> Result<RoundOutcome, RoundError>
    where
        R: AceResolver + ?Sized,
        C: Console + ?Sized,
    {
        let total = self.score_player(aces)?;
        self.end_player_turn(total, console)
    }

    /// Applies one decision. Returns the outcome if it ended the round.
    ///
    /// # Errors
    ///
    /// Same as [`Round::hit`] and [`Round::stay`].
    pub fn apply<C: Console + ?Sized>(
        &mut self,
        decision: Decision,
        console: &mut C,
    ) -> Result<Option<RoundOutcome>, RoundError> {
        match decision {
            Decision::Hit => {
                self.hit()?;
                console.show_hand(&self.player, false);
                Ok(None)
            }
            Decision::Stay => self.stay(console).map(Some),
        }
    }

    /// Plays the round to completion through `console`.
    ///
    /// Deals first if nothing has been dealt, then asks "hit or stay" until
    /// the player stays.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::InvalidDecision`] for an unrecognized answer when
    /// the options say to abort, and any error from dealing, drawing or the
    /// console. Every error leaves the round [`RoundState::Aborted`].
    pub fn play<C: Console + ?Sized>(
        &mut self,
        console: &mut C,
    ) -> Result<RoundOutcome, RoundError> {
        if self.state == RoundState::Ready {
            self.deal()?;
            console.show_hand(&self.dealer, true);
            console.show_hand(&self.player, false);
        }

        loop {
            match self.state {
                RoundState::AwaitingDecision => {}
                RoundState::Finished(outcome) => return Ok(outcome),
                _ => return Err(RoundError::InvalidState),
            }

            let answer = match console.ask_text(DECISION_PROMPT) {
                Ok(answer) => answer,
                Err(err) => return Err(self.abort(err.into())),
            };

            match answer.parse::<Decision>() {
                Ok(decision) => {
                    debug!("player chose {decision:?}");
                    if let Some(outcome) = self.apply(decision, console)? {
                        return Ok(outcome);
                    }
                }
                Err(err) => match self.options.on_invalid {
                    InvalidDecision::Reprompt => warn!("{err}, asking again"),
                    InvalidDecision::Abort => return Err(self.abort(err)),
                },
            }
        }
    }

    fn score_player<R: AceResolver + ?Sized>(
        &mut self,
        aces: &mut R,
    ) -> Result<PlayerTotal, RoundError> {
        self.ensure_state(RoundState::AwaitingDecision)?;

        self.player.sort_descending();
        let total = match player_total(self.player.cards(), aces) {
            Ok(total) => total,
            Err(err) => return Err(self.abort(err.into())),
        };
        self.player.set_total(total.points());
        Ok(total)
    }

    fn end_player_turn<C: Console + ?Sized>(
        &mut self,
        total: PlayerTotal,
        console: &mut C,
    ) -> Result<RoundOutcome, RoundError> {
        if total.is_bust() {
            return Ok(self.finish(RoundOutcome::PlayerBust));
        }
        self.state = RoundState::DealerTurn;
        self.dealer_play(console)
    }
}
