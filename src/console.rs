//! The player-facing collaborator a round talks to.

use alloc::string::String;

use crate::error::InputError;
use crate::hand::Hand;

/// Asks the player questions and shows them the table.
///
/// Implementations block until an answer is available. Returning
/// [`InputError::Closed`] ends the round.
pub trait Console {
    /// Asks a free-text question and returns the answer.
    ///
    /// # Errors
    ///
    /// Returns an error if no answer can be obtained.
    fn ask_text(&mut self, prompt: &str) -> Result<String, InputError>;

    /// Asks for an integer. `Ok(None)` means the answer was not a number.
    ///
    /// # Errors
    ///
    /// Returns an error if no answer can be obtained.
    fn ask_int(&mut self, prompt: &str) -> Result<Option<i64>, InputError> {
        Ok(self.ask_text(prompt)?.trim().parse().ok())
    }

    /// Called whenever a hand changes. `hole_hidden` is set while the dealer's
    /// second card has not been dealt yet.
    fn show_hand(&mut self, hand: &Hand, hole_hidden: bool) {
        let _ = (hand, hole_hidden);
    }
}

impl<C: Console + ?Sized> Console for &mut C {
    fn ask_text(&mut self, prompt: &str) -> Result<String, InputError> {
        (**self).ask_text(prompt)
    }

    fn ask_int(&mut self, prompt: &str) -> Result<Option<i64>, InputError> {
        (**self).ask_int(prompt)
    }

    fn show_hand(&mut self, hand: &Hand, hole_hidden: bool) {
        (**self).show_hand(hand, hole_hidden);
    }
}
