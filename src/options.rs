//! Round configuration options.

/// What a round does when the player answers neither "hit" nor "stay".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum InvalidDecision {
    /// End the round with [`RoundError::InvalidDecision`](crate::RoundError::InvalidDecision).
    #[default]
    Abort,
    /// Log the answer and ask again.
    Reprompt,
}

/// Configuration options for a blackjack round.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjround::{InvalidDecision, RoundOptions};
///
/// let options = RoundOptions::default()
///     .with_dealer_draw_limit(16)
///     .with_on_invalid(InvalidDecision::Reprompt);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoundOptions {
    /// The dealer keeps drawing while its total is at most this value,
    /// unless it is already level with or ahead of the player.
    pub dealer_draw_limit: u8,
    /// Largest dealer total at which an Ace still counts as 11.
    pub ace_high_limit: u8,
    /// Handling of unrecognized hit/stay answers.
    pub on_invalid: InvalidDecision,
}

impl Default for RoundOptions {
    fn default() -> Self {
        Self {
            dealer_draw_limit: 17,
            ace_high_limit: 10,
            on_invalid: InvalidDecision::Abort,
        }
    }
}

impl RoundOptions {
    /// Sets the dealer draw limit.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_dealer_draw_limit(16);
    /// assert_eq!(options.dealer_draw_limit, 16);
    /// ```
    #[must_use]
    pub const fn with_dealer_draw_limit(mut self, limit: u8) -> Self {
        self.dealer_draw_limit = limit;
        self
    }

    /// Sets the largest dealer total at which an Ace counts as 11.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_ace_high_limit(9);
    /// assert_eq!(options.ace_high_limit, 9);
    /// ```
    #[must_use]
    pub const fn with_ace_high_limit(mut self, limit: u8) -> Self {
        self.ace_high_limit = limit;
        self
    }

    /// Sets how unrecognized hit/stay answers are handled.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::{InvalidDecision, RoundOptions};
    ///
    /// let options = RoundOptions::default().with_on_invalid(InvalidDecision::Reprompt);
    /// assert_eq!(options.on_invalid, InvalidDecision::Reprompt);
    /// ```
    #[must_use]
    pub const fn with_on_invalid(mut self, policy: InvalidDecision) -> Self {
        self.on_invalid = policy;
        self
    }
}
