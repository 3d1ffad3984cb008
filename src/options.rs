//! Game configuration options.

/// Configuration options for a blackjack game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use twentyone::GameOptions;
///
/// let options = GameOptions::default()
///     .with_dealer_stands_at(18)
///     .with_five_card_rule(false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Dealer draws while below this hand value (typically 17).
    pub dealer_stands_at: u8,
    /// Whether a non-busted five-card hand wins outright, and a five-card
    /// dealer hand beats the player at showdown.
    pub five_card_rule: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            dealer_stands_at: 17,
            five_card_rule: true,
        }
    }
}

impl GameOptions {
    /// Sets the value the dealer stands at.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_stands_at(18);
    /// assert_eq!(options.dealer_stands_at, 18);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_at(mut self, value: u8) -> Self {
        self.dealer_stands_at = value;
        self
    }

    /// Sets whether the five-card rule is in play.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::GameOptions;
    ///
    /// let options = GameOptions::default().with_five_card_rule(false);
    /// assert_eq!(options.five_card_rule, false);
    /// ```
    #[must_use]
    pub const fn with_five_card_rule(mut self, enabled: bool) -> Self {
        self.five_card_rule = enabled;
        self
    }
}
