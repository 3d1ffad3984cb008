//! Round outcome types.

/// Result of a round once it is over.
///
/// Derived from the final hands; never stored by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player wins (dealer busts, player has a five-card hand, or player has
    /// the higher value).
    PlayerWin,
    /// Dealer wins (player busts, dealer has a five-card hand, or dealer has
    /// the higher value).
    DealerWin,
    /// Push (tie).
    Push,
    /// Player has a natural 21 on the initial deal.
    Blackjack,
}
