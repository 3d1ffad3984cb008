//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The round is over; no actions can be taken until a new deal.
    #[error("the round is over; deal a new hand first")]
    RoundOver,
}
