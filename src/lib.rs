//! A blackjack game engine with a five-card win rule, plus a terminal UI.
//!
//! The crate provides a [`Game`] type that manages the full round flow:
//! dealing, player hits, dealer play, and outcome resolution. The variant
//! played here is bet-free: the player auto-wins on a non-busted five-card
//! hand ("five-card charlie"), and a five-card dealer hand beats the player
//! at showdown.
//!
//! # Example
//!
//! ```
//! use twentyone::{Game, GameOptions, GameState};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.new_round();
//! if game.state() == GameState::PlayerTurn {
//!     let _ = game.stand();
//! }
//! assert!(game.outcome().is_some());
//! ```

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod outcome;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::Deck;
pub use error::ActionError;
pub use game::{Game, GameState};
pub use hand::{DealerHand, Hand, HandStatus};
pub use options::GameOptions;
pub use outcome::Outcome;
