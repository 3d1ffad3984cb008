//! Game engine and round state management.

use crate::card::Card;
use crate::deck::Deck;
use crate::error::ActionError;
use crate::hand::{DealerHand, Hand, HandStatus};
use crate::options::GameOptions;
use crate::outcome::Outcome;

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for player actions.
    PlayerTurn,
    /// Round has ended and the outcome can be read.
    RoundOver,
}

/// A blackjack game engine that manages the deck, hands, and round flow.
///
/// Rounds run deal → player hits/stands → dealer play → outcome. Use
/// [`GameOptions`] to configure the dealer threshold and the five-card rule.
pub struct Game {
    /// The deck cards are dealt from.
    pub deck: Deck,
    /// Game options.
    pub options: GameOptions,
    /// The player's hand.
    player: Hand,
    /// The dealer's hand.
    dealer: DealerHand,
    /// Current game state.
    state: GameState,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// No cards are dealt until [`Game::new_round`] is called.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{Game, GameOptions};
    ///
    /// let mut game = Game::new(GameOptions::default(), 42);
    /// game.new_round();
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            deck: Deck::new(seed),
            options,
            player: Hand::new(),
            dealer: DealerHand::new(),
            state: GameState::RoundOver,
        }
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer(&self) -> &DealerHand {
        &self.dealer
    }

    /// Clears both hands and deals a new round.
    ///
    /// Two cards go to the player, then two to the dealer; the dealer's
    /// second card is the hole card. If either side holds a natural 21 the
    /// round resolves immediately and the hole card is revealed.
    pub fn new_round(&mut self) {
        self.player.clear();
        self.dealer.clear();

        self.player.add_card(self.deck.draw());
        self.player.add_card(self.deck.draw());

        self.dealer.add_card(self.deck.draw());
        self.dealer.add_card(self.deck.draw());

        if self.player.status() == HandStatus::Blackjack || self.dealer.is_blackjack() {
            self.finish_round();
        } else {
            self.state = GameState::PlayerTurn;
        }
    }

    /// Player action: Hit (draw a card).
    ///
    /// Busting ends the round with a dealer win. Reaching a non-busted
    /// five-card hand ends the round with a player win when the five-card
    /// rule is in play. Otherwise the hand stays active, even at 21.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is in progress.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::RoundOver);
        }

        let card = self.deck.draw();
        self.player.add_card(card);

        if self.player.status() == HandStatus::Bust {
            self.finish_round();
        } else if self.options.five_card_rule && self.player.len() >= 5 {
            // Five-card charlie: the round ends without dealer play.
            self.finish_round();
        }

        Ok(card)
    }

    /// Player action: Stand, letting the dealer play out their hand.
    ///
    /// The dealer reveals the hole card and draws until reaching the stand
    /// threshold or busting. Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is in progress.
    pub fn stand(&mut self) -> Result<Vec<Card>, ActionError> {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::RoundOver);
        }

        self.player.set_status(HandStatus::Stand);
        self.dealer.reveal_hole();

        let mut drawn_cards = Vec::new();

        while self.dealer.value() < self.options.dealer_stands_at {
            let card = self.deck.draw();
            self.dealer.add_card(card);
            drawn_cards.push(card);

            if self.dealer.is_bust() {
                break;
            }
        }

        self.finish_round();

        Ok(drawn_cards)
    }

    /// Derives the round outcome from the final hands.
    ///
    /// Returns `None` while the round is still in progress or before the
    /// first deal. Precedence: player bust, naturals, player five-card,
    /// dealer bust, dealer five-card, then value comparison.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        if self.state != GameState::RoundOver || self.player.is_empty() {
            return None;
        }

        if self.player.status() == HandStatus::Bust {
            return Some(Outcome::DealerWin);
        }

        let player_natural = self.player.status() == HandStatus::Blackjack;
        let dealer_natural = self.dealer.is_blackjack();
        if player_natural && dealer_natural {
            return Some(Outcome::Push);
        }
        if player_natural {
            return Some(Outcome::Blackjack);
        }
        if dealer_natural {
            return Some(Outcome::DealerWin);
        }

        if self.options.five_card_rule && self.player.len() >= 5 {
            return Some(Outcome::PlayerWin);
        }

        if self.dealer.is_bust() {
            return Some(Outcome::PlayerWin);
        }
        if self.options.five_card_rule && self.dealer.len() >= 5 {
            return Some(Outcome::DealerWin);
        }

        let player_value = self.player.value();
        let dealer_value = self.dealer.value();
        if player_value > dealer_value {
            Some(Outcome::PlayerWin)
        } else if player_value < dealer_value {
            Some(Outcome::DealerWin)
        } else {
            Some(Outcome::Push)
        }
    }

    /// Ends the round and reveals the hole card.
    fn finish_round(&mut self) {
        self.dealer.reveal_hole();
        self.state = GameState::RoundOver;
    }
}
