//! Deck generation, shuffling, and drawing.

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Suit};

/// A shuffled 52-card deck with a seedable random number generator.
///
/// Cards are drawn from the front of the deck. When the deck runs out it is
/// regenerated and reshuffled in place, so [`Deck::draw`] always yields a
/// card.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Remaining cards, stored back-to-front so drawing pops from the end.
    cards: Vec<Card>,
    /// Random number generator used for shuffling.
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a freshly shuffled deck from the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let cards = Self::generate(&mut rng);
        Self { cards, rng }
    }

    /// Generates and shuffles a full 52-card deck.
    fn generate(rng: &mut ChaCha8Rng) -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in 1..=13 {
                cards.push(Card::new(suit, rank));
            }
        }

        cards.shuffle(rng);
        cards
    }

    /// Discards the remaining cards and reshuffles a fresh 52-card deck.
    pub fn reshuffle(&mut self) {
        self.cards = Self::generate(&mut self.rng);
    }

    /// Draws the next card, reshuffling a fresh deck first if empty.
    #[expect(
        clippy::missing_panics_doc,
        reason = "the deck is refilled before popping, so pop always succeeds"
    )]
    pub fn draw(&mut self) -> Card {
        if self.cards.is_empty() {
            self.reshuffle();
        }
        self.cards.pop().expect("deck was just refilled")
    }

    /// Replaces the deck contents so that cards are drawn in slice order.
    ///
    /// Intended for scripted rounds in tests.
    pub fn stack(&mut self, draws: &[Card]) {
        let mut cards = draws.to_vec();
        cards.reverse();
        self.cards = cards;
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the remaining cards, in reverse draw order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
