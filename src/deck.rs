//! Deck management: one shuffle per game, head draws, explicit exhaustion.

use crate::cards::Card;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// A shuffled, front-consumed deck of cards.
///
/// The ordering is fixed at construction; the only mutation is removing the
/// head card, so deck length decreases monotonically within a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds a deck as a fresh uniform permutation of `pool`.
    ///
    /// Re-callable on reset; each call yields an independent permutation
    /// drawn from the supplied RNG.
    #[instrument(skip(pool, rng), fields(pool_size = pool.len()))]
    pub fn shuffled<R: Rng>(pool: Vec<Card>, rng: &mut R) -> Self {
        let mut cards = pool;
        cards.shuffle(rng);
        debug!(deck_size = cards.len(), "Deck shuffled");
        Self { cards }
    }

    /// Removes and returns the head card, or `None` once the deck is empty.
    ///
    /// An empty-deck draw has no side effect; callers treat it as the
    /// exhaustion signal, never as an error.
    pub fn draw(&mut self) -> Option<Card> {
        if self.cards.is_empty() {
            debug!("Draw attempted on empty deck");
            return None;
        }
        Some(self.cards.remove(0))
    }

    /// Number of cards remaining.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck is exhausted.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
