//! Deck construction and shuffling.

extern crate alloc;

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, JOKER_COUNT, Suit};
use crate::draw::DrawCursor;

/// Creates the canonical sorted deck.
///
/// The order is deterministic: for each suit (clubs, diamonds, spades,
/// hearts) ranks 1 through 13 ascending, followed by the two jokers.
#[must_use]
pub fn sorted_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for suit in [Suit::Clubs, Suit::Diamonds, Suit::Spades, Suit::Hearts] {
        for rank in 1..=13 {
            cards.push(Card::new(suit, rank));
        }
    }
    for _ in 0..JOKER_COUNT {
        cards.push(Card::joker());
    }

    cards
}

/// A 54-card deck holding the canonical order and a shuffled copy.
///
/// The canonical order is fixed for the lifetime of the deck; only the
/// shuffled copy is ever regenerated.
#[derive(Debug, Clone)]
pub struct Deck {
    sorted: Vec<Card>,
    shuffled: Vec<Card>,
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a new deck with the given seed, shuffling once.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let sorted = sorted_deck();
        let mut shuffled = sorted.clone();
        shuffled.shuffle(&mut rng);

        Self {
            sorted,
            shuffled,
            rng,
        }
    }

    /// Regenerates the shuffled copy from the canonical deck.
    ///
    /// Each reshuffle starts from a fresh clone of the canonical order, so
    /// the full 54-card population is restored no matter how far the
    /// previous shuffle was consumed.
    pub fn reshuffle(&mut self) {
        self.shuffled = self.sorted.clone();
        self.shuffled.shuffle(&mut self.rng);
    }

    /// Returns the canonical sorted deck.
    #[must_use]
    pub fn sorted(&self) -> &[Card] {
        &self.sorted
    }

    /// Returns the current shuffled copy.
    #[must_use]
    pub fn shuffled(&self) -> &[Card] {
        &self.shuffled
    }

    /// Returns a one-shot cursor over the current shuffled copy.
    #[must_use]
    pub fn cursor(&self) -> DrawCursor {
        DrawCursor::new(self.shuffled.clone())
    }
}
