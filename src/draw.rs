//! One-shot and cyclic draw sources.
//!
//! Two flavors exist because callers need both "deal until gone" and "draw
//! forever with repetition": [`DrawCursor`] is finite and signals exhaustion
//! through `Option`/partial results, while [`DrawPile`] reshuffles its
//! population on every wrap and never runs out.

extern crate alloc;

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::error::DrawPileError;

/// Outcome of a single draw attempt against a one-shot source.
///
/// Exhaustion is the expected end of a finite source, not a fault; callers
/// branch on this value instead of registering a callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOutcome {
    /// A card was drawn.
    Drawn,
    /// The source was empty; nothing was drawn.
    Exhausted,
}

/// One-shot positional cursor over an owned card sequence.
///
/// Drawing past the end yields nothing and never panics; the cursor simply
/// stays exhausted.
#[derive(Debug, Clone)]
pub struct DrawCursor {
    cards: Vec<Card>,
    position: usize,
}

impl DrawCursor {
    /// Creates a cursor over the given cards.
    #[must_use]
    pub const fn new(cards: Vec<Card>) -> Self {
        Self { cards, position: 0 }
    }

    /// Draws the next card, or `None` once the sequence is spent.
    pub fn draw(&mut self) -> Option<Card> {
        let card = self.cards.get(self.position).copied();
        if card.is_some() {
            self.position += 1;
        }
        card
    }

    /// Draws up to `n` cards.
    ///
    /// Returns fewer than `n` (possibly zero) once the underlying sequence
    /// is exhausted.
    pub fn take(&mut self, n: usize) -> Vec<Card> {
        let mut drawn = Vec::with_capacity(n.min(self.remaining()));
        for _ in 0..n {
            match self.draw() {
                Some(card) => drawn.push(card),
                None => break,
            }
        }
        drawn
    }

    /// Returns the number of cards left to draw.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.position
    }

    /// Returns whether the cursor has been fully consumed.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }
}

/// Cyclic draw source that never exhausts.
///
/// Elements are emitted in a freshly shuffled order; when a pass over the
/// population is spent, a new copy of the population is shuffled and
/// emission continues seamlessly. Over any window of `k * len` consecutive
/// draws each element appears exactly `k` times.
#[derive(Debug, Clone)]
pub struct DrawPile<T> {
    population: Vec<T>,
    buffer: Vec<T>,
    cursor: usize,
    rng: ChaCha8Rng,
}

impl<T: Clone> DrawPile<T> {
    /// Creates a pile over the given population with the given seed.
    ///
    /// # Errors
    ///
    /// Returns [`DrawPileError::EmptyPopulation`] when the population is
    /// empty; a pile with nothing to cycle over is unusable.
    pub fn new(population: Vec<T>, seed: u64) -> Result<Self, DrawPileError> {
        if population.is_empty() {
            return Err(DrawPileError::EmptyPopulation);
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut buffer = population.clone();
        buffer.shuffle(&mut rng);

        Ok(Self {
            population,
            buffer,
            cursor: 0,
            rng,
        })
    }

    /// Draws the next element.
    ///
    /// Reshuffles a fresh copy of the population and restarts whenever the
    /// current pass is spent, so this never runs out.
    pub fn draw(&mut self) -> T {
        if self.cursor >= self.buffer.len() {
            self.buffer = self.population.clone();
            self.buffer.shuffle(&mut self.rng);
            self.cursor = 0;
        }

        let item = self.buffer[self.cursor].clone();
        self.cursor += 1;
        item
    }

    /// Returns the fixed population the pile cycles over.
    #[must_use]
    pub fn population(&self) -> &[T] {
        &self.population
    }
}

impl<T: Clone> Iterator for DrawPile<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        Some(self.draw())
    }
}
