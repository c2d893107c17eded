//! Card types and deck constants.

use serde::{Deserialize, Serialize};

/// Card suit.
///
/// The two jokers in the deck carry their own suit so that a card is fully
/// described by `(rank, suit)` alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Joker (rank 0 only).
    Joker,
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// The rank of the card (0 = Joker, 1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 0..=13
    /// are accepted but may yield non-standard results when scoring a hand.
    /// Rank 0 and [`Suit::Joker`] imply each other; use [`Card::joker`] to
    /// build a joker that upholds that pairing.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { rank, suit }
    }

    /// Creates a joker.
    #[must_use]
    pub const fn joker() -> Self {
        Self {
            rank: 0,
            suit: Suit::Joker,
        }
    }

    /// Returns whether this card is an ace.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        self.rank == 1
    }

    /// Returns whether this card is a joker.
    #[must_use]
    pub const fn is_joker(&self) -> bool {
        self.rank == 0
    }
}

/// Number of cards per deck: 13 ranks across 4 suits plus 2 jokers.
pub const DECK_SIZE: usize = 54;

/// Number of jokers per deck.
pub const JOKER_COUNT: usize = 2;
