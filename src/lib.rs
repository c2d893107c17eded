//! Rules and state core for Survival Blackjack, with optional `no_std` support.
//!
//! Survival Blackjack is a solitaire oracle played against a dealer over a
//! single 54-card deck (52 cards plus two jokers). The crate provides the
//! deterministic core: deck construction and shuffling, one-shot and cyclic
//! draw sources, hand scoring, and the immutable [`GameState`] with its
//! reducer, leaving rendering and input to the embedding UI. The mosaic
//! tile picker that ships alongside the game lives in [`mosaic`].
//!
//! # Example
//!
//! ```
//! use survival_blackjack::{Deck, GameState, TurnStage};
//!
//! let deck = Deck::new(42);
//! let mut draw = deck.cursor();
//!
//! let game = GameState::new().reduce(TurnStage::Start, &mut draw);
//! let game = game.reduce(TurnStage::PlayerTurn, &mut draw);
//! assert_eq!(game.resources.len(), 5);
//! assert_eq!(game.player_hand.len(), 2);
//! assert_eq!(game.dealer_hand.len(), 2);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod draw;
pub mod error;
pub mod game;
pub mod mosaic;
pub mod score;

// Re-export main types
pub use card::{Card, DECK_SIZE, JOKER_COUNT, Suit};
pub use deck::{Deck, sorted_deck};
pub use draw::{DrawCursor, DrawOutcome, DrawPile};
pub use error::{DrawPileError, TileIndexError};
pub use game::{DEALER_STAND, DEFAULT_RESOURCE_COUNT, GameState, TurnStage};
pub use mosaic::{MOSAIC_DRAW_COUNT, draw_tiles, parse_tile_index};
pub use score::{score_card, score_hand};
