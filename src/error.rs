//! Error types for draw sources and the tile index.

use thiserror::Error;

/// Errors that can occur when constructing a cyclic draw pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawPileError {
    /// The population is empty.
    #[error("draw pile requires a non-empty population")]
    EmptyPopulation,
}

/// Errors that can occur while reading a tile index.
#[derive(Debug, Error)]
pub enum TileIndexError {
    /// The body is not a JSON array of strings.
    #[error("malformed tile index: {0}")]
    Malformed(#[from] serde_json::Error),
}
