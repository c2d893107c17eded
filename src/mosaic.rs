//! Tile selection for the mosaic view.
//!
//! The tile index arrives as a JSON array of filename strings fetched by
//! the embedding UI; this module owns parsing the body and picking the
//! random bounded selection to display. The fetch itself (and what to do
//! when it fails) stays with the caller.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::TileIndexError;

/// Maximum number of tiles shown per draw.
pub const MOSAIC_DRAW_COUNT: usize = 9;

/// Parses a tile index body into a list of tile filenames.
///
/// # Errors
///
/// Returns [`TileIndexError::Malformed`] when the body is not a JSON array
/// of strings. Callers are expected to log the failure and keep an empty
/// display; the game core is unaffected.
///
/// # Example
///
/// ```
/// use survival_blackjack::parse_tile_index;
///
/// let tiles = parse_tile_index(r#"["a.png", "b.png"]"#).unwrap();
/// assert_eq!(tiles, vec!["a.png".to_string(), "b.png".to_string()]);
/// ```
pub fn parse_tile_index(body: &str) -> Result<Vec<String>, TileIndexError> {
    let tiles: Vec<String> = serde_json::from_str(body)?;
    Ok(tiles)
}

/// Returns a freshly shuffled selection of at most [`MOSAIC_DRAW_COUNT`] tiles.
///
/// The input list is left untouched. A list shorter than the draw count
/// yields all of its tiles in random order.
pub fn draw_tiles<R: Rng + ?Sized>(tiles: &[String], rng: &mut R) -> Vec<String> {
    let mut selection = tiles.to_vec();
    selection.shuffle(rng);
    selection.truncate(MOSAIC_DRAW_COUNT);
    selection
}
