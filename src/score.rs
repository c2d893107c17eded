//! Blackjack hand scoring.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Scores a single card.
///
/// Number cards score face value, all face cards score 10, the joker scores
/// 0, and an ace scores its baseline 1 (upgrading to 11 happens in
/// [`score_hand`]).
#[must_use]
pub fn score_card(card: Card) -> u32 {
    u32::from(card.rank.min(10))
}

/// Scores a complete hand.
///
/// Aces are evaluated after the rest of the hand, keeping the relative
/// order of the non-ace cards. Each ace counts 11 while the running total
/// is 10 or less, and 1 afterwards. The total is returned raw; values over
/// 21 are a bust but not an error.
///
/// # Example
///
/// ```
/// use survival_blackjack::{Card, Suit, score_hand};
///
/// let hand = [Card::new(Suit::Clubs, 1), Card::new(Suit::Diamonds, 12)];
/// assert_eq!(score_hand(&hand), 21);
/// ```
#[must_use]
pub fn score_hand(cards: &[Card]) -> u32 {
    let mut ordered: Vec<Card> = Vec::with_capacity(cards.len());
    ordered.extend(cards.iter().copied().filter(|card| !card.is_ace()));
    ordered.extend(cards.iter().copied().filter(|card| card.is_ace()));

    ordered.into_iter().fold(0, |sum, card| {
        if card.is_ace() && sum <= 10 {
            sum + 11
        } else {
            sum + score_card(card)
        }
    })
}
