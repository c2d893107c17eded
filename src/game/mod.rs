//! Game state and round flow.

extern crate alloc;

use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::draw::{DrawCursor, DrawOutcome};
use crate::score::score_hand;

mod actions;
pub mod state;

pub use state::TurnStage;

/// Default number of resource cards dealt at setup.
pub const DEFAULT_RESOURCE_COUNT: usize = 5;

/// The dealer stops drawing once their hand reaches this total.
pub const DEALER_STAND: u32 = 17;

/// An immutable snapshot of one Survival Blackjack session.
///
/// Every transition returns a new snapshot and leaves its input untouched,
/// so a renderer holding an old state always sees a frozen value. The deck
/// cursor is the only thing that advances in place; it is passed into each
/// transition by the caller.
///
/// # Example
///
/// ```
/// use survival_blackjack::{Deck, GameState};
///
/// let deck = Deck::new(42);
/// let mut draw = deck.cursor();
/// let game = GameState::new().setup(&mut draw);
/// assert_eq!(game.resources.len(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Number of resource cards dealt at setup.
    pub resource_count: usize,
    /// Resource cards dealt once at setup; never reshuffled back.
    pub resources: Vec<Card>,
    /// Cards spent in completed rounds.
    pub discard: Vec<Card>,
    /// The player's current hand.
    pub player_hand: Vec<Card>,
    /// The dealer's current hand.
    pub dealer_hand: Vec<Card>,
    /// Rounds won by the player across the session.
    pub player_score: u32,
    /// Rounds won by the dealer across the session.
    pub dealer_score: u32,
    /// Consecutive rounds lost by the player.
    pub losing_streak: u32,
    /// Current stage of the round.
    pub stage: TurnStage,
}

impl GameState {
    /// Creates a fresh session: empty hands, zero scores, start stage.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            resource_count: DEFAULT_RESOURCE_COUNT,
            resources: Vec::new(),
            discard: Vec::new(),
            player_hand: Vec::new(),
            dealer_hand: Vec::new(),
            player_score: 0,
            dealer_score: 0,
            losing_streak: 0,
            stage: TurnStage::Start,
        }
    }

    /// Sets the number of resource cards dealt at setup.
    ///
    /// # Example
    ///
    /// ```
    /// use survival_blackjack::GameState;
    ///
    /// let game = GameState::new().with_resource_count(8);
    /// assert_eq!(game.resource_count, 8);
    /// ```
    #[must_use]
    pub const fn with_resource_count(mut self, count: usize) -> Self {
        self.resource_count = count;
        self
    }

    /// Returns a copy of the state with the given stage.
    #[must_use]
    pub fn set_stage(&self, stage: TurnStage) -> Self {
        let mut next = self.clone();
        next.stage = stage;
        next
    }

    /// Deals the resource cards from the cursor.
    ///
    /// Drawing fewer than `resource_count` cards is not an error; the
    /// resources are simply whatever the cursor could still provide.
    #[must_use]
    pub fn setup(&self, draw: &mut DrawCursor) -> Self {
        let mut next = self.clone();
        next.resources = draw.take(self.resource_count);
        next
    }

    /// Deals two cards to the player, then two to the dealer.
    ///
    /// Both hands come from the same shared cursor, player first, so the
    /// deals never overlap.
    #[must_use]
    pub fn start_turn(&self, draw: &mut DrawCursor) -> Self {
        let mut next = self.clone();
        next.player_hand = draw.take(2);
        next.dealer_hand = draw.take(2);
        next
    }

    /// Draws one card into the player's hand.
    ///
    /// On exhaustion the hand is unchanged and the outcome says so.
    #[must_use]
    pub fn player_draw(&self, draw: &mut DrawCursor) -> (Self, DrawOutcome) {
        match draw.draw() {
            Some(card) => {
                let mut next = self.clone();
                next.player_hand.push(card);
                (next, DrawOutcome::Drawn)
            }
            None => (self.clone(), DrawOutcome::Exhausted),
        }
    }

    /// Draws one card into the dealer's hand.
    ///
    /// On exhaustion the hand is unchanged and the outcome says so.
    #[must_use]
    pub fn dealer_draw(&self, draw: &mut DrawCursor) -> (Self, DrawOutcome) {
        match draw.draw() {
            Some(card) => {
                let mut next = self.clone();
                next.dealer_hand.push(card);
                (next, DrawOutcome::Drawn)
            }
            None => (self.clone(), DrawOutcome::Exhausted),
        }
    }

    /// Dealer draws until their hand totals [`DEALER_STAND`] or more.
    ///
    /// Stops early, without error, the moment a draw fails due to
    /// exhaustion.
    #[must_use]
    pub fn dealer_draw_to_17(&self, draw: &mut DrawCursor) -> Self {
        let mut state = self.clone();

        while score_hand(&state.dealer_hand) < DEALER_STAND {
            let (next, outcome) = state.dealer_draw(draw);
            state = next;
            if outcome == DrawOutcome::Exhausted {
                break;
            }
        }

        state
    }

    /// Scores the round and moves both hands to the discard pile.
    ///
    /// Bust checks come before the comparison: a busted player loses even
    /// against a busted dealer. A tie with neither side bust awards no
    /// point. The losing streak grows with each dealer point and resets on
    /// a player point.
    #[must_use]
    pub fn score_turn(&self) -> Self {
        let mut next = self.clone();
        let player_total = score_hand(&next.player_hand);
        let dealer_total = score_hand(&next.dealer_hand);

        if player_total > 21 {
            next.dealer_score += 1;
            next.losing_streak += 1;
        } else if dealer_total > 21 {
            next.player_score += 1;
            next.losing_streak = 0;
        } else if player_total > dealer_total {
            next.player_score += 1;
            next.losing_streak = 0;
        } else if dealer_total > player_total {
            next.dealer_score += 1;
            next.losing_streak += 1;
        }

        next.discard.append(&mut next.player_hand);
        next.discard.append(&mut next.dealer_hand);

        next
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
