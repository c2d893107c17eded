use crate::draw::{DrawCursor, DrawOutcome};

use super::{GameState, TurnStage};

impl GameState {
    /// Applies one action to the state, returning the next snapshot.
    ///
    /// Actions share the [`TurnStage`] vocabulary: dispatching a stage runs
    /// that stage's transition.
    ///
    /// - `Start` deals the resource cards and shows the start screen.
    /// - `PlayerTurn` deals both opening hands and hands control to the
    ///   player.
    /// - `Hit` draws one card for the player and resolves back to
    ///   `PlayerTurn`. Against an exhausted cursor the hand is unchanged
    ///   and the game jumps straight to `Endgame`, skipping dealer play and
    ///   scoring: a round that loses its deck mid-hit cannot be completed.
    /// - `DealerTurn` plays the dealer out to 17.
    /// - `Score` applies the round outcome and clears both hands to the
    ///   discard pile.
    ///
    /// Any other action is the identity transition; the input state comes
    /// back unchanged.
    #[must_use]
    pub fn reduce(&self, action: TurnStage, draw: &mut DrawCursor) -> Self {
        match action {
            TurnStage::Start => {
                let mut next = self.setup(draw);
                next.stage = TurnStage::Start;
                next
            }
            TurnStage::PlayerTurn => {
                let mut next = self.start_turn(draw);
                next.stage = TurnStage::PlayerTurn;
                next
            }
            TurnStage::Hit => {
                let (mut next, outcome) = self.player_draw(draw);
                next.stage = match outcome {
                    DrawOutcome::Drawn => TurnStage::PlayerTurn,
                    DrawOutcome::Exhausted => TurnStage::Endgame,
                };
                next
            }
            TurnStage::DealerTurn => {
                let mut next = self.dealer_draw_to_17(draw);
                next.stage = TurnStage::DealerTurn;
                next
            }
            TurnStage::Score => {
                let mut next = self.score_turn();
                next.stage = TurnStage::Score;
                next
            }
            TurnStage::Endgame | TurnStage::Finish => self.clone(),
        }
    }
}
