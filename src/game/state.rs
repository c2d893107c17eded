//! Turn stage types.

use serde::{Deserialize, Serialize};

/// Stage of a round within the turn state machine.
///
/// Stage values double as the action vocabulary for
/// [`GameState::reduce`](crate::game::GameState::reduce): dispatching a
/// stage asks the reducer to run that stage's transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnStage {
    /// Start screen; resources are dealt here.
    Start,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Player draws one card; resolves back to `PlayerTurn`.
    Hit,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round outcome has been applied to the running scores.
    Score,
    /// The deck ran out; totals are final.
    Endgame,
    /// The session is over.
    Finish,
}
