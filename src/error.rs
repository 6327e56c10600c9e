//! Error types for the Caravan engine.
//!
//! Illegal-move *rejections* are not errors; the legality checks report
//! those as `PlayResult::Rejected`. `EngineError` covers contract
//! violations at the dispatch boundary: a caller handed the turn machine
//! an action the current state cannot honor. `apply_action` swallows
//! these into no-ops for the scheduled-opponent path; `try_apply_action`
//! surfaces them.

use thiserror::Error;

use crate::cards::CardId;
use crate::core::caravan::CaravanId;
use crate::core::player::PlayerId;
use crate::core::state::GamePhase;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    #[error("action not allowed in the {0} phase")]
    PhaseNotAllowed(GamePhase),

    #[error("it is not {0}'s turn")]
    NotYourTurn(PlayerId),

    #[error("card {0} is not in {1}'s hand")]
    CardNotInHand(CardId, PlayerId),

    #[error("no base card {0} on any caravan")]
    TargetNotFound(CardId),

    #[error("caravan {0} does not belong to {1}")]
    NotYourCaravan(CaravanId, PlayerId),

    #[error("illegal move: {reason}")]
    IllegalMove { reason: &'static str },
}

pub type Result<T> = std::result::Result<T, EngineError>;
