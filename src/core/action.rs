//! Action representation and history records.
//!
//! Actions are the only way the outside world changes a game. The engine
//! never interprets an action twice: it is validated against the current
//! state, applied, and recorded. A scheduled opponent action that went
//! stale in the meantime simply fails validation.

use serde::{Deserialize, Serialize};

use super::caravan::CaravanId;
use super::player::PlayerId;
use crate::cards::CardId;

/// A complete game action.
///
/// The first four variants are player moves and carry the acting side; the
/// last two are a housekeeping transition (triggered by the collaborator
/// that owns the destruction animation) and a whole-game reset.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Play a value card from hand as a new base card.
    PlaceBaseCard {
        player: PlayerId,
        card: CardId,
        caravan: CaravanId,
    },
    /// Attach a face card from hand to a base card on any caravan.
    AttachFace {
        player: PlayerId,
        card: CardId,
        target: CardId,
    },
    /// Move a hand card to the discard pile and draw a replacement.
    DiscardAndDraw { player: PlayerId, card: CardId },
    /// Clear one of the acting side's own caravans.
    DiscardCaravan {
        player: PlayerId,
        caravan: CaravanId,
    },
    /// Reap every card marked `Destroying`.
    RemoveDestroyedCards,
    /// Replace the whole game with a freshly dealt one.
    RestartGame,
}

impl Action {
    /// The side a player move acts for; `None` for housekeeping and restart.
    #[must_use]
    pub fn actor(&self) -> Option<PlayerId> {
        match self {
            Action::PlaceBaseCard { player, .. }
            | Action::AttachFace { player, .. }
            | Action::DiscardAndDraw { player, .. }
            | Action::DiscardCaravan { player, .. } => Some(*player),
            Action::RemoveDestroyedCards | Action::RestartGame => None,
        }
    }
}

/// A recorded, applied action.
///
/// The history is the engine's audit trail: it is what replay and
/// debugging tooling consume.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The side the action was applied for.
    pub player: PlayerId,
    /// The action itself.
    pub action: Action,
    /// Turn number at the moment of application.
    pub turn: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, turn: u32) -> Self {
        Self { player, action, turn }
    }
}
