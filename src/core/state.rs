//! The root game state aggregate.
//!
//! `GameState` owns everything: the turn tracker, both sides' card
//! containers, the six caravans, the action history, and the deterministic
//! RNG. Every transition clones the state and returns a new value; the
//! `im` containers make that clone O(1) per container, so treating the
//! state as an immutable value stays cheap even when an automated opponent
//! enumerates and probes moves.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{Action, ActionRecord};
use super::caravan::{CaravanId, Caravans};
use super::player::{PlayerId, PlayerState};
use super::rng::GameRng;
use crate::cards::{shuffled_deck, CardId, CardIdAlloc};

/// Game phase. `Over` is terminal and accepts only a restart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    Setup,
    Main,
    Over,
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GamePhase::Setup => write!(f, "setup"),
            GamePhase::Main => write!(f, "main"),
            GamePhase::Over => write!(f, "over"),
        }
    }
}

/// Turn tracker.
///
/// Once the game is over, `current_player` freezes at the winner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    pub current_player: PlayerId,
    pub phase: GamePhase,
    pub turn_number: u32,
}

/// Where a card currently lives, from `GameState::find_card`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardLocation {
    /// On a caravan, as a base card.
    Caravan(CaravanId),
    /// In a side's hand.
    Hand(PlayerId),
}

/// The single root aggregate.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub turn: TurnState,
    pub player: PlayerState,
    pub enemy: PlayerState,
    pub caravans: Caravans,
    /// Audit trail of every applied action.
    pub history: Vector<ActionRecord>,
    /// Deterministic RNG; advanced only by shuffling and restart.
    pub rng: GameRng,
    pub(crate) id_alloc: CardIdAlloc,
}

impl GameState {
    /// Deal a fresh game: both decks shuffled, 8-card opening hands drawn,
    /// setup phase, turn 1, the human side to move.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_parts(GameRng::new(seed), CardIdAlloc::new())
    }

    pub(crate) fn from_parts(mut rng: GameRng, mut id_alloc: CardIdAlloc) -> Self {
        let player_deck = shuffled_deck(&mut id_alloc, &mut rng);
        let enemy_deck = shuffled_deck(&mut id_alloc, &mut rng);

        let mut player = PlayerState::new(player_deck);
        let mut enemy = PlayerState::new(enemy_deck);
        player.draw_opening_hand();
        enemy.draw_opening_hand();

        Self {
            turn: TurnState {
                current_player: PlayerId::Player,
                phase: GamePhase::Setup,
                turn_number: 1,
            },
            player,
            enemy,
            caravans: Caravans::new(),
            history: Vector::new(),
            rng,
            id_alloc,
        }
    }

    /// A side's card containers.
    #[must_use]
    pub fn side(&self, id: PlayerId) -> &PlayerState {
        match id {
            PlayerId::Player => &self.player,
            PlayerId::Enemy => &self.enemy,
        }
    }

    /// A side's card containers, mutably.
    pub fn side_mut(&mut self, id: PlayerId) -> &mut PlayerState {
        match id {
            PlayerId::Player => &mut self.player,
            PlayerId::Enemy => &mut self.enemy,
        }
    }

    /// Locate a card by id: caravans first (base cards), then hands.
    #[must_use]
    pub fn find_card(&self, id: CardId) -> Option<CardLocation> {
        for (caravan_id, caravan) in self.caravans.iter() {
            if caravan.contains(id) {
                return Some(CardLocation::Caravan(caravan_id));
            }
        }
        for side in PlayerId::BOTH {
            if self.side(side).hand_card(id).is_some() {
                return Some(CardLocation::Hand(side));
            }
        }
        None
    }

    /// Append an applied action to the audit trail.
    pub(crate) fn record(&mut self, player: PlayerId, action: Action) {
        let turn = self.turn.turn_number;
        self.history.push_back(ActionRecord::new(player, action, turn));
    }
}
