//! Core state types: sides, caravans, turn tracking, actions, RNG.
//!
//! Everything here is a value. The root aggregate is `GameState`; the rule
//! functions in `crate::rules` read it and the transitions in
//! `crate::engine` replace it wholesale.

pub mod action;
pub mod caravan;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Action, ActionRecord};
pub use caravan::{Caravan, CaravanId, Caravans};
pub use player::{PlayerId, PlayerState, HAND_SIZE};
pub use rng::{GameRng, GameRngState};
pub use state::{CardLocation, GamePhase, GameState, TurnState};
