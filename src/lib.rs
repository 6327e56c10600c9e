//! # caravan
//!
//! A deterministic rules engine for the Caravan card game: two sides build
//! three competing ordered piles of value cards and bend them with face
//! cards (Jacks destroy, Queens flip direction and suit, Kings double,
//! Jokers mass-destroy by rank or suit). A side wins the round by holding
//! two sold caravans out of three.
//!
//! ## Design Principles
//!
//! 1. **State as value**: Every transition returns a new `GameState`;
//!    nothing mutates across a transition boundary. Persistent `im`
//!    containers keep the clone cheap.
//!
//! 2. **Deterministic**: A seed pins the decks; everything downstream is
//!    pure. Same seed plus same action list always replays to the same
//!    state.
//!
//! 3. **Enumerable**: `legal_actions` produces the complete, stably
//!    ordered move set for a side, which is exactly what an automated
//!    opponent selects from.
//!
//! 4. **Re-validated dispatch**: Every action is checked against the state
//!    it is applied to, not the state it was chosen against. A stale
//!    scheduled move is a structured rejection, or a silent no-op through
//!    `apply_action`.
//!
//! ## Modules
//!
//! - `cards`: card model, deck construction
//! - `core`: sides, caravans, turn tracking, actions, RNG, the root state
//! - `rules`: pure evaluation, legality checks, move enumeration
//! - `engine`: the move executor and turn state machine
//! - `error`: contract-violation taxonomy

pub mod cards;
pub mod core;
pub mod engine;
pub mod error;
pub mod rules;

// Re-export commonly used types
pub use crate::cards::{
    fresh_deck, shuffled_deck, Card, CardId, CardIdAlloc, CardKind, CardStatus, JokerId, Rank,
    Suit, DECK_SIZE,
};

pub use crate::core::{
    Action, ActionRecord, Caravan, CaravanId, Caravans, CardLocation, GamePhase, GameRng,
    GameRngState, GameState, PlayerId, PlayerState, TurnState, HAND_SIZE,
};

pub use crate::rules::{
    active_suit, can_attach_card, can_play_caravan_setup, can_play_to_caravan, direction,
    legal_actions, score, status, CaravanStatus, Direction, PlayResult, SALE_MAX, SALE_MIN,
};

pub use crate::engine::{apply_action, is_game_over, try_apply_action};

pub use crate::error::{EngineError, Result};
