//! The turn state machine: dispatch, phase gating, turn advance, game over.
//!
//! `try_apply_action` is the single entry point for every transition. It
//! validates the action against the *current* state, clones the state,
//! runs the executor, records the action, and advances the turn. That
//! re-validation is what makes scheduled opponent moves safe: an action
//! chosen against an earlier state is simply rejected if the world moved
//! on, and `apply_action` turns the rejection into a no-op.

use crate::core::action::Action;
use crate::core::caravan::CaravanId;
use crate::core::player::PlayerId;
use crate::core::state::{CardLocation, GamePhase, GameState};
use crate::engine::executor;
use crate::error::{EngineError, Result};
use crate::rules::evaluator::{score, status, CaravanStatus};
use crate::rules::legality::{can_attach_card, can_play_caravan_setup, can_play_to_caravan, PlayResult};

/// Apply an action, returning the resulting state or a structured
/// rejection. The input state is never touched.
pub fn try_apply_action(state: &GameState, action: &Action) -> Result<GameState> {
    gate_phase(state.turn.phase, action)?;

    match action {
        Action::RestartGame => Ok(executor::restart(state)),

        Action::RemoveDestroyedCards => {
            let mut next = state.clone();
            executor::remove_destroyed(&mut next);
            next.record(state.turn.current_player, action.clone());
            finish_if_over(&mut next);
            Ok(next)
        }

        Action::PlaceBaseCard { player, card, caravan } => {
            ensure_turn(state, *player)?;
            let card_ref = state
                .side(*player)
                .hand_card(*card)
                .ok_or(EngineError::CardNotInHand(*card, *player))?;
            let verdict = match state.turn.phase {
                GamePhase::Setup => can_play_caravan_setup(Some(card_ref), &state.caravans[*caravan]),
                _ => can_play_to_caravan(Some(card_ref), &state.caravans[*caravan]),
            };
            allow(verdict)?;

            let mut next = state.clone();
            executor::place_base_card(&mut next, *player, *card, *caravan)?;
            next.record(*player, action.clone());
            advance_after_move(&mut next);
            Ok(next)
        }

        Action::AttachFace { player, card, target } => {
            ensure_turn(state, *player)?;
            let card_ref = state
                .side(*player)
                .hand_card(*card)
                .ok_or(EngineError::CardNotInHand(*card, *player))?;
            let target_ref = match state.find_card(*target) {
                Some(CardLocation::Caravan(id)) => state.caravans[id].card(*target),
                _ => None,
            }
            .ok_or(EngineError::TargetNotFound(*target))?;
            allow(can_attach_card(Some(card_ref), Some(target_ref)))?;

            let mut next = state.clone();
            executor::attach_face(&mut next, *player, *card, *target)?;
            next.record(*player, action.clone());
            advance_after_move(&mut next);
            Ok(next)
        }

        Action::DiscardAndDraw { player, card } => {
            ensure_turn(state, *player)?;

            let mut next = state.clone();
            executor::discard_and_draw(&mut next, *player, *card)?;
            next.record(*player, action.clone());
            advance_after_move(&mut next);
            Ok(next)
        }

        Action::DiscardCaravan { player, caravan } => {
            ensure_turn(state, *player)?;

            let mut next = state.clone();
            executor::discard_caravan(&mut next, *player, *caravan)?;
            next.record(*player, action.clone());
            // A side transition: the actor keeps the turn
            finish_if_over(&mut next);
            Ok(next)
        }
    }
}

/// Apply an action, treating any rejection as a no-op.
///
/// This is the dispatch path for scheduled opponent moves: if the action
/// went stale between selection and dispatch, the state comes back
/// unchanged and the scheduler is free to pick again.
#[must_use]
pub fn apply_action(state: &GameState, action: &Action) -> GameState {
    try_apply_action(state, action).unwrap_or_else(|_| state.clone())
}

/// The winner, if either side currently holds two sold caravans.
#[must_use]
pub fn is_game_over(state: &GameState) -> Option<PlayerId> {
    PlayerId::BOTH.into_iter().find(|&side| sold_count(state, side) >= 2)
}

fn sold_count(state: &GameState, side: PlayerId) -> usize {
    CaravanId::owned_by(side)
        .into_iter()
        .filter(|&id| {
            let own = score(&state.caravans[id]);
            let opponent = score(&state.caravans[id.opposing()]);
            status(own, opponent) == CaravanStatus::Sold
        })
        .count()
}

fn gate_phase(phase: GamePhase, action: &Action) -> Result<()> {
    let allowed = match phase {
        GamePhase::Setup => matches!(
            action,
            Action::PlaceBaseCard { .. } | Action::RemoveDestroyedCards | Action::RestartGame
        ),
        GamePhase::Main => true,
        GamePhase::Over => matches!(action, Action::RestartGame),
    };
    if allowed {
        Ok(())
    } else {
        Err(EngineError::PhaseNotAllowed(phase))
    }
}

fn ensure_turn(state: &GameState, player: PlayerId) -> Result<()> {
    if state.turn.current_player == player {
        Ok(())
    } else {
        Err(EngineError::NotYourTurn(player))
    }
}

fn allow(verdict: PlayResult) -> Result<()> {
    match verdict {
        PlayResult::Allowed => Ok(()),
        PlayResult::Rejected { reason } => Err(EngineError::IllegalMove { reason }),
        PlayResult::Pending => Err(EngineError::IllegalMove { reason: "no card selected" }),
    }
}

/// Advance after a turn-consuming move: possibly leave setup, check game
/// over, then hand the turn to the other side.
fn advance_after_move(next: &mut GameState) {
    match next.turn.phase {
        GamePhase::Setup => {
            if next.caravans.all_seeded() {
                next.turn.phase = GamePhase::Main;
            }
            next.turn.current_player = next.turn.current_player.opponent();
            next.turn.turn_number += 1;
        }
        GamePhase::Main => {
            if let Some(winner) = is_game_over(next) {
                next.turn.phase = GamePhase::Over;
                next.turn.current_player = winner;
            } else {
                next.turn.current_player = next.turn.current_player.opponent();
                next.turn.turn_number += 1;
            }
        }
        GamePhase::Over => {}
    }
}

/// Game-over check for side transitions that never flip the turn.
fn finish_if_over(next: &mut GameState) {
    if next.turn.phase == GamePhase::Main {
        if let Some(winner) = is_game_over(next) {
            next.turn.phase = GamePhase::Over;
            next.turn.current_player = winner;
        }
    }
}
