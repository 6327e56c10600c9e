//! Legal-move enumeration for the acting player.
//!
//! This is what the automated opponent selects from; it must agree exactly
//! with the per-move legality checks, and its ordering must be stable
//! (hand order, then caravan-slot order, then pile order) so that seeded
//! games replay identically.

use crate::core::caravan::CaravanId;
use crate::core::player::PlayerId;
use crate::core::state::{GamePhase, GameState};
use crate::core::Action;
use crate::rules::legality::{can_attach_card, can_play_caravan_setup, can_play_to_caravan};

/// Every currently legal card play for `player`.
///
/// Setup: value cards onto the player's own empty caravans. Main: value
/// cards onto the player's own caravans, face cards onto any base card on
/// either side of the table. Discards are not enumerated; they are the
/// fallback the acting collaborator may always reach for.
#[must_use]
pub fn legal_actions(state: &GameState, player: PlayerId) -> Vec<Action> {
    let mut actions = Vec::new();

    match state.turn.phase {
        GamePhase::Setup => {
            for card in state.side(player).hand.iter() {
                for caravan_id in CaravanId::owned_by(player) {
                    if can_play_caravan_setup(Some(card), &state.caravans[caravan_id]).is_allowed() {
                        actions.push(Action::PlaceBaseCard {
                            player,
                            card: card.id,
                            caravan: caravan_id,
                        });
                    }
                }
            }
        }
        GamePhase::Main => {
            for card in state.side(player).hand.iter() {
                if card.is_value() {
                    for caravan_id in CaravanId::owned_by(player) {
                        if can_play_to_caravan(Some(card), &state.caravans[caravan_id]).is_allowed() {
                            actions.push(Action::PlaceBaseCard {
                                player,
                                card: card.id,
                                caravan: caravan_id,
                            });
                        }
                    }
                } else {
                    for caravan_id in CaravanId::ALL {
                        for base in state.caravans[caravan_id].cards.iter() {
                            if can_attach_card(Some(card), Some(base)).is_allowed() {
                                actions.push(Action::AttachFace {
                                    player,
                                    card: card.id,
                                    target: base.id,
                                });
                            }
                        }
                    }
                }
            }
        }
        GamePhase::Over => {}
    }

    actions
}
