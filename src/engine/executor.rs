//! Move execution: the mechanics of each transition.
//!
//! Every function here operates on a state the turn machine has already
//! cloned; the caller discards that clone if anything returns an error, so
//! a transition either applies completely or not at all. Validation that
//! depends on the phase (which legality check applies, whose turn it is)
//! lives in the turn machine; this module owns the card mechanics and the
//! face-card side effects.
//!
//! Destruction is two-phase: Jacks and Jokers only *mark* cards
//! `Destroying`; the reap transition drops them later, once the
//! collaborator that owns the removal animation says so.

use im::Vector;

use crate::cards::{Card, CardId, CardStatus};
use crate::core::caravan::{Caravan, CaravanId};
use crate::core::player::PlayerId;
use crate::core::state::{CardLocation, GameState};
use crate::error::{EngineError, Result};

/// Play a value card from hand as the caravan's new last base card.
///
/// The new last card redefines the caravan's suit, so any active Queen
/// loses its override. One replacement card is drawn.
pub(crate) fn place_base_card(
    state: &mut GameState,
    player: PlayerId,
    card_id: CardId,
    caravan_id: CaravanId,
) -> Result<()> {
    if caravan_id.owner() != player {
        return Err(EngineError::NotYourCaravan(caravan_id, player));
    }

    let mut card = state
        .side_mut(player)
        .take_from_hand(card_id)
        .ok_or(EngineError::CardNotInHand(card_id, player))?;
    card.status = CardStatus::Entering;

    let caravan = &mut state.caravans[caravan_id];
    caravan.active_queen = None;
    caravan.cards.push_back(card);

    state.side_mut(player).draw();
    Ok(())
}

/// Attach a face card from hand to a base card anywhere on the table,
/// resolving the Jack/Joker/Queen side effects. One replacement card is
/// drawn.
pub(crate) fn attach_face(
    state: &mut GameState,
    player: PlayerId,
    card_id: CardId,
    target_id: CardId,
) -> Result<()> {
    let caravan_id = match state.find_card(target_id) {
        Some(CardLocation::Caravan(id)) => id,
        _ => return Err(EngineError::TargetNotFound(target_id)),
    };

    let card = state
        .side_mut(player)
        .take_from_hand(card_id)
        .ok_or(EngineError::CardNotInHand(card_id, player))?;

    if card.is_jack() {
        attach_jack(&mut state.caravans[caravan_id], target_id, card)?;
    } else if card.is_joker() {
        attach_joker(state, caravan_id, target_id, card)?;
    } else if card.is_queen() {
        attach_queen(&mut state.caravans[caravan_id], target_id, card)?;
    } else {
        attach_plain(&mut state.caravans[caravan_id], target_id, card)?;
    }

    state.side_mut(player).draw();
    Ok(())
}

/// Jack: mark the target, its attachments, and the Jack itself for
/// destruction. Removal waits for the reap.
fn attach_jack(caravan: &mut Caravan, target_id: CardId, mut jack: Card) -> Result<()> {
    jack.status = CardStatus::Destroying;
    let active_queen = caravan.active_queen;

    let base = caravan
        .card_mut(target_id)
        .ok_or(EngineError::TargetNotFound(target_id))?;
    base.status = CardStatus::Destroying;

    let mut hosted_active_queen = false;
    for attachment in base.attachments.iter_mut() {
        if active_queen == Some(attachment.id) {
            hosted_active_queen = true;
        }
        attachment.status = CardStatus::Destroying;
    }
    base.attachments.push(jack);

    if hosted_active_queen {
        caravan.active_queen = None;
    }
    Ok(())
}

/// Joker: the target survives and keeps the Joker; every other base card
/// on the table matching the wipe rule is marked for destruction. An Ace
/// target wipes its whole suit, any other target wipes its value.
fn attach_joker(
    state: &mut GameState,
    caravan_id: CaravanId,
    target_id: CardId,
    mut joker: Card,
) -> Result<()> {
    joker.status = CardStatus::Attaching;

    let (target_pip, target_suit) = {
        let base = state.caravans[caravan_id]
            .card(target_id)
            .ok_or(EngineError::TargetNotFound(target_id))?;
        (base.pip(), base.suit())
    };
    let wipe_by_suit = target_pip == Some(1);

    for (_, caravan) in state.caravans.iter_mut() {
        for card in caravan.cards.iter_mut() {
            // Already-dead cards are left alone so re-marking stays idempotent
            if card.id == target_id || card.status == CardStatus::Destroying {
                continue;
            }
            let matches = if wipe_by_suit {
                card.suit() == target_suit
            } else {
                card.pip() == target_pip
            };
            if matches {
                card.status = CardStatus::Destroying;
                for attachment in card.attachments.iter_mut() {
                    attachment.status = CardStatus::Destroying;
                }
            }
        }

        if let Some(queen_id) = caravan.active_queen {
            let survives = caravan.cards.iter().any(|c| {
                c.status != CardStatus::Destroying
                    && c.attachments.iter().any(|a| a.id == queen_id)
            });
            if !survives {
                caravan.active_queen = None;
            }
        }
    }

    let base = state.caravans[caravan_id]
        .card_mut(target_id)
        .ok_or(EngineError::TargetNotFound(target_id))?;
    base.attachments.push(joker);
    Ok(())
}

/// Queen: attach and take over as the caravan's active Queen, displacing
/// any previous one.
fn attach_queen(caravan: &mut Caravan, target_id: CardId, mut queen: Card) -> Result<()> {
    queen.status = CardStatus::Attaching;
    let queen_id = queen.id;

    let base = caravan
        .card_mut(target_id)
        .ok_or(EngineError::TargetNotFound(target_id))?;
    base.attachments.push(queen);

    caravan.active_queen = Some(queen_id);
    Ok(())
}

/// King (and any face card without a special effect): plain attachment.
fn attach_plain(caravan: &mut Caravan, target_id: CardId, mut face: Card) -> Result<()> {
    face.status = CardStatus::Attaching;
    let base = caravan
        .card_mut(target_id)
        .ok_or(EngineError::TargetNotFound(target_id))?;
    base.attachments.push(face);
    Ok(())
}

/// Move a hand card to the discard pile and draw a replacement.
pub(crate) fn discard_and_draw(state: &mut GameState, player: PlayerId, card_id: CardId) -> Result<()> {
    let mut card = state
        .side_mut(player)
        .take_from_hand(card_id)
        .ok_or(EngineError::CardNotInHand(card_id, player))?;
    card.status = CardStatus::Discarding;

    let side = state.side_mut(player);
    side.discard_pile.push_back(card);
    side.draw();
    Ok(())
}

/// Clear one of the actor's own caravans. Instant: no destruction marking,
/// and the cards are gone for good (not returned to deck or discard).
pub(crate) fn discard_caravan(state: &mut GameState, player: PlayerId, caravan_id: CaravanId) -> Result<()> {
    if caravan_id.owner() != player {
        return Err(EngineError::NotYourCaravan(caravan_id, player));
    }

    let caravan = &mut state.caravans[caravan_id];
    caravan.cards = Vector::new();
    caravan.active_queen = None;
    Ok(())
}

/// Reap every card marked `Destroying`. Idempotent: a reap over a clean
/// table changes nothing.
pub(crate) fn remove_destroyed(state: &mut GameState) {
    for (_, caravan) in state.caravans.iter_mut() {
        caravan.cards = caravan
            .cards
            .iter()
            .filter(|c| c.status != CardStatus::Destroying)
            .cloned()
            .collect();

        for card in caravan.cards.iter_mut() {
            card.attachments.retain(|a| a.status != CardStatus::Destroying);
        }

        if let Some(queen_id) = caravan.active_queen {
            let present = caravan
                .cards
                .iter()
                .any(|c| c.attachments.iter().any(|a| a.id == queen_id));
            if !present {
                caravan.active_queen = None;
            }
        }
    }
}

/// Deal a wholly fresh game. The RNG forks from the old state so the new
/// shuffle differs but stays reproducible; card-id allocation carries over
/// so ids are never reused across restarts.
pub(crate) fn restart(state: &GameState) -> GameState {
    let mut old_rng = state.rng.clone();
    let rng = old_rng.fork();
    GameState::from_parts(rng, state.id_alloc.clone())
}
