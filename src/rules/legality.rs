//! Legality checks for every candidate move.
//!
//! All checks are total and pure. They take the candidate card as an
//! `Option` so a UI can feed its current (possibly absent) selection
//! straight in: `None` yields `Pending`, the neutral "nothing selected"
//! rendering state, which is not a verdict.
//!
//! Callers must see `Allowed` before handing the move to the executor;
//! the turn machine re-runs these checks anyway and turns a violation into
//! a structured rejection.

use serde::Serialize;

use crate::cards::Card;
use crate::core::caravan::Caravan;
use crate::rules::evaluator::{active_suit, direction, Direction};

/// Outcome of a legality check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum PlayResult {
    /// The move is legal.
    Allowed,
    /// The move is illegal, with a reason fit for display.
    Rejected { reason: &'static str },
    /// No card selected yet; render neutral.
    Pending,
}

impl PlayResult {
    /// Check if the move may proceed.
    #[must_use]
    pub const fn is_allowed(&self) -> bool {
        matches!(self, PlayResult::Allowed)
    }

    /// The rejection reason, if rejected.
    #[must_use]
    pub const fn reason(&self) -> Option<&'static str> {
        match self {
            PlayResult::Rejected { reason } => Some(reason),
            PlayResult::Allowed | PlayResult::Pending => None,
        }
    }
}

/// Can this card open a caravan during the setup phase?
///
/// Only value cards (Aces included) may open, and only onto an empty slot.
#[must_use]
pub fn can_play_caravan_setup(card: Option<&Card>, caravan: &Caravan) -> PlayResult {
    let Some(card) = card else {
        return PlayResult::Pending;
    };

    if card.is_face() {
        PlayResult::Rejected {
            reason: "face cards cannot open a caravan",
        }
    } else if !caravan.is_empty() {
        PlayResult::Rejected {
            reason: "caravan already has cards",
        }
    } else {
        PlayResult::Allowed
    }
}

/// Can this card join a caravan as its new last base card?
///
/// Face cards never can. A value card joins an empty caravan freely.
/// Otherwise: a value equal to the current last card is never allowed;
/// matching the caravan's active suit overrides the direction rule; and
/// once a direction is established the value must keep strictly to it.
#[must_use]
pub fn can_play_to_caravan(card: Option<&Card>, caravan: &Caravan) -> PlayResult {
    let Some(card) = card else {
        return PlayResult::Pending;
    };

    if card.is_face() {
        return PlayResult::Rejected {
            reason: "face cards must be attached to a base card",
        };
    }

    let Some(last) = caravan.last() else {
        return PlayResult::Allowed;
    };

    let (Some(new_pip), Some(last_pip)) = (card.pip(), last.pip()) else {
        return PlayResult::Rejected {
            reason: "only value cards join the sequence",
        };
    };

    if new_pip == last_pip {
        return PlayResult::Rejected {
            reason: "equal value in sequence is not allowed",
        };
    }

    if card.suit() == active_suit(caravan) {
        return PlayResult::Allowed;
    }

    match direction(caravan) {
        None => PlayResult::Allowed,
        Some(Direction::Ascending) if new_pip > last_pip => PlayResult::Allowed,
        Some(Direction::Descending) if new_pip < last_pip => PlayResult::Allowed,
        Some(_) => PlayResult::Rejected {
            reason: "value runs against the caravan direction",
        },
    }
}

/// Can this card be attached to that base card?
///
/// Any face card (Queens included) attaches to any existing non-face
/// target; Jack, Queen and Joker differ only in their effects, which the
/// executor resolves.
#[must_use]
pub fn can_attach_card(card: Option<&Card>, target: Option<&Card>) -> PlayResult {
    let Some(card) = card else {
        return PlayResult::Pending;
    };

    if !card.is_face() {
        return PlayResult::Rejected {
            reason: "value cards cannot be attached",
        };
    }

    let Some(target) = target else {
        return PlayResult::Rejected {
            reason: "no target card selected",
        };
    };

    if target.is_face() {
        PlayResult::Rejected {
            reason: "face cards cannot receive attachments",
        }
    } else {
        PlayResult::Allowed
    }
}
