//! Pure caravan evaluation: score, direction, active suit, sale status.
//!
//! Nothing here mutates or allocates game state; every function is a fold
//! over one caravan's cards. The UI reads these to render affordances and
//! the turn machine reads them to detect game over, so they must agree
//! with the legality checks at all times.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Suit};
use crate::core::caravan::Caravan;

/// Lowest score at which a caravan can sell.
pub const SALE_MIN: u32 = 21;
/// Highest score at which a caravan can sell.
pub const SALE_MAX: u32 = 26;

/// The direction a caravan's sequence is running.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    /// The opposite direction.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        }
    }
}

/// How a caravan stands relative to the sale band and its opponent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaravanStatus {
    /// No cards placed.
    Empty,
    /// Below the sale band.
    Under,
    /// In band and winning the pair outright.
    Sold,
    /// In band, but so is the opposing caravan.
    Contest,
    /// Above the sale band.
    Overburden,
}

/// Total caravan score.
///
/// Each base card contributes its pip value doubled once per attached
/// King. Jacks, Queens and Jokers contribute nothing directly.
#[must_use]
pub fn score(caravan: &Caravan) -> u32 {
    caravan.cards.iter().map(card_score).sum()
}

fn card_score(card: &Card) -> u32 {
    let Some(pip) = card.pip() else { return 0 };
    let kings = card.attachments.iter().filter(|a| a.is_king()).count() as u32;
    u32::from(pip) << kings
}

/// Direction of the caravan's sequence, `None` while fewer than two base
/// cards are down.
///
/// The raw direction comes from the first two base cards; every Queen
/// attached anywhere in the caravan flips it, so only Queen parity
/// matters. Equal first and second values never arise: the legality
/// checks refuse equal-value placement.
#[must_use]
pub fn direction(caravan: &Caravan) -> Option<Direction> {
    let first = caravan.cards.get(0)?.pip()?;
    let second = caravan.cards.get(1)?.pip()?;

    let raw = if first < second {
        Direction::Ascending
    } else {
        Direction::Descending
    };

    let queens = caravan
        .cards
        .iter()
        .flat_map(|c| c.attachments.iter())
        .filter(|a| a.is_queen())
        .count();

    Some(if queens % 2 == 1 { raw.reversed() } else { raw })
}

/// The suit new base cards can ride in on regardless of direction.
///
/// The active Queen overrides the last base card's suit; with no active
/// Queen the last base card decides. Empty caravans have no suit.
#[must_use]
pub fn active_suit(caravan: &Caravan) -> Option<Suit> {
    if let Some(queen_id) = caravan.active_queen {
        for base in caravan.cards.iter() {
            if let Some(queen) = base.attachments.iter().find(|a| a.id == queen_id) {
                return queen.suit();
            }
        }
    }
    caravan.last().and_then(Card::suit)
}

/// Sale status of a caravan scoring `own` against a rival scoring
/// `opponent`.
#[must_use]
pub fn status(own: u32, opponent: u32) -> CaravanStatus {
    if own == 0 {
        CaravanStatus::Empty
    } else if own < SALE_MIN {
        CaravanStatus::Under
    } else if own > SALE_MAX {
        CaravanStatus::Overburden
    } else if (SALE_MIN..=SALE_MAX).contains(&opponent) {
        CaravanStatus::Contest
    } else {
        CaravanStatus::Sold
    }
}
