//! Caravan slots and their card piles.
//!
//! Six fixed slots, three per side. A caravan holds base cards in placement
//! order; that order is what the direction and suit rules read. The active
//! Queen is tracked per caravan as an explicit value so at most one Queen
//! can ever override the caravan's suit.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::cards::{Card, CardId};

/// One of the six caravan slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaravanId {
    PlayerOne,
    PlayerTwo,
    PlayerThree,
    EnemyOne,
    EnemyTwo,
    EnemyThree,
}

impl CaravanId {
    /// All six slots, in enumeration order (player side first).
    pub const ALL: [CaravanId; 6] = [
        CaravanId::PlayerOne,
        CaravanId::PlayerTwo,
        CaravanId::PlayerThree,
        CaravanId::EnemyOne,
        CaravanId::EnemyTwo,
        CaravanId::EnemyThree,
    ];

    /// The side this slot belongs to.
    #[must_use]
    pub const fn owner(self) -> PlayerId {
        match self {
            CaravanId::PlayerOne | CaravanId::PlayerTwo | CaravanId::PlayerThree => PlayerId::Player,
            CaravanId::EnemyOne | CaravanId::EnemyTwo | CaravanId::EnemyThree => PlayerId::Enemy,
        }
    }

    /// The slot this one is scored against.
    #[must_use]
    pub const fn opposing(self) -> CaravanId {
        match self {
            CaravanId::PlayerOne => CaravanId::EnemyOne,
            CaravanId::PlayerTwo => CaravanId::EnemyTwo,
            CaravanId::PlayerThree => CaravanId::EnemyThree,
            CaravanId::EnemyOne => CaravanId::PlayerOne,
            CaravanId::EnemyTwo => CaravanId::PlayerTwo,
            CaravanId::EnemyThree => CaravanId::PlayerThree,
        }
    }

    /// The three slots owned by a side, in slot order.
    #[must_use]
    pub const fn owned_by(owner: PlayerId) -> [CaravanId; 3] {
        match owner {
            PlayerId::Player => [CaravanId::PlayerOne, CaravanId::PlayerTwo, CaravanId::PlayerThree],
            PlayerId::Enemy => [CaravanId::EnemyOne, CaravanId::EnemyTwo, CaravanId::EnemyThree],
        }
    }

    const fn index(self) -> usize {
        match self {
            CaravanId::PlayerOne => 0,
            CaravanId::PlayerTwo => 1,
            CaravanId::PlayerThree => 2,
            CaravanId::EnemyOne => 3,
            CaravanId::EnemyTwo => 4,
            CaravanId::EnemyThree => 5,
        }
    }
}

impl std::fmt::Display for CaravanId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CaravanId::PlayerOne => "p-1",
            CaravanId::PlayerTwo => "p-2",
            CaravanId::PlayerThree => "p-3",
            CaravanId::EnemyOne => "e-1",
            CaravanId::EnemyTwo => "e-2",
            CaravanId::EnemyThree => "e-3",
        };
        write!(f, "{name}")
    }
}

/// One caravan: an ordered pile of base cards.
///
/// `active_queen` names the Queen attachment currently overriding the
/// caravan's suit, if any. It is cleared whenever a new base card lands
/// (the new last card redefines the suit) and whenever its host card is
/// destroyed or discarded.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Caravan {
    pub cards: Vector<Card>,
    pub active_queen: Option<CardId>,
}

impl Caravan {
    /// Create an empty caravan.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the caravan has no base cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of base cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// The current last base card.
    #[must_use]
    pub fn last(&self) -> Option<&Card> {
        self.cards.back()
    }

    /// Look up a base card by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// Look up a base card by id, mutably.
    pub fn card_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.iter_mut().find(|c| c.id == id)
    }

    /// Check if a base card with this id is in the caravan.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.card(id).is_some()
    }
}

/// The six caravan slots of a game, indexable by `CaravanId`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Caravans {
    slots: [Caravan; 6],
}

impl Caravans {
    /// Create six empty caravans.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterate over (id, caravan) pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (CaravanId, &Caravan)> {
        CaravanId::ALL.into_iter().zip(self.slots.iter())
    }

    /// Iterate over (id, caravan) pairs in slot order, mutably.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (CaravanId, &mut Caravan)> {
        CaravanId::ALL.into_iter().zip(self.slots.iter_mut())
    }

    /// Check if every slot has at least one base card.
    #[must_use]
    pub fn all_seeded(&self) -> bool {
        self.slots.iter().all(|c| !c.is_empty())
    }
}

impl std::ops::Index<CaravanId> for Caravans {
    type Output = Caravan;

    fn index(&self, id: CaravanId) -> &Self::Output {
        &self.slots[id.index()]
    }
}

impl std::ops::IndexMut<CaravanId> for Caravans {
    fn index_mut(&mut self, id: CaravanId) -> &mut Self::Output {
        &mut self.slots[id.index()]
    }
}
