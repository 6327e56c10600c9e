//! Player identification and per-side card containers.
//!
//! The game is structurally two-sided: the human side and the automated
//! opponent. `PlayerId` is a closed enum rather than an index so that a
//! side can never be out of range.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId};

/// Hand size drawn at game start and refilled to after each play, while
/// the deck lasts.
pub const HAND_SIZE: usize = 8;

/// One of the two sides of the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    Player,
    Enemy,
}

impl PlayerId {
    /// Both sides, in turn order for the opening turn.
    pub const BOTH: [PlayerId; 2] = [PlayerId::Player, PlayerId::Enemy];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> PlayerId {
        match self {
            PlayerId::Player => PlayerId::Enemy,
            PlayerId::Enemy => PlayerId::Player,
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerId::Player => write!(f, "player"),
            PlayerId::Enemy => write!(f, "enemy"),
        }
    }
}

/// One side's card containers.
///
/// The deck is consumed from the front; the discard pile is append-only.
/// Hand order is placement order and is what makes move enumeration stable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub deck: Vector<Card>,
    pub hand: Vector<Card>,
    pub discard_pile: Vector<Card>,
}

impl PlayerState {
    /// Create a side with the given deck, empty hand and discard pile.
    #[must_use]
    pub fn new(deck: Vector<Card>) -> Self {
        Self {
            deck,
            hand: Vector::new(),
            discard_pile: Vector::new(),
        }
    }

    /// Draw one card from the front of the deck into the hand.
    ///
    /// Returns the drawn card's id, or `None` if the deck is empty (the
    /// hand simply shrinks over time once the deck runs dry).
    pub fn draw(&mut self) -> Option<CardId> {
        let card = self.deck.pop_front()?;
        let id = card.id;
        self.hand.push_back(card);
        Some(id)
    }

    /// Draw the opening hand.
    pub fn draw_opening_hand(&mut self) {
        for _ in 0..HAND_SIZE {
            if self.draw().is_none() {
                break;
            }
        }
    }

    /// Look up a hand card by id.
    #[must_use]
    pub fn hand_card(&self, id: CardId) -> Option<&Card> {
        self.hand.iter().find(|c| c.id == id)
    }

    /// Remove a hand card by id and return it.
    pub fn take_from_hand(&mut self, id: CardId) -> Option<Card> {
        let pos = self.hand.iter().position(|c| c.id == id)?;
        Some(self.hand.remove(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardIdAlloc, Rank, Suit};

    fn test_deck(n: u32) -> Vector<Card> {
        (0..n)
            .map(|i| Card::standard(CardId(i), Suit::Hearts, Rank::Two))
            .collect()
    }

    #[test]
    fn test_opponent() {
        assert_eq!(PlayerId::Player.opponent(), PlayerId::Enemy);
        assert_eq!(PlayerId::Enemy.opponent(), PlayerId::Player);
        assert_eq!(format!("{}", PlayerId::Player), "player");
        assert_eq!(format!("{}", PlayerId::Enemy), "enemy");
    }

    #[test]
    fn test_draw_consumes_deck_front() {
        let mut side = PlayerState::new(test_deck(3));

        assert_eq!(side.draw(), Some(CardId(0)));
        assert_eq!(side.draw(), Some(CardId(1)));
        assert_eq!(side.hand.len(), 2);
        assert_eq!(side.deck.len(), 1);
    }

    #[test]
    fn test_draw_from_empty_deck() {
        let mut side = PlayerState::new(Vector::new());
        assert_eq!(side.draw(), None);
        assert!(side.hand.is_empty());
    }

    #[test]
    fn test_opening_hand_draws_eight() {
        let mut alloc = CardIdAlloc::new();
        let mut rng = crate::core::rng::GameRng::new(9);
        let mut side = PlayerState::new(crate::cards::shuffled_deck(&mut alloc, &mut rng));

        side.draw_opening_hand();

        assert_eq!(side.hand.len(), HAND_SIZE);
        assert_eq!(side.deck.len(), crate::cards::DECK_SIZE - HAND_SIZE);
    }

    #[test]
    fn test_opening_hand_with_short_deck() {
        let mut side = PlayerState::new(test_deck(3));
        side.draw_opening_hand();
        assert_eq!(side.hand.len(), 3);
        assert!(side.deck.is_empty());
    }

    #[test]
    fn test_take_from_hand() {
        let mut side = PlayerState::new(test_deck(3));
        side.draw_opening_hand();

        let taken = side.take_from_hand(CardId(1)).unwrap();
        assert_eq!(taken.id, CardId(1));
        assert_eq!(side.hand.len(), 2);
        assert!(side.hand_card(CardId(1)).is_none());

        assert!(side.take_from_hand(CardId(99)).is_none());
    }

    #[test]
    fn test_hand_keeps_order_after_removal() {
        let mut side = PlayerState::new(test_deck(4));
        side.draw_opening_hand();

        side.take_from_hand(CardId(1));

        let ids: Vec<_> = side.hand.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![CardId(0), CardId(2), CardId(3)]);
    }
}
