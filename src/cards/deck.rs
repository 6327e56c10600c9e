//! Deck construction: 52 standard cards plus the two Jokers.

use im::Vector;

use super::card::{Card, CardIdAlloc, JokerId, Rank, Suit};
use crate::core::rng::GameRng;

/// Number of cards in a full deck (52 standard + 2 Jokers).
pub const DECK_SIZE: usize = 54;

/// Build an unshuffled deck with fresh ids from `alloc`.
///
/// Produces the 4 suits x 13 ranks, then the two Jokers. Every card starts
/// with status `Idle` and no attachments.
#[must_use]
pub fn fresh_deck(alloc: &mut CardIdAlloc) -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::standard(alloc.next_id(), suit, rank));
        }
    }
    cards.push(Card::joker(alloc.next_id(), JokerId::One));
    cards.push(Card::joker(alloc.next_id(), JokerId::Two));
    cards
}

/// Build a uniformly shuffled deck.
#[must_use]
pub fn shuffled_deck(alloc: &mut CardIdAlloc, rng: &mut GameRng) -> Vector<Card> {
    let mut cards = fresh_deck(alloc);
    rng.shuffle(&mut cards);
    cards.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::card::CardKind;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn test_deck_size_and_composition() {
        let mut alloc = CardIdAlloc::new();
        let deck = fresh_deck(&mut alloc);

        assert_eq!(deck.len(), DECK_SIZE);

        let standard = deck.iter().filter(|c| !c.is_joker()).count();
        let jokers = deck.iter().filter(|c| c.is_joker()).count();
        assert_eq!(standard, 52);
        assert_eq!(jokers, 2);

        // One of each suit/rank combination
        let combos: HashSet<_> = deck
            .iter()
            .filter_map(|c| match c.kind {
                CardKind::Standard { suit, rank } => Some((suit, rank)),
                CardKind::Joker(_) => None,
            })
            .collect();
        assert_eq!(combos.len(), 52);
    }

    #[test]
    fn test_deck_ids_are_unique() {
        let mut alloc = CardIdAlloc::new();
        let deck = fresh_deck(&mut alloc);

        let ids: HashSet<_> = deck.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), DECK_SIZE);
    }

    #[test]
    fn test_two_decks_never_share_ids() {
        let mut alloc = CardIdAlloc::new();
        let first = fresh_deck(&mut alloc);
        let second = fresh_deck(&mut alloc);

        let ids: HashSet<_> = first.iter().chain(second.iter()).map(|c| c.id).collect();
        assert_eq!(ids.len(), DECK_SIZE * 2);
    }

    #[test]
    fn test_shuffle_is_seed_deterministic() {
        let mut alloc1 = CardIdAlloc::new();
        let mut rng1 = GameRng::new(42);
        let deck1 = shuffled_deck(&mut alloc1, &mut rng1);

        let mut alloc2 = CardIdAlloc::new();
        let mut rng2 = GameRng::new(42);
        let deck2 = shuffled_deck(&mut alloc2, &mut rng2);

        assert_eq!(deck1, deck2);
    }

    #[test]
    fn test_different_seeds_shuffle_differently() {
        let mut alloc1 = CardIdAlloc::new();
        let mut rng1 = GameRng::new(1);
        let deck1 = shuffled_deck(&mut alloc1, &mut rng1);

        let mut alloc2 = CardIdAlloc::new();
        let mut rng2 = GameRng::new(2);
        let deck2 = shuffled_deck(&mut alloc2, &mut rng2);

        assert_ne!(deck1, deck2);
    }

    proptest! {
        #[test]
        fn prop_shuffled_deck_keeps_composition(seed in any::<u64>()) {
            let mut alloc = CardIdAlloc::new();
            let mut rng = GameRng::new(seed);
            let deck = shuffled_deck(&mut alloc, &mut rng);

            prop_assert_eq!(deck.len(), DECK_SIZE);
            let ids: HashSet<_> = deck.iter().map(|c| c.id).collect();
            prop_assert_eq!(ids.len(), DECK_SIZE);
            prop_assert_eq!(deck.iter().filter(|c| c.is_joker()).count(), 2);
        }
    }
}
