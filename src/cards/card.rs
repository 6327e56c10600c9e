//! The card model: suits, ranks, Jokers, lifecycle status, attachments.
//!
//! ## Card identity
//!
//! Every card gets a `CardId` exactly once, at deck construction, and keeps
//! it for its whole life. Cards move between containers (deck, hand,
//! caravan, attachment list) by id; they are never recreated, so the id is
//! safe to use for animation keys in a UI layer.
//!
//! ## Kinds
//!
//! `CardKind` is a tagged variant: a standard card has a suit and a rank,
//! a Joker has neither (each Joker is its own pseudo-suit and value).
//! Capability methods (`is_face`, `pip`, `suit`) are unified across both.

use serde::{Deserialize, Serialize};

/// One of the four standard suits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    /// All four suits, in deck-construction order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        };
        write!(f, "{symbol}")
    }
}

/// Standard card rank. Ace through Ten are value ranks; Jack, Queen and
/// King are face ranks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All thirteen ranks, in deck-construction order.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Check if this is a face rank (Jack, Queen, King).
    #[must_use]
    pub const fn is_face(self) -> bool {
        matches!(self, Rank::Jack | Rank::Queen | Rank::King)
    }

    /// Numeric pip value for value ranks (Ace counts as 1), `None` for faces.
    #[must_use]
    pub const fn pip(self) -> Option<u8> {
        match self {
            Rank::Ace => Some(1),
            Rank::Two => Some(2),
            Rank::Three => Some(3),
            Rank::Four => Some(4),
            Rank::Five => Some(5),
            Rank::Six => Some(6),
            Rank::Seven => Some(7),
            Rank::Eight => Some(8),
            Rank::Nine => Some(9),
            Rank::Ten => Some(10),
            Rank::Jack | Rank::Queen | Rank::King => None,
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rank::Ace => write!(f, "A"),
            Rank::Jack => write!(f, "J"),
            Rank::Queen => write!(f, "Q"),
            Rank::King => write!(f, "K"),
            other => match other.pip() {
                Some(n) => write!(f, "{n}"),
                None => unreachable!("non-face rank without pip"),
            },
        }
    }
}

/// Which of the two Jokers a Joker card is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JokerId {
    One,
    Two,
}

/// What a card is: a standard suit/rank card, or one of the two Jokers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Standard { suit: Suit, rank: Rank },
    Joker(JokerId),
}

/// Unique, stable identifier for a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Allocator for fresh card ids.
///
/// Carried inside the game state so that a restart keeps allocating from
/// where the previous game stopped; ids are never reused.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardIdAlloc {
    next: u32,
}

impl CardIdAlloc {
    /// Create an allocator starting at id 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next card id.
    pub fn next_id(&mut self) -> CardId {
        let id = CardId(self.next);
        self.next += 1;
        id
    }
}

/// Presentation/lifecycle tag on a card.
///
/// `Destroying` cards are logically dead but stay in place until the reap
/// transition runs, so a removal animation can play over them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardStatus {
    #[default]
    Idle,
    Entering,
    Attaching,
    Destroying,
    Discarding,
}

/// A single card.
///
/// `attachments` holds the face cards bound to this card, in attachment
/// order. The relationship is one level deep: an attachment never carries
/// attachments of its own.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub kind: CardKind,
    pub status: CardStatus,
    pub attachments: Vec<Card>,
}

impl Card {
    /// Create a standard card with no attachments, status `Idle`.
    #[must_use]
    pub fn standard(id: CardId, suit: Suit, rank: Rank) -> Self {
        Self {
            id,
            kind: CardKind::Standard { suit, rank },
            status: CardStatus::Idle,
            attachments: Vec::new(),
        }
    }

    /// Create a Joker card with no attachments, status `Idle`.
    #[must_use]
    pub fn joker(id: CardId, which: JokerId) -> Self {
        Self {
            id,
            kind: CardKind::Joker(which),
            status: CardStatus::Idle,
            attachments: Vec::new(),
        }
    }

    /// Check if this is a face card (Jack, Queen, King, or either Joker).
    #[must_use]
    pub fn is_face(&self) -> bool {
        match self.kind {
            CardKind::Standard { rank, .. } => rank.is_face(),
            CardKind::Joker(_) => true,
        }
    }

    /// Check if this is a value card (Ace through Ten).
    #[must_use]
    pub fn is_value(&self) -> bool {
        !self.is_face()
    }

    /// Numeric pip value for value cards, `None` for faces and Jokers.
    #[must_use]
    pub fn pip(&self) -> Option<u8> {
        match self.kind {
            CardKind::Standard { rank, .. } => rank.pip(),
            CardKind::Joker(_) => None,
        }
    }

    /// The card's suit, `None` for Jokers.
    #[must_use]
    pub fn suit(&self) -> Option<Suit> {
        match self.kind {
            CardKind::Standard { suit, .. } => Some(suit),
            CardKind::Joker(_) => None,
        }
    }

    /// The card's rank, `None` for Jokers.
    #[must_use]
    pub fn rank(&self) -> Option<Rank> {
        match self.kind {
            CardKind::Standard { rank, .. } => Some(rank),
            CardKind::Joker(_) => None,
        }
    }

    /// Check if this is a Jack.
    #[must_use]
    pub fn is_jack(&self) -> bool {
        self.rank() == Some(Rank::Jack)
    }

    /// Check if this is a Queen.
    #[must_use]
    pub fn is_queen(&self) -> bool {
        self.rank() == Some(Rank::Queen)
    }

    /// Check if this is a King.
    #[must_use]
    pub fn is_king(&self) -> bool {
        self.rank() == Some(Rank::King)
    }

    /// Check if this is either Joker.
    #[must_use]
    pub fn is_joker(&self) -> bool {
        matches!(self.kind, CardKind::Joker(_))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            CardKind::Standard { suit, rank } => write!(f, "{rank}{suit}"),
            CardKind::Joker(JokerId::One) => write!(f, "Joker 1"),
            CardKind::Joker(JokerId::Two) => write!(f, "Joker 2"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(rank: Rank) -> Card {
        Card::standard(CardId(0), Suit::Spades, rank)
    }

    #[test]
    fn test_face_cards() {
        assert!(card(Rank::Jack).is_face());
        assert!(card(Rank::Queen).is_face());
        assert!(card(Rank::King).is_face());
        assert!(Card::joker(CardId(1), JokerId::One).is_face());
        assert!(Card::joker(CardId(2), JokerId::Two).is_face());

        assert!(!card(Rank::Ace).is_face());
        assert!(!card(Rank::Ten).is_face());
    }

    #[test]
    fn test_value_cards() {
        assert!(card(Rank::Ace).is_value());
        assert!(card(Rank::Five).is_value());
        assert!(!card(Rank::King).is_value());
        assert!(!Card::joker(CardId(1), JokerId::One).is_value());
    }

    #[test]
    fn test_pip_values() {
        assert_eq!(card(Rank::Ace).pip(), Some(1));
        assert_eq!(card(Rank::Two).pip(), Some(2));
        assert_eq!(card(Rank::Ten).pip(), Some(10));
        assert_eq!(card(Rank::Jack).pip(), None);
        assert_eq!(card(Rank::Queen).pip(), None);
        assert_eq!(card(Rank::King).pip(), None);
        assert_eq!(Card::joker(CardId(1), JokerId::Two).pip(), None);
    }

    #[test]
    fn test_joker_has_no_suit_or_rank() {
        let joker = Card::joker(CardId(3), JokerId::One);
        assert_eq!(joker.suit(), None);
        assert_eq!(joker.rank(), None);
        assert!(joker.is_joker());
        assert!(!joker.is_jack());
    }

    #[test]
    fn test_rank_predicates() {
        assert!(card(Rank::Jack).is_jack());
        assert!(card(Rank::Queen).is_queen());
        assert!(card(Rank::King).is_king());
        assert!(!card(Rank::King).is_queen());
        assert!(!card(Rank::Ace).is_joker());
    }

    #[test]
    fn test_id_alloc_is_sequential() {
        let mut alloc = CardIdAlloc::new();
        assert_eq!(alloc.next_id(), CardId(0));
        assert_eq!(alloc.next_id(), CardId(1));
        assert_eq!(alloc.next_id(), CardId(2));
    }

    #[test]
    fn test_display() {
        assert_eq!(Card::standard(CardId(0), Suit::Diamonds, Rank::Seven).to_string(), "7♦");
        assert_eq!(Card::standard(CardId(0), Suit::Spades, Rank::Queen).to_string(), "Q♠");
        assert_eq!(Card::standard(CardId(0), Suit::Hearts, Rank::Ace).to_string(), "A♥");
        assert_eq!(Card::joker(CardId(0), JokerId::Two).to_string(), "Joker 2");
    }

    #[test]
    fn test_default_status_is_idle() {
        assert_eq!(card(Rank::Four).status, CardStatus::Idle);
    }

    #[test]
    fn test_card_serialization() {
        let mut card = Card::standard(CardId(7), Suit::Clubs, Rank::Three);
        card.attachments.push(Card::standard(CardId(8), Suit::Hearts, Rank::King));

        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();

        assert_eq!(card, deserialized);
    }
}
