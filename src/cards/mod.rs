//! Card system: the card model and deck construction.
//!
//! ## Key Types
//!
//! - `CardId`: Stable unique identifier for a card
//! - `CardKind`: Tagged variant (standard suit/rank vs Joker)
//! - `CardStatus`: Presentation/lifecycle tag
//! - `Card`: A card with its attachment list
//! - `CardIdAlloc`: Fresh-id allocator, carried across restarts

pub mod card;
pub mod deck;

pub use card::{Card, CardId, CardIdAlloc, CardKind, CardStatus, JokerId, Rank, Suit};
pub use deck::{fresh_deck, shuffled_deck, DECK_SIZE};
