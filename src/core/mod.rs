//! This is the core module. It exports the cards, the deck and hand
//! classification. Nothing in here knows about seats, blinds or streets.

/// card.rs has value and suit.
mod card;
/// Re-export Card, Value, and Suit
pub use self::card::{Card, Suit, Value};

/// Deck is the 52 card deck, dealt from the end.
mod deck;
/// Export `Deck` and the generic shuffle.
pub use self::deck::{Deck, shuffle};

/// Hand category classification.
mod rank;
/// Export the trait and the results.
pub use self::rank::{HandCategory, Rankable, STRAIGHTS, evaluate_hand};

mod error;
pub use self::error::TrainerError;
