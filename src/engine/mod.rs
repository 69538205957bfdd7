//! Table state for one hand at a time.
//!
//! [`GameEngine`] owns the deck, the seats, the pot and the button.
//! [`DeferredQueue`] holds engine operations a controller wants to run
//! later, tagged with the [`HandToken`] of the hand they were meant for.

mod deferred;
mod game_engine;

pub use self::deferred::{Deferred, DeferredQueue, HandToken, Scheduled};
pub use self::game_engine::{GameEngine, TableSnapshot};
