//! Text exports of finished sessions.

mod pokerstars;

pub use self::pokerstars::{
    NO_HANDS_MESSAGE, PokerStarsHand, SEAT_STACK, TABLE_NAME, export_session_to_pokerstars,
};
