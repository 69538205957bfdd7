//! Everything that is specific to a Texas Hold'em table: seats, blinds,
//! betting, streets, the pot and the showdown signal. These are plain
//! functions over plain data; the `engine` module holds the state.

/// Smallest table that can be dealt.
pub const MIN_PLAYERS: usize = 2;
/// Largest table that can be dealt.
pub const MAX_PLAYERS: usize = 9;
/// Smallest big blind a table can play.
pub const MIN_BIG_BLIND: u32 = 1;
/// Largest big blind a table can play. A full table raising on every
/// street stays well inside `u32` chips.
pub const MAX_BIG_BLIND: u32 = 1_000_000;

/// Betting math for the single hero action per street.
mod betting;
pub use self::betting::{
    Action, bet_for_action, can_hero_check, hero_from_players, min_raise, table_current_bet,
};

/// Chen formula starting hand scores.
mod chen;
pub use self::chen::{Recommendation, chen_score, recommend_action};

/// Dealing hole cards, blinds and community cards.
mod dealing;
pub use self::dealing::{
    Community, MIN_SMALL_BLIND, SMALL_BLIND_FACTOR, check_big_blind, check_seat_count, deal_flop_from_deck,
    deal_players, deal_river_from_deck, deal_turn_from_deck, rotate_to_small_blind_first,
    small_blind_from_big_blind,
};

mod player;
pub use self::player::Player;

/// Seat roles relative to the button.
mod position;
pub use self::position::{Role, SeatAssignment, assign_roles_and_positions, label_for_pos};

/// Moving street bets into the pot.
mod settlement;
pub use self::settlement::{collect_bets, reset_bets, settle_bets_into_pot, total_pot};

mod showdown;
pub use self::showdown::{compute_hero_result, did_hero_win};

/// The street state machine.
mod street;
pub use self::street::{Street, StreetSettings, next_street};
