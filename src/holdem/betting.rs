use std::fmt;

use super::player::Player;

/// The single action the hero takes on a street.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Action {
    Check,
    Call,
    Fold,
    Raise,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Check => f.write_str("check"),
            Action::Call => f.write_str("call"),
            Action::Fold => f.write_str("fold"),
            Action::Raise => f.write_str("raise"),
        }
    }
}

/// The amount to be called. This is the maximum anyone has wagered on
/// the current street.
pub fn table_current_bet(players: &[Player]) -> u32 {
    players.iter().map(|p| p.bet).max().unwrap_or(0)
}

pub fn hero_from_players(players: &[Player]) -> Option<&Player> {
    players.iter().find(|p| p.is_hero)
}

/// The hero can check when nobody has bet more than they have.
pub fn can_hero_check(players: &[Player], hero: Option<&Player>) -> bool {
    match hero {
        Some(hero) => hero.bet >= table_current_bet(players),
        None => false,
    }
}

/// The smallest legal raise to. An opening bet is one big blind, anything
/// else must at least double the current bet.
///
/// ```
/// use holdem_trainer::holdem::min_raise;
///
/// assert_eq!(2, min_raise(0, 2));
/// assert_eq!(4, min_raise(2, 2));
/// assert_eq!(6, min_raise(3, 2));
/// ```
pub fn min_raise(current_bet: u32, big_blind: u32) -> u32 {
    if current_bet == 0 {
        big_blind
    } else {
        current_bet + current_bet.max(big_blind)
    }
}

/// What the hero's street bet becomes after taking `action`.
///
/// Folding leaves the bet where it was. The caller is expected to end the
/// hand and settle it.
pub fn bet_for_action(
    action: Action,
    players: &[Player],
    big_blind: u32,
    hero: Option<&Player>,
) -> u32 {
    let current_bet = table_current_bet(players);
    let hero_bet = hero.map(|h| h.bet).unwrap_or(0);
    match action {
        Action::Check | Action::Fold => hero_bet,
        Action::Call => current_bet,
        Action::Raise => min_raise(current_bet, big_blind),
    }
}
