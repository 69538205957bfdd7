use crate::core::{Card, evaluate_hand};

use super::player::Player;

/// Coarse win signal for the hero.
///
/// True only when the hero's hand category beats every opponent's. A tie
/// on category counts as not winning, and so does losing. There is no
/// split pot and no kicker comparison. With nobody to beat the hero wins.
pub fn did_hero_win(hero: &[Card; 2], others: &[[Card; 2]], community: &[Card]) -> bool {
    let hero_category = evaluate_hand(hero, community);
    others
        .iter()
        .all(|cards| hero_category > evaluate_hand(cards, community))
}

/// Run [`did_hero_win`] for the seated hero against everyone else. `None`
/// when no one at the table is the hero.
pub fn compute_hero_result(players: &[Player], community: &[Card]) -> Option<bool> {
    let hero = players.iter().find(|p| p.is_hero)?;
    let others: Vec<[Card; 2]> = players
        .iter()
        .filter(|p| !p.is_hero)
        .map(|p| p.cards)
        .collect();
    Some(did_hero_win(&hero.cards, &others, community))
}
