use super::player::Player;

/// Everything committed on the current street.
pub fn collect_bets(players: &[Player]) -> u32 {
    players.iter().map(|p| p.bet).sum()
}

pub fn reset_bets(players: &mut [Player]) {
    for p in players.iter_mut() {
        p.bet = 0;
    }
}

/// Pot including the bets that haven't been settled yet.
pub fn total_pot(pot: u32, players: &[Player]) -> u32 {
    pot + collect_bets(players)
}

/// Move every street bet into the pot and zero them. Returns the new
/// pot.
///
/// This is the only way chips reach the pot, so calling it once per street
/// change and once when the hand ends keeps `pot + bets` constant.
///
/// ```
/// use holdem_trainer::core::Deck;
/// use holdem_trainer::holdem::{deal_players, settle_bets_into_pot};
///
/// let mut players = deal_players(6, &mut Deck::ordered(), 2, 0, 0).unwrap();
/// let pot = settle_bets_into_pot(0, &mut players);
///
/// assert_eq!(3, pot);
/// assert!(players.iter().all(|p| p.bet == 0));
/// ```
pub fn settle_bets_into_pot(pot: u32, players: &mut [Player]) -> u32 {
    let settled = pot + collect_bets(players);
    reset_bets(players);
    settled
}
