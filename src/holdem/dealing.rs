use tracing::event;

use crate::core::{Card, Deck, TrainerError};

use super::player::Player;
use super::position::{Role, assign_roles_and_positions};
use super::{MAX_BIG_BLIND, MAX_PLAYERS, MIN_BIG_BLIND, MIN_PLAYERS};

/// The small blind is never posted below this.
pub const MIN_SMALL_BLIND: u32 = 1;
/// The small blind is this fraction of the big blind, rounded down.
pub const SMALL_BLIND_FACTOR: f64 = 0.5;

/// Half the big blind rounded down, but never below `MIN_SMALL_BLIND`.
///
/// ```
/// use holdem_trainer::holdem::small_blind_from_big_blind;
///
/// assert_eq!(1, small_blind_from_big_blind(1));
/// assert_eq!(1, small_blind_from_big_blind(2));
/// assert_eq!(5, small_blind_from_big_blind(10));
/// ```
pub fn small_blind_from_big_blind(big_blind: u32) -> u32 {
    let half = (f64::from(big_blind) * SMALL_BLIND_FACTOR).floor() as u32;
    half.max(MIN_SMALL_BLIND)
}

/// The shared cards. Each street is dealt at most once per hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Community {
    pub flop: Option<[Card; 3]>,
    pub turn: Option<Card>,
    pub river: Option<Card>,
}

impl Community {
    /// All the dealt cards in board order.
    pub fn cards(&self) -> Vec<Card> {
        let mut cards = Vec::with_capacity(5);
        if let Some(flop) = self.flop {
            cards.extend_from_slice(&flop);
        }
        cards.extend(self.turn);
        cards.extend(self.river);
        cards
    }

    pub fn is_empty(&self) -> bool {
        self.flop.is_none() && self.turn.is_none() && self.river.is_none()
    }

    /// Flop, turn and river have all been dealt.
    pub fn is_full(&self) -> bool {
        self.flop.is_some() && self.turn.is_some() && self.river.is_some()
    }
}

pub fn check_seat_count(n: usize) -> Result<(), TrainerError> {
    if (MIN_PLAYERS..=MAX_PLAYERS).contains(&n) {
        Ok(())
    } else {
        Err(TrainerError::InvalidSeatCount(n))
    }
}

pub fn check_big_blind(big_blind: u32) -> Result<(), TrainerError> {
    if (MIN_BIG_BLIND..=MAX_BIG_BLIND).contains(&big_blind) {
        Ok(())
    } else {
        Err(TrainerError::InvalidBigBlind(big_blind))
    }
}

/// Rotate the seats so the small blind acts first. Seat order is
/// otherwise kept.
pub fn rotate_to_small_blind_first(mut players: Vec<Player>) -> Vec<Player> {
    if let Some(sb_idx) = players.iter().position(|p| p.is_small_blind()) {
        players.rotate_left(sb_idx);
    }
    players
}

/// Deal two hole cards to each of `n` seats, post the blinds and return
/// the seats with the small blind first.
///
/// Seat 0 is dealt first and every card comes off the end of `deck`.
/// Nothing is taken from `deck` when this fails.
///
/// ```
/// use holdem_trainer::core::Deck;
/// use holdem_trainer::holdem::{Role, deal_players};
///
/// let mut deck = Deck::ordered();
/// let players = deal_players(6, &mut deck, 2, 0, 0).unwrap();
///
/// assert_eq!(40, deck.len());
/// assert_eq!(Role::SmallBlind, players[0].role);
/// assert_eq!(1, players[0].bet);
/// assert_eq!(2, players[1].bet);
/// ```
pub fn deal_players(
    n: usize,
    deck: &mut Deck,
    big_blind: u32,
    hero_seat: usize,
    btn_index: usize,
) -> Result<Vec<Player>, TrainerError> {
    check_seat_count(n)?;
    check_big_blind(big_blind)?;
    if hero_seat >= n {
        return Err(TrainerError::InvalidHeroSeat {
            hero_seat,
            num_players: n,
        });
    }
    deck.ensure(2 * n)?;

    let small_blind = small_blind_from_big_blind(big_blind);
    let mut players = Vec::with_capacity(n);
    for assignment in assign_roles_and_positions(n, btn_index) {
        let c1 = deck.deal()?;
        let c2 = deck.deal()?;
        let is_hero = assignment.seat == hero_seat;
        let bet = match assignment.role {
            Role::SmallBlind => small_blind,
            Role::BigBlind => big_blind,
            _ => 0,
        };
        players.push(Player {
            id: assignment.seat,
            name: if is_hero {
                "Hero".to_string()
            } else {
                format!("Player {}", assignment.seat + 1)
            },
            role: assignment.role,
            bet,
            cards: [c1, c2],
            is_hero,
            position_label: assignment.position_label,
        });
    }

    event!(
        tracing::Level::TRACE,
        n,
        btn_index,
        small_blind,
        big_blind,
        "Dealt players"
    );
    Ok(rotate_to_small_blind_first(players))
}

pub fn deal_flop_from_deck(deck: &mut Deck) -> Result<[Card; 3], TrainerError> {
    deck.ensure(3)?;
    Ok([deck.deal()?, deck.deal()?, deck.deal()?])
}

pub fn deal_turn_from_deck(deck: &mut Deck) -> Result<Card, TrainerError> {
    deck.deal()
}

pub fn deal_river_from_deck(deck: &mut Deck) -> Result<Card, TrainerError> {
    deck.deal()
}
