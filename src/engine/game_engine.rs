use rand::Rng;
use rand::rngs::ThreadRng;
use tracing::{event, trace_span};

use crate::core::{Deck, TrainerError};
use crate::holdem::{
    Action, Community, Player, Street, StreetSettings, bet_for_action, check_big_blind,
    check_seat_count, deal_flop_from_deck, deal_players, deal_river_from_deck,
    deal_turn_from_deck, hero_from_players, settle_bets_into_pot, total_pot,
};

use super::deferred::{Deferred, HandToken};

/// Read only copy of the table for a caller to render.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableSnapshot {
    pub players: Vec<Player>,
    pub deck_len: usize,
    pub street: Street,
    pub pot: u32,
    /// `pot` plus the bets still in front of the players.
    pub total_pot: u32,
    pub community: Community,
    pub button: Option<usize>,
    pub hand_token: HandToken,
}

/// # GameEngine
///
/// Runs one hand at a time: `deal_table`, then any number of
/// `advance_street` calls, until the street is `Complete`.
///
/// The engine owns the button. It starts on a random seat the first time a
/// table is dealt and moves one seat to the left on every deal after that.
/// All randomness comes from `R`, so a seeded rng gives a repeatable
/// session.
///
/// Every operation runs to completion. Callers that want to pace the hand
/// schedule [`Deferred`] actions and run them through
/// [`GameEngine::apply`], which ignores anything scheduled against an
/// earlier deal.
///
/// ## Examples
///
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
/// use holdem_trainer::engine::GameEngine;
/// use holdem_trainer::holdem::{Street, StreetSettings};
///
/// let mut engine = GameEngine::with_rng(StdRng::seed_from_u64(420));
/// engine.deal_table(6, 2, Some(0)).unwrap();
/// assert_eq!(0, engine.pot());
/// assert_eq!(3, engine.total_pot());
///
/// let street = engine.advance_street(StreetSettings::all_streets()).unwrap();
/// assert_eq!(Street::Flop, street);
/// assert_eq!(3, engine.pot());
/// assert!(engine.players().iter().all(|p| p.bet == 0));
/// ```
#[derive(Debug)]
pub struct GameEngine<R: Rng = ThreadRng> {
    rng: R,
    button: Option<usize>,
    big_blind: u32,
    players: Vec<Player>,
    deck: Deck,
    street: Street,
    pot: u32,
    community: Community,
    token: HandToken,
}

impl GameEngine<ThreadRng> {
    pub fn new() -> Self {
        Self::with_rng(rand::rng())
    }
}

impl Default for GameEngine<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> GameEngine<R> {
    /// An idle engine with no table dealt yet.
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            button: None,
            big_blind: 0,
            players: vec![],
            deck: Deck::new(),
            street: Street::Preflop,
            pot: 0,
            community: Community::default(),
            token: HandToken::default(),
        }
    }

    /// Shuffle a fresh deck, move the button and deal a new hand. Whatever
    /// hand was in progress is thrown away.
    ///
    /// `hero_seat` defaults to seat 0.
    pub fn deal_table(
        &mut self,
        n: usize,
        big_blind: u32,
        hero_seat: Option<usize>,
    ) -> Result<&[Player], TrainerError> {
        let span = trace_span!("GameEngine::deal_table", n, big_blind);
        let _enter = span.enter();

        check_seat_count(n)?;
        check_big_blind(big_blind)?;

        let button = match self.button {
            Some(previous) => (previous + 1) % n,
            None => self.rng.random_range(0..n),
        };

        let mut deck = Deck::ordered().shuffled(&mut self.rng);
        let players = deal_players(n, &mut deck, big_blind, hero_seat.unwrap_or(0), button)?;

        self.button = Some(button);
        self.big_blind = big_blind;
        self.players = players;
        self.deck = deck;
        self.street = Street::Preflop;
        self.pot = 0;
        self.community = Community::default();
        self.token = self.token.next();

        event!(
            tracing::Level::DEBUG,
            button,
            generation = self.token.generation(),
            "Dealt new hand"
        );
        Ok(&self.players)
    }

    /// Move to the next street allowed by `settings`, dealing whatever it
    /// needs and settling the bets. Landing on `Complete` only settles.
    pub fn advance_street(&mut self, settings: StreetSettings) -> Result<Street, TrainerError> {
        let next = self.street.next(settings);
        match (self.street, next) {
            (Street::Preflop, Street::Flop) => {
                self.deal_flop()?;
            }
            (Street::Flop, Street::Turn) => {
                self.deal_turn()?;
            }
            (Street::Turn, Street::River) => {
                self.deal_river()?;
            }
            _ => self.complete_hand(),
        }
        event!(tracing::Level::DEBUG, street = %self.street, pot = self.pot, "Advanced street");
        Ok(self.street)
    }

    /// End the hand now, for a fold or a street that's switched off.
    pub fn complete_hand(&mut self) {
        self.settle_bets();
        self.street = Street::Complete;
    }

    /// Move all street bets into the pot.
    pub fn settle_bets(&mut self) {
        self.pot = settle_bets_into_pot(self.pot, &mut self.players);
        event!(tracing::Level::TRACE, pot = self.pot, "Settled bets");
    }

    /// Deal the flop and settle preflop betting. `Ok(false)` when the hand
    /// isn't on the preflop street.
    pub fn deal_flop(&mut self) -> Result<bool, TrainerError> {
        if self.street != Street::Preflop || self.community.flop.is_some() {
            return Ok(false);
        }
        self.community.flop = Some(deal_flop_from_deck(&mut self.deck)?);
        self.street = Street::Flop;
        self.settle_bets();
        Ok(true)
    }

    /// Deal the turn and settle flop betting. `Ok(false)` when the hand
    /// isn't on the flop.
    pub fn deal_turn(&mut self) -> Result<bool, TrainerError> {
        if self.street != Street::Flop || self.community.turn.is_some() {
            return Ok(false);
        }
        self.community.turn = Some(deal_turn_from_deck(&mut self.deck)?);
        self.street = Street::Turn;
        self.settle_bets();
        Ok(true)
    }

    /// Deal the river and settle turn betting. `Ok(false)` when the hand
    /// isn't on the turn.
    pub fn deal_river(&mut self) -> Result<bool, TrainerError> {
        if self.street != Street::Turn || self.community.river.is_some() {
            return Ok(false);
        }
        self.community.river = Some(deal_river_from_deck(&mut self.deck)?);
        self.street = Street::River;
        self.settle_bets();
        Ok(true)
    }

    /// Set the hero's street bet for `action` and return it. Does nothing
    /// and returns 0 when there's no hero.
    pub fn place_hero_bet(&mut self, action: Action) -> u32 {
        let Some(bet) = hero_from_players(&self.players)
            .map(|hero| bet_for_action(action, &self.players, self.big_blind, Some(hero)))
        else {
            return 0;
        };
        if let Some(hero) = self.players.iter_mut().find(|p| p.is_hero) {
            hero.bet = bet;
        }
        bet
    }

    /// Run a deferred action if it still belongs to the current hand.
    ///
    /// Returns the street afterwards, or `None` when the action was stale
    /// and dropped.
    pub fn apply(
        &mut self,
        token: HandToken,
        action: Deferred,
    ) -> Result<Option<Street>, TrainerError> {
        if token != self.token {
            event!(
                tracing::Level::DEBUG,
                ?action,
                scheduled = token.generation(),
                current = self.token.generation(),
                "Dropping stale deferred action"
            );
            return Ok(None);
        }
        match action {
            Deferred::AdvanceStreet(settings) => self.advance_street(settings).map(Some),
            Deferred::CompleteHand => {
                self.complete_hand();
                Ok(Some(self.street))
            }
            Deferred::NewHand {
                num_players,
                big_blind,
                hero_seat,
            } => {
                self.deal_table(num_players, big_blind, hero_seat)?;
                Ok(Some(self.street))
            }
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn hero(&self) -> Option<&Player> {
        hero_from_players(&self.players)
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    pub fn street(&self) -> Street {
        self.street
    }

    pub fn pot(&self) -> u32 {
        self.pot
    }

    pub fn total_pot(&self) -> u32 {
        total_pot(self.pot, &self.players)
    }

    pub fn community(&self) -> &Community {
        &self.community
    }

    pub fn button(&self) -> Option<usize> {
        self.button
    }

    pub fn big_blind(&self) -> u32 {
        self.big_blind
    }

    /// Token for the hand currently on the table.
    pub fn hand_token(&self) -> HandToken {
        self.token
    }

    pub fn snapshot(&self) -> TableSnapshot {
        TableSnapshot {
            players: self.players.clone(),
            deck_len: self.deck.len(),
            street: self.street,
            pot: self.pot,
            total_pot: self.total_pot(),
            community: self.community,
            button: self.button,
            hand_token: self.token,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::core::Card;
    use crate::holdem::{MAX_BIG_BLIND, MAX_PLAYERS, Role, table_current_bet};

    fn engine() -> GameEngine<StdRng> {
        GameEngine::with_rng(StdRng::seed_from_u64(420))
    }

    fn all_cards(engine: &GameEngine<StdRng>) -> Vec<Card> {
        let mut cards: Vec<Card> = engine.deck().iter().copied().collect();
        for p in engine.players() {
            cards.extend_from_slice(&p.cards);
        }
        cards.extend(engine.community().cards());
        cards
    }

    #[test]
    fn test_idle_engine() {
        let e = engine();
        assert!(e.players().is_empty());
        assert_eq!(0, e.deck_len());
        assert_eq!(None, e.button());
        assert_eq!(0, e.total_pot());
    }

    #[test_log::test]
    fn test_six_handed_scenario() {
        let mut e = engine();
        e.deal_table(6, 2, Some(0)).unwrap();

        let sb = e.players().iter().find(|p| p.role == Role::SmallBlind).unwrap();
        let bb = e.players().iter().find(|p| p.role == Role::BigBlind).unwrap();
        assert_eq!(1, sb.bet);
        assert_eq!(2, bb.bet);
        let others = e
            .players()
            .iter()
            .filter(|p| p.role != Role::SmallBlind && p.role != Role::BigBlind);
        assert!(others.into_iter().all(|p| p.bet == 0));
        assert_eq!(0, e.pot());
        assert_eq!(Street::Preflop, e.street());
        assert_eq!(40, e.deck_len());

        let street = e.advance_street(StreetSettings::all_streets()).unwrap();
        assert_eq!(Street::Flop, street);
        assert_eq!(3, e.pot());
        assert!(e.players().iter().all(|p| p.bet == 0));
        assert_eq!(37, e.deck_len());
    }

    #[test_log::test]
    fn test_full_hand_keeps_52_cards() {
        let mut e = engine();
        e.deal_table(9, 2, None).unwrap();
        let settings = StreetSettings::all_streets();
        let mut streets = vec![e.street()];
        while !e.street().is_complete() {
            streets.push(e.advance_street(settings).unwrap());
            let unique: HashSet<Card> = all_cards(&e).into_iter().collect();
            assert_eq!(52, unique.len());
        }
        assert_eq!(Street::ORDER.to_vec(), streets);
        assert_eq!(52 - 18 - 5, e.deck_len());
        assert!(e.community().is_full());
        assert_eq!(3, e.pot());
    }

    #[test]
    fn test_preflop_only_completes() {
        let mut e = engine();
        e.deal_table(6, 10, Some(2)).unwrap();
        let street = e.advance_street(StreetSettings::preflop_only()).unwrap();
        assert_eq!(Street::Complete, street);
        assert_eq!(15, e.pot());
        assert!(e.community().is_empty());
        assert_eq!(40, e.deck_len());
    }

    #[test]
    fn test_button_rotates() {
        let mut e = engine();
        e.deal_table(6, 2, None).unwrap();
        let first = e.button().unwrap();
        assert!(first < 6);
        for i in 1..=12 {
            e.deal_table(6, 2, None).unwrap();
            assert_eq!(Some((first + i) % 6), e.button());
            let dealer = e.players().iter().find(|p| p.role == Role::Dealer).unwrap();
            assert_eq!(e.button(), Some(dealer.id));
        }
    }

    #[test]
    fn test_deal_resets_hand() {
        let mut e = engine();
        e.deal_table(4, 2, None).unwrap();
        e.advance_street(StreetSettings::all_streets()).unwrap();
        assert_eq!(3, e.pot());

        e.deal_table(4, 2, None).unwrap();
        assert_eq!(0, e.pot());
        assert_eq!(Street::Preflop, e.street());
        assert!(e.community().is_empty());
        assert_eq!(44, e.deck_len());
    }

    #[test]
    fn test_invalid_table() {
        let mut e = engine();
        assert_eq!(
            Err(TrainerError::InvalidSeatCount(10)),
            e.deal_table(10, 2, None).map(|p| p.len())
        );
        assert_eq!(
            Err(TrainerError::InvalidBigBlind(0)),
            e.deal_table(6, 0, None).map(|p| p.len())
        );
        assert_eq!(
            Err(TrainerError::InvalidBigBlind(u32::MAX)),
            e.deal_table(6, u32::MAX, None).map(|p| p.len())
        );
        assert_eq!(None, e.button());
        assert_eq!(0, e.total_pot());
    }

    #[test]
    fn test_largest_big_blind_settles() {
        let mut e = engine();
        e.deal_table(MAX_PLAYERS, MAX_BIG_BLIND, None).unwrap();
        let blinds = MAX_BIG_BLIND / 2 + MAX_BIG_BLIND;
        assert_eq!(blinds, e.total_pot());

        e.place_hero_bet(Action::Raise);
        let settings = StreetSettings::all_streets();
        while !e.street().is_complete() {
            e.advance_street(settings).unwrap();
        }
        assert!(e.pot() > blinds);
        assert_eq!(e.pot(), e.total_pot());
    }

    #[test]
    fn test_heads_up_posts_small_blind_only() {
        let mut e = engine();
        e.deal_table(2, 10, Some(0)).unwrap();

        let roles: Vec<Role> = e.players().iter().map(|p| p.role).collect();
        assert!(roles.contains(&Role::Dealer));
        assert!(roles.contains(&Role::SmallBlind));
        assert!(!roles.contains(&Role::BigBlind));
        assert_eq!(5, e.total_pot());
        assert_eq!(5, table_current_bet(e.players()));

        let street = e.advance_street(StreetSettings::preflop_only()).unwrap();
        assert_eq!(Street::Complete, street);
        assert_eq!(5, e.pot());
    }

    #[test]
    fn test_primitives_refuse_out_of_order() {
        let mut e = engine();
        e.deal_table(3, 2, None).unwrap();
        assert!(!e.deal_turn().unwrap());
        assert!(!e.deal_river().unwrap());
        assert!(e.deal_flop().unwrap());
        assert!(!e.deal_flop().unwrap());
        assert!(e.deal_turn().unwrap());
        assert!(e.deal_river().unwrap());
        assert_eq!(Street::River, e.street());

        e.complete_hand();
        assert!(!e.deal_flop().unwrap());
        assert_eq!(Street::Complete, e.street());
    }

    #[test]
    fn test_complete_hand_settles() {
        let mut e = engine();
        e.deal_table(6, 2, Some(0)).unwrap();
        let bet = e.place_hero_bet(Action::Raise);
        assert_eq!(4, bet);
        assert_eq!(e.total_pot(), 1 + 2 + 4 - e.hero().map(|h| blind_of(h.role)).unwrap());

        let before = e.total_pot();
        e.complete_hand();
        assert_eq!(before, e.pot());
        assert_eq!(Street::Complete, e.street());
        assert!(e.players().iter().all(|p| p.bet == 0));
    }

    fn blind_of(role: Role) -> u32 {
        match role {
            Role::SmallBlind => 1,
            Role::BigBlind => 2,
            _ => 0,
        }
    }

    #[test]
    fn test_place_hero_bet() {
        let mut e = engine();
        e.deal_table(6, 2, Some(0)).unwrap();
        assert_eq!(2, e.place_hero_bet(Action::Call));
        assert_eq!(Some(2), e.hero().map(|h| h.bet));
        // Raising over a call of 2 goes to 4.
        assert_eq!(4, e.place_hero_bet(Action::Raise));
    }

    #[test_log::test]
    fn test_stale_deferred_is_dropped() {
        let mut e = engine();
        e.deal_table(6, 2, None).unwrap();
        let stale = e.hand_token();

        e.deal_table(6, 2, None).unwrap();
        let applied = e
            .apply(stale, Deferred::AdvanceStreet(StreetSettings::all_streets()))
            .unwrap();
        assert_eq!(None, applied);
        assert_eq!(Street::Preflop, e.street());
        assert_eq!(0, e.pot());

        let current = e.hand_token();
        let applied = e
            .apply(current, Deferred::AdvanceStreet(StreetSettings::all_streets()))
            .unwrap();
        assert_eq!(Some(Street::Flop), applied);
    }

    #[test]
    fn test_deferred_new_hand() {
        let mut e = engine();
        e.deal_table(6, 2, None).unwrap();
        let token = e.hand_token();
        let applied = e
            .apply(
                token,
                Deferred::NewHand {
                    num_players: 4,
                    big_blind: 10,
                    hero_seat: Some(1),
                },
            )
            .unwrap();
        assert_eq!(Some(Street::Preflop), applied);
        assert_eq!(4, e.players().len());
        assert_ne!(token, e.hand_token());
    }

    #[test]
    fn test_snapshot() {
        let mut e = engine();
        e.deal_table(5, 2, None).unwrap();
        let snap = e.snapshot();
        assert_eq!(5, snap.players.len());
        assert_eq!(42, snap.deck_len);
        assert_eq!(3, snap.total_pot);
        assert_eq!(0, snap.pot);
        assert_eq!(e.hand_token(), snap.hand_token);
    }
}
