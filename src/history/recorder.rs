use chrono::Utc;
use tracing::event;

use crate::holdem::{Action, Community, Player, Street, small_blind_from_big_blind};

use super::hand::{Blinds, HandAction, HandHistory, HandResult, HistoryPlayer};

/// Name recorded for an action when the caller doesn't give one.
pub const DEFAULT_ACTOR: &str = "Hero";

/// Builds the history of the hand in progress.
///
/// `begin` opens a record, `record` appends to it and `finalize` closes it
/// and hands it back. Calls to `record` or `finalize` with nothing open are
/// ignored.
#[derive(Debug, Clone, Default)]
pub struct HandRecorder {
    current: Option<HandHistory>,
}

impl HandRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a record for a freshly dealt table. A record that was still
    /// open is dropped.
    pub fn begin(&mut self, players: &[Player], big_blind: u32) -> &HandHistory {
        let timestamp = Utc::now();
        let hand = HandHistory {
            hand_id: new_hand_id(timestamp.timestamp_millis()),
            timestamp,
            players: players.iter().map(HistoryPlayer::from).collect(),
            blinds: Blinds {
                small_blind: small_blind_from_big_blind(big_blind),
                big_blind,
            },
            community: Community::default(),
            actions: vec![],
            pot: 0,
            result: HandResult::Folded,
            hero_won: None,
        };
        self.current.insert(hand)
    }

    /// Append an action. Returns false when there's no open record or the
    /// street is `Complete`.
    pub fn record(
        &mut self,
        action: Action,
        amount: u32,
        street: Street,
        actor: Option<&str>,
    ) -> bool {
        if street.is_complete() {
            return false;
        }
        let Some(hand) = self.current.as_mut() else {
            return false;
        };
        hand.actions.push(HandAction {
            player: actor.unwrap_or(DEFAULT_ACTOR).to_string(),
            action,
            amount,
            street,
            timestamp: Utc::now(),
        });
        true
    }

    /// Close the open record with the final pot, result and board.
    pub fn finalize(
        &mut self,
        pot: u32,
        result: HandResult,
        community: Community,
        hero_won: Option<bool>,
    ) -> Option<HandHistory> {
        let mut hand = self.current.take()?;
        hand.pot = pot;
        hand.result = result;
        hand.community = community;
        hand.hero_won = hero_won;
        event!(
            tracing::Level::TRACE,
            hand_id = %hand.hand_id,
            actions = hand.actions.len(),
            "Finalized hand history"
        );
        Some(hand)
    }

    pub fn current(&self) -> Option<&HandHistory> {
        self.current.as_ref()
    }

    pub fn is_recording(&self) -> bool {
        self.current.is_some()
    }

    pub fn discard(&mut self) -> Option<HandHistory> {
        self.current.take()
    }
}

fn new_hand_id(millis: i64) -> String {
    let suffix = uuid::Uuid::new_v4().simple().to_string();
    format!("hand_{millis}_{}", &suffix[..9])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Deck;
    use crate::holdem::deal_players;

    fn players() -> Vec<Player> {
        deal_players(2, &mut Deck::ordered(), 2, 0, 0).unwrap()
    }

    #[test]
    fn test_begin_record_finalize() {
        let mut recorder = HandRecorder::new();
        let hand = recorder.begin(&players(), 2);
        assert!(hand.hand_id.starts_with("hand_"));
        assert_eq!(Blinds { small_blind: 1, big_blind: 2 }, hand.blinds);
        assert_eq!(2, hand.players.len());

        assert!(recorder.record(Action::Raise, 4, Street::Preflop, Some("Hero")));
        assert!(recorder.record(Action::Call, 4, Street::Preflop, Some("Player 2")));
        assert_eq!(2, recorder.current().unwrap().actions.len());

        let hand = recorder
            .finalize(6, HandResult::Folded, Community::default(), None)
            .unwrap();
        assert_eq!(6, hand.pot);
        assert_eq!(HandResult::Folded, hand.result);
        assert_eq!("Player 2", hand.actions[1].player);
        assert!(!recorder.is_recording());
    }

    #[test]
    fn test_nothing_open() {
        let mut recorder = HandRecorder::new();
        assert!(!recorder.record(Action::Check, 0, Street::Flop, None));
        assert_eq!(
            None,
            recorder.finalize(3, HandResult::Completed, Community::default(), Some(true))
        );
    }

    #[test]
    fn test_complete_street_not_recorded() {
        let mut recorder = HandRecorder::new();
        recorder.begin(&players(), 2);
        assert!(!recorder.record(Action::Check, 0, Street::Complete, None));
        assert!(recorder.record(Action::Check, 0, Street::River, None));
        assert_eq!(DEFAULT_ACTOR, recorder.current().unwrap().actions[0].player);
    }

    #[test]
    fn test_begin_replaces_open_record() {
        let mut recorder = HandRecorder::new();
        let first = recorder.begin(&players(), 2).hand_id.clone();
        recorder.record(Action::Fold, 0, Street::Preflop, None);
        let second = recorder.begin(&players(), 10);
        assert_ne!(first, second.hand_id);
        assert!(second.actions.is_empty());
        assert_eq!(5, second.blinds.small_blind);
    }
}
