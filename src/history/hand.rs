use chrono::{DateTime, Utc};

use crate::core::Card;
use crate::holdem::{Action, Community, Player, Street};

/// One recorded decision.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct HandAction {
    pub player: String,
    pub action: Action,
    /// The player's street bet after acting.
    pub amount: u32,
    /// Never `Complete`.
    pub street: Street,
    pub timestamp: DateTime<Utc>,
}

/// A seat as it was dealt.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct HistoryPlayer {
    pub name: String,
    /// Position label such as `SB` or `UTG`.
    pub position: String,
    pub cards: [Card; 2],
    pub is_hero: bool,
}

impl From<&Player> for HistoryPlayer {
    fn from(player: &Player) -> Self {
        Self {
            name: player.name.clone(),
            position: player.position_label.clone(),
            cards: player.cards,
            is_hero: player.is_hero,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Blinds {
    pub small_blind: u32,
    pub big_blind: u32,
}

/// How a recorded hand ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HandResult {
    /// The hero folded.
    #[default]
    Folded,
    /// The hand ran out to the last enabled street.
    Completed,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct HandHistory {
    pub hand_id: String,
    pub timestamp: DateTime<Utc>,
    pub players: Vec<HistoryPlayer>,
    pub blinds: Blinds,
    pub community: Community,
    pub actions: Vec<HandAction>,
    /// Every chip committed during the hand.
    pub pot: u32,
    pub result: HandResult,
    /// Showdown signal. Only set when the hand went to the river.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub hero_won: Option<bool>,
}

impl HandHistory {
    pub fn hero(&self) -> Option<&HistoryPlayer> {
        self.players.iter().find(|p| p.is_hero)
    }

    /// The seat that posted the blind with the given position label.
    pub fn player_at(&self, position: &str) -> Option<&HistoryPlayer> {
        self.players.iter().find(|p| p.position == position)
    }

    pub fn actions_on(&self, street: Street) -> impl Iterator<Item = &HandAction> {
        self.actions.iter().filter(move |a| a.street == street)
    }

    /// Whether every community card was dealt and the hero didn't fold.
    pub fn reached_showdown(&self) -> bool {
        self.result == HandResult::Completed && self.community.is_full()
    }
}

/// A run of hands played in one sitting.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Session {
    pub id: uuid::Uuid,
    pub start_time: DateTime<Utc>,
    pub hands: Vec<HandHistory>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            start_time: Utc::now(),
            hands: vec![],
        }
    }

    pub fn len(&self) -> usize {
        self.hands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hands.is_empty()
    }

    pub fn push(&mut self, hand: HandHistory) {
        self.hands.push(hand);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
