use crate::core::Card;

use super::position::Role;

/// One seat at the table for the current hand.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    /// Seat index at deal time. Stays put when the seat list is rotated.
    pub id: usize,
    pub name: String,
    pub role: Role,
    /// Chips committed on the current street only.
    pub bet: u32,
    pub cards: [Card; 2],
    pub is_hero: bool,
    pub position_label: String,
}

impl Player {
    pub fn is_small_blind(&self) -> bool {
        self.role == Role::SmallBlind
    }

    pub fn is_big_blind(&self) -> bool {
        self.role == Role::BigBlind
    }
}
