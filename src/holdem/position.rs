use std::fmt;

/// The blind or button role a seat has for one hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    Dealer,
    SmallBlind,
    BigBlind,
    #[default]
    None,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Dealer => f.write_str("Dealer"),
            Role::SmallBlind => f.write_str("SB"),
            Role::BigBlind => f.write_str("BB"),
            Role::None => Ok(()),
        }
    }
}

/// Labels for everyone after the big blind, in acting order.
const LATER_POSITIONS: [&str; 6] = ["UTG", "UTG+1", "MP", "LJ", "HJ", "CO"];

/// Name of the position `pos` seats after the button.
pub fn label_for_pos(pos: usize) -> String {
    match pos {
        0 => "Dealer".to_string(),
        1 => "SB".to_string(),
        2 => "BB".to_string(),
        _ => LATER_POSITIONS
            .get(pos - 3)
            .map(|l| l.to_string())
            .unwrap_or_else(|| format!("Seat {pos}")),
    }
}

/// Where one seat sits relative to the button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatAssignment {
    /// The seat index at the table.
    pub seat: usize,
    /// Seats after the button, the button itself is 0.
    pub pos: usize,
    pub role: Role,
    pub position_label: String,
}

/// Work out every seat's role and label with the button on `btn_index`.
///
/// Heads up uses the same formula as a full ring, so the two seats are
/// the Dealer and the SB and nobody is the BB.
///
/// ```
/// use holdem_trainer::holdem::{Role, assign_roles_and_positions};
///
/// let seats = assign_roles_and_positions(6, 4);
/// assert_eq!(Role::Dealer, seats[4].role);
/// assert_eq!(Role::SmallBlind, seats[5].role);
/// assert_eq!(Role::BigBlind, seats[0].role);
/// assert_eq!("CO", seats[3].position_label);
/// ```
pub fn assign_roles_and_positions(n: usize, btn_index: usize) -> Vec<SeatAssignment> {
    (0..n)
        .map(|seat| {
            let pos = (seat + n - btn_index % n) % n;
            let role = match pos {
                0 => Role::Dealer,
                1 => Role::SmallBlind,
                2 => Role::BigBlind,
                _ => Role::None,
            };
            SeatAssignment {
                seat,
                pos,
                role,
                position_label: label_for_pos(pos),
            }
        })
        .collect()
}
