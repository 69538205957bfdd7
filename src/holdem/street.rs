use std::fmt;

/// The betting round a hand is on, or `Complete` once it's over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Street {
    #[default]
    Preflop,
    Flop,
    Turn,
    River,
    Complete,
}

impl Street {
    /// Every street in the order a hand moves through them.
    pub const ORDER: [Street; 5] = [
        Street::Preflop,
        Street::Flop,
        Street::Turn,
        Street::River,
        Street::Complete,
    ];

    /// The next street given which ones are switched on. Turning a street
    /// off ends the hand there. `Complete` stays `Complete`.
    pub fn next(self, settings: StreetSettings) -> Street {
        match self {
            Street::Preflop if settings.show_flop => Street::Flop,
            Street::Flop if settings.show_turn => Street::Turn,
            Street::Turn if settings.show_river => Street::River,
            _ => Street::Complete,
        }
    }

    pub fn is_complete(self) -> bool {
        self == Street::Complete
    }

    /// How many community cards are on the board once this street is
    /// dealt.
    pub fn board_size(self) -> usize {
        match self {
            Street::Preflop => 0,
            Street::Flop => 3,
            Street::Turn => 4,
            Street::River | Street::Complete => 5,
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Street::Preflop => f.write_str("preflop"),
            Street::Flop => f.write_str("flop"),
            Street::Turn => f.write_str("turn"),
            Street::River => f.write_str("river"),
            Street::Complete => f.write_str("complete"),
        }
    }
}

/// Which streets get dealt. With everything off the trainer is preflop
/// only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StreetSettings {
    pub show_flop: bool,
    pub show_turn: bool,
    pub show_river: bool,
}

impl StreetSettings {
    pub const fn preflop_only() -> Self {
        Self {
            show_flop: false,
            show_turn: false,
            show_river: false,
        }
    }

    pub const fn all_streets() -> Self {
        Self {
            show_flop: true,
            show_turn: true,
            show_river: true,
        }
    }
}

/// Free function form of [`Street::next`].
///
/// ```
/// use holdem_trainer::holdem::{Street, StreetSettings, next_street};
///
/// let all = StreetSettings::all_streets();
/// assert_eq!(Street::Flop, next_street(Street::Preflop, all));
/// assert_eq!(Street::Complete, next_street(Street::Preflop, StreetSettings::preflop_only()));
/// assert_eq!(Street::Complete, next_street(Street::Complete, all));
/// ```
pub fn next_street(current: Street, settings: StreetSettings) -> Street {
    current.next(settings)
}
