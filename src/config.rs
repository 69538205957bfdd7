//! Trainer settings.
//!
//! [`TrainerSettings`] is the one value the trainer reads its knobs from.
//! It can be built in code, loaded from JSON with the `serde` feature, or
//! rebuilt from the `poker.<key>` pairs a settings store hands back.
use std::time::Duration;

use thiserror::Error;

use crate::core::TrainerError;
use crate::holdem::{
    MAX_BIG_BLIND, MAX_PLAYERS, MIN_BIG_BLIND, MIN_PLAYERS, StreetSettings, check_big_blind,
    check_seat_count,
};

/// Longest feedback pause a settings value can ask for, in seconds.
pub const MAX_FEEDBACK_SECS: f64 = 10.0;

/// Prefix every stored settings key carries.
pub const STORE_KEY_PREFIX: &str = "poker.";

#[derive(Error, Debug)]
pub enum SettingsError {
    #[cfg(feature = "serde")]
    #[error("Unable to parse settings: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid settings: {0}")]
    Invalid(#[from] TrainerError),
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct TrainerSettings {
    pub num_players: usize,
    pub big_blind: u32,
    /// Deal the next hand on its own once the current one is over.
    pub auto_new: bool,
    /// Grade preflop decisions as if someone has already raised.
    pub facing_raise: bool,
    pub show_feedback: bool,
    /// How long feedback stays up before the hand moves on.
    pub feedback_secs: f64,
    pub show_score: bool,
    pub show_flop: bool,
    pub show_turn: bool,
    pub show_river: bool,
    pub show_community_cards: bool,
}

impl Default for TrainerSettings {
    fn default() -> Self {
        Self {
            num_players: 6,
            big_blind: 2,
            auto_new: true,
            facing_raise: true,
            show_feedback: true,
            feedback_secs: 1.0,
            show_score: true,
            show_flop: false,
            show_turn: true,
            show_river: true,
            show_community_cards: false,
        }
    }
}

impl TrainerSettings {
    /// The street switches the engine advances with.
    pub fn street_settings(&self) -> StreetSettings {
        StreetSettings {
            show_flop: self.show_flop,
            show_turn: self.show_turn,
            show_river: self.show_river,
        }
    }

    /// The feedback pause, clamped to `0..=MAX_FEEDBACK_SECS`. Anything
    /// that isn't a number counts as no pause.
    pub fn feedback_delay(&self) -> Duration {
        Duration::from_secs_f64(clamp_feedback_secs(self.feedback_secs).unwrap_or(0.0))
    }

    /// Check that the table described here can be dealt.
    pub fn validate(&self) -> Result<(), TrainerError> {
        check_seat_count(self.num_players)?;
        check_big_blind(self.big_blind)?;
        Ok(())
    }

    /// Load settings from JSON with camelCase keys. Missing keys keep
    /// their defaults.
    ///
    /// ```
    /// use holdem_trainer::config::TrainerSettings;
    ///
    /// let settings = TrainerSettings::from_json(r#"{"numPlayers": 9, "showFlop": true}"#).unwrap();
    /// assert_eq!(9, settings.num_players);
    /// assert!(settings.show_flop);
    /// assert_eq!(2, settings.big_blind);
    /// ```
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Rebuild settings from stored `poker.<key>` pairs.
    ///
    /// Flags are stored as `"1"` or `"0"` and numbers as their decimal
    /// text. Keys without the prefix, unknown keys and values that don't
    /// parse are skipped. Seat counts and big blinds are clamped into the
    /// playable range and the feedback pause into `0..=10` seconds.
    pub fn from_store_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut settings = Self::default();
        for (key, value) in pairs {
            let Some(key) = key.strip_prefix(STORE_KEY_PREFIX) else {
                continue;
            };
            let value = value.trim();
            match key {
                "numPlayers" => {
                    if let Ok(n) = value.parse::<usize>() {
                        settings.num_players = n.clamp(MIN_PLAYERS, MAX_PLAYERS);
                    }
                }
                "bigBlind" => {
                    if let Ok(bb) = value.parse::<u32>() {
                        settings.big_blind = bb.clamp(MIN_BIG_BLIND, MAX_BIG_BLIND);
                    }
                }
                "feedbackSecs" => {
                    if let Some(secs) = value.parse::<f64>().ok().and_then(clamp_feedback_secs) {
                        settings.feedback_secs = secs;
                    }
                }
                flag => {
                    let Some(on) = parse_flag(value) else {
                        continue;
                    };
                    match flag {
                        "autoNew" => settings.auto_new = on,
                        "facingRaise" => settings.facing_raise = on,
                        "showFeedback" => settings.show_feedback = on,
                        "showScore" => settings.show_score = on,
                        "showFlop" => settings.show_flop = on,
                        "showTurn" => settings.show_turn = on,
                        "showRiver" => settings.show_river = on,
                        "showCommunityCards" => settings.show_community_cards = on,
                        _ => {}
                    }
                }
            }
        }
        settings
    }

    /// The pairs [`TrainerSettings::from_store_pairs`] reads back.
    pub fn to_store_pairs(&self) -> Vec<(String, String)> {
        let flag = |on: bool| if on { "1" } else { "0" }.to_string();
        [
            ("numPlayers", self.num_players.to_string()),
            ("bigBlind", self.big_blind.to_string()),
            ("autoNew", flag(self.auto_new)),
            ("facingRaise", flag(self.facing_raise)),
            ("showFeedback", flag(self.show_feedback)),
            ("feedbackSecs", self.feedback_secs.to_string()),
            ("showScore", flag(self.show_score)),
            ("showFlop", flag(self.show_flop)),
            ("showTurn", flag(self.show_turn)),
            ("showRiver", flag(self.show_river)),
            ("showCommunityCards", flag(self.show_community_cards)),
        ]
        .into_iter()
        .map(|(k, v)| (format!("{STORE_KEY_PREFIX}{k}"), v))
        .collect()
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value {
        "1" => Some(true),
        "0" => Some(false),
        _ => None,
    }
}

fn clamp_feedback_secs(secs: f64) -> Option<f64> {
    if secs.is_nan() {
        None
    } else {
        Some(secs.clamp(0.0, MAX_FEEDBACK_SECS))
    }
}
