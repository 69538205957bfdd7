use std::fmt;

use crate::core::{Card, Value};

use super::betting::Action;

/// Chen point value of a single card.
fn chen_value(value: Value) -> f32 {
    match value {
        Value::Ace => 10.0,
        Value::King => 8.0,
        Value::Queen => 7.0,
        Value::Jack => 6.0,
        // Ten and below are half their face value.
        v => v.face() as f32 / 2.0,
    }
}

/// Score a starting hand with the Chen formula.
///
/// The higher card's value is the base. Pairs double it with a floor of
/// 5. Every rank strictly between the two cards costs points, suited
/// cards earn 2, and the result is rounded to the nearest half point.
///
/// ```
/// use holdem_trainer::core::Card;
/// use holdem_trainer::holdem::chen_score;
///
/// let aces = chen_score(Card::try_from("As").unwrap(), Card::try_from("Ad").unwrap());
/// assert_eq!(20.0, aces);
///
/// let suited_connector = chen_score(Card::try_from("Jh").unwrap(), Card::try_from("Th").unwrap());
/// assert_eq!(8.0, suited_connector);
/// ```
pub fn chen_score(c1: Card, c2: Card) -> f32 {
    let (high, low) = if c1.value >= c2.value {
        (c1.value, c2.value)
    } else {
        (c2.value, c1.value)
    };

    let mut score = chen_value(high);
    if high == low {
        score = (score * 2.0).max(5.0);
    }

    // Ranks strictly between the two cards. A pair is -1 and connectors 0.
    let gap = high.index() as i32 - low.index() as i32 - 1;
    score -= match gap {
        1 => 1.0,
        2 => 2.0,
        3 => 4.0,
        g if g >= 4 => 5.0,
        _ => 0.0,
    };

    if c1.suit == c2.suit {
        score += 2.0;
    }

    (score * 2.0).round() / 2.0
}

/// What a preflop hand should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Recommendation {
    Raise,
    CallCheck,
    Fold,
}

impl Recommendation {
    /// Check and call are the same bucket.
    pub fn for_action(action: Action) -> Self {
        match action {
            Action::Raise => Recommendation::Raise,
            Action::Call | Action::Check => Recommendation::CallCheck,
            Action::Fold => Recommendation::Fold,
        }
    }

    pub fn matches(self, action: Action) -> bool {
        Self::for_action(action) == self
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::Raise => f.write_str("raise"),
            Recommendation::CallCheck => f.write_str("call/check"),
            Recommendation::Fold => f.write_str("fold"),
        }
    }
}

/// Turn a Chen score into an action. Tables bigger than six tighten every
/// threshold by 0.7 per extra seat, and facing a raise needs two more
/// points for each action.
pub fn recommend_action(score: f32, num_players: usize, facing_raise: bool) -> Recommendation {
    let tightener = ((num_players as f32 - 6.0) * 0.7).max(0.0);
    let (raise_at, call_at) = if facing_raise {
        (11.0, 8.0)
    } else {
        (9.0, 6.0)
    };

    if score >= raise_at + tightener {
        Recommendation::Raise
    } else if score >= call_at + tightener {
        Recommendation::CallCheck
    } else {
        Recommendation::Fold
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn score(a: &str, b: &str) -> f32 {
        chen_score(Card::try_from(a).unwrap(), Card::try_from(b).unwrap())
    }

    #[test]
    fn test_pairs() {
        assert_relative_eq!(20.0, score("As", "Ah"));
        assert_relative_eq!(16.0, score("Ks", "Kh"));
        assert_relative_eq!(10.0, score("Ts", "Th"));
        // 2 x 2.5 is exactly the floor
        assert_relative_eq!(5.0, score("5s", "5h"));
        // Small pairs are floored at 5
        assert_relative_eq!(5.0, score("2s", "2h"));
    }

    #[test]
    fn test_gap_penalty() {
        // Connectors, no penalty.
        assert_relative_eq!(10.0, score("Ad", "Kc"));
        // One gap
        assert_relative_eq!(9.0, score("Ad", "Qc"));
        // Two gap
        assert_relative_eq!(8.0, score("Ad", "Jc"));
        // Three gap
        assert_relative_eq!(6.0, score("Ad", "Tc"));
        // Four or more
        assert_relative_eq!(5.0, score("Ad", "9c"));
        assert_relative_eq!(5.0, score("Ad", "2c"));
    }

    #[test]
    fn test_suited_bonus() {
        assert_relative_eq!(12.0, score("As", "Ks"));
        assert_relative_eq!(score("Ks", "As"), score("As", "Ks"));
    }

    #[test]
    fn test_low_hands() {
        // 3.5 - 5
        assert_relative_eq!(-1.5, score("7c", "2d"));
        // 4.5 - 1 + 2
        assert_relative_eq!(5.5, score("9h", "7h"));
    }

    #[test]
    fn test_recommend_unraised() {
        assert_eq!(Recommendation::Raise, recommend_action(9.0, 6, false));
        assert_eq!(Recommendation::CallCheck, recommend_action(8.5, 6, false));
        assert_eq!(Recommendation::CallCheck, recommend_action(6.0, 6, false));
        assert_eq!(Recommendation::Fold, recommend_action(5.5, 6, false));
    }

    #[test]
    fn test_recommend_facing_raise() {
        assert_eq!(Recommendation::Raise, recommend_action(11.0, 6, true));
        assert_eq!(Recommendation::CallCheck, recommend_action(10.5, 6, true));
        assert_eq!(Recommendation::CallCheck, recommend_action(8.0, 6, true));
        assert_eq!(Recommendation::Fold, recommend_action(7.5, 6, true));
    }

    #[test]
    fn test_recommend_tightens_big_tables() {
        // Nine handed needs 9 + 2.1 to raise
        assert_eq!(Recommendation::CallCheck, recommend_action(11.0, 9, false));
        assert_eq!(Recommendation::Raise, recommend_action(11.5, 9, false));
        // Short tables never loosen
        assert_eq!(
            recommend_action(6.0, 6, false),
            recommend_action(6.0, 2, false)
        );
    }

    #[test]
    fn test_buckets() {
        assert!(Recommendation::CallCheck.matches(Action::Check));
        assert!(Recommendation::CallCheck.matches(Action::Call));
        assert!(Recommendation::Raise.matches(Action::Raise));
        assert!(!Recommendation::Fold.matches(Action::Raise));
        assert_eq!("call/check", Recommendation::CallCheck.to_string());
    }
}
