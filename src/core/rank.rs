use std::fmt;

use super::card::{Card, Value};

/// All the different possible hand categories, weakest first.
///
/// Only the category is tracked. Two hands in the same category are
/// never ordered against each other, so kickers and pair values don't
/// break ties.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HandCategory {
    /// The lowest rank.
    /// No matches
    HighCard = 0,
    /// One Card matches another.
    OnePair = 1,
    /// Two diffent pair of matching cards.
    TwoPair = 2,
    /// Three of the same value.
    ThreeOfAKind = 3,
    /// Five cards in a sequence
    Straight = 4,
    /// Five cards of the same suit
    Flush = 5,
    /// Three of one value and two of another value
    FullHouse = 6,
    /// Four of the same value.
    FourOfAKind = 7,
    /// A straight and a flush.
    StraightFlush = 8,
}

impl HandCategory {
    /// Numeric strength from 0 (high card) to 8 (straight flush).
    pub const fn strength(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandCategory::HighCard => "high card",
            HandCategory::OnePair => "one pair",
            HandCategory::TwoPair => "two pair",
            HandCategory::ThreeOfAKind => "three of a kind",
            HandCategory::Straight => "straight",
            HandCategory::Flush => "flush",
            HandCategory::FullHouse => "full house",
            HandCategory::FourOfAKind => "four of a kind",
            HandCategory::StraightFlush => "straight flush",
        };
        f.write_str(name)
    }
}

const fn build_straights() -> [u16; 10] {
    // Wheel.
    let mut straights = [0u16; 10];
    straights[0] = 1 << (Value::Ace as u16)
        | 1 << (Value::Two as u16)
        | 1 << (Value::Three as u16)
        | 1 << (Value::Four as u16)
        | 1 << (Value::Five as u16);
    // Two to six up through ten to ace.
    let mut i = 0;
    while i < 9 {
        straights[i + 1] = 0b1_1111 << i;
        i += 1;
    }
    straights
}

/// Value bit masks of every straight, the wheel first.
pub const STRAIGHTS: [u16; 10] = build_straights();

/// Can this be classified into a hand category?
pub trait Rankable {
    fn category(&self) -> HandCategory;
}

/// Implementation for any collection of cards. Duplicate cards are not
/// checked for and will count twice.
impl Rankable for [Card] {
    fn category(&self) -> HandCategory {
        let mut value_counts = [0u8; 13];
        let mut suit_counts = [0u8; 4];
        // Use for bitset
        let mut value_set: u16 = 0;

        for c in self {
            value_counts[c.value.index()] += 1;
            suit_counts[c.suit.index()] += 1;
            value_set |= 1 << c.value.index();
        }

        let is_flush = suit_counts.iter().any(|&count| count >= 5);
        let is_straight = STRAIGHTS
            .iter()
            .any(|&straight| value_set & straight == straight);

        // Multiplicities of every value present, largest first.
        let mut counts: Vec<u8> = value_counts.into_iter().filter(|&c| c > 0).collect();
        counts.sort_unstable_by(|a, b| b.cmp(a));
        let first = counts.first().copied().unwrap_or(0);
        let second = counts.get(1).copied().unwrap_or(0);

        if is_straight && is_flush {
            HandCategory::StraightFlush
        } else if first >= 4 {
            HandCategory::FourOfAKind
        } else if first == 3 && second >= 2 {
            HandCategory::FullHouse
        } else if is_flush {
            HandCategory::Flush
        } else if is_straight {
            HandCategory::Straight
        } else if first == 3 {
            HandCategory::ThreeOfAKind
        } else if first == 2 && second == 2 {
            HandCategory::TwoPair
        } else if first == 2 {
            HandCategory::OnePair
        } else {
            HandCategory::HighCard
        }
    }
}

/// Classify the best category made from two hole cards and up to five
/// community cards.
///
/// ```
/// use holdem_trainer::core::{Card, HandCategory, evaluate_hand};
///
/// let hole = [Card::try_from("Ks").unwrap(), Card::try_from("Kd").unwrap()];
/// let board: Vec<Card> = ["2c", "7h", "Kh"]
///     .into_iter()
///     .map(|s| Card::try_from(s).unwrap())
///     .collect();
///
/// assert_eq!(HandCategory::ThreeOfAKind, evaluate_hand(&hole, &board));
/// ```
pub fn evaluate_hand(hole: &[Card; 2], community: &[Card]) -> HandCategory {
    let mut cards = Vec::with_capacity(2 + community.len());
    cards.extend_from_slice(hole);
    cards.extend_from_slice(community);
    cards.category()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(s: &[&str]) -> Vec<Card> {
        s.iter().map(|c| Card::try_from(*c).unwrap()).collect()
    }

    fn hole(a: &str, b: &str) -> [Card; 2] {
        [Card::try_from(a).unwrap(), Card::try_from(b).unwrap()]
    }

    #[test]
    fn test_cmp() {
        assert!(HandCategory::HighCard < HandCategory::StraightFlush);
        assert!(HandCategory::HighCard < HandCategory::FourOfAKind);
        assert!(HandCategory::HighCard < HandCategory::ThreeOfAKind);
        assert_eq!(8, HandCategory::StraightFlush.strength());
        assert_eq!(0, HandCategory::HighCard.strength());
    }

    #[test]
    fn test_straight_constants() {
        for c in STRAIGHTS.iter() {
            // Make sure that all of the constant hands have exactly 5 ones.
            assert_eq!(5, c.count_ones());
        }
    }

    #[test]
    fn test_straight_flush_with_extras() {
        let board = cards(&["Js", "Qs", "Ks", "2d", "3c"]);
        assert_eq!(
            HandCategory::StraightFlush,
            evaluate_hand(&hole("9s", "Ts"), &board)
        );
        assert_eq!(8, evaluate_hand(&hole("9s", "Ts"), &board).strength());
    }

    #[test]
    fn test_wheel() {
        let board = cards(&["3s", "4h", "5d"]);
        let category = evaluate_hand(&hole("Ad", "2c"), &board);
        assert_eq!(HandCategory::Straight, category);
        assert!(category.strength() >= 4);
    }

    #[test]
    fn test_straight() {
        let board = cards(&["3s", "4h", "5s", "6d", "Kc"]);
        assert_eq!(
            HandCategory::Straight,
            evaluate_hand(&hole("2c", "8d"), &board)
        );
    }

    #[test]
    fn test_no_wrap_around() {
        let board = cards(&["Ks", "Ah", "2s"]);
        assert_eq!(
            HandCategory::HighCard,
            evaluate_hand(&hole("Qc", "3d"), &board)
        );
    }

    #[test]
    fn test_high_card_hand() {
        let board = cards(&["9c", "Tc", "5c", "2h", "3s"]);
        assert_eq!(
            HandCategory::HighCard,
            evaluate_hand(&hole("Ad", "8h"), &board)
        );
    }

    #[test]
    fn test_flush() {
        let board = cards(&["9d", "Td", "5d", "2h", "3s"]);
        assert_eq!(HandCategory::Flush, evaluate_hand(&hole("Ad", "8d"), &board));
    }

    #[test]
    fn test_full_house() {
        let board = cards(&["9d", "9c", "9s"]);
        assert_eq!(
            HandCategory::FullHouse,
            evaluate_hand(&hole("Ad", "Ac"), &board)
        );
    }

    #[test]
    fn test_two_trips_is_full_house() {
        // Counted as the best five cards, so the lower set plays as the pair.
        let board = cards(&["9d", "9c", "9s", "Ah", "2c"]);
        assert_eq!(
            HandCategory::FullHouse,
            evaluate_hand(&hole("Ad", "Ac"), &board)
        );
    }

    #[test]
    fn test_four_of_a_kind() {
        let board = cards(&["As", "Ah", "Ts"]);
        assert_eq!(
            HandCategory::FourOfAKind,
            evaluate_hand(&hole("Ad", "Ac"), &board)
        );
    }

    #[test]
    fn test_three_of_a_kind() {
        let board = cards(&["2h", "5s", "6d"]);
        assert_eq!(
            HandCategory::ThreeOfAKind,
            evaluate_hand(&hole("2c", "2s"), &board)
        );
    }

    #[test]
    fn test_two_pair_from_three_pairs() {
        let board = cards(&["9d", "9c", "Ts", "Th", "4c"]);
        assert_eq!(
            HandCategory::TwoPair,
            evaluate_hand(&hole("Ad", "Ac"), &board)
        );
    }

    #[test]
    fn test_one_pair() {
        let board = cards(&["9d", "8c", "Ts"]);
        assert_eq!(
            HandCategory::OnePair,
            evaluate_hand(&hole("Ad", "Ac"), &board)
        );
    }

    #[test]
    fn test_preflop_only() {
        assert_eq!(HandCategory::OnePair, evaluate_hand(&hole("7d", "7c"), &[]));
        assert_eq!(HandCategory::HighCard, evaluate_hand(&hole("7d", "8c"), &[]));
    }

    #[test]
    fn test_same_category_is_not_ordered() {
        // Aces up and nines up are the same category. Value inside the
        // category is deliberately ignored.
        let board = cards(&["9d", "9c", "4s", "5h", "Kc"]);
        let aces = evaluate_hand(&hole("Ad", "Ac"), &board);
        let sevens = evaluate_hand(&hole("7d", "7s"), &board);
        assert_eq!(HandCategory::TwoPair, aces);
        assert_eq!(aces, sevens);
    }
}
