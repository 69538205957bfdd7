use std::fmt;

use super::TrainerError;

/// Card rank or value.
/// This is basically the face value - 2
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// 2
    Two = 0,
    /// 3
    Three = 1,
    /// 4
    Four = 2,
    /// 5
    Five = 3,
    /// 6
    Six = 4,
    /// 7
    Seven = 5,
    /// 8
    Eight = 6,
    /// 9
    Nine = 7,
    /// T
    Ten = 8,
    /// J
    Jack = 9,
    /// Q
    Queen = 10,
    /// K
    King = 11,
    /// A
    Ace = 12,
}

/// Constant of all the values.
/// This is what `Value::values()` returns
const VALUES: [Value; 13] = [
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

impl Value {
    /// Get all of the `Value`'s that are possible, lowest first.
    /// This is used to iterate through all possible
    /// values when creating a new deck.
    pub const fn values() -> [Value; 13] {
        VALUES
    }

    /// Index of this value from Two (0) to Ace (12).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Face value as used when counting straights, Two is 2 and Ace is 14.
    pub const fn face(self) -> u8 {
        self as u8 + 2
    }

    pub fn from_char(c: char) -> Option<Value> {
        match c {
            'A' | 'a' => Some(Value::Ace),
            'K' | 'k' => Some(Value::King),
            'Q' | 'q' => Some(Value::Queen),
            'J' | 'j' => Some(Value::Jack),
            'T' | 't' => Some(Value::Ten),
            '9' => Some(Value::Nine),
            '8' => Some(Value::Eight),
            '7' => Some(Value::Seven),
            '6' => Some(Value::Six),
            '5' => Some(Value::Five),
            '4' => Some(Value::Four),
            '3' => Some(Value::Three),
            '2' => Some(Value::Two),
            _ => None,
        }
    }

    pub const fn to_char(self) -> char {
        match self {
            Value::Ace => 'A',
            Value::King => 'K',
            Value::Queen => 'Q',
            Value::Jack => 'J',
            Value::Ten => 'T',
            Value::Nine => '9',
            Value::Eight => '8',
            Value::Seven => '7',
            Value::Six => '6',
            Value::Five => '5',
            Value::Four => '4',
            Value::Three => '3',
            Value::Two => '2',
        }
    }
}

/// Enum for the four different suits.
/// While this has support for ordering it's not
/// sensical. The sorting is only there to allow sorting cards.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    /// Spades
    Spade = 0,
    /// Hearts
    Heart = 1,
    /// Diamonds
    Diamond = 2,
    /// Clubs
    Club = 3,
}

/// All of the `Suit`'s, in dealing order. This is what `Suit::suits()`
/// returns.
const SUITS: [Suit; 4] = [Suit::Spade, Suit::Heart, Suit::Diamond, Suit::Club];

impl Suit {
    /// Provide all the Suit's that there are.
    pub const fn suits() -> [Suit; 4] {
        SUITS
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Accepts both the single letter and the symbol forms.
    pub fn from_char(s: char) -> Option<Suit> {
        match s {
            's' | '♠' => Some(Suit::Spade),
            'h' | '♥' => Some(Suit::Heart),
            'd' | '♦' => Some(Suit::Diamond),
            'c' | '♣' => Some(Suit::Club),
            _ => None,
        }
    }

    /// The single lowercase letter used by hand history sites.
    pub const fn to_char(self) -> char {
        match self {
            Suit::Spade => 's',
            Suit::Heart => 'h',
            Suit::Diamond => 'd',
            Suit::Club => 'c',
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Suit::Spade => '♠',
            Suit::Heart => '♥',
            Suit::Diamond => '♦',
            Suit::Club => '♣',
        }
    }
}

/// The main struct of this library.
/// This is a carrier for Suit and Value combined.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    /// The face value of this card.
    pub value: Value,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    pub const fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }

    /// The PokerStars rendering of a card, value then suit letter.
    ///
    /// ```
    /// use holdem_trainer::core::{Card, Suit, Value};
    ///
    /// assert_eq!("Td", Card::new(Value::Ten, Suit::Diamond).to_pokerstars());
    /// ```
    pub fn to_pokerstars(&self) -> String {
        format!("{}{}", self.value.to_char(), self.suit.to_char())
    }
}

/// Displays with the suit symbol, e.g. `A♠`.
impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value.to_char(), self.suit.symbol())
    }
}

/// Parse a two character card such as `As` or `K♥`.
///
/// ```
/// use holdem_trainer::core::{Card, Suit, Value};
///
/// let card = Card::try_from("K♥").unwrap();
/// assert_eq!(Card::new(Value::King, Suit::Heart), card);
/// assert_eq!(card, Card::try_from("Kh").unwrap());
/// ```
impl TryFrom<&str> for Card {
    type Error = TrainerError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let mut chars = value.chars();
        let value = chars
            .next()
            .ok_or(TrainerError::TooFewChars)
            .and_then(|c| Value::from_char(c).ok_or(TrainerError::UnexpectedValueChar))?;
        let suit = chars
            .next()
            .ok_or(TrainerError::TooFewChars)
            .and_then(|c| Suit::from_char(c).ok_or(TrainerError::UnexpectedSuitChar))?;
        if chars.next().is_some() {
            return Err(TrainerError::UnparsedCharsRemaining);
        }
        Ok(Card { value, suit })
    }
}
