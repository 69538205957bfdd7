use std::ops::{Index, RangeFull};

use rand::Rng;
use rand::seq::SliceRandom;

use super::card::{Card, Suit, Value};
use super::TrainerError;

/// Return a shuffled copy of `items`. The input is never touched.
///
/// This is a Fisher-Yates shuffle walking from the tail, so every
/// permutation is equally likely given a uniform `rng`.
pub fn shuffle<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = items.to_vec();
    shuffled.shuffle(rng);
    shuffled
}

/// `Deck` is an ordered sequence of cards that are dealt from the end.
///
/// Dealing never hands out part of a request: if the deck can't cover the
/// whole deal it is left untouched and `TrainerError::DeckExhausted` is
/// returned.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Deck {
    /// Card storage. The last card is the next one dealt.
    cards: Vec<Card>,
}

impl Deck {
    /// Create an empty deck.
    pub fn new() -> Self {
        Self { cards: vec![] }
    }

    /// Create the 52 card deck in a fixed order. Suits go spades, hearts,
    /// diamonds, clubs and values go two through ace inside each suit.
    ///
    /// ```
    /// use holdem_trainer::core::{Card, Deck, Suit, Value};
    ///
    /// let deck = Deck::ordered();
    /// assert_eq!(52, deck.len());
    /// assert_eq!(Card::new(Value::Two, Suit::Spade), deck[0]);
    /// assert_eq!(Card::new(Value::Ace, Suit::Club), deck[51]);
    /// ```
    pub fn ordered() -> Self {
        let cards = Suit::suits()
            .iter()
            .flat_map(|s| Value::values().into_iter().map(move |v| Card::new(v, *s)))
            .collect();
        Self { cards }
    }

    /// A freshly shuffled copy of this deck.
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        Self {
            cards: shuffle(&self.cards, rng),
        }
    }

    /// How many cards are there in the deck ?
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Have all cards been dealt ?
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Given a card, is it still in the deck?
    pub fn contains(&self, c: &Card) -> bool {
        self.cards.contains(c)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Add a card to the end of the deck, making it the next one dealt.
    /// This does not check if the card is already in the deck.
    pub fn push(&mut self, c: Card) {
        self.cards.push(c);
    }

    /// Deal one card from the end of the deck.
    pub fn deal(&mut self) -> Result<Card, TrainerError> {
        self.cards.pop().ok_or(TrainerError::DeckExhausted {
            needed: 1,
            remaining: 0,
        })
    }

    /// Deal `n` cards in pop order, or none at all.
    ///
    /// ```
    /// use holdem_trainer::core::{Deck, TrainerError};
    ///
    /// let mut deck = Deck::ordered();
    /// let top = deck[51];
    /// assert_eq!(top, deck.deal_n(3).unwrap()[0]);
    /// assert_eq!(49, deck.len());
    ///
    /// let err = deck.deal_n(50).unwrap_err();
    /// assert_eq!(TrainerError::DeckExhausted { needed: 50, remaining: 49 }, err);
    /// assert_eq!(49, deck.len());
    /// ```
    pub fn deal_n(&mut self, n: usize) -> Result<Vec<Card>, TrainerError> {
        self.ensure(n)?;
        let split = self.cards.len() - n;
        let mut dealt = self.cards.split_off(split);
        dealt.reverse();
        Ok(dealt)
    }

    /// Check that `needed` cards can be dealt.
    pub fn ensure(&self, needed: usize) -> Result<(), TrainerError> {
        if self.cards.len() < needed {
            Err(TrainerError::DeckExhausted {
                needed,
                remaining: self.cards.len(),
            })
        } else {
            Ok(())
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::ordered()
    }
}

impl Index<usize> for Deck {
    type Output = Card;
    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}

impl Index<RangeFull> for Deck {
    type Output = [Card];
    fn index(&self, index: RangeFull) -> &[Card] {
        &self.cards[index]
    }
}

impl From<Vec<Card>> for Deck {
    fn from(value: Vec<Card>) -> Self {
        Self { cards: value }
    }
}

/// Turn a deck into an iterator
impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;
    /// Consume this deck and create a new iterator.
    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn test_ordered_is_unique() {
        let d = Deck::ordered();
        assert_eq!(52, d.len());
        let unique: HashSet<Card> = d.iter().copied().collect();
        assert_eq!(52, unique.len());
    }

    #[test]
    fn test_ordered_is_deterministic() {
        assert_eq!(Deck::ordered(), Deck::ordered());
        assert_eq!(Deck::ordered(), Deck::default());
    }

    #[test]
    fn test_shuffle_keeps_input() {
        let d = Deck::ordered();
        let mut rng = StdRng::seed_from_u64(420);
        let shuffled = d.shuffled(&mut rng);

        assert_eq!(Deck::ordered(), d);
        assert_eq!(52, shuffled.len());
        let unique: HashSet<Card> = shuffled.iter().copied().collect();
        assert_eq!(52, unique.len());
        assert_ne!(d, shuffled);
    }

    #[test]
    fn test_shuffle_rng() {
        let mut rng_one = StdRng::seed_from_u64(420);
        let mut rng_two = StdRng::seed_from_u64(420);

        assert_eq!(
            Deck::ordered().shuffled(&mut rng_one),
            Deck::ordered().shuffled(&mut rng_two)
        );
    }

    #[test]
    fn test_shuffle_generic() {
        let mut rng = StdRng::seed_from_u64(7);
        let items = [1, 2, 3, 4, 5];
        let mut out = shuffle(&items, &mut rng);
        out.sort();
        assert_eq!(items.to_vec(), out);
    }

    #[test]
    fn test_deal_pops_from_tail() {
        let c = Card::new(Value::Nine, Suit::Heart);
        let c2 = Card::new(Value::Ten, Suit::Heart);
        let mut d = Deck::new();
        d.push(c);
        d.push(c2);

        assert_eq!(c2, d.deal().unwrap());
        assert_eq!(c, d.deal().unwrap());
        assert!(d.is_empty());
        assert_eq!(
            Err(TrainerError::DeckExhausted {
                needed: 1,
                remaining: 0
            }),
            d.deal()
        );
    }

    #[test]
    fn test_failed_deal_keeps_cards() {
        let mut d: Deck = vec![Card::new(Value::Two, Suit::Club)].into();
        assert!(d.deal_n(2).is_err());
        assert_eq!(1, d.len());
    }
}
