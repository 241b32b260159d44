use crate::cards::{high_card, spades_high, Card, CardError, Rank, Suit};
use crate::error::ErrorKind;
use log::{debug, trace};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;
use std::fmt;
use std::ops::{Bound, Index, RangeBounds};

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("deck index {index} out of range for length {len}")]
    IndexOutOfRange { index: isize, len: usize },
    #[error("expected 52 cards, got {0}")]
    WrongSize(usize),
    #[error("duplicate card in deck: {0}")]
    DuplicateCard(Card),
}

impl DeckError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DeckError::IndexOutOfRange { .. } => ErrorKind::Index,
            DeckError::WrongSize(_) | DeckError::DuplicateCard(_) => ErrorKind::Value,
        }
    }
}

/// Sort keys understood by [`Deck::sort_by_order`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum SortOrder {
    /// Rank ascending, then suit.
    #[default]
    Rank,
    /// Suit ascending, then rank.
    Suit,
    /// Bridge ranking, see [`spades_high`].
    SpadesHigh,
}

/// A standard 52-card deck holding exactly one card per (rank, suit).
///
/// Shuffling and sorting only reorder the cards; nothing is ever drawn or added.
/// With the `serde` feature a deck serializes as its card list and deserializes
/// through [`Deck::from_cards`], so malformed input is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Card>", into = "Vec<Card>")
)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Canonical order: suits in [`Suit::ALL`] order, ranks ascending within each suit.
    ///
    /// ```
    /// use deck_vector::cards::{Card, Rank, Suit};
    /// use deck_vector::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// assert_eq!(deck.get(0).unwrap(), Card::new(Rank::Two, Suit::Spades));
    /// assert_eq!(deck.get(-1).unwrap(), Card::new(Rank::Ace, Suit::Clubs));
    /// ```
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for s in Suit::ALL {
            for r in Rank::ALL {
                cards.push(Card::new(r, s));
            }
        }
        trace!("built standard deck of {} cards", cards.len());
        Self { cards }
    }

    pub fn new() -> Self {
        Self::standard()
    }

    /// Build a deck from an explicit ordering, checking it is a full deck.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, DeckError> {
        if cards.len() != DECK_SIZE {
            return Err(DeckError::WrongSize(cards.len()));
        }
        let mut seen = HashSet::with_capacity(DECK_SIZE);
        for &c in &cards {
            if !seen.insert(c) {
                return Err(DeckError::DuplicateCard(c));
            }
        }
        Ok(Self { cards })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Card at `index`; negative indexes count back from the end.
    pub fn get(&self, index: isize) -> Result<Card, DeckError> {
        let len = self.cards.len();
        let pos = if index < 0 { index.checked_add(len as isize) } else { Some(index) };
        pos.and_then(|p| usize::try_from(p).ok())
            .and_then(|p| self.cards.get(p).copied())
            .ok_or(DeckError::IndexOutOfRange { index, len })
    }

    /// Cards in `range` as a new vector.
    ///
    /// Bounds past the end are clamped and an inverted range is empty, so this never fails.
    pub fn get_range<R: RangeBounds<usize>>(&self, range: R) -> Vec<Card> {
        let len = self.cards.len();
        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s.saturating_add(1),
            Bound::Unbounded => 0,
        }
        .min(len);
        let end = match range.end_bound() {
            Bound::Included(&e) => e.saturating_add(1),
            Bound::Excluded(&e) => e,
            Bound::Unbounded => len,
        }
        .min(len);
        if start >= end {
            return Vec::new();
        }
        self.cards[start..end].to_vec()
    }

    /// Iterate over the cards in current order. Use `.rev()` for reverse order.
    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    pub fn rev_iter(&self) -> std::iter::Rev<std::slice::Iter<'_, Card>> {
        self.cards.iter().rev()
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    pub fn to_vec(&self) -> Vec<Card> {
        self.cards.clone()
    }

    pub fn into_vec(self) -> Vec<Card> {
        self.cards
    }

    /// Shuffle using the thread-local RNG.
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::rng());
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        debug!("shuffling deck with seed {seed}");
        self.shuffle_with(&mut rng);
    }

    /// Shuffle using the provided RNG implementing Rng.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
        debug!("shuffled deck of {} cards", self.cards.len());
    }

    /// Stable sort by (rank, suit), or by (suit, rank) when `by_suit` is set.
    ///
    /// ```
    /// use deck_vector::cards::{Card, Rank, Suit};
    /// use deck_vector::deck::Deck;
    ///
    /// let mut deck = Deck::standard();
    /// deck.shuffle_seeded(3);
    /// deck.sort(false);
    /// assert_eq!(deck.get(0).unwrap(), Card::new(Rank::Two, Suit::Spades));
    /// assert_eq!(deck.get(1).unwrap(), Card::new(Rank::Two, Suit::Hearts));
    /// ```
    pub fn sort(&mut self, by_suit: bool) {
        self.sort_by_order(if by_suit { SortOrder::Suit } else { SortOrder::Rank });
    }

    pub fn sort_by_order(&mut self, order: SortOrder) {
        match order {
            SortOrder::Rank => self.cards.sort_by_key(|c| c.sort_key()),
            SortOrder::Suit => self.cards.sort_by_key(|c| (c.suit(), c.rank())),
            SortOrder::SpadesHigh => self.cards.sort_by_key(|&c| spades_high(c)),
        }
        debug!("sorted deck by {order:?}");
    }

    /// Reverse the current order in place.
    pub fn reverse(&mut self) {
        self.cards.reverse();
        debug!("reversed deck");
    }

    /// Highest-ranked card in current order, see [`high_card`].
    pub fn highest_card(&self) -> Result<Card, CardError> {
        high_card(&self.cards)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Deck with {} cards", self.cards.len())
    }
}

impl TryFrom<Vec<Card>> for Deck {
    type Error = DeckError;

    fn try_from(cards: Vec<Card>) -> Result<Self, DeckError> {
        Deck::from_cards(cards)
    }
}

impl From<Deck> for Vec<Card> {
    fn from(deck: Deck) -> Self {
        deck.cards
    }
}

impl Index<usize> for Deck {
    type Output = Card;

    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

/// All cards of `suit` in the deck's current order.
pub fn cards_by_suit(deck: &Deck, suit: Suit) -> Vec<Card> {
    deck.iter().copied().filter(|c| c.suit() == suit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_deck_has_52_cards() {
        let d = Deck::standard();
        assert_eq!(d.len(), 52);
        assert!(!d.is_empty());
        assert_eq!(d.to_string(), "Deck with 52 cards");
    }

    #[test]
    fn canonical_position_is_suit_major() {
        let d = Deck::standard();
        for (si, s) in Suit::ALL.into_iter().enumerate() {
            for (ri, r) in Rank::ALL.into_iter().enumerate() {
                assert_eq!(d[si * 13 + ri], Card::new(r, s));
            }
        }
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let mut d1 = Deck::standard();
        let mut d2 = Deck::standard();
        d1.shuffle_seeded(42);
        d2.shuffle_seeded(42);
        assert_eq!(d1.cards, d2.cards);
        assert_ne!(d1, Deck::standard());
    }

    #[test]
    fn get_normalises_negative_indexes() {
        let d = Deck::standard();
        assert_eq!(d.get(-52).unwrap(), d[0]);
        assert_eq!(d.get(51).unwrap(), d[51]);
        let err = d.get(52).unwrap_err();
        assert_eq!(err, DeckError::IndexOutOfRange { index: 52, len: 52 });
        assert_eq!(err.kind(), ErrorKind::Index);
        assert!(d.get(-53).is_err());
        assert!(d.get(isize::MIN).is_err());
    }

    #[test]
    fn get_range_clamps_and_copies() {
        let d = Deck::standard();
        assert_eq!(d.get_range(..3), d.as_slice()[..3].to_vec());
        assert_eq!(d.get_range(12..=13).len(), 2);
        assert_eq!(d.get_range(50..100).len(), 2);
        assert!(d.get_range(10..5).is_empty());
        let mut copy = d.get_range(..);
        copy.clear();
        assert_eq!(d.len(), 52);
    }

    #[test]
    fn from_cards_rejects_bad_decks() {
        let mut cards = Deck::standard().into_vec();
        assert_eq!(Deck::from_cards(cards[..51].to_vec()), Err(DeckError::WrongSize(51)));
        cards[1] = cards[0];
        let err = Deck::from_cards(cards).unwrap_err();
        assert_eq!(err, DeckError::DuplicateCard(Card::new(Rank::Two, Suit::Spades)));
        assert_eq!(err.kind(), ErrorKind::Value);
    }

    #[test]
    fn vec_conversions_go_through_validation() {
        let mut d = Deck::standard();
        d.shuffle_seeded(3);
        let cards: Vec<Card> = d.clone().into();
        assert_eq!(Deck::try_from(cards), Ok(d));
        assert_eq!(Deck::try_from(Vec::new()), Err(DeckError::WrongSize(0)));
    }

    #[test]
    fn spades_high_order_ends_with_ace_of_spades() {
        let mut d = Deck::standard();
        d.sort_by_order(SortOrder::SpadesHigh);
        assert_eq!(d[0], Card::new(Rank::Two, Suit::Clubs));
        assert_eq!(d[51], Card::new(Rank::Ace, Suit::Spades));
    }

    #[test]
    fn highest_card_in_canonical_deck_is_first_ace() {
        let d = Deck::standard();
        assert_eq!(d.highest_card().unwrap(), Card::new(Rank::Ace, Suit::Spades));
    }

    #[test]
    fn cards_by_suit_keeps_deck_order() {
        let hearts = cards_by_suit(&Deck::standard(), Suit::Hearts);
        assert_eq!(hearts.len(), 13);
        assert_eq!(hearts[0], Card::new(Rank::Two, Suit::Hearts));
        assert_eq!(hearts[12], Card::new(Rank::Ace, Suit::Hearts));
    }
}
