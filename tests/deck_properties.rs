use deck_vector::cards::{Card, Rank, Suit};
use deck_vector::deck::{cards_by_suit, Deck, DeckError, SortOrder, DECK_SIZE};
use deck_vector::ErrorKind;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

fn full_set() -> HashSet<Card> {
    Rank::ALL.iter().flat_map(|&r| Suit::ALL.iter().map(move |&s| Card::new(r, s))).collect()
}

fn shuffled(seed: u64) -> Deck {
    let mut d = Deck::standard();
    d.shuffle_with(&mut ChaCha8Rng::seed_from_u64(seed));
    d
}

#[test]
fn fresh_deck_is_the_full_cross_product() {
    let d = Deck::standard();
    assert_eq!(d.len(), DECK_SIZE);
    let set: HashSet<Card> = d.iter().copied().collect();
    assert_eq!(set.len(), DECK_SIZE);
    assert_eq!(set, full_set());
}

#[test]
fn indexing_and_membership() {
    let d = Deck::standard();
    assert_eq!(d.get(0), Ok(Card::new(Rank::Two, Suit::Spades)));
    assert_eq!(d.get(-1), Ok(Card::new(Rank::Ace, Suit::Clubs)));
    let err = d.get(52).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Index);
    assert!(matches!(d.get(-53), Err(DeckError::IndexOutOfRange { index: -53, len: 52 })));
    assert!(d.contains(&Card::new(Rank::Queen, Suit::Hearts)));
    assert_eq!(d.get_range(..3).len(), 3);
}

#[test]
fn shuffle_changes_order_but_not_contents() {
    let mut d = Deck::standard();
    d.shuffle();
    let set: HashSet<Card> = d.iter().copied().collect();
    assert_eq!(set, full_set());
}

#[test]
fn iteration_reflects_later_reordering() {
    let mut d = Deck::standard();
    let before: Vec<Card> = d.iter().copied().collect();
    d.sort(false);
    let after: Vec<Card> = (&d).into_iter().copied().collect();
    assert_ne!(before, after);
    assert_eq!(after, d.to_vec());
}

proptest! {
    #[test]
    fn shuffle_preserves_the_card_set(seed in any::<u64>()) {
        let d = shuffled(seed);
        prop_assert_eq!(d.len(), DECK_SIZE);
        let set: HashSet<Card> = d.iter().copied().collect();
        prop_assert_eq!(set, full_set());
    }

    #[test]
    fn sort_by_rank_is_non_decreasing(seed in any::<u64>()) {
        let mut d = shuffled(seed);
        d.sort(false);
        for w in d.as_slice().windows(2) {
            prop_assert!(w[0].rank() <= w[1].rank());
            prop_assert!(w[0] < w[1]);
        }
    }

    #[test]
    fn sort_by_suit_is_non_decreasing(seed in any::<u64>()) {
        let mut d = shuffled(seed);
        d.sort(true);
        for w in d.as_slice().windows(2) {
            prop_assert!(w[0].suit() <= w[1].suit());
            if w[0].suit() == w[1].suit() {
                prop_assert!(w[0].rank() < w[1].rank());
            }
        }
    }

    #[test]
    fn sorting_is_independent_of_starting_order(a in any::<u64>(), b in any::<u64>()) {
        let mut da = shuffled(a);
        let mut db = shuffled(b);
        da.sort_by_order(SortOrder::SpadesHigh);
        db.sort_by_order(SortOrder::SpadesHigh);
        prop_assert_eq!(da, db);
    }

    #[test]
    fn reverse_iteration_mirrors_forward(seed in any::<u64>()) {
        let d = shuffled(seed);
        let mut forward: Vec<Card> = d.iter().copied().collect();
        forward.reverse();
        let backward: Vec<Card> = d.rev_iter().copied().collect();
        prop_assert_eq!(&forward, &backward);
        let mut flipped = d.clone();
        flipped.reverse();
        prop_assert_eq!(flipped.to_vec(), backward);
    }

    #[test]
    fn cards_by_suit_yields_thirteen(seed in any::<u64>(), i in 0usize..4) {
        let suit = Suit::ALL[i];
        let d = shuffled(seed);
        let picked = cards_by_suit(&d, suit);
        prop_assert_eq!(picked.len(), 13);
        prop_assert!(picked.iter().all(|c| c.suit() == suit));
        let in_order: Vec<Card> = d.iter().copied().filter(|c| c.suit() == suit).collect();
        prop_assert_eq!(picked, in_order);
    }

    #[test]
    fn get_range_matches_get(start in 0usize..60, len in 0usize..60) {
        let d = Deck::standard();
        let got = d.get_range(start..start + len);
        let expected: Vec<Card> = (start..start + len)
            .filter_map(|i| d.get(i as isize).ok())
            .collect();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn from_cards_accepts_any_permutation(seed in any::<u64>()) {
        let cards = shuffled(seed).into_vec();
        let d = Deck::from_cards(cards.clone()).unwrap();
        prop_assert_eq!(d.into_vec(), cards);
    }
}
