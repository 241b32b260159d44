use deck_vector::cards::{high_card, spades_high, Card, CardError, Rank, Suit};
use deck_vector::ErrorKind;
use proptest::prelude::*;
use std::collections::HashSet;

prop_compose! {
    fn any_rank()(i in 0usize..13) -> Rank {
        Rank::ALL[i]
    }
}

fn any_suit() -> impl Strategy<Value = Suit> {
    prop_oneof![Just(Suit::Spades), Just(Suit::Hearts), Just(Suit::Diamonds), Just(Suit::Clubs),]
}

fn any_card() -> impl Strategy<Value = Card> {
    (any_rank(), any_suit()).prop_map(|(r, s)| Card::new(r, s))
}

proptest! {
    #[test]
    fn card_round_trips_rank_and_suit(r in any_rank(), s in any_suit()) {
        let c = Card::new(r, s);
        prop_assert_eq!(c.rank(), r);
        prop_assert_eq!(c.suit(), s);
        prop_assert_eq!(c.to_string().parse::<Card>().unwrap(), c);
        prop_assert_eq!(c.short().parse::<Card>().unwrap(), c);
    }

    #[test]
    fn ordering_matches_value_tuple(a in any_card(), b in any_card()) {
        let ka = (a.rank().value(), a.suit().order());
        let kb = (b.rank().value(), b.suit().order());
        prop_assert_eq!(a < b, ka < kb);
        prop_assert_eq!(a.cmp(&b), ka.cmp(&kb));
        prop_assert_eq!(a == b, ka == kb);
    }

    #[test]
    fn spades_high_is_injective(a in any_card(), b in any_card()) {
        prop_assert_eq!(spades_high(a) == spades_high(b), a == b);
    }

    #[test]
    fn high_card_has_max_rank_and_is_first(cards in prop::collection::vec(any_card(), 1..20)) {
        let best = high_card(&cards).unwrap();
        let max = cards.iter().map(|c| c.rank()).max().unwrap();
        prop_assert_eq!(best.rank(), max);
        let first = cards.iter().find(|c| c.rank() == max).copied().unwrap();
        prop_assert_eq!(best, first);
    }
}

#[test]
fn high_card_examples() {
    let cards = [
        Card::new(Rank::King, Suit::Hearts),
        Card::new(Rank::Ace, Suit::Spades),
        Card::new(Rank::Queen, Suit::Diamonds),
    ];
    assert_eq!(high_card(&cards), Ok(Card::new(Rank::Ace, Suit::Spades)));
    let err = high_card(&[]).unwrap_err();
    assert_eq!(err, CardError::Empty);
    assert_eq!(err.kind(), ErrorKind::Value);
}

#[test]
fn cards_work_as_set_keys() {
    let mut set = HashSet::new();
    assert!(set.insert(Card::new(Rank::Ten, Suit::Clubs)));
    assert!(!set.insert(Card::new(Rank::Ten, Suit::Clubs)));
    assert!(set.contains(&"Tc".parse::<Card>().unwrap()));
}

#[test]
fn unsupported_comparison_reports_type() {
    let card = Card::new(Rank::Jack, Suit::Diamonds);
    assert!(card.partial_cmp_any(&11u32).is_none());
    let err = card.try_cmp(&String::from("Jack of Diamonds")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Type);
    assert!(err.to_string().contains("String"));
}
