use std::collections::HashSet;

use cardroom_engine::cards::Card;
use cardroom_engine::deck::Deck;
use cardroom_engine::errors::{ErrorKind, GameError};

#[test]
fn deck_holds_52_unique_cards_then_runs_dry() {
    let mut deck = Deck::new_with_seed(42);
    assert_eq!(deck.remaining(), 52);
    let mut set = HashSet::new();
    for i in 0..52 {
        let c = deck.draw().expect("should have 52 cards");
        assert!(set.insert(c), "card {:?} duplicated at position {}", c, i);
        assert_eq!(deck.remaining(), 51 - i);
    }
    let err = deck.draw().unwrap_err();
    assert_eq!(err, GameError::DeckEmpty);
    assert_eq!(err.kind(), ErrorKind::ExhaustedResource);
    assert!(deck.burn().is_err());
}

#[test]
fn same_seed_yields_identical_order() {
    let mut d1 = Deck::new_with_seed(12345);
    let mut d2 = Deck::new_with_seed(12345);
    let a: Vec<Card> = (0..10).map(|_| d1.draw().unwrap()).collect();
    let b: Vec<Card> = (0..10).map(|_| d2.draw().unwrap()).collect();
    assert_eq!(a, b, "same seed must yield identical order");
}

#[test]
fn different_seeds_differ() {
    let mut d1 = Deck::new_with_seed(1);
    let mut d2 = Deck::new_with_seed(2);
    let a: Vec<Card> = (0..10).map(|_| d1.draw().unwrap()).collect();
    let b: Vec<Card> = (0..10).map(|_| d2.draw().unwrap()).collect();
    assert_ne!(
        a, b,
        "different seeds should produce different orders (high probability)"
    );
}

#[test]
fn shuffle_restores_the_full_deck() {
    let mut deck = Deck::new_with_seed(777);
    for _ in 0..20 {
        deck.burn().unwrap();
    }
    assert_eq!(deck.remaining(), 32);
    deck.shuffle();
    assert_eq!(deck.remaining(), 52);
}

#[test]
fn unseeded_decks_are_full() {
    let deck = Deck::new();
    assert_eq!(deck.remaining(), 52);
}
