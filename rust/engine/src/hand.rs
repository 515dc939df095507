use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank, Suit};

/// Poker hand categories, weakest first so the derived ordering matches
/// poker strength.
///
/// There is no Full House category: three of a kind plus a pair classifies
/// as [`HandRank::ThreeOfAKind`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum HandRank {
    HighCard,
    Pair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FourOfAKind,
    StraightFlush,
    RoyalFlush,
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandRank::HighCard => "High Card",
            HandRank::Pair => "Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
            HandRank::RoyalFlush => "Royal Flush",
        };
        f.write_str(name)
    }
}

/// Whether the Ace sits below the Two or above the King.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AceTreatment {
    Low,
    High,
}

impl AceTreatment {
    fn value(self, rank: Rank) -> u8 {
        match self {
            AceTreatment::Low => rank.low_value(),
            AceTreatment::High => rank.value(),
        }
    }

    /// Column of `rank` in a 13-slot presence row.
    fn slot(self, rank: Rank) -> usize {
        match self {
            AceTreatment::Low => rank.low_value() as usize - 1,
            AceTreatment::High => rank.value() as usize - 2,
        }
    }
}

// Highest category first; the first detector that matches wins.
const DETECTORS: [(HandRank, fn(&[Card]) -> bool); 8] = [
    (HandRank::RoyalFlush, is_royal_flush),
    (HandRank::StraightFlush, is_straight_flush),
    (HandRank::FourOfAKind, is_four_of_a_kind),
    (HandRank::Flush, is_flush),
    (HandRank::Straight, is_straight),
    (HandRank::ThreeOfAKind, is_three_of_a_kind),
    (HandRank::TwoPair, is_two_pair),
    (HandRank::Pair, is_pair),
];

/// Returns the best category `cards` form. Any number of cards is accepted;
/// categories that need five cards never match smaller hands.
///
/// # Examples
///
/// ```
/// use cardroom_engine::cards::{Card, Rank, Suit};
/// use cardroom_engine::hand::{classify, HandRank};
///
/// let cards = [
///     Card::new(Rank::Ten, Suit::Hearts),
///     Card::new(Rank::Jack, Suit::Hearts),
///     Card::new(Rank::Queen, Suit::Hearts),
///     Card::new(Rank::King, Suit::Hearts),
///     Card::new(Rank::Ace, Suit::Hearts),
///     Card::new(Rank::Two, Suit::Clubs),
///     Card::new(Rank::Three, Suit::Diamonds),
/// ];
/// assert_eq!(classify(&cards), HandRank::RoyalFlush);
/// assert_eq!(classify(&[]), HandRank::HighCard);
/// ```
pub fn classify(cards: &[Card]) -> HandRank {
    DETECTORS
        .iter()
        .find(|(_, detect)| detect(cards))
        .map(|&(rank, _)| rank)
        .unwrap_or(HandRank::HighCard)
}

/// Orders two hands by category only. Hands of the same category compare
/// equal; there is no kicker comparison.
pub fn compare_hands(a: &[Card], b: &[Card]) -> Ordering {
    classify(a).cmp(&classify(b))
}

/// Highest rank in the hand with the Ace high, `None` for an empty hand.
pub fn high_card(cards: &[Card]) -> Option<Rank> {
    cards.iter().map(|c| c.rank).max()
}

/// Occurrences of each rank, indexed by the rank's value (2..=14).
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct RankCounts([u8; 15]);

impl RankCounts {
    pub fn get(&self, rank: Rank) -> u8 {
        self.0[rank.value() as usize]
    }

    /// Number of distinct ranks seen exactly `n` times.
    pub fn ranks_with(&self, n: u8) -> usize {
        self.0[2..].iter().filter(|&&c| c == n).count()
    }
}

/// Occurrences of each suit, indexed by [`Suit::index`].
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct SuitCounts([u8; 4]);

impl SuitCounts {
    pub fn get(&self, suit: Suit) -> u8 {
        self.0[suit.index()]
    }

    pub fn any_with(&self, n: u8) -> bool {
        self.0.contains(&n)
    }
}

/// Counts stop at `u8::MAX`, so a huge input never wraps back into a
/// small count.
pub fn rank_counts(cards: &[Card]) -> RankCounts {
    let mut counts = RankCounts::default();
    for c in cards {
        let slot = &mut counts.0[c.rank.value() as usize];
        *slot = slot.saturating_add(1);
    }
    counts
}

pub fn suit_counts(cards: &[Card]) -> SuitCounts {
    let mut counts = SuitCounts::default();
    for c in cards {
        let slot = &mut counts.0[c.suit.index()];
        *slot = slot.saturating_add(1);
    }
    counts
}

/// Index of the first card with the given rank and suit.
pub fn find_card(cards: &[Card], rank: Rank, suit: Suit) -> Option<usize> {
    cards.iter().position(|c| c.rank == rank && c.suit == suit)
}

/// Returns a copy of `cards` sorted ascending by rank. The sort is stable,
/// so cards of equal rank keep their relative order.
pub fn order_by_rank(cards: &[Card], ace: AceTreatment) -> Vec<Card> {
    let mut ordered = cards.to_vec();
    ordered.sort_by_key(|c| ace.value(c.rank));
    ordered
}

pub fn is_royal_flush(cards: &[Card]) -> bool {
    const CHAIN: [Rank; 4] = [Rank::Jack, Rank::Queen, Rank::King, Rank::Ace];
    for ten in cards.iter().filter(|c| c.rank == Rank::Ten) {
        let mut found = true;
        for &rank in &CHAIN {
            if find_card(cards, rank, ten.suit).is_none() {
                found = false;
                break;
            }
        }
        if found {
            return true;
        }
    }
    false
}

pub fn is_straight_flush(cards: &[Card]) -> bool {
    five_in_a_row(&presence_rows(cards, AceTreatment::Low))
        || five_in_a_row(&presence_rows(cards, AceTreatment::High))
}

pub fn is_four_of_a_kind(cards: &[Card]) -> bool {
    rank_counts(cards).ranks_with(4) > 0
}

/// Matches a suit held exactly five times; six or seven suited cards do not
/// count.
pub fn is_flush(cards: &[Card]) -> bool {
    suit_counts(cards).any_with(5)
}

pub fn is_straight(cards: &[Card]) -> bool {
    if cards.len() < 5 {
        return false;
    }
    [AceTreatment::Low, AceTreatment::High].into_iter().any(|ace| {
        let values: Vec<u8> = order_by_rank(cards, ace)
            .iter()
            .map(|c| ace.value(c.rank))
            .collect();
        has_run_of_five(&values)
    })
}

pub fn is_three_of_a_kind(cards: &[Card]) -> bool {
    rank_counts(cards).ranks_with(3) > 0
}

pub fn is_two_pair(cards: &[Card]) -> bool {
    rank_counts(cards).ranks_with(2) >= 2
}

pub fn is_pair(cards: &[Card]) -> bool {
    rank_counts(cards).ranks_with(2) > 0
}

/// One row per suit; `true` where a card of that rank is present.
fn presence_rows(cards: &[Card], ace: AceTreatment) -> [[bool; 13]; 4] {
    let mut rows = [[false; 13]; 4];
    for c in cards {
        rows[c.suit.index()][ace.slot(c.rank)] = true;
    }
    rows
}

fn five_in_a_row(rows: &[[bool; 13]; 4]) -> bool {
    rows.iter().any(|row| {
        let mut count = 0;
        for &present in row {
            count = if present { count + 1 } else { 0 };
            if count == 5 {
                return true;
            }
        }
        false
    })
}

// Duplicates neither extend nor break a run.
fn has_run_of_five(sorted: &[u8]) -> bool {
    let mut run = 1;
    for w in sorted.windows(2) {
        if w[1] == w[0] + 1 {
            run += 1;
        } else if w[1] > w[0] + 1 {
            run = 1;
        }
        if run == 5 {
            return true;
        }
    }
    false
}
