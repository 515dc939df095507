use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::GameError;

/// One of the four suits of a standard 52-card deck.
/// Suits carry no strength of their own; they only matter for flushes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Spades (♠)
    Spades,
    /// Clubs (♣)
    Clubs,
    /// Hearts (♥)
    Hearts,
    /// Diamonds (♦)
    Diamonds,
}

impl Suit {
    /// Position of the suit in [`all_suits`], used to index fixed-size tables.
    pub fn index(self) -> usize {
        match self {
            Suit::Spades => 0,
            Suit::Clubs => 1,
            Suit::Hearts => 2,
            Suit::Diamonds => 3,
        }
    }

    fn symbol(self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Clubs => '♣',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
        }
    }
}

/// Face value of a card from Two (2) through Ace (14).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Rank 2
    Two = 2,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13)
    King,
    /// Ace (14)
    Ace,
}

impl Rank {
    pub fn from_u8(v: u8) -> Option<Rank> {
        match v {
            2 => Some(Rank::Two),
            3 => Some(Rank::Three),
            4 => Some(Rank::Four),
            5 => Some(Rank::Five),
            6 => Some(Rank::Six),
            7 => Some(Rank::Seven),
            8 => Some(Rank::Eight),
            9 => Some(Rank::Nine),
            10 => Some(Rank::Ten),
            11 => Some(Rank::Jack),
            12 => Some(Rank::Queen),
            13 => Some(Rank::King),
            14 => Some(Rank::Ace),
            _ => None,
        }
    }

    /// Numeric value with the Ace high (2..=14).
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Numeric value with the Ace low (1..=13).
    pub fn low_value(self) -> u8 {
        match self {
            Rank::Ace => 1,
            r => r as u8,
        }
    }

    fn symbol(self) -> char {
        match self {
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
            r => char::from(b'0' + r as u8),
        }
    }
}

/// A single playing card. Cards are plain values: two cards with the same
/// rank and suit are the same card, and cards order by rank first.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// The rank of the card (Two through Ace)
    pub rank: Rank,
    /// The suit of the card
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.symbol())
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Spades, Suit::Clubs, Suit::Hearts, Suit::Diamonds]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ]
}

pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(52);
    for &s in &all_suits() {
        for &r in &all_ranks() {
            v.push(Card { rank: r, suit: s });
        }
    }
    v
}

/// Removes the card at `idx` in place, keeping the order of the rest.
///
/// # Errors
///
/// [`GameError::CardIndexOutOfRange`] if `idx` is past the end; `cards` is
/// left as it was.
pub fn remove_card(cards: &mut Vec<Card>, idx: usize) -> Result<Card, GameError> {
    if idx >= cards.len() {
        return Err(GameError::CardIndexOutOfRange {
            index: idx,
            len: cards.len(),
        });
    }
    Ok(cards.remove(idx))
}

/// Returns an owned copy of `cards` without the card at `idx`.
/// The caller's slice is never touched.
pub fn copy_and_remove_card(cards: &[Card], idx: usize) -> Result<Vec<Card>, GameError> {
    let mut copy = cards.to_vec();
    remove_card(&mut copy, idx)?;
    Ok(copy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_short_symbols() {
        assert_eq!(Card::new(Rank::Ace, Suit::Spades).to_string(), "A♠");
        assert_eq!(Card::new(Rank::Ten, Suit::Hearts).to_string(), "T♥");
        assert_eq!(Card::new(Rank::Seven, Suit::Clubs).to_string(), "7♣");
    }

    #[test]
    fn rank_round_trips_through_u8() {
        for r in all_ranks() {
            assert_eq!(Rank::from_u8(r.value()), Some(r));
        }
        assert_eq!(Rank::from_u8(1), None);
        assert_eq!(Rank::from_u8(15), None);
    }

    #[test]
    fn cards_order_by_rank_first() {
        let two = Card::new(Rank::Two, Suit::Diamonds);
        let ace = Card::new(Rank::Ace, Suit::Spades);
        assert!(two < ace);
    }
}
