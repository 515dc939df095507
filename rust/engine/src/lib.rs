//! # cardroom-engine: Poker Table Core
//!
//! Hand-rank classification and a betting-round state machine for a
//! multi-seat poker table. The crate performs no I/O: hosts feed it seat
//! actions and read back results or descriptive errors.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and card-list helpers
//! - [`deck`] - Seeded 52-card deck dealt from the end
//! - [`hand`] - Hand-rank classification
//! - [`game`] - Betting state machine: blinds, turn order, pot
//! - [`player`] - Seat records and player actions
//! - [`rules`] - Action validation, separate from committing
//! - [`seats`] - Removable set of participating seats
//! - [`history`] - Serializable record of a hand's actions
//! - [`config`] - Table parameters and TOML loading
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use cardroom_engine::cards::{Card, Rank, Suit};
//! use cardroom_engine::hand::{classify, HandRank};
//!
//! let cards = [
//!     Card::new(Rank::Nine, Suit::Clubs),
//!     Card::new(Rank::Nine, Suit::Hearts),
//!     Card::new(Rank::Nine, Suit::Spades),
//!     Card::new(Rank::Nine, Suit::Diamonds),
//!     Card::new(Rank::King, Suit::Clubs),
//! ];
//! assert_eq!(classify(&cards), HandRank::FourOfAKind);
//! ```
//!
//! ## Running a Betting Round
//!
//! ```rust
//! use cardroom_engine::config::TableConfig;
//! use cardroom_engine::game::{GameState, Phase};
//!
//! let cfg = TableConfig { num_players: 3, seed: Some(42), ..TableConfig::default() };
//! let mut game = GameState::from_config(&cfg).unwrap();
//! game.new_round().unwrap();
//!
//! // Seat 2 acts first, right after the big blind.
//! game.check(2).unwrap();
//! game.check(0).unwrap();
//! game.check(1).unwrap();
//! assert_eq!(game.advance_phase().unwrap(), Phase::Flop);
//! assert_eq!(game.board().len(), 3);
//! ```

pub mod cards;
pub mod config;
pub mod deck;
pub mod errors;
pub mod game;
pub mod hand;
pub mod history;
pub mod player;
pub mod rules;
pub mod seats;
