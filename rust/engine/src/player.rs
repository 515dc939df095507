use crate::cards::Card;
use crate::errors::GameError;
use serde::{Deserialize, Serialize};

/// Represents a player action during a betting round.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Fold and forfeit the hand
    Fold,
    /// Check (only valid when nothing is owed)
    Check,
    /// Call the current bet
    Call,
    /// Open the betting with the specified amount
    Bet(u32),
    /// Raise the current bet by the specified amount
    Raise(u32),
}

/// A seat at the table with its money, hole cards and round contribution.
/// The seat index doubles as the player's identity and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    seat: usize,
    money: u32,
    alive: bool,
    /// Money put in during the current betting phase
    amount_bet_in_round: u32,
    hole: [Option<Card>; 2],
}

impl Player {
    pub fn new(seat: usize, money: u32) -> Self {
        Self {
            seat,
            money,
            alive: true,
            amount_bet_in_round: 0,
            hole: [None, None],
        }
    }

    pub fn seat(&self) -> usize {
        self.seat
    }
    pub fn money(&self) -> u32 {
        self.money
    }
    pub fn is_alive(&self) -> bool {
        self.alive
    }
    pub fn amount_bet_in_round(&self) -> u32 {
        self.amount_bet_in_round
    }

    pub fn hole_cards(&self) -> [Option<Card>; 2] {
        self.hole
    }

    pub fn give_card(&mut self, c: Card) -> Result<(), GameError> {
        match self.hole.iter_mut().find(|slot| slot.is_none()) {
            Some(slot) => {
                *slot = Some(c);
                Ok(())
            }
            None => Err(GameError::HoleCardsFull),
        }
    }

    pub fn clear_cards(&mut self) {
        self.hole = [None, None];
    }

    pub(crate) fn eliminate(&mut self) {
        self.alive = false;
    }

    pub(crate) fn reset_round(&mut self) {
        self.amount_bet_in_round = 0;
    }

    pub(crate) fn receive(&mut self, amount: u32) {
        self.money = self.money.saturating_add(amount);
    }

    /// Moves `amount` out of the player's money without counting it as a
    /// bet in the round. Blinds go through here.
    pub(crate) fn pay(&mut self, amount: u32) -> Result<(), GameError> {
        if amount > self.money {
            return Err(GameError::InsufficientFunds {
                seat: self.seat,
                needed: amount,
                available: self.money,
            });
        }
        self.money -= amount;
        Ok(())
    }

    /// Pays `amount` and records it against the current betting round.
    pub(crate) fn wager(&mut self, amount: u32) -> Result<(), GameError> {
        self.pay(amount)?;
        self.amount_bet_in_round += amount;
        Ok(())
    }
}
