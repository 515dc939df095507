use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::game::Phase;
use crate::player::PlayerAction;

/// Records a single committed action.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Seat that acted
    pub seat: usize,
    /// Betting phase the action happened in
    pub phase: Phase,
    pub action: PlayerAction,
}

/// Snapshot of the hand in progress: board, committed actions and pot.
/// Serializes to a single JSON object for hand-history storage on the host.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandHistory {
    /// Counts rounds started on this table, starting at 1
    pub hand_number: u32,
    pub board: Vec<Card>,
    pub actions: Vec<ActionRecord>,
    pub pot: u32,
}

impl HandHistory {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }

    /// Actions taken during one phase, in order.
    pub fn actions_in(&self, phase: Phase) -> impl Iterator<Item = &ActionRecord> + '_ {
        self.actions.iter().filter(move |r| r.phase == phase)
    }
}
