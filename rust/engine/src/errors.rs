use thiserror::Error;

/// Broad class of a [`GameError`], used by hosts that only care whether to
/// re-prompt a player, report a bad lookup, or abort the deal.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ErrorKind {
    /// Out-of-turn or rule-breaking action; state is left untouched.
    IllegalAction,
    /// Seat, card index or card lookup miss.
    NotFound,
    /// Drawing from an empty deck.
    ExhaustedResource,
    /// Table parameters that cannot host a game.
    InvalidConfig,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("It's not player {actual}'s turn, it is player {expected}'s turn")]
    NotPlayersTurn { expected: usize, actual: usize },
    #[error("Cannot check, player {seat} must call or raise the current bet of {highest_bet}")]
    MustCallOrRaise { seat: usize, highest_bet: u32 },
    #[error("Can only bet if there hasn't been a bet this round, raise to increase the bet")]
    BetAlreadyPlaced,
    #[error("Minimum bet is {minimum}, got {amount}")]
    BetBelowMinimum { amount: u32, minimum: u32 },
    #[error("Minimum raise is {minimum}, got {amount}")]
    RaiseBelowMinimum { amount: u32, minimum: u32 },
    #[error("Player {seat} does not have enough money: needs {needed}, has {available}")]
    InsufficientFunds {
        seat: usize,
        needed: u32,
        available: u32,
    },
    #[error("Player {seat} is the last participant and cannot leave the hand")]
    LastParticipant { seat: usize },
    #[error("No hand in progress")]
    NoHandInProgress,
    #[error("Hand is already at showdown")]
    HandAlreadyComplete,
    #[error("Not enough alive players to start a round: {alive}")]
    NotEnoughPlayers { alive: usize },
    #[error("Player {seat} is not participating in the current hand")]
    PlayerNotParticipating { seat: usize },
    #[error("Player {seat} has been eliminated")]
    PlayerEliminated { seat: usize },
    #[error("No seat {seat} at a table of {table_size}")]
    SeatNotFound { seat: usize, table_size: usize },
    #[error("No card at index {index} (hand holds {len} cards)")]
    CardIndexOutOfRange { index: usize, len: usize },
    #[error("Hole cards already full")]
    HoleCardsFull,
    #[error("Deck is empty")]
    DeckEmpty,
    #[error("Invalid table configuration: {0}")]
    InvalidConfig(String),
}

impl GameError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GameError::NotPlayersTurn { .. }
            | GameError::MustCallOrRaise { .. }
            | GameError::BetAlreadyPlaced
            | GameError::BetBelowMinimum { .. }
            | GameError::RaiseBelowMinimum { .. }
            | GameError::InsufficientFunds { .. }
            | GameError::LastParticipant { .. }
            | GameError::NoHandInProgress
            | GameError::HandAlreadyComplete
            | GameError::NotEnoughPlayers { .. }
            | GameError::PlayerEliminated { .. }
            | GameError::HoleCardsFull => ErrorKind::IllegalAction,
            GameError::PlayerNotParticipating { .. }
            | GameError::SeatNotFound { .. }
            | GameError::CardIndexOutOfRange { .. } => ErrorKind::NotFound,
            GameError::DeckEmpty => ErrorKind::ExhaustedResource,
            GameError::InvalidConfig(_) => ErrorKind::InvalidConfig,
        }
    }
}
