use crate::errors::GameError;
use crate::player::PlayerAction as A;

/// The slice of table state an action is judged against.
///
/// Built by [`crate::game::GameState`] for the acting seat so that
/// validation never needs to touch the table itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionContext {
    pub seat: usize,
    pub whose_turn: usize,
    pub participating: bool,
    pub last_participant: bool,
    pub money: u32,
    pub amount_bet_in_round: u32,
    pub highest_bet_in_round: u32,
    pub bet_in_current_round: bool,
    pub minimum_bet: u32,
}

impl ActionContext {
    pub fn call_amount(&self) -> u32 {
        self.highest_bet_in_round
            .saturating_sub(self.amount_bet_in_round)
    }

    pub fn minimum_raise(&self) -> u32 {
        minimum_raise(self.highest_bet_in_round)
    }
}

/// A raise must at least match the current highest bet, and must raise by
/// something.
pub fn minimum_raise(highest_bet_in_round: u32) -> u32 {
    highest_bet_in_round.max(1)
}

/// An action that passed validation, with the money it moves resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidatedAction {
    Fold,
    Check,
    Call(u32),
    Bet(u32),
    Raise { call: u32, raise: u32 },
}

impl ValidatedAction {
    /// Money that leaves the player's balance for the pot.
    pub fn cost(&self) -> u32 {
        match *self {
            ValidatedAction::Fold | ValidatedAction::Check => 0,
            ValidatedAction::Call(amount) | ValidatedAction::Bet(amount) => amount,
            ValidatedAction::Raise { call, raise } => call + raise,
        }
    }
}

/// Validates a player action against the betting rules.
///
/// # Errors
///
/// - [`GameError::NotPlayersTurn`] - any action out of turn
/// - [`GameError::PlayerNotParticipating`] - folding a seat already out of the hand
/// - [`GameError::LastParticipant`] - folding the only seat left
/// - [`GameError::MustCallOrRaise`] - checking while money is owed
/// - [`GameError::BetAlreadyPlaced`] - betting after the round's opening bet
/// - [`GameError::BetBelowMinimum`] / [`GameError::RaiseBelowMinimum`] - undersized wager
/// - [`GameError::InsufficientFunds`] - wager larger than the player's money
///
/// # Examples
///
/// ```
/// use cardroom_engine::errors::GameError;
/// use cardroom_engine::player::PlayerAction;
/// use cardroom_engine::rules::{validate_action, ActionContext, ValidatedAction};
///
/// let ctx = ActionContext {
///     seat: 2,
///     whose_turn: 2,
///     participating: true,
///     last_participant: false,
///     money: 100,
///     amount_bet_in_round: 0,
///     highest_bet_in_round: 20,
///     bet_in_current_round: true,
///     minimum_bet: 10,
/// };
///
/// assert_eq!(validate_action(&ctx, PlayerAction::Call), Ok(ValidatedAction::Call(20)));
/// assert!(matches!(
///     validate_action(&ctx, PlayerAction::Check),
///     Err(GameError::MustCallOrRaise { .. })
/// ));
/// assert!(matches!(
///     validate_action(&ctx, PlayerAction::Raise(10)),
///     Err(GameError::RaiseBelowMinimum { minimum: 20, .. })
/// ));
/// ```
pub fn validate_action(ctx: &ActionContext, action: A) -> Result<ValidatedAction, GameError> {
    if ctx.seat != ctx.whose_turn {
        return Err(GameError::NotPlayersTurn {
            expected: ctx.whose_turn,
            actual: ctx.seat,
        });
    }
    match action {
        A::Fold => {
            if !ctx.participating {
                Err(GameError::PlayerNotParticipating { seat: ctx.seat })
            } else if ctx.last_participant {
                Err(GameError::LastParticipant { seat: ctx.seat })
            } else {
                Ok(ValidatedAction::Fold)
            }
        }
        A::Check => {
            if ctx.call_amount() == 0 {
                Ok(ValidatedAction::Check)
            } else {
                Err(GameError::MustCallOrRaise {
                    seat: ctx.seat,
                    highest_bet: ctx.highest_bet_in_round,
                })
            }
        }
        A::Call => {
            let owed = ctx.call_amount();
            ensure_funds(ctx, Some(owed))?;
            Ok(ValidatedAction::Call(owed))
        }
        A::Bet(amount) => {
            if ctx.bet_in_current_round {
                return Err(GameError::BetAlreadyPlaced);
            }
            if amount < ctx.minimum_bet {
                return Err(GameError::BetBelowMinimum {
                    amount,
                    minimum: ctx.minimum_bet,
                });
            }
            ensure_funds(ctx, Some(amount))?;
            Ok(ValidatedAction::Bet(amount))
        }
        A::Raise(amount) => {
            let minimum = ctx.minimum_raise();
            if amount < minimum {
                return Err(GameError::RaiseBelowMinimum { amount, minimum });
            }
            let call = ctx.call_amount();
            ensure_funds(ctx, call.checked_add(amount))?;
            Ok(ValidatedAction::Raise {
                call,
                raise: amount,
            })
        }
    }
}

// `None` means the total overflowed, which no balance can cover.
fn ensure_funds(ctx: &ActionContext, needed: Option<u32>) -> Result<(), GameError> {
    match needed {
        Some(needed) if needed <= ctx.money => Ok(()),
        needed => Err(GameError::InsufficientFunds {
            seat: ctx.seat,
            needed: needed.unwrap_or(u32::MAX),
            available: ctx.money,
        }),
    }
}
