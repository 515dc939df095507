use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::cards::Card;
use crate::config::TableConfig;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::history::{ActionRecord, HandHistory};
use crate::player::{Player, PlayerAction};
use crate::rules::{self, validate_action, ActionContext, ValidatedAction};
use crate::seats::Participants;

/// Seat that posts the small blind every hand.
pub const SMALL_BLIND_SEAT: usize = 0;
/// Seat that posts the big blind every hand.
pub const BIG_BLIND_SEAT: usize = 1;

/// Betting phases of one hand. Phases only move forward.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Hole cards dealt, blinds posted
    PreFlop,
    /// Three community cards
    Flop,
    /// Fourth community card
    Turn,
    /// Fifth community card
    River,
    /// Hands are revealed; no more betting
    Showdown,
}

impl Phase {
    pub fn next(self) -> Option<Phase> {
        match self {
            Phase::PreFlop => Some(Phase::Flop),
            Phase::Flop => Some(Phase::Turn),
            Phase::Turn => Some(Phase::River),
            Phase::River => Some(Phase::Showdown),
            Phase::Showdown => None,
        }
    }

    /// Community cards dealt when entering this phase.
    fn board_cards(self) -> usize {
        match self {
            Phase::Flop => 3,
            Phase::Turn | Phase::River => 1,
            Phase::PreFlop | Phase::Showdown => 0,
        }
    }
}

/// Betting state of one table.
///
/// Created once per table and reused for every hand through
/// [`GameState::new_round`]. Every action is validated before anything is
/// mutated, so a rejected action leaves the table exactly as it was.
///
/// # Examples
///
/// ```
/// use cardroom_engine::game::GameState;
///
/// let mut game = GameState::new_game(4, 100, 10).unwrap();
/// game.new_round().unwrap();
/// assert_eq!(game.pot(), 15);
/// assert_eq!(game.whose_turn(), 2);
///
/// game.bet(2, 20).unwrap();
/// game.call(3).unwrap();
/// assert_eq!(game.pot(), 55);
/// assert_eq!(game.whose_turn(), 0);
/// ```
#[derive(Debug)]
pub struct GameState {
    /// Players in seat order, which is also turn order
    table: Vec<Player>,
    big_blind_amount: u32,
    small_blind_amount: u32,
    big_blind_pos: usize,
    small_blind_pos: usize,
    pot: u32,
    highest_bet_in_round: u32,
    whose_turn: usize,
    phase: Phase,
    participating: Participants,
    /// Whether the round has been opened by a bet (or a raise)
    bet_in_current_round: bool,
    deck: Deck,
    board: Vec<Card>,
    actions: Vec<ActionRecord>,
    hand_number: u32,
}

impl GameState {
    pub fn new_game(
        num_players: usize,
        starting_money: u32,
        big_blind_amount: u32,
    ) -> Result<Self, GameError> {
        Self::from_config(&TableConfig {
            num_players,
            starting_money,
            big_blind: big_blind_amount,
            seed: None,
        })
    }

    pub fn from_config(cfg: &TableConfig) -> Result<Self, GameError> {
        cfg.validate()?;
        let deck = match cfg.seed {
            Some(seed) => Deck::new_with_seed(seed),
            None => Deck::new(),
        };
        Ok(Self {
            table: (0..cfg.num_players)
                .map(|seat| Player::new(seat, cfg.starting_money))
                .collect(),
            big_blind_amount: cfg.big_blind,
            small_blind_amount: cfg.small_blind(),
            big_blind_pos: BIG_BLIND_SEAT,
            small_blind_pos: SMALL_BLIND_SEAT,
            pot: 0,
            highest_bet_in_round: 0,
            whose_turn: 0,
            phase: Phase::PreFlop,
            participating: Participants::new(cfg.num_players),
            bet_in_current_round: false,
            deck,
            board: Vec::with_capacity(5),
            actions: Vec::new(),
            hand_number: 0,
        })
    }

    /// Starts a new hand: every alive seat rejoins, the deck is reshuffled
    /// and two cards dealt to each, both blinds are posted and the turn
    /// goes to the first participant after the big blind.
    ///
    /// Anything left in the pot from an unawarded hand stays there.
    ///
    /// # Errors
    ///
    /// Fails without touching the table if fewer than two seats are alive,
    /// a blind seat has been eliminated, or a blind seat cannot cover its
    /// blind.
    pub fn new_round(&mut self) -> Result<(), GameError> {
        let alive = self.table.iter().filter(|p| p.is_alive()).count();
        if alive < 2 {
            return Err(GameError::NotEnoughPlayers { alive });
        }
        for (pos, amount) in self.blinds() {
            let p = &self.table[pos];
            if !p.is_alive() {
                return Err(GameError::PlayerEliminated { seat: pos });
            }
            if p.money() < amount {
                return Err(GameError::InsufficientFunds {
                    seat: pos,
                    needed: amount,
                    available: p.money(),
                });
            }
        }

        self.hand_number += 1;
        self.phase = Phase::PreFlop;
        self.board.clear();
        self.actions.clear();
        self.reset_betting_round();
        for p in &mut self.table {
            p.clear_cards();
        }
        self.deck.shuffle();
        self.add_all_players();
        self.deal_hole_cards()?;
        self.post_blinds()?;
        self.whose_turn = self
            .participating
            .next_clockwise(self.big_blind_pos)
            .ok_or(GameError::NotEnoughPlayers { alive })?;

        info!(
            hand = self.hand_number,
            players = self.participating.len(),
            pot = self.pot,
            first_to_act = self.whose_turn,
            "new round"
        );
        Ok(())
    }

    fn blinds(&self) -> [(usize, u32); 2] {
        [
            (self.small_blind_pos, self.small_blind_amount),
            (self.big_blind_pos, self.big_blind_amount),
        ]
    }

    fn add_all_players(&mut self) {
        self.participating.clear();
        for p in self.table.iter().filter(|p| p.is_alive()) {
            self.participating.insert(p.seat());
        }
    }

    // One card to each participant, then a second round.
    fn deal_hole_cards(&mut self) -> Result<(), GameError> {
        let seats: Vec<usize> = self.participating.iter().collect();
        for _ in 0..2 {
            for &seat in &seats {
                let card = self.deck.draw()?;
                self.table[seat].give_card(card)?;
            }
        }
        Ok(())
    }

    fn post_blinds(&mut self) -> Result<(), GameError> {
        for (pos, amount) in self.blinds() {
            self.table[pos].pay(amount)?;
            self.pot += amount;
        }
        Ok(())
    }

    fn reset_betting_round(&mut self) {
        self.highest_bet_in_round = 0;
        self.bet_in_current_round = false;
        for p in &mut self.table {
            p.reset_round();
        }
    }

    /// Moves to the next phase, dealing the community cards it brings, and
    /// opens a fresh betting round with the first participant at or after
    /// the small blind.
    pub fn advance_phase(&mut self) -> Result<Phase, GameError> {
        self.ensure_hand_in_progress()?;
        let next = self.phase.next().ok_or(GameError::HandAlreadyComplete)?;
        let count = next.board_cards();
        if count > 0 {
            self.deck.burn()?;
            for _ in 0..count {
                let card = self.deck.draw()?;
                self.board.push(card);
            }
        }
        self.phase = next;
        self.reset_betting_round();
        if let Some(first) = self.first_participant_from(self.small_blind_pos) {
            self.whose_turn = first;
        }
        debug!(phase = ?next, board = self.board.len(), first_to_act = self.whose_turn, "phase advanced");
        Ok(next)
    }

    fn first_participant_from(&self, seat: usize) -> Option<usize> {
        if self.participating.contains(seat) {
            Some(seat)
        } else {
            self.participating.next_clockwise(seat)
        }
    }

    pub fn check(&mut self, seat: usize) -> Result<(), GameError> {
        self.apply(seat, PlayerAction::Check)
    }

    pub fn fold(&mut self, seat: usize) -> Result<(), GameError> {
        self.apply(seat, PlayerAction::Fold)
    }

    pub fn bet(&mut self, seat: usize, amount: u32) -> Result<(), GameError> {
        self.apply(seat, PlayerAction::Bet(amount))
    }

    pub fn call(&mut self, seat: usize) -> Result<(), GameError> {
        self.apply(seat, PlayerAction::Call)
    }

    pub fn raise(&mut self, seat: usize, amount: u32) -> Result<(), GameError> {
        self.apply(seat, PlayerAction::Raise(amount))
    }

    /// Validates `action` for `seat` and, if legal, commits it and passes
    /// the turn clockwise.
    pub fn apply(&mut self, seat: usize, action: PlayerAction) -> Result<(), GameError> {
        let validated = match self
            .action_context(seat)
            .and_then(|ctx| validate_action(&ctx, action))
        {
            Ok(v) => v,
            Err(e) => {
                warn!(seat, ?action, error = %e, "action rejected");
                return Err(e);
            }
        };
        self.commit(seat, validated)?;
        self.actions.push(ActionRecord {
            seat,
            phase: self.phase,
            action,
        });
        debug!(
            seat,
            ?action,
            pot = self.pot,
            highest_bet = self.highest_bet_in_round,
            next = self.whose_turn,
            "action committed"
        );
        Ok(())
    }

    fn action_context(&self, seat: usize) -> Result<ActionContext, GameError> {
        self.ensure_hand_in_progress()?;
        if self.phase == Phase::Showdown {
            return Err(GameError::HandAlreadyComplete);
        }
        let player = self.player_at(seat)?;
        Ok(ActionContext {
            seat,
            whose_turn: self.whose_turn,
            participating: self.participating.contains(seat),
            last_participant: self.participating.len() == 1,
            money: player.money(),
            amount_bet_in_round: player.amount_bet_in_round(),
            highest_bet_in_round: self.highest_bet_in_round,
            bet_in_current_round: self.bet_in_current_round,
            minimum_bet: self.minimum_bet(),
        })
    }

    fn commit(&mut self, seat: usize, action: ValidatedAction) -> Result<(), GameError> {
        match action {
            ValidatedAction::Fold => {
                self.participating.remove(seat);
            }
            ValidatedAction::Check => {}
            ValidatedAction::Call(amount) => self.wager(seat, amount)?,
            ValidatedAction::Bet(amount) => {
                self.wager(seat, amount)?;
                self.bet_in_current_round = true;
                self.highest_bet_in_round = amount;
            }
            ValidatedAction::Raise { .. } => {
                self.wager(seat, action.cost())?;
                self.bet_in_current_round = true;
                self.highest_bet_in_round = self.table[seat].amount_bet_in_round();
            }
        }
        self.advance_turn();
        Ok(())
    }

    fn wager(&mut self, seat: usize, amount: u32) -> Result<(), GameError> {
        self.table[seat].wager(amount)?;
        self.pot += amount;
        Ok(())
    }

    fn advance_turn(&mut self) {
        if let Some(next) = self.participating.next_clockwise(self.whose_turn) {
            self.whose_turn = next;
        }
    }

    /// Takes a seat out of the game for good. A participating seat also
    /// leaves the current hand, passing the turn on if it was theirs.
    ///
    /// The blinds always come from [`SMALL_BLIND_SEAT`] and
    /// [`BIG_BLIND_SEAT`], so eliminating either of them ends play at the
    /// table: every later [`GameState::new_round`] fails with
    /// [`GameError::PlayerEliminated`].
    pub fn eliminate(&mut self, seat: usize) -> Result<(), GameError> {
        if !self.player_at(seat)?.is_alive() {
            return Err(GameError::PlayerEliminated { seat });
        }
        let in_hand = self.participating.contains(seat);
        if in_hand && self.participating.len() == 1 {
            return Err(GameError::LastParticipant { seat });
        }
        self.table[seat].eliminate();
        self.participating.remove(seat);
        if in_hand && self.whose_turn == seat {
            self.advance_turn();
        }
        info!(seat, remaining = self.participating.len(), "player eliminated");
        Ok(())
    }

    /// Pays the whole pot to a participating seat and returns the amount.
    pub fn award_pot(&mut self, seat: usize) -> Result<u32, GameError> {
        self.ensure_hand_in_progress()?;
        self.player_at(seat)?;
        if !self.participating.contains(seat) {
            return Err(GameError::PlayerNotParticipating { seat });
        }
        let amount = std::mem::take(&mut self.pot);
        self.table[seat].receive(amount);
        info!(seat, amount, "pot awarded");
        Ok(amount)
    }

    fn ensure_hand_in_progress(&self) -> Result<(), GameError> {
        if self.hand_number == 0 {
            Err(GameError::NoHandInProgress)
        } else {
            Ok(())
        }
    }

    fn player_at(&self, seat: usize) -> Result<&Player, GameError> {
        self.table.get(seat).ok_or(GameError::SeatNotFound {
            seat,
            table_size: self.table.len(),
        })
    }

    pub fn players(&self) -> &[Player] {
        &self.table
    }
    pub fn player(&self, seat: usize) -> Option<&Player> {
        self.table.get(seat)
    }
    pub fn pot(&self) -> u32 {
        self.pot
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn whose_turn(&self) -> usize {
        self.whose_turn
    }
    pub fn highest_bet_in_round(&self) -> u32 {
        self.highest_bet_in_round
    }
    pub fn bet_in_current_round(&self) -> bool {
        self.bet_in_current_round
    }
    pub fn big_blind_amount(&self) -> u32 {
        self.big_blind_amount
    }
    pub fn small_blind_amount(&self) -> u32 {
        self.small_blind_amount
    }
    pub fn big_blind_pos(&self) -> usize {
        self.big_blind_pos
    }
    pub fn small_blind_pos(&self) -> usize {
        self.small_blind_pos
    }
    pub fn board(&self) -> &[Card] {
        &self.board
    }
    pub fn hand_number(&self) -> u32 {
        self.hand_number
    }
    pub fn participants(&self) -> &Participants {
        &self.participating
    }
    pub fn is_participating(&self, seat: usize) -> bool {
        self.participating.contains(seat)
    }

    /// True once every other participant has folded or been eliminated.
    pub fn is_uncontested(&self) -> bool {
        self.participating.len() == 1
    }

    pub fn minimum_bet(&self) -> u32 {
        self.big_blind_amount
    }

    pub fn minimum_raise(&self) -> u32 {
        rules::minimum_raise(self.highest_bet_in_round)
    }

    /// Money `seat` must add to match the highest bet of the round.
    pub fn call_amount(&self, seat: usize) -> Option<u32> {
        self.table.get(seat).map(|p| {
            self.highest_bet_in_round
                .saturating_sub(p.amount_bet_in_round())
        })
    }

    /// Sum of every balance and the pot. Constant under every action.
    pub fn total_money(&self) -> u64 {
        self.table.iter().map(|p| u64::from(p.money())).sum::<u64>() + u64::from(self.pot)
    }

    pub fn remaining_cards(&self) -> usize {
        self.deck.remaining()
    }

    pub fn history(&self) -> HandHistory {
        HandHistory {
            hand_number: self.hand_number,
            board: self.board.clone(),
            actions: self.actions.clone(),
            pot: self.pot,
        }
    }
}
