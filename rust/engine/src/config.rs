use serde::{Deserialize, Serialize};

use crate::errors::GameError;

/// Largest table one deck can serve: two hole cards per seat plus three
/// burns and a five-card board.
pub const MAX_PLAYERS: usize = 22;

/// Fixed parameters of a table, chosen once when the table is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub num_players: usize,
    pub starting_money: u32,
    /// The small blind is half of this, rounded down
    pub big_blind: u32,
    /// Deck seed; `None` shuffles from the thread RNG
    pub seed: Option<u64>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            num_players: 6,
            starting_money: 1_000,
            big_blind: 10,
            seed: None,
        }
    }
}

impl TableConfig {
    /// Parses a TOML table. Missing keys take their default values.
    ///
    /// ```
    /// use cardroom_engine::config::TableConfig;
    ///
    /// let cfg = TableConfig::from_toml_str("num_players = 4\nseed = 7\n").unwrap();
    /// assert_eq!(cfg.num_players, 4);
    /// assert_eq!(cfg.seed, Some(7));
    /// assert_eq!(cfg.big_blind, 10);
    /// ```
    pub fn from_toml_str(s: &str) -> Result<Self, GameError> {
        let cfg: TableConfig =
            toml::from_str(s).map_err(|e| GameError::InvalidConfig(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if !(2..=MAX_PLAYERS).contains(&self.num_players) {
            return Err(GameError::InvalidConfig(format!(
                "num_players must be between 2 and {}, got {}",
                MAX_PLAYERS, self.num_players
            )));
        }
        if self.big_blind < 2 {
            return Err(GameError::InvalidConfig(format!(
                "big_blind must be at least 2, got {}",
                self.big_blind
            )));
        }
        if self.starting_money == 0 {
            return Err(GameError::InvalidConfig(
                "starting_money must be positive".to_string(),
            ));
        }
        let table_money = self.num_players as u64 * u64::from(self.starting_money);
        if table_money > u64::from(u32::MAX) {
            return Err(GameError::InvalidConfig(format!(
                "{} players with {} each exceed the largest pot",
                self.num_players, self.starting_money
            )));
        }
        Ok(())
    }

    pub fn small_blind(&self) -> u32 {
        self.big_blind / 2
    }
}
