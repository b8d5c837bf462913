//! Game configuration.
//!
//! A `GameConfig` fixes the seat count and the handful of rule constants a
//! game runs with. Everything defaults to the base rule set; the two
//! tabletop rules the base engine leaves open (finishing the round after a
//! win, the ten-token hand limit) are explicit options here.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::token::TokenSet;

/// When the game ends once a player reaches the reputation threshold.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinTiming {
    /// Finish the current round so every seat has had the same number of
    /// turns, then pick winners.
    #[default]
    CompleteRound,
    /// Stop right after the turn that crossed the threshold.
    Immediate,
}

/// Complete game configuration.
///
/// ```
/// use rust_gemtrade::core::{GameConfig, WinTiming};
///
/// let config = GameConfig::new(3)
///     .with_reputation_to_win(12)
///     .with_max_held_tokens(10)
///     .with_win_timing(WinTiming::Immediate);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.initial_bank()[rust_gemtrade::core::Token::Red], 5);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of seats (2-4).
    pub player_count: usize,

    /// Reputation that ends the game.
    pub reputation_to_win: u32,

    /// Maximum cards a player may hold in reserve.
    pub reserve_limit: usize,

    /// Face-up cards per level.
    pub slot_capacity: usize,

    /// Wildcard tokens in the bank at setup.
    pub wildcard_supply: u32,

    /// Cap on tokens a player may hold. `None` disables the check.
    pub max_held_tokens: Option<u32>,

    /// Whether a threshold crossing ends the game at once or after the round.
    pub win_timing: WinTiming,

    /// Shuffle draw piles and patrons at setup.
    pub shuffle: bool,

    /// Seed for setup shuffling.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: 2,
            reputation_to_win: 15,
            reserve_limit: 3,
            slot_capacity: 4,
            wildcard_supply: 5,
            max_held_tokens: None,
            win_timing: WinTiming::default(),
            shuffle: true,
            seed: 42,
        }
    }
}

impl GameConfig {
    /// Base rules for `player_count` seats.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_reputation_to_win(mut self, reputation: u32) -> Self {
        self.reputation_to_win = reputation;
        self
    }

    #[must_use]
    pub fn with_reserve_limit(mut self, limit: usize) -> Self {
        self.reserve_limit = limit;
        self
    }

    #[must_use]
    pub fn with_slot_capacity(mut self, capacity: usize) -> Self {
        self.slot_capacity = capacity;
        self
    }

    #[must_use]
    pub fn with_max_held_tokens(mut self, limit: u32) -> Self {
        self.max_held_tokens = Some(limit);
        self
    }

    #[must_use]
    pub fn with_win_timing(mut self, timing: WinTiming) -> Self {
        self.win_timing = timing;
        self
    }

    /// Keep catalog order for piles and patrons.
    #[must_use]
    pub fn unshuffled(mut self) -> Self {
        self.shuffle = false;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(2..=4).contains(&self.player_count) {
            return Err(ConfigError::PlayerCount(self.player_count));
        }
        if self.reputation_to_win == 0 {
            return Err(ConfigError::ZeroThreshold);
        }
        if self.slot_capacity == 0 {
            return Err(ConfigError::ZeroSlotCapacity);
        }
        if self.reserve_limit == 0 {
            return Err(ConfigError::ZeroReserveLimit);
        }
        Ok(())
    }

    /// Tokens of each color in the bank at setup.
    #[must_use]
    pub fn colored_supply(&self) -> u32 {
        match self.player_count {
            4 => 7,
            n => 2 + n as u32,
        }
    }

    /// The full bank at setup.
    #[must_use]
    pub fn initial_bank(&self) -> TokenSet {
        TokenSet::uniform(self.colored_supply(), self.wildcard_supply)
    }

    /// Face-up patrons at setup.
    #[must_use]
    pub fn patron_count(&self) -> usize {
        self.player_count + 1
    }
}
