//! # rust-gemtrade
//!
//! A state engine for a turn-based gem trading card game.
//!
//! Players take colored tokens from a shared bank, spend them on cards from
//! a three-level market, and collect permanent color bonuses that make
//! later cards cheaper. Patrons visit players whose bonuses meet their
//! requirements. The first player to reach the reputation threshold ends
//! the game.
//!
//! ## Design Principles
//!
//! 1. **All-or-Nothing Actions**: every action validates fully before it
//!    mutates anything. A rejected action leaves the board untouched.
//!
//! 2. **N-Player First**: 2-4 seats, per-seat state in a `PlayerMap`.
//!
//! 3. **Configuration Over Convention**: rule constants, hand limits and
//!    end-of-game timing live in `GameConfig`.
//!
//! ## Modules
//!
//! - `core`: tokens, seats, actions, RNG, configuration, errors
//! - `cards`: card and patron definitions, the catalog
//! - `economy`: per-player economy and cost settlement
//! - `board`: bank, market, the full board and its audit
//! - `rules`: action engine, patrons, victory, legal actions
//! - `game`: turn sequencing and win state
//! - `policy`: action-choosing policies

pub mod core;
pub mod cards;
pub mod economy;
pub mod board;
pub mod rules;
pub mod game;
pub mod policy;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, CatalogError, ConfigError, GameConfig, GameError, GameRng, PlayerId,
    PlayerMap, SetupError, Token, TokenSet, WinTiming,
};

pub use crate::cards::{Card, CardId, Catalog, Level, Patron, PatronId};

pub use crate::economy::{can_afford, settle, shortfall, Economy};

pub use crate::board::{AuditError, Board, Market, TokenBank};

pub use crate::rules::{apply_action, legal_actions, ActionOutcome};

pub use crate::game::{Game, TurnReport, WinState};

pub use crate::policy::{GreedyPolicy, PassPolicy, Policy, UniformPolicy};
