//! Core engine types: tokens, seats, actions, RNG, configuration, errors.
//!
//! Everything here is plain data with no game-flow logic. The board,
//! economy and rules modules build on these.

pub mod token;
pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod error;

pub use token::{Token, TokenSet};
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
pub use config::{GameConfig, WinTiming};
pub use action::{Action, ActionRecord};
pub use error::{CatalogError, ConfigError, GameError, SetupError};
