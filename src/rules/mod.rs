//! Game rules.
//!
//! - `engine`: validates and applies the five actions plus `Pass`
//! - `patrons`: grants at most one qualifying patron after each action
//! - `victory`: threshold check and winner selection
//! - `legal`: enumerates every action the engine would accept
//!
//! These functions do not track turn order; `game::Game` sequences them.

pub mod engine;
pub mod patrons;
pub mod victory;
pub mod legal;

pub use engine::{apply_action, validate_action, ActionOutcome};
pub use patrons::{evaluate_patrons, qualifying_patron};
pub use victory::{any_reached_threshold, reached_threshold, select_winners};
pub use legal::legal_actions;
