//! Player economies and settlement.
//!
//! - `Economy`: one seat's reputation, tokens, bonuses, cards and patrons
//! - `can_afford` / `settle` / `shortfall`: paying a cost with bonuses,
//!   then held tokens, then wildcards

pub mod account;
pub mod settlement;

pub use account::Economy;
pub use settlement::{can_afford, settle, shortfall};
