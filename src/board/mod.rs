//! Shared board state.
//!
//! - `TokenBank`: token counts available to take
//! - `Market`: face-up slots, draw piles, and the patron pool
//! - `Board`: bank + market + every seat's `Economy`, backed by a shared
//!   `Catalog`
//! - `AuditError`: invariant violations reported by `Board::audit`

pub mod bank;
pub mod market;
pub mod state;
pub mod audit;

pub use bank::TokenBank;
pub use market::Market;
pub use state::Board;
pub use audit::AuditError;
