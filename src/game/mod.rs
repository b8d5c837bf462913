//! Game sessions.
//!
//! - `Game`: a board plus turn order, history, and win state
//! - `WinState`: in progress, completing the final round, or finished
//! - `TurnReport`: what one accepted submission did

pub mod session;

pub use session::{Game, TurnReport, WinState};
