//! Error types.
//!
//! [`GameError`] covers every rejected action. A rejection never mutates
//! state, so callers may retry with a different action.
//! [`ConfigError`] and [`CatalogError`] are returned at construction time,
//! wrapped in [`SetupError`] when a board is built.

use super::player::PlayerId;
use super::token::Token;
use crate::cards::{CardId, PatronId};

/// A rejected action or lookup.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// Malformed or rule-violating token request.
    #[error("invalid gem selection: {reason}")]
    InvalidGemSelection {
        /// What was wrong with the request.
        reason: &'static str,
    },

    /// The card is not face-up, or not reserved by the acting player.
    #[error("{0} is not available")]
    CardNotAvailable(CardId),

    /// The acting player already holds the maximum number of reserved cards.
    #[error("reserve limit of {limit} reached")]
    ReserveLimitExceeded {
        /// Configured reserve limit.
        limit: usize,
    },

    /// Bonuses, held tokens and wildcards cannot cover a cost.
    #[error("cannot afford cost, {missing} tokens short")]
    InsufficientBalance {
        /// Tokens still missing after every wildcard is spent.
        missing: u32,
    },

    /// The bank cannot fulfil a token take.
    #[error("bank has {available} {token}, {requested} requested")]
    InsufficientSupply {
        /// Kind that ran short.
        token: Token,
        /// Amount asked for.
        requested: u32,
        /// Amount in the bank.
        available: u32,
    },

    /// The id is not in the catalog.
    #[error("unknown {0}")]
    UnknownCard(CardId),

    /// The id is not in the catalog or not in the face-up pool.
    #[error("unknown {0}")]
    UnknownPatron(PatronId),

    /// The action would leave the player above the held-token limit.
    #[error("would hold {held} tokens, limit is {limit}")]
    TokenLimitExceeded {
        /// Tokens held after the action.
        held: u32,
        /// Configured limit.
        limit: u32,
    },

    /// The seat is not part of this game.
    #[error("{0} is not seated")]
    UnknownPlayer(PlayerId),

    /// An action was submitted out of turn order.
    #[error("expected an action from {expected}, got {actual}")]
    NotYourTurn {
        /// The seat whose turn it is.
        expected: PlayerId,
        /// The seat that submitted.
        actual: PlayerId,
    },

    /// The game has already finished.
    #[error("game is over")]
    GameOver,
}

/// An invalid [`GameConfig`](super::GameConfig).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("player count must be 2-4, got {0}")]
    PlayerCount(usize),

    #[error("reputation to win must be positive")]
    ZeroThreshold,

    #[error("slot capacity must be positive")]
    ZeroSlotCapacity,

    #[error("reserve limit must be positive")]
    ZeroReserveLimit,
}

/// A catalog that cannot back a game.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// Ids must equal their position in the list.
    #[error("card at position {position} has id {id}")]
    CardIdMismatch { position: usize, id: CardId },

    #[error("patron at position {position} has id {id}")]
    PatronIdMismatch { position: usize, id: PatronId },

    #[error("{0} lists a wildcard in its cost")]
    WildcardCost(CardId),

    #[error("{0} grants a wildcard bonus")]
    WildcardBonus(CardId),

    #[error("{0} requires wildcard bonuses")]
    WildcardPatronCost(PatronId),

    #[error("{0} has an empty cost")]
    EmptyCost(CardId),

    #[error("level {level} has {available} cards, {required} needed to fill the market")]
    NotEnoughCards {
        level: u8,
        available: usize,
        required: usize,
    },

    #[error("{available} patrons in catalog, {required} needed")]
    NotEnoughPatrons { available: usize, required: usize },
}

/// Why a board could not be set up.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid catalog: {0}")]
    Catalog(#[from] CatalogError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GameError::InsufficientSupply {
            token: Token::Red,
            requested: 2,
            available: 1,
        };
        assert_eq!(err.to_string(), "bank has 1 red, 2 requested");

        let err = GameError::CardNotAvailable(CardId::new(4));
        assert_eq!(err.to_string(), "Card(4) is not available");

        let err = GameError::NotYourTurn {
            expected: PlayerId::new(0),
            actual: PlayerId::new(1),
        };
        assert_eq!(err.to_string(), "expected an action from Player 0, got Player 1");
    }

    #[test]
    fn test_config_error_message() {
        assert_eq!(
            ConfigError::PlayerCount(5).to_string(),
            "player count must be 2-4, got 5"
        );

        let setup: SetupError = ConfigError::ZeroThreshold.into();
        assert_eq!(
            setup.to_string(),
            "invalid config: reputation to win must be positive"
        );
    }
}
