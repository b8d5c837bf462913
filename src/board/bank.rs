//! The shared token bank.

use serde::{Deserialize, Serialize};

use crate::core::{GameError, Token, TokenSet};

/// Tokens on the board that players can take.
///
/// Takes are all-or-nothing: either every requested kind is available and
/// the bank is debited, or nothing changes.
///
/// ```
/// use rust_gemtrade::board::TokenBank;
/// use rust_gemtrade::core::{Token, TokenSet};
///
/// let mut bank = TokenBank::new(TokenSet::uniform(4, 5));
/// bank.take(&TokenSet::from_pairs(&[(Token::Red, 1), (Token::Green, 1)])).unwrap();
/// assert_eq!(bank.get(Token::Red), 3);
///
/// assert!(bank.take(&TokenSet::from_pairs(&[(Token::Red, 4)])).is_err());
/// assert_eq!(bank.get(Token::Red), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenBank {
    tokens: TokenSet,
}

impl TokenBank {
    #[must_use]
    pub fn new(initial: TokenSet) -> Self {
        Self { tokens: initial }
    }

    /// Current contents.
    #[must_use]
    pub fn tokens(&self) -> &TokenSet {
        &self.tokens
    }

    #[must_use]
    pub fn get(&self, token: Token) -> u32 {
        self.tokens[token]
    }

    /// Check a take without applying it.
    pub fn check_take(&self, request: &TokenSet) -> Result<(), GameError> {
        match Token::ALL.iter().find(|&&t| self.tokens[t] < request[t]) {
            Some(&token) => Err(GameError::InsufficientSupply {
                token,
                requested: request[token],
                available: self.tokens[token],
            }),
            None => Ok(()),
        }
    }

    /// Debit `request` from the bank.
    pub fn take(&mut self, request: &TokenSet) -> Result<(), GameError> {
        self.check_take(request)?;
        if let Some(left) = self.tokens.checked_sub(request) {
            self.tokens = left;
        }
        Ok(())
    }

    /// Credit tokens paid back by a purchase.
    pub fn give_back(&mut self, amounts: &TokenSet) {
        self.tokens.add_all(amounts);
    }
}
