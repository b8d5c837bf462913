//! Token kinds and token counts.
//!
//! ## Token
//!
//! Closed set of six kinds: five colors plus the wildcard. Wildcards cover
//! a deficit of any color when paying, but never appear as a cost key.
//!
//! ## TokenSet
//!
//! A fixed-size count per kind, used for the bank, held tokens, bonuses,
//! costs, and payments. Backed by an array so copies are free.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// A token kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Token {
    Red,
    Green,
    Blue,
    White,
    Black,
    /// Substitutes for any color when paying.
    Wildcard,
}

impl Token {
    /// Number of token kinds, wildcard included.
    pub const COUNT: usize = 6;

    /// All kinds, colors first.
    pub const ALL: [Token; 6] = [
        Token::Red,
        Token::Green,
        Token::Blue,
        Token::White,
        Token::Black,
        Token::Wildcard,
    ];

    /// The five colored kinds.
    pub const COLORS: [Token; 5] = [
        Token::Red,
        Token::Green,
        Token::Blue,
        Token::White,
        Token::Black,
    ];

    /// Position of this kind inside a `TokenSet`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn is_wildcard(self) -> bool {
        matches!(self, Token::Wildcard)
    }

    #[must_use]
    pub const fn is_color(self) -> bool {
        !self.is_wildcard()
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Token::Red => "red",
            Token::Green => "green",
            Token::Blue => "blue",
            Token::White => "white",
            Token::Black => "black",
            Token::Wildcard => "wildcard",
        };
        f.write_str(name)
    }
}

/// Count of tokens per kind.
///
/// ## Example
///
/// ```
/// use rust_gemtrade::core::{Token, TokenSet};
///
/// let mut held = TokenSet::from_pairs(&[(Token::Red, 2), (Token::Wildcard, 1)]);
/// held.add(Token::Red, 1);
///
/// assert_eq!(held[Token::Red], 3);
/// assert_eq!(held.total(), 4);
/// assert!(held.covers(&TokenSet::from_pairs(&[(Token::Red, 3)])));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenSet([u32; Token::COUNT]);

impl TokenSet {
    /// An empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self([0; Token::COUNT])
    }

    /// Build a set from `(kind, count)` pairs. Repeated kinds accumulate.
    #[must_use]
    pub fn from_pairs(pairs: &[(Token, u32)]) -> Self {
        let mut set = Self::new();
        for &(token, count) in pairs {
            set.add(token, count);
        }
        set
    }

    /// Every color set to `colored`, the wildcard set to `wildcard`.
    #[must_use]
    pub fn uniform(colored: u32, wildcard: u32) -> Self {
        let mut set = Self([colored; Token::COUNT]);
        set[Token::Wildcard] = wildcard;
        set
    }

    #[must_use]
    pub fn get(&self, token: Token) -> u32 {
        self.0[token.index()]
    }

    pub fn add(&mut self, token: Token, count: u32) {
        self.0[token.index()] += count;
    }

    /// Subtract `count` of `token`. Returns `false` and leaves the set
    /// untouched when fewer than `count` are present.
    pub fn remove(&mut self, token: Token, count: u32) -> bool {
        match self.0[token.index()].checked_sub(count) {
            Some(left) => {
                self.0[token.index()] = left;
                true
            }
            None => false,
        }
    }

    /// Add every count of `other`.
    pub fn add_all(&mut self, other: &TokenSet) {
        for token in Token::ALL {
            self.add(token, other.get(token));
        }
    }

    /// Subtract every count of `other`, or return `None` if any kind would
    /// go negative.
    #[must_use]
    pub fn checked_sub(&self, other: &TokenSet) -> Option<TokenSet> {
        let mut out = *self;
        for token in Token::ALL {
            out.0[token.index()] = self.get(token).checked_sub(other.get(token))?;
        }
        Some(out)
    }

    /// Whether every kind in `self` is at least the count in `other`.
    #[must_use]
    pub fn covers(&self, other: &TokenSet) -> bool {
        Token::ALL.iter().all(|&t| self.get(t) >= other.get(t))
    }

    /// Sum across all kinds.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Iterate over `(kind, count)` for kinds with a nonzero count.
    pub fn iter(&self) -> impl Iterator<Item = (Token, u32)> + '_ {
        Token::ALL
            .iter()
            .map(move |&t| (t, self.get(t)))
            .filter(|&(_, n)| n > 0)
    }
}

impl Index<Token> for TokenSet {
    type Output = u32;

    fn index(&self, token: Token) -> &Self::Output {
        &self.0[token.index()]
    }
}

impl IndexMut<Token> for TokenSet {
    fn index_mut(&mut self, token: Token) -> &mut Self::Output {
        &mut self.0[token.index()]
    }
}

impl std::fmt::Display for TokenSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("{")?;
        for (i, (token, count)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{token}: {count}")?;
        }
        f.write_str("}")
    }
}
