//! Card and patron definitions - immutable catalog data.
//!
//! A `Card` grants one permanent bonus of its color once owned, plus its
//! reputation. A `Patron` is awarded to the first player whose bonus counts
//! meet its requirement.

use serde::{Deserialize, Serialize};

use crate::core::{Token, TokenSet};

/// Catalog index of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Catalog index of a patron.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PatronId(pub u32);

impl PatronId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PatronId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Patron({})", self.0)
    }
}

/// Card tier. Each level has its own draw pile and face-up slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Level {
    One,
    Two,
    Three,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::One, Level::Two, Level::Three];

    /// 0-based slot index.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Printed level number (1-3).
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Level from its printed number.
    #[must_use]
    pub const fn from_number(n: u8) -> Option<Level> {
        match n {
            1 => Some(Level::One),
            2 => Some(Level::Two),
            3 => Some(Level::Three),
            _ => None,
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "L{}", self.number())
    }
}

/// A development card.
///
/// ```
/// use rust_gemtrade::cards::{Card, CardId, Level};
/// use rust_gemtrade::core::{Token, TokenSet};
///
/// let card = Card::new(
///     CardId::new(0),
///     Level::One,
///     Token::Blue,
///     0,
///     TokenSet::from_pairs(&[(Token::Red, 1), (Token::White, 2)]),
/// );
/// assert_eq!(card.cost.total(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub level: Level,

    /// Color of the permanent bonus granted once owned.
    pub bonus: Token,

    pub reputation: u32,

    /// Colored tokens required. Never lists the wildcard.
    pub cost: TokenSet,
}

impl Card {
    #[must_use]
    pub fn new(id: CardId, level: Level, bonus: Token, reputation: u32, cost: TokenSet) -> Self {
        Self {
            id,
            level,
            bonus,
            reputation,
            cost,
        }
    }
}

/// A patron, awarded for owning enough cards of given colors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patron {
    pub id: PatronId,
    pub reputation: u32,

    /// Bonus counts required per color (owned cards, not tokens).
    pub requirement: TokenSet,
}

impl Patron {
    #[must_use]
    pub fn new(id: PatronId, reputation: u32, requirement: TokenSet) -> Self {
        Self {
            id,
            reputation,
            requirement,
        }
    }

    /// Whether `bonuses` meets every color of the requirement.
    #[must_use]
    pub fn is_attracted_by(&self, bonuses: &TokenSet) -> bool {
        Token::COLORS
            .iter()
            .all(|&color| bonuses[color] >= self.requirement[color])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids() {
        assert_eq!(CardId::new(7).index(), 7);
        assert_eq!(format!("{}", CardId::new(7)), "Card(7)");
        assert_eq!(format!("{}", PatronId::new(2)), "Patron(2)");
    }

    #[test]
    fn test_level_numbers() {
        assert_eq!(Level::One.index(), 0);
        assert_eq!(Level::Three.number(), 3);
        assert_eq!(Level::from_number(2), Some(Level::Two));
        assert_eq!(Level::from_number(0), None);
        assert_eq!(Level::from_number(4), None);
        assert_eq!(format!("{}", Level::Two), "L2");
    }

    #[test]
    fn test_patron_attraction() {
        let patron = Patron::new(
            PatronId::new(0),
            3,
            TokenSet::from_pairs(&[(Token::Red, 3), (Token::Black, 3)]),
        );

        let short = TokenSet::from_pairs(&[(Token::Red, 3), (Token::Black, 2)]);
        assert!(!patron.is_attracted_by(&short));

        let enough = TokenSet::from_pairs(&[(Token::Red, 4), (Token::Black, 3), (Token::Blue, 1)]);
        assert!(patron.is_attracted_by(&enough));
    }

    #[test]
    fn test_card_serialization() {
        let card = Card::new(
            CardId::new(3),
            Level::Two,
            Token::Green,
            2,
            TokenSet::from_pairs(&[(Token::Green, 5)]),
        );
        let json = serde_json::to_string(&card).unwrap();
        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, back);
    }
}
