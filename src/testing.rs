//! Fixtures shared by unit tests.

use std::sync::Arc;

use crate::board::Board;
use crate::cards::{Card, CardId, Catalog, Level, Patron, PatronId};
use crate::core::{GameConfig, Token, TokenSet};

fn color(i: u32) -> Token {
    Token::COLORS[(i % 5) as usize]
}

/// 8 level-one, 6 level-two and 4 level-three cards, plus 5 patrons.
///
/// Unshuffled, the level-one slot shows cards 0-3 and level three deals
/// its whole pile face-up.
///
/// - Level one card `i`: bonus `color(i)`, reputation `i / 5`, costs 2 of `color(i + 1)`
/// - Level two card `i`: bonus `color(i)`, reputation 2, costs 3 of `color(i)` and 2 of `color(i + 2)`
/// - Level three card `i`: bonus `color(i)`, reputation 4, costs 5 of `color(i)`
/// - Patron `i`: reputation 3, requires 2 bonuses of `color(i)`
pub(crate) fn catalog() -> Arc<Catalog> {
    let mut cards = Vec::new();
    for i in 0..18u32 {
        let (level, reputation, cost) = match i {
            0..=7 => (Level::One, i / 5, TokenSet::from_pairs(&[(color(i + 1), 2)])),
            8..=13 => (
                Level::Two,
                2,
                TokenSet::from_pairs(&[(color(i), 3), (color(i + 2), 2)]),
            ),
            _ => (Level::Three, 4, TokenSet::from_pairs(&[(color(i), 5)])),
        };
        cards.push(Card::new(CardId::new(i), level, color(i), reputation, cost));
    }

    let patrons = (0..5u32)
        .map(|i| Patron::new(PatronId::new(i), 3, TokenSet::from_pairs(&[(color(i), 2)])))
        .collect();

    Arc::new(Catalog::new(cards, patrons).unwrap())
}

/// An unshuffled board over [`catalog`].
pub(crate) fn board(players: usize) -> Board {
    Board::new(GameConfig::new(players).unshuffled(), catalog()).unwrap()
}

/// An unshuffled board with a custom config over [`catalog`].
pub(crate) fn board_with(config: GameConfig) -> Board {
    Board::new(config.unshuffled(), catalog()).unwrap()
}
