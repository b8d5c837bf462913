//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use rust_gemtrade::cards::{Card, CardId, Catalog, Level, Patron, PatronId};
use rust_gemtrade::core::{GameConfig, GameRng, Token, TokenSet};
use rust_gemtrade::game::{Game, TurnReport};
use rust_gemtrade::policy::Policy;

fn color(i: u32) -> Token {
    Token::COLORS[(i % 5) as usize]
}

fn cost(pairs: &[(u32, u32)], base: u32) -> TokenSet {
    let mut set = TokenSet::new();
    for &(offset, count) in pairs {
        set.add(color(base + offset), count);
    }
    set
}

/// A full-size catalog: 40 level-one, 30 level-two and 20 level-three
/// cards, plus 10 patrons.
///
/// Costs never include a card's own bonus color.
pub fn catalog() -> Arc<Catalog> {
    let mut cards = Vec::with_capacity(90);

    for i in 0..40u32 {
        let (reputation, shape): (u32, &[(u32, u32)]) = match (i / 5) % 4 {
            0 => (0, &[(1, 3)][..]),
            1 => (0, &[(1, 1), (2, 2)][..]),
            2 => (0, &[(1, 2), (2, 2)][..]),
            _ => (1, &[(1, 1), (2, 1), (3, 1), (4, 1)][..]),
        };
        cards.push(Card::new(CardId::new(i), Level::One, color(i), reputation, cost(shape, i)));
    }

    for i in 40..70u32 {
        let (reputation, shape): (u32, &[(u32, u32)]) = match i % 3 {
            0 => (1, &[(1, 3), (2, 2)][..]),
            1 => (2, &[(1, 2), (2, 3), (3, 2)][..]),
            _ => (2, &[(2, 5)][..]),
        };
        cards.push(Card::new(CardId::new(i), Level::Two, color(i), reputation, cost(shape, i)));
    }

    for i in 70..90u32 {
        let (reputation, shape): (u32, &[(u32, u32)]) = match i % 4 {
            0 => (4, &[(1, 7)][..]),
            1 => (5, &[(1, 7), (2, 3)][..]),
            2 => (3, &[(1, 3), (2, 3), (3, 5), (4, 3)][..]),
            _ => (4, &[(1, 6), (2, 3), (3, 3)][..]),
        };
        cards.push(Card::new(CardId::new(i), Level::Three, color(i), reputation, cost(shape, i)));
    }

    let patrons = (0..10u32)
        .map(|i| {
            let requirement = if i < 5 {
                cost(&[(0, 4), (1, 4)], i)
            } else {
                cost(&[(0, 3), (1, 3), (2, 3)], i)
            };
            Patron::new(PatronId::new(i), 3, requirement)
        })
        .collect();

    Arc::new(Catalog::new(cards, patrons).expect("fixture catalog is valid"))
}

/// A shuffled game over [`catalog`].
pub fn new_game(players: usize, seed: u64) -> Game {
    Game::new(GameConfig::new(players).with_seed(seed), catalog()).expect("fixture setup is valid")
}

/// Step `game` with `policy` until it finishes or `max_turns` pass,
/// auditing the board after every turn.
pub fn play_audited(
    game: &mut Game,
    policy: &dyn Policy,
    rng: &mut GameRng,
    max_turns: usize,
) -> Vec<TurnReport> {
    let mut reports = Vec::new();
    for _ in 0..max_turns {
        if game.is_finished() {
            break;
        }
        let report = game.step(policy, rng).expect("policies only choose legal actions");
        if let Err(err) = game.board().audit() {
            panic!("audit failed after turn {}: {err}", report.record.turn);
        }
        reports.push(report);
    }
    reports
}
