//! Action-choosing policies.
//!
//! A [`Policy`] looks at the board and picks an action for a seat. Policies
//! only ever return actions from [`legal_actions`], so
//! [`Game::step`](crate::game::Game::step) never fails because of them.
//!
//! - `PassPolicy`: always passes
//! - `UniformPolicy`: uniform over legal actions
//! - `GreedyPolicy`: buys when it can, otherwise collects the colors the
//!   market asks for most

use crate::board::Board;
use crate::cards::Level;
use crate::core::{Action, GameRng, PlayerId, Token};
use crate::rules::legal_actions;

/// Chooses an action for a seat.
pub trait Policy: Send + Sync {
    fn choose_action(&self, board: &Board, player: PlayerId, rng: &mut GameRng) -> Action;
}

/// Always passes.
#[derive(Clone, Copy, Debug, Default)]
pub struct PassPolicy;

impl Policy for PassPolicy {
    fn choose_action(&self, _board: &Board, _player: PlayerId, _rng: &mut GameRng) -> Action {
        Action::Pass
    }
}

/// Uniform random choice over legal actions.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformPolicy;

impl Policy for UniformPolicy {
    fn choose_action(&self, board: &Board, player: PlayerId, rng: &mut GameRng) -> Action {
        let actions = legal_actions(board, player);
        rng.choose(&actions).cloned().unwrap_or(Action::Pass)
    }
}

/// Buy the most valuable affordable card; otherwise pick the most demanded
/// colors; otherwise reserve; otherwise pass.
///
/// Demand sums face-up card costs weighted by `exp(-level)`, so level one
/// counts most. The RNG is not used.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyPolicy;

impl GreedyPolicy {
    /// Per-color demand from the face-up market.
    #[must_use]
    pub fn demand(board: &Board) -> [f64; Token::COUNT] {
        let mut demand = [0.0; Token::COUNT];
        for level in Level::ALL {
            let weight = (-(level.index() as f64)).exp();
            for card in board.face_up_cards(level) {
                for (color, count) in card.cost.iter() {
                    demand[color.index()] += f64::from(count) * weight;
                }
            }
        }
        demand
    }

    fn best_purchase(board: &Board, actions: &[Action]) -> Option<Action> {
        actions
            .iter()
            .filter(|a| matches!(a, Action::BuyFaceUpCard(_) | Action::BuyReservedCard(_)))
            .filter_map(|a| {
                let card = board.card(a.target_card()?).ok()?;
                Some((a, card.reputation, card.cost.total()))
            })
            // Highest reputation, then cheapest, then first listed.
            .fold(None, |best: Option<(&Action, u32, u32)>, next| match best {
                Some(b) if (b.1, std::cmp::Reverse(b.2)) >= (next.1, std::cmp::Reverse(next.2)) => {
                    Some(b)
                }
                _ => Some(next),
            })
            .map(|(a, _, _)| a.clone())
    }

    fn best_pick(board: &Board, actions: &[Action]) -> Option<Action> {
        let demand = Self::demand(board);
        let score = |a: &Action| -> f64 {
            a.requested_tokens()
                .iter()
                .map(|(t, _)| demand[t.index()])
                .sum()
        };

        actions
            .iter()
            .filter(|a| matches!(a, Action::PickThreeDistinct(_)))
            .fold(None, |best: Option<(&Action, f64)>, next| {
                let s = score(next);
                match best {
                    Some(b) if b.1 >= s => Some(b),
                    _ => Some((next, s)),
                }
            })
            .map(|(a, _)| a.clone())
    }
}

impl Policy for GreedyPolicy {
    fn choose_action(&self, board: &Board, player: PlayerId, _rng: &mut GameRng) -> Action {
        let actions = legal_actions(board, player);

        Self::best_purchase(board, &actions)
            .or_else(|| Self::best_pick(board, &actions))
            .or_else(|| {
                actions
                    .iter()
                    .find(|a| matches!(a, Action::ReserveCard(_)))
                    .cloned()
            })
            .unwrap_or(Action::Pass)
    }
}
