//! Legal action enumeration.
//!
//! Every action returned by [`legal_actions`] is accepted by
//! [`apply_action`](super::apply_action) on the same board.
//!
//! Token picks are enumerated in canonical form: a pick of distinct colors
//! takes as many colors as the bank can supply and the hand limit leaves
//! room for, up to three. A smaller pick only shows up once one of those
//! runs short.

use smallvec::SmallVec;

use super::engine::check_hand_limit;
use crate::board::Board;
use crate::core::{Action, PlayerId, Token};
use crate::economy::can_afford;

/// All actions `player` may take, `Pass` last.
///
/// Empty only for a seat outside the game.
#[must_use]
pub fn legal_actions(board: &Board, player: PlayerId) -> Vec<Action> {
    let Some(economy) = board.economy(player) else {
        return Vec::new();
    };
    let config = board.config();
    let bank = board.bank();
    let mut actions = Vec::new();

    // === Picks ===

    let colors: SmallVec<[Token; 5]> = Token::COLORS
        .into_iter()
        .filter(|&c| bank[c] > 0)
        .collect();
    let mut size = colors.len().min(3);
    if let Some(limit) = config.max_held_tokens {
        let room = limit.saturating_sub(economy.held_total()) as usize;
        size = size.min(room);
    }
    if size > 0 {
        for combo in combinations(&colors, size) {
            actions.push(Action::PickThreeDistinct(combo));
        }
    }

    if check_hand_limit(config, economy, 2).is_ok() {
        for color in Token::COLORS.into_iter().filter(|&c| bank[c] >= 4) {
            actions.push(Action::PickTwoSame(color));
        }
    }

    // === Cards ===

    let wildcard = u32::from(bank[Token::Wildcard] > 0);
    if economy.reserved_count() < config.reserve_limit
        && check_hand_limit(config, economy, wildcard).is_ok()
    {
        for card in board.market().all_face_up() {
            actions.push(Action::ReserveCard(card));
        }
    }

    for card in board.market().all_face_up() {
        if board.card(card).is_ok_and(|c| can_afford(economy, &c.cost)) {
            actions.push(Action::BuyFaceUpCard(card));
        }
    }
    for &card in economy.reserved() {
        if board.card(card).is_ok_and(|c| can_afford(economy, &c.cost)) {
            actions.push(Action::BuyReservedCard(card));
        }
    }

    actions.push(Action::Pass);
    actions
}

/// Every `size`-element subset of `items`, in lexicographic order.
fn combinations(items: &[Token], size: usize) -> Vec<SmallVec<[Token; 3]>> {
    fn extend(
        items: &[Token],
        size: usize,
        start: usize,
        current: &mut SmallVec<[Token; 3]>,
        out: &mut Vec<SmallVec<[Token; 3]>>,
    ) {
        if current.len() == size {
            out.push(current.clone());
            return;
        }
        for i in start..items.len() {
            current.push(items[i]);
            extend(items, size, i + 1, current, out);
            current.pop();
        }
    }

    let mut out = Vec::new();
    extend(items, size, 0, &mut SmallVec::new(), &mut out);
    out
}
