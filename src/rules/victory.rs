//! Win evaluation.
//!
//! Among players at or above the reputation threshold, winners have the
//! highest reputation; ties go to the fewest owned cards. Players still
//! tied after that share the win.

use crate::board::Board;
use crate::core::PlayerId;

/// Whether `player` has reached the reputation threshold.
#[must_use]
pub fn reached_threshold(board: &Board, player: PlayerId) -> bool {
    board
        .economy(player)
        .is_some_and(|e| e.reputation() >= board.config().reputation_to_win)
}

/// Whether any player has reached the reputation threshold.
#[must_use]
pub fn any_reached_threshold(board: &Board) -> bool {
    PlayerId::all(board.player_count()).any(|p| reached_threshold(board, p))
}

/// Winners by the current standings, in seat order.
///
/// Empty when nobody has reached the threshold.
#[must_use]
pub fn select_winners(board: &Board) -> Vec<PlayerId> {
    let contenders: Vec<(PlayerId, u32, usize)> = board
        .economies()
        .iter()
        .filter(|(p, _)| reached_threshold(board, *p))
        .map(|(p, e)| (p, e.reputation(), e.owned_count()))
        .collect();

    let Some(best) = contenders
        .iter()
        .map(|&(_, reputation, owned)| (reputation, std::cmp::Reverse(owned)))
        .max()
    else {
        return Vec::new();
    };

    contenders
        .into_iter()
        .filter(|&(_, reputation, owned)| (reputation, std::cmp::Reverse(owned)) == best)
        .map(|(p, _, _)| p)
        .collect()
}
