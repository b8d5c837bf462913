//! Patron visits.
//!
//! After every applied action the acting player is checked against the
//! face-up patrons in pool order. The first patron whose requirement the
//! player's bonuses cover is granted; at most one per turn.

use tracing::info;

use crate::board::Board;
use crate::cards::PatronId;
use crate::core::PlayerId;

/// The first face-up patron `player` qualifies for, without granting it.
#[must_use]
pub fn qualifying_patron(board: &Board, player: PlayerId) -> Option<PatronId> {
    let economy = board.economy(player)?;
    board
        .face_up_patrons()
        .find(|p| !economy.has_patron(p.id) && p.is_attracted_by(economy.bonuses()))
        .map(|p| p.id)
}

/// Grant `player` the first qualifying patron, if any.
///
/// Either the patron moves from the pool to the player or nothing changes.
pub fn evaluate_patrons(board: &mut Board, player: PlayerId) -> Option<PatronId> {
    let id = qualifying_patron(board, player)?;
    let patron = board.patron(id).ok()?.clone();

    let economy = board.economies.get_mut(player)?;
    board.market.take_patron(patron.id).ok()?;
    economy.attract(&patron);

    info!(
        %player,
        patron = %patron.id,
        reputation = economy.reputation(),
        "patron granted"
    );
    Some(patron.id)
}
