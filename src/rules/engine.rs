//! Action validation and application.
//!
//! [`apply_action`] is the only way a board changes in response to a
//! player. Each variant validates everything first and mutates second,
//! so a rejected action leaves the board exactly as it was.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::Board;
use crate::cards::{Card, CardId};
use crate::core::{Action, GameConfig, GameError, PlayerId, Token, TokenSet};
use crate::economy::{can_afford, settle, shortfall, Economy};

/// What an applied action moved.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionOutcome {
    /// Tokens moved from the bank to the player.
    pub taken: TokenSet,
    /// Tokens moved from the player back to the bank.
    pub paid: TokenSet,
    /// Card bought or reserved.
    pub card: Option<CardId>,
    /// Card drawn into the vacated market slot.
    pub refill: Option<CardId>,
}

/// Validate `action` for `player` and apply it.
///
/// Does not check turn order and does not grant patrons; the game session
/// handles both.
pub fn apply_action(
    board: &mut Board,
    player: PlayerId,
    action: &Action,
) -> Result<ActionOutcome, GameError> {
    let result = match action {
        Action::PickThreeDistinct(tokens) => pick_three(board, player, tokens),
        Action::PickTwoSame(token) => pick_two(board, player, *token),
        Action::ReserveCard(card) => reserve(board, player, *card),
        Action::BuyFaceUpCard(card) => buy_face_up(board, player, *card),
        Action::BuyReservedCard(card) => buy_reserved(board, player, *card),
        Action::Pass => economy(board, player).map(|_| ActionOutcome::default()),
    };

    match &result {
        Ok(outcome) => debug!(
            %player,
            %action,
            taken = %outcome.taken,
            paid = %outcome.paid,
            "action applied"
        ),
        Err(err) => debug!(%player, %action, error = %err, "action rejected"),
    }
    result
}

/// Check `action` without applying it.
pub fn validate_action(board: &Board, player: PlayerId, action: &Action) -> Result<(), GameError> {
    let mut scratch = board.clone();
    match action {
        Action::PickThreeDistinct(tokens) => pick_three(&mut scratch, player, tokens).map(drop),
        Action::PickTwoSame(token) => pick_two(&mut scratch, player, *token).map(drop),
        Action::ReserveCard(card) => reserve(&mut scratch, player, *card).map(drop),
        Action::BuyFaceUpCard(card) => buy_face_up(&mut scratch, player, *card).map(drop),
        Action::BuyReservedCard(card) => buy_reserved(&mut scratch, player, *card).map(drop),
        Action::Pass => economy(board, player).map(drop),
    }
}

fn economy(board: &Board, player: PlayerId) -> Result<&Economy, GameError> {
    board.economy(player).ok_or(GameError::UnknownPlayer(player))
}

/// Reject a gain that would put the player above the held-token cap.
pub(crate) fn check_hand_limit(
    config: &GameConfig,
    economy: &Economy,
    gained: u32,
) -> Result<(), GameError> {
    match config.max_held_tokens {
        Some(limit) if economy.held_total() + gained > limit => Err(GameError::TokenLimitExceeded {
            held: economy.held_total() + gained,
            limit,
        }),
        _ => Ok(()),
    }
}

/// Move `tokens` from the bank to the player. Validation is the caller's job.
fn transfer_from_bank(
    board: &mut Board,
    player: PlayerId,
    tokens: &TokenSet,
) -> Result<(), GameError> {
    board.bank.take(tokens)?;
    board.economies[player].receive(tokens);
    Ok(())
}

// === Token picks ===

fn pick_three(
    board: &mut Board,
    player: PlayerId,
    tokens: &[Token],
) -> Result<ActionOutcome, GameError> {
    let economy = economy(board, player)?;

    if tokens.is_empty() || tokens.len() > 3 {
        return Err(GameError::InvalidGemSelection {
            reason: "pick one to three colors",
        });
    }
    if tokens.iter().any(|t| t.is_wildcard()) {
        return Err(GameError::InvalidGemSelection {
            reason: "wildcards cannot be picked",
        });
    }
    let request = Action::pick_three(tokens).requested_tokens();
    if request.total() as usize != request.iter().count() {
        return Err(GameError::InvalidGemSelection {
            reason: "colors must be distinct",
        });
    }
    board.bank.check_take(&request)?;
    check_hand_limit(board.config(), economy, request.total())?;

    transfer_from_bank(board, player, &request)?;
    Ok(ActionOutcome {
        taken: request,
        ..ActionOutcome::default()
    })
}

fn pick_two(board: &mut Board, player: PlayerId, token: Token) -> Result<ActionOutcome, GameError> {
    let economy = economy(board, player)?;

    if token.is_wildcard() {
        return Err(GameError::InvalidGemSelection {
            reason: "wildcards cannot be picked",
        });
    }
    if board.bank.get(token) < 4 {
        return Err(GameError::InvalidGemSelection {
            reason: "two of a color needs four in the bank",
        });
    }
    check_hand_limit(board.config(), economy, 2)?;

    let request = TokenSet::from_pairs(&[(token, 2)]);
    transfer_from_bank(board, player, &request)?;
    Ok(ActionOutcome {
        taken: request,
        ..ActionOutcome::default()
    })
}

// === Cards ===

fn reserve(board: &mut Board, player: PlayerId, card: CardId) -> Result<ActionOutcome, GameError> {
    let economy = economy(board, player)?;
    board.card(card)?;

    let limit = board.config().reserve_limit;
    if economy.reserved_count() >= limit {
        return Err(GameError::ReserveLimitExceeded { limit });
    }
    let level = board
        .market
        .locate(card)
        .ok_or(GameError::CardNotAvailable(card))?;

    let mut bonus = TokenSet::new();
    if board.bank.get(Token::Wildcard) > 0 {
        bonus.add(Token::Wildcard, 1);
    }
    check_hand_limit(board.config(), economy, bonus.total())?;

    let refill = board.market.replace_card(level, card)?;
    board.economies[player].reserve(card);
    transfer_from_bank(board, player, &bonus)?;

    Ok(ActionOutcome {
        taken: bonus,
        card: Some(card),
        refill,
        ..ActionOutcome::default()
    })
}

/// Pay for `card` on a copy of the player's economy.
fn pay_for(economy: &Economy, card: &Card) -> Result<(Economy, TokenSet), GameError> {
    if !can_afford(economy, &card.cost) {
        let missing = shortfall(economy, &card.cost) - economy.held()[Token::Wildcard];
        return Err(GameError::InsufficientBalance { missing });
    }
    let mut paid_up = economy.clone();
    let paid = settle(&mut paid_up, &card.cost)?;
    paid_up.acquire(card);
    Ok((paid_up, paid))
}

fn buy_face_up(
    board: &mut Board,
    player: PlayerId,
    card: CardId,
) -> Result<ActionOutcome, GameError> {
    let economy = economy(board, player)?;
    let definition = board.card(card)?;
    let level = board
        .market
        .locate(card)
        .ok_or(GameError::CardNotAvailable(card))?;
    let (paid_up, paid) = pay_for(economy, definition)?;

    let refill = board.market.replace_card(level, card)?;
    board.economies[player] = paid_up;
    board.bank.give_back(&paid);

    Ok(ActionOutcome {
        paid,
        card: Some(card),
        refill,
        ..ActionOutcome::default()
    })
}

fn buy_reserved(
    board: &mut Board,
    player: PlayerId,
    card: CardId,
) -> Result<ActionOutcome, GameError> {
    let economy = economy(board, player)?;
    let definition = board.card(card)?;
    if !economy.has_reserved(card) {
        return Err(GameError::CardNotAvailable(card));
    }
    let (mut paid_up, paid) = pay_for(economy, definition)?;

    paid_up.unreserve(card);
    board.economies[player] = paid_up;
    board.bank.give_back(&paid);

    Ok(ActionOutcome {
        paid,
        card: Some(card),
        ..ActionOutcome::default()
    })
}
