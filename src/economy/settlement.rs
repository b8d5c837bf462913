//! Affordability and payment.
//!
//! A cost is covered in a fixed priority order: permanent bonuses first,
//! then held tokens of the same color, then wildcards. Bonuses are never
//! spent. The wildcard pool is shared across colors, so the aggregate
//! deficit check in [`can_afford`] agrees with per-color greedy deduction
//! in [`settle`] regardless of the order colors are visited.

use tracing::trace;

use super::account::Economy;
use crate::core::{GameError, Token, TokenSet};

/// Tokens of `cost` that bonuses and same-color held tokens leave uncovered.
///
/// This is the number of wildcards needed to pay.
#[must_use]
pub fn shortfall(economy: &Economy, cost: &TokenSet) -> u32 {
    Token::COLORS
        .iter()
        .map(|&color| {
            let available = economy.bonuses()[color] + economy.held()[color];
            cost[color].saturating_sub(available)
        })
        .sum()
}

/// Whether `economy` can pay `cost`.
///
/// ```
/// use rust_gemtrade::core::{Token, TokenSet};
/// use rust_gemtrade::economy::{can_afford, Economy};
///
/// let economy = Economy::new();
/// assert!(!can_afford(&economy, &TokenSet::from_pairs(&[(Token::Red, 1)])));
/// assert!(can_afford(&economy, &TokenSet::new()));
/// ```
#[must_use]
pub fn can_afford(economy: &Economy, cost: &TokenSet) -> bool {
    shortfall(economy, cost) <= economy.held()[Token::Wildcard]
}

/// Deduct `cost` from the economy's held tokens and return what was paid.
///
/// Call only after [`can_afford`] succeeded. The deduction is computed on a
/// copy and committed at the end, so a failure leaves the economy untouched;
/// a failure after a successful `can_afford` is a caller bug.
pub fn settle(economy: &mut Economy, cost: &TokenSet) -> Result<TokenSet, GameError> {
    let bonuses = *economy.bonuses();
    let mut held = *economy.held();
    let mut paid = TokenSet::new();

    for color in Token::COLORS {
        let required = cost[color];
        let bonus = bonuses[color];
        if bonus >= required {
            continue;
        }

        let remain = required - bonus;
        let in_hand = held[color];
        if in_hand >= remain {
            held[color] -= remain;
            paid.add(color, remain);
            continue;
        }

        let needed = remain - in_hand;
        held[color] = 0;
        paid.add(color, in_hand);

        let wild = held[Token::Wildcard];
        if wild < needed {
            return Err(GameError::InsufficientBalance {
                missing: shortfall(economy, cost) - economy.held()[Token::Wildcard],
            });
        }
        held[Token::Wildcard] = wild - needed;
        paid.add(Token::Wildcard, needed);
        trace!(%color, wildcards = needed, "wildcards cover deficit");
    }

    economy.set_held(held);
    Ok(paid)
}
