//! Per-player economy state.
//!
//! An `Economy` is everything one seat owns: reputation, held tokens,
//! permanent bonuses, owned and reserved cards, and granted patrons.
//! Reputation and bonuses only grow, owned cards and patrons are
//! insertion-only. Mutation is crate-private: only the rules engine and
//! the patron evaluator change an economy.

use im::{OrdSet, Vector};
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId, Patron, PatronId};
use crate::core::{Token, TokenSet};

/// One player's holdings.
///
/// Uses `im` persistent collections so cloning a whole board for a
/// look-ahead is cheap.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Economy {
    reputation: u32,
    held: TokenSet,
    bonuses: TokenSet,
    owned: Vector<CardId>,
    reserved: Vector<CardId>,
    patrons: OrdSet<PatronId>,
}

impl Economy {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn reputation(&self) -> u32 {
        self.reputation
    }

    /// Tokens in hand, wildcards included.
    #[must_use]
    pub fn held(&self) -> &TokenSet {
        &self.held
    }

    /// Permanent bonus per color, one per owned card of that color.
    #[must_use]
    pub fn bonuses(&self) -> &TokenSet {
        &self.bonuses
    }

    /// Owned cards in acquisition order.
    #[must_use]
    pub fn owned(&self) -> &Vector<CardId> {
        &self.owned
    }

    /// Reserved cards in reservation order.
    #[must_use]
    pub fn reserved(&self) -> &Vector<CardId> {
        &self.reserved
    }

    #[must_use]
    pub fn patrons(&self) -> &OrdSet<PatronId> {
        &self.patrons
    }

    #[must_use]
    pub fn held_total(&self) -> u32 {
        self.held.total()
    }

    #[must_use]
    pub fn owned_count(&self) -> usize {
        self.owned.len()
    }

    #[must_use]
    pub fn reserved_count(&self) -> usize {
        self.reserved.len()
    }

    #[must_use]
    pub fn owns(&self, card: CardId) -> bool {
        self.owned.contains(&card)
    }

    #[must_use]
    pub fn has_reserved(&self, card: CardId) -> bool {
        self.reserved.contains(&card)
    }

    #[must_use]
    pub fn has_patron(&self, patron: PatronId) -> bool {
        self.patrons.contains(&patron)
    }

    // === Mutation (rules engine only) ===

    pub(crate) fn receive(&mut self, tokens: &TokenSet) {
        self.held.add_all(tokens);
    }

    pub(crate) fn set_held(&mut self, held: TokenSet) {
        self.held = held;
    }

    pub(crate) fn reserve(&mut self, card: CardId) {
        self.reserved.push_back(card);
    }

    /// Drop a card from the reserve. Returns `false` if it was not there.
    pub(crate) fn unreserve(&mut self, card: CardId) -> bool {
        match self.reserved.index_of(&card) {
            Some(pos) => {
                self.reserved.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Take ownership of a paid-for card.
    pub(crate) fn acquire(&mut self, card: &Card) {
        debug_assert!(card.bonus != Token::Wildcard);
        self.owned.push_back(card.id);
        self.bonuses.add(card.bonus, 1);
        self.reputation += card.reputation;
    }

    pub(crate) fn attract(&mut self, patron: &Patron) {
        self.patrons.insert(patron.id);
        self.reputation += patron.reputation;
    }
}
