//! Whole-board invariant checks.
//!
//! `Board::audit` verifies the invariants every reachable state must hold.
//! The engine never calls it on the hot path; tests and hosts that want a
//! consistency check after each turn do.

use rustc_hash::FxHashSet;

use super::state::Board;
use crate::cards::{CardId, Level, PatronId};
use crate::core::{PlayerId, Token};

/// A broken board invariant.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuditError {
    #[error("{token}: bank {bank} + held {held} != initial {initial}")]
    TokensNotConserved {
        token: Token,
        bank: u32,
        held: u32,
        initial: u32,
    },

    #[error("{0} appears in more than one place")]
    DuplicateCard(CardId),

    #[error("{0} is in no pile, slot, or player collection")]
    MissingCard(CardId),

    #[error("level {level} slot holds {len} cards, capacity {capacity}, pile {pile}")]
    SlotSize {
        level: u8,
        len: usize,
        capacity: usize,
        pile: usize,
    },

    #[error("{player} reserves {count} cards, limit {limit}")]
    ReserveBound {
        player: PlayerId,
        count: usize,
        limit: usize,
    },

    #[error("{0} is both face-up and granted, or granted twice")]
    DuplicatePatron(PatronId),

    #[error("{player} bonuses do not match owned cards")]
    BonusMismatch { player: PlayerId },
}

impl Board {
    /// Check token conservation, card and patron uniqueness, slot sizes,
    /// reserve bounds, and that bonuses match owned cards.
    pub fn audit(&self) -> Result<(), AuditError> {
        self.audit_tokens()?;
        self.audit_cards()?;
        self.audit_slots()?;
        self.audit_players()?;
        self.audit_patrons()
    }

    fn audit_tokens(&self) -> Result<(), AuditError> {
        for token in Token::ALL {
            let bank = self.bank()[token];
            let held: u32 = self.economies.values().map(|e| e.held()[token]).sum();
            let initial = self.initial_bank()[token];
            if bank + held != initial {
                return Err(AuditError::TokensNotConserved {
                    token,
                    bank,
                    held,
                    initial,
                });
            }
        }
        Ok(())
    }

    fn audit_cards(&self) -> Result<(), AuditError> {
        let mut seen: FxHashSet<CardId> = FxHashSet::default();
        let piles = Level::ALL
            .into_iter()
            .flat_map(|level| self.market.pile(level).iter().copied());
        let players = self
            .economies
            .values()
            .flat_map(|e| e.owned().iter().chain(e.reserved().iter()).copied());

        for card in self.market.all_face_up().chain(piles).chain(players) {
            if !seen.insert(card) {
                return Err(AuditError::DuplicateCard(card));
            }
        }

        match self.catalog().cards().iter().find(|c| !seen.contains(&c.id)) {
            Some(card) => Err(AuditError::MissingCard(card.id)),
            None => Ok(()),
        }
    }

    fn audit_slots(&self) -> Result<(), AuditError> {
        let capacity = self.market.capacity();
        for level in Level::ALL {
            let len = self.market.face_up(level).len();
            let pile = self.market.pile_len(level);
            if len > capacity || (len < capacity && pile > 0) {
                return Err(AuditError::SlotSize {
                    level: level.number(),
                    len,
                    capacity,
                    pile,
                });
            }
        }
        Ok(())
    }

    fn audit_players(&self) -> Result<(), AuditError> {
        let limit = self.config().reserve_limit;
        for (player, economy) in self.economies.iter() {
            if economy.reserved_count() > limit {
                return Err(AuditError::ReserveBound {
                    player,
                    count: economy.reserved_count(),
                    limit,
                });
            }

            let mut bonuses = crate::core::TokenSet::new();
            for &id in economy.owned() {
                if let Some(card) = self.catalog().card(id) {
                    bonuses.add(card.bonus, 1);
                }
            }
            if bonuses != *economy.bonuses() {
                return Err(AuditError::BonusMismatch { player });
            }
        }
        Ok(())
    }

    fn audit_patrons(&self) -> Result<(), AuditError> {
        let mut seen: FxHashSet<PatronId> = FxHashSet::default();
        let granted = self.economies.values().flat_map(|e| e.patrons().iter().copied());
        for patron in self.market.patrons().iter().copied().chain(granted) {
            if !seen.insert(patron) {
                return Err(AuditError::DuplicatePatron(patron));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TokenSet;
    use crate::testing;

    #[test]
    fn test_fresh_board_passes() {
        for players in 2..=4 {
            assert_eq!(testing::board(players).audit(), Ok(()));
        }
    }

    #[test]
    fn test_detects_token_leak() {
        let mut board = testing::board(2);
        board.economies[PlayerId::new(0)].receive(&TokenSet::from_pairs(&[(Token::Red, 1)]));
        assert_eq!(
            board.audit(),
            Err(AuditError::TokensNotConserved {
                token: Token::Red,
                bank: 4,
                held: 1,
                initial: 4
            })
        );
    }

    #[test]
    fn test_detects_duplicate_card() {
        let mut board = testing::board(2);
        board.economies[PlayerId::new(1)].reserve(CardId::new(0));
        assert_eq!(board.audit(), Err(AuditError::DuplicateCard(CardId::new(0))));
    }

    #[test]
    fn test_detects_reserve_overflow() {
        let mut board = testing::board(2);
        let level = Level::One;
        for _ in 0..4 {
            let card = board.market.face_up(level)[0];
            board.market.replace_card(level, card).unwrap();
            board.economies[PlayerId::new(0)].reserve(card);
        }
        assert_eq!(
            board.audit(),
            Err(AuditError::ReserveBound {
                player: PlayerId::new(0),
                count: 4,
                limit: 3
            })
        );
    }

    #[test]
    fn test_detects_patron_granted_twice() {
        let mut board = testing::board(2);
        let patron = board.patron(PatronId::new(0)).unwrap().clone();
        board.economies[PlayerId::new(0)].attract(&patron);
        assert_eq!(board.audit(), Err(AuditError::DuplicatePatron(PatronId::new(0))));
    }
}
