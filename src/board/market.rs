//! Face-up cards, draw piles, and the patron pool.
//!
//! Each level has an ordered draw pile (top = end of vec) and a face-up
//! slot of fixed capacity. Removing a face-up card refills the slot from
//! the same level's pile; once a pile is empty the slot shrinks instead.
//! Cards never move between levels and never return to a pile.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::{CardId, Level, PatronId};
use crate::core::GameError;

/// The card market and patron pool.
///
/// ## Usage
///
/// ```
/// use rust_gemtrade::board::Market;
/// use rust_gemtrade::cards::{CardId, Level, PatronId};
///
/// let ids = |r: std::ops::Range<u32>| r.map(CardId::new).collect::<Vec<_>>();
/// let mut market = Market::deal([ids(0..5), ids(5..9), ids(9..13)], vec![PatronId::new(0)], 4);
///
/// assert_eq!(market.face_up(Level::One), &ids(0..4)[..]);
/// assert_eq!(market.pile_len(Level::One), 1);
///
/// // Card 4 was next in the level-one pile.
/// let refill = market.replace_card(Level::One, CardId::new(2)).unwrap();
/// assert_eq!(refill, Some(CardId::new(4)));
/// assert_eq!(market.pile_len(Level::One), 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Market {
    slots: [Vec<CardId>; 3],
    piles: [Vec<CardId>; 3],
    patrons: Vec<PatronId>,
    capacity: usize,
}

impl Market {
    /// Deal a market from per-level piles given in draw order.
    ///
    /// Up to `capacity` cards per level go face-up; the rest stay in the
    /// pile. `patrons` is the face-up patron pool.
    #[must_use]
    pub fn deal(piles_in_draw_order: [Vec<CardId>; 3], patrons: Vec<PatronId>, capacity: usize) -> Self {
        let mut slots: [Vec<CardId>; 3] = Default::default();
        let mut piles: [Vec<CardId>; 3] = Default::default();

        for (i, mut pile) in piles_in_draw_order.into_iter().enumerate() {
            pile.reverse();
            while slots[i].len() < capacity {
                match pile.pop() {
                    Some(card) => slots[i].push(card),
                    None => break,
                }
            }
            piles[i] = pile;
        }

        Self {
            slots,
            piles,
            patrons,
            capacity,
        }
    }

    /// Face-up cards at `level`, oldest first.
    #[must_use]
    pub fn face_up(&self, level: Level) -> &[CardId] {
        &self.slots[level.index()]
    }

    /// All face-up cards, level one first.
    pub fn all_face_up(&self) -> impl Iterator<Item = CardId> + '_ {
        self.slots.iter().flat_map(|slot| slot.iter().copied())
    }

    /// Cards left in the draw pile at `level`.
    #[must_use]
    pub fn pile_len(&self, level: Level) -> usize {
        self.piles[level.index()].len()
    }

    /// Cards of the draw pile at `level`, next to be drawn last.
    #[must_use]
    pub fn pile(&self, level: Level) -> &[CardId] {
        &self.piles[level.index()]
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The level a face-up card sits at.
    #[must_use]
    pub fn locate(&self, card: CardId) -> Option<Level> {
        Level::ALL
            .into_iter()
            .find(|level| self.slots[level.index()].contains(&card))
    }

    #[must_use]
    pub fn is_face_up(&self, card: CardId) -> bool {
        self.locate(card).is_some()
    }

    /// Remove a face-up card and refill its slot from the pile.
    ///
    /// Returns the card drawn as a replacement, or `None` when the pile is
    /// empty and the slot shrank.
    pub fn replace_card(&mut self, level: Level, card: CardId) -> Result<Option<CardId>, GameError> {
        let slot = &mut self.slots[level.index()];
        let pos = slot
            .iter()
            .position(|&c| c == card)
            .ok_or(GameError::UnknownCard(card))?;
        slot.remove(pos);

        let refill = self.piles[level.index()].pop();
        if let Some(next) = refill {
            slot.push(next);
        }
        debug!(%level, %card, refill = ?refill, "market slot replenished");
        Ok(refill)
    }

    /// Face-up patrons in evaluation order.
    #[must_use]
    pub fn patrons(&self) -> &[PatronId] {
        &self.patrons
    }

    /// Remove a patron from the face-up pool.
    pub fn take_patron(&mut self, patron: PatronId) -> Result<(), GameError> {
        let pos = self
            .patrons
            .iter()
            .position(|&p| p == patron)
            .ok_or(GameError::UnknownPatron(patron))?;
        self.patrons.remove(pos);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(range: std::ops::Range<u32>) -> Vec<CardId> {
        range.map(CardId::new).collect()
    }

    fn market() -> Market {
        Market::deal(
            [ids(0..6), ids(6..10), ids(10..13)],
            vec![PatronId::new(0), PatronId::new(1), PatronId::new(2)],
            4,
        )
    }

    #[test]
    fn test_deal() {
        let m = market();
        assert_eq!(m.face_up(Level::One), &ids(0..4)[..]);
        assert_eq!(m.pile_len(Level::One), 2);
        assert_eq!(m.face_up(Level::Two).len(), 4);
        assert_eq!(m.pile_len(Level::Two), 0);
        // Short pile: the slot starts below capacity.
        assert_eq!(m.face_up(Level::Three), &ids(10..13)[..]);
        assert_eq!(m.all_face_up().count(), 11);
    }

    #[test]
    fn test_replace_draws_in_order() {
        let mut m = market();
        assert_eq!(m.replace_card(Level::One, CardId::new(0)).unwrap(), Some(CardId::new(4)));
        assert_eq!(m.replace_card(Level::One, CardId::new(1)).unwrap(), Some(CardId::new(5)));
        assert_eq!(m.face_up(Level::One), &[CardId::new(2), CardId::new(3), CardId::new(4), CardId::new(5)]);
        assert_eq!(m.pile_len(Level::One), 0);
    }

    #[test]
    fn test_replace_shrinks_when_pile_empty() {
        let mut m = market();
        assert_eq!(m.replace_card(Level::Two, CardId::new(7)).unwrap(), None);
        assert_eq!(m.face_up(Level::Two).len(), 3);
        assert!(!m.is_face_up(CardId::new(7)));
    }

    #[test]
    fn test_replace_unknown_card() {
        let mut m = market();
        let before = m.clone();
        // Face-up, but at another level.
        assert_eq!(
            m.replace_card(Level::Two, CardId::new(0)),
            Err(GameError::UnknownCard(CardId::new(0)))
        );
        assert_eq!(
            m.replace_card(Level::One, CardId::new(99)),
            Err(GameError::UnknownCard(CardId::new(99)))
        );
        assert_eq!(m, before);
    }

    #[test]
    fn test_locate() {
        let m = market();
        assert_eq!(m.locate(CardId::new(8)), Some(Level::Two));
        assert_eq!(m.locate(CardId::new(5)), None);
    }

    #[test]
    fn test_take_patron() {
        let mut m = market();
        m.take_patron(PatronId::new(1)).unwrap();
        assert_eq!(m.patrons(), &[PatronId::new(0), PatronId::new(2)]);
        assert_eq!(
            m.take_patron(PatronId::new(1)),
            Err(GameError::UnknownPatron(PatronId::new(1)))
        );
    }
}
