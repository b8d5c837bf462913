//! The card and patron catalog.
//!
//! A `Catalog` owns every definition for a game. Ids are positions in the
//! catalog's lists, so lookup is a bounds-checked index. Boards hold ids and
//! borrow the catalog through an `Arc`, so any number of concurrent games
//! can share one catalog without copying card data.

use serde::{Deserialize, Serialize};

use super::definition::{Card, CardId, Level, Patron, PatronId};
use crate::core::{CatalogError, GameConfig, Token};

/// Immutable card and patron definitions.
///
/// ## Example
///
/// ```
/// use rust_gemtrade::cards::{Card, CardId, Catalog, Level, Patron, PatronId};
/// use rust_gemtrade::core::{Token, TokenSet};
///
/// let cards = vec![Card::new(
///     CardId::new(0),
///     Level::One,
///     Token::Red,
///     0,
///     TokenSet::from_pairs(&[(Token::Blue, 3)]),
/// )];
/// let patrons = vec![Patron::new(
///     PatronId::new(0),
///     3,
///     TokenSet::from_pairs(&[(Token::Red, 4)]),
/// )];
///
/// let catalog = Catalog::new(cards, patrons).unwrap();
/// assert_eq!(catalog.card(CardId::new(0)).unwrap().bonus, Token::Red);
/// assert_eq!(catalog.cards_at(Level::One).count(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCatalog")]
pub struct Catalog {
    cards: Vec<Card>,
    patrons: Vec<Patron>,
}

#[derive(Deserialize)]
struct RawCatalog {
    cards: Vec<Card>,
    patrons: Vec<Patron>,
}

impl TryFrom<RawCatalog> for Catalog {
    type Error = CatalogError;

    fn try_from(raw: RawCatalog) -> Result<Self, Self::Error> {
        Catalog::new(raw.cards, raw.patrons)
    }
}

impl Catalog {
    /// Validate and wrap definitions.
    ///
    /// Each id must equal its position, costs must be non-empty and list
    /// colors only, and bonuses must be colors.
    pub fn new(cards: Vec<Card>, patrons: Vec<Patron>) -> Result<Self, CatalogError> {
        for (position, card) in cards.iter().enumerate() {
            if card.id.index() != position {
                return Err(CatalogError::CardIdMismatch {
                    position,
                    id: card.id,
                });
            }
            if card.bonus.is_wildcard() {
                return Err(CatalogError::WildcardBonus(card.id));
            }
            if card.cost[Token::Wildcard] > 0 {
                return Err(CatalogError::WildcardCost(card.id));
            }
            if card.cost.is_empty() {
                return Err(CatalogError::EmptyCost(card.id));
            }
        }

        for (position, patron) in patrons.iter().enumerate() {
            if patron.id.index() != position {
                return Err(CatalogError::PatronIdMismatch {
                    position,
                    id: patron.id,
                });
            }
            if patron.requirement[Token::Wildcard] > 0 {
                return Err(CatalogError::WildcardPatronCost(patron.id));
            }
        }

        Ok(Self { cards, patrons })
    }

    /// Check the catalog can fill a market for `config`.
    pub fn check_supports(&self, config: &GameConfig) -> Result<(), CatalogError> {
        for level in Level::ALL {
            let available = self.cards_at(level).count();
            if available < config.slot_capacity {
                return Err(CatalogError::NotEnoughCards {
                    level: level.number(),
                    available,
                    required: config.slot_capacity,
                });
            }
        }
        if self.patrons.len() < config.patron_count() {
            return Err(CatalogError::NotEnoughPatrons {
                available: self.patrons.len(),
                required: config.patron_count(),
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.index())
    }

    #[must_use]
    pub fn patron(&self, id: PatronId) -> Option<&Patron> {
        self.patrons.get(id.index())
    }

    /// All cards in id order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// All patrons in id order.
    #[must_use]
    pub fn patrons(&self) -> &[Patron] {
        &self.patrons
    }

    /// Cards of one level, in catalog order.
    pub fn cards_at(&self, level: Level) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(move |c| c.level == level)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
