//! The board: shared bank and market plus every seat's economy.
//!
//! ## Setup
//!
//! - Bank: `colored_supply` of each color, `wildcard_supply` wildcards
//! - Market: per-level piles in catalog order (or shuffled), `slot_capacity`
//!   face-up per level
//! - Patrons: `player_count + 1` face-up
//! - One empty `Economy` per seat
//!
//! The board only changes through the rules engine and the patron
//! evaluator. Everything it exposes publicly is read-only.

use std::sync::Arc;

use tracing::debug;

use super::bank::TokenBank;
use super::market::Market;
use crate::cards::{Card, CardId, Catalog, Level, Patron, PatronId};
use crate::core::{GameConfig, GameError, GameRng, PlayerId, PlayerMap, SetupError, TokenSet};
use crate::economy::Economy;

/// Complete game board.
///
/// Cloning is cheap: the catalog is shared, economies use persistent
/// collections, and the rest is a few small vectors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    config: GameConfig,
    catalog: Arc<Catalog>,
    initial_bank: TokenSet,
    pub(crate) bank: TokenBank,
    pub(crate) market: Market,
    pub(crate) economies: PlayerMap<Economy>,
}

impl Board {
    /// Validate `config` and `catalog`, then deal the opening board.
    pub fn new(config: GameConfig, catalog: Arc<Catalog>) -> Result<Self, SetupError> {
        config.validate()?;
        catalog.check_supports(&config)?;

        let rng = GameRng::new(config.seed);
        let piles = Level::ALL.map(|level| {
            let mut pile: Vec<CardId> = catalog.cards_at(level).map(|c| c.id).collect();
            if config.shuffle {
                rng.for_context(&format!("deck-{}", level.number())).shuffle(&mut pile);
            }
            pile
        });

        let mut patrons: Vec<PatronId> = catalog.patrons().iter().map(|p| p.id).collect();
        if config.shuffle {
            rng.for_context("patrons").shuffle(&mut patrons);
        }
        patrons.truncate(config.patron_count());

        let initial_bank = config.initial_bank();
        let market = Market::deal(piles, patrons, config.slot_capacity);
        debug!(
            players = config.player_count,
            seed = config.seed,
            shuffle = config.shuffle,
            "board dealt"
        );

        Ok(Self {
            economies: PlayerMap::new(config.player_count, |_| Economy::new()),
            bank: TokenBank::new(initial_bank),
            initial_bank,
            market,
            catalog,
            config,
        })
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.economies.player_count()
    }

    /// Bank contents at setup.
    #[must_use]
    pub fn initial_bank(&self) -> &TokenSet {
        &self.initial_bank
    }

    /// Current bank contents.
    #[must_use]
    pub fn bank(&self) -> &TokenSet {
        self.bank.tokens()
    }

    #[must_use]
    pub fn market(&self) -> &Market {
        &self.market
    }

    /// Face-up card definitions at `level`.
    pub fn face_up_cards(&self, level: Level) -> impl Iterator<Item = &Card> {
        self.market
            .face_up(level)
            .iter()
            .filter_map(|&id| self.catalog.card(id))
    }

    /// Face-up patron definitions in evaluation order.
    pub fn face_up_patrons(&self) -> impl Iterator<Item = &Patron> {
        self.market
            .patrons()
            .iter()
            .filter_map(|&id| self.catalog.patron(id))
    }

    /// A seat's economy, `None` for a seat outside the game.
    #[must_use]
    pub fn economy(&self, player: PlayerId) -> Option<&Economy> {
        self.economies.get(player)
    }

    #[must_use]
    pub fn economies(&self) -> &PlayerMap<Economy> {
        &self.economies
    }

    /// Look up a card definition.
    pub fn card(&self, id: CardId) -> Result<&Card, GameError> {
        self.catalog.card(id).ok_or(GameError::UnknownCard(id))
    }

    /// Look up a patron definition.
    pub fn patron(&self, id: PatronId) -> Result<&Patron, GameError> {
        self.catalog.patron(id).ok_or(GameError::UnknownPatron(id))
    }
}
