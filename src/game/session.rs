//! Turn sequencing on top of the rules.
//!
//! A [`Game`] owns a [`Board`] and enforces whose turn it is. Each accepted
//! submission runs in a fixed order:
//!
//! 1. Apply the action (a rejection returns here and the turn is not used)
//! 2. Grant at most one patron
//! 3. Record the action
//! 4. Re-evaluate the win state
//! 5. Pass the turn to the next seat

use std::sync::Arc;

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::board::Board;
use crate::cards::{Catalog, PatronId};
use crate::core::{Action, ActionRecord, GameConfig, GameError, GameRng, PlayerId, SetupError, WinTiming};
use crate::policy::Policy;
use crate::rules::{self, ActionOutcome};

/// Where the game stands.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinState {
    /// Nobody has reached the threshold.
    InProgress,
    /// Someone reached the threshold; the round is being completed.
    FinalRound,
    /// No more actions are accepted.
    Finished {
        /// Winning seats in seat order. More than one means a shared win.
        winners: Vec<PlayerId>,
    },
}

impl WinState {
    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self, WinState::Finished { .. })
    }
}

/// Everything an accepted submission did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnReport {
    pub record: ActionRecord,
    pub outcome: ActionOutcome,
    /// Patron granted after the action.
    pub patron: Option<PatronId>,
    /// Win state after the turn.
    pub win_state: WinState,
}

/// A game in progress.
///
/// ## Usage
///
/// ```
/// use std::sync::Arc;
/// use rust_gemtrade::cards::{Card, CardId, Catalog, Level, Patron, PatronId};
/// use rust_gemtrade::core::{Action, GameConfig, PlayerId, Token, TokenSet};
/// use rust_gemtrade::game::Game;
///
/// let cards = (0..12u32)
///     .map(|i| {
///         let level = Level::ALL[(i / 4) as usize];
///         let cost = TokenSet::from_pairs(&[(Token::Red, 1 + i / 4)]);
///         Card::new(CardId::new(i), level, Token::Blue, i / 4, cost)
///     })
///     .collect();
/// let patrons = (0..3u32)
///     .map(|i| Patron::new(PatronId::new(i), 3, TokenSet::from_pairs(&[(Token::Blue, 3)])))
///     .collect();
/// let catalog = Arc::new(Catalog::new(cards, patrons).unwrap());
///
/// let mut game = Game::new(GameConfig::new(2), catalog).unwrap();
/// game.submit(PlayerId::new(0), Action::PickTwoSame(Token::Red)).unwrap();
///
/// assert_eq!(game.active_player(), PlayerId::new(1));
/// assert!(game.submit(PlayerId::new(0), Action::Pass).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    active: PlayerId,
    turn: u32,
    round: u32,
    history: Vector<ActionRecord>,
    win_state: WinState,
}

impl Game {
    /// Deal a new board and seat player 0 first.
    pub fn new(config: GameConfig, catalog: Arc<Catalog>) -> Result<Self, SetupError> {
        Ok(Self::from_board(Board::new(config, catalog)?))
    }

    /// Start a session on an already-dealt board.
    #[must_use]
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            active: PlayerId::new(0),
            turn: 1,
            round: 1,
            history: Vector::new(),
            win_state: WinState::InProgress,
        }
    }

    // === Queries ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The seat expected to act next.
    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.active
    }

    /// Number of the next turn, starting at 1.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Number of the current round, starting at 1.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Accepted actions in order.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    #[must_use]
    pub fn win_state(&self) -> &WinState {
        &self.win_state
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.win_state.is_finished()
    }

    /// Winning seats, once the game is finished.
    #[must_use]
    pub fn winners(&self) -> Option<&[PlayerId]> {
        match &self.win_state {
            WinState::Finished { winners } => Some(winners),
            _ => None,
        }
    }

    /// Legal actions for the active player; empty once finished.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        if self.is_finished() {
            return Vec::new();
        }
        rules::legal_actions(&self.board, self.active)
    }

    // === Turns ===

    /// Submit `action` on behalf of `player`.
    ///
    /// A rejected action leaves the game unchanged and `player` still to act.
    pub fn submit(&mut self, player: PlayerId, action: Action) -> Result<TurnReport, GameError> {
        if self.is_finished() {
            return Err(GameError::GameOver);
        }
        if player != self.active {
            return Err(GameError::NotYourTurn {
                expected: self.active,
                actual: player,
            });
        }

        let outcome = rules::apply_action(&mut self.board, player, &action)?;
        let patron = rules::evaluate_patrons(&mut self.board, player);

        let record = ActionRecord::new(player, action, self.turn, self.round);
        self.history.push_back(record.clone());
        self.update_win_state(player);

        self.turn += 1;
        self.active = player.next(self.board.player_count());
        if self.active == PlayerId::new(0) {
            self.round += 1;
        }

        Ok(TurnReport {
            record,
            outcome,
            patron,
            win_state: self.win_state.clone(),
        })
    }

    /// Ask `policy` for the active player's action and submit it.
    pub fn step<P: Policy + ?Sized>(
        &mut self,
        policy: &P,
        rng: &mut GameRng,
    ) -> Result<TurnReport, GameError> {
        if self.is_finished() {
            return Err(GameError::GameOver);
        }
        let action = policy.choose_action(&self.board, self.active, rng);
        self.submit(self.active, action)
    }

    fn update_win_state(&mut self, player: PlayerId) {
        let crossed = rules::reached_threshold(&self.board, player);
        let last_seat = player.index() + 1 == self.board.player_count();

        let finish = match self.board.config().win_timing {
            WinTiming::Immediate => crossed,
            WinTiming::CompleteRound => {
                if crossed && self.win_state == WinState::InProgress {
                    info!(%player, turn = self.turn, "threshold reached, completing round");
                    self.win_state = WinState::FinalRound;
                }
                self.win_state == WinState::FinalRound && last_seat
            }
        };

        if finish {
            let winners = rules::select_winners(&self.board);
            info!(turn = self.turn, round = self.round, ?winners, "game finished");
            self.win_state = WinState::Finished { winners };
        }
    }
}
