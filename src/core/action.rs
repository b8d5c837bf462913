//! Action representation.
//!
//! An `Action` is one of the five rule actions plus `Pass`. Policies build
//! them, the rules engine validates and applies them. `ActionRecord` keeps
//! who did what, when, for the game's history.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::PlayerId;
use super::token::{Token, TokenSet};
use crate::cards::CardId;

/// A complete game action.
///
/// ```
/// use rust_gemtrade::core::{Action, Token};
/// use rust_gemtrade::cards::CardId;
///
/// let pick = Action::pick_three(&[Token::Red, Token::Green, Token::Black]);
/// assert_eq!(pick.requested_tokens().total(), 3);
///
/// let buy = Action::BuyFaceUpCard(CardId::new(12));
/// assert_eq!(buy.target_card(), Some(CardId::new(12)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Take one token each of 1-3 distinct colors.
    PickThreeDistinct(SmallVec<[Token; 3]>),
    /// Take two tokens of one color that has at least four in the bank.
    PickTwoSame(Token),
    /// Move a face-up card into the reserve and take a wildcard if any remain.
    ReserveCard(CardId),
    /// Buy a face-up card.
    BuyFaceUpCard(CardId),
    /// Buy a card from the acting player's reserve.
    BuyReservedCard(CardId),
    /// Do nothing.
    Pass,
}

impl Action {
    /// Build a `PickThreeDistinct` from a slice of colors.
    #[must_use]
    pub fn pick_three(tokens: &[Token]) -> Self {
        Action::PickThreeDistinct(SmallVec::from_slice(tokens))
    }

    /// The tokens this action asks the bank for, before any reserve wildcard.
    #[must_use]
    pub fn requested_tokens(&self) -> TokenSet {
        match self {
            Action::PickThreeDistinct(tokens) => {
                let mut set = TokenSet::new();
                for &token in tokens {
                    set.add(token, 1);
                }
                set
            }
            Action::PickTwoSame(token) => TokenSet::from_pairs(&[(*token, 2)]),
            Action::ReserveCard(_)
            | Action::BuyFaceUpCard(_)
            | Action::BuyReservedCard(_)
            | Action::Pass => TokenSet::new(),
        }
    }

    /// The card this action targets, if any.
    #[must_use]
    pub fn target_card(&self) -> Option<CardId> {
        match self {
            Action::ReserveCard(id) | Action::BuyFaceUpCard(id) | Action::BuyReservedCard(id) => {
                Some(*id)
            }
            Action::PickThreeDistinct(_) | Action::PickTwoSame(_) | Action::Pass => None,
        }
    }

    /// Short label for logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Action::PickThreeDistinct(_) => "pick_three_distinct",
            Action::PickTwoSame(_) => "pick_two_same",
            Action::ReserveCard(_) => "reserve_card",
            Action::BuyFaceUpCard(_) => "buy_face_up_card",
            Action::BuyReservedCard(_) => "buy_reserved_card",
            Action::Pass => "pass",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::PickThreeDistinct(_) | Action::PickTwoSame(_) => {
                write!(f, "{} {}", self.kind(), self.requested_tokens())
            }
            Action::ReserveCard(id) | Action::BuyFaceUpCard(id) | Action::BuyReservedCard(id) => {
                write!(f, "{} {}", self.kind(), id)
            }
            Action::Pass => f.write_str(self.kind()),
        }
    }
}

/// An applied action with its place in the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who acted.
    pub player: PlayerId,

    /// The action applied.
    pub action: Action,

    /// Turn number (1-based, one per applied action).
    pub turn: u32,

    /// Round number (1-based, one per full rotation of seats).
    pub round: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(player: PlayerId, action: Action, turn: u32, round: u32) -> Self {
        Self {
            player,
            action,
            turn,
            round,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requested_tokens() {
        let pick = Action::pick_three(&[Token::Red, Token::Blue]);
        let set = pick.requested_tokens();
        assert_eq!(set[Token::Red], 1);
        assert_eq!(set[Token::Blue], 1);
        assert_eq!(set.total(), 2);

        let two = Action::PickTwoSame(Token::White);
        assert_eq!(two.requested_tokens()[Token::White], 2);

        assert!(Action::Pass.requested_tokens().is_empty());
    }

    #[test]
    fn test_target_card() {
        assert_eq!(Action::ReserveCard(CardId::new(3)).target_card(), Some(CardId::new(3)));
        assert_eq!(Action::BuyReservedCard(CardId::new(8)).target_card(), Some(CardId::new(8)));
        assert_eq!(Action::PickTwoSame(Token::Red).target_card(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Action::Pass.to_string(), "pass");
        assert_eq!(
            Action::BuyFaceUpCard(CardId::new(2)).to_string(),
            "buy_face_up_card Card(2)"
        );
        assert_eq!(
            Action::PickTwoSame(Token::Green).to_string(),
            "pick_two_same {green: 2}"
        );
    }

    #[test]
    fn test_action_serialization() {
        let action = Action::pick_three(&[Token::Red, Token::Green, Token::Black]);
        let json = serde_json::to_string(&action).unwrap();
        let back: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(action, back);
    }

    #[test]
    fn test_action_record() {
        let record = ActionRecord::new(PlayerId::new(1), Action::Pass, 4, 2);
        assert_eq!(record.player, PlayerId::new(1));
        assert_eq!(record.turn, 4);
        assert_eq!(record.round, 2);
    }
}
