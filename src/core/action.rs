//! Player actions and the validation error taxonomy.
//!
//! A turn is exactly one action: move a piece one orthogonal cell, or
//! rotate it a quarter turn. Validation failures are typed results;
//! they are reported verbatim to the caller and never consume the turn.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::faction::Faction;
use super::geometry::{Coordinate, Direction};

/// A complete player action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameAction {
    /// Move the piece at `from` one cell toward `direction`.
    Move {
        from: Coordinate,
        direction: Direction,
    },
    /// Rotate the piece at `at` a quarter turn.
    Rotate { at: Coordinate, clockwise: bool },
}

impl GameAction {
    /// The coordinate of the piece the action targets.
    #[must_use]
    pub const fn target(&self) -> Coordinate {
        match self {
            GameAction::Move { from, .. } => *from,
            GameAction::Rotate { at, .. } => *at,
        }
    }
}

/// Why an action was rejected.
///
/// Every variant leaves the game state untouched; the caller decides
/// whether to re-prompt the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ActionError {
    #[error("coordinate {0} is outside the board")]
    OutOfBounds(Coordinate),

    #[error("no piece at {0}")]
    EmptyCell(Coordinate),

    #[error("piece at {0} belongs to the opposing side")]
    NotOwner(Coordinate),

    #[error("piece at {0} is no longer in play")]
    PieceDead(Coordinate),

    #[error("piece at {0} cannot perform that action")]
    CapabilityDenied(Coordinate),

    #[error("destination {0} is occupied")]
    OccupiedCell(Coordinate),

    #[error("cell {0} is reserved for the opposing side")]
    ZoneViolation(Coordinate),

    #[error("rotation would aim the laser off the board")]
    IllegalSphinxOrientation,

    #[error("it is not {0}'s turn")]
    NotYourTurn(Faction),

    #[error("the game is already over")]
    GameOver,
}
