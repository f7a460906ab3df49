//! The turn state machine and game setup.
//!
//! [`Game`] sequences player actions, invokes the beam engine after
//! each one, applies destruction, and detects the win. [`layout`]
//! holds the built-in opening and validates externally supplied
//! layouts at setup.

pub mod game;
pub mod layout;

pub use game::{DestroyedPiece, Game, GamePhase, Snapshot, TurnOutcome};
pub use layout::{build_board, classic, sphinx_corner, sphinx_facings, Layout, Placement, SetupError};
