//! # khet-core
//!
//! Rules engine for Khet-style laser board games: two factions move
//! and rotate mirrored pieces on a rectangular grid, fire a laser
//! after every action, and win by destroying the enemy Pharaoh.
//!
//! ## Design Principles
//!
//! 1. **Closed rules core**: piece kinds, capabilities, and legal
//!    orientation states form closed tables; there is no piece
//!    hierarchy to extend and no runtime type checks.
//!
//! 2. **Typed rejection**: every invalid action returns a typed error
//!    with the game state untouched. Errors are never control flow.
//!
//! 3. **Deterministic**: identical action sequences always produce
//!    identical outcomes; firing the laser on an unchanged board is
//!    idempotent. There is no randomness anywhere in the core.
//!
//! Rendering, transport, persistence, and AI are collaborators that
//! consume [`rules::Snapshot`], the legality queries, and
//! [`rules::TurnOutcome`]; the core defines no wire format or CLI.
//!
//! ## Modules
//!
//! - `core`: coordinates, directions, factions, orientations, pieces,
//!   actions
//! - `board`: the cell grid, placement rules, exclusive zones
//! - `laser`: beam propagation and outcomes
//! - `rules`: the turn controller, layouts, setup validation

pub mod board;
pub mod core;
pub mod laser;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    ActionError, Coordinate, Corner, Direction, Faction, FactionMap, GameAction, Gamepiece,
    OrientationState, PieceKind, Player, SideOutcome,
};

pub use crate::board::{Board, ExclusiveZones};

pub use crate::laser::{fire, BeamOutcome, BeamTrace, StrikeResult};

pub use crate::rules::{
    classic, DestroyedPiece, Game, GamePhase, Layout, Placement, SetupError, Snapshot,
    TurnOutcome,
};
