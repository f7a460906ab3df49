//! Beam propagation: fire a laser across the board and resolve the
//! terminal outcome.
//!
//! Each firing recomputes the beam fresh from the current board; the
//! beam carries no state between turns.

pub mod beam;

pub use beam::{fire, origin_corner, BeamOutcome, BeamTrace, StrikeResult};
