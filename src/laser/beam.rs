//! The beam algorithm.
//!
//! A beam starts one cell beyond the firing Sphinx's corner and walks
//! the grid one cell at a time. Mirrored sides turn it in place,
//! `Block` sides absorb it, `Hit` sides destroy the struck piece, and
//! leaving the grid ends it at the boundary coordinate one past the
//! last valid cell.
//!
//! Red's Sphinx sits at (0, 0) and fires South or East; Silver's sits
//! at (maxRow, maxCol) and fires North or West. The firing side alone
//! therefore identifies the origin corner.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::board::Board;
use crate::core::{Coordinate, Direction, SideOutcome};

/// Terminal result of a beam striking a piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrikeResult {
    /// The piece blocked the beam and survives.
    Absorbed,
    /// The piece was struck on a vulnerable side; the caller removes it.
    Destroyed,
}

/// How a beam ended.
///
/// Reflections are not terminal - a reflected beam keeps walking until
/// it strikes a non-mirrored side or leaves the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BeamOutcome {
    /// The beam left the grid; carries the boundary coordinate one
    /// step past the last valid cell.
    ExitedBoard(Coordinate),
    /// The beam terminated on a piece at the given cell.
    StruckPiece(Coordinate, StrikeResult),
}

/// A computed beam: every traversed cell plus the terminal outcome.
///
/// The path exists for rendering and diagnostics only; it carries no
/// rules significance. Mirror cells appear once, at first arrival.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeamTrace {
    pub path: SmallVec<[Coordinate; 16]>,
    pub outcome: BeamOutcome,
}

/// The corner a beam fired toward `side` originates from.
#[must_use]
pub const fn origin_corner(board: &Board, side: Direction) -> Coordinate {
    match side {
        Direction::South | Direction::East => Coordinate::new(0, 0),
        Direction::North | Direction::West => Coordinate::new(board.max_row(), board.max_col()),
    }
}

/// Fire a beam from the Sphinx corner associated with `origin_side`.
///
/// Never fails on a well-formed board. The walk is provably finite (a
/// cell can be entered at most once per direction); exceeding that
/// bound is a broken invariant and panics rather than guessing an
/// outcome.
#[must_use]
pub fn fire(board: &Board, origin_side: Direction) -> BeamTrace {
    let mut direction = origin_side;
    let mut location = origin_corner(board, origin_side).step(direction);
    let mut path = SmallVec::new();

    // Each cell admits one visit per travel direction.
    let step_limit = board.rows() as usize * board.cols() as usize * 4;
    let mut steps = 0;

    let outcome = loop {
        steps += 1;
        if steps > step_limit {
            panic!("beam failed to terminate within {} steps", step_limit);
        }

        if !board.in_bounds(location) {
            break BeamOutcome::ExitedBoard(location);
        }
        path.push(location);

        let Some(piece) = board.piece_at(location) else {
            location = location.step(direction);
            continue;
        };

        let entering_side = direction.opposite();
        match piece.orientation.side_outcome(entering_side) {
            SideOutcome::Deflect(new_direction) => {
                // Reflection happens in place at the mirror's cell;
                // the beam then leaves along the new direction.
                direction = new_direction;
                location = location.step(direction);
            }
            SideOutcome::Block => break BeamOutcome::StruckPiece(location, StrikeResult::Absorbed),
            SideOutcome::Hit => break BeamOutcome::StruckPiece(location, StrikeResult::Destroyed),
        }
    };

    debug!(origin = %origin_side, ?outcome, cells = path.len(), "laser fired");
    BeamTrace { path, outcome }
}
