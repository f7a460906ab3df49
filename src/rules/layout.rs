//! Initial piece layouts and setup validation.
//!
//! A layout is a list of placements plus each faction's initial laser
//! direction. The built-in [`classic`] opening is the standard
//! configuration: 13 pieces per side, 180-degree rotationally
//! symmetric, Sphinxes in opposite corners.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::Board;
use crate::core::{
    Coordinate, Corner, Direction, Faction, Gamepiece, OrientationState, PieceKind,
};

/// One piece of an initial layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub coord: Coordinate,
    pub kind: PieceKind,
    pub owner: Faction,
    pub orientation: OrientationState,
}

impl Placement {
    /// Create a placement.
    #[must_use]
    pub const fn new(
        coord: Coordinate,
        kind: PieceKind,
        owner: Faction,
        orientation: OrientationState,
    ) -> Self {
        Self {
            coord,
            kind,
            owner,
            orientation,
        }
    }
}

/// An initial board configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub placements: Vec<Placement>,
    /// Initial firing direction per faction.
    pub laser_facing: crate::core::FactionMap<Direction>,
}

/// Why a layout was rejected at game setup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum SetupError {
    #[error("board of {rows}x{cols} is too small")]
    BoardTooSmall { rows: i16, cols: i16 },

    #[error("placement at {0} is outside the board")]
    OutOfBounds(Coordinate),

    #[error("two placements share cell {0}")]
    DuplicateCell(Coordinate),

    #[error("placement at {0} violates an exclusive zone")]
    ZoneViolation(Coordinate),

    #[error("placement at {coord} holds an illegal orientation for {kind}")]
    IllegalOrientation { coord: Coordinate, kind: PieceKind },

    #[error("{0} has no Sphinx")]
    MissingSphinx(Faction),

    #[error("{0} has more than one Sphinx")]
    DuplicateSphinx(Faction),

    #[error("{0}'s Sphinx is not on its home corner")]
    SphinxOffCorner(Faction),

    #[error("{0}'s laser points off the board")]
    IllegalLaserFacing(Faction),

    #[error("{0} has no Pharaoh")]
    MissingPharaoh(Faction),

    #[error("{0} has more than one Pharaoh")]
    DuplicatePharaoh(Faction),
}

/// The fixed corner a faction's Sphinx occupies.
///
/// Red anchors the board's north-west corner, Silver the south-east.
#[must_use]
pub const fn sphinx_corner(board: &Board, faction: Faction) -> Coordinate {
    match faction {
        Faction::Red => Coordinate::new(0, 0),
        Faction::Silver => Coordinate::new(board.max_row(), board.max_col()),
    }
}

/// The two inward firing directions legal for a faction's Sphinx.
///
/// Any other facing would fire straight off the board edge.
#[must_use]
pub const fn sphinx_facings(faction: Faction) -> [Direction; 2] {
    match faction {
        Faction::Red => [Direction::South, Direction::East],
        Faction::Silver => [Direction::North, Direction::West],
    }
}

/// Build and validate a board from a layout.
///
/// Checks bounds, cell uniqueness, zone legality, per-kind orientation
/// legality, the Sphinx corner/facing invariants, and that each
/// faction fields exactly one Pharaoh.
pub fn build_board(
    rows: i16,
    cols: i16,
    exclusive_zones: bool,
    layout: &Layout,
) -> Result<Board, SetupError> {
    if rows < 2 || cols < 2 {
        return Err(SetupError::BoardTooSmall { rows, cols });
    }

    let mut board = Board::new(rows, cols, exclusive_zones);

    for placement in &layout.placements {
        let coord = placement.coord;
        if !board.in_bounds(coord) {
            return Err(SetupError::OutOfBounds(coord));
        }
        if board.piece_at(coord).is_some() {
            return Err(SetupError::DuplicateCell(coord));
        }
        if !placement.kind.allows_state(&placement.orientation) {
            return Err(SetupError::IllegalOrientation {
                coord,
                kind: placement.kind,
            });
        }
        if !board.zone_allows(coord, placement.owner) {
            return Err(SetupError::ZoneViolation(coord));
        }
        let piece = Gamepiece::new(placement.kind, placement.owner, placement.orientation);
        board
            .place(coord, piece)
            .expect("placement was pre-validated");
    }

    for faction in Faction::ALL {
        let sphinxes = board.query(Some(PieceKind::Sphinx), Some(faction));
        match sphinxes.as_slice() {
            [] => return Err(SetupError::MissingSphinx(faction)),
            [coord] => {
                if *coord != sphinx_corner(&board, faction) {
                    return Err(SetupError::SphinxOffCorner(faction));
                }
            }
            _ => return Err(SetupError::DuplicateSphinx(faction)),
        }
        if !sphinx_facings(faction).contains(&layout.laser_facing[faction]) {
            return Err(SetupError::IllegalLaserFacing(faction));
        }

        let pharaohs = board.query(Some(PieceKind::Pharaoh), Some(faction));
        match pharaohs.len() {
            0 => return Err(SetupError::MissingPharaoh(faction)),
            1 => {}
            _ => return Err(SetupError::DuplicatePharaoh(faction)),
        }
    }

    Ok(board)
}

/// The standard opening on the default 8x10 board.
///
/// Red occupies the north edge and fires South from (0, 0); Silver
/// mirrors the setup by a half turn and fires North from (7, 9).
#[must_use]
pub fn classic() -> Layout {
    use Corner::{NorthEast, SouthEast, SouthWest};
    use Direction::{North, South};
    use Faction::{Red, Silver};
    use PieceKind::{Anubis, Pharaoh, Pyramid, Scarab, Sphinx};

    let mut placements = Vec::with_capacity(26);
    let red: &[(i16, i16, PieceKind, OrientationState)] = &[
        (0, 0, Sphinx, OrientationState::sphinx()),
        (0, 4, Anubis, OrientationState::anubis(South)),
        (0, 5, Pharaoh, OrientationState::pharaoh()),
        (0, 6, Anubis, OrientationState::anubis(South)),
        (0, 7, Pyramid, OrientationState::pyramid(SouthEast)),
        (1, 2, Pyramid, OrientationState::pyramid(SouthWest)),
        (3, 0, Pyramid, OrientationState::pyramid(NorthEast)),
        (3, 4, Scarab, OrientationState::scarab(NorthEast)),
        (3, 5, Scarab, OrientationState::scarab(SouthEast)),
        (3, 7, Pyramid, OrientationState::pyramid(SouthEast)),
        (4, 0, Pyramid, OrientationState::pyramid(SouthEast)),
        (4, 7, Pyramid, OrientationState::pyramid(NorthEast)),
        (5, 6, Pyramid, OrientationState::pyramid(SouthEast)),
    ];

    for &(row, col, kind, orientation) in red {
        placements.push(Placement::new(
            Coordinate::new(row, col),
            kind,
            Red,
            orientation,
        ));
        // Silver's half is Red's rotated 180 degrees.
        placements.push(Placement::new(
            Coordinate::new(7 - row, 9 - col),
            kind,
            Silver,
            orientation.rotated(true).rotated(true),
        ));
    }

    Layout {
        placements,
        laser_facing: crate::core::FactionMap::new(|faction| match faction {
            Red => South,
            Silver => North,
        }),
    }
}
