//! Piece kinds, capabilities, and the `Gamepiece` value.
//!
//! The kinds form a closed set; each kind fixes a movement capability,
//! a rotation capability, and the set of orientation states it may
//! legally hold. There is no piece hierarchy - everything the rules
//! need is keyed off [`PieceKind`].

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use super::faction::Faction;
use super::geometry::Direction;
use super::orientation::{Corner, OrientationState};

/// The legal orientation states of one piece kind.
pub type StateSet = SmallVec<[OrientationState; 4]>;

/// The closed set of piece kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    /// The king piece: vulnerable from every side, never rotates.
    Pharaoh,
    /// Double-sided mirror; the only piece that may displace another.
    Scarab,
    /// Single mirror, vulnerable on its two unmirrored sides.
    Pyramid,
    /// Unmirrored blocker with one protected face.
    Anubis,
    /// The immobile laser emitter, immune from every side.
    Sphinx,
}

impl PieceKind {
    /// All kinds.
    pub const ALL: [PieceKind; 5] = [
        PieceKind::Pharaoh,
        PieceKind::Scarab,
        PieceKind::Pyramid,
        PieceKind::Anubis,
        PieceKind::Sphinx,
    ];

    /// Whether pieces of this kind may move between cells.
    #[must_use]
    pub const fn can_move(self) -> bool {
        !matches!(self, PieceKind::Sphinx)
    }

    /// Whether pieces of this kind may rotate in place.
    #[must_use]
    pub const fn can_rotate(self) -> bool {
        !matches!(self, PieceKind::Pharaoh)
    }

    /// The finite set of orientation states this kind may hold.
    ///
    /// Pharaoh and Sphinx have a single state, Scarab two, Pyramid and
    /// Anubis four (one per quarter turn).
    #[must_use]
    pub fn legal_states(self) -> StateSet {
        match self {
            PieceKind::Pharaoh => smallvec![OrientationState::pharaoh()],
            PieceKind::Sphinx => smallvec![OrientationState::sphinx()],
            PieceKind::Scarab => smallvec![
                OrientationState::scarab(Corner::NorthEast),
                OrientationState::scarab(Corner::SouthEast),
            ],
            PieceKind::Pyramid => smallvec![
                OrientationState::pyramid(Corner::NorthEast),
                OrientationState::pyramid(Corner::SouthEast),
                OrientationState::pyramid(Corner::SouthWest),
                OrientationState::pyramid(Corner::NorthWest),
            ],
            PieceKind::Anubis => smallvec![
                OrientationState::anubis(Direction::North),
                OrientationState::anubis(Direction::East),
                OrientationState::anubis(Direction::South),
                OrientationState::anubis(Direction::West),
            ],
        }
    }

    /// Whether `state` is a legal orientation for this kind.
    #[must_use]
    pub fn allows_state(self, state: &OrientationState) -> bool {
        self.legal_states().contains(state)
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PieceKind::Pharaoh => "Pharaoh",
            PieceKind::Scarab => "Scarab",
            PieceKind::Pyramid => "Pyramid",
            PieceKind::Anubis => "Anubis",
            PieceKind::Sphinx => "Sphinx",
        };
        write!(f, "{}", name)
    }
}

/// A piece on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Gamepiece {
    pub kind: PieceKind,
    pub owner: Faction,
    pub orientation: OrientationState,
    /// Flips to false when the piece is struck on a `Hit` side.
    pub alive: bool,
}

impl Gamepiece {
    /// Create a live piece.
    ///
    /// The orientation must be legal for the kind; an illegal pairing
    /// is a programming error, not a game state.
    #[must_use]
    pub fn new(kind: PieceKind, owner: Faction, orientation: OrientationState) -> Self {
        assert!(
            kind.allows_state(&orientation),
            "illegal orientation for {}",
            kind
        );
        Self {
            kind,
            owner,
            orientation,
            alive: true,
        }
    }

    /// Movement capability, fixed by kind.
    #[must_use]
    pub const fn can_move(&self) -> bool {
        self.kind.can_move()
    }

    /// Rotation capability, fixed by kind.
    #[must_use]
    pub const fn can_rotate(&self) -> bool {
        self.kind.can_rotate()
    }

    /// Rotate a quarter turn in place.
    ///
    /// Legality of the result is guaranteed by the rotation law; the
    /// debug assertion pins the invariant.
    pub fn rotate(&mut self, clockwise: bool) {
        self.orientation = self.orientation.rotated(clockwise);
        debug_assert!(self.kind.allows_state(&self.orientation));
    }
}
