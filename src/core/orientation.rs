//! Per-side beam outcomes and the piece rotation law.
//!
//! Every piece carries an [`OrientationState`]: a 4-tuple indexed by
//! compass side in the fixed (N, E, S, W) order. Each entry says what
//! happens to a beam that strikes that side:
//!
//! - `Deflect(d)`: the side is mirrored; the beam exits toward `d`
//! - `Block`: the beam stops, the piece survives
//! - `Hit`: the beam stops, the piece is destroyed
//!
//! The beam strikes the side *opposite* its direction of travel: a
//! beam traveling South arrives at the piece's North face.
//!
//! Rotating a piece a quarter turn shifts the tuple one position and
//! turns every contained deflection direction the same way, so a legal
//! state maps to a legal state by construction.

use serde::{Deserialize, Serialize};

use super::geometry::Direction;

/// What happens to a beam striking one side of a piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SideOutcome {
    /// Mirrored side: the beam continues toward the given direction.
    Deflect(Direction),
    /// Immune side: the beam stops and the piece survives.
    Block,
    /// Vulnerable side: the beam stops and the piece is destroyed.
    Hit,
}

impl SideOutcome {
    /// Rotate a quarter turn: deflection directions turn with the
    /// piece, Block and Hit are direction-free.
    #[must_use]
    pub const fn rotated(self, clockwise: bool) -> Self {
        match self {
            SideOutcome::Deflect(d) => SideOutcome::Deflect(d.rotated(clockwise)),
            other => other,
        }
    }
}

/// A corner of a cell, naming the diagonal a mirror spans.
///
/// A Pyramid's single mirror faces one corner; a Scarab's double-sided
/// mirror lies along a full diagonal, so `NorthEast` and `SouthWest`
/// describe the same Scarab state (and likewise `SouthEast`/`NorthWest`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Corner {
    NorthEast,
    SouthEast,
    SouthWest,
    NorthWest,
}

/// The 4-sided outcome table for a piece's current rotation.
///
/// Indexed by the side on which a beam strikes, in (N, E, S, W) order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrientationState([SideOutcome; 4]);

impl OrientationState {
    /// Build a state from explicit per-side outcomes in (N, E, S, W) order.
    #[must_use]
    pub const fn new(sides: [SideOutcome; 4]) -> Self {
        Self(sides)
    }

    // === Per-kind constructors ===

    /// Pharaoh: vulnerable from every side.
    #[must_use]
    pub const fn pharaoh() -> Self {
        Self([SideOutcome::Hit; 4])
    }

    /// Sphinx: immune from every side, its own reflected beam included.
    #[must_use]
    pub const fn sphinx() -> Self {
        Self([SideOutcome::Block; 4])
    }

    /// Anubis: protected face toward `facing`, vulnerable elsewhere.
    #[must_use]
    pub const fn anubis(facing: Direction) -> Self {
        let mut sides = [SideOutcome::Hit; 4];
        sides[facing.index()] = SideOutcome::Block;
        Self(sides)
    }

    /// Pyramid: single mirror facing the given corner, vulnerable on
    /// the two unmirrored sides.
    ///
    /// A beam entering one mirrored side exits through the other: for
    /// a NorthEast mirror, a strike on the north face exits East.
    #[must_use]
    pub const fn pyramid(corner: Corner) -> Self {
        use Direction::{East, North, South, West};
        use SideOutcome::{Deflect, Hit};
        match corner {
            Corner::NorthEast => Self([Deflect(East), Deflect(North), Hit, Hit]),
            Corner::SouthEast => Self([Hit, Deflect(South), Deflect(East), Hit]),
            Corner::SouthWest => Self([Hit, Hit, Deflect(West), Deflect(South)]),
            Corner::NorthWest => Self([Deflect(West), Hit, Hit, Deflect(North)]),
        }
    }

    /// Scarab: double-sided mirror along a full diagonal; every side
    /// deflects, so a Scarab can never be destroyed.
    #[must_use]
    pub const fn scarab(corner: Corner) -> Self {
        use Direction::{East, North, South, West};
        use SideOutcome::Deflect;
        match corner {
            // "/" mirror, from the southwest corner to the northeast
            Corner::NorthEast | Corner::SouthWest => {
                Self([Deflect(West), Deflect(South), Deflect(East), Deflect(North)])
            }
            // "\" mirror, from the northwest corner to the southeast
            Corner::SouthEast | Corner::NorthWest => {
                Self([Deflect(East), Deflect(North), Deflect(West), Deflect(South)])
            }
        }
    }

    // === Queries ===

    /// Outcome for a beam striking the given side.
    ///
    /// The entering side is the side opposite the beam's direction of
    /// travel; callers compute it with [`Direction::opposite`].
    #[must_use]
    pub const fn side_outcome(&self, entering_side: Direction) -> SideOutcome {
        self.0[entering_side.index()]
    }

    /// The raw outcome tuple in (N, E, S, W) order.
    #[must_use]
    pub const fn sides(&self) -> &[SideOutcome; 4] {
        &self.0
    }

    // === Rotation law ===

    /// The state after a quarter turn.
    ///
    /// Clockwise shifts the tuple (N, E, S, W) -> (W, N, E, S): the
    /// outcome that labeled a side moves to the side's clockwise
    /// neighbor, and each deflection direction turns with it.
    /// Counterclockwise is the exact inverse.
    #[must_use]
    pub fn rotated(&self, clockwise: bool) -> Self {
        let mut sides = [SideOutcome::Block; 4];
        for side in Direction::ALL {
            let source = side.rotated(!clockwise);
            sides[side.index()] = self.0[source.index()].rotated(clockwise);
        }
        Self(sides)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Direction::{East, North, South, West};
    use SideOutcome::{Block, Deflect, Hit};

    #[test]
    fn test_pharaoh_all_hit() {
        let state = OrientationState::pharaoh();
        for side in Direction::ALL {
            assert_eq!(state.side_outcome(side), Hit);
        }
    }

    #[test]
    fn test_sphinx_all_block() {
        let state = OrientationState::sphinx();
        for side in Direction::ALL {
            assert_eq!(state.side_outcome(side), Block);
        }
    }

    #[test]
    fn test_anubis_protected_front_only() {
        let state = OrientationState::anubis(South);
        assert_eq!(state.side_outcome(South), Block);
        assert_eq!(state.side_outcome(North), Hit);
        assert_eq!(state.side_outcome(East), Hit);
        assert_eq!(state.side_outcome(West), Hit);
    }

    #[test]
    fn test_pyramid_northeast_table() {
        // The canonical example: (East, North, Hit, Hit).
        let state = OrientationState::pyramid(Corner::NorthEast);
        assert_eq!(state.sides(), &[Deflect(East), Deflect(North), Hit, Hit]);
    }

    #[test]
    fn test_pyramid_rotation_cycles_corners() {
        let ne = OrientationState::pyramid(Corner::NorthEast);
        let se = OrientationState::pyramid(Corner::SouthEast);
        let sw = OrientationState::pyramid(Corner::SouthWest);
        let nw = OrientationState::pyramid(Corner::NorthWest);

        assert_eq!(ne.rotated(true), se);
        assert_eq!(se.rotated(true), sw);
        assert_eq!(sw.rotated(true), nw);
        assert_eq!(nw.rotated(true), ne);

        assert_eq!(ne.rotated(false), nw);
    }

    #[test]
    fn test_scarab_diagonals_swap_under_rotation() {
        let slash = OrientationState::scarab(Corner::NorthEast);
        let backslash = OrientationState::scarab(Corner::SouthEast);

        assert_ne!(slash, backslash);
        assert_eq!(slash.rotated(true), backslash);
        assert_eq!(slash.rotated(false), backslash);
        assert_eq!(backslash.rotated(true), slash);
    }

    #[test]
    fn test_scarab_corner_aliases() {
        assert_eq!(
            OrientationState::scarab(Corner::NorthEast),
            OrientationState::scarab(Corner::SouthWest)
        );
        assert_eq!(
            OrientationState::scarab(Corner::SouthEast),
            OrientationState::scarab(Corner::NorthWest)
        );
    }

    #[test]
    fn test_rotation_inverse() {
        let state = OrientationState::pyramid(Corner::SouthWest);
        assert_eq!(state.rotated(true).rotated(false), state);
        assert_eq!(state.rotated(false).rotated(true), state);
    }

    #[test]
    fn test_four_turns_identity() {
        let states = [
            OrientationState::pyramid(Corner::NorthEast),
            OrientationState::scarab(Corner::NorthEast),
            OrientationState::anubis(West),
            OrientationState::pharaoh(),
            OrientationState::sphinx(),
        ];
        for state in states {
            let mut turned = state;
            for _ in 0..4 {
                turned = turned.rotated(true);
            }
            assert_eq!(turned, state);
        }
    }

    #[test]
    fn test_serialization() {
        let state = OrientationState::pyramid(Corner::SouthEast);
        let json = serde_json::to_string(&state).unwrap();
        let back: OrientationState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, back);
    }
}
