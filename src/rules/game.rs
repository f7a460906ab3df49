//! The turn controller: validates actions, fires the laser, applies
//! destruction, and detects the win.
//!
//! A turn is atomic: `submit_action` validates the requested action,
//! mutates the board, fires the acting side's laser, removes any
//! destroyed piece, and either ends the game or hands control to the
//! other faction. A rejected action leaves every part of the state
//! untouched and does not consume the turn.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::Board;
use crate::core::{
    ActionError, Coordinate, Direction, Faction, FactionMap, GameAction, Gamepiece,
    OrientationState, PieceKind, Player,
};
use crate::laser::{fire, BeamOutcome, BeamTrace, StrikeResult};

use super::layout::{build_board, classic, sphinx_facings, Layout, SetupError};

/// Where the game stands between turns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the given faction's action.
    AwaitingAction(Faction),
    /// The given faction has won.
    GameOver(Faction),
}

/// A piece removed from play by the beam.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestroyedPiece {
    pub coord: Coordinate,
    pub kind: PieceKind,
    pub owner: Faction,
}

/// What one accepted action produced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    /// The beam computed after the action was applied.
    pub beam: BeamTrace,
    /// The piece the beam destroyed, if any.
    pub destroyed: Option<DestroyedPiece>,
    /// The phase the game moved to.
    pub phase: GamePhase,
}

/// Read-only projection of the game for rendering and transport.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    pub rows: i16,
    pub cols: i16,
    /// Occupied cells in row-major order.
    pub pieces: Vec<(Coordinate, Gamepiece)>,
    pub laser_facing: FactionMap<Direction>,
    pub phase: GamePhase,
    /// Path of the most recent beam, if a turn has been played.
    pub last_beam: Option<BeamTrace>,
}

/// A single game: board, players, laser facings, and turn state.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    players: FactionMap<Player>,
    laser_facing: FactionMap<Direction>,
    phase: GamePhase,
    last_beam: Option<BeamTrace>,
}

impl Game {
    /// Create a game from an explicit layout.
    ///
    /// Silver always takes the first turn.
    pub fn new(
        rows: i16,
        cols: i16,
        exclusive_zones: bool,
        layout: &Layout,
    ) -> Result<Self, SetupError> {
        let board = build_board(rows, cols, exclusive_zones, layout)?;
        Ok(Self {
            board,
            players: FactionMap::new(|faction| Player::new(faction.to_string(), faction)),
            laser_facing: layout.laser_facing,
            phase: GamePhase::AwaitingAction(Faction::Silver),
            last_beam: None,
        })
    }

    /// The standard opening on the default 8x10 board with exclusive
    /// zones enabled.
    #[must_use]
    pub fn classic() -> Self {
        Self::new(8, 10, true, &classic()).expect("classic layout is valid")
    }

    /// Replace the default player metadata.
    #[must_use]
    pub fn with_players(mut self, players: FactionMap<Player>) -> Self {
        self.players = players;
        self
    }

    // === Read-only state ===

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// The faction to act, if the game is still running.
    #[must_use]
    pub fn current_player(&self) -> Option<Faction> {
        match self.phase {
            GamePhase::AwaitingAction(faction) => Some(faction),
            GamePhase::GameOver(_) => None,
        }
    }

    /// The winner, once the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<Faction> {
        match self.phase {
            GamePhase::GameOver(faction) => Some(faction),
            GamePhase::AwaitingAction(_) => None,
        }
    }

    /// Player metadata for a faction.
    #[must_use]
    pub fn player(&self, faction: Faction) -> &Player {
        &self.players[faction]
    }

    /// The direction a faction's laser currently fires.
    #[must_use]
    pub fn laser_facing(&self, faction: Faction) -> Direction {
        self.laser_facing[faction]
    }

    /// Snapshot for rendering/transport collaborators.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let mut pieces: Vec<(Coordinate, Gamepiece)> =
            self.board.iter().map(|(c, p)| (c, *p)).collect();
        pieces.sort_unstable_by_key(|(c, _)| *c);
        Snapshot {
            rows: self.board.rows(),
            cols: self.board.cols(),
            pieces,
            laser_facing: self.laser_facing,
            phase: self.phase,
            last_beam: self.last_beam.clone(),
        }
    }

    // === Legality queries ===

    /// Destinations the piece at `coord` may legally move to.
    ///
    /// Pure query; empty for vacant cells and immovable pieces.
    #[must_use]
    pub fn legal_moves(&self, coord: Coordinate) -> Vec<Coordinate> {
        let Some(piece) = self.board.piece_at(coord) else {
            return Vec::new();
        };
        let piece = *piece;
        Direction::ALL
            .into_iter()
            .filter(|&direction| self.validate_move(coord, piece, direction).is_ok())
            .map(|direction| coord.step(direction))
            .collect()
    }

    /// Orientation states reachable by one legal quarter turn of the
    /// piece at `coord`.
    ///
    /// Pure query; empty for vacant cells and unrotatable pieces.
    #[must_use]
    pub fn legal_rotations(&self, coord: Coordinate) -> Vec<OrientationState> {
        let Some(piece) = self.board.piece_at(coord) else {
            return Vec::new();
        };
        let piece = *piece;
        let mut states = Vec::new();
        for clockwise in [true, false] {
            if self.validate_rotation(coord, piece, clockwise).is_ok() {
                let state = piece.orientation.rotated(clockwise);
                if !states.contains(&state) {
                    states.push(state);
                }
            }
        }
        states
    }

    // === The mutating entry point ===

    /// Submit one action for `actor`.
    ///
    /// On success the action has been applied, the actor's laser has
    /// fired, destruction has been resolved, and the phase has
    /// advanced. On error nothing changed.
    pub fn submit_action(
        &mut self,
        actor: Faction,
        action: GameAction,
    ) -> Result<TurnOutcome, ActionError> {
        match self.phase {
            GamePhase::GameOver(_) => return Err(ActionError::GameOver),
            GamePhase::AwaitingAction(current) => {
                if current != actor {
                    return Err(ActionError::NotYourTurn(actor));
                }
            }
        }

        let piece = *self.owned_piece(action.target(), actor)?;
        debug!(%actor, ?action, "applying action");

        // Validate fully, then mutate: a rejected action must leave
        // the state untouched.
        match action {
            GameAction::Move { from, direction } => {
                self.validate_move(from, piece, direction)?;
                self.board.swap(from, from.step(direction));
            }
            GameAction::Rotate { at, clockwise } => {
                self.validate_rotation(at, piece, clockwise)?;
                if piece.kind == PieceKind::Sphinx {
                    let facing = self.laser_facing[actor].rotated(clockwise);
                    self.laser_facing[actor] = facing;
                } else {
                    self.board
                        .piece_at_mut(at)
                        .expect("validated piece present")
                        .rotate(clockwise);
                }
            }
        }

        let beam = fire(&self.board, self.laser_facing[actor]);
        let destroyed = self.apply_outcome(&beam.outcome);

        if let Some(hit) = &destroyed {
            if hit.kind == PieceKind::Pharaoh {
                // Losing your own Pharaoh to your own beam still loses.
                self.phase = GamePhase::GameOver(hit.owner.opponent());
            }
        }
        if let GamePhase::AwaitingAction(_) = self.phase {
            self.phase = GamePhase::AwaitingAction(actor.opponent());
        }

        self.last_beam = Some(beam.clone());
        Ok(TurnOutcome {
            beam,
            destroyed,
            phase: self.phase,
        })
    }

    // === Internals ===

    /// The live piece at `coord` owned by `actor`.
    fn owned_piece(&self, coord: Coordinate, actor: Faction) -> Result<&Gamepiece, ActionError> {
        if !self.board.in_bounds(coord) {
            return Err(ActionError::OutOfBounds(coord));
        }
        let piece = self
            .board
            .piece_at(coord)
            .ok_or(ActionError::EmptyCell(coord))?;
        if !piece.alive {
            return Err(ActionError::PieceDead(coord));
        }
        if piece.owner != actor {
            return Err(ActionError::NotOwner(coord));
        }
        Ok(piece)
    }

    /// Check a one-cell move of `piece` from `from`, including the
    /// Scarab displacement exception.
    fn validate_move(
        &self,
        from: Coordinate,
        piece: Gamepiece,
        direction: Direction,
    ) -> Result<(), ActionError> {
        if !piece.can_move() {
            return Err(ActionError::CapabilityDenied(from));
        }
        let dest = from.step(direction);
        if !self.board.in_bounds(dest) {
            return Err(ActionError::OutOfBounds(dest));
        }
        if !self.board.zone_allows(dest, piece.owner) {
            return Err(ActionError::ZoneViolation(dest));
        }
        match self.board.piece_at(dest) {
            None => Ok(()),
            Some(occupant) => {
                // Only a Scarab may enter an occupied cell, and only by
                // displacing a mirror-less-or-single-mirror piece; the
                // occupant lands on the mover's origin cell.
                if piece.kind != PieceKind::Scarab {
                    return Err(ActionError::OccupiedCell(dest));
                }
                if !matches!(occupant.kind, PieceKind::Pyramid | PieceKind::Anubis) {
                    return Err(ActionError::OccupiedCell(dest));
                }
                if !self.board.zone_allows(from, occupant.owner) {
                    return Err(ActionError::ZoneViolation(from));
                }
                Ok(())
            }
        }
    }

    /// Check a quarter turn of `piece` at `coord`.
    ///
    /// A Sphinx turn is legal only if the laser still points onto the
    /// board afterward, which restricts each Sphinx to two facings.
    fn validate_rotation(
        &self,
        coord: Coordinate,
        piece: Gamepiece,
        clockwise: bool,
    ) -> Result<(), ActionError> {
        if !piece.can_rotate() {
            return Err(ActionError::CapabilityDenied(coord));
        }
        if piece.kind == PieceKind::Sphinx {
            let facing = self.laser_facing[piece.owner].rotated(clockwise);
            if !sphinx_facings(piece.owner).contains(&facing) {
                return Err(ActionError::IllegalSphinxOrientation);
            }
        }
        Ok(())
    }

    /// Remove a destroyed piece from the board, if the beam destroyed
    /// one.
    fn apply_outcome(&mut self, outcome: &BeamOutcome) -> Option<DestroyedPiece> {
        let BeamOutcome::StruckPiece(coord, StrikeResult::Destroyed) = outcome else {
            return None;
        };
        let mut piece = self
            .board
            .remove(*coord)
            .expect("beam struck an occupied cell");
        piece.alive = false;
        debug!(at = %coord, kind = %piece.kind, owner = %piece.owner, "piece destroyed");
        Some(DestroyedPiece {
            coord: *coord,
            kind: piece.kind,
            owner: piece.owner,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Corner;
    use crate::rules::layout::Placement;

    fn sparse_layout() -> Layout {
        // Two Sphinxes, two Pharaohs, one Red pyramid mid-board.
        Layout {
            placements: vec![
                Placement::new(
                    Coordinate::new(0, 0),
                    PieceKind::Sphinx,
                    Faction::Red,
                    OrientationState::sphinx(),
                ),
                Placement::new(
                    Coordinate::new(7, 9),
                    PieceKind::Sphinx,
                    Faction::Silver,
                    OrientationState::sphinx(),
                ),
                Placement::new(
                    Coordinate::new(0, 5),
                    PieceKind::Pharaoh,
                    Faction::Red,
                    OrientationState::pharaoh(),
                ),
                Placement::new(
                    Coordinate::new(7, 4),
                    PieceKind::Pharaoh,
                    Faction::Silver,
                    OrientationState::pharaoh(),
                ),
                Placement::new(
                    Coordinate::new(4, 4),
                    PieceKind::Pyramid,
                    Faction::Red,
                    OrientationState::pyramid(Corner::NorthEast),
                ),
            ],
            laser_facing: FactionMap::new(|f| match f {
                Faction::Red => Direction::South,
                Faction::Silver => Direction::North,
            }),
        }
    }

    #[test]
    fn test_silver_moves_first() {
        let game = Game::classic();
        assert_eq!(game.current_player(), Some(Faction::Silver));
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn test_out_of_turn_rejected() {
        let mut game = Game::new(8, 10, true, &sparse_layout()).unwrap();
        let err = game
            .submit_action(
                Faction::Red,
                GameAction::Move {
                    from: Coordinate::new(4, 4),
                    direction: Direction::East,
                },
            )
            .unwrap_err();
        assert_eq!(err, ActionError::NotYourTurn(Faction::Red));
    }

    #[test]
    fn test_move_applies_and_alternates() {
        let mut game = Game::new(8, 10, true, &sparse_layout()).unwrap();

        let outcome = game
            .submit_action(
                Faction::Silver,
                GameAction::Move {
                    from: Coordinate::new(7, 4),
                    direction: Direction::North,
                },
            )
            .unwrap();

        assert_eq!(outcome.phase, GamePhase::AwaitingAction(Faction::Red));
        assert!(outcome.destroyed.is_none());
        assert!(game.board().piece_at(Coordinate::new(7, 4)).is_none());
        assert_eq!(
            game.board().piece_at(Coordinate::new(6, 4)).unwrap().kind,
            PieceKind::Pharaoh
        );
    }

    #[test]
    fn test_rejected_action_preserves_turn() {
        let mut game = Game::new(8, 10, true, &sparse_layout()).unwrap();

        let err = game
            .submit_action(
                Faction::Silver,
                GameAction::Move {
                    from: Coordinate::new(7, 9),
                    direction: Direction::North,
                },
            )
            .unwrap_err();

        assert_eq!(err, ActionError::CapabilityDenied(Coordinate::new(7, 9)));
        assert_eq!(game.current_player(), Some(Faction::Silver));
        assert!(game.snapshot().last_beam.is_none());
    }

    #[test]
    fn test_rotate_pharaoh_denied() {
        let mut game = Game::new(8, 10, true, &sparse_layout()).unwrap();
        let err = game
            .submit_action(
                Faction::Silver,
                GameAction::Rotate {
                    at: Coordinate::new(7, 4),
                    clockwise: true,
                },
            )
            .unwrap_err();
        assert_eq!(err, ActionError::CapabilityDenied(Coordinate::new(7, 4)));
    }

    #[test]
    fn test_sphinx_rotation_constrained() {
        // Keep row 7 clear so the west-facing beam exits harmlessly.
        let mut layout = sparse_layout();
        for p in &mut layout.placements {
            if p.kind == PieceKind::Pharaoh && p.owner == Faction::Silver {
                p.coord = Coordinate::new(6, 4);
            }
        }
        let mut game = Game::new(8, 10, true, &layout).unwrap();

        // Silver faces North; clockwise would aim East, off the board
        // from (7, 9).
        let err = game
            .submit_action(
                Faction::Silver,
                GameAction::Rotate {
                    at: Coordinate::new(7, 9),
                    clockwise: true,
                },
            )
            .unwrap_err();
        assert_eq!(err, ActionError::IllegalSphinxOrientation);

        // Counterclockwise aims West: legal, and the facing updates.
        game.submit_action(
            Faction::Silver,
            GameAction::Rotate {
                at: Coordinate::new(7, 9),
                clockwise: false,
            },
        )
        .unwrap();
        assert_eq!(game.laser_facing(Faction::Silver), Direction::West);

        // Red plays so Silver can rotate back: the Sphinx cycles
        // between exactly its two inward facings.
        game.submit_action(
            Faction::Red,
            GameAction::Move {
                from: Coordinate::new(4, 4),
                direction: Direction::East,
            },
        )
        .unwrap();
        game.submit_action(
            Faction::Silver,
            GameAction::Rotate {
                at: Coordinate::new(7, 9),
                clockwise: true,
            },
        )
        .unwrap();
        assert_eq!(game.laser_facing(Faction::Silver), Direction::North);
    }

    #[test]
    fn test_open_beam_exits_without_destruction() {
        let mut game = Game::new(8, 10, true, &sparse_layout()).unwrap();

        let outcome = game
            .submit_action(
                Faction::Silver,
                GameAction::Move {
                    from: Coordinate::new(7, 4),
                    direction: Direction::West,
                },
            )
            .unwrap();

        // Silver's beam runs up the empty home file and leaves.
        assert!(matches!(outcome.beam.outcome, BeamOutcome::ExitedBoard(_)));
        assert!(outcome.destroyed.is_none());
    }

    #[test]
    fn test_pharaoh_destruction_wins() {
        // A Silver mirror on (0, 9) bends the north beam west along
        // row 0 and into the Red Pharaoh's east face.
        let mut layout = sparse_layout();
        layout.placements.push(Placement::new(
            Coordinate::new(0, 9),
            PieceKind::Pyramid,
            Faction::Silver,
            OrientationState::pyramid(Corner::SouthWest),
        ));
        let mut game = Game::new(8, 10, true, &layout).unwrap();

        let outcome = game
            .submit_action(
                Faction::Silver,
                GameAction::Move {
                    from: Coordinate::new(7, 4),
                    direction: Direction::West,
                },
            )
            .unwrap();

        assert_eq!(
            outcome.destroyed,
            Some(DestroyedPiece {
                coord: Coordinate::new(0, 5),
                kind: PieceKind::Pharaoh,
                owner: Faction::Red,
            })
        );
        assert_eq!(outcome.phase, GamePhase::GameOver(Faction::Silver));
        assert_eq!(game.winner(), Some(Faction::Silver));
        assert!(game.board().piece_at(Coordinate::new(0, 5)).is_none());
    }

    #[test]
    fn test_own_pharaoh_hit_loses() {
        // The same mirror geometry, but Red steers its own beam into
        // its own Pharaoh: Silver wins.
        let mut layout = sparse_layout();
        // "\" at (7,0) turns Red's south beam east along row 7; "/" at
        // (7,5) turns it north up file 5 into Red's own Pharaoh.
        layout.placements.push(Placement::new(
            Coordinate::new(7, 0),
            PieceKind::Scarab,
            Faction::Red,
            OrientationState::scarab(Corner::SouthEast),
        ));
        layout.placements.push(Placement::new(
            Coordinate::new(7, 5),
            PieceKind::Scarab,
            Faction::Red,
            OrientationState::scarab(Corner::NorthEast),
        ));
        let mut game = Game::new(8, 10, true, &layout).unwrap();

        // Silver plays a quiet move first.
        game.submit_action(
            Faction::Silver,
            GameAction::Move {
                from: Coordinate::new(7, 4),
                direction: Direction::North,
            },
        )
        .unwrap();

        // Red rotates a far-away piece; its own beam does the damage.
        let outcome = game
            .submit_action(
                Faction::Red,
                GameAction::Rotate {
                    at: Coordinate::new(4, 4),
                    clockwise: true,
                },
            )
            .unwrap();

        assert_eq!(
            outcome.destroyed,
            Some(DestroyedPiece {
                coord: Coordinate::new(0, 5),
                kind: PieceKind::Pharaoh,
                owner: Faction::Red,
            })
        );
        assert_eq!(game.winner(), Some(Faction::Silver));
    }

    #[test]
    fn test_game_over_blocks_actions() {
        let mut game = Game::new(8, 10, true, &sparse_layout()).unwrap();
        game.phase = GamePhase::GameOver(Faction::Silver);

        let err = game
            .submit_action(
                Faction::Silver,
                GameAction::Move {
                    from: Coordinate::new(7, 4),
                    direction: Direction::North,
                },
            )
            .unwrap_err();
        assert_eq!(err, ActionError::GameOver);
    }

    #[test]
    fn test_legal_moves_for_blocked_piece() {
        let game = Game::new(8, 10, true, &sparse_layout()).unwrap();

        // The Red pyramid in open space moves any of four ways.
        assert_eq!(game.legal_moves(Coordinate::new(4, 4)).len(), 4);
        // The Sphinx never moves.
        assert!(game.legal_moves(Coordinate::new(0, 0)).is_empty());
        // Empty cells have no moves.
        assert!(game.legal_moves(Coordinate::new(2, 2)).is_empty());
    }

    #[test]
    fn test_legal_rotations() {
        let game = Game::new(8, 10, true, &sparse_layout()).unwrap();

        // Pyramid: two distinct quarter-turn results.
        assert_eq!(game.legal_rotations(Coordinate::new(4, 4)).len(), 2);
        // Pharaoh: none.
        assert!(game.legal_rotations(Coordinate::new(7, 4)).is_empty());
        // Sphinx: exactly one legal turn, to the other inward facing.
        assert_eq!(game.legal_rotations(Coordinate::new(7, 9)).len(), 1);
    }

    #[test]
    fn test_snapshot_round_trips() {
        let game = Game::classic();
        let snapshot = game.snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.pieces, snapshot.pieces);
        assert_eq!(back.phase, snapshot.phase);
    }
}
