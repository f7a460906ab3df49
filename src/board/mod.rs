//! The board: a finite grid of cells, each holding at most one piece.
//!
//! The board owns placement, removal, lookup, and zone-exclusivity
//! checks. It never creates or destroys pieces on its own - the turn
//! controller applies destruction after consulting the beam engine.

pub mod zones;

pub use zones::ExclusiveZones;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{ActionError, Coordinate, Faction, Gamepiece, PieceKind};

/// A rectangular grid of cells with per-faction exclusive zones.
///
/// Dimensions are fixed at construction. Cells outside
/// `[0, rows) x [0, cols)` are never stored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    rows: i16,
    cols: i16,
    cells: FxHashMap<Coordinate, Gamepiece>,
    zones: ExclusiveZones,
}

impl Board {
    /// Create an empty board.
    ///
    /// `exclusive_zones` enables the standard home-file and away-cell
    /// restrictions for the given dimensions.
    #[must_use]
    pub fn new(rows: i16, cols: i16, exclusive_zones: bool) -> Self {
        assert!(rows >= 2 && cols >= 2, "board must be at least 2x2");
        let zones = if exclusive_zones {
            ExclusiveZones::standard(rows, cols)
        } else {
            ExclusiveZones::disabled()
        };
        Self {
            rows,
            cols,
            cells: FxHashMap::default(),
            zones,
        }
    }

    // === Geometry ===

    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> i16 {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub const fn cols(&self) -> i16 {
        self.cols
    }

    /// Largest valid row index.
    #[must_use]
    pub const fn max_row(&self) -> i16 {
        self.rows - 1
    }

    /// Largest valid column index.
    #[must_use]
    pub const fn max_col(&self) -> i16 {
        self.cols - 1
    }

    /// Whether `coord` addresses a cell on the grid.
    #[must_use]
    pub const fn in_bounds(&self, coord: Coordinate) -> bool {
        coord.row >= 0 && coord.row < self.rows && coord.col >= 0 && coord.col < self.cols
    }

    /// Whether `faction` may occupy `coord` under the exclusive-zone
    /// rules. Does not consider occupancy.
    #[must_use]
    pub fn zone_allows(&self, coord: Coordinate, faction: Faction) -> bool {
        self.zones.allows(coord, faction)
    }

    /// The exclusive-zone table.
    #[must_use]
    pub fn zones(&self) -> &ExclusiveZones {
        &self.zones
    }

    // === Cell access ===

    /// The piece at `coord`, if any.
    #[must_use]
    pub fn piece_at(&self, coord: Coordinate) -> Option<&Gamepiece> {
        self.cells.get(&coord)
    }

    /// Mutable access to the piece at `coord`, if any.
    pub fn piece_at_mut(&mut self, coord: Coordinate) -> Option<&mut Gamepiece> {
        self.cells.get_mut(&coord)
    }

    /// Place a piece on an empty, zone-legal cell.
    pub fn place(&mut self, coord: Coordinate, piece: Gamepiece) -> Result<(), ActionError> {
        if !self.in_bounds(coord) {
            return Err(ActionError::OutOfBounds(coord));
        }
        if self.cells.get(&coord).is_some_and(|p| p.alive) {
            return Err(ActionError::OccupiedCell(coord));
        }
        if !self.zone_allows(coord, piece.owner) {
            return Err(ActionError::ZoneViolation(coord));
        }
        self.cells.insert(coord, piece);
        Ok(())
    }

    /// Clear a cell, returning its piece. No-op if already empty.
    pub fn remove(&mut self, coord: Coordinate) -> Option<Gamepiece> {
        self.cells.remove(&coord)
    }

    /// Exchange the contents of two cells.
    ///
    /// Either cell may be empty, so this covers both a plain move and
    /// the Scarab displacement. Legality is the caller's concern.
    pub fn swap(&mut self, a: Coordinate, b: Coordinate) {
        debug_assert!(self.in_bounds(a) && self.in_bounds(b));
        let piece_a = self.cells.remove(&a);
        let piece_b = self.cells.remove(&b);
        if let Some(piece) = piece_a {
            self.cells.insert(b, piece);
        }
        if let Some(piece) = piece_b {
            self.cells.insert(a, piece);
        }
    }

    // === Queries ===

    /// Coordinates of pieces matching the given filters, in row-major
    /// order. `None` filters match everything.
    #[must_use]
    pub fn query(&self, kind: Option<PieceKind>, owner: Option<Faction>) -> Vec<Coordinate> {
        let mut coords: Vec<Coordinate> = self
            .cells
            .iter()
            .filter(|(_, piece)| kind.map_or(true, |k| piece.kind == k))
            .filter(|(_, piece)| owner.map_or(true, |o| piece.owner == o))
            .map(|(&coord, _)| coord)
            .collect();
        coords.sort_unstable();
        coords
    }

    /// Location of a faction's Sphinx.
    #[must_use]
    pub fn sphinx(&self, faction: Faction) -> Option<Coordinate> {
        self.query(Some(PieceKind::Sphinx), Some(faction))
            .into_iter()
            .next()
    }

    /// Location of a faction's Pharaoh.
    #[must_use]
    pub fn pharaoh(&self, faction: Faction) -> Option<Coordinate> {
        self.query(Some(PieceKind::Pharaoh), Some(faction))
            .into_iter()
            .next()
    }

    /// Number of pieces on the board.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.cells.len()
    }

    /// Iterate over occupied cells in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, &Gamepiece)> {
        self.cells.iter().map(|(&coord, piece)| (coord, piece))
    }
}
