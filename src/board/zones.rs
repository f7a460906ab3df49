//! Exclusive zones: cells restricted to one faction.
//!
//! Each faction owns its home file plus two cells on the far side of
//! the board next to the opponent's home file. Only that faction's
//! pieces may occupy them, which prevents fortress positions in the
//! opponent's corner.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{Coordinate, Faction, FactionMap};

/// The per-faction sets of reserved cells.
///
/// A cell reserved for one faction rejects the other faction's pieces;
/// unreserved cells accept anyone.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExclusiveZones {
    reserved: Option<FactionMap<FxHashSet<Coordinate>>>,
}

impl ExclusiveZones {
    /// No reserved cells anywhere (zones disabled).
    #[must_use]
    pub fn disabled() -> Self {
        Self { reserved: None }
    }

    /// The standard zones for a board of the given dimensions:
    /// Red reserves column 0 and the two cells of the second-to-last
    /// column on the top and bottom rows; Silver mirrors both.
    #[must_use]
    pub fn standard(rows: i16, cols: i16) -> Self {
        let max_row = rows - 1;
        let max_col = cols - 1;

        let reserved = FactionMap::new(|faction| {
            let (home_col, away_col) = match faction {
                Faction::Red => (0, max_col - 1),
                Faction::Silver => (max_col, 1),
            };
            let mut cells: FxHashSet<Coordinate> =
                (0..rows).map(|row| Coordinate::new(row, home_col)).collect();
            cells.insert(Coordinate::new(0, away_col));
            cells.insert(Coordinate::new(max_row, away_col));
            cells
        });

        Self {
            reserved: Some(reserved),
        }
    }

    /// Whether zone checking is active.
    #[must_use]
    pub fn enabled(&self) -> bool {
        self.reserved.is_some()
    }

    /// Whether `faction` may occupy `coord`.
    #[must_use]
    pub fn allows(&self, coord: Coordinate, faction: Faction) -> bool {
        match &self.reserved {
            Some(reserved) => !reserved[faction.opponent()].contains(&coord),
            None => true,
        }
    }

    /// The cells reserved for `faction`, unordered.
    pub fn reserved_for(&self, faction: Faction) -> impl Iterator<Item = Coordinate> + '_ {
        self.reserved
            .iter()
            .flat_map(move |reserved| reserved[faction].iter().copied())
    }
}
