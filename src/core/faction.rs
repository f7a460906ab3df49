//! Faction identification and per-faction data storage.
//!
//! ## Faction
//!
//! The two opposing sides. Every piece is owned by exactly one faction,
//! and the turn controller alternates between them.
//!
//! ## FactionMap
//!
//! Per-faction data storage backed by a fixed two-element array.
//! Supports iteration and indexing by `Faction`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two opposing sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    Red,
    Silver,
}

impl Faction {
    /// Both factions, Red first.
    pub const ALL: [Faction; 2] = [Faction::Red, Faction::Silver];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Faction::Red => Faction::Silver,
            Faction::Silver => Faction::Red,
        }
    }

    /// Storage index for this faction (Red = 0, Silver = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Faction::Red => 0,
            Faction::Silver => 1,
        }
    }
}

impl std::fmt::Display for Faction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Faction::Red => write!(f, "Red"),
            Faction::Silver => write!(f, "Silver"),
        }
    }
}

/// Player metadata: a display name and the faction played.
///
/// Immutable once the game starts; the rules only ever consult the
/// faction tag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub faction: Faction,
}

impl Player {
    /// Create a new player.
    #[must_use]
    pub fn new(name: impl Into<String>, faction: Faction) -> Self {
        Self {
            name: name.into(),
            faction,
        }
    }
}

/// Per-faction data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use khet_core::core::{Faction, FactionMap};
///
/// let mut score: FactionMap<u32> = FactionMap::with_value(0);
/// score[Faction::Silver] = 3;
///
/// assert_eq!(score[Faction::Red], 0);
/// assert_eq!(score[Faction::Silver], 3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FactionMap<T> {
    data: [T; 2],
}

impl<T> FactionMap<T> {
    /// Create a new FactionMap with values from a factory function.
    pub fn new(factory: impl Fn(Faction) -> T) -> Self {
        Self {
            data: [factory(Faction::Red), factory(Faction::Silver)],
        }
    }

    /// Create a new FactionMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a faction's data.
    #[must_use]
    pub fn get(&self, faction: Faction) -> &T {
        &self.data[faction.index()]
    }

    /// Get a mutable reference to a faction's data.
    pub fn get_mut(&mut self, faction: Faction) -> &mut T {
        &mut self.data[faction.index()]
    }

    /// Iterate over (Faction, &T) pairs, Red first.
    pub fn iter(&self) -> impl Iterator<Item = (Faction, &T)> {
        Faction::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Faction> for FactionMap<T> {
    type Output = T;

    fn index(&self, faction: Faction) -> &Self::Output {
        self.get(faction)
    }
}

impl<T> IndexMut<Faction> for FactionMap<T> {
    fn index_mut(&mut self, faction: Faction) -> &mut Self::Output {
        self.get_mut(faction)
    }
}
