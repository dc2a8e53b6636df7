//! One map location's candidate-terrain domain.

use crate::terrain::{TerrainId, TerrainSet};

/// A single grid location and the terrains it could still become.
///
/// A cell's domain moves in one direction only: it starts as the full
/// catalog, shrinks under [`narrow`](Cell::narrow) as the solver prunes
/// unsupported candidates, and collapses to a singleton under
/// [`commit`](Cell::commit) when a placement forces a kind. The cell is
/// *determined* exactly when one candidate remains.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    candidates: TerrainSet,
}

impl Cell {
    /// Create a cell with the given starting domain.
    pub fn new(candidates: TerrainSet) -> Cell {
        Cell { candidates }
    }

    /// The current candidate domain.
    pub fn candidates(&self) -> TerrainSet {
        self.candidates
    }

    /// Whether exactly one candidate remains.
    pub fn is_determined(&self) -> bool {
        self.candidates.len() == 1
    }

    /// The resolved terrain, if the cell is determined.
    pub fn resolved(&self) -> Option<TerrainId> {
        self.candidates.single()
    }

    /// Intersect the domain with `keep`, returning whether it shrank.
    ///
    /// Narrowing is the only mutation the solver performs; because it
    /// intersects, the domain can never regain a candidate. The caller
    /// is responsible for treating an emptied domain as a contradiction.
    pub fn narrow(&mut self, keep: TerrainSet) -> bool {
        let next = self.candidates.intersection(keep);
        let changed = next != self.candidates;
        self.candidates = next;
        changed
    }

    /// Force the domain to the singleton `{terrain}`.
    ///
    /// This is the one deliberate exception to narrow-only mutation,
    /// used when a seed feature or the completion driver commits a kind
    /// regardless of the current domain.
    pub fn commit(&mut self, terrain: TerrainId) {
        let mut single = TerrainSet::empty();
        single.insert(terrain);
        self.candidates = single;
    }
}
