//! The completion driver: random assignments until every cell resolves.

use cairn_grid::Grid;
use rand::Rng;

use crate::error::GenError;
use crate::place::force_assign;

/// Resolve every remaining undetermined cell.
///
/// Repeatedly commits a uniformly random terrain from a uniformly
/// random undetermined cell's candidates, propagating after each
/// commitment. Each iteration determines at least one cell, so the loop
/// terminates on any finite grid. Returns the number of assignments
/// made (zero if the grid was already complete).
///
/// A contradiction during propagation aborts and surfaces; with the
/// default catalog this cannot happen, because `plains` supports and is
/// supported by every kind.
pub fn complete<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> Result<u64, GenError> {
    let mut assignments = 0;
    while !grid.is_complete() {
        if force_assign(grid, None, None, true, rng)? {
            assignments += 1;
        }
    }
    Ok(assignments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cairn_grid::{default_terrains, Catalog, Terrain};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn completes_every_cell() {
        let catalog = Catalog::new(default_terrains()).unwrap();
        let mut grid = Grid::new(6, 6, catalog).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(11);

        let assignments = complete(&mut grid, &mut rng).unwrap();
        assert!(grid.is_complete());
        assert!(assignments >= 1);
        // Propagation can determine cells for free, so the driver never
        // needs more assignments than there are cells.
        assert!(assignments <= grid.len() as u64);
    }

    #[test]
    fn single_terrain_grid_is_already_complete() {
        // With one kind in the catalog every cell starts determined, so
        // the driver terminates without a single assignment.
        let catalog = Catalog::new(vec![Terrain::new("plains", ["plains"])]).unwrap();
        let mut grid = Grid::new(4, 5, catalog).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        assert_eq!(complete(&mut grid, &mut rng).unwrap(), 0);
        assert!(grid.is_complete());
        for position in grid.positions().collect::<Vec<_>>() {
            assert_eq!(grid.resolved(position).map(Terrain::name), Some("plains"));
        }
    }

    proptest! {
        // The default catalog can never contradict (plains tolerates
        // everything), so completion succeeds whatever the stream says.
        #[test]
        fn completion_succeeds_for_any_seed(seed in any::<u64>()) {
            let catalog = Catalog::new(default_terrains()).unwrap();
            let mut grid = Grid::new(4, 4, catalog).unwrap();
            let mut rng = ChaCha8Rng::seed_from_u64(seed);

            let assignments = complete(&mut grid, &mut rng).unwrap();
            prop_assert!(grid.is_complete());
            prop_assert!((1..=grid.len() as u64).contains(&assignments));
        }
    }

    #[test]
    fn two_free_terrains_need_one_assignment_per_cell() {
        // Kinds that tolerate everything: propagation never determines
        // a cell on its own, so the driver assigns each cell exactly once.
        let catalog = Catalog::new(vec![
            Terrain::new("heath", ["heath", "scrub"]),
            Terrain::new("scrub", ["heath", "scrub"]),
        ])
        .unwrap();
        let mut grid = Grid::new(4, 4, catalog).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        let assignments = complete(&mut grid, &mut rng).unwrap();
        assert_eq!(assignments, grid.len() as u64);
        assert!(grid.is_complete());
    }
}
