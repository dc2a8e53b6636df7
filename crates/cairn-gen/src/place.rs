//! Procedural placement: single assignments, blobs, and staggered walls.
//!
//! Every placement takes the grid by exclusive reference and an explicit
//! RNG handle; there is no ambient randomness anywhere in the crate, so
//! a fixed seed reproduces a map exactly.

use cairn_grid::{Grid, TerrainId};
use cairn_hex::{range, Direction, Hex};
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::error::GenError;
use crate::propagate::{propagate_all, propagate_from};

/// Commit a terrain at a position, resolving unspecified arguments at
/// random.
///
/// - `target: None` picks uniformly among undetermined coordinates;
///   [`GenError::GridComplete`] if there are none.
/// - `terrain: None` picks uniformly from the cell's current candidates.
/// - Returns `Ok(false)` without mutating anything if the resolved
///   target is outside the grid or already determined — callers treat
///   this as "skip", not as fatal.
/// - On success the cell's domain collapses to the single terrain and,
///   when `propagate` is set, pruning ripples out from the coordinate.
pub fn force_assign<R: Rng + ?Sized>(
    grid: &mut Grid,
    target: Option<Hex>,
    terrain: Option<TerrainId>,
    propagate: bool,
    rng: &mut R,
) -> Result<bool, GenError> {
    let position = match target {
        Some(position) => position,
        None => {
            let open: Vec<Hex> = grid.undetermined().collect();
            *open.choose(rng).ok_or(GenError::GridComplete)?
        }
    };
    let Some(cell) = grid.cell(position) else {
        return Ok(false);
    };
    if cell.is_determined() {
        return Ok(false);
    }
    let terrain = match terrain {
        Some(terrain) => terrain,
        None => {
            let options: Vec<TerrainId> = cell.candidates().iter().collect();
            // An undetermined cell always has candidates unless an
            // earlier contradiction was ignored.
            *options
                .choose(rng)
                .ok_or(GenError::Contradiction { at: position })?
        }
    };
    if let Some(cell) = grid.cell_mut(position) {
        cell.commit(terrain);
    }
    if propagate {
        propagate_from(grid, &[position])?;
    }
    Ok(true)
}

/// A uniformly random undetermined coordinate whose domain still admits
/// `terrain`.
///
/// Fails with [`GenError::NoValidPosition`] when no such coordinate
/// exists — either the grid is complete or earlier placements have
/// pruned the terrain everywhere.
pub fn random_valid_position<R: Rng + ?Sized>(
    grid: &Grid,
    terrain: TerrainId,
    rng: &mut R,
) -> Result<Hex, GenError> {
    let eligible: Vec<Hex> = grid
        .undetermined()
        .filter(|&position| {
            grid.cell(position)
                .is_some_and(|cell| cell.candidates().contains(terrain))
        })
        .collect();
    eligible
        .choose(rng)
        .copied()
        .ok_or_else(|| GenError::NoValidPosition {
            terrain: grid.catalog().terrain(terrain).name().to_string(),
        })
}

/// Fill every cell within `radius` hex-distance of `center` with
/// `terrain`.
///
/// The centre is chosen by [`random_valid_position`] when unset. Cells
/// of the disk that fall outside the grid, or are already determined,
/// are silently skipped without aborting the blob. Propagation runs
/// once over the whole grid afterwards rather than per cell.
pub fn place_blob<R: Rng + ?Sized>(
    grid: &mut Grid,
    terrain: TerrainId,
    radius: u32,
    center: Option<Hex>,
    rng: &mut R,
) -> Result<(), GenError> {
    let center = match center {
        Some(center) => center,
        None => random_valid_position(grid, terrain, rng)?,
    };
    for position in range(center, radius as i32) {
        force_assign(grid, Some(position), Some(terrain), false, rng)?;
    }
    propagate_all(grid)
}

/// Parameters for one [`place_wall`] run.
#[derive(Clone, Debug)]
pub struct WallParams {
    /// Steps each branch walks beyond its starting cell.
    pub steps: u32,
    /// Heading of the trunk (branches may turn off it).
    pub direction: Direction,
    /// Chance after each successful step to fork a side branch; halves
    /// with every fork, so growth decays. Clamped to `[0, 1]`.
    pub spawn_chance: f64,
    /// Chance that a forked branch turns 60° off its parent's heading.
    /// Clamped to `[0, 1]`.
    pub turn_chance: f64,
}

impl Default for WallParams {
    fn default() -> Self {
        Self {
            steps: 5,
            direction: Direction::NorthEast,
            spawn_chance: 0.5,
            turn_chance: 1.0,
        }
    }
}

/// One pending branch of a staggered wall.
#[derive(Clone, Debug)]
struct Branch {
    start: Hex,
    direction: Direction,
    spawn_chance: f64,
}

/// Clamp a probability to `[0, 1]`; `clamp` passes NaN through, which
/// `Rng::random_bool` rejects, so NaN collapses to "never".
fn chance(p: f64) -> f64 {
    if p.is_nan() {
        0.0
    } else {
        p.clamp(0.0, 1.0)
    }
}

/// Lay a branching random-walk wall of `terrain` across the grid.
///
/// The walk is driven by an explicit stack of pending branches rather
/// than recursion, so stack depth is bounded for large step counts and
/// branch order is a pure function of the seed. Each branch commits its
/// start cell (abandoning the branch if that cell is unavailable), then
/// walks `steps` cells along its heading, abandoning the branch — but
/// not its ancestors — at the first unavailable cell.
///
/// Pruning ripples out after every commitment, so a terrain whose
/// propagation determines neighbouring cells blocks its own walk: the
/// next step lands on a determined cell and the branch is abandoned.
///
/// After every successful step the branch may fork: the child starts
/// one hex to the side (heading rotated ±1 or ±2, never straight ahead
/// or back), keeps or turns the heading by 60° per `turn_chance`, and
/// inherits the halved spawn chance. A final whole-grid pass runs once
/// the wall is laid.
pub fn place_wall<R: Rng + ?Sized>(
    grid: &mut Grid,
    terrain: TerrainId,
    params: &WallParams,
    start: Option<Hex>,
    rng: &mut R,
) -> Result<(), GenError> {
    let start = match start {
        Some(start) => start,
        None => random_valid_position(grid, terrain, rng)?,
    };
    let turn_chance = chance(params.turn_chance);
    let mut branches = vec![Branch {
        start,
        direction: params.direction,
        spawn_chance: chance(params.spawn_chance),
    }];

    while let Some(branch) = branches.pop() {
        if !force_assign(grid, Some(branch.start), Some(terrain), true, rng)? {
            continue;
        }
        let mut position = branch.start;
        let mut spawn_chance = branch.spawn_chance;
        for _ in 0..params.steps {
            position = position.neighbour(branch.direction);
            if !force_assign(grid, Some(position), Some(terrain), true, rng)? {
                break;
            }
            if rng.random_bool(spawn_chance) {
                spawn_chance /= 2.0;
                let direction = if rng.random_bool(turn_chance) {
                    let turn = if rng.random_bool(0.5) { 1 } else { -1 };
                    branch.direction.rotated(turn)
                } else {
                    branch.direction
                };
                let side = [1, 2, -2, -1][rng.random_range(0..4)];
                branches.push(Branch {
                    start: position.neighbour(branch.direction.rotated(side)),
                    direction,
                    spawn_chance,
                });
            }
        }
    }
    propagate_all(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cairn_grid::{default_terrains, Catalog};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn default_grid(rows: u32, cols: u32) -> Grid {
        let catalog = Catalog::new(default_terrains()).unwrap();
        Grid::new(rows, cols, catalog).unwrap()
    }

    fn rng(seed: u64) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(seed)
    }

    #[test]
    fn force_assign_outside_grid_is_a_no_op() {
        let mut grid = default_grid(3, 3);
        let town = grid.catalog().id("town").unwrap();
        let before = grid.clone();
        let applied = force_assign(
            &mut grid,
            Some(Hex::new(40, 40)),
            Some(town),
            true,
            &mut rng(0),
        )
        .unwrap();
        assert!(!applied);
        let unchanged = grid
            .iter()
            .zip(before.iter())
            .all(|((_, a), (_, b))| a.candidates() == b.candidates());
        assert!(unchanged);
    }

    #[test]
    fn force_assign_refuses_determined_cells() {
        let mut grid = default_grid(3, 3);
        let water = grid.catalog().id("water").unwrap();
        let town = grid.catalog().id("town").unwrap();
        let center = Hex::new(0, 0);

        assert!(force_assign(&mut grid, Some(center), Some(water), true, &mut rng(0)).unwrap());
        let applied =
            force_assign(&mut grid, Some(center), Some(town), true, &mut rng(0)).unwrap();
        assert!(!applied);
        assert_eq!(grid.cell(center).unwrap().resolved(), Some(water));
    }

    #[test]
    fn force_assign_random_terrain_comes_from_candidates() {
        let mut grid = default_grid(3, 3);
        let water = grid.catalog().id("water").unwrap();
        let plains = grid.catalog().id("plains").unwrap();
        let center = Hex::new(0, 0);
        let east = Hex::new(1, 0);

        force_assign(&mut grid, Some(center), Some(water), true, &mut rng(1)).unwrap();
        // East neighbour narrowed to {plains, water}; a random pick must
        // land inside that domain.
        force_assign(&mut grid, Some(east), None, true, &mut rng(1)).unwrap();
        let picked = grid.cell(east).unwrap().resolved().unwrap();
        assert!(picked == plains || picked == water);
    }

    #[test]
    fn random_valid_position_respects_domains() {
        let mut grid = default_grid(3, 3);
        let town = grid.catalog().id("town").unwrap();
        let center = Hex::new(0, 0);

        force_assign(&mut grid, Some(center), Some(town), true, &mut rng(2)).unwrap();
        // All six neighbours collapsed to plains, so no eligible cell
        // for another town remains adjacent; the chosen position must
        // still admit town.
        let position = random_valid_position(&grid, town, &mut rng(2)).unwrap();
        assert!(grid.cell(position).unwrap().candidates().contains(town));
        assert!(center.distance(position) >= 2);
    }

    #[test]
    fn random_valid_position_fails_when_pruned_everywhere() {
        let catalog = Catalog::new(vec![
            cairn_grid::Terrain::new("fire", ["fire"]),
            cairn_grid::Terrain::new("ice", ["ice"]),
        ])
        .unwrap();
        let mut grid = Grid::new(1, 2, catalog).unwrap();
        let fire = grid.catalog().id("fire").unwrap();
        let ice = grid.catalog().id("ice").unwrap();
        let positions: Vec<Hex> = grid.positions().collect();

        force_assign(&mut grid, Some(positions[0]), Some(fire), true, &mut rng(3)).unwrap();
        // The surviving cell narrowed to {fire}; ice has nowhere to go.
        let err = random_valid_position(&grid, ice, &mut rng(3)).unwrap_err();
        assert_eq!(
            err,
            GenError::NoValidPosition {
                terrain: "ice".to_string()
            }
        );
    }

    #[test]
    fn zero_radius_blob_equals_single_assignment() {
        let center = Hex::new(0, 0);
        let mut blob_grid = default_grid(3, 3);
        let water = blob_grid.catalog().id("water").unwrap();
        let mut single_grid = blob_grid.clone();

        place_blob(&mut blob_grid, water, 0, Some(center), &mut rng(4)).unwrap();
        force_assign(&mut single_grid, Some(center), Some(water), true, &mut rng(4)).unwrap();

        let a: Vec<_> = blob_grid.iter().map(|(_, c)| c.candidates()).collect();
        let b: Vec<_> = single_grid.iter().map(|(_, c)| c.candidates()).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn blob_fills_disk_and_skips_overhang() {
        let mut grid = default_grid(5, 5);
        let water = grid.catalog().id("water").unwrap();
        // Centre near the edge so part of the disk overhangs the grid.
        let center = Hex::new(2, -2);
        assert!(grid.contains(center));
        place_blob(&mut grid, water, 1, Some(center), &mut rng(5)).unwrap();

        let mut filled = 0;
        for position in range(center, 1) {
            if let Some(cell) = grid.cell(position) {
                assert_eq!(cell.resolved(), Some(water));
                filled += 1;
            }
        }
        assert!(filled > 1, "some of the disk must land in-grid");
        assert!(filled < 7, "overhanging cells are skipped, not placed");
    }

    #[test]
    fn wall_without_spawning_is_one_straight_line() {
        let mut grid = default_grid(9, 9);
        let mountains = grid.catalog().id("mountains").unwrap();
        let params = WallParams {
            steps: 3,
            direction: Direction::East,
            spawn_chance: 0.0,
            turn_chance: 1.0,
        };
        let start = Hex::new(-2, 0);
        place_wall(&mut grid, mountains, &params, Some(start), &mut rng(6)).unwrap();

        let determined: Vec<Hex> = grid
            .iter()
            .filter(|(_, cell)| cell.is_determined())
            .map(|(position, _)| position)
            .collect();
        let expected: Vec<Hex> = (0..=3).map(|i| start + Direction::East.offset() * i).collect();
        assert_eq!(determined.len(), params.steps as usize + 1);
        for position in expected {
            assert_eq!(grid.cell(position).unwrap().resolved(), Some(mountains));
        }
    }

    #[test]
    fn wall_of_towns_stops_at_its_own_fallout() {
        // Committing a town collapses its neighbours to plains, so the
        // walk's next step lands on a determined cell and the branch is
        // abandoned after a single town.
        let mut grid = default_grid(9, 9);
        let town = grid.catalog().id("town").unwrap();
        let plains = grid.catalog().id("plains").unwrap();
        let params = WallParams {
            steps: 3,
            direction: Direction::East,
            spawn_chance: 0.0,
            turn_chance: 1.0,
        };
        let start = Hex::new(-2, 0);
        place_wall(&mut grid, town, &params, Some(start), &mut rng(8)).unwrap();

        assert_eq!(grid.cell(start).unwrap().resolved(), Some(town));
        let towns = grid
            .iter()
            .filter(|(_, cell)| cell.resolved() == Some(town))
            .count();
        assert_eq!(towns, 1);
        for nb in grid.neighbours(start) {
            assert_eq!(grid.cell(nb).unwrap().resolved(), Some(plains));
        }
    }

    #[test]
    fn nan_chances_never_fork_or_turn() {
        let mut grid = default_grid(9, 9);
        let mountains = grid.catalog().id("mountains").unwrap();
        let params = WallParams {
            steps: 3,
            direction: Direction::East,
            spawn_chance: f64::NAN,
            turn_chance: f64::NAN,
        };
        let start = Hex::new(-2, 0);
        place_wall(&mut grid, mountains, &params, Some(start), &mut rng(9)).unwrap();

        let determined = grid.iter().filter(|(_, c)| c.is_determined()).count();
        assert_eq!(determined, params.steps as usize + 1);
    }

    #[test]
    fn wall_branch_abandons_at_determined_cells_without_failing() {
        let mut grid = default_grid(9, 9);
        let mountains = grid.catalog().id("mountains").unwrap();
        let water = grid.catalog().id("water").unwrap();
        // A committed cell two steps ahead cuts the walk short.
        let blocker = Hex::new(0, 0);
        force_assign(&mut grid, Some(blocker), Some(water), false, &mut rng(7)).unwrap();

        let params = WallParams {
            steps: 5,
            direction: Direction::East,
            spawn_chance: 0.0,
            turn_chance: 0.0,
        };
        place_wall(&mut grid, mountains, &params, Some(Hex::new(-2, 0)), &mut rng(7)).unwrap();

        assert_eq!(grid.cell(blocker).unwrap().resolved(), Some(water));
        assert_eq!(
            grid.cell(Hex::new(-1, 0)).unwrap().resolved(),
            Some(mountains)
        );
        // Nothing beyond the blocker was placed.
        assert!(grid.cell(Hex::new(1, 0)).unwrap().resolved().is_none());
    }
}
