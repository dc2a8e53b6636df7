//! The end-to-end map pipeline: seed features, then completion.
//!
//! This is the one place the crate decides *what* a campaign map looks
//! like: a mountain wall, a handful of towns, a couple of lakes, and
//! random fill for the rest. Callers wanting a different recipe invoke
//! the placement operations in [`crate::place`] directly.

use cairn_grid::{Catalog, Grid, Terrain, TerrainId};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::complete::complete;
use crate::error::MapError;
use crate::place::{force_assign, place_blob, place_wall, random_valid_position, WallParams};

/// Parameters for one [`generate`] run.
///
/// Generation is deterministic: the same parameters (including `seed`)
/// always produce the same map, because every algorithm draws from one
/// ChaCha8 stream seeded once at the start of the run.
///
/// The pipeline looks up its role terrains by name in `terrains`:
/// walls are `"mountains"`, towns are `"town"`, lakes are `"water"`.
/// Supplying a custom catalog without a role that is still requested
/// (for example, `wall: Some(..)` but no `"mountains"`) fails with
/// [`MapError::UnknownTerrain`].
#[derive(Clone, Debug)]
pub struct MapParams {
    /// Cell rows. Must be positive.
    pub rows: u32,
    /// Cell columns. Must be positive.
    pub cols: u32,
    /// Seed for the run's random stream.
    pub seed: u64,
    /// The terrain catalog definition for this map.
    pub terrains: Vec<Terrain>,
    /// Mountain wall to lay first, if any.
    pub wall: Option<WallParams>,
    /// Number of towns to scatter.
    pub towns: u32,
    /// Number of lakes to pool.
    pub lakes: u32,
    /// Hex radius of each lake.
    pub lake_radius: u32,
}

impl Default for MapParams {
    fn default() -> Self {
        Self {
            rows: 20,
            cols: 15,
            seed: 0,
            terrains: cairn_grid::default_terrains(),
            wall: Some(WallParams::default()),
            towns: 5,
            lakes: 2,
            lake_radius: 2,
        }
    }
}

fn role(catalog: &Catalog, name: &str) -> Result<TerrainId, MapError> {
    catalog.id(name).ok_or_else(|| MapError::UnknownTerrain {
        name: name.to_string(),
    })
}

/// Generate a complete map from `params`.
///
/// Seed features are placed in a fixed order — wall, towns, lakes —
/// and then the completion driver resolves whatever is left. Seed
/// placements that find no valid position are fatal for the run; an
/// external layer may retry with a different seed.
pub fn generate(params: &MapParams) -> Result<Grid, MapError> {
    let catalog = Catalog::new(params.terrains.clone())?;
    let mut grid = Grid::new(params.rows, params.cols, catalog)?;
    let mut rng = ChaCha8Rng::seed_from_u64(params.seed);

    if let Some(wall) = &params.wall {
        let mountains = role(grid.catalog(), "mountains")?;
        place_wall(&mut grid, mountains, wall, None, &mut rng)?;
    }
    if params.towns > 0 {
        let town = role(grid.catalog(), "town")?;
        for _ in 0..params.towns {
            let position = random_valid_position(&grid, town, &mut rng)?;
            force_assign(&mut grid, Some(position), Some(town), true, &mut rng)?;
        }
    }
    if params.lakes > 0 {
        let water = role(grid.catalog(), "water")?;
        for _ in 0..params.lakes {
            place_blob(&mut grid, water, params.lake_radius, None, &mut rng)?;
        }
    }
    complete(&mut grid, &mut rng)?;
    Ok(grid)
}
