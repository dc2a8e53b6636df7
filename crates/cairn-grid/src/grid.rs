//! The insertion-ordered mapping from hex coordinate to cell.

use cairn_hex::{rectangle_of_size, Hex};
use indexmap::IndexMap;
use smallvec::SmallVec;

use crate::catalog::Catalog;
use crate::cell::Cell;
use crate::error::GridError;
use crate::terrain::Terrain;

/// A rectangular hex map under construction.
///
/// The coordinate set is fixed at construction to the brick-layout
/// rectangle for `(rows, cols)`; cells are only ever mutated in place,
/// never added or removed. Iteration order is the layout's row-major
/// order (the backing map is insertion-ordered), which is what external
/// renderers rely on for row wrapping.
///
/// Every cell starts with the full catalog as its domain and moves
/// monotonically toward a single resolved terrain; the grid is
/// *complete* — and from then on treated as read-only — once every cell
/// is determined.
///
/// # Examples
///
/// ```
/// use cairn_grid::{default_terrains, Catalog, Grid};
///
/// let catalog = Catalog::new(default_terrains()).unwrap();
/// let grid = Grid::new(3, 3, catalog).unwrap();
/// assert_eq!(grid.len(), 9);
/// assert!(!grid.is_complete());
/// assert_eq!(grid.neighbours(cairn_hex::Hex::new(0, 0)).len(), 6);
/// ```
#[derive(Clone, Debug)]
pub struct Grid {
    cells: IndexMap<Hex, Cell>,
    rows: u32,
    cols: u32,
    catalog: Catalog,
}

impl Grid {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a `rows` × `cols` grid with every cell admitting the full
    /// catalog.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0, or
    /// `Err(GridError::DimensionTooLarge)` if either exceeds `i32::MAX`.
    pub fn new(rows: u32, cols: u32, catalog: Catalog) -> Result<Grid, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyGrid);
        }
        if rows > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "rows",
                value: rows,
                max: Self::MAX_DIM,
            });
        }
        if cols > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "cols",
                value: cols,
                max: Self::MAX_DIM,
            });
        }
        let all = catalog.all();
        let cells = rectangle_of_size(rows as i32, cols as i32)
            .into_iter()
            .map(|position| (position, Cell::new(all)))
            .collect();
        Ok(Grid {
            cells,
            rows,
            cols,
            catalog,
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Number of cells (`rows * cols`).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false` — construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The catalog this grid was built from.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Whether `position` is inside the grid.
    pub fn contains(&self, position: Hex) -> bool {
        self.cells.contains_key(&position)
    }

    /// The cell at `position`, if inside the grid.
    pub fn cell(&self, position: Hex) -> Option<&Cell> {
        self.cells.get(&position)
    }

    /// Mutable access to the cell at `position`, if inside the grid.
    pub fn cell_mut(&mut self, position: Hex) -> Option<&mut Cell> {
        self.cells.get_mut(&position)
    }

    /// The grid-present neighbours of `position`, in direction order.
    ///
    /// Edge cells simply have fewer neighbours; coordinates outside the
    /// rectangle are filtered out.
    pub fn neighbours(&self, position: Hex) -> SmallVec<[Hex; 6]> {
        position
            .neighbours()
            .into_iter()
            .filter(|nb| self.cells.contains_key(nb))
            .collect()
    }

    /// Iterate `(position, cell)` pairs in layout order.
    pub fn iter(&self) -> impl Iterator<Item = (Hex, &Cell)> {
        self.cells.iter().map(|(position, cell)| (*position, cell))
    }

    /// Iterate the coordinates in layout order.
    pub fn positions(&self) -> impl Iterator<Item = Hex> + '_ {
        self.cells.keys().copied()
    }

    /// Iterate the coordinates whose cells are not yet determined.
    pub fn undetermined(&self) -> impl Iterator<Item = Hex> + '_ {
        self.cells
            .iter()
            .filter(|(_, cell)| !cell.is_determined())
            .map(|(position, _)| *position)
    }

    /// Whether every cell has resolved to exactly one terrain.
    pub fn is_complete(&self) -> bool {
        self.cells.values().all(Cell::is_determined)
    }

    /// The resolved terrain at `position`, if that cell is determined.
    pub fn resolved(&self, position: Hex) -> Option<&Terrain> {
        let id = self.cells.get(&position)?.resolved()?;
        Some(self.catalog.terrain(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_terrains;
    use crate::terrain::Terrain;

    fn grid(rows: u32, cols: u32) -> Grid {
        let catalog = Catalog::new(default_terrains()).unwrap();
        Grid::new(rows, cols, catalog).unwrap()
    }

    #[test]
    fn rejects_degenerate_dimensions() {
        let catalog = Catalog::new(default_terrains()).unwrap();
        assert!(matches!(
            Grid::new(0, 5, catalog.clone()),
            Err(GridError::EmptyGrid)
        ));
        assert!(matches!(
            Grid::new(5, 0, catalog),
            Err(GridError::EmptyGrid)
        ));
    }

    #[test]
    fn layout_matches_rectangle_of_size() {
        let g = grid(4, 7);
        assert_eq!(g.len(), 28);
        let expected = rectangle_of_size(4, 7);
        let actual: Vec<Hex> = g.positions().collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn interior_cell_has_six_neighbours() {
        let g = grid(5, 5);
        assert_eq!(g.neighbours(Hex::new(0, 0)).len(), 6);
    }

    #[test]
    fn edge_cells_lose_out_of_grid_neighbours() {
        let g = grid(3, 3);
        // Top-left of the 3×3 window is (0, -1); only E, SW, SE stay inside.
        let corner = Hex::new(0, -1);
        assert!(g.contains(corner));
        let nbs = g.neighbours(corner);
        assert!(nbs.len() < 6);
        for nb in &nbs {
            assert!(g.contains(*nb));
        }
    }

    #[test]
    fn fresh_grid_admits_full_catalog_everywhere() {
        let g = grid(3, 3);
        let all = g.catalog().all();
        for (_, cell) in g.iter() {
            assert_eq!(cell.candidates(), all);
        }
        assert_eq!(g.undetermined().count(), 9);
        assert!(!g.is_complete());
    }

    #[test]
    fn single_terrain_catalog_is_complete_at_construction() {
        let catalog = Catalog::new(vec![Terrain::new("plains", ["plains"])]).unwrap();
        let g = Grid::new(2, 2, catalog).unwrap();
        // One candidate per cell means determined from the start.
        assert!(g.is_complete());
        for position in g.positions().collect::<Vec<_>>() {
            assert_eq!(g.resolved(position).map(Terrain::name), Some("plains"));
        }
    }

    #[test]
    fn resolved_requires_determined() {
        let mut g = grid(2, 2);
        let position = g.positions().next().unwrap();
        assert!(g.resolved(position).is_none());
        let water = g.catalog().id("water").unwrap();
        g.cell_mut(position).unwrap().commit(water);
        assert_eq!(g.resolved(position).map(Terrain::name), Some("water"));
    }
}
