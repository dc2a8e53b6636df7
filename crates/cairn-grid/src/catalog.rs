//! The validated, read-only registry of terrain kinds.

use indexmap::IndexMap;

use crate::error::CatalogError;
use crate::terrain::{Terrain, TerrainId, TerrainSet};

/// An immutable registry of terrain kinds for one generation run.
///
/// Construction resolves each terrain's declared compatible-neighbour
/// *names* into a [`TerrainSet`] over the catalog's own IDs, so the
/// per-arc compatibility check during propagation is a single bitwise
/// intersection. Names declared but not present in the catalog resolve
/// to nothing, exactly as a name-set intersection would treat them.
///
/// # Examples
///
/// ```
/// use cairn_grid::{default_terrains, Catalog};
///
/// let catalog = Catalog::new(default_terrains()).unwrap();
/// let town = catalog.id("town").unwrap();
/// let plains = catalog.id("plains").unwrap();
///
/// // The directed declarations: plains tolerates town, and town
/// // declares plains back, so both directed checks happen to pass here.
/// assert!(catalog.is_compatible(plains, [town].into_iter().collect()));
/// assert!(catalog.is_compatible(town, [plains].into_iter().collect()));
/// ```
#[derive(Clone, Debug)]
pub struct Catalog {
    terrains: Vec<Terrain>,
    by_name: IndexMap<String, TerrainId>,
    compatible: Vec<TerrainSet>,
}

impl Catalog {
    /// Build a catalog from an ordered sequence of terrain kinds.
    ///
    /// Returns an error if the sequence is empty, exceeds
    /// [`TerrainSet::CAPACITY`] kinds, or contains a duplicate name.
    pub fn new(terrains: Vec<Terrain>) -> Result<Catalog, CatalogError> {
        if terrains.is_empty() {
            return Err(CatalogError::Empty);
        }
        if terrains.len() > TerrainSet::CAPACITY {
            return Err(CatalogError::TooManyTerrains {
                count: terrains.len(),
                max: TerrainSet::CAPACITY,
            });
        }
        let mut by_name = IndexMap::with_capacity(terrains.len());
        for (index, terrain) in terrains.iter().enumerate() {
            let id = TerrainId(index as u16);
            if by_name.insert(terrain.name().to_string(), id).is_some() {
                return Err(CatalogError::DuplicateName {
                    name: terrain.name().to_string(),
                });
            }
        }
        let compatible = terrains
            .iter()
            .map(|terrain| {
                terrain
                    .compatible()
                    .iter()
                    .filter_map(|name| by_name.get(name.as_str()).copied())
                    .collect()
            })
            .collect();
        Ok(Catalog {
            terrains,
            by_name,
            compatible,
        })
    }

    /// Number of terrain kinds.
    pub fn len(&self) -> usize {
        self.terrains.len()
    }

    /// Always `false` — construction rejects empty catalogs.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Look up a terrain ID by name.
    pub fn id(&self, name: &str) -> Option<TerrainId> {
        self.by_name.get(name).copied()
    }

    /// The terrain registered under `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this catalog.
    pub fn terrain(&self, id: TerrainId) -> &Terrain {
        &self.terrains[id.index()]
    }

    /// The terrains in registration order.
    pub fn terrains(&self) -> &[Terrain] {
        &self.terrains
    }

    /// The domain containing every terrain in the catalog.
    pub fn all(&self) -> TerrainSet {
        TerrainSet::full(self.terrains.len())
    }

    /// The resolved compatible-neighbour set declared by `candidate`.
    ///
    /// # Panics
    ///
    /// Panics if `candidate` was not issued by this catalog.
    pub fn compatible_set(&self, candidate: TerrainId) -> TerrainSet {
        self.compatible[candidate.index()]
    }

    /// The one-directional compatibility check: can `candidate` sit next
    /// to a cell whose remaining possibilities are `neighbour_domain`?
    ///
    /// True iff the set `candidate` declares compatible intersects the
    /// neighbour's domain. The engine restores effective symmetry by
    /// applying this along every ordered (cell, neighbour) pair.
    pub fn is_compatible(&self, candidate: TerrainId, neighbour_domain: TerrainSet) -> bool {
        self.compatible[candidate.index()].intersects(neighbour_domain)
    }
}

/// The default terrain kinds for a wilderness campaign map.
///
/// | kind      | compatible neighbours                     |
/// |-----------|-------------------------------------------|
/// | plains    | plains, mountains, water, valley, town    |
/// | mountains | plains, mountains                         |
/// | valley    | plains, valley                            |
/// | water     | plains, water                             |
/// | town      | plains                                    |
///
/// The table is directed as written; note that `town` does not declare
/// itself, so towns never touch.
pub fn default_terrains() -> Vec<Terrain> {
    vec![
        Terrain::new("plains", ["plains", "mountains", "water", "valley", "town"]),
        Terrain::new("mountains", ["plains", "mountains"]),
        Terrain::new("valley", ["plains", "valley"]),
        Terrain::new("water", ["plains", "water"]),
        Terrain::new("town", ["plains"]),
    ]
}
