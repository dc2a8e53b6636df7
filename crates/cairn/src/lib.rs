//! Cairn: a constraint-based hex terrain map generator for tabletop
//! campaigns.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all Cairn sub-crates. For most users, adding `cairn` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use cairn::prelude::*;
//!
//! let params = MapParams {
//!     seed: 7,
//!     ..MapParams::default()
//! };
//! let map = generate(&params).unwrap();
//! assert!(map.is_complete());
//!
//! // Every cell has resolved to exactly one terrain kind.
//! for position in map.positions().collect::<Vec<_>>() {
//!     println!("{position}: {}", map.resolved(position).unwrap());
//! }
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`hex`] | `cairn-hex` | Cube coordinates, directions, lines, layouts |
//! | [`grid`] | `cairn-grid` | Terrain catalog, candidate sets, the grid |
//! | [`gen`] | `cairn-gen` | Propagation, placement, the map pipeline |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Hex geometry (`cairn-hex`).
///
/// Cube coordinates ([`hex::Hex`]), the six [`hex::Direction`]s, line
/// drawing, and rectangular / circular layouts.
pub use cairn_hex as hex;

/// Terrain model and grid state (`cairn-grid`).
///
/// The [`grid::Catalog`] of terrain kinds with their compatibility
/// sets, per-cell candidate domains, and the [`grid::Grid`] itself.
pub use cairn_grid as grid;

/// Generation algorithms (`cairn-gen`).
///
/// Arc-consistency propagation, seed placements (blobs and walls), the
/// completion driver, and the end-to-end [`gen::generate`] pipeline.
pub use cairn_gen as gen;

/// Common imports for typical Cairn usage.
///
/// ```rust
/// use cairn::prelude::*;
/// ```
pub mod prelude {
    pub use cairn_gen::{generate, GenError, MapError, MapParams, WallParams};
    pub use cairn_grid::{default_terrains, Catalog, Cell, Grid, Terrain, TerrainId, TerrainSet};
    pub use cairn_hex::{Direction, Hex};
}
