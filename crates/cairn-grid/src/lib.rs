//! Terrain kinds, candidate domains, and the hex cell grid.
//!
//! This crate owns the data model of a map under construction:
//!
//! - [`Terrain`] — an immutable named kind with its *directed*
//!   compatible-neighbour declarations
//! - [`Catalog`] — the validated, read-only registry of kinds used by a
//!   generation run, with compatibility resolved to [`TerrainSet`] bitsets
//! - [`Cell`] — one location's shrinking set of candidate terrains
//! - [`Grid`] — the insertion-ordered mapping from [`Hex`](cairn_hex::Hex)
//!   coordinate to [`Cell`] over a brick-layout rectangle
//!
//! The solver and placement algorithms live in `cairn-gen`; this crate
//! only guarantees the structural invariants (fixed coordinate set,
//! narrow-only domains, determined ⇔ singleton).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod catalog;
pub mod cell;
pub mod error;
pub mod grid;
pub mod terrain;

pub use catalog::{default_terrains, Catalog};
pub use cell::Cell;
pub use error::{CatalogError, GridError};
pub use grid::Grid;
pub use terrain::{Terrain, TerrainId, TerrainSet};
