//! Error types for propagation, placement, and the map pipeline.

use std::fmt;

use cairn_grid::{CatalogError, GridError};
use cairn_hex::Hex;

/// Errors from the propagation engine and placement algorithms.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GenError {
    /// A cell's candidate set became empty during propagation: no
    /// terrain satisfies all neighbour constraints at that coordinate.
    ///
    /// Generation cannot recover from this — the engine does not
    /// backtrack — so propagation stops immediately rather than
    /// continuing with a corrupted grid.
    Contradiction {
        /// The coordinate whose domain emptied.
        at: Hex,
    },
    /// No undetermined cell still admits the requested terrain.
    ///
    /// Distinct from a contradiction: the grid itself is consistent,
    /// but the requested seed placement has nowhere to go.
    NoValidPosition {
        /// Name of the terrain that could not be placed.
        terrain: String,
    },
    /// A random-position request found no undetermined cells at all.
    ///
    /// For the completion driver this is the normal end state, reached
    /// only if a caller races past the `is_complete` guard.
    GridComplete,
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Contradiction { at } => {
                write!(f, "contradiction: candidate set at {at} became empty")
            }
            Self::NoValidPosition { terrain } => {
                write!(f, "no undetermined cell admits terrain '{terrain}'")
            }
            Self::GridComplete => write!(f, "no undetermined cells remain"),
        }
    }
}

impl std::error::Error for GenError {}

/// Errors from the end-to-end map pipeline.
///
/// Wraps the construction and engine errors of the underlying layers,
/// plus the pipeline's own lookup failure for role terrains.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MapError {
    /// The supplied terrain sequence failed catalog validation.
    Catalog(CatalogError),
    /// The requested dimensions failed grid validation.
    Grid(GridError),
    /// A placement or propagation step failed.
    Gen(GenError),
    /// A role terrain the pipeline needs is missing from the catalog.
    UnknownTerrain {
        /// The missing terrain name.
        name: String,
    },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Catalog(err) => write!(f, "catalog rejected: {err}"),
            Self::Grid(err) => write!(f, "grid rejected: {err}"),
            Self::Gen(err) => write!(f, "generation failed: {err}"),
            Self::UnknownTerrain { name } => {
                write!(f, "catalog has no terrain named '{name}'")
            }
        }
    }
}

impl std::error::Error for MapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Catalog(err) => Some(err),
            Self::Grid(err) => Some(err),
            Self::Gen(err) => Some(err),
            Self::UnknownTerrain { .. } => None,
        }
    }
}

impl From<CatalogError> for MapError {
    fn from(err: CatalogError) -> Self {
        Self::Catalog(err)
    }
}

impl From<GridError> for MapError {
    fn from(err: GridError) -> Self {
        Self::Grid(err)
    }
}

impl From<GenError> for MapError {
    fn from(err: GenError) -> Self {
        Self::Gen(err)
    }
}
