//! Error types for catalog and grid construction.

use std::fmt;

/// Errors detected while building a [`Catalog`](crate::Catalog).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogError {
    /// The terrain sequence was empty.
    Empty,
    /// More terrain kinds than the candidate bitset can represent.
    TooManyTerrains {
        /// Number of kinds supplied.
        count: usize,
        /// Maximum supported kinds.
        max: usize,
    },
    /// Two terrains were registered under the same name.
    DuplicateName {
        /// The repeated name.
        name: String,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "catalog must contain at least one terrain"),
            Self::TooManyTerrains { count, max } => {
                write!(f, "catalog holds {count} terrains, maximum is {max}")
            }
            Self::DuplicateName { name } => {
                write!(f, "terrain name '{name}' registered twice")
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// Errors detected while constructing a [`Grid`](crate::Grid).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Attempted to construct a grid with zero cells.
    EmptyGrid,
    /// A dimension exceeds the coordinate range.
    DimensionTooLarge {
        /// Which dimension ("rows" or "cols").
        name: &'static str,
        /// The requested size.
        value: u32,
        /// The maximum allowed size.
        max: u32,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds maximum {max}")
            }
        }
    }
}

impl std::error::Error for GridError {}
