//! Constraint-driven terrain generation for Cairn maps.
//!
//! This crate turns a blank [`cairn_grid::Grid`] into a fully resolved
//! map. Its layers, bottom to top:
//!
//! - [`propagate`](mod@propagate) — the arc-consistency engine that
//!   prunes candidate sets after every commitment;
//! - [`place`](mod@place) — single assignments, circular blobs, and
//!   branching mountain walls;
//! - [`complete`](complete()) — the driver that randomly resolves
//!   whatever the seed features left open;
//! - [`generate`](generate()) — the classic wall/towns/lakes pipeline.
//!
//! All randomness flows through caller-supplied [`rand::Rng`] handles,
//! so the same seed always yields the same map.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod complete;
mod error;
mod generator;
pub mod place;
pub mod propagate;

pub use complete::complete;
pub use error::{GenError, MapError};
pub use generator::{generate, MapParams};
pub use place::{force_assign, place_blob, place_wall, random_valid_position, WallParams};
