//! Hex coordinate arithmetic for Cairn maps.
//!
//! This is the leaf crate with no dependencies. It defines the [`Hex`]
//! cube/axial coordinate value type, the six-way [`Direction`] compass,
//! and the region enumerators ([`rectangle`], [`rectangle_of_size`],
//! [`range`]) that the grid and placement layers build on.
//!
//! All operations are pure functions over `Copy` value types; there is
//! no shared state anywhere in this crate.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod direction;
pub mod hex;
pub mod layout;

pub use direction::Direction;
pub use hex::{line, Hex};
pub use layout::{range, rectangle, rectangle_of_size};
