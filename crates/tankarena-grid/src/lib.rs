//! Tile grid for the tank arena.
//!
//! Map storage, point and rectangle occupancy queries,
//! and the plain-text map format.

pub use tankarena_core as core;

pub mod grid;
pub mod loader;

// Re-export key types for convenience.
pub use grid::TileGrid;
pub use loader::{format_map, load_map, parse_map, MapError};
