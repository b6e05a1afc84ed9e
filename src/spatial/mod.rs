//! Spatial data structures for the tile grid
//!
//! This module contains the grid storage and its cell/tile value types.

/// Grid storage, tile types and coordinates
pub mod grid;

pub use grid::{Cell, Grid, Position, Tile, TileType};
