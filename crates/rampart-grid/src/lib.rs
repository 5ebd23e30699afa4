//! Tile map for RAMPART.
//!
//! The grid classifies tiles as path or buildable, converts between
//! tile and world coordinates, and keeps track of which tile holds
//! which tower.

pub use rampart_core as core;

pub mod grid;
pub mod route;

// Re-export key types for convenience.
pub use grid::{Grid, Tile};
pub use route::{next_direction, trace_route};
