//! Procedural level generation for RAMPART.
//!
//! Produces a tile map with a single orthogonally connected route running
//! from a Start tile in the first column to an End tile in the last one.

pub mod path;

pub use path::{generate, GenerateError};

#[cfg(test)]
mod tests;
