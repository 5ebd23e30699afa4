//! Core types and definitions for the RAMPART simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, the tower registry, commands, state snapshots, events,
//! errors and constants. It has no dependency on any runtime framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod registry;
pub mod state;
pub mod types;

pub use glam::Vec2;

#[cfg(test)]
mod tests;
