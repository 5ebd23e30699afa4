//! RAMPART headless application.
//!
//! This crate wires the simulation crates to a real-time game loop thread,
//! a renderer collaborator and pointer input, and exposes them to the
//! `rampart` binary.

pub mod config;
pub mod error;
pub mod game_loop;
pub mod input;
pub mod render;
pub mod state;

pub use rampart_core as core;
