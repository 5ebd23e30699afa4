//! Simulation engine for RAMPART.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces GameSnapshots for the frontend.

pub mod ballistics;
pub mod clock;
pub mod economy;
pub mod engine;
pub mod systems;
pub mod world_setup;

pub use rampart_core as core;
pub use clock::FixedTimestep;
pub use engine::{SimConfig, SimulationEngine};
