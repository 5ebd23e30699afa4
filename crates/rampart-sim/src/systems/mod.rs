//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions over `&mut World` (or `&World` when they only
//! touch components through runtime-checked borrows). They do not own
//! state; everything lives in components or is passed in by the engine.

pub mod cleanup;
pub mod combat;
pub mod enemies;
pub mod snapshot;
pub mod towers;
pub mod wave_director;
