//! Enemy behaviour for RAMPART.
//!
//! Path-following steering, status-effect policy, death bursts and
//! wave-scaled enemy profiles. Pure functions over plain data; the
//! simulation crate owns the ECS and calls in here.

pub mod burst;
pub mod fsm;
pub mod profiles;
pub mod status;

pub use rampart_core as core;

#[cfg(test)]
mod tests;
