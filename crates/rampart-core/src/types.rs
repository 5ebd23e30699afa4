//! Fundamental geometric and simulation types.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Integer tile coordinate on the grid. Signed so that off-grid
/// neighbours (column -1, row -1) can be expressed and queried.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileCoord {
    pub col: i32,
    pub row: i32,
}

impl TileCoord {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// The coordinate shifted by the given column/row delta.
    pub const fn offset(self, dcol: i32, drow: i32) -> Self {
        Self {
            col: self.col + dcol,
            row: self.row + drow,
        }
    }

    pub const fn right(self) -> Self {
        self.offset(1, 0)
    }

    /// Row + 1 (screen space: y grows downward).
    pub const fn below(self) -> Self {
        self.offset(0, 1)
    }

    pub const fn above(self) -> Self {
        self.offset(0, -1)
    }

    /// Manhattan distance, used to check orthogonal adjacency.
    pub fn manhattan(self, other: TileCoord) -> u32 {
        self.col.abs_diff(other.col) + self.row.abs_diff(other.row)
    }
}

impl fmt::Display for TileCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// Stable tower identifier. Towers live in the ECS world; the grid
/// only stores this id, never the tower itself.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct TowerId(pub u32);

impl fmt::Display for TowerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 8-bit RGBA colour handed to the renderer (status overlays, particles).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// A position tracked across two simulation ticks for render interpolation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Interpolated {
    pub previous: Vec2,
    pub current: Vec2,
}

impl Interpolated {
    /// Both samples at the same point (freshly spawned entity).
    pub fn at(position: Vec2) -> Self {
        Self {
            previous: position,
            current: position,
        }
    }

    /// Shift the current sample into `previous` and move by `delta`.
    pub fn advance(&mut self, delta: Vec2) {
        self.previous = self.current;
        self.current += delta;
    }

    /// Position between the two samples for an interpolation factor in [0, 1].
    pub fn lerp(&self, alpha: f32) -> Vec2 {
        lerp(self.previous, self.current, alpha)
    }
}

/// Linear interpolation with the factor clamped to [0, 1].
pub fn lerp(previous: Vec2, current: Vec2, alpha: f32) -> Vec2 {
    previous.lerp(current, alpha.clamp(0.0, 1.0))
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Seconds per tick at the fixed tick rate.
    pub fn dt(&self) -> f32 {
        crate::constants::DT
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += f64::from(self.dt());
    }
}
