//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Classification of a grid tile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileKind {
    /// Entry tile of the route (column 0).
    Start,
    /// Exit tile of the route (last column).
    End,
    /// Traversable route tile.
    Path,
    /// Tower placement allowed.
    Buildable,
    /// Not yet classified, or queried outside the grid.
    #[default]
    Unassigned,
}

impl TileKind {
    /// Whether enemies may walk on this tile.
    pub fn is_traversable(self) -> bool {
        matches!(self, TileKind::Start | TileKind::Path | TileKind::End)
    }
}

/// Tower family. Per-level numbers live in the registry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TowerKind {
    /// Single-target direct fire with lead prediction.
    #[default]
    Bullet,
    /// Shell that explodes for area damage.
    Splash,
    /// Radial pulse applying a slow to everything in range.
    Slow,
}

impl TowerKind {
    pub const ALL: [TowerKind; 3] = [TowerKind::Bullet, TowerKind::Splash, TowerKind::Slow];
}

/// Timed modifier kinds that can be attached to an enemy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusKind {
    Slow,
}

/// Cosmetic ring effect kinds owned by towers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RingKind {
    /// Splash shell detonation, grows to the splash radius.
    Explosion,
    /// Slow tower pulse, grows to the tower range.
    Pulse,
}

/// Wave director phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WavePhase {
    /// Waiting out the rest period between waves.
    #[default]
    Resting,
    /// Spawning the current wave's quota.
    Spawning,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Active,
    Paused,
    GameOver,
}
