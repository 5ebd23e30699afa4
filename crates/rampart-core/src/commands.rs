//! Player commands and input events sent from the frontend to the simulation.
//!
//! Commands are validated when applied; queued commands are processed at
//! the next tick boundary.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::TowerKind;
use crate::types::{TileCoord, TowerId};

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Economy ---
    /// Build a tower of `kind` on a buildable tile.
    BuildTower { kind: TowerKind, tile: TileCoord },
    /// Request an upgrade to the next level.
    UpgradeTower { tower: TowerId },
    /// Request a sale at the current level's sell cost.
    SellTower { tower: TowerId },

    // --- Selection ---
    /// Select a tower (deselects all others).
    SelectTower { tower: TowerId },
    /// Deselect every tower.
    ClearSelection,

    // --- Simulation control ---
    Pause,
    Resume,
    /// Reset economy, waves and entities, and generate a new map.
    NewGame,
}

/// Already-debounced pointer events from the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InputEvent {
    /// Primary button released at a world position.
    PrimaryReleased { world: Vec2 },
    /// Secondary button released over a tile.
    SecondaryReleased { tile: TileCoord },
}
