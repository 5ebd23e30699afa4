//! Rejections of player commands. None of these are fatal: the
//! simulation state is left unchanged and the caller decides how to
//! surface the reason.

use thiserror::Error;

use crate::types::{TileCoord, TowerId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("not enough gold: need {needed}, have {available}")]
    InsufficientGold { needed: u32, available: u32 },

    #[error("tile {0} is not buildable")]
    NotBuildable(TileCoord),

    #[error("tile {0} already holds a tower")]
    TileOccupied(TileCoord),

    #[error("no tower {0}")]
    UnknownTower(TowerId),

    #[error("tower {0} is already at max level")]
    MaxLevel(TowerId),

    #[error("game is not active")]
    GameNotActive,
}
