//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::TowerKind;
use crate::types::TowerId;

/// Semantic event identifiers. The sound layer maps them to playback;
/// the core knows nothing about audio resources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A bullet tower fired.
    BulletFired { tower: TowerId },
    /// A splash tower lobbed a shell.
    SplashFired { tower: TowerId },
    /// A splash shell detonated.
    SplashExploded { tower: TowerId, enemies_hit: u32 },
    /// A slow tower pulsed.
    SlowPulse { tower: TowerId, enemies_slowed: u32 },
    /// An enemy took damage and survived.
    EnemyHit { enemy: u32 },
    /// An enemy's health reached zero; `worth` gold was paid.
    EnemyDied { enemy: u32, worth: u32 },
    /// An enemy reached the end of the path.
    LifeLost { lives_remaining: u32 },
    WaveStarted { wave: u32 },
    TowerBuilt { tower: TowerId, kind: TowerKind },
    TowerUpgraded { tower: TowerId, level: u8 },
    TowerSold { tower: TowerId, refund: u32 },
    /// A UI command was processed (accepted or not).
    ButtonClick,
    GameOver { wave: u32 },
}
