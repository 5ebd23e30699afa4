//! Game state snapshot: the complete visible state handed to the
//! renderer and UI after each tick.
//!
//! Every moving thing carries both its previous and current position;
//! the renderer blends them with the interpolation factor of the frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{Interpolated, Rgba, SimTime, TileCoord, TowerId};

/// Complete game state broadcast after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub economy: EconomyView,
    pub wave: WaveView,
    pub enemies: Vec<EnemyView>,
    pub towers: Vec<TowerView>,
    pub projectiles: Vec<ProjectileView>,
    pub rings: Vec<RingView>,
    pub events: Vec<GameEvent>,
}

/// Player resources.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EconomyView {
    pub gold: u32,
    pub lives: u32,
}

/// Wave director progress.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct WaveView {
    pub wave: u32,
    pub phase: WavePhase,
    pub enemies_per_wave: u32,
    pub spawned_this_wave: u32,
    pub spawn_interval: f32,
    /// Seconds until the next wave starts (0 while spawning).
    pub rest_remaining: f32,
}

/// An enemy as the renderer sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub serial: u32,
    pub position: Interpolated,
    pub radius: f32,
    pub health: u32,
    pub max_health: u32,
    /// Overlay of the active slow, if any.
    pub overlay: Option<Rgba>,
    pub flashing: bool,
    /// Health is zero; only the death burst should be drawn.
    pub dying: bool,
    pub particles: Vec<ParticleView>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ParticleView {
    pub position: Interpolated,
    pub radius: f32,
    /// 1.0 when spawned, fading to 0.0.
    pub alpha: f32,
}

/// A placed tower.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TowerView {
    pub id: TowerId,
    pub kind: TowerKind,
    pub tile: TileCoord,
    pub position: Vec2,
    pub level: u8,
    pub max_level: u8,
    /// Range of the current level, for the range circle.
    pub range: f32,
    pub selected: bool,
    /// Gold needed for the next level, `None` at max level.
    pub upgrade_cost: Option<u32>,
    pub sell_value: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProjectileView {
    pub owner: TowerId,
    pub position: Interpolated,
    pub radius: f32,
    /// Drawn for one last frame after impact.
    pub hit: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RingView {
    pub kind: RingKind,
    pub center: Vec2,
    pub radius: f32,
    /// Fades from 1.0 to 0.0 over the ring's lifetime.
    pub alpha: f32,
}

impl GameSnapshot {
    /// Interpolated enemy centres for a render factor, skipping dying enemies.
    pub fn enemy_positions(&self, alpha: f32) -> Vec<(u32, Vec2)> {
        self.enemies
            .iter()
            .filter(|e| !e.dying)
            .map(|e| (e.serial, e.position.lerp(alpha)))
            .collect()
    }

    pub fn tower(&self, id: TowerId) -> Option<&TowerView> {
        self.towers.iter().find(|t| t.id == id)
    }

    /// Whether any event of the given shape was emitted this tick.
    pub fn has_event(&self, predicate: impl Fn(&GameEvent) -> bool) -> bool {
        self.events.iter().any(predicate)
    }
}
