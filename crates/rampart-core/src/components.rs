//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{Interpolated, Rgba, TileCoord, TowerId};

/// Marks an entity as an enemy. `serial` is a stable display id.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy {
    pub serial: u32,
    /// Collision radius.
    pub radius: f32,
}

/// Path-following motion state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Motion {
    /// Axis-aligned unit vector.
    pub direction: Vec2,
    /// Speed before status effects.
    pub base_speed: f32,
    /// Speed after status effects, recomputed every tick.
    pub current_speed: f32,
    /// Last tile whose centre the enemy snapped to.
    pub last_tile: TileCoord,
    /// Set once the enemy leaves the right edge of the grid.
    pub reached_end: bool,
}

/// Hit points plus the damage already committed by in-flight shells.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub current: u32,
    pub max: u32,
    /// Damage promised by fired projectiles this tick. Reset every tick.
    pub incoming: u32,
}

/// Gold paid out when the enemy is killed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bounty {
    pub worth: u32,
}

/// A timed modifier attached to an enemy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatusEffect {
    pub kind: StatusKind,
    /// Fractional speed reduction for Slow.
    pub amount: f32,
    pub duration: f32,
    pub elapsed: f32,
    pub overlay: Rgba,
}

/// Active status effects; at most one per kind.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatusEffects {
    pub active: Vec<StatusEffect>,
}

/// Remaining time of the white hit flash.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DamageFlash {
    pub remaining: f32,
}

/// One particle of the death burst.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DeathParticle {
    pub position: Interpolated,
    pub velocity: Vec2,
    pub radius: f32,
    pub lifetime: f32,
    pub elapsed: f32,
}

/// Death burst state. `started` flips when health reaches zero; the
/// enemy is despawned once it is started and all particles expired.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeathBurst {
    pub started: bool,
    pub particles: Vec<DeathParticle>,
}

/// What a projectile does on impact.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Payload {
    /// Damage to the single enemy hit.
    Direct { damage: u32 },
    /// Damage to every enemy within `radius` of the impact point.
    Splash { damage: u32, radius: f32 },
}

/// A shot owned by a tower.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    pub position: Interpolated,
    /// Unit vector.
    pub direction: Vec2,
    pub speed: f32,
    pub radius: f32,
    pub origin: Vec2,
    /// Splash shells detonate after travelling this far.
    pub max_travel: f32,
    pub payload: Payload,
    /// Marked on impact, purged on the owner's next update.
    pub hit: bool,
}

/// Expanding cosmetic circle (explosion or slow pulse).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EffectRing {
    pub kind: RingKind,
    pub center: Vec2,
    pub max_radius: f32,
    pub elapsed: f32,
    pub duration: f32,
}

/// A placed tower together with the shots and effects it owns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tower {
    pub id: TowerId,
    pub kind: TowerKind,
    pub tile: TileCoord,
    /// Tile centre in world units.
    pub position: Vec2,
    /// 0-based level into the registry table.
    pub level: u8,
    pub time_since_last_shot: f32,
    pub selected: bool,
    pub upgrade_requested: bool,
    pub sale_requested: bool,
    /// Set once the sale is refunded; cleanup despawns it.
    pub sold: bool,
    pub projectiles: Vec<Projectile>,
    pub rings: Vec<EffectRing>,
}
