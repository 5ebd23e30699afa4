//! Wave-scaled enemy profiles.

use rampart_core::constants::*;

/// Stats of an enemy spawned during a given wave.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyProfile {
    pub speed: f32,
    pub health: u32,
    pub worth: u32,
    pub radius: f32,
}

/// Profile for wave `wave` with the director's accumulated health bonus.
pub fn for_wave(wave: u32, health_bonus: u32) -> EnemyProfile {
    let speed = ENEMY_BASE_SPEED + wave as f32 * SPEED_PER_WAVE;
    let health = ENEMY_BASE_HEALTH + health_bonus;
    EnemyProfile {
        speed,
        health,
        worth: worth(health, speed),
        radius: ENEMY_RADIUS,
    }
}

/// Gold paid for a kill: tougher and faster enemies pay more.
pub fn worth(health: u32, speed: f32) -> u32 {
    let raw = health as f32 * WORTH_HEALTH_WEIGHT + speed * WORTH_SPEED_WEIGHT;
    ((raw / WORTH_DIVISOR) as u32).clamp(ENEMY_MIN_WORTH, ENEMY_MAX_WORTH)
}
