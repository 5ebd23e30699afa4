//! Simulation constants and tuning parameters.

use crate::types::Rgba;

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

/// Maximum fixed steps run for a single rendered frame.
pub const MAX_SUBSTEPS: u32 = 8;

// --- Grid ---

/// Default grid width in tiles.
pub const DEFAULT_COLS: i32 = 16;

/// Default grid height in tiles.
pub const DEFAULT_ROWS: i32 = 12;

/// World units per tile edge.
pub const TILE_SIZE: f32 = 100.0;

// --- Economy ---

pub const STARTING_GOLD: u32 = 100;

pub const STARTING_LIVES: u32 = 5;

// --- Enemies ---

/// Base movement speed (world units per second) before wave scaling.
pub const ENEMY_BASE_SPEED: f32 = 60.0;

/// Base health before wave scaling.
pub const ENEMY_BASE_HEALTH: u32 = 5;

/// Collision radius of an enemy.
pub const ENEMY_RADIUS: f32 = 15.0;

/// Worth = clamp((health * W_H + speed * W_S) / DIVISOR, MIN, MAX).
pub const WORTH_HEALTH_WEIGHT: f32 = 0.6;
pub const WORTH_SPEED_WEIGHT: f32 = 0.4;
pub const WORTH_DIVISOR: f32 = 30.0;
pub const ENEMY_MIN_WORTH: u32 = 1;
pub const ENEMY_MAX_WORTH: u32 = 15;

/// How long an enemy flashes after taking a hit (seconds).
pub const DAMAGE_FLASH_DURATION: f32 = 0.1;

// --- Death burst ---

pub const DEATH_PARTICLES_MIN: u32 = 4;
pub const DEATH_PARTICLES_MAX: u32 = 6;
pub const DEATH_PARTICLE_LIFETIME_MIN: f32 = 0.4;
pub const DEATH_PARTICLE_LIFETIME_MAX: f32 = 0.6;
pub const DEATH_PARTICLE_SPEED_MIN: f32 = 50.0;
pub const DEATH_PARTICLE_SPEED_MAX: f32 = 100.0;
pub const DEATH_PARTICLE_RADIUS_MIN: f32 = 3.0;
pub const DEATH_PARTICLE_RADIUS_MAX: f32 = 6.0;

// --- Waves ---

/// Rest period between the end of one wave and the start of the next (seconds).
pub const TIME_BETWEEN_WAVES: f32 = 10.0;

/// Spawn interval of wave 1 before its per-wave decrement (seconds).
pub const INITIAL_SPAWN_INTERVAL: f32 = 0.75;

/// Spawn interval reduction applied at the start of every wave.
pub const SPAWN_INTERVAL_DECREMENT: f32 = 0.01;

/// Floor for the spawn interval.
pub const MIN_SPAWN_INTERVAL: f32 = 0.1;

/// Enemies per wave before any growth.
pub const INITIAL_ENEMIES_PER_WAVE: u32 = 5;

/// Quota grows by one every this many waves.
pub const ENEMIES_PER_WAVE_PERIOD: u32 = 2;

/// Health bonus grows by one every this many waves.
pub const HEALTH_BONUS_PERIOD: u32 = 5;

/// Speed added per wave number.
pub const SPEED_PER_WAVE: f32 = 1.0;

// --- Projectiles ---

pub const BULLET_SPEED: f32 = 600.0;
pub const BULLET_RADIUS: f32 = 5.0;
pub const SPLASH_SHELL_SPEED: f32 = 300.0;
pub const SPLASH_SHELL_RADIUS: f32 = 8.0;

/// Projectiles further than this outside the grid are discarded.
pub const PROJECTILE_OOB_MARGIN: f32 = 100.0;

/// Leading coefficients below this are treated as zero by intercept prediction.
pub const INTERCEPT_EPSILON: f32 = 1e-6;

// --- Cosmetic effects ---

pub const EXPLOSION_DURATION: f32 = 0.3;
pub const PULSE_DURATION: f32 = 0.3;

/// Overlay colour of the slow effect.
pub const SLOW_OVERLAY: Rgba = Rgba::new(54, 139, 193, 123);
