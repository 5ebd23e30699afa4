//! Shared combat helpers: target sampling, selection and damage.
//!
//! Towers read enemies through a per-tick `Target` sample list so that
//! damage can be written back through runtime-checked component borrows
//! without holding a query open.

use glam::Vec2;
use hecs::{Entity, World};
use log::trace;
use rand_chacha::ChaCha8Rng;

use rampart_core::components::*;
use rampart_core::constants::DAMAGE_FLASH_DURATION;
use rampart_core::events::GameEvent;
use rampart_core::types::Interpolated;
use rampart_enemy_ai::burst;

use crate::economy::Economy;

/// Snapshot of one enemy as towers see it this tick.
#[derive(Debug, Clone, Copy)]
pub struct Target {
    pub entity: Entity,
    pub serial: u32,
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub health: u32,
    pub incoming: u32,
}

impl Target {
    /// Still alive and on the map.
    pub fn is_live(&self) -> bool {
        self.health > 0
    }

    /// In-flight damage already covers its remaining health.
    pub fn is_doomed(&self) -> bool {
        self.incoming >= self.health
    }
}

/// Sample every live enemy that has not left the map, in serial order.
pub fn sample_targets(world: &World) -> Vec<Target> {
    let mut targets: Vec<Target> = world
        .query::<(&Enemy, &Interpolated, &Motion, &Health, &DeathBurst)>()
        .iter()
        .filter(|(_, (_, _, motion, health, death))| {
            health.current > 0 && !death.started && !motion.reached_end
        })
        .map(|(entity, (enemy, position, motion, health, _))| Target {
            entity,
            serial: enemy.serial,
            position: position.current,
            velocity: motion.direction * motion.current_speed,
            radius: enemy.radius,
            health: health.current,
            incoming: health.incoming,
        })
        .collect();
    targets.sort_by_key(|t| t.serial);
    targets
}

/// Index of the closest live, not-yet-doomed target within `range` of
/// `origin`. Ties keep the first in serial order.
pub fn closest_in_range(targets: &[Target], origin: Vec2, range: f32) -> Option<usize> {
    let range_sq = range * range;
    let mut best: Option<(usize, f32)> = None;
    for (i, target) in targets.iter().enumerate() {
        if !target.is_live() || target.is_doomed() {
            continue;
        }
        let dist_sq = origin.distance_squared(target.position);
        if dist_sq > range_sq {
            continue;
        }
        if best.map_or(true, |(_, d)| dist_sq < d) {
            best = Some((i, dist_sq));
        }
    }
    best.map(|(i, _)| i)
}

/// Indices of live targets within `radius` of `point`.
pub fn within(targets: &[Target], point: Vec2, radius: f32) -> Vec<usize> {
    let radius_sq = radius * radius;
    targets
        .iter()
        .enumerate()
        .filter(|(_, t)| t.is_live() && point.distance_squared(t.position) <= radius_sq)
        .map(|(i, _)| i)
        .collect()
}

/// Commit in-flight damage to a target so other towers skip it once it is doomed.
pub fn commit_incoming(world: &World, target: &mut Target, amount: u32) {
    target.incoming = target.incoming.saturating_add(amount);
    if let Ok(mut health) = world.get::<&mut Health>(target.entity) {
        health.incoming = health.incoming.saturating_add(amount);
    }
}

/// Deal `amount` damage to `target`.
///
/// Health saturates at zero. The hit that takes it to zero starts the
/// death burst and pays the bounty; that happens exactly once because
/// dying targets are no longer live.
pub fn apply_damage(
    world: &World,
    target: &mut Target,
    amount: u32,
    rng: &mut ChaCha8Rng,
    economy: &mut Economy,
    events: &mut Vec<GameEvent>,
) {
    if !target.is_live() {
        return;
    }

    let remaining = {
        let Ok(mut health) = world.get::<&mut Health>(target.entity) else {
            return;
        };
        health.current = health.current.saturating_sub(amount);
        health.current
    };
    target.health = remaining;

    if let Ok(mut flash) = world.get::<&mut DamageFlash>(target.entity) {
        flash.remaining = DAMAGE_FLASH_DURATION;
    }

    if remaining > 0 {
        events.push(GameEvent::EnemyHit {
            enemy: target.serial,
        });
        return;
    }

    if let Ok(mut death) = world.get::<&mut DeathBurst>(target.entity) {
        burst::start(&mut death, target.position, rng);
    }
    let worth = world
        .get::<&Bounty>(target.entity)
        .map(|b| b.worth)
        .unwrap_or(0);
    economy.earn(worth);
    trace!("enemy {} died, +{worth} gold", target.serial);
    events.push(GameEvent::EnemyDied {
        enemy: target.serial,
        worth,
    });
}
