//! Tower update: cooldowns, projectiles, targeting, firing, cosmetic rings
//! and the upgrade/sale requests placed by the player.
//!
//! Towers run in ascending `TowerId` order. Each one:
//! 1. advances its cooldown,
//! 2. purges projectiles that hit on the previous tick,
//! 3. moves the remaining projectiles and resolves impacts,
//! 4. fires if ready and a target is in range,
//! 5. ages its explosion/pulse rings.
//!
//! Pending upgrade and sale requests are applied right after the tower's
//! own update.

use std::collections::BTreeMap;

use glam::Vec2;
use hecs::{Entity, World};
use log::{debug, trace};
use rand_chacha::ChaCha8Rng;

use rampart_core::components::*;
use rampart_core::constants::*;
use rampart_core::enums::{RingKind, TowerKind};
use rampart_core::events::GameEvent;
use rampart_core::registry::{self, TowerAttributes};
use rampart_core::types::{Interpolated, TowerId};
use rampart_enemy_ai::status;
use rampart_grid::Grid;

use crate::ballistics::predict_intercept;
use crate::economy::Economy;
use crate::systems::combat::{self, Target};

/// Mutable simulation state the tower pass writes to.
pub struct CombatContext<'a> {
    pub rng: &'a mut ChaCha8Rng,
    pub economy: &'a mut Economy,
    pub events: &'a mut Vec<GameEvent>,
}

/// Run one tick for every tower.
pub fn run(
    world: &World,
    towers: &BTreeMap<TowerId, Entity>,
    grid: &Grid,
    ctx: &mut CombatContext<'_>,
    dt: f32,
) {
    let mut targets = combat::sample_targets(world);

    for &entity in towers.values() {
        let Ok(mut tower) = world.get::<&mut Tower>(entity) else {
            continue;
        };
        if tower.sold {
            continue;
        }
        update_tower(world, &mut tower, &mut targets, grid, ctx, dt);
        apply_requests(&mut tower, ctx.economy, ctx.events);
    }
}

fn update_tower(
    world: &World,
    tower: &mut Tower,
    targets: &mut [Target],
    grid: &Grid,
    ctx: &mut CombatContext<'_>,
    dt: f32,
) {
    let attrs = *registry::attributes(tower.kind, tower.level);

    tower.time_since_last_shot += dt;
    tower.projectiles.retain(|p| !p.hit);

    advance_projectiles(world, tower, &attrs, targets, grid, ctx, dt);

    if tower.time_since_last_shot >= attrs.fire_rate {
        match tower.kind {
            TowerKind::Bullet | TowerKind::Splash => fire_projectile(world, tower, &attrs, targets, ctx),
            TowerKind::Slow => pulse(world, tower, &attrs, targets, ctx),
        }
    }

    for ring in &mut tower.rings {
        ring.elapsed += dt;
    }
    tower.rings.retain(|r| r.elapsed < r.duration);
}

// --- Projectiles ---

fn in_bounds(grid: &Grid, point: Vec2) -> bool {
    let m = PROJECTILE_OOB_MARGIN;
    point.x >= -m
        && point.y >= -m
        && point.x <= grid.world_width() + m
        && point.y <= grid.world_height() + m
}

fn advance_projectiles(
    world: &World,
    tower: &mut Tower,
    attrs: &TowerAttributes,
    targets: &mut [Target],
    grid: &Grid,
    ctx: &mut CombatContext<'_>,
    dt: f32,
) {
    let id = tower.id;
    let mut rings = Vec::new();

    for projectile in &mut tower.projectiles {
        projectile
            .position
            .advance(projectile.direction * projectile.speed * dt);
        let point = projectile.position.current;

        let contact = targets
            .iter()
            .position(|t| t.is_live() && point.distance(t.position) <= t.radius);

        match projectile.payload {
            Payload::Direct { damage } => {
                if let Some(i) = contact {
                    combat::apply_damage(world, &mut targets[i], damage, ctx.rng, ctx.economy, ctx.events);
                    projectile.hit = true;
                }
            }
            Payload::Splash { damage, radius } => {
                let spent = point.distance(projectile.origin) >= projectile.max_travel;
                if spent || contact.is_some() {
                    let hits = combat::within(targets, point, radius);
                    for &i in &hits {
                        combat::apply_damage(world, &mut targets[i], damage, ctx.rng, ctx.economy, ctx.events);
                    }
                    rings.push(EffectRing {
                        kind: RingKind::Explosion,
                        center: point,
                        max_radius: attrs.splash_radius,
                        elapsed: 0.0,
                        duration: EXPLOSION_DURATION,
                    });
                    ctx.events.push(GameEvent::SplashExploded {
                        tower: id,
                        enemies_hit: hits.len() as u32,
                    });
                    projectile.hit = true;
                }
            }
        }
    }

    // Splash shells always detonate, at the latest once `max_travel` is spent.
    tower.projectiles.retain(|p| {
        p.hit || matches!(p.payload, Payload::Splash { .. }) || in_bounds(grid, p.position.current)
    });
    tower.rings.extend(rings);
}

fn fire_projectile(
    world: &World,
    tower: &mut Tower,
    attrs: &TowerAttributes,
    targets: &mut [Target],
    ctx: &mut CombatContext<'_>,
) {
    let Some(i) = combat::closest_in_range(targets, tower.position, attrs.range) else {
        return;
    };
    let target = targets[i];

    let (speed, radius, payload) = match tower.kind {
        TowerKind::Splash => (
            SPLASH_SHELL_SPEED,
            SPLASH_SHELL_RADIUS,
            Payload::Splash {
                damage: attrs.damage,
                radius: attrs.splash_radius,
            },
        ),
        _ => (
            BULLET_SPEED,
            BULLET_RADIUS,
            Payload::Direct {
                damage: attrs.damage,
            },
        ),
    };

    let aim = predict_intercept(tower.position, target.position, target.velocity, speed)
        .unwrap_or(target.position);
    // Never shoot at enemies still walking in from off the map.
    if aim.x <= 0.0 {
        return;
    }
    let Some(direction) = (aim - tower.position).try_normalize() else {
        return;
    };

    tower.projectiles.push(Projectile {
        position: Interpolated::at(tower.position),
        direction,
        speed,
        radius,
        origin: tower.position,
        max_travel: attrs.range,
        payload,
        hit: false,
    });
    tower.time_since_last_shot = 0.0;

    match payload {
        Payload::Direct { damage } => {
            combat::commit_incoming(world, &mut targets[i], damage);
            ctx.events.push(GameEvent::BulletFired { tower: tower.id });
        }
        Payload::Splash { damage, radius } => {
            for j in combat::within(targets, target.position, radius) {
                combat::commit_incoming(world, &mut targets[j], damage);
            }
            ctx.events.push(GameEvent::SplashFired { tower: tower.id });
        }
    }
    trace!(
        "tower {} fired at enemy {} aiming ({:.1}, {:.1})",
        tower.id,
        target.serial,
        aim.x,
        aim.y
    );
}

// --- Slow pulse ---

fn pulse(
    world: &World,
    tower: &mut Tower,
    attrs: &TowerAttributes,
    targets: &[Target],
    ctx: &mut CombatContext<'_>,
) {
    let affected = combat::within(targets, tower.position, attrs.range);
    if affected.is_empty() {
        return;
    }

    for &i in &affected {
        if let Ok(mut effects) = world.get::<&mut StatusEffects>(targets[i].entity) {
            status::apply(&mut effects, status::slow(attrs.slow_amount, attrs.slow_duration));
        }
    }

    tower.time_since_last_shot = 0.0;
    tower.rings.push(EffectRing {
        kind: RingKind::Pulse,
        center: tower.position,
        max_radius: attrs.range,
        elapsed: 0.0,
        duration: PULSE_DURATION,
    });
    ctx.events.push(GameEvent::SlowPulse {
        tower: tower.id,
        enemies_slowed: affected.len() as u32,
    });
}

// --- Player requests ---

/// Apply a pending upgrade or sale. Gold is re-checked here since other
/// spending may have happened since the request was accepted.
pub fn apply_requests(tower: &mut Tower, economy: &mut Economy, events: &mut Vec<GameEvent>) {
    if std::mem::take(&mut tower.upgrade_requested) {
        let next = registry::metadata(tower.kind).level(tower.level + 1);
        match next {
            Some(attrs) if economy.spend(attrs.buy_cost).is_ok() => {
                tower.level += 1;
                events.push(GameEvent::TowerUpgraded {
                    tower: tower.id,
                    level: tower.level,
                });
            }
            Some(attrs) => debug!(
                "upgrade of tower {} dropped: needs {} gold, have {}",
                tower.id, attrs.buy_cost, economy.gold
            ),
            None => debug!("upgrade of tower {} dropped: already at max level", tower.id),
        }
    }

    if std::mem::take(&mut tower.sale_requested) && !tower.sold {
        let refund = registry::attributes(tower.kind, tower.level).sell_cost;
        economy.earn(refund);
        tower.sold = true;
        tower.selected = false;
        events.push(GameEvent::TowerSold {
            tower: tower.id,
            refund,
        });
    }
}
