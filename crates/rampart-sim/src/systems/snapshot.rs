//! Snapshot system: queries the ECS world and builds a complete GameSnapshot.
//!
//! Read-only: it never modifies the world.

use hecs::World;

use rampart_core::components::*;
use rampart_core::enums::GamePhase;
use rampart_core::events::GameEvent;
use rampart_core::registry;
use rampart_core::state::*;
use rampart_core::types::{Interpolated, SimTime};
use rampart_enemy_ai::{burst, status};

use crate::economy::Economy;
use crate::systems::wave_director::WaveDirector;

/// Build a complete GameSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    economy: &Economy,
    waves: &WaveDirector,
    events: Vec<GameEvent>,
) -> GameSnapshot {
    let towers = collect_towers(world);
    let (projectiles, rings) = collect_tower_effects(&towers);

    GameSnapshot {
        time: *time,
        phase,
        economy: economy.view(),
        wave: waves.view(),
        enemies: build_enemies(world),
        towers: towers.iter().map(build_tower).collect(),
        projectiles,
        rings,
        events,
    }
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(
            &Enemy,
            &Interpolated,
            &Health,
            &StatusEffects,
            &DamageFlash,
            &DeathBurst,
        )>()
        .iter()
        .map(|(_, (enemy, position, health, effects, flash, death))| EnemyView {
            serial: enemy.serial,
            position: *position,
            radius: enemy.radius,
            health: health.current,
            max_health: health.max,
            overlay: status::modifiers(effects).overlay,
            flashing: flash.remaining > 0.0,
            dying: death.started,
            particles: death
                .particles
                .iter()
                .map(|p| ParticleView {
                    position: p.position,
                    radius: p.radius,
                    alpha: burst::alpha(p),
                })
                .collect(),
        })
        .collect();
    enemies.sort_by_key(|e| e.serial);
    enemies
}

fn collect_towers(world: &World) -> Vec<Tower> {
    let mut towers: Vec<Tower> = world
        .query::<&Tower>()
        .iter()
        .filter(|(_, t)| !t.sold)
        .map(|(_, t)| t.clone())
        .collect();
    towers.sort_by_key(|t| t.id);
    towers
}

fn build_tower(tower: &Tower) -> TowerView {
    let meta = registry::metadata(tower.kind);
    let attrs = registry::attributes(tower.kind, tower.level);
    TowerView {
        id: tower.id,
        kind: tower.kind,
        tile: tower.tile,
        position: tower.position,
        level: tower.level,
        max_level: meta.max_level(),
        range: attrs.range,
        selected: tower.selected,
        upgrade_cost: meta.level(tower.level + 1).map(|a| a.buy_cost),
        sell_value: attrs.sell_cost,
    }
}

fn collect_tower_effects(towers: &[Tower]) -> (Vec<ProjectileView>, Vec<RingView>) {
    let mut projectiles = Vec::new();
    let mut rings = Vec::new();
    for tower in towers {
        projectiles.extend(tower.projectiles.iter().map(|p| ProjectileView {
            owner: tower.id,
            position: p.position,
            radius: p.radius,
            hit: p.hit,
        }));
        rings.extend(tower.rings.iter().map(|r| {
            let t = (r.elapsed / r.duration).clamp(0.0, 1.0);
            RingView {
                kind: r.kind,
                center: r.center,
                radius: r.max_radius * t,
                alpha: 1.0 - t,
            }
        }));
    }
    (projectiles, rings)
}
