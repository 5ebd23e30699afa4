//! Cleanup system: removes enemies that arrived or finished dying, and
//! towers that were sold this tick.

use std::collections::BTreeMap;

use hecs::{Entity, World};
use log::info;

use rampart_core::components::{DeathBurst, Enemy, Motion, Tower};
use rampart_core::events::GameEvent;
use rampart_core::types::TowerId;
use rampart_enemy_ai::burst;
use rampart_grid::Grid;

use crate::economy::Economy;

/// Remove dead, arrived and sold entities.
/// Entities are collected into `despawn_buffer` first, then despawned.
pub fn run(
    world: &mut World,
    grid: &mut Grid,
    towers: &mut BTreeMap<TowerId, Entity>,
    economy: &mut Economy,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();

    // Enemies that walked off the map cost a life.
    for (entity, (_enemy, motion, death)) in
        world.query_mut::<(&Enemy, &Motion, &DeathBurst)>()
    {
        if motion.reached_end && !death.started {
            let lives_remaining = economy.lose_life();
            info!("enemy reached the end, {lives_remaining} lives left");
            events.push(GameEvent::LifeLost { lives_remaining });
            despawn_buffer.push(entity);
        } else if burst::is_finished(death) {
            despawn_buffer.push(entity);
        }
    }

    // Sold towers free their tile.
    for (entity, tower) in world.query_mut::<&Tower>() {
        if tower.sold {
            grid.clear_tower(tower.id);
            towers.remove(&tower.id);
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
