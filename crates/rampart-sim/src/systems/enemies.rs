//! Enemy update: steering, status effects, hit flash, death burst and
//! movement along the path.

use hecs::World;

use rampart_core::components::*;
use rampart_core::types::Interpolated;
use rampart_enemy_ai::fsm::{self, SteeringContext};
use rampart_enemy_ai::{burst, status};
use rampart_grid::Grid;

/// Run one tick for every enemy.
pub fn run(world: &mut World, grid: &Grid, dt: f32) {
    for (_entity, (enemy, position, motion, health, effects, flash, death)) in world.query_mut::<(
        &Enemy,
        &mut Interpolated,
        &mut Motion,
        &mut Health,
        &mut StatusEffects,
        &mut DamageFlash,
        &mut DeathBurst,
    )>() {
        burst::tick(death, dt);
        flash.remaining = (flash.remaining - dt).max(0.0);

        // Dying enemies stay put until the burst is over.
        if death.started {
            position.previous = position.current;
            continue;
        }

        let steering = fsm::steer(
            &SteeringContext {
                position: position.current,
                direction: motion.direction,
                last_tile: motion.last_tile,
            },
            grid,
        );
        position.current = steering.position;
        motion.direction = steering.direction;
        motion.last_tile = steering.last_tile;

        let modifiers = status::tick(effects, dt);
        motion.current_speed = motion.base_speed * modifiers.speed_factor;
        health.incoming = 0;

        position.advance(fsm::displacement(motion.direction, motion.current_speed, dt));
        if fsm::has_reached_end(position.current, enemy.radius, grid) {
            motion.reached_end = true;
        }
    }
}
