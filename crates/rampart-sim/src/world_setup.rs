//! Entity spawn factories.
//!
//! Creates enemy and tower entities with their component bundles.

use hecs::World;

use rampart_core::components::*;
use rampart_core::enums::TowerKind;
use rampart_core::types::{Interpolated, TileCoord, TowerId};
use rampart_enemy_ai::fsm;
use rampart_enemy_ai::profiles::EnemyProfile;
use rampart_grid::route::RIGHT;
use rampart_grid::Grid;

/// Spawn an enemy just left of the Start tile, heading right.
pub fn spawn_enemy(
    world: &mut World,
    grid: &Grid,
    serial: u32,
    profile: &EnemyProfile,
) -> hecs::Entity {
    let position = fsm::spawn_position(grid, profile.radius);

    world.spawn((
        Enemy {
            serial,
            radius: profile.radius,
        },
        Interpolated::at(position),
        Motion {
            direction: RIGHT,
            base_speed: profile.speed,
            current_speed: profile.speed,
            last_tile: grid.world_to_tile(position),
            reached_end: false,
        },
        Health {
            current: profile.health,
            max: profile.health,
            incoming: 0,
        },
        Bounty {
            worth: profile.worth,
        },
        StatusEffects::default(),
        DamageFlash::default(),
        DeathBurst::default(),
    ))
}

/// Spawn a level-0 tower centred on `tile`. The caller claims the tile.
pub fn spawn_tower(
    world: &mut World,
    grid: &Grid,
    id: TowerId,
    kind: TowerKind,
    tile: TileCoord,
) -> hecs::Entity {
    world.spawn((Tower {
        id,
        kind,
        tile,
        position: grid.tile_center(tile),
        level: 0,
        time_since_last_shot: 0.0,
        selected: false,
        upgrade_requested: false,
        sale_requested: false,
        sold: false,
        projectiles: Vec::new(),
        rings: Vec::new(),
    },))
}
