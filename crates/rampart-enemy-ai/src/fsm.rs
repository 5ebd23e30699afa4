//! Enemy steering state machine.
//!
//! An enemy always moves along its heading. When it enters a new tile and
//! reaches (or passes) that tile's centre along the axis of travel, it snaps
//! to the centre and picks a new heading from the grid. No ECS dependency.

use glam::Vec2;

use rampart_core::types::TileCoord;
use rampart_grid::route::next_direction;
use rampart_grid::Grid;

/// Input to the steering step for a single enemy.
pub struct SteeringContext {
    pub position: Vec2,
    pub direction: Vec2,
    pub last_tile: TileCoord,
}

/// Output of the steering step.
pub struct SteeringUpdate {
    pub position: Vec2,
    pub direction: Vec2,
    pub last_tile: TileCoord,
    /// Snapped to a tile centre this tick.
    pub snapped: bool,
}

/// Whether `position` has reached or passed `center` along `direction`.
pub fn is_past_center(position: Vec2, direction: Vec2, center: Vec2) -> bool {
    (direction.x > 0.0 && position.x >= center.x)
        || (direction.x < 0.0 && position.x <= center.x)
        || (direction.y > 0.0 && position.y >= center.y)
        || (direction.y < 0.0 && position.y <= center.y)
}

/// Evaluate steering for one enemy before it moves this tick.
pub fn steer(ctx: &SteeringContext, grid: &Grid) -> SteeringUpdate {
    let tile = grid.world_to_tile(ctx.position);
    let unchanged = SteeringUpdate {
        position: ctx.position,
        direction: ctx.direction,
        last_tile: ctx.last_tile,
        snapped: false,
    };

    if tile == ctx.last_tile {
        return unchanged;
    }
    let center = grid.tile_center(tile);
    if !is_past_center(ctx.position, ctx.direction, center) {
        return unchanged;
    }

    SteeringUpdate {
        position: center,
        direction: next_direction(grid, tile, ctx.direction),
        last_tile: tile,
        snapped: true,
    }
}

/// Displacement for one tick of movement.
pub fn displacement(direction: Vec2, speed: f32, dt: f32) -> Vec2 {
    direction * speed * dt
}

/// Whether an enemy at `position` has left the grid through the right edge.
pub fn has_reached_end(position: Vec2, radius: f32, grid: &Grid) -> bool {
    position.x >= grid.world_width() + radius
}

/// Spawn point: one tile (plus the enemy's radius) left of the Start tile centre.
pub fn spawn_position(grid: &Grid, radius: f32) -> Vec2 {
    let center = grid.tile_center(grid.start());
    Vec2::new(center.x - (radius + grid.tile_size()), center.y)
}
