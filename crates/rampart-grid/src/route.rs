//! Route following over the tile map.
//!
//! Enemies do not store an explicit route. At every tile centre they pick
//! the next heading with a fixed priority (right, then down, then up, never
//! reversing vertically), which reproduces the generated path exactly.

use glam::Vec2;

use rampart_core::types::TileCoord;

use crate::grid::Grid;

/// Screen-space headings (y grows downward).
pub const RIGHT: Vec2 = Vec2::new(1.0, 0.0);
pub const DOWN: Vec2 = Vec2::new(0.0, 1.0);
pub const UP: Vec2 = Vec2::new(0.0, -1.0);

/// Heading to take when standing on the centre of `tile` while moving
/// along `heading`.
pub fn next_direction(grid: &Grid, tile: TileCoord, heading: Vec2) -> Vec2 {
    let moving_up = heading.y < 0.0;
    let moving_down = heading.y > 0.0;

    if grid.is_traversable(tile.right()) {
        RIGHT
    } else if !moving_up && grid.is_traversable(tile.below()) {
        DOWN
    } else if !moving_down && grid.is_traversable(tile.above()) {
        UP
    } else {
        heading
    }
}

/// Step of one tile along an axis-aligned heading.
fn step(tile: TileCoord, heading: Vec2) -> TileCoord {
    tile.offset(heading.x.round() as i32, heading.y.round() as i32)
}

/// Walk from the Start tile to the End tile using [`next_direction`].
///
/// Returns every visited tile in order, or `None` if the walk leaves the
/// route or revisits a tile before reaching the End.
pub fn trace_route(grid: &Grid) -> Option<Vec<TileCoord>> {
    let limit = (grid.cols() * grid.rows()) as usize;
    let mut route = vec![grid.start()];
    let mut tile = grid.start();
    let mut heading = RIGHT;

    while tile != grid.end() {
        heading = next_direction(grid, tile, heading);
        tile = step(tile, heading);
        if !grid.is_traversable(tile) || route.len() >= limit || route.contains(&tile) {
            return None;
        }
        route.push(tile);
    }
    Some(route)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_follows_bends() {
        let grid = Grid::from_ascii(
            "
            ......
            S#..#E
            .#..#.
            .####.
            ",
            10.0,
        )
        .unwrap();
        let route = trace_route(&grid).unwrap();
        assert_eq!(route.first(), Some(&grid.start()));
        assert_eq!(route.last(), Some(&grid.end()));
        assert_eq!(route.len(), 10);
        for pair in route.windows(2) {
            assert_eq!(pair[0].manhattan(pair[1]), 1);
        }
    }

    #[test]
    fn test_right_has_priority() {
        let grid = Grid::from_ascii(
            "
            .#.
            S#E
            .#.
            ",
            10.0,
        )
        .unwrap();
        let dir = next_direction(&grid, TileCoord::new(1, 1), RIGHT);
        assert_eq!(dir, RIGHT);
    }

    #[test]
    fn test_no_vertical_reversal() {
        // Moving up at (1, 1): below is path but must not be chosen.
        let grid = Grid::from_ascii(
            "
            .#.
            .#.
            S#E
            ",
            10.0,
        )
        .unwrap();
        let dir = next_direction(&grid, TileCoord::new(1, 1), UP);
        assert_eq!(dir, UP);
        // Dead end keeps the current heading.
        let dir = next_direction(&grid, TileCoord::new(1, 0), UP);
        assert_eq!(dir, UP);
    }

    #[test]
    fn test_broken_route_is_none() {
        let grid = Grid::from_ascii(
            "
            S#.#E
            ",
            10.0,
        )
        .unwrap();
        assert!(trace_route(&grid).is_none());
    }
}
