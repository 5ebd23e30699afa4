use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use rampart_core::enums::TileKind;
use rampart_core::types::TileCoord;
use rampart_grid::{trace_route, Grid};

use crate::{generate, GenerateError};

fn level(seed: u64, cols: i32, rows: i32) -> Grid {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    generate(cols, rows, 100.0, &mut rng).unwrap()
}

fn count(grid: &Grid, kind: TileKind) -> usize {
    grid.tiles().iter().filter(|t| t.kind == kind).count()
}

#[test]
fn test_rejects_tiny_grids() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    assert_eq!(
        generate(16, 2, 100.0, &mut rng).unwrap_err(),
        GenerateError::TooSmall { cols: 16, rows: 2 }
    );
    assert!(generate(2, 12, 100.0, &mut rng).is_err());
}

#[test]
fn test_start_and_end_placement() {
    let grid = level(42, 16, 12);
    assert_eq!(grid.start().col, 0);
    assert_eq!(grid.end().col, 15);
    assert_eq!(grid.tile_kind(grid.start()), TileKind::Start);
    assert_eq!(grid.tile_kind(grid.end()), TileKind::End);
    assert_eq!(count(&grid, TileKind::Start), 1);
    assert_eq!(count(&grid, TileKind::End), 1);
    assert_eq!(count(&grid, TileKind::Unassigned), 0);
}

#[test]
fn test_boundary_rows_are_buildable() {
    let grid = level(7, 16, 12);
    for row in [0, grid.rows() - 1] {
        assert!(grid
            .row(row)
            .iter()
            .all(|t| t.kind == TileKind::Buildable));
    }
}

#[test]
fn test_first_column_holds_only_start() {
    let grid = level(99, 10, 8);
    for row in 0..grid.rows() {
        let kind = grid.tile_kind(TileCoord::new(0, row));
        if row == grid.start().row {
            assert_eq!(kind, TileKind::Start);
        } else {
            assert_eq!(kind, TileKind::Buildable);
        }
    }
}

#[test]
fn test_same_seed_same_level() {
    let a = level(12345, 16, 12);
    let b = level(12345, 16, 12);
    assert_eq!(a.tiles(), b.tiles());
}

#[test]
fn test_minimal_grid() {
    let grid = level(3, 3, 3);
    assert_eq!(grid.start(), TileCoord::new(0, 1));
    assert_eq!(grid.end(), TileCoord::new(2, 1));
    assert_eq!(trace_route(&grid).map(|r| r.len()), Some(3));
}

proptest! {
    #[test]
    fn every_interior_row_has_path(seed in any::<u64>(), cols in 3i32..24, rows in 3i32..16) {
        let grid = level(seed, cols, rows);
        for row in 1..rows - 1 {
            prop_assert!(
                grid.row(row).iter().any(|t| t.kind.is_traversable()),
                "row {} has no path", row
            );
        }
    }

    #[test]
    fn route_connects_start_to_end(seed in any::<u64>(), cols in 3i32..24, rows in 3i32..16) {
        let grid = level(seed, cols, rows);
        let route = trace_route(&grid);
        prop_assert!(route.is_some());
        let route = route.unwrap();
        prop_assert_eq!(route[0], grid.start());
        prop_assert_eq!(*route.last().unwrap(), grid.end());
        for pair in route.windows(2) {
            prop_assert_eq!(pair[0].manhattan(pair[1]), 1);
            prop_assert!(pair[1].col >= pair[0].col);
        }
        // The walk covers every path tile: the route is a single strand.
        let traversable = grid.tiles().iter().filter(|t| t.kind.is_traversable()).count();
        prop_assert_eq!(route.len(), traversable);
    }
}
