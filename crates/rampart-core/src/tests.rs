use glam::Vec2;

use crate::commands::{InputEvent, PlayerCommand};
use crate::enums::*;
use crate::error::CommandError;
use crate::events::GameEvent;
use crate::registry;
use crate::state::GameSnapshot;
use crate::types::*;

#[test]
fn test_player_command_serde_tagged() {
    let cmd = PlayerCommand::BuildTower {
        kind: TowerKind::Splash,
        tile: TileCoord::new(3, 4),
    };
    let json = serde_json::to_string(&cmd).unwrap();
    assert!(json.contains("\"type\":\"BuildTower\""));
    let back: PlayerCommand = serde_json::from_str(&json).unwrap();
    assert_eq!(cmd, back);
}

#[test]
fn test_input_event_serde() {
    let ev = InputEvent::PrimaryReleased {
        world: Vec2::new(12.5, 40.0),
    };
    let json = serde_json::to_string(&ev).unwrap();
    let back: InputEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(ev, back);
}

#[test]
fn test_game_event_serde() {
    let ev = GameEvent::TowerSold {
        tower: TowerId(7),
        refund: 15,
    };
    let json = serde_json::to_string(&ev).unwrap();
    let back: GameEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(ev, back);
}

#[test]
fn test_snapshot_default_serializes() {
    let snap = GameSnapshot::default();
    let json = serde_json::to_string(&snap).unwrap();
    let back: GameSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back.phase, GamePhase::Active);
    assert!(back.enemies.is_empty());
}

#[test]
fn test_tile_kind_traversable() {
    assert!(TileKind::Start.is_traversable());
    assert!(TileKind::Path.is_traversable());
    assert!(TileKind::End.is_traversable());
    assert!(!TileKind::Buildable.is_traversable());
    assert!(!TileKind::Unassigned.is_traversable());
}

#[test]
fn test_tile_coord_neighbours() {
    let c = TileCoord::new(2, 5);
    assert_eq!(c.right(), TileCoord::new(3, 5));
    assert_eq!(c.below(), TileCoord::new(2, 6));
    assert_eq!(c.above(), TileCoord::new(2, 4));
    assert_eq!(c.manhattan(TileCoord::new(4, 4)), 3);
    assert_eq!(c.to_string(), "(2, 5)");
}

#[test]
fn test_interpolated_lerp() {
    let mut p = Interpolated::at(Vec2::new(10.0, 0.0));
    p.advance(Vec2::new(10.0, 0.0));
    assert_eq!(p.previous, Vec2::new(10.0, 0.0));
    assert_eq!(p.current, Vec2::new(20.0, 0.0));
    assert_eq!(p.lerp(0.0), Vec2::new(10.0, 0.0));
    assert_eq!(p.lerp(0.5), Vec2::new(15.0, 0.0));
    assert_eq!(p.lerp(1.0), Vec2::new(20.0, 0.0));
    // Factor is clamped
    assert_eq!(p.lerp(3.0), Vec2::new(20.0, 0.0));
}

#[test]
fn test_sim_time_advance() {
    let mut t = SimTime::default();
    for _ in 0..60 {
        t.advance();
    }
    assert_eq!(t.tick, 60);
    assert!((t.elapsed_secs - 1.0).abs() < 1e-4);
}

#[test]
fn test_registry_tables_are_consistent() {
    for meta in registry::all() {
        assert!(!meta.levels.is_empty(), "{} has no levels", meta.name);
        assert_eq!(registry::metadata(meta.kind).kind, meta.kind);
        for pair in meta.levels.windows(2) {
            assert!(pair[1].range >= pair[0].range);
            assert!(pair[1].fire_rate <= pair[0].fire_rate);
        }
        for attrs in meta.levels {
            assert!(attrs.sell_cost < attrs.buy_cost);
            assert!(attrs.fire_rate > 0.0);
        }
    }
}

#[test]
fn test_registry_bullet_level_zero() {
    let attrs = registry::attributes(TowerKind::Bullet, 0);
    assert_eq!(attrs.buy_cost, 20);
    assert_eq!(attrs.sell_cost, 5);
    assert_eq!(attrs.damage, 1);
    assert_eq!(attrs.range, 200.0);
    assert_eq!(attrs.fire_rate, 1.25);
}

#[test]
fn test_registry_attributes_clamp_level() {
    let max = registry::metadata(TowerKind::Slow).max_level();
    assert_eq!(max, 2);
    assert_eq!(
        registry::attributes(TowerKind::Slow, 200),
        registry::attributes(TowerKind::Slow, max)
    );
    assert!(registry::metadata(TowerKind::Slow).level(max + 1).is_none());
}

#[test]
fn test_command_error_messages() {
    let err = CommandError::InsufficientGold {
        needed: 50,
        available: 10,
    };
    assert_eq!(err.to_string(), "not enough gold: need 50, have 10");
    let err = CommandError::MaxLevel(TowerId(3));
    assert_eq!(err.to_string(), "tower #3 is already at max level");
}
