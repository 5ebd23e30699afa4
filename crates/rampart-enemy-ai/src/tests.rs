#[cfg(test)]
mod tests {
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use rampart_core::components::{DeathBurst, StatusEffects};
    use rampart_core::constants::*;
    use rampart_core::types::TileCoord;
    use rampart_grid::route::{DOWN, RIGHT, UP};
    use rampart_grid::Grid;

    use crate::fsm::{has_reached_end, is_past_center, spawn_position, steer, SteeringContext};
    use crate::{burst, profiles, status};

    fn bend_grid() -> Grid {
        Grid::from_ascii(
            "
            .....
            S#.#E
            .###.
            ",
            100.0,
        )
        .unwrap()
    }

    // --- Steering ---

    #[test]
    fn test_past_center_sign_check() {
        let center = Vec2::new(150.0, 150.0);
        assert!(is_past_center(Vec2::new(150.0, 120.0), RIGHT, center));
        assert!(is_past_center(Vec2::new(151.0, 150.0), RIGHT, center));
        assert!(!is_past_center(Vec2::new(149.0, 150.0), RIGHT, center));
        assert!(is_past_center(Vec2::new(150.0, 149.0), UP, center));
        assert!(!is_past_center(Vec2::new(150.0, 149.0), DOWN, center));
    }

    #[test]
    fn test_steer_waits_for_center() {
        let grid = bend_grid();
        let ctx = SteeringContext {
            position: Vec2::new(120.0, 150.0),
            direction: RIGHT,
            last_tile: TileCoord::new(0, 1),
        };
        let update = steer(&ctx, &grid);
        assert!(!update.snapped);
        assert_eq!(update.direction, RIGHT);
        assert_eq!(update.last_tile, TileCoord::new(0, 1));
    }

    #[test]
    fn test_steer_snaps_and_turns_down() {
        let grid = bend_grid();
        let ctx = SteeringContext {
            position: Vec2::new(153.0, 150.0),
            direction: RIGHT,
            last_tile: TileCoord::new(0, 1),
        };
        let update = steer(&ctx, &grid);
        assert!(update.snapped);
        assert_eq!(update.position, Vec2::new(150.0, 150.0));
        assert_eq!(update.direction, DOWN);
        assert_eq!(update.last_tile, TileCoord::new(1, 1));
    }

    #[test]
    fn test_steer_ignores_tile_already_visited() {
        let grid = bend_grid();
        let ctx = SteeringContext {
            position: Vec2::new(160.0, 150.0),
            direction: DOWN,
            last_tile: TileCoord::new(1, 1),
        };
        let update = steer(&ctx, &grid);
        assert!(!update.snapped);
        assert_eq!(update.direction, DOWN);
    }

    #[test]
    fn test_spawn_and_end_positions() {
        let grid = bend_grid();
        let spawn = spawn_position(&grid, ENEMY_RADIUS);
        assert_eq!(spawn, Vec2::new(50.0 - 115.0, 150.0));
        assert_eq!(grid.world_to_tile(spawn), TileCoord::new(-1, 1));

        assert!(!has_reached_end(Vec2::new(514.0, 150.0), 15.0, &grid));
        assert!(has_reached_end(Vec2::new(515.0, 150.0), 15.0, &grid));
    }

    #[test]
    fn test_walk_reaches_end() {
        let grid = bend_grid();
        let dt = 1.0 / 60.0;
        let mut position = spawn_position(&grid, ENEMY_RADIUS);
        let mut direction = RIGHT;
        let mut last_tile = grid.world_to_tile(position);
        let mut visited = vec![];
        for _ in 0..2000 {
            let update = steer(
                &SteeringContext {
                    position,
                    direction,
                    last_tile,
                },
                &grid,
            );
            if update.snapped {
                visited.push(update.last_tile);
            }
            position = update.position + update.direction * 120.0 * dt;
            direction = update.direction;
            last_tile = update.last_tile;
            if has_reached_end(position, ENEMY_RADIUS, &grid) {
                break;
            }
        }
        assert!(has_reached_end(position, ENEMY_RADIUS, &grid));
        assert_eq!(
            visited,
            vec![
                TileCoord::new(0, 1),
                TileCoord::new(1, 1),
                TileCoord::new(1, 2),
                TileCoord::new(2, 2),
                TileCoord::new(3, 2),
                TileCoord::new(3, 1),
                TileCoord::new(4, 1),
            ]
        );
    }

    // --- Status effects ---

    #[test]
    fn test_slow_scales_speed() {
        let mut effects = StatusEffects::default();
        status::apply(&mut effects, status::slow(0.3, 2.0));
        let mods = status::modifiers(&effects);
        assert!((60.0 * mods.speed_factor - 42.0).abs() < 1e-4);
        assert_eq!(mods.overlay, Some(SLOW_OVERLAY));
    }

    #[test]
    fn test_stronger_slow_replaces_weaker() {
        let mut effects = StatusEffects::default();
        status::apply(&mut effects, status::slow(0.3, 2.0));
        status::apply(&mut effects, status::slow(0.5, 2.0));
        assert_eq!(effects.active.len(), 1);
        let mods = status::modifiers(&effects);
        assert!((60.0 * mods.speed_factor - 30.0).abs() < 1e-4);
    }

    #[test]
    fn test_reapply_refreshes_timer() {
        let mut effects = StatusEffects::default();
        status::apply(&mut effects, status::slow(0.3, 1.0));
        for _ in 0..30 {
            status::tick(&mut effects, 1.0 / 60.0);
        }
        assert!(effects.active[0].elapsed > 0.4);

        status::apply(&mut effects, status::slow(0.3, 1.5));
        assert_eq!(effects.active.len(), 1);
        assert_eq!(effects.active[0].elapsed, 0.0);
        assert_eq!(effects.active[0].duration, 1.5);
    }

    #[test]
    fn test_effect_expires() {
        let mut effects = StatusEffects::default();
        status::apply(&mut effects, status::slow(0.4, 0.5));
        let mut mods = status::modifiers(&effects);
        for _ in 0..31 {
            mods = status::tick(&mut effects, 1.0 / 60.0);
        }
        assert!(effects.active.is_empty());
        assert_eq!(mods.speed_factor, 1.0);
        assert_eq!(mods.overlay, None);
    }

    // --- Profiles ---

    #[test]
    fn test_worth_formula_and_clamp() {
        assert_eq!(profiles::worth(5, 61.0), 1);
        assert_eq!(profiles::worth(50, 90.0), 2);
        assert_eq!(profiles::worth(1000, 500.0), ENEMY_MAX_WORTH);
        assert_eq!(profiles::worth(0, 0.0), ENEMY_MIN_WORTH);
    }

    #[test]
    fn test_profile_scales_with_wave() {
        let first = profiles::for_wave(1, 0);
        let later = profiles::for_wave(10, 2);
        assert_eq!(first.speed, ENEMY_BASE_SPEED + SPEED_PER_WAVE);
        assert_eq!(first.health, ENEMY_BASE_HEALTH);
        assert!(later.speed > first.speed);
        assert_eq!(later.health, ENEMY_BASE_HEALTH + 2);
    }

    // --- Death burst ---

    #[test]
    fn test_burst_lifecycle() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let mut b = DeathBurst::default();
        assert!(!burst::is_finished(&b));

        burst::start(&mut b, Vec2::new(10.0, 10.0), &mut rng);
        let n = b.particles.len() as u32;
        assert!((DEATH_PARTICLES_MIN..=DEATH_PARTICLES_MAX).contains(&n));
        for p in &b.particles {
            assert!(p.lifetime >= DEATH_PARTICLE_LIFETIME_MIN);
            assert!(p.lifetime <= DEATH_PARTICLE_LIFETIME_MAX);
            assert_eq!(burst::alpha(p), 1.0);
        }

        burst::tick(&mut b, 0.2);
        assert!(!burst::is_finished(&b));
        assert!(b.particles.iter().all(|p| p.position.current != Vec2::new(10.0, 10.0)));

        burst::tick(&mut b, 0.5);
        assert!(burst::is_finished(&b));
    }
}
