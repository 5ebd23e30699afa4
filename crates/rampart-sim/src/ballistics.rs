//! Lead prediction for projectiles.

use glam::Vec2;

use rampart_core::constants::INTERCEPT_EPSILON;

/// Point where a projectile fired now from `shooter` at `projectile_speed`
/// meets a target at `target` moving with constant `velocity`.
///
/// Solves `|target + velocity*t - shooter| = projectile_speed * t` for the
/// smallest non-negative `t`. Returns `None` when the quadratic is
/// degenerate, has no real roots, or both roots lie in the past.
pub fn predict_intercept(
    shooter: Vec2,
    target: Vec2,
    velocity: Vec2,
    projectile_speed: f32,
) -> Option<Vec2> {
    let d = target - shooter;
    let a = velocity.dot(velocity) - projectile_speed * projectile_speed;
    let b = 2.0 * d.dot(velocity);
    let c = d.dot(d);

    if a.abs() < INTERCEPT_EPSILON {
        return None;
    }
    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }

    let root = discriminant.sqrt();
    let t1 = (-b - root) / (2.0 * a);
    let t2 = (-b + root) / (2.0 * a);
    let t = match (t1 >= 0.0, t2 >= 0.0) {
        (true, true) => t1.min(t2),
        (true, false) => t1,
        (false, true) => t2,
        (false, false) => return None,
    };

    Some(target + velocity * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stationary_target_is_exact() {
        let target = Vec2::new(300.0, -40.0);
        let aim = predict_intercept(Vec2::new(10.0, 20.0), target, Vec2::ZERO, 600.0);
        assert_eq!(aim, Some(target));
    }

    #[test]
    fn test_crossing_target_leads() {
        let shooter = Vec2::ZERO;
        let target = Vec2::new(0.0, 200.0);
        let velocity = Vec2::new(60.0, 0.0);
        let aim = predict_intercept(shooter, target, velocity, 600.0).unwrap();
        assert!(aim.x > 0.0);
        assert_eq!(aim.y, 200.0);

        // Projectile and target arrive at the aim point together.
        let t_projectile = aim.distance(shooter) / 600.0;
        let t_target = (aim.x - target.x) / velocity.x;
        assert!((t_projectile - t_target).abs() < 1e-3);
    }

    #[test]
    fn test_receding_fast_target_has_no_solution() {
        let aim = predict_intercept(
            Vec2::ZERO,
            Vec2::new(100.0, 0.0),
            Vec2::new(100.0, 0.0),
            50.0,
        );
        assert_eq!(aim, None);
    }

    #[test]
    fn test_equal_speeds_are_degenerate() {
        let aim = predict_intercept(
            Vec2::ZERO,
            Vec2::new(100.0, 0.0),
            Vec2::new(0.0, 300.0),
            300.0,
        );
        assert_eq!(aim, None);
    }
}
