//! Cosmetic death burst.

use glam::Vec2;
use rand::Rng;

use rampart_core::components::{DeathBurst, DeathParticle};
use rampart_core::constants::*;
use rampart_core::types::Interpolated;

/// Start a burst of particles flying out of `origin` in random directions.
pub fn start<R: Rng + ?Sized>(burst: &mut DeathBurst, origin: Vec2, rng: &mut R) {
    let count = rng.gen_range(DEATH_PARTICLES_MIN..=DEATH_PARTICLES_MAX);
    burst.started = true;
    burst.particles = (0..count)
        .map(|_| {
            let angle = rng.gen_range(0.0..std::f32::consts::TAU);
            let speed = rng.gen_range(DEATH_PARTICLE_SPEED_MIN..=DEATH_PARTICLE_SPEED_MAX);
            DeathParticle {
                position: Interpolated::at(origin),
                velocity: Vec2::from_angle(angle) * speed,
                radius: rng.gen_range(DEATH_PARTICLE_RADIUS_MIN..=DEATH_PARTICLE_RADIUS_MAX),
                lifetime: rng
                    .gen_range(DEATH_PARTICLE_LIFETIME_MIN..=DEATH_PARTICLE_LIFETIME_MAX),
                elapsed: 0.0,
            }
        })
        .collect();
}

/// Move and age the particles; expired ones are dropped.
pub fn tick(burst: &mut DeathBurst, dt: f32) {
    for p in &mut burst.particles {
        p.elapsed += dt;
        p.position.advance(p.velocity * dt);
    }
    burst.particles.retain(|p| p.elapsed < p.lifetime);
}

/// The burst ran and every particle has expired.
pub fn is_finished(burst: &DeathBurst) -> bool {
    burst.started && burst.particles.is_empty()
}

/// Remaining opacity of a particle in [0, 1].
pub fn alpha(particle: &DeathParticle) -> f32 {
    (1.0 - particle.elapsed / particle.lifetime).clamp(0.0, 1.0)
}
