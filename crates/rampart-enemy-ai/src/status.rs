//! Status-effect policy: refresh on reapply, worst slow wins.

use rampart_core::components::{StatusEffect, StatusEffects};
use rampart_core::constants::SLOW_OVERLAY;
use rampart_core::enums::StatusKind;
use rampart_core::types::Rgba;

/// A fresh slow effect.
pub fn slow(amount: f32, duration: f32) -> StatusEffect {
    StatusEffect {
        kind: StatusKind::Slow,
        amount,
        duration,
        elapsed: 0.0,
        overlay: SLOW_OVERLAY,
    }
}

/// Attach `effect`, or overwrite the active effect of the same kind.
pub fn apply(effects: &mut StatusEffects, effect: StatusEffect) {
    match effects.active.iter_mut().find(|e| e.kind == effect.kind) {
        Some(existing) => {
            existing.amount = effect.amount;
            existing.duration = effect.duration;
            existing.elapsed = effect.elapsed;
        }
        None => effects.active.push(effect),
    }
}

/// Combined result of the active effects after a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Modifiers {
    /// Multiplier applied to the base speed.
    pub speed_factor: f32,
    /// Overlay colour of the last active slow.
    pub overlay: Option<Rgba>,
}

impl Default for Modifiers {
    fn default() -> Self {
        Self {
            speed_factor: 1.0,
            overlay: None,
        }
    }
}

/// Advance every timer by `dt`, drop expired effects and fold the rest.
pub fn tick(effects: &mut StatusEffects, dt: f32) -> Modifiers {
    for effect in &mut effects.active {
        effect.elapsed += dt;
    }
    effects.active.retain(|e| e.elapsed < e.duration);
    modifiers(effects)
}

/// Fold the active effects without advancing them.
pub fn modifiers(effects: &StatusEffects) -> Modifiers {
    effects
        .active
        .iter()
        .fold(Modifiers::default(), |acc, effect| match effect.kind {
            StatusKind::Slow => Modifiers {
                speed_factor: acc.speed_factor.min(1.0 - effect.amount),
                overlay: Some(effect.overlay),
            },
        })
}
