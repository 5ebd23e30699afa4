//! Tower registry: display names and per-level attribute tables.
//!
//! Every tower reads its numbers from here, keyed by kind and level.
//! Levels are 0-based; the last row of a table is the max level.

use serde::Serialize;

use crate::enums::TowerKind;

/// Attributes of one tower level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TowerAttributes {
    /// Gold paid to build (level 0) or to upgrade into this level.
    pub buy_cost: u32,
    /// Gold refunded when sold at this level.
    pub sell_cost: u32,
    pub damage: u32,
    /// Engagement radius in world units.
    pub range: f32,
    /// Minimum seconds between shots.
    pub fire_rate: f32,
    /// Splash towers only.
    pub splash_radius: f32,
    /// Slow towers only: fractional speed reduction (0.5 = -50%).
    pub slow_amount: f32,
    /// Slow towers only: seconds.
    pub slow_duration: f32,
}

impl TowerAttributes {
    const fn direct(buy_cost: u32, sell_cost: u32, damage: u32, range: f32, fire_rate: f32) -> Self {
        Self {
            buy_cost,
            sell_cost,
            damage,
            range,
            fire_rate,
            splash_radius: 0.0,
            slow_amount: 0.0,
            slow_duration: 0.0,
        }
    }

    const fn splash(
        buy_cost: u32,
        sell_cost: u32,
        damage: u32,
        range: f32,
        fire_rate: f32,
        splash_radius: f32,
    ) -> Self {
        Self {
            splash_radius,
            ..Self::direct(buy_cost, sell_cost, damage, range, fire_rate)
        }
    }

    const fn slow(
        buy_cost: u32,
        sell_cost: u32,
        range: f32,
        fire_rate: f32,
        slow_amount: f32,
        slow_duration: f32,
    ) -> Self {
        Self {
            slow_amount,
            slow_duration,
            ..Self::direct(buy_cost, sell_cost, 0, range, fire_rate)
        }
    }
}

/// Registry entry for one tower kind.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TowerMetadata {
    pub kind: TowerKind,
    pub name: &'static str,
    pub levels: &'static [TowerAttributes],
}

impl TowerMetadata {
    /// Highest reachable level index.
    pub fn max_level(&self) -> u8 {
        (self.levels.len() - 1) as u8
    }

    pub fn level(&self, level: u8) -> Option<&'static TowerAttributes> {
        self.levels.get(usize::from(level))
    }
}

//                                 buy   sell  dmg  range   rate
const BULLET_LEVELS: [TowerAttributes; 3] = [
    TowerAttributes::direct(20, 5, 1, 200.0, 1.25),
    TowerAttributes::direct(50, 15, 2, 250.0, 1.10),
    TowerAttributes::direct(90, 35, 3, 300.0, 0.90),
];

//                                 buy   sell  dmg  range   rate   splash
const SPLASH_LEVELS: [TowerAttributes; 3] = [
    TowerAttributes::splash(40, 10, 2, 220.0, 2.00, 80.0),
    TowerAttributes::splash(80, 30, 3, 250.0, 1.80, 100.0),
    TowerAttributes::splash(140, 60, 5, 280.0, 1.50, 120.0),
];

//                                 buy   sell  range   rate   amount  secs
const SLOW_LEVELS: [TowerAttributes; 3] = [
    TowerAttributes::slow(30, 8, 150.0, 2.00, 0.30, 1.5),
    TowerAttributes::slow(60, 25, 175.0, 1.80, 0.40, 2.0),
    TowerAttributes::slow(100, 45, 200.0, 1.50, 0.50, 2.5),
];

static REGISTRY: [TowerMetadata; 3] = [
    TowerMetadata {
        kind: TowerKind::Bullet,
        name: "Bullet Tower",
        levels: &BULLET_LEVELS,
    },
    TowerMetadata {
        kind: TowerKind::Splash,
        name: "Splash Tower",
        levels: &SPLASH_LEVELS,
    },
    TowerMetadata {
        kind: TowerKind::Slow,
        name: "Slow Tower",
        levels: &SLOW_LEVELS,
    },
];

/// All registered tower kinds, in build-menu order.
pub fn all() -> &'static [TowerMetadata] {
    &REGISTRY
}

/// Registry entry for a kind.
pub fn metadata(kind: TowerKind) -> &'static TowerMetadata {
    match kind {
        TowerKind::Bullet => &REGISTRY[0],
        TowerKind::Splash => &REGISTRY[1],
        TowerKind::Slow => &REGISTRY[2],
    }
}

/// Attributes for `kind` at `level`, clamped to the max level.
pub fn attributes(kind: TowerKind, level: u8) -> &'static TowerAttributes {
    let meta = metadata(kind);
    let index = usize::from(level.min(meta.max_level()));
    &meta.levels[index]
}
