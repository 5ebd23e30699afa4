//! Wave director: alternates between resting and spawning, escalating
//! difficulty at the start of every wave.

use hecs::World;
use log::info;

use rampart_core::constants::*;
use rampart_core::enums::WavePhase;
use rampart_core::events::GameEvent;
use rampart_core::state::WaveView;
use rampart_enemy_ai::profiles::{self, EnemyProfile};
use rampart_grid::Grid;

/// Wave progress and the difficulty knobs derived from it.
#[derive(Debug, Clone)]
pub struct WaveDirector {
    pub wave: u32,
    pub phase: WavePhase,
    pub enemies_per_wave: u32,
    pub spawned_this_wave: u32,
    pub spawn_interval: f32,
    /// Time spent resting since the last wave ended.
    pub rest_elapsed: f32,
    /// Time since the last spawn. Runs in both phases.
    pub spawn_elapsed: f32,
    /// Extra health of every enemy spawned from now on.
    pub health_bonus: u32,
}

impl Default for WaveDirector {
    fn default() -> Self {
        Self {
            wave: 0,
            phase: WavePhase::Resting,
            enemies_per_wave: INITIAL_ENEMIES_PER_WAVE,
            spawned_this_wave: 0,
            spawn_interval: INITIAL_SPAWN_INTERVAL,
            // The first wave starts on the first tick.
            rest_elapsed: TIME_BETWEEN_WAVES,
            spawn_elapsed: 0.0,
            health_bonus: 0,
        }
    }
}

/// What happened during one director step.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WaveStep {
    /// Number of the wave that started this step.
    pub started: Option<u32>,
    /// Enemy to spawn this step.
    pub spawn: Option<EnemyProfile>,
}

impl WaveDirector {
    /// Advance the director by `dt` seconds.
    pub fn step(&mut self, dt: f32) -> WaveStep {
        let mut out = WaveStep::default();
        self.spawn_elapsed += dt;

        if self.rest_elapsed < TIME_BETWEEN_WAVES {
            self.rest_elapsed += dt;
            return out;
        }

        if self.phase == WavePhase::Resting {
            self.begin_wave();
            out.started = Some(self.wave);
        }

        if self.spawn_elapsed >= self.spawn_interval
            && self.spawned_this_wave < self.enemies_per_wave
        {
            self.spawn_elapsed = 0.0;
            self.spawned_this_wave += 1;
            out.spawn = Some(profiles::for_wave(self.wave, self.health_bonus));
        }

        if self.spawned_this_wave >= self.enemies_per_wave {
            self.rest_elapsed = 0.0;
            self.spawned_this_wave = 0;
            self.phase = WavePhase::Resting;
        }

        out
    }

    fn begin_wave(&mut self) {
        self.wave += 1;
        self.spawn_interval =
            (self.spawn_interval - SPAWN_INTERVAL_DECREMENT).max(MIN_SPAWN_INTERVAL);
        if self.wave % ENEMIES_PER_WAVE_PERIOD == 0 {
            self.enemies_per_wave += 1;
        }
        if self.wave % HEALTH_BONUS_PERIOD == 0 {
            self.health_bonus += 1;
        }
        self.phase = WavePhase::Spawning;
    }

    /// Seconds left before the next wave starts (0 while spawning).
    pub fn rest_remaining(&self) -> f32 {
        match self.phase {
            WavePhase::Spawning => 0.0,
            WavePhase::Resting => (TIME_BETWEEN_WAVES - self.rest_elapsed).max(0.0),
        }
    }

    pub fn view(&self) -> WaveView {
        WaveView {
            wave: self.wave,
            phase: self.phase,
            enemies_per_wave: self.enemies_per_wave,
            spawned_this_wave: self.spawned_this_wave,
            spawn_interval: self.spawn_interval,
            rest_remaining: self.rest_remaining(),
        }
    }
}

/// Step the director and spawn whatever it asks for.
pub fn run(
    world: &mut World,
    grid: &Grid,
    director: &mut WaveDirector,
    next_enemy_serial: &mut u32,
    events: &mut Vec<GameEvent>,
    dt: f32,
) {
    let step = director.step(dt);

    if let Some(wave) = step.started {
        info!(
            "wave {wave} started: {} enemies, interval {:.2}s",
            director.enemies_per_wave, director.spawn_interval
        );
        events.push(GameEvent::WaveStarted { wave });
    }

    if let Some(profile) = step.spawn {
        crate::world_setup::spawn_enemy(world, grid, *next_enemy_serial, &profile);
        *next_enemy_serial += 1;
    }
}
