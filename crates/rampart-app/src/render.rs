//! Renderer collaborator.
//!
//! The game loop hands every frame's latest snapshot plus the interpolation
//! factor to a `FrameSink`, and every simulation event to `play`. Drawing
//! and audio belong to the implementor.

use log::{debug, info, trace};

use rampart_core::constants::TICK_RATE;
use rampart_core::events::GameEvent;
use rampart_core::state::GameSnapshot;

pub trait FrameSink {
    /// Draw the state `alpha` of the way from previous to current positions.
    fn present(&mut self, snapshot: &GameSnapshot, alpha: f32);

    /// React to a simulation event (sound, UI flash).
    fn play(&mut self, _event: &GameEvent) {}
}

/// Headless sink that writes a periodic status line and the notable events
/// to the log.
#[derive(Debug)]
pub struct LogSink {
    status_every: u64,
    next_status: u64,
}

impl LogSink {
    /// Status line every `interval` simulated seconds.
    pub fn new(interval: f32) -> Self {
        let status_every = ((interval.max(0.0) * TICK_RATE as f32) as u64).max(1);
        Self {
            status_every,
            next_status: 0,
        }
    }
}

impl FrameSink for LogSink {
    fn present(&mut self, snapshot: &GameSnapshot, alpha: f32) {
        if snapshot.time.tick >= self.next_status {
            self.next_status = snapshot.time.tick + self.status_every;
            info!(
                "t={:.1}s wave {} ({:?}) | gold {} | lives {} | enemies {} | towers {}",
                snapshot.time.elapsed_secs,
                snapshot.wave.wave,
                snapshot.wave.phase,
                snapshot.economy.gold,
                snapshot.economy.lives,
                snapshot.enemies.len(),
                snapshot.towers.len(),
            );
        }
        for (serial, position) in snapshot.enemy_positions(alpha) {
            trace!("enemy {serial} at ({:.1}, {:.1})", position.x, position.y);
        }
    }

    fn play(&mut self, event: &GameEvent) {
        match event {
            GameEvent::WaveStarted { .. } | GameEvent::LifeLost { .. } | GameEvent::GameOver { .. } => {
                info!("{event:?}")
            }
            GameEvent::TowerBuilt { .. }
            | GameEvent::TowerUpgraded { .. }
            | GameEvent::TowerSold { .. }
            | GameEvent::EnemyDied { .. } => debug!("{event:?}"),
            _ => trace!("{event:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_interval_in_ticks() {
        assert_eq!(LogSink::new(5.0).status_every, 5 * TICK_RATE as u64);
        assert_eq!(LogSink::new(0.0).status_every, 1);
    }

    #[test]
    fn test_status_schedule_advances() {
        let mut sink = LogSink::new(1.0);
        let mut snapshot = GameSnapshot::default();
        sink.present(&snapshot, 0.0);
        assert_eq!(sink.next_status, TICK_RATE as u64);

        snapshot.time.tick = 10;
        sink.present(&snapshot, 0.5);
        assert_eq!(sink.next_status, TICK_RATE as u64);
    }
}
