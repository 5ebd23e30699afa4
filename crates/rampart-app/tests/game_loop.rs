use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use rampart_app::game_loop::GameLoop;
use rampart_app::input::PointerSample;
use rampart_app::render::FrameSink;
use rampart_app::state::{AppState, GameLoopCommand};
use rampart_core::commands::PlayerCommand;
use rampart_core::constants::{DT, MAX_SUBSTEPS};
use rampart_core::enums::{GamePhase, TowerKind};
use rampart_core::events::GameEvent;
use rampart_core::state::GameSnapshot;
use rampart_core::types::TileCoord;
use rampart_core::Vec2;
use rampart_grid::Grid;
use rampart_sim::{SimConfig, SimulationEngine};

#[derive(Default)]
struct Recorder {
    frames: Vec<(u64, f32)>,
    events: Vec<GameEvent>,
}

impl FrameSink for Recorder {
    fn present(&mut self, snapshot: &GameSnapshot, alpha: f32) {
        self.frames.push((snapshot.time.tick, alpha));
    }

    fn play(&mut self, event: &GameEvent) {
        self.events.push(event.clone());
    }
}

/// Forwards to a shared recorder so a threaded loop can be inspected.
struct Shared(Arc<Mutex<Recorder>>);

impl FrameSink for Shared {
    fn present(&mut self, snapshot: &GameSnapshot, alpha: f32) {
        self.0.lock().unwrap().present(snapshot, alpha);
    }

    fn play(&mut self, event: &GameEvent) {
        self.0.lock().unwrap().play(event);
    }
}

fn sandbox(time_scale: f64) -> GameLoop<Recorder> {
    let grid = Grid::from_ascii(
        "
        ......
        S####E
        ......
        ",
        100.0,
    )
    .unwrap();
    let engine = SimulationEngine::with_grid(
        SimConfig {
            time_scale,
            spawn_waves: false,
            ..Default::default()
        },
        grid,
    );
    GameLoop::new(engine, Recorder::default())
}

#[test]
fn test_one_tick_per_frame_at_tick_rate() {
    let mut game = sandbox(1.0);
    for _ in 0..10 {
        assert_eq!(game.frame(DT), 1);
    }
    assert_eq!(game.engine().time().tick, 10);
    assert_eq!(game.sink().frames.len(), 10);
}

#[test]
fn test_short_frames_interpolate() {
    let mut game = sandbox(1.0);
    assert_eq!(game.frame(DT), 1);
    assert_eq!(game.frame(DT * 0.5), 0);
    let (tick, alpha) = *game.sink().frames.last().unwrap();
    assert_eq!(tick, 1);
    assert!((alpha - 0.5).abs() < 1e-3);
}

#[test]
fn test_long_stall_is_capped() {
    let mut game = sandbox(1.0);
    assert_eq!(game.frame(1.0), MAX_SUBSTEPS);
    assert_eq!(game.engine().time().tick, MAX_SUBSTEPS as u64);
}

#[test]
fn test_time_scale_multiplies_ticks() {
    let mut game = sandbox(2.0);
    assert_eq!(game.frame(DT), 2);
    let mut frozen = sandbox(0.0);
    assert_eq!(frozen.frame(DT), 0);
    assert!(frozen.latest().is_none());
}

#[test]
fn test_pointer_release_builds_then_selects() {
    let mut game = sandbox(1.0);
    let over = Vec2::new(150.0, 250.0);
    let press = PointerSample {
        position: over,
        secondary: true,
        ..Default::default()
    };
    let release = PointerSample {
        position: over,
        ..Default::default()
    };

    assert!(game.handle(GameLoopCommand::Pointer(press)));
    assert!(game.engine().grid().tower_at(TileCoord::new(1, 2)).is_none());
    assert!(game.handle(GameLoopCommand::Pointer(release)));
    let id = game.engine().grid().tower_at(TileCoord::new(1, 2)).unwrap();

    game.handle(GameLoopCommand::Pointer(press));
    game.handle(GameLoopCommand::Pointer(release));
    game.frame(DT);
    let snapshot = game.latest().unwrap();
    assert!(snapshot.tower(id).unwrap().selected);
    assert_eq!(snapshot.towers.len(), 1);
    assert!(game
        .sink()
        .events
        .iter()
        .any(|e| matches!(e, GameEvent::TowerBuilt { kind: TowerKind::Bullet, .. })));
}

#[test]
fn test_queued_commands_and_shutdown() {
    let mut game = sandbox(1.0);
    assert!(game.handle(GameLoopCommand::PlayerCommand(PlayerCommand::Pause)));
    game.frame(DT);
    assert_eq!(game.latest().unwrap().phase, GamePhase::Paused);
    assert!(!game.handle(GameLoopCommand::Shutdown));
}

#[test]
fn test_threaded_loop_publishes_snapshots() {
    let recorder = Arc::new(Mutex::new(Recorder::default()));
    let state = AppState::new();
    state
        .start(&SimConfig::default(), Shared(recorder.clone()))
        .unwrap();
    assert!(state.is_running());
    assert!(state
        .start(&SimConfig::default(), Shared(recorder.clone()))
        .is_err());

    let deadline = Instant::now() + Duration::from_secs(5);
    let mut published = None;
    while Instant::now() < deadline {
        if let Some(snapshot) = state.snapshot().unwrap() {
            published = Some(snapshot);
            break;
        }
        thread::sleep(Duration::from_millis(10));
    }
    let snapshot = published.expect("game loop never published a snapshot");
    assert!(snapshot.time.tick >= 1);

    state.send_command(PlayerCommand::Pause).unwrap();
    state.stop().unwrap();
    assert!(!state.is_running());
    assert!(!recorder.lock().unwrap().events.is_empty());
}

#[test]
fn test_start_rejects_tiny_map() {
    let state = AppState::new();
    let config = SimConfig {
        cols: 2,
        ..Default::default()
    };
    assert!(state.start(&config, Recorder::default()).is_err());
    assert!(!state.is_running());
}
