//! Game loop thread: drives the simulation engine in real time and hands
//! frames to the renderer.
//!
//! The engine is moved into the thread. Commands arrive via `mpsc` channel.
//! Wall-clock frame time, scaled by the config's time scale, feeds a
//! fixed-timestep accumulator; the latest snapshot is stored in shared state
//! for synchronous polling.

use std::io;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use log::{debug, info};

use rampart_core::constants::TICK_RATE;
use rampart_core::state::GameSnapshot;
use rampart_sim::clock::FrameSteps;
use rampart_sim::{FixedTimestep, SimulationEngine};

use crate::input::InputEdges;
use crate::render::FrameSink;
use crate::state::GameLoopCommand;

/// Wall-clock duration of one rendered frame.
pub const FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// One engine plus everything needed to turn wall-clock frames into ticks.
pub struct GameLoop<S> {
    engine: SimulationEngine,
    clock: FixedTimestep,
    edges: InputEdges,
    sink: S,
    latest: Option<GameSnapshot>,
}

impl<S: FrameSink> GameLoop<S> {
    pub fn new(engine: SimulationEngine, sink: S) -> Self {
        Self {
            engine,
            clock: FixedTimestep::default(),
            edges: InputEdges::new(),
            sink,
            latest: None,
        }
    }

    pub fn engine(&self) -> &SimulationEngine {
        &self.engine
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Snapshot of the most recent tick.
    pub fn latest(&self) -> Option<&GameSnapshot> {
        self.latest.as_ref()
    }

    /// Apply one command from the channel. Returns false on shutdown.
    pub fn handle(&mut self, command: GameLoopCommand) -> bool {
        match command {
            GameLoopCommand::PlayerCommand(cmd) => self.engine.queue_command(cmd),
            GameLoopCommand::Pointer(sample) => {
                for event in self.edges.translate(&sample, self.engine.grid()) {
                    if let Err(err) = self.engine.handle_input(event) {
                        debug!("ignored {event:?}: {err}");
                    }
                }
            }
            GameLoopCommand::Shutdown => return false,
        }
        true
    }

    /// Advance by `frame_dt` wall-clock seconds and present the result.
    /// Returns the number of ticks run.
    pub fn frame(&mut self, frame_dt: f32) -> u32 {
        let scaled = frame_dt * self.engine.time_scale().max(0.0) as f32;
        let FrameSteps { steps, alpha } = self.clock.advance(scaled);

        for _ in 0..steps {
            let snapshot = self.engine.tick();
            for event in &snapshot.events {
                self.sink.play(event);
            }
            self.latest = Some(snapshot);
        }

        if let Some(snapshot) = &self.latest {
            self.sink.present(snapshot, alpha);
        }
        steps
    }
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and the thread handle.
pub fn spawn_game_loop<S>(
    engine: SimulationEngine,
    sink: S,
    latest_snapshot: Arc<Mutex<Option<GameSnapshot>>>,
) -> io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>)>
where
    S: FrameSink + Send + 'static,
{
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("rampart-game-loop".into())
        .spawn(move || {
            let mut game = GameLoop::new(engine, sink);
            run_game_loop(&mut game, cmd_rx, &latest_snapshot);
        })?;

    Ok((cmd_tx, handle))
}

/// Runs until Shutdown command or channel disconnect.
fn run_game_loop<S: FrameSink>(
    game: &mut GameLoop<S>,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameSnapshot>>,
) {
    let mut last_frame = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(command) => {
                    if !game.handle(command) {
                        info!("game loop shutting down");
                        return;
                    }
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Run however many ticks the elapsed time covers
        let now = Instant::now();
        let frame_dt = now.duration_since(last_frame).as_secs_f32();
        last_frame = now;
        let steps = game.frame(frame_dt);

        // 3. Publish for synchronous polling
        if steps > 0 {
            if let (Some(snapshot), Ok(mut lock)) = (game.latest(), latest_snapshot.lock()) {
                *lock = Some(snapshot.clone());
            }
        }

        // 4. Sleep out the rest of the frame
        let spent = now.elapsed();
        if spent < FRAME_DURATION {
            std::thread::sleep(FRAME_DURATION - spent);
        }
    }
}
