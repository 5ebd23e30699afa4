//! Application state shared between the caller and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use rampart_core::commands::PlayerCommand;
use rampart_core::state::GameSnapshot;
use rampart_sim::{SimConfig, SimulationEngine};

use crate::error::AppError;
use crate::game_loop;
use crate::input::PointerSample;
use crate::render::FrameSink;

/// Commands sent to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Raw pointer state; release edges become input events.
    Pointer(PointerSample),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Handle to a running (or not yet started) simulation.
///
/// Every field sits behind a `Mutex` so one `AppState` can be shared by
/// reference between threads.
pub struct AppState {
    /// `None` before `start` is called.
    command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Updated by the game loop thread after each frame that ticked.
    latest_snapshot: Arc<Mutex<Option<GameSnapshot>>>,
    thread: Mutex<Option<JoinHandle<()>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            thread: Mutex::new(None),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a map and spawn the game loop thread.
    pub fn start<S>(&self, config: &SimConfig, sink: S) -> Result<(), AppError>
    where
        S: FrameSink + Send + 'static,
    {
        let mut thread = self.thread.lock().map_err(|_| AppError::Poisoned)?;
        if thread.is_some() {
            return Err(AppError::AlreadyRunning);
        }

        let engine = SimulationEngine::new(config.clone())?;
        let (cmd_tx, handle) =
            game_loop::spawn_game_loop(engine, sink, self.latest_snapshot.clone())
                .map_err(AppError::Spawn)?;

        *self.command_tx.lock().map_err(|_| AppError::Poisoned)? = Some(cmd_tx);
        *thread = Some(handle);
        Ok(())
    }

    pub fn is_running(&self) -> bool {
        self.thread.lock().map(|t| t.is_some()).unwrap_or(false)
    }

    pub fn send(&self, command: GameLoopCommand) -> Result<(), AppError> {
        let tx = self.command_tx.lock().map_err(|_| AppError::Poisoned)?;
        match tx.as_ref() {
            Some(tx) => tx.send(command).map_err(|_| AppError::Disconnected),
            None => Err(AppError::NotStarted),
        }
    }

    pub fn send_command(&self, command: PlayerCommand) -> Result<(), AppError> {
        self.send(GameLoopCommand::PlayerCommand(command))
    }

    /// Latest snapshot published by the game loop.
    pub fn snapshot(&self) -> Result<Option<GameSnapshot>, AppError> {
        let lock = self.latest_snapshot.lock().map_err(|_| AppError::Poisoned)?;
        Ok(lock.clone())
    }

    /// Ask the loop to shut down and wait for it.
    pub fn stop(&self) -> Result<(), AppError> {
        let handle = self
            .thread
            .lock()
            .map_err(|_| AppError::Poisoned)?
            .take()
            .ok_or(AppError::NotStarted)?;
        if let Some(tx) = self.command_tx.lock().map_err(|_| AppError::Poisoned)?.take() {
            // The loop may already be gone.
            let _ = tx.send(GameLoopCommand::Shutdown);
        }
        handle.join().map_err(|_| AppError::LoopPanicked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_creation() {
        let state = AppState::new();
        assert!(!state.is_running());
        assert!(state.snapshot().unwrap().is_none());
        assert!(matches!(
            state.send_command(PlayerCommand::Pause),
            Err(AppError::NotStarted)
        ));
        assert!(matches!(state.stop(), Err(AppError::NotStarted)));
    }
}
