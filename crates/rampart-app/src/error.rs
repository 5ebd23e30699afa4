//! Errors surfaced by the application shell.

use thiserror::Error;

use rampart_procgen::GenerateError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("simulation already running")]
    AlreadyRunning,

    #[error("simulation not started")]
    NotStarted,

    #[error("game loop has shut down")]
    Disconnected,

    #[error("shared state lock poisoned")]
    Poisoned,

    #[error("game loop thread panicked")]
    LoopPanicked,

    #[error("failed to spawn game loop thread")]
    Spawn(#[source] std::io::Error),

    #[error(transparent)]
    Map(#[from] GenerateError),
}
