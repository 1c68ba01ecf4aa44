//! Error types.

use thiserror::Error;

pub use crate::config::ConfigError;

/// Misuse of the controller or failure of its worker thread.
#[derive(Debug, Error)]
pub enum ControlError {
    #[error("a sort run is already active")]
    RunActive,
    #[error("failed to spawn sort worker: {0}")]
    WorkerSpawn(#[source] std::io::Error),
    #[error("sort worker panicked")]
    WorkerPanicked,
    #[error("array of {len} values is outside the size range {min}..={max}")]
    SizeOutOfRange { len: usize, min: usize, max: usize },
    #[error("value {value} at index {index} is outside 1..={max}")]
    ValueOutOfRange { index: usize, value: u32, max: u32 },
}

#[derive(Debug, Error)]
pub enum Error {
    /// SDL reports its failures as plain strings.
    #[error("SDL error: {0}")]
    Sdl(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Control(#[from] ControlError),
    #[error("failed to write screenshot: {0}")]
    Screenshot(#[from] image::ImageError),
}

impl From<String> for Error {
    fn from(message: String) -> Self {
        Error::Sdl(message)
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
