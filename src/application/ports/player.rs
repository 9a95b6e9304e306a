//! Playback port interface

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

/// Playback errors
#[derive(Debug, Clone, Error)]
pub enum PlayerError {
    #[error("Recording not found at {0}")]
    FileNotFound(String),

    #[error("Could not open recording: {0}")]
    OpenFailed(String),

    #[error("No audio output device available: {0}")]
    DeviceUnavailable(String),

    #[error("Playback failed: {0}")]
    PlaybackFailed(String),
}

/// Port for streaming a recorded take to the audio output.
///
/// `play` returns once playback has begun; completion and later faults are
/// reported through the engine event channel. Playing again while a take is
/// still sounding replaces it and restarts from the top.
#[async_trait]
pub trait Player: Send + Sync {
    /// Start playback of the file at `path` with the given volume (0.0..=1.0).
    async fn play(&self, path: &Path, volume: f32) -> Result<(), PlayerError>;
}
