//! Recording port interface

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

use crate::domain::recording::SavedTake;

/// Recording errors
#[derive(Debug, Clone, Error)]
pub enum RecorderError {
    #[error("Failed to start recording: {0}")]
    StartFailed(String),

    #[error("No audio input device available")]
    NoInputDevice,

    #[error("No recording in progress")]
    NotRecording,

    #[error("Recording produced no audio")]
    NoAudioCaptured,

    #[error("Failed to encode recording: {0}")]
    EncodeFailed(String),

    #[error("Failed to write recording: {0}")]
    WriteFailed(String),
}

/// Port for capturing microphone audio to a file.
///
/// One capture at a time; `start` then `stop` writes the destination file,
/// overwriting whatever take was there before.
#[async_trait]
pub trait Recorder: Send + Sync {
    /// Begin capturing to the given destination path.
    async fn start(&self, destination: &Path) -> Result<(), RecorderError>;

    /// Stop capturing and write the take to the destination given at start.
    ///
    /// # Returns
    /// Metadata for the written take
    async fn stop(&self) -> Result<SavedTake, RecorderError>;

    /// Check if currently capturing
    fn is_recording(&self) -> bool;
}
