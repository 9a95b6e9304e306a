//! Audio session port interface

use async_trait::async_trait;
use thiserror::Error;

/// Audio session errors
#[derive(Debug, Clone, Error)]
pub enum SessionError {
    #[error("Failed to configure the audio session: {0}")]
    Configuration(String),

    #[error("No audio input device available")]
    NoInputDevice,

    #[error("No audio output device available")]
    NoOutputDevice,
}

/// Port for the process-wide audio session.
///
/// Configured once at startup and injected into the controller;
/// never torn down before process exit.
#[async_trait]
pub trait AudioSession: Send + Sync {
    /// Configure the session for simultaneous capture and playback.
    fn configure(&self) -> Result<(), SessionError>;

    /// Ask the platform for microphone access.
    ///
    /// The prompt may resolve on an arbitrary engine thread; callers consume
    /// the outcome back on their own task before touching any state.
    ///
    /// # Returns
    /// `true` when access was granted
    async fn request_permission(&self) -> bool;
}
