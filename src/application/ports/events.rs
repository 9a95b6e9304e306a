//! Completion events from the audio engine
//!
//! The engine adapters run their own capture/playback threads. Every
//! completion or fault is marshalled through this channel and consumed on the
//! application's event loop task before any controller state is touched.

use tokio::sync::mpsc;

/// An engine-side completion, keyed by operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// Capture ended on the engine side; `success: false` means the engine
    /// aborted the take rather than a user stopping it
    RecordingFinished { success: bool },

    /// Playback reached the end of the take
    PlaybackFinished,

    /// The player hit a decode or device fault after playback began
    PlaybackError(String),
}

/// Sending half, owned by the engine adapters
pub type EngineEventSender = mpsc::UnboundedSender<EngineEvent>;

/// Receiving half, owned by the application event loop
pub type EngineEventReceiver = mpsc::UnboundedReceiver<EngineEvent>;

/// Create the engine event channel
pub fn engine_channel() -> (EngineEventSender, EngineEventReceiver) {
    mpsc::unbounded_channel()
}
