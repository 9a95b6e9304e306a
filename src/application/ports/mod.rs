//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod config;
pub mod events;
pub mod notifier;
pub mod player;
pub mod recorder;
pub mod session;

// Re-export common types
pub use config::ConfigStore;
pub use events::{engine_channel, EngineEvent, EngineEventReceiver, EngineEventSender};
pub use notifier::{AlertIcon, NotificationError, Notifier};
pub use player::{Player, PlayerError};
pub use recorder::{Recorder, RecorderError};
pub use session::{AudioSession, SessionError};
