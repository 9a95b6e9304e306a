//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the audio engine, notifications, and config storage.

pub mod audio;
pub mod config;
pub mod notification;

// Re-export adapters
pub use audio::{CpalAudioSession, CpalRecorder, RodioPlayer};
pub use config::XdgConfigStore;
pub use notification::{create_notifier, NoOpNotifier, NotifyRustNotifier};
