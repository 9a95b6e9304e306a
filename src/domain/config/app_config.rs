//! Application configuration value object

use serde::{Deserialize, Serialize};

/// Default playback volume (full intensity)
pub const DEFAULT_VOLUME: f32 = 1.0;

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Whether alerts are mirrored as desktop notifications
    pub notify: Option<bool>,
    /// Playback volume, clamped to 0.0..=1.0
    pub volume: Option<f32>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            notify: Some(false),
            volume: Some(DEFAULT_VOLUME),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            notify: other.notify.or(self.notify),
            volume: other.volume.or(self.volume),
        }
    }

    /// Get notify setting, or false if not set
    pub fn notify_or_default(&self) -> bool {
        self.notify.unwrap_or(false)
    }

    /// Get playback volume clamped to the valid range, or the default
    pub fn volume_or_default(&self) -> f32 {
        self.volume.unwrap_or(DEFAULT_VOLUME).clamp(0.0, 1.0)
    }
}
