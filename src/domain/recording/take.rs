//! The single recording artifact
//!
//! There is exactly one take per installation. Every new recording overwrites
//! the same file; nothing ever deletes it.

use std::path::{Path, PathBuf};

/// Artifact file name, constant across takes
pub const RECORDING_FILE_NAME: &str = "recording.flac";

/// Artifact sample rate (speech-optimized)
pub const RECORDING_SAMPLE_RATE: u32 = 16_000;

/// Artifact channel count (mono)
pub const RECORDING_CHANNELS: u16 = 1;

/// Artifact bits per sample
pub const RECORDING_BITS_PER_SAMPLE: u16 = 16;

/// Value object naming the fixed on-disk location of the recording.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordingTake {
    path: PathBuf,
}

impl RecordingTake {
    /// The standard location: `<user data dir>/parrot/recording.flac`
    pub fn at_default_location() -> Self {
        let dir = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("parrot");
        Self::in_dir(dir)
    }

    /// Place the take inside a specific directory, keeping the fixed name
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(RECORDING_FILE_NAME),
        }
    }

    /// The artifact path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a recorded take is present on disk
    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

/// Metadata for a take that was written to disk
#[derive(Debug, Clone)]
pub struct SavedTake {
    pub path: PathBuf,
    pub duration_ms: u64,
    pub bytes: u64,
}

impl SavedTake {
    /// Get human-readable size
    pub fn human_readable_size(&self) -> String {
        let bytes = self.bytes;
        if bytes < 1024 {
            format!("{} B", bytes)
        } else if bytes < 1024 * 1024 {
            format!("{:.1} KB", bytes as f64 / 1024.0)
        } else {
            format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
        }
    }

    /// Duration in whole-ish seconds for display
    pub fn duration_secs(&self) -> f64 {
        self.duration_ms as f64 / 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_uses_fixed_file_name() {
        let take = RecordingTake::in_dir("/tmp/somewhere");
        assert_eq!(
            take.path(),
            Path::new("/tmp/somewhere").join(RECORDING_FILE_NAME)
        );
    }

    #[test]
    fn default_location_ends_with_fixed_name() {
        let take = RecordingTake::at_default_location();
        assert!(take.path().ends_with(RECORDING_FILE_NAME));
        assert!(take.path().to_string_lossy().contains("parrot"));
    }

    #[test]
    fn two_takes_in_same_dir_share_one_path() {
        let first = RecordingTake::in_dir("/tmp/voice");
        let second = RecordingTake::in_dir("/tmp/voice");
        assert_eq!(first.path(), second.path());
    }

    #[test]
    fn missing_take_does_not_exist() {
        let take = RecordingTake::in_dir("/nonexistent/parrot-test");
        assert!(!take.exists());
    }

    #[test]
    fn human_readable_size_bytes() {
        let saved = SavedTake {
            path: PathBuf::from("/tmp/recording.flac"),
            duration_ms: 1000,
            bytes: 500,
        };
        assert_eq!(saved.human_readable_size(), "500 B");
    }

    #[test]
    fn human_readable_size_kb() {
        let saved = SavedTake {
            path: PathBuf::from("/tmp/recording.flac"),
            duration_ms: 1000,
            bytes: 2048,
        };
        assert_eq!(saved.human_readable_size(), "2.0 KB");
    }

    #[test]
    fn human_readable_size_mb() {
        let saved = SavedTake {
            path: PathBuf::from("/tmp/recording.flac"),
            duration_ms: 1000,
            bytes: 2 * 1024 * 1024,
        };
        assert_eq!(saved.human_readable_size(), "2.0 MB");
    }

    #[test]
    fn duration_secs() {
        let saved = SavedTake {
            path: PathBuf::from("/tmp/recording.flac"),
            duration_ms: 2500,
            bytes: 100,
        };
        assert!((saved.duration_secs() - 2.5).abs() < f64::EPSILON);
    }
}
