//! Record/play control state machine

use std::fmt;
use thiserror::Error;

/// Recorder side of the control session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RecorderState {
    #[default]
    Idle,
    Recording,
}

impl RecorderState {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Recording => "recording",
        }
    }
}

impl fmt::Display for RecorderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Player side of the control session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlayerState {
    #[default]
    Idle,
    Playing,
}

impl PlayerState {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Playing => "playing",
        }
    }
}

impl fmt::Display for PlayerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of the most recently finished take
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TakeOutcome {
    /// No take has ever been finished this session
    #[default]
    NeverRecorded,
    /// The last take was captured and saved
    Saved,
    /// The last take ended in failure
    Failed,
}

/// Error when an invalid state transition is attempted
#[derive(Debug, Clone, Error)]
#[error("Invalid state transition: cannot {action} while {state}")]
pub struct InvalidTransition {
    pub state: RecorderState,
    pub action: &'static str,
}

/// What the record control should show.
/// `dimmed` mirrors the half-intensity look of an active control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordAffordance {
    pub label: &'static str,
    pub dimmed: bool,
}

/// Control session entity.
/// Tracks the recorder and player lifecycles for the single take.
///
/// Recorder transitions:
///   IDLE -> RECORDING (start_recording)
///   RECORDING -> IDLE (finish_recording, success or failure)
///
/// Player transitions:
///   IDLE -> PLAYING (begin_playback; replay while playing is allowed
///   and restarts playback, so no guard)
///   PLAYING -> IDLE (finish_playback; tolerates stale completion events)
#[derive(Debug, Default)]
pub struct ControlSession {
    recorder: RecorderState,
    player: PlayerState,
    outcome: TakeOutcome,
}

impl ControlSession {
    /// Create a new control session with both sides idle
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current recorder state
    pub fn recorder_state(&self) -> RecorderState {
        self.recorder
    }

    /// Get the current player state
    pub fn player_state(&self) -> PlayerState {
        self.player
    }

    /// Outcome of the last finished take
    pub fn outcome(&self) -> TakeOutcome {
        self.outcome
    }

    /// Check if currently recording
    pub fn is_recording(&self) -> bool {
        self.recorder == RecorderState::Recording
    }

    /// Check if currently playing
    pub fn is_playing(&self) -> bool {
        self.player == PlayerState::Playing
    }

    /// Transition the recorder from IDLE to RECORDING
    pub fn start_recording(&mut self) -> Result<(), InvalidTransition> {
        if self.recorder != RecorderState::Idle {
            return Err(InvalidTransition {
                state: self.recorder,
                action: "start recording",
            });
        }
        self.recorder = RecorderState::Recording;
        Ok(())
    }

    /// Transition the recorder from RECORDING to IDLE, remembering how the
    /// take ended
    pub fn finish_recording(&mut self, success: bool) -> Result<(), InvalidTransition> {
        if self.recorder != RecorderState::Recording {
            return Err(InvalidTransition {
                state: self.recorder,
                action: "finish recording",
            });
        }
        self.recorder = RecorderState::Idle;
        self.outcome = if success {
            TakeOutcome::Saved
        } else {
            TakeOutcome::Failed
        };
        Ok(())
    }

    /// Transition the player to PLAYING. Starting over an active playback is
    /// permitted: the new take replaces the old one.
    pub fn begin_playback(&mut self) {
        self.player = PlayerState::Playing;
    }

    /// Transition the player back to IDLE. Safe to call when already idle;
    /// completion events may arrive after the player was replaced.
    pub fn finish_playback(&mut self) {
        self.player = PlayerState::Idle;
    }

    /// What the record control should show right now.
    /// Pure function of {recorder state, take outcome}.
    pub fn record_affordance(&self) -> RecordAffordance {
        if self.recorder == RecorderState::Recording {
            return RecordAffordance {
                label: "Stop",
                dimmed: true,
            };
        }
        let label = match self.outcome {
            TakeOutcome::Saved => "Re-record",
            TakeOutcome::NeverRecorded | TakeOutcome::Failed => "Record",
        };
        RecordAffordance {
            label,
            dimmed: false,
        }
    }
}
