//! Recording controller use case
//!
//! Owns session setup, permission acquisition, and the record/stop/play
//! lifecycle for the single fixed-path take. Command handlers never fail at
//! the call site: every fault surfaces through the status line or an alert,
//! and the user recovers by issuing the command again.

use std::path::PathBuf;

use tracing::{error, info, warn};

use crate::domain::control::{ControlSession, PlayerState, RecordAffordance, RecorderState};
use crate::domain::recording::RecordingTake;

use super::ports::{AlertIcon, AudioSession, EngineEvent, Notifier, Player, Recorder};

/// Alert shown when the audio session cannot be configured
pub const ALERT_SESSION_TITLE: &str = "Failed to Record";
pub const ALERT_SESSION_MESSAGE: &str = "Unable to set up the audio session";

/// Alert shown when microphone access is declined
pub const ALERT_PERMISSION_TITLE: &str = "Recording Permission";
pub const ALERT_PERMISSION_MESSAGE: &str = "Microphone access was not granted";

/// Status line texts
pub const STATUS_READY: &str = "Ready to record";
pub const STATUS_RECORDING: &str = "Recording your voice";
pub const STATUS_STOPPED: &str = "Stopped recording. Press p to play it back";
pub const STATUS_RECORD_FAILED: &str = "Recording failed. Press r to try again";
pub const STATUS_PLAYING: &str = "Playing recording";
pub const STATUS_PLAYED: &str = "Finished playing your recording";
pub const STATUS_STILL_RECORDING: &str = "A recording is in progress. Stop it before playing";
pub const STATUS_NOTHING_TO_STOP: &str = "No recording in progress";

/// Prefix for playback faults, completed with the engine's description
pub const STATUS_PLAY_FAILED_PREFIX: &str = "Could not play your recording";

/// Recording controller use case.
///
/// Generic over its ports so the engine, alerts, and session can be swapped
/// (and mocked) at the composition root.
pub struct RecordingController<S, R, P, N>
where
    S: AudioSession,
    R: Recorder,
    P: Player,
    N: Notifier,
{
    session: S,
    recorder: R,
    player: P,
    notifier: N,
    control: ControlSession,
    take: RecordingTake,
    /// Path of the last take whose capture actually began
    recorded: Option<PathBuf>,
    volume: f32,
    status: String,
}

impl<S, R, P, N> RecordingController<S, R, P, N>
where
    S: AudioSession,
    R: Recorder,
    P: Player,
    N: Notifier,
{
    /// Create a new controller over the given ports
    pub fn new(
        session: S,
        recorder: R,
        player: P,
        notifier: N,
        take: RecordingTake,
        volume: f32,
    ) -> Self {
        Self {
            session,
            recorder,
            player,
            notifier,
            control: ControlSession::new(),
            take,
            recorded: None,
            volume,
            status: STATUS_READY.to_string(),
        }
    }

    /// Configure the audio session and ask for microphone access.
    ///
    /// Configuration failure and permission denial each raise their alert;
    /// neither is fatal. The permission request is the only asynchronous
    /// suspension point: the platform may resolve it on an arbitrary thread,
    /// and the await re-enters this task before any state is touched.
    pub async fn setup(&mut self) {
        if let Err(e) = self.session.configure() {
            error!(error = %e, "Audio session configuration failed");
            self.raise_alert(ALERT_SESSION_TITLE, ALERT_SESSION_MESSAGE, AlertIcon::Error)
                .await;
            return;
        }

        if !self.session.request_permission().await {
            warn!("Microphone permission denied");
            self.raise_alert(
                ALERT_PERMISSION_TITLE,
                ALERT_PERMISSION_MESSAGE,
                AlertIcon::Warning,
            )
            .await;
        }
    }

    /// Record command: stop the active take, or start a new one
    pub async fn handle_record(&mut self) {
        if self.control.is_recording() {
            self.finish_recording(true).await;
        } else {
            self.start_recording().await;
        }
    }

    /// Play command.
    ///
    /// No-op without a previously-recorded take. While recording it only
    /// advises; it never constructs a player or touches the player state.
    pub async fn handle_play(&mut self) {
        let Some(path) = self.playable_path() else {
            return;
        };

        if self.control.is_recording() {
            self.status = STATUS_STILL_RECORDING.to_string();
            return;
        }

        match self.player.play(&path, self.volume).await {
            Ok(()) => {
                self.control.begin_playback();
                self.status = STATUS_PLAYING.to_string();
            }
            Err(e) => {
                error!(error = %e, path = %path.display(), "Failed to start playback");
                self.status = format!("{}: {}", STATUS_PLAY_FAILED_PREFIX, e);
            }
        }
    }

    /// Stop command: finishes the active take; advisory when idle
    pub async fn handle_stop(&mut self) {
        if self.control.is_recording() {
            self.finish_recording(true).await;
        } else {
            self.status = STATUS_NOTHING_TO_STOP.to_string();
        }
    }

    /// Consume a completion event from the audio engine
    pub async fn handle_engine_event(&mut self, event: EngineEvent) {
        match event {
            EngineEvent::RecordingFinished { success: false } => {
                self.finish_recording(false).await;
            }
            EngineEvent::RecordingFinished { success: true } => {
                // The explicit stop path already updated state
            }
            EngineEvent::PlaybackFinished => {
                self.control.finish_playback();
                self.status = STATUS_PLAYED.to_string();
            }
            EngineEvent::PlaybackError(description) => {
                error!(description = %description, "Playback fault");
                self.control.finish_playback();
                self.status = format!("{}: {}", STATUS_PLAY_FAILED_PREFIX, description);
            }
        }
    }

    /// Current status line
    pub fn status(&self) -> &str {
        &self.status
    }

    /// What the record control should show
    pub fn record_affordance(&self) -> RecordAffordance {
        self.control.record_affordance()
    }

    /// Current recorder state
    pub fn recorder_state(&self) -> RecorderState {
        self.control.recorder_state()
    }

    /// Current player state
    pub fn player_state(&self) -> PlayerState {
        self.control.player_state()
    }

    /// Check if currently recording
    pub fn is_recording(&self) -> bool {
        self.control.is_recording()
    }

    async fn start_recording(&mut self) {
        if self.control.start_recording().is_err() {
            return;
        }

        let path = self.take.path().to_path_buf();
        match self.recorder.start(&path).await {
            Ok(()) => {
                info!(path = %path.display(), "Capture started");
                self.recorded = Some(path);
                self.status = STATUS_RECORDING.to_string();
            }
            Err(e) => {
                // Same finish path as a natural stop, with success = false
                error!(error = %e, "Failed to start capture");
                self.finish_recording(false).await;
            }
        }
    }

    /// Finish the active take. Guarded: without a prior start this is a
    /// no-op, never a fault.
    async fn finish_recording(&mut self, success: bool) {
        if !self.control.is_recording() {
            return;
        }

        let mut success = success;
        if self.recorder.is_recording() {
            match self.recorder.stop().await {
                Ok(saved) => {
                    info!(
                        path = %saved.path.display(),
                        size = %saved.human_readable_size(),
                        secs = saved.duration_secs(),
                        "Take saved"
                    );
                }
                Err(e) => {
                    error!(error = %e, "Failed to finalize take");
                    success = false;
                }
            }
        }

        let _ = self.control.finish_recording(success);
        self.status = if success {
            STATUS_STOPPED.to_string()
        } else {
            STATUS_RECORD_FAILED.to_string()
        };
    }

    /// The path to play: the take recorded this session, or one already on
    /// disk from a previous run
    fn playable_path(&self) -> Option<PathBuf> {
        if let Some(path) = &self.recorded {
            return Some(path.clone());
        }
        self.take
            .exists()
            .then(|| self.take.path().to_path_buf())
    }

    async fn raise_alert(&mut self, title: &str, message: &str, icon: AlertIcon) {
        self.status = format!("{}: {}", title, message);
        if let Err(e) = self.notifier.alert(title, message, icon).await {
            warn!(error = %e, "Failed to deliver alert");
        }
    }
}
