//! rodio-backed playback adapter
//!
//! Each take plays on a blocking task that owns the output stream. The sink
//! handle is shared so a replay can cut the previous take short; watchers
//! compare generations so a replaced take never reports completion.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex as StdMutex};

use async_trait::async_trait;
use rodio::{Decoder, OutputStream, Sink};
use tokio::sync::oneshot;
use tracing::info;

use crate::application::ports::{EngineEvent, EngineEventSender, Player, PlayerError};

/// Take player over the default rodio output
pub struct RodioPlayer {
    events: EngineEventSender,
    /// The sink currently sounding, if any
    current: Arc<StdMutex<Option<Arc<Sink>>>>,
    /// Bumped on every play; stale watchers stay quiet
    generation: Arc<AtomicU64>,
}

impl RodioPlayer {
    /// Create a new player reporting completions on `events`
    pub fn new(events: EngineEventSender) -> Self {
        Self {
            events,
            current: Arc::new(StdMutex::new(None)),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }
}

#[async_trait]
impl Player for RodioPlayer {
    async fn play(&self, path: &Path, volume: f32) -> Result<(), PlayerError> {
        if !path.exists() {
            return Err(PlayerError::FileNotFound(path.display().to_string()));
        }

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        // Cut short any take that is still sounding; its watcher sees the
        // stale generation and stays quiet.
        if let Some(previous) = self.current.lock().unwrap().take() {
            previous.stop();
        }

        let (ready_tx, ready_rx) = oneshot::channel();
        let events = self.events.clone();
        let current = Arc::clone(&self.current);
        let generations = Arc::clone(&self.generation);
        let path = path.to_path_buf();

        // rodio's OutputStream is not Send; construction and the wait for
        // completion both live on this blocking task.
        tokio::task::spawn_blocking(move || {
            let (stream, sink) = match open_sink(&path, volume) {
                Ok(pair) => pair,
                Err(e) => {
                    let _ = ready_tx.send(Err(e));
                    return;
                }
            };

            let sink = Arc::new(sink);
            *current.lock().unwrap() = Some(Arc::clone(&sink));
            let _ = ready_tx.send(Ok(()));

            info!(path = %path.display(), volume, "Playback started");
            sink.sleep_until_end();
            drop(stream);

            if generations.load(Ordering::SeqCst) == generation {
                current.lock().unwrap().take();
                let _ = events.send(EngineEvent::PlaybackFinished);
            }
        });

        match ready_rx.await {
            Ok(result) => result,
            Err(_) => Err(PlayerError::PlaybackFailed("Playback task died".into())),
        }
    }
}

impl Drop for RodioPlayer {
    fn drop(&mut self) {
        // Cut any take still sounding so the watcher task can wind down
        if let Some(sink) = self.current.lock().unwrap().take() {
            sink.stop();
        }
    }
}

/// Build the output stream, sink, and decoder for one take
fn open_sink(path: &Path, volume: f32) -> Result<(OutputStream, Sink), PlayerError> {
    let (stream, handle) =
        OutputStream::try_default().map_err(|e| PlayerError::DeviceUnavailable(e.to_string()))?;
    let sink = Sink::try_new(&handle).map_err(|e| PlayerError::PlaybackFailed(e.to_string()))?;
    let file = File::open(path).map_err(|e| PlayerError::OpenFailed(e.to_string()))?;
    let decoder =
        Decoder::new(BufReader::new(file)).map_err(|e| PlayerError::OpenFailed(e.to_string()))?;

    sink.set_volume(volume);
    sink.append(decoder);

    Ok((stream, sink))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::engine_channel;

    #[tokio::test]
    async fn play_missing_file_is_file_not_found() {
        let (events, _rx) = engine_channel();
        let player = RodioPlayer::new(events);

        let err = player
            .play(Path::new("/nonexistent/parrot/recording.flac"), 1.0)
            .await
            .unwrap_err();
        assert!(matches!(err, PlayerError::FileNotFound(_)));
    }

    #[tokio::test]
    #[ignore = "Requires audio hardware"]
    async fn play_undecodable_file_reports_open_failure() {
        let dir = std::env::temp_dir().join("parrot-player-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("recording.flac");
        std::fs::write(&path, b"not a flac file").unwrap();

        let (events, _rx) = engine_channel();
        let player = RodioPlayer::new(events);

        let err = player.play(&path, 1.0).await.unwrap_err();
        assert!(matches!(err, PlayerError::OpenFailed(_)));
    }
}
