//! Microphone capture adapter using cpal
//!
//! cpal streams are not Send, so each capture runs on a dedicated thread that
//! owns the stream for the life of the take. Samples accumulate mono-mixed in
//! a shared buffer; `stop` drains it, encodes FLAC, and overwrites the
//! destination path. A stream fault mid-capture halts the take and reports
//! `RecordingFinished { success: false }` through the engine event channel.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Arc, Mutex as StdMutex};

use async_trait::async_trait;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{SampleFormat, SampleRate, StreamConfig};
use tokio::time::Duration as TokioDuration;
use tracing::{error, info};

use crate::application::ports::{EngineEvent, EngineEventSender, Recorder, RecorderError};
use crate::domain::recording::{SavedTake, RECORDING_SAMPLE_RATE};

use super::flac::encode_take;

/// Microphone recorder over the default cpal host
pub struct CpalRecorder {
    /// Captured samples (mono, i16, at the device sample rate)
    buffer: Arc<StdMutex<Vec<i16>>>,
    /// Device sample rate (may differ from the artifact rate)
    device_rate: Arc<AtomicU32>,
    /// Capture state, shared with the stream thread
    is_recording: Arc<AtomicBool>,
    /// Where the active take will be written
    destination: StdMutex<Option<PathBuf>>,
    /// Engine completion channel
    events: EngineEventSender,
}

impl CpalRecorder {
    /// Create a new recorder reporting engine faults on `events`
    pub fn new(events: EngineEventSender) -> Self {
        Self {
            buffer: Arc::new(StdMutex::new(Vec::new())),
            device_rate: Arc::new(AtomicU32::new(0)),
            is_recording: Arc::new(AtomicBool::new(false)),
            destination: StdMutex::new(None),
            events,
        }
    }

    fn input_device() -> Result<cpal::Device, RecorderError> {
        cpal::default_host()
            .default_input_device()
            .ok_or(RecorderError::NoInputDevice)
    }

    /// Pick an input configuration: i16 or f32 only, preferring fewer
    /// channels and ranges that include the artifact rate
    fn input_config(device: &cpal::Device) -> Result<(StreamConfig, SampleFormat), RecorderError> {
        let supported = device
            .supported_input_configs()
            .map_err(|e| RecorderError::StartFailed(format!("Failed to get configs: {}", e)))?;

        let mut best: Option<cpal::SupportedStreamConfigRange> = None;
        for candidate in supported {
            if candidate.sample_format() != SampleFormat::I16
                && candidate.sample_format() != SampleFormat::F32
            {
                continue;
            }

            let includes_target = candidate.min_sample_rate().0 <= RECORDING_SAMPLE_RATE
                && candidate.max_sample_rate().0 >= RECORDING_SAMPLE_RATE;

            let is_better = match &best {
                None => true,
                Some(current) => {
                    let fewer_channels = candidate.channels() < current.channels();
                    let better_rate =
                        includes_target && current.min_sample_rate().0 > RECORDING_SAMPLE_RATE;
                    fewer_channels || better_rate
                }
            };
            if is_better {
                best = Some(candidate);
            }
        }

        let range = best.ok_or(RecorderError::StartFailed(
            "No suitable input config found".into(),
        ))?;

        let sample_rate = if range.min_sample_rate().0 <= RECORDING_SAMPLE_RATE
            && range.max_sample_rate().0 >= RECORDING_SAMPLE_RATE
        {
            SampleRate(RECORDING_SAMPLE_RATE)
        } else {
            range.min_sample_rate()
        };

        let sample_format = range.sample_format();
        let config = StreamConfig {
            channels: range.channels(),
            sample_rate,
            buffer_size: cpal::BufferSize::Default,
        };

        Ok((config, sample_format))
    }
}

#[async_trait]
impl Recorder for CpalRecorder {
    async fn start(&self, destination: &Path) -> Result<(), RecorderError> {
        if self.is_recording.load(Ordering::SeqCst) {
            return Err(RecorderError::StartFailed(
                "Recording already in progress".into(),
            ));
        }

        {
            let mut buffer = self.buffer.lock().unwrap();
            buffer.clear();
        }
        *self.destination.lock().unwrap() = Some(destination.to_path_buf());
        self.is_recording.store(true, Ordering::SeqCst);

        let buffer = Arc::clone(&self.buffer);
        let device_rate = Arc::clone(&self.device_rate);
        let is_recording = Arc::clone(&self.is_recording);
        let events = self.events.clone();

        std::thread::spawn(move || {
            let device = match CpalRecorder::input_device() {
                Ok(d) => d,
                Err(e) => {
                    error!(error = %e, "No usable input device");
                    is_recording.store(false, Ordering::SeqCst);
                    return;
                }
            };

            let (config, sample_format) = match CpalRecorder::input_config(&device) {
                Ok(c) => c,
                Err(e) => {
                    error!(error = %e, "No usable input config");
                    is_recording.store(false, Ordering::SeqCst);
                    return;
                }
            };

            let rate = config.sample_rate.0;
            let channels = config.channels;
            device_rate.store(rate, Ordering::SeqCst);

            info!(
                device = %device.name().unwrap_or_else(|_| "unknown".into()),
                rate,
                channels,
                "Capturing from device"
            );

            let stream_result = match sample_format {
                SampleFormat::I16 => {
                    let buffer = Arc::clone(&buffer);
                    let flag = Arc::clone(&is_recording);
                    let fault_flag = Arc::clone(&is_recording);
                    let fault_events = events.clone();
                    device.build_input_stream(
                        &config,
                        move |data: &[i16], _: &cpal::InputCallbackInfo| {
                            if flag.load(Ordering::SeqCst) {
                                let mono = mix_to_mono(data, channels);
                                if let Ok(mut buffer) = buffer.lock() {
                                    buffer.extend_from_slice(&mono);
                                }
                            }
                        },
                        move |err| {
                            error!(error = %err, "Capture stream error");
                            fault_flag.store(false, Ordering::SeqCst);
                            let _ = fault_events
                                .send(EngineEvent::RecordingFinished { success: false });
                        },
                        None,
                    )
                }
                SampleFormat::F32 => {
                    let buffer = Arc::clone(&buffer);
                    let flag = Arc::clone(&is_recording);
                    let fault_flag = Arc::clone(&is_recording);
                    let fault_events = events.clone();
                    device.build_input_stream(
                        &config,
                        move |data: &[f32], _: &cpal::InputCallbackInfo| {
                            if flag.load(Ordering::SeqCst) {
                                let as_i16: Vec<i16> =
                                    data.iter().map(|&s| (s * 32767.0) as i16).collect();
                                let mono = mix_to_mono(&as_i16, channels);
                                if let Ok(mut buffer) = buffer.lock() {
                                    buffer.extend_from_slice(&mono);
                                }
                            }
                        },
                        move |err| {
                            error!(error = %err, "Capture stream error");
                            fault_flag.store(false, Ordering::SeqCst);
                            let _ = fault_events
                                .send(EngineEvent::RecordingFinished { success: false });
                        },
                        None,
                    )
                }
                _ => {
                    error!("Unsupported sample format");
                    is_recording.store(false, Ordering::SeqCst);
                    return;
                }
            };

            let stream = match stream_result {
                Ok(s) => s,
                Err(e) => {
                    error!(error = %e, "Failed to build input stream");
                    is_recording.store(false, Ordering::SeqCst);
                    return;
                }
            };

            if stream.play().is_err() {
                is_recording.store(false, Ordering::SeqCst);
                return;
            }

            while is_recording.load(Ordering::SeqCst) {
                std::thread::sleep(std::time::Duration::from_millis(100));
            }

            drop(stream);
        });

        // Give the thread a moment to come up, then confirm it did
        tokio::time::sleep(TokioDuration::from_millis(50)).await;
        if !self.is_recording.load(Ordering::SeqCst) {
            return Err(RecorderError::StartFailed(
                "Capture did not start".into(),
            ));
        }

        Ok(())
    }

    async fn stop(&self) -> Result<SavedTake, RecorderError> {
        if !self.is_recording.load(Ordering::SeqCst) {
            return Err(RecorderError::NotRecording);
        }

        self.is_recording.store(false, Ordering::SeqCst);

        // Let the capture thread wind down
        tokio::time::sleep(TokioDuration::from_millis(100)).await;

        let destination = self
            .destination
            .lock()
            .unwrap()
            .take()
            .ok_or(RecorderError::NotRecording)?;

        let rate = self.device_rate.load(Ordering::SeqCst);
        let samples = {
            let mut buffer = self.buffer.lock().unwrap();
            std::mem::take(&mut *buffer)
        };

        if rate == 0 || samples.is_empty() {
            return Err(RecorderError::NoAudioCaptured);
        }

        let duration_ms = samples.len() as u64 * 1000 / rate as u64;

        let flac = tokio::task::spawn_blocking(move || encode_take(&samples, rate))
            .await
            .map_err(|e| RecorderError::EncodeFailed(format!("Encode task error: {}", e)))?
            .map_err(|e| RecorderError::EncodeFailed(e.to_string()))?;

        if let Some(parent) = destination.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| RecorderError::WriteFailed(e.to_string()))?;
        }

        let bytes = flac.len() as u64;
        tokio::fs::write(&destination, flac)
            .await
            .map_err(|e| RecorderError::WriteFailed(e.to_string()))?;

        info!(path = %destination.display(), bytes, duration_ms, "Take written");

        Ok(SavedTake {
            path: destination,
            duration_ms,
            bytes,
        })
    }

    fn is_recording(&self) -> bool {
        self.is_recording.load(Ordering::SeqCst)
    }
}

/// Average interleaved frames down to one channel
fn mix_to_mono(samples: &[i16], channels: u16) -> Vec<i16> {
    if channels == 1 {
        return samples.to_vec();
    }

    samples
        .chunks(channels as usize)
        .map(|frame| {
            let sum: i32 = frame.iter().map(|&s| s as i32).sum();
            (sum / channels as i32) as i16
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::engine_channel;

    #[test]
    fn mono_input_passes_through() {
        let mono = vec![100i16, 200, 300];
        assert_eq!(mix_to_mono(&mono, 1), mono);
    }

    #[test]
    fn stereo_input_averages_frames() {
        let stereo = vec![100i16, 200, 300, 400];
        assert_eq!(mix_to_mono(&stereo, 2), vec![150, 350]);
    }

    #[test]
    fn recorder_starts_idle() {
        let (events, _rx) = engine_channel();
        let recorder = CpalRecorder::new(events);
        assert!(!recorder.is_recording());
    }

    #[tokio::test]
    async fn stop_without_start_is_an_error() {
        let (events, _rx) = engine_channel();
        let recorder = CpalRecorder::new(events);
        assert!(matches!(
            recorder.stop().await,
            Err(RecorderError::NotRecording)
        ));
    }
}
