//! FLAC encoding for the recording artifact
//!
//! Takes are stored compressed: mono, 16 kHz, 16-bit FLAC. Capture happens at
//! whatever rate the input device offers, so encoding resamples first when
//! the rates differ.

use flacenc::bitsink::ByteSink;
use flacenc::component::BitRepr;
use flacenc::config;
use flacenc::error::Verify;
use flacenc::source::MemSource;
use rubato::{FftFixedIn, Resampler};
use thiserror::Error;

use crate::domain::recording::{
    RECORDING_BITS_PER_SAMPLE, RECORDING_CHANNELS, RECORDING_SAMPLE_RATE,
};

/// FLAC encoding errors
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("Resampling failed: {0}")]
    Resample(String),

    #[error("FLAC config error: {0}")]
    Config(String),

    #[error("FLAC encoding failed: {0}")]
    Encode(String),

    #[error("FLAC write failed: {0}")]
    Write(String),
}

/// Encode mono PCM captured at `source_rate` into the artifact format.
///
/// # Returns
/// FLAC bytes ready to be written to the take path
pub fn encode_take(samples: &[i16], source_rate: u32) -> Result<Vec<u8>, EncodeError> {
    let resampled = resample_to_artifact_rate(samples, source_rate)?;
    encode_flac(&resampled)
}

/// Resample mono PCM from the device rate to the artifact rate
fn resample_to_artifact_rate(samples: &[i16], source_rate: u32) -> Result<Vec<i16>, EncodeError> {
    if source_rate == RECORDING_SAMPLE_RATE {
        return Ok(samples.to_vec());
    }

    let samples_f32: Vec<f32> = samples.iter().map(|&s| s as f32 / 32768.0).collect();

    let ratio = RECORDING_SAMPLE_RATE as f64 / source_rate as f64;
    let output_len = (samples_f32.len() as f64 * ratio).ceil() as usize;

    let mut resampler = FftFixedIn::<f32>::new(
        source_rate as usize,
        RECORDING_SAMPLE_RATE as usize,
        1024, // Chunk size
        2,    // Sub-chunks
        RECORDING_CHANNELS as usize,
    )
    .map_err(|e| EncodeError::Resample(e.to_string()))?;

    let mut output = Vec::with_capacity(output_len);
    let mut input_pos = 0;

    while input_pos < samples_f32.len() {
        let frames_needed = resampler.input_frames_next();
        let end_pos = (input_pos + frames_needed).min(samples_f32.len());

        // Pad the tail chunk up to the frame count the resampler expects
        let mut chunk = samples_f32[input_pos..end_pos].to_vec();
        if chunk.len() < frames_needed {
            chunk.resize(frames_needed, 0.0);
        }

        let resampled = resampler
            .process(&[chunk], None)
            .map_err(|e| EncodeError::Resample(e.to_string()))?;

        output.extend(resampled[0].iter().map(|&s| (s * 32767.0) as i16));
        input_pos = end_pos;
    }

    // Trim the padding back off
    output.truncate(output_len);

    Ok(output)
}

/// Encode mono 16 kHz PCM as FLAC
fn encode_flac(pcm_samples: &[i16]) -> Result<Vec<u8>, EncodeError> {
    // flacenc works on i32 samples internally
    let samples_i32: Vec<i32> = pcm_samples.iter().map(|&s| s as i32).collect();

    let config = config::Encoder::default()
        .into_verified()
        .map_err(|(_, e)| EncodeError::Config(format!("{:?}", e)))?;

    let source = MemSource::from_samples(
        &samples_i32,
        RECORDING_CHANNELS as usize,
        RECORDING_BITS_PER_SAMPLE as usize,
        RECORDING_SAMPLE_RATE as usize,
    );

    let flac_stream = flacenc::encode_with_fixed_block_size(&config, source, config.block_size)
        .map_err(|e| EncodeError::Encode(format!("{:?}", e)))?;

    let mut sink = ByteSink::new();
    flac_stream
        .write(&mut sink)
        .map_err(|e| EncodeError::Write(e.to_string()))?;

    Ok(sink.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_silence_at_artifact_rate() {
        let silence = vec![0i16; RECORDING_SAMPLE_RATE as usize];
        let flac = encode_take(&silence, RECORDING_SAMPLE_RATE).unwrap();

        assert!(flac.len() > 50);
        // FLAC magic number
        assert_eq!(&flac[0..4], b"fLaC");
    }

    #[test]
    fn encode_resamples_from_device_rate() {
        // 1 second of 440Hz at 48kHz must land as valid FLAC
        let samples: Vec<i16> = (0..48_000)
            .map(|i| {
                let t = i as f32 / 48_000.0;
                (f32::sin(2.0 * std::f32::consts::PI * 440.0 * t) * 16000.0) as i16
            })
            .collect();

        let flac = encode_take(&samples, 48_000).unwrap();
        assert_eq!(&flac[0..4], b"fLaC");
    }

    #[test]
    fn encode_short_capture() {
        // 100ms at the artifact rate
        let silence = vec![0i16; 1600];
        assert!(encode_take(&silence, RECORDING_SAMPLE_RATE).is_ok());
    }

    #[test]
    fn encode_compresses_tonal_audio() {
        let samples: Vec<i16> = (0..RECORDING_SAMPLE_RATE as usize)
            .map(|i| {
                let t = i as f32 / RECORDING_SAMPLE_RATE as f32;
                (f32::sin(2.0 * std::f32::consts::PI * 440.0 * t) * 16000.0) as i16
            })
            .collect();

        let flac = encode_take(&samples, RECORDING_SAMPLE_RATE).unwrap();
        assert!(flac.len() < samples.len() * 2);
    }

    #[test]
    fn resample_halves_sample_count_from_double_rate() {
        let samples = vec![0i16; 32_000];
        let resampled = resample_to_artifact_rate(&samples, 32_000).unwrap();
        assert_eq!(resampled.len(), RECORDING_SAMPLE_RATE as usize);
    }

    #[test]
    fn resample_is_identity_at_artifact_rate() {
        let samples = vec![100i16, -100, 200, -200];
        let resampled = resample_to_artifact_rate(&samples, RECORDING_SAMPLE_RATE).unwrap();
        assert_eq!(resampled, samples);
    }
}
