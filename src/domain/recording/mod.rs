//! Recording domain module

mod take;

pub use take::{
    RecordingTake, SavedTake, RECORDING_BITS_PER_SAMPLE, RECORDING_CHANNELS, RECORDING_FILE_NAME,
    RECORDING_SAMPLE_RATE,
};
