//! Audio engine adapters
//!
//! Capture via cpal, takes stored as FLAC, playback via rodio.

mod cpal_recorder;
mod flac;
mod rodio_player;
mod session;

pub use cpal_recorder::CpalRecorder;
pub use flac::{encode_take, EncodeError};
pub use rodio_player::RodioPlayer;
pub use session::CpalAudioSession;
