//! Speech-to-text pipeline: CLI arguments, model management, WAV
//! preparation and the Whisper backend.

pub mod args;
pub mod models;
pub mod runner;
pub mod wav;
pub mod whisper;

pub use args::{ModelTier, TranscribeArgs};
pub use whisper::WhisperSTT;
