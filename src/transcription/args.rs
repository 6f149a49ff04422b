//! CLI argument definitions using clap.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Whisper model size/quality tier.
#[derive(Clone, Copy, PartialEq, Eq, ValueEnum, Default, Debug)]
pub enum ModelTier {
    /// Fastest, least accurate
    Tiny,
    /// Balanced speed and accuracy (default)
    #[default]
    Base,
    /// Good accuracy
    Small,
    /// High accuracy
    Medium,
    /// Best accuracy, slowest
    Large,
}

impl ModelTier {
    /// The ggml weights file for this tier.
    pub fn filename(&self) -> &'static str {
        match self {
            ModelTier::Tiny => "ggml-tiny.bin",
            ModelTier::Base => "ggml-base.bin",
            ModelTier::Small => "ggml-small.bin",
            ModelTier::Medium => "ggml-medium.bin",
            ModelTier::Large => "ggml-large-v3.bin",
        }
    }

    /// Approximate size of the weights download.
    pub fn size_bytes(&self) -> u64 {
        match self {
            ModelTier::Tiny => 75_000_000,
            ModelTier::Base => 148_000_000,
            ModelTier::Small => 488_000_000,
            ModelTier::Medium => 1_500_000_000,
            ModelTier::Large => 3_100_000_000,
        }
    }

    /// The tier name as written on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelTier::Tiny => "tiny",
            ModelTier::Base => "base",
            ModelTier::Small => "small",
            ModelTier::Medium => "medium",
            ModelTier::Large => "large",
        }
    }
}

/// Speech-to-text over a single audio file.
#[derive(Parser)]
#[command(name = "transcribe")]
#[command(about = "Transcribe an audio file to text using Whisper", long_about = None)]
#[command(version)]
pub struct TranscribeArgs {
    /// Path to the audio file to transcribe
    pub audio_path: PathBuf,

    /// Whisper model tier to use
    #[arg(long, value_enum, default_value_t = ModelTier::Base)]
    pub model: ModelTier,
}
