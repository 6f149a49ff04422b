//! Whisper speech-to-text backend.

use crate::domain::traits::Transcription;
use anyhow::{Context, Result};
use whisper_rs::{FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters};

/// Whisper inference over ggml weights.
///
/// Loads the model once at construction; each `transcribe` call runs a
/// fresh inference state over the given samples.
pub struct WhisperSTT {
    ctx: WhisperContext,
}

impl WhisperSTT {
    pub fn new(model_path: &str) -> Result<Self> {
        let ctx = WhisperContext::new_with_params(model_path, WhisperContextParameters::default())
            .with_context(|| format!("Failed to load Whisper model: {}", model_path))?;

        Ok(Self { ctx })
    }
}

impl Transcription for WhisperSTT {
    fn transcribe(&self, samples: &[f32], language: &str) -> Result<String> {
        let mut params = FullParams::new(SamplingStrategy::Greedy { best_of: 1 });

        // "auto" leaves language detection to Whisper
        if language != "auto" {
            params.set_language(Some(language));
        }

        params.set_print_special(false);
        params.set_print_progress(false);
        params.set_print_realtime(false);
        params.set_print_timestamps(false);
        params.set_translate(false);

        let mut state = self.ctx.create_state()?;
        state.full(params, samples)?;

        let num_segments = state.full_n_segments()?;
        let mut text = String::new();

        for i in 0..num_segments {
            if let Ok(segment) = state.full_get_segment_text(i) {
                text.push_str(&segment);
                text.push(' ');
            }
        }

        Ok(text.trim().to_string())
    }
}
