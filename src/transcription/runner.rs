//! The transcription pipeline behind the `transcribe` binary.

use crate::config::Config;
use crate::domain::traits::Transcription;
use crate::transcription::args::{ModelTier, TranscribeArgs};
use crate::transcription::models::ensure_model;
use crate::transcription::wav::{prepare_for_whisper, read_wav};
use crate::transcription::whisper::WhisperSTT;
use anyhow::Result;
use log::debug;
use std::io::{self, Write};
use std::path::Path;

/// Run the transcribe command.
pub fn run(args: &TranscribeArgs, config: &Config) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    run_pipeline(args, &config.transcription.language, &mut out, |tier| {
        let model_path = ensure_model(tier)?;
        let engine = WhisperSTT::new(&model_path.to_string_lossy())?;
        Ok(Box::new(engine) as Box<dyn Transcription>)
    })
}

/// Execute the pipeline with an injected engine loader.
///
/// The model is loaded before the audio file is touched, so a model
/// failure surfaces without reading the input at all.
pub fn run_pipeline<W, F>(
    args: &TranscribeArgs,
    language: &str,
    out: &mut W,
    load_engine: F,
) -> Result<()>
where
    W: Write,
    F: FnOnce(ModelTier) -> Result<Box<dyn Transcription>>,
{
    // 1. Load the requested model tier
    writeln!(out, "Loading Whisper model: {} ...", args.model.as_str())?;
    out.flush()?;
    let engine = load_engine(args.model)?;

    // 2. Read, prepare and transcribe the file
    transcribe_file(engine.as_ref(), &args.audio_path, language, out)
}

/// Run inference over one audio file and print the framed transcript.
pub fn transcribe_file<W: Write>(
    engine: &dyn Transcription,
    audio_path: &Path,
    language: &str,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "Transcribing file: {} ...", audio_path.display())?;
    out.flush()?;

    let audio = read_wav(audio_path)?;
    debug!(
        "Read {}: {} channels, {} Hz, {:.1}s",
        audio_path.display(),
        audio.channels,
        audio.sample_rate,
        audio.duration_secs
    );

    let samples = prepare_for_whisper(&audio)?;
    let text = engine.transcribe(&samples, language)?;

    writeln!(out, "\n--- Transcription Result ---\n")?;
    writeln!(out, "{}", text)?;

    Ok(())
}
