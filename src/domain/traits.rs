//! Core domain traits for dependency inversion.
//!
//! These traits define contracts between layers without depending on
//! concrete implementations. They enable:
//! - Testability via mock implementations
//! - Flexibility to swap model backends
//! - Clear API boundaries

use anyhow::Result;

/// Text generation abstraction.
///
/// Implementors produce a completion for a rendered prompt using some
/// language model backend (e.g. an Ollama server).
pub trait TextGeneration: Send + Sync {
    /// Generate a completion for the given prompt.
    ///
    /// Returns `Err` if the backend is unreachable or the model fails.
    fn generate(&self, prompt: &str) -> Result<String>;

    /// Get the name of the model answering prompts.
    fn model_name(&self) -> &str;
}

/// Speech-to-text transcription abstraction.
///
/// Implementors convert audio samples to text using various STT backends.
pub trait Transcription: Send + Sync {
    /// Transcribe audio samples to text.
    ///
    /// # Arguments
    /// * `samples` - Audio samples at 16kHz mono
    /// * `language` - Language code (e.g., "en", "auto")
    fn transcribe(&self, samples: &[f32], language: &str) -> Result<String>;
}
