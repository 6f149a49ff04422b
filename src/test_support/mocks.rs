//! Mock implementations for unit testing.
//!
//! These mocks implement the core traits from `crate::domain::traits` to
//! enable testing without an Ollama server or Whisper models.

use crate::domain::traits::{TextGeneration, Transcription};
use anyhow::Result;
use std::sync::Mutex;

/// Mock text generator for testing.
///
/// Returns a predefined answer and records every prompt it was given so
/// tests can assert on what the loop submitted.
pub struct MockGenerator {
    answer: String,
    failure: Option<String>,
    prompts: Mutex<Vec<String>>,
}

impl MockGenerator {
    /// Create a mock that answers every prompt with the given text.
    pub fn returning(answer: &str) -> Self {
        Self {
            answer: answer.to_string(),
            failure: None,
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Create a mock whose generate() always fails with the given message.
    pub fn failing(message: &str) -> Self {
        Self {
            answer: String::new(),
            failure: Some(message.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Get all prompts submitted so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl TextGeneration for MockGenerator {
    fn generate(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        if let Some(ref message) = self.failure {
            anyhow::bail!("{}", message);
        }
        Ok(self.answer.clone())
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

/// Mock transcription service for testing.
///
/// Returns predefined text instead of actually transcribing and records
/// the language each call used.
pub struct MockTranscription {
    result: Mutex<String>,
    failure: Option<String>,
    languages: Mutex<Vec<String>>,
}

impl MockTranscription {
    /// Create a mock that returns the given text.
    pub fn returning(text: &str) -> Self {
        Self {
            result: Mutex::new(text.to_string()),
            failure: None,
            languages: Mutex::new(Vec::new()),
        }
    }

    /// Create a mock whose transcribe() always fails with the given message.
    pub fn failing(message: &str) -> Self {
        Self {
            result: Mutex::new(String::new()),
            failure: Some(message.to_string()),
            languages: Mutex::new(Vec::new()),
        }
    }

    /// Set the text to return on next transcribe().
    pub fn set_result(&self, text: &str) {
        *self.result.lock().unwrap() = text.to_string();
    }

    /// Get the language arguments of all transcribe() calls so far.
    pub fn languages(&self) -> Vec<String> {
        self.languages.lock().unwrap().clone()
    }
}

impl Transcription for MockTranscription {
    fn transcribe(&self, _samples: &[f32], language: &str) -> Result<String> {
        self.languages.lock().unwrap().push(language.to_string());
        if let Some(ref message) = self.failure {
            anyhow::bail!("{}", message);
        }
        Ok(self.result.lock().unwrap().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_generator_returns_answer() {
        let generator = MockGenerator::returning("Hi there");
        assert_eq!(generator.generate("prompt").unwrap(), "Hi there");
        assert_eq!(generator.model_name(), "mock-model");
    }

    #[test]
    fn test_mock_generator_records_prompts() {
        let generator = MockGenerator::returning("answer");
        generator.generate("first").unwrap();
        generator.generate("second").unwrap();
        assert_eq!(generator.prompts(), vec!["first", "second"]);
    }

    #[test]
    fn test_mock_generator_failing() {
        let generator = MockGenerator::failing("model unavailable");
        let result = generator.generate("prompt");
        assert!(result.is_err());
        // the failed call is still recorded
        assert_eq!(generator.prompts().len(), 1);
    }

    #[test]
    fn test_mock_transcription_returns_text() {
        let transcriber = MockTranscription::returning("hello world");
        let result = transcriber.transcribe(&[], "en").unwrap();
        assert_eq!(result, "hello world");
    }

    #[test]
    fn test_mock_transcription_records_languages() {
        let transcriber = MockTranscription::returning("text");
        transcriber.transcribe(&[], "auto").unwrap();
        transcriber.transcribe(&[], "en").unwrap();
        assert_eq!(transcriber.languages(), vec!["auto", "en"]);
    }

    #[test]
    fn test_mock_transcription_set_result() {
        let transcriber = MockTranscription::returning("initial");
        assert_eq!(transcriber.transcribe(&[], "en").unwrap(), "initial");

        transcriber.set_result("updated");
        assert_eq!(transcriber.transcribe(&[], "en").unwrap(), "updated");
    }

    #[test]
    fn test_mock_transcription_failing() {
        let transcriber = MockTranscription::failing("inference failed");
        assert!(transcriber.transcribe(&[0.0; 160], "auto").is_err());
    }

    #[test]
    fn test_generator_as_trait_object() {
        let generator: Box<dyn TextGeneration> = Box::new(MockGenerator::returning("test output"));
        assert_eq!(generator.generate("p").unwrap(), "test output");
    }

    #[test]
    fn test_transcription_as_trait_object() {
        let transcriber: Box<dyn Transcription> =
            Box::new(MockTranscription::returning("test output"));
        let text = transcriber.transcribe(&[0.0; 16000], "auto").unwrap();
        assert_eq!(text, "test output");
    }
}
