//! Core domain abstractions shared by the chat and transcription tools.

pub mod traits;
