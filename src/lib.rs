pub mod chat;
pub mod config;
pub mod domain;
pub mod transcription;

#[cfg(test)]
pub mod test_support;
