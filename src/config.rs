use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub transcription: TranscriptionConfig,
}

/// Settings for the chatbot's Ollama collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    #[serde(default = "default_ollama_url")]
    pub ollama_url: String,
    #[serde(default = "default_chat_model")]
    pub model: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptionConfig {
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_ollama_url() -> String {
    "http://localhost:11434".to_string()
}

fn default_chat_model() -> String {
    "llama3".to_string()
}

fn default_timeout_secs() -> u64 {
    120 // local generation can be slow; expiry is a fatal error
}

fn default_language() -> String {
    "auto".to_string() // let Whisper detect the spoken language
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            ollama_url: default_ollama_url(),
            model: default_chat_model(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for TranscriptionConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
        }
    }
}

impl Config {
    /// Validates config values after loading. Clamps out-of-range values
    /// and rejects clearly invalid inputs.
    pub fn validate(&mut self) -> Result<()> {
        if self.chat.model.trim().is_empty() {
            bail!("chat model name must not be empty");
        }

        if self.chat.ollama_url.trim().is_empty() {
            bail!("ollama_url must not be empty");
        }

        self.chat.timeout_secs = self.chat.timeout_secs.clamp(1, 3600);

        if self.transcription.language.trim().is_empty() {
            self.transcription.language = default_language();
        }

        Ok(())
    }
}

pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("local-ai-tools")
}

pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

pub fn models_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("whisper")
}

pub fn load_config() -> Result<Config> {
    let path = config_path();

    let mut config = if path.exists() {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        toml::from_str(&content).with_context(|| "Failed to parse config")?
    } else {
        Config::default()
    };

    apply_env_overrides(&mut config, |name| std::env::var(name).ok());
    config.validate()?;
    Ok(config)
}

/// Environment variables take precedence over the config file.
pub fn apply_env_overrides<F>(config: &mut Config, get: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = get("OLLAMA_BASE_URL") {
        config.chat.ollama_url = url;
    }
    if let Some(model) = get("OLLAMA_MODEL") {
        config.chat.model = model;
    }
}
