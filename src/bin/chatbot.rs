//! Interactive chatbot over a locally hosted Ollama model.

use anyhow::Result;
use local_ai_tools::chat::{run_conversation, OllamaClient};
use local_ai_tools::config::{load_config, Config};
use log::{info, warn};
use std::io;
use std::time::Duration;

fn main() -> Result<()> {
    env_logger::init();

    let config = load_config().unwrap_or_else(|e| {
        warn!("Failed to load config, using defaults: {:#}", e);
        Config::default()
    });

    let client = OllamaClient::new(
        &config.chat.ollama_url,
        &config.chat.model,
        Duration::from_secs(config.chat.timeout_secs),
    )?;
    info!(
        "Using model {} at {}",
        config.chat.model, config.chat.ollama_url
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_conversation(stdin.lock(), stdout.lock(), &client)
}
