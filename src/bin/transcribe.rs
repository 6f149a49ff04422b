//! Speech-to-text transcription of a single audio file.

use anyhow::Result;
use clap::Parser;
use local_ai_tools::config::{load_config, Config};
use local_ai_tools::transcription::runner;
use local_ai_tools::transcription::TranscribeArgs;
use log::warn;

fn main() -> Result<()> {
    env_logger::init();

    // clap rejects bad arguments before anything else happens
    let args = TranscribeArgs::parse();

    let config = load_config().unwrap_or_else(|e| {
        warn!("Failed to load config, using defaults: {:#}", e);
        Config::default()
    });

    runner::run(&args, &config)
}
