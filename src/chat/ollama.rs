//! Blocking client for the Ollama HTTP API.

use crate::domain::traits::TextGeneration;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

/// Client for a locally hosted Ollama server.
///
/// Built once per process and reused across turns. The HTTP stack is async
/// internally but callers see a blocking `generate`; requests run on a
/// runtime owned by the client, one at a time.
pub struct OllamaClient {
    base_url: String,
    model: String,
    client: reqwest::Client,
    runtime: tokio::runtime::Runtime,
}

impl OllamaClient {
    /// Create a client for the given server and model.
    ///
    /// Does not contact the server; an unreachable server surfaces as an
    /// error on the first `generate` call.
    pub fn new(base_url: &str, model: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        let runtime =
            tokio::runtime::Runtime::new().context("Failed to create async runtime")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            client,
            runtime,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/api/generate", self.base_url)
    }

    async fn request(&self, prompt: &str) -> Result<String> {
        let url = self.endpoint();
        let request = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .with_context(|| format!("Failed to reach Ollama at {} (is the server running?)", url))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .context("Failed to read Ollama response")?;

        if !status.is_success() {
            bail!("Ollama HTTP error {}: {}", status, body);
        }

        let parsed: GenerateResponse =
            serde_json::from_str(&body).context("Failed to parse Ollama response")?;

        Ok(parsed.response)
    }
}

impl TextGeneration for OllamaClient {
    fn generate(&self, prompt: &str) -> Result<String> {
        self.runtime.block_on(self.request(prompt))
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
