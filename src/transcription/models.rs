//! Whisper model management: tier resolution and weights download.

use crate::config::models_dir;
use crate::transcription::args::ModelTier;
use anyhow::{bail, Context, Result};
use futures_util::StreamExt;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

const HUGGINGFACE_BASE_URL: &str = "https://huggingface.co/ggerganov/whisper.cpp/resolve/main/";

/// Where the weights for a tier live on disk.
pub fn model_path(tier: ModelTier) -> PathBuf {
    models_dir().join(tier.filename())
}

/// Whether the weights for a tier are already on disk.
pub fn is_model_downloaded(tier: ModelTier) -> bool {
    weights_present(&models_dir(), tier)
}

fn weights_present(dir: &Path, tier: ModelTier) -> bool {
    dir.join(tier.filename()).exists()
}

/// Resolve the weights for a tier, downloading them on first use.
///
/// Download progress goes to stderr so stdout stays reserved for the
/// transcript.
pub fn ensure_model(tier: ModelTier) -> Result<PathBuf> {
    let path = model_path(tier);
    if is_model_downloaded(tier) {
        return Ok(path);
    }

    eprintln!(
        "Model {} not found locally, downloading {} ({}) ...",
        tier.as_str(),
        tier.filename(),
        format_size(tier.size_bytes())
    );

    let runtime = tokio::runtime::Runtime::new().context("Failed to create async runtime")?;
    let last_percent = AtomicU64::new(u64::MAX);
    runtime.block_on(download_model(tier.filename(), move |downloaded, total| {
        if total == 0 {
            return;
        }
        let percent = downloaded * 100 / total;
        if last_percent.swap(percent, Ordering::Relaxed) != percent {
            eprint!(
                "\r  {} / {} ({}%)",
                format_size(downloaded),
                format_size(total),
                percent
            );
        }
    }))?;
    eprintln!();

    info!("Downloaded model to {}", path.display());
    Ok(path)
}

/// Stream the weights file into the models directory.
///
/// Writes to a `.downloading` temp file and renames on completion so an
/// interrupted download never leaves a partial model behind.
pub async fn download_model<F>(filename: &str, progress_callback: F) -> Result<()>
where
    F: Fn(u64, u64) + Send + 'static,
{
    let url = format!("{}{}", HUGGINGFACE_BASE_URL, filename);
    let dir = models_dir();

    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let temp_path = dir.join(format!("{}.downloading", filename));
    let final_path = dir.join(filename);

    let client = reqwest::Client::new();
    let response = client
        .get(&url)
        .send()
        .await
        .with_context(|| format!("Failed to connect: {}", url))?;

    if !response.status().is_success() {
        bail!("Download failed: HTTP {}", response.status());
    }

    let total_size = response.content_length().unwrap_or(0);
    let mut downloaded: u64 = 0;

    let mut file = fs::File::create(&temp_path)
        .with_context(|| format!("Failed to create file: {}", temp_path.display()))?;

    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.context("Download interrupted")?;
        std::io::Write::write_all(&mut file, &chunk).context("Failed to write data")?;

        downloaded += chunk.len() as u64;
        progress_callback(downloaded, total_size);
    }

    fs::rename(&temp_path, &final_path).with_context(|| {
        format!(
            "Failed to rename {} -> {}",
            temp_path.display(),
            final_path.display()
        )
    })?;

    Ok(())
}

pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{} MB", bytes / MB)
    } else if bytes >= KB {
        format!("{} KB", bytes / KB)
    } else {
        format!("{} B", bytes)
    }
}
