use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::models::Post;

/// Load every `*.json` feed dump in `data_dir` into one corpus.
///
/// Files are read in sorted filename order so repeated runs over the same
/// directory produce the same corpus order. Posts are not deduplicated —
/// re-scraped posts appear as many times as the collector saved them.
///
/// Fails fast if the directory has no JSON files or any file contains a
/// record that doesn't match the Post schema; there is no per-record
/// recovery.
pub fn load_dir(data_dir: &Path) -> Result<Vec<Post>> {
    let entries = fs::read_dir(data_dir)
        .with_context(|| format!("Cannot read data directory {}", data_dir.display()))?;

    let mut files: Vec<_> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();

    if files.is_empty() {
        anyhow::bail!(
            "No JSON feed files found in {} — run the collector first",
            data_dir.display()
        );
    }

    files.sort();

    let mut posts = Vec::new();
    for path in &files {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Cannot read feed file {}", path.display()))?;
        let batch: Vec<Post> = serde_json::from_str(&raw)
            .with_context(|| format!("Malformed post record in {}", path.display()))?;
        posts.extend(batch);
    }

    info!(
        files = files.len(),
        posts = posts.len(),
        "Loaded feed corpus"
    );

    Ok(posts)
}
