use std::env;
use std::path::PathBuf;

use anyhow::Result;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy.
/// Collector credentials (LINKEDIN_EMAIL / LINKEDIN_PASSWORD) belong to
/// the external scraper and are never read by the analysis pipeline.
pub struct Config {
    /// Directory the collector writes raw feed JSON files into.
    pub data_dir: PathBuf,
    /// Directory insight reports and content suggestions are written to.
    pub output_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Both directories have defaults matching the collector's layout,
    /// so a bare `linsight analyze` works out of the box.
    pub fn load() -> Result<Self> {
        Ok(Self {
            data_dir: env::var("LINSIGHT_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data/raw")),
            output_dir: env::var("LINSIGHT_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data")),
        })
    }

    /// Check that the raw data directory exists.
    /// Call this before any operation that reads the scraped feed.
    pub fn require_data_dir(&self) -> Result<()> {
        if !self.data_dir.is_dir() {
            anyhow::bail!(
                "Data directory {} not found.\n\
                 Run the collector first, or point LINSIGHT_DATA_DIR at your feed dumps.",
                self.data_dir.display()
            );
        }
        Ok(())
    }
}
