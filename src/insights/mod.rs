// Insight report assembly and persistence.
//
// Pulls the pipeline stages together: topics from the normalized organic
// view, engagement from the full view, plus post count and date range.
// One immutable report per run, written as a timestamped JSON artifact.
// Writes are whole-object and non-atomic; there is no merging with prior
// reports and no partial persistence of a failed run.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::corpus::CorpusViews;
use crate::engagement::{self, EngagementSummary};
use crate::normalize::Normalizer;
use crate::topics::TfIdfExtractor;

const REPORT_PREFIX: &str = "analysis_insights_";

/// Min/max timestamp across the full corpus. Both None when the corpus is
/// empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<String>,
    pub end: Option<String>,
}

/// The single artifact of an analysis run. `top_topics` serializes as an
/// ordered array of `[term, score]` pairs — the shape the suggestion
/// generator consumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightReport {
    pub top_topics: Vec<(String, f32)>,
    pub engagement_analysis: EngagementSummary,
    pub total_posts_analyzed: usize,
    pub date_range: DateRange,
}

/// Assemble a report from the corpus views.
///
/// Topics come from the normalized organic subset; engagement, post count,
/// and date range cover the full corpus, ads included. An empty corpus
/// still produces a report, with zero counts and empty sections.
pub fn assemble(
    views: &CorpusViews<'_>,
    normalizer: &Normalizer,
    extractor: &TfIdfExtractor,
) -> InsightReport {
    let normalized: Vec<String> = views
        .organic
        .iter()
        .map(|post| normalizer.normalize(&post.text))
        .collect();

    let top_topics = extractor.extract(&normalized);
    let engagement_analysis = engagement::aggregate(views.all);

    let date_range = DateRange {
        start: views
            .all
            .iter()
            .map(|p| p.timestamp.as_str())
            .min()
            .map(str::to_string),
        end: views
            .all
            .iter()
            .map(|p| p.timestamp.as_str())
            .max()
            .map(str::to_string),
    };

    InsightReport {
        top_topics,
        engagement_analysis,
        total_posts_analyzed: views.all.len(),
        date_range,
    }
}

/// Write the report as `analysis_insights_<timestamp>.json` in the output
/// directory, creating the directory if needed. Returns the artifact path.
pub fn save(report: &InsightReport, output_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Cannot create output directory {}", output_dir.display()))?;

    let filename = format!(
        "{REPORT_PREFIX}{}.json",
        Local::now().format("%Y%m%d_%H%M%S")
    );
    let path = output_dir.join(filename);

    let json = serde_json::to_string_pretty(report)?;
    fs::write(&path, json)
        .with_context(|| format!("Cannot write insight report {}", path.display()))?;

    info!(path = %path.display(), "Saved insight report");
    Ok(path)
}

/// Load the most recent insight report from the output directory.
///
/// Artifact names embed their timestamp, so the lexicographically largest
/// filename is the newest report.
pub fn load_latest(output_dir: &Path) -> Result<InsightReport> {
    let entries = fs::read_dir(output_dir)
        .with_context(|| format!("Cannot read output directory {}", output_dir.display()))?;

    let mut latest: Option<PathBuf> = None;
    for entry in entries {
        let path = entry?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if name.starts_with(REPORT_PREFIX)
            && name.ends_with(".json")
            && latest.as_ref().is_none_or(|l| path > *l)
        {
            latest = Some(path);
        }
    }

    let Some(path) = latest else {
        anyhow::bail!(
            "No insight reports found in {} — run `linsight analyze` first",
            output_dir.display()
        );
    };

    let raw = fs::read_to_string(&path)
        .with_context(|| format!("Cannot read insight report {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Malformed insight report {}", path.display()))
}
