// System status display — shows data dir contents and the latest report.

use std::fs;
use std::path::Path;

use anyhow::Result;

use crate::config::Config;
use crate::corpus;
use crate::insights;

/// Display system status to the terminal.
pub fn show(config: &Config) -> Result<()> {
    if !config.data_dir.is_dir() {
        println!("Data directory: {} (missing)", config.data_dir.display());
        println!("\nRun the collector to populate it, then `linsight analyze`.");
        return Ok(());
    }

    let json_files = count_json_files(&config.data_dir)?;
    println!(
        "Data directory: {} ({} feed files)",
        config.data_dir.display(),
        json_files
    );

    if json_files > 0 {
        match corpus::load_dir(&config.data_dir) {
            Ok(posts) => println!("Posts collected: {}", posts.len()),
            Err(err) => println!("Posts collected: unreadable ({err:#})"),
        }
    }

    match insights::load_latest(&config.output_dir) {
        Ok(report) => {
            println!(
                "Latest report: {} posts analyzed, {} topics",
                report.total_posts_analyzed,
                report.top_topics.len()
            );
            if let (Some(start), Some(end)) = (&report.date_range.start, &report.date_range.end) {
                println!("  Covers {start} — {end}");
            }
        }
        Err(_) => {
            println!("Latest report: none");
            println!("  Run `linsight analyze` to build one");
        }
    }

    Ok(())
}

fn count_json_files(dir: &Path) -> Result<usize> {
    let count = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "json"))
        .count();
    Ok(count)
}
