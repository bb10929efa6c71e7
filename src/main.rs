use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use linsight::classifier::AdClassifier;
use linsight::config::Config;
use linsight::corpus::{self, CorpusViews};
use linsight::insights;
use linsight::normalize::Normalizer;
use linsight::output::terminal;
use linsight::status;
use linsight::suggest;
use linsight::topics::TfIdfExtractor;

/// Linsight: insight mining for a scraped LinkedIn feed.
///
/// Reads the JSON dumps an external collector writes, filters out
/// advertisements, and derives topic and engagement insights plus
/// templated content suggestions.
#[derive(Parser)]
#[command(name = "linsight", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze the collected feed and write an insight report
    Analyze {
        /// How many top topics to include in the report
        #[arg(long, default_value = "10")]
        top_n: usize,
    },

    /// Generate content suggestions from the latest insight report
    Suggest {
        /// How many suggestions to generate
        #[arg(long, default_value = "5")]
        count: usize,
    },

    /// Show system status (feed files, post counts, latest report)
    Status,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("linsight=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze { top_n } => {
            let config = Config::load()?;
            config.require_data_dir()?;

            println!("Loading feed data from {}...", config.data_dir.display());
            let posts = corpus::load_dir(&config.data_dir)?;

            let classifier = AdClassifier::new();
            let views = CorpusViews::build(&posts, &classifier);
            println!(
                "Analyzing {} posts ({} organic, {} filtered as ads)...",
                views.all.len(),
                views.organic.len(),
                views.ad_count()
            );

            let normalizer = Normalizer::new();
            let extractor = TfIdfExtractor { top_n };
            let report = insights::assemble(&views, &normalizer, &extractor);

            let path = insights::save(&report, &config.output_dir)?;
            info!(ads = views.ad_count(), "Analysis complete");

            terminal::display_report(&report);
            println!("Report saved to {}", path.display().to_string().bold());
        }

        Commands::Suggest { count } => {
            let config = Config::load()?;

            println!(
                "Loading latest insight report from {}...",
                config.output_dir.display()
            );
            let report = insights::load_latest(&config.output_dir)?;

            let suggestions = suggest::generate(&report, count)?;
            let practices = suggest::best_practices(&report);

            terminal::display_suggestions(&suggestions, &practices);

            let path = suggest::save(suggestions, practices, &config.output_dir)?;
            println!("Suggestions saved to {}", path.display().to_string().bold());
        }

        Commands::Status => {
            let config = Config::load()?;
            status::show(&config)?;
        }
    }

    Ok(())
}
