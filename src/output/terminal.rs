// Colored terminal output for insight reports and suggestions.
//
// This module handles all terminal-specific formatting. The main.rs
// command handlers delegate here.

use colored::Colorize;

use crate::insights::InsightReport;
use crate::suggest::{BestPractices, Suggestion};

/// Display an insight report in the terminal.
pub fn display_report(report: &InsightReport) {
    println!(
        "\n{}",
        format!(
            "=== Insight Report ({} posts) ===",
            report.total_posts_analyzed
        )
        .bold()
    );

    if let (Some(start), Some(end)) = (&report.date_range.start, &report.date_range.end) {
        println!("  Date range: {start} — {end}");
    }

    if report.top_topics.is_empty() {
        println!("\nTop topics: none (corpus was empty or all ads)");
    } else {
        println!("\n{}", "Top topics:".bold());
        for (i, (term, score)) in report.top_topics.iter().enumerate() {
            println!("  {:>2}. {:<24} {:.3}", i + 1, term, score);
        }
    }

    let avg = &report.engagement_analysis.average_engagement;
    println!("\n{}", "Average engagement:".bold());
    println!("  Likes:    {:.2}", avg.likes);
    println!("  Comments: {:.2}", avg.comments);
    println!("  Shares:   {:.2}", avg.shares);

    if !report.engagement_analysis.top_posts.is_empty() {
        println!("\n{}", "Top posts by engagement:".bold());
        for (i, post) in report.engagement_analysis.top_posts.iter().enumerate() {
            let preview = super::truncate_chars(&post.text, 80);
            println!(
                "  {}. [{}] {}",
                i + 1,
                post.total_engagement,
                preview.dimmed()
            );
        }
    }

    println!();
}

/// Display generated content suggestions and best practices.
pub fn display_suggestions(suggestions: &[Suggestion], practices: &BestPractices) {
    println!(
        "\n{}",
        format!("=== Content Suggestions ({}) ===", suggestions.len()).bold()
    );
    println!();

    for (i, suggestion) in suggestions.iter().enumerate() {
        let potential = colorize_potential(&suggestion.engagement_potential);
        println!("  {}. {}", i + 1, suggestion.template);
        println!(
            "     Category: {}  |  Engagement potential: {}",
            suggestion.category.dimmed(),
            potential
        );
    }

    println!("\n{}", "Best practices:".bold());
    println!("  {}", practices.posting_frequency);
    println!("  {}", practices.content_length);

    println!("\n  Engagement tips:");
    for tip in &practices.engagement_tips {
        println!("    - {tip}");
    }

    if !practices.best_performing_topics.is_empty() {
        println!("\n  Top performing topics:");
        for topic in &practices.best_performing_topics {
            println!("    - {topic}");
        }
    }

    println!();
}

fn colorize_potential(potential: &str) -> colored::ColoredString {
    match potential {
        "High" => potential.green().bold(),
        "Medium" => potential.yellow(),
        _ => potential.dimmed(),
    }
}
