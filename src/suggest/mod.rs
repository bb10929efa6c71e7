// Content suggestion generation.
//
// Downstream consumer of the insight report: picks random topics from
// `top_topics`, fills fixed string templates across four categories, and
// tags suggestions built from the top 3 topics as high engagement
// potential. Output is a timestamped JSON artifact alongside the reports.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::insights::InsightReport;

/// How many topics from the head of `top_topics` count as high engagement
/// potential.
pub const HIGH_POTENTIAL_TOPICS: usize = 3;

/// Fixed suggestion templates, grouped by category. `{topic}` is replaced
/// with the chosen topic term.
pub const TEMPLATE_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "industry_insights",
        &[
            "Here's what I've learned about {topic} in the industry...",
            "My thoughts on the future of {topic}...",
            "The impact of {topic} on our industry...",
        ],
    ),
    (
        "tips_and_tricks",
        &[
            "5 ways to improve your {topic}...",
            "How to master {topic} in 3 simple steps...",
            "The secret to successful {topic}...",
        ],
    ),
    (
        "case_studies",
        &[
            "How we implemented {topic} and what we learned...",
            "A case study on {topic} implementation...",
            "Real-world example of {topic} in action...",
        ],
    ),
    (
        "trend_analysis",
        &[
            "The latest trends in {topic}...",
            "What's next for {topic}?",
            "Emerging patterns in {topic}...",
        ],
    ),
];

/// One templated post idea.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    pub topic: String,
    pub template: String,
    pub category: String,
    pub engagement_potential: String,
}

/// Static guidance attached to every suggestion run, with the current
/// best-performing topics filled in from the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BestPractices {
    pub posting_frequency: String,
    pub content_length: String,
    pub engagement_tips: Vec<String>,
    pub best_performing_topics: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionReport {
    pub suggestions: Vec<Suggestion>,
    pub best_practices: BestPractices,
    pub generated_at: String,
}

/// Generate `count` random templated suggestions from the report's topics.
///
/// Fails if the report carries no topics at all — there is nothing to fill
/// the templates with.
pub fn generate(report: &InsightReport, count: usize) -> Result<Vec<Suggestion>> {
    if report.top_topics.is_empty() {
        anyhow::bail!("Insight report has no topics — rerun `linsight analyze` on a fuller feed");
    }

    let topics: Vec<&str> = report
        .top_topics
        .iter()
        .map(|(term, _)| term.as_str())
        .collect();
    let high_potential: Vec<&str> = topics
        .iter()
        .take(HIGH_POTENTIAL_TOPICS)
        .copied()
        .collect();

    let mut rng = rand::rng();
    let mut suggestions = Vec::with_capacity(count);

    for _ in 0..count {
        let Some(&topic) = topics.choose(&mut rng) else {
            break;
        };
        let Some(&(category, templates)) = TEMPLATE_CATEGORIES.choose(&mut rng) else {
            break;
        };
        let Some(&template) = templates.choose(&mut rng) else {
            break;
        };

        let potential = if high_potential.contains(&topic) {
            "High"
        } else {
            "Medium"
        };

        suggestions.push(Suggestion {
            topic: topic.to_string(),
            template: template.replace("{topic}", topic),
            category: category.to_string(),
            engagement_potential: potential.to_string(),
        });
    }

    Ok(suggestions)
}

/// Build the best-practices block from the report.
pub fn best_practices(report: &InsightReport) -> BestPractices {
    BestPractices {
        posting_frequency: "Based on the analysis, aim to post 2-3 times per week for optimal \
                            engagement"
            .to_string(),
        content_length: "Posts with 100-200 words tend to perform better".to_string(),
        engagement_tips: vec![
            "Include a clear call-to-action in your posts".to_string(),
            "Use relevant hashtags related to your industry".to_string(),
            "Engage with comments within the first hour of posting".to_string(),
            "Share personal experiences and insights".to_string(),
            "Include relevant statistics or data points".to_string(),
        ],
        best_performing_topics: report
            .top_topics
            .iter()
            .take(HIGH_POTENTIAL_TOPICS)
            .map(|(term, _)| term.clone())
            .collect(),
    }
}

/// Write suggestions as `content_suggestions_<timestamp>.json` next to the
/// insight reports. Returns the artifact path.
pub fn save(
    suggestions: Vec<Suggestion>,
    best_practices: BestPractices,
    output_dir: &Path,
) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Cannot create output directory {}", output_dir.display()))?;

    let report = SuggestionReport {
        suggestions,
        best_practices,
        generated_at: Local::now().to_rfc3339(),
    };

    let filename = format!(
        "content_suggestions_{}.json",
        Local::now().format("%Y%m%d_%H%M%S")
    );
    let path = output_dir.join(filename);

    let json = serde_json::to_string_pretty(&report)?;
    fs::write(&path, json)
        .with_context(|| format!("Cannot write suggestions {}", path.display()))?;

    info!(path = %path.display(), "Saved content suggestions");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engagement::EngagementSummary;
    use crate::insights::DateRange;

    fn report_with_topics(terms: &[&str]) -> InsightReport {
        InsightReport {
            top_topics: terms
                .iter()
                .enumerate()
                .map(|(i, t)| ((*t).to_string(), 1.0 - i as f32 * 0.1))
                .collect(),
            engagement_analysis: EngagementSummary::default(),
            total_posts_analyzed: 0,
            date_range: DateRange::default(),
        }
    }

    #[test]
    fn generates_requested_count() {
        let report = report_with_topics(&["rust", "compilers", "databases", "testing"]);
        let suggestions = generate(&report, 5).unwrap();
        assert_eq!(suggestions.len(), 5);
    }

    #[test]
    fn templates_are_filled_with_report_topics() {
        let report = report_with_topics(&["rust", "compilers"]);
        for suggestion in generate(&report, 10).unwrap() {
            assert!(!suggestion.template.contains("{topic}"));
            assert!(suggestion.template.contains(&suggestion.topic));
            assert!(["rust", "compilers"].contains(&suggestion.topic.as_str()));
        }
    }

    #[test]
    fn only_top_three_topics_are_high_potential() {
        let report = report_with_topics(&["one", "two", "three", "four", "five"]);
        for suggestion in generate(&report, 50).unwrap() {
            let expect_high = ["one", "two", "three"].contains(&suggestion.topic.as_str());
            let expected = if expect_high { "High" } else { "Medium" };
            assert_eq!(suggestion.engagement_potential, expected);
        }
    }

    #[test]
    fn empty_topics_is_an_error() {
        let report = report_with_topics(&[]);
        assert!(generate(&report, 5).is_err());
    }

    #[test]
    fn best_practices_carry_top_topics() {
        let report = report_with_topics(&["one", "two", "three", "four"]);
        let practices = best_practices(&report);
        assert_eq!(practices.best_performing_topics, vec!["one", "two", "three"]);
        assert_eq!(practices.engagement_tips.len(), 5);
    }
}
