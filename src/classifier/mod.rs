// Advertisement detection for feed posts.
//
// Two-layer heuristic: a table of literal indicator phrases (promotional
// keywords plus shortened-link domains) and a handful of regex patterns
// that catch promotional sentence structures. Matching is substring-based,
// not tokenized, so a legitimate post containing an indicator inside an
// unrelated word is still flagged — an accepted false-positive risk.

use regex_lite::Regex;

/// Literal phrases that mark a post as promotional. Checked against the
/// lowercased post text with plain substring search.
pub const AD_INDICATORS: &[&str] = &[
    "sponsored",
    "advertisement",
    "promoted",
    "download now",
    "get the full report",
    "sign up",
    "register now",
    "limited time",
    "special offer",
    "free trial",
    "contact us",
    "book a demo",
    "schedule a call",
    "learn more",
    "click here",
    "check out",
    "try now",
    "get started",
    "join us",
    "subscribe",
    "our product",
    "our service",
    "our solution",
    "our platform",
    "our tool",
    "we help",
    "we provide",
    "we offer",
    "we deliver",
    "we create",
    "gofund.me",
    "bit.ly",
    "hubs.la",
    "lnkd.in",
    "t.co",
];

/// Promotional sentence structures: an action verb near a call-to-action
/// word, first-person-plural pitches, and generic CTA phrasing.
const PROMOTIONAL_PATTERNS: &[&str] = &[
    r"\b(?:download|get|sign up|register|book|schedule|try|join|subscribe)\b.*\b(?:now|today|free|demo|call)\b",
    r"\b(?:our|we|us)\b.*\b(?:product|service|solution|platform|tool|help|provide|offer|deliver|create)\b",
    r"\b(?:limited time|special offer|free trial|exclusive|discount|deal)\b",
    r"\b(?:click|check|learn|find|discover)\b.*\b(?:more|out|here|now)\b",
];

/// Classifies posts as advertisement vs organic content.
///
/// Pure function of the input text and the fixed indicator/pattern tables;
/// the regexes are compiled once at construction.
pub struct AdClassifier {
    indicators: &'static [&'static str],
    patterns: Vec<Regex>,
}

impl AdClassifier {
    pub fn new() -> Self {
        let patterns = PROMOTIONAL_PATTERNS
            .iter()
            .map(|p| Regex::new(p).expect("promotional patterns are static and valid"))
            .collect();
        Self {
            indicators: AD_INDICATORS,
            patterns,
        }
    }

    /// Check whether a post is likely an advertisement.
    ///
    /// Empty text counts as an ad — the collector produces empty text for
    /// posts whose body it could not extract, and those are worthless for
    /// topic analysis anyway.
    pub fn is_advertisement(&self, text: &str) -> bool {
        if text.is_empty() {
            return true;
        }

        let text_lower = text.to_lowercase();

        if self
            .indicators
            .iter()
            .any(|indicator| text_lower.contains(indicator))
        {
            return true;
        }

        self.patterns.iter().any(|p| p.is_match(&text_lower))
    }
}

impl Default for AdClassifier {
    fn default() -> Self {
        Self::new()
    }
}
