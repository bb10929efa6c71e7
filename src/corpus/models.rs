use serde::{Deserialize, Serialize};

/// Reaction counts scraped from a single feed post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Engagement {
    pub likes: i64,
    pub comments: i64,
    pub shares: i64,
}

/// One scraped feed post. Immutable once written by the collector; the
/// pipeline only reads these. Missing fields are a deserialization error —
/// a malformed dump fails the whole run at the load boundary rather than
/// deep inside the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub text: String,
    pub engagement: Engagement,
    /// ISO-8601 timestamp recorded at scrape time. Kept as a string:
    /// lexicographic min/max over ISO-8601 is chronological, which is all
    /// the date-range computation needs.
    pub timestamp: String,
}

impl Post {
    /// Combined engagement across all reaction types.
    pub fn total_engagement(&self) -> i64 {
        self.engagement.likes + self.engagement.comments + self.engagement.shares
    }
}
