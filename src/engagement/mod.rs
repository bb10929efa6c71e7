// Engagement aggregation over the full corpus.
//
// Computes mean reaction counts and the top posts by combined engagement.
// Runs over every loaded post, advertisements included — see
// `corpus::views::CorpusViews` for why the views differ.

use serde::{Deserialize, Serialize};

use crate::corpus::Post;

/// How many top posts an engagement summary carries.
pub const TOP_POSTS: usize = 5;

/// Arithmetic mean of each reaction type across the corpus. All zeros for
/// an empty corpus.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AverageEngagement {
    pub likes: f64,
    pub comments: f64,
    pub shares: f64,
}

/// One of the best-performing posts, by combined engagement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopPost {
    pub text: String,
    pub total_engagement: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngagementSummary {
    pub average_engagement: AverageEngagement,
    pub top_posts: Vec<TopPost>,
}

/// Summarize engagement across the corpus.
///
/// The top-5 selection is stable: posts tied on total engagement keep
/// their original corpus order. An empty corpus yields zero averages and
/// an empty top list rather than NaN.
pub fn aggregate(posts: &[Post]) -> EngagementSummary {
    if posts.is_empty() {
        return EngagementSummary::default();
    }

    let count = posts.len() as f64;
    let average_engagement = AverageEngagement {
        likes: posts.iter().map(|p| p.engagement.likes).sum::<i64>() as f64 / count,
        comments: posts.iter().map(|p| p.engagement.comments).sum::<i64>() as f64 / count,
        shares: posts.iter().map(|p| p.engagement.shares).sum::<i64>() as f64 / count,
    };

    // sort_by is stable, so equal totals preserve corpus order
    let mut ranked: Vec<&Post> = posts.iter().collect();
    ranked.sort_by(|a, b| b.total_engagement().cmp(&a.total_engagement()));

    let top_posts = ranked
        .into_iter()
        .take(TOP_POSTS)
        .map(|post| TopPost {
            text: post.text.clone(),
            total_engagement: post.total_engagement(),
        })
        .collect();

    EngagementSummary {
        average_engagement,
        top_posts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Engagement;

    fn post(text: &str, likes: i64, comments: i64, shares: i64) -> Post {
        Post {
            text: text.to_string(),
            engagement: Engagement {
                likes,
                comments,
                shares,
            },
            timestamp: "2025-01-01T00:00:00".to_string(),
        }
    }

    #[test]
    fn empty_corpus_gives_neutral_summary() {
        let summary = aggregate(&[]);
        assert_eq!(summary.average_engagement.likes, 0.0);
        assert_eq!(summary.average_engagement.comments, 0.0);
        assert_eq!(summary.average_engagement.shares, 0.0);
        assert!(summary.top_posts.is_empty());
    }

    #[test]
    fn averages_cover_all_posts() {
        let posts = vec![post("a", 10, 2, 0), post("b", 20, 4, 6)];
        let summary = aggregate(&posts);
        assert_eq!(summary.average_engagement.likes, 15.0);
        assert_eq!(summary.average_engagement.comments, 3.0);
        assert_eq!(summary.average_engagement.shares, 3.0);
    }

    #[test]
    fn top_posts_capped_at_five() {
        let posts: Vec<Post> = (0..7).map(|i| post(&format!("p{i}"), i, 0, 0)).collect();
        let summary = aggregate(&posts);
        assert_eq!(summary.top_posts.len(), TOP_POSTS);
        assert_eq!(summary.top_posts[0].text, "p6");
        assert_eq!(summary.top_posts[0].total_engagement, 6);
    }

    #[test]
    fn ties_preserve_corpus_order() {
        let posts = vec![
            post("first", 5, 0, 0),
            post("second", 3, 2, 0),
            post("third", 0, 0, 5),
        ];
        let summary = aggregate(&posts);
        let order: Vec<&str> = summary.top_posts.iter().map(|p| p.text.as_str()).collect();
        assert_eq!(order, vec!["first", "second", "third"]);
    }
}
