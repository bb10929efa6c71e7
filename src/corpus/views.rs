use crate::classifier::AdClassifier;

use super::models::Post;

/// Two named views over one immutable corpus, computed once per run.
///
/// Topic extraction reads the organic view; engagement aggregation and the
/// date-range computation read the full view, ads included. The asymmetry
/// mirrors the collector's original behavior and is deliberate — promoted
/// posts say nothing about what the network talks about, but their reaction
/// counts are still part of what the feed rewards.
pub struct CorpusViews<'a> {
    /// Every loaded post, in load order.
    pub all: &'a [Post],
    /// Posts the classifier did not flag as advertisements, in load order.
    pub organic: Vec<&'a Post>,
}

impl<'a> CorpusViews<'a> {
    pub fn build(posts: &'a [Post], classifier: &AdClassifier) -> Self {
        let organic = posts
            .iter()
            .filter(|post| !classifier.is_advertisement(&post.text))
            .collect();
        Self { all: posts, organic }
    }

    /// Number of posts the classifier filtered out.
    pub fn ad_count(&self) -> usize {
        self.all.len() - self.organic.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::models::Engagement;

    fn post(text: &str) -> Post {
        Post {
            text: text.to_string(),
            engagement: Engagement {
                likes: 0,
                comments: 0,
                shares: 0,
            },
            timestamp: "2025-01-01T00:00:00".to_string(),
        }
    }

    #[test]
    fn views_split_ads_from_organic() {
        let posts = vec![
            post("Reflections on a decade of database engineering"),
            post("Sign up now for our free trial"),
            post(""),
        ];
        let classifier = AdClassifier::new();
        let views = CorpusViews::build(&posts, &classifier);

        assert_eq!(views.all.len(), 3);
        assert_eq!(views.organic.len(), 1);
        assert_eq!(views.ad_count(), 2);
        assert!(views.organic[0].text.contains("database"));
    }

    #[test]
    fn organic_view_preserves_load_order() {
        let posts = vec![
            post("First thoughts on compiler internals"),
            post("Sponsored content"),
            post("Second thoughts on compiler internals"),
        ];
        let classifier = AdClassifier::new();
        let views = CorpusViews::build(&posts, &classifier);

        assert_eq!(views.organic.len(), 2);
        assert!(views.organic[0].text.starts_with("First"));
        assert!(views.organic[1].text.starts_with("Second"));
    }
}
