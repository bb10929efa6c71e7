// TF-IDF topic ranking.
//
// Uses the `keyword_extraction` crate to score terms across the normalized
// organic corpus. Each post is a separate document for IDF computation —
// words that appear in every post get downweighted, while words distinctive
// to certain posts get boosted. The ranked (term, score) pairs are the
// "top topics" an insight report carries.

use keyword_extraction::tf_idf::{TfIdf, TfIdfParams};
use stop_words::{get, LANGUAGE};
use tracing::info;

/// Cap on how many terms enter the ranking. Feed corpora are small, so in
/// practice the whole vocabulary fits well under this.
const MAX_VOCABULARY: usize = 1000;

/// TF-IDF based topic extractor.
///
/// Zero API calls, runs locally, no cost. The corpus it receives has
/// already been noun-filtered and stopword-stripped by the normalizer;
/// the stopword list passed to the library is a harmless second line of
/// defense for callers feeding it raw text.
pub struct TfIdfExtractor {
    /// How many top terms to return.
    pub top_n: usize,
}

impl Default for TfIdfExtractor {
    fn default() -> Self {
        Self { top_n: 10 }
    }
}

impl TfIdfExtractor {
    /// Rank the corpus vocabulary by TF-IDF score, descending.
    ///
    /// An empty corpus (or one that normalized down to nothing) produces an
    /// empty ranking, not an error — a feed of pure ads is a valid run.
    pub fn extract(&self, documents: &[String]) -> Vec<(String, f32)> {
        if documents.is_empty() {
            return Vec::new();
        }

        let stop_words: Vec<String> = get(LANGUAGE::English);

        let params = TfIdfParams::UnprocessedDocuments(documents, &stop_words, None);
        let tfidf = TfIdf::new(params);

        let mut ranked: Vec<(String, f32)> = tfidf.get_ranked_word_scores(MAX_VOCABULARY);
        ranked.truncate(self.top_n);

        if let Some((term, score)) = ranked.first() {
            info!(
                terms = ranked.len(),
                top_term = %term,
                top_score = score,
                "Ranked TF-IDF topics"
            );
        }

        ranked
    }
}
