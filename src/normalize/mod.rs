// Text normalization for topic extraction.
//
// Reduces raw post text to the space-joined noun tokens that carry topical
// signal: lowercase, strip URLs, strip punctuation, strip digits, tokenize,
// keep noun-like tokens, drop stopwords and short tokens. Every step is
// total — the worst case is an empty output string, never an error.

pub mod pos;

use std::collections::HashSet;

use regex_lite::Regex;
use stop_words::{get, LANGUAGE};

/// Contractions with the apostrophe stripped (punctuation removal runs
/// before tokenization, so "don't" arrives as "dont") plus LinkedIn filler
/// words that dominate term frequencies without saying anything topical.
const EXTRA_STOP_WORDS: &[&str] = &[
    "im", "youre", "theyre", "weve", "ive", "dont", "doesnt", "didnt", "cant", "couldnt",
    "wouldnt", "shouldnt", "wont", "isnt", "arent", "wasnt", "werent", "linkedin", "get", "got",
    "new", "work", "great", "like", "just", "one", "us", "make", "see", "use", "using", "used",
    "also", "even", "still", "much", "many", "may", "might", "well", "really", "need", "want",
    "way", "time", "now", "today", "next", "last", "year", "years", "day", "days", "week",
    "weeks", "month", "months", "etc",
];

/// Tokens this short carry no topical signal.
const MIN_TOKEN_LEN: usize = 3;

/// Normalizes post text into the clean noun corpus TF-IDF runs over.
///
/// The stopword set (standard English list plus the fixed extension above)
/// and the stripping regexes are built once at construction; `normalize`
/// itself is a pure function of its input.
pub struct Normalizer {
    stop_words: HashSet<String>,
    url_re: Regex,
    punct_re: Regex,
    digit_re: Regex,
}

impl Normalizer {
    pub fn new() -> Self {
        let mut stop_words: HashSet<String> = get(LANGUAGE::English).into_iter().collect();
        stop_words.extend(EXTRA_STOP_WORDS.iter().map(|w| (*w).to_string()));

        Self {
            stop_words,
            url_re: Regex::new(r"(?:https?|www)\S+").expect("static pattern"),
            punct_re: Regex::new(r"[^\w\s]").expect("static pattern"),
            digit_re: Regex::new(r"\d+").expect("static pattern"),
        }
    }

    /// Clean a post down to its space-joined noun tokens.
    ///
    /// Idempotent on its own output: the result is already lowercase,
    /// URL-free, punctuation-free, digit-free, and noun/stopword-filtered,
    /// so a second pass changes nothing.
    pub fn normalize(&self, text: &str) -> String {
        let text = text.to_lowercase();
        let text = self.url_re.replace_all(&text, "");
        let text = self.punct_re.replace_all(&text, "");
        let text = self.digit_re.replace_all(&text, "");

        text.split_whitespace()
            .filter(|token| pos::is_noun(token))
            .filter(|token| !self.stop_words.contains(*token) && token.len() >= MIN_TOKEN_LEN)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}
