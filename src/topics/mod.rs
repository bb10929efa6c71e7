// Topic extraction — TF-IDF term ranking over the normalized organic corpus.

pub mod tfidf;

pub use tfidf::TfIdfExtractor;
