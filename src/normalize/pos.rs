// Rule-based part-of-speech tagging for the noun filter.
//
// There is no trained perceptron tagger in the Rust ecosystem worth pulling
// in for this, and the pipeline only needs one distinction: is this token a
// content noun or not. The tagger combines small closed-class lexicons with
// suffix rules and defaults to Noun, which matches how statistical taggers
// treat unknown tokens in noun position. Input tokens are already lowercased
// by the normalizer.

/// Part-of-speech label for a single lowercased token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosTag {
    Noun,
    Verb,
    Adjective,
    Adverb,
    /// Determiners, pronouns, prepositions, conjunctions, auxiliaries.
    Function,
}

/// Closed-class words: never nouns, regardless of context.
const FUNCTION_WORDS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "i", "me", "my", "mine", "you", "your",
    "yours", "he", "him", "his", "she", "her", "hers", "it", "its", "we", "our", "ours", "they",
    "them", "their", "theirs", "who", "whom", "whose", "which", "what", "where", "when", "why",
    "how", "and", "or", "but", "nor", "so", "yet", "if", "then", "else", "while", "because",
    "although", "though", "since", "unless", "until", "of", "in", "on", "at", "by", "for", "with",
    "about", "against", "between", "into", "through", "during", "before", "after", "above",
    "below", "to", "from", "up", "down", "out", "off", "over", "under", "again", "once", "am",
    "is", "are", "was", "were", "be", "been", "being", "do", "does", "did", "will", "would",
    "shall", "should", "can", "could", "may", "might", "must", "not", "no", "as", "than",
    "too", "very", "both", "each", "all", "any", "some", "such",
];

/// High-frequency verbs in the forms they actually appear in feed prose.
/// Gerunds that double as common nouns (learning, marketing, engineering)
/// are deliberately absent.
const COMMON_VERBS: &[&str] = &[
    "have", "has", "had", "having", "go", "goes", "went", "gone", "going", "get", "gets", "got",
    "getting", "make", "makes", "made", "making", "take", "takes", "took", "taken", "taking",
    "come", "comes", "came", "coming", "give", "gives", "gave", "given", "giving", "know",
    "knows", "knew", "known", "knowing", "think", "thinks", "thought", "thinking", "see", "sees",
    "saw", "seen", "seeing", "look", "looks", "looked", "looking", "want", "wants", "wanted",
    "find", "finds", "found", "finding", "tell", "tells", "told", "telling", "ask", "asks",
    "asked", "asking", "feel", "feels", "felt", "try", "tries", "tried", "trying", "leave",
    "leaves", "left", "leaving", "put", "puts", "putting", "keep", "keeps", "kept", "keeping",
    "let", "lets", "begin", "began", "begun", "seem", "seems", "seemed", "help", "helps",
    "helped", "helping", "show", "shows", "showed", "shown", "showing", "hear", "hears", "heard",
    "run", "runs", "ran", "running", "move", "moves", "moved", "moving", "believe", "believes",
    "believed", "bring", "brings", "brought", "bringing", "happen", "happens", "happened",
    "write", "writes", "wrote", "written", "writing", "sit", "sits", "sat", "stand", "stands",
    "stood", "lose", "loses", "lost", "pay", "pays", "paid", "meet", "meets", "met", "include",
    "includes", "continue", "continues", "say", "says", "said", "saying", "learn", "learns",
    "learnt", "become", "becomes", "became", "becoming", "build", "builds", "built", "building",
    "share", "shares", "shared", "sharing", "grow", "grows", "grew", "grown", "growing", "ship",
    "ships", "shipping", "launch", "launches", "launching", "read", "reads", "reading", "hire",
    "hires", "hiring", "join", "joins", "joined", "joining",
];

/// High-frequency adjectives in feed prose.
const COMMON_ADJECTIVES: &[&str] = &[
    "good", "great", "big", "small", "large", "little", "long", "short", "high", "low", "early",
    "late", "young", "old", "right", "wrong", "different", "same", "able", "sure", "important",
    "bad", "best", "better", "worse", "worst", "hard", "easy", "strong", "weak", "true", "false",
    "real", "full", "empty", "free", "open", "closed", "clear", "recent", "proud", "happy",
    "excited", "thrilled", "grateful", "thankful", "amazing", "awesome", "incredible", "huge",
    "beautiful", "public", "private", "simple", "complex", "special", "certain", "common",
    "entire", "whole", "main", "possible", "impossible", "available", "ready", "busy", "serious",
    "successful", "honest", "humble", "few", "several", "own", "other", "next", "last", "first",
    "second", "third", "final", "new", "key",
];

/// Nouns that end in "ly" and would otherwise be mis-tagged as adverbs.
const LY_NOUNS: &[&str] = &[
    "family", "assembly", "supply", "rally", "ally", "monopoly", "anomaly", "italy", "july",
    "belly", "jelly", "bully", "tally", "lily", "folly",
];

/// Nouns that end in "ed" and would otherwise be mis-tagged as past-tense
/// verbs.
const ED_NOUNS: &[&str] = &["speed", "breed", "creed", "greed", "hundred", "seabed", "hatred"];

/// Tag a single lowercased token.
///
/// Lexicon lookups first, then suffix rules, then the Noun default.
pub fn tag(token: &str) -> PosTag {
    if FUNCTION_WORDS.contains(&token) {
        return PosTag::Function;
    }
    if COMMON_VERBS.contains(&token) {
        return PosTag::Verb;
    }
    if COMMON_ADJECTIVES.contains(&token) {
        return PosTag::Adjective;
    }
    if token.len() > 3 && token.ends_with("ly") && !LY_NOUNS.contains(&token) {
        return PosTag::Adverb;
    }
    if token.len() > 4 && token.ends_with("ed") && !ED_NOUNS.contains(&token) {
        return PosTag::Verb;
    }
    PosTag::Noun
}

/// Whether a token should survive the noun filter.
pub fn is_noun(token: &str) -> bool {
    matches!(tag(token), PosTag::Noun)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_nouns_default_to_noun() {
        assert_eq!(tag("engineer"), PosTag::Noun);
        assert_eq!(tag("database"), PosTag::Noun);
        assert_eq!(tag("machine"), PosTag::Noun);
    }

    #[test]
    fn gerund_nouns_survive() {
        // These read as nouns in feed prose and must not be filtered
        assert_eq!(tag("learning"), PosTag::Noun);
        assert_eq!(tag("marketing"), PosTag::Noun);
        assert_eq!(tag("engineering"), PosTag::Noun);
    }

    #[test]
    fn closed_classes_are_tagged() {
        assert_eq!(tag("the"), PosTag::Function);
        assert_eq!(tag("because"), PosTag::Function);
        assert_eq!(tag("went"), PosTag::Verb);
        assert_eq!(tag("good"), PosTag::Adjective);
    }

    #[test]
    fn suffix_rules_with_exceptions() {
        assert_eq!(tag("quickly"), PosTag::Adverb);
        assert_eq!(tag("family"), PosTag::Noun);
        assert_eq!(tag("shipped"), PosTag::Verb);
        assert_eq!(tag("speed"), PosTag::Noun);
    }

    #[test]
    fn noun_filter_matches_tags() {
        assert!(is_noun("compiler"));
        assert!(!is_noun("quickly"));
        assert!(!is_noun("the"));
    }
}
