// Output formatting — terminal display of reports and suggestions.

pub mod terminal;

/// Truncate a post preview to at most `max_chars` characters, appending
/// "..." when something was cut. Counts chars, not bytes, so multi-byte
/// characters like emoji never cause a panic mid-codepoint.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate_chars("hello", 10), "hello");
    }

    #[test]
    fn long_text_is_truncated_on_char_boundary() {
        assert_eq!(truncate_chars("héllo wörld", 5), "héllo...");
    }
}
