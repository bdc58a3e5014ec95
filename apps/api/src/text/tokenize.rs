//! Text Preprocessor — normalizes free-text exercise descriptions into tokens.
//!
//! Lowercase → strip everything outside `[a-z]` and whitespace → split on
//! whitespace runs → drop stop words. Pure and total: empty input yields an
//! empty token list, never an error.

/// Articles, prepositions, and conjunctions that carry no signal for
/// similarity ranking.
const STOP_WORDS: &[&str] = &[
    "the", "is", "a", "an", "and", "to", "of", "for", "in", "on", "with", "at", "from", "by",
];

/// Tokenizes `text` into normalized terms.
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_whitespace())
        .collect();

    cleaned
        .split_whitespace()
        .filter(|t| !STOP_WORDS.contains(t))
        .map(|t| t.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_splits() {
        assert_eq!(tokenize("Push UP"), vec!["push", "up"]);
    }

    #[test]
    fn test_strips_punctuation_and_digits() {
        assert_eq!(
            tokenize("3 sets of push-ups, slowly!"),
            vec!["sets", "pushups", "slowly"]
        );
    }

    #[test]
    fn test_removes_stop_words() {
        assert_eq!(
            tokenize("the press is a lift for the chest"),
            vec!["press", "lift", "chest"]
        );
    }

    #[test]
    fn test_empty_input_yields_empty_sequence() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_all_stop_words_yields_empty_sequence() {
        assert!(tokenize("the and of in on").is_empty());
    }

    #[test]
    fn test_whitespace_runs_collapse() {
        assert_eq!(tokenize("  bench \t\n press  "), vec!["bench", "press"]);
    }
}
