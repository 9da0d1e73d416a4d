//! Text canonicalization feeding the term weighting model.

/// Fixed English stopword set excluded from every vocabulary.
const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
    "are", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "else",
    "every", "few", "for", "from", "further", "had", "has", "have", "he", "her", "here", "hers",
    "him", "his", "how", "if", "in", "into", "is", "it", "its", "itself", "just", "me", "might",
    "more", "most", "must", "my", "myself", "no", "nor", "not", "now", "of", "off", "on", "once",
    "only", "or", "other", "our", "ours", "out", "over", "own", "same", "shall", "she", "should",
    "so", "some", "such", "than", "that", "the", "their", "theirs", "them", "then", "there",
    "these", "they", "this", "those", "through", "to", "too", "under", "until", "up", "very",
    "was", "we", "were", "what", "when", "where", "which", "while", "who", "whom", "why", "will",
    "with", "would", "you", "your", "yours",
];

/// Lowercase a text and split it into index terms.
///
/// Splits on any non-alphanumeric character, then drops single-character
/// tokens and stopwords.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|s| s.len() > 1)
        .filter(|s| !is_stop_word(s))
        .map(String::from)
        .collect()
}

fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_splits_on_punctuation() {
        let tokens = tokenize("HTML/CSS, React-based!");
        assert_eq!(tokens, vec!["html", "css", "react", "based"]);
    }

    #[test]
    fn drops_stop_words() {
        let tokens = tokenize("the quick brown fox");
        assert_eq!(tokens, vec!["quick", "brown", "fox"]);
    }

    #[test]
    fn drops_single_character_tokens() {
        let tokens = tokenize("a b c rust");
        assert_eq!(tokens, vec!["rust"]);
    }

    #[test]
    fn keeps_alphanumeric_terms() {
        let tokens = tokenize("sql 10 years");
        assert_eq!(tokens, vec!["sql", "10", "years"]);
    }

    #[test]
    fn empty_text_yields_no_terms() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" .  . ").is_empty());
    }
}
