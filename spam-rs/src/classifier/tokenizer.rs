//! Text normalisation

/// Common English function words removed before counting
pub const STOPWORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do",
    "does", "did", "will", "would", "could", "should", "may", "might", "must", "can", "this",
    "that", "these", "those", "i", "you", "he", "she", "it", "we", "they",
];

/// Split text into lowercase alphanumeric tokens.
///
/// Anything outside `[a-z0-9]` and whitespace is dropped before splitting,
/// so `"don't"` becomes `"dont"`. Stopwords and single characters are
/// filtered out.
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace())
        .collect();

    cleaned
        .split_whitespace()
        .filter(|word| word.len() > 1 && !is_stopword(word))
        .map(str::to_string)
        .collect()
}

pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(&word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_punctuation_and_case() {
        assert_eq!(tokenize("Free!! WIN cash NOW??"), vec!["free", "win", "cash", "now"]);
    }

    #[test]
    fn test_removes_stopwords() {
        assert_eq!(tokenize("the cat and a dog"), vec!["cat", "dog"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n\t ").is_empty());
    }

    #[test]
    fn test_drops_single_characters() {
        assert_eq!(tokenize("x y zz 7 42"), vec!["zz", "42"]);
    }

    #[test]
    fn test_non_ascii_letters_are_removed() {
        // é is not in [a-z] so it is stripped, not transliterated
        assert_eq!(tokenize("café résumé"), vec!["caf", "rsum"]);
    }

    #[test]
    fn test_punctuation_joins_words() {
        assert_eq!(tokenize("don't e-mail"), vec!["dont", "email"]);
    }
}
