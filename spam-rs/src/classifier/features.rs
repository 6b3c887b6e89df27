//! Sparse bag-of-words features

use std::collections::BTreeMap;

use super::tokenizer::tokenize;

/// Token occurrence counts for one document.
///
/// Absent tokens have an implicit count of zero. Keys iterate in sorted
/// order so scoring and explanation ties are reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureVector {
    counts: BTreeMap<String, u32>,
}

impl FeatureVector {
    /// Count every token occurrence
    pub fn extract<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut counts = BTreeMap::new();
        for token in tokens {
            *counts.entry(token.into()).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Tokenize and count in one step
    pub fn from_text(text: &str) -> Self {
        Self::extract(tokenize(text))
    }

    pub fn count(&self, token: &str) -> u32 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(token, &count)| (token.as_str(), count))
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, equal to the length of the source token sequence
    pub fn total(&self) -> u64 {
        self.counts.values().map(|&c| u64::from(c)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_repeated_tokens() {
        let features = FeatureVector::extract(["win", "cash", "win", "win"]);
        assert_eq!(features.count("win"), 3);
        assert_eq!(features.count("cash"), 1);
        assert_eq!(features.count("prize"), 0);
        assert_eq!(features.len(), 2);
    }

    #[test]
    fn test_total_matches_token_count() {
        let texts = [
            "",
            "hello",
            "Meeting moved to Friday, see the meeting notes",
            "FREE free FrEe!!! claim claim your prize now now now",
        ];
        for text in texts {
            let tokens = tokenize(text);
            let features = FeatureVector::extract(tokens.clone());
            assert_eq!(features.total(), tokens.len() as u64, "text: {text:?}");
        }
    }

    #[test]
    fn test_empty() {
        let features = FeatureVector::from_text("a I");
        assert!(features.is_empty());
        assert_eq!(features.total(), 0);
    }
}
