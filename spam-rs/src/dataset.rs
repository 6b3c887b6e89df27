//! Training corpus ingestion
//!
//! Reads the labelled CSV export (`label,text...`, header row first).
//! The text is everything after the first comma, so embedded commas
//! survive without a full CSV parser.

use std::path::Path;
use tracing::{debug, info};

use crate::classifier::TrainingExample;
use crate::error::Result;

/// Parsed corpus plus the number of rows that were dropped
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    pub examples: Vec<TrainingExample>,
    /// Non-blank rows skipped for a missing text field or unknown label
    pub skipped: usize,
}

impl Corpus {
    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    pub fn spam_count(&self) -> usize {
        self.examples.iter().filter(|e| e.label == 1).count()
    }

    pub fn ham_count(&self) -> usize {
        self.len() - self.spam_count()
    }
}

/// Read and parse a corpus file. Failing to read the file is fatal.
///
/// Bytes that are not valid UTF-8 (the SMS corpus export is latin-1) are
/// replaced with U+FFFD, which the tokenizer then drops.
pub fn load_corpus(path: &Path) -> Result<Corpus> {
    let bytes = std::fs::read(path)?;
    let corpus = parse_corpus(&String::from_utf8_lossy(&bytes));
    info!(
        "Loaded {} samples ({} spam, {} ham) from '{}', skipped {} rows",
        corpus.len(),
        corpus.spam_count(),
        corpus.ham_count(),
        path.display(),
        corpus.skipped
    );
    Ok(corpus)
}

pub fn parse_corpus(content: &str) -> Corpus {
    let mut corpus = Corpus::default();

    for (line_no, line) in content.lines().enumerate().skip(1) {
        if line.trim().is_empty() {
            continue;
        }
        match parse_row(line) {
            Some(example) => corpus.examples.push(example),
            None => {
                debug!("Skipping row {}: {:?}", line_no + 1, line);
                corpus.skipped += 1;
            }
        }
    }

    corpus
}

fn parse_row(line: &str) -> Option<TrainingExample> {
    let (label, text) = line.split_once(',')?;

    let text = text.trim();
    let text = text.strip_prefix('"').unwrap_or(text);
    let text = text.strip_suffix('"').unwrap_or(text);

    match label.trim().to_lowercase().as_str() {
        "spam" => Some(TrainingExample::spam(text)),
        "ham" => Some(TrainingExample::ham(text)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_rows_and_skips_header() {
        let csv = "v1,v2\nham,Go until jurong point\nspam,Free entry in 2 a wkly comp\n";
        let corpus = parse_corpus(csv);
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.examples[0], TrainingExample::ham("Go until jurong point"));
        assert_eq!(corpus.examples[1].label, 1);
        assert_eq!(corpus.skipped, 0);
    }

    #[test]
    fn test_keeps_commas_in_text_and_strips_quotes() {
        let corpus = parse_corpus("label,text\nSPAM,\"Win cash, now, today\"\n");
        assert_eq!(corpus.examples[0], TrainingExample::spam("Win cash, now, today"));
    }

    #[test]
    fn test_counts_skipped_rows() {
        let csv = "label,text\nham,ok then\nno-comma-row\nphish,click here\n\n  \nspam,prize\n";
        let corpus = parse_corpus(csv);
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.skipped, 2);
        assert_eq!(corpus.spam_count(), 1);
        assert_eq!(corpus.ham_count(), 1);
    }

    #[test]
    fn test_crlf_line_endings() {
        let corpus = parse_corpus("label,text\r\nHam , see you soon\r\n");
        assert_eq!(corpus.examples, vec![TrainingExample::ham("see you soon")]);
    }

    #[test]
    fn test_header_only() {
        assert!(parse_corpus("label,text\n").is_empty());
        assert!(parse_corpus("").is_empty());
    }

    #[test]
    fn test_load_latin1_corpus() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spam.csv");
        std::fs::write(&path, b"v1,v2\nham,Ok lar\nspam,Win \xA3100 cash now\n").unwrap();

        let corpus = load_corpus(&path).unwrap();
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.skipped, 0);
        assert_eq!(corpus.examples[1].label, 1);
        assert_eq!(
            crate::classifier::tokenize(&corpus.examples[1].text),
            vec!["win", "100", "cash", "now"]
        );
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_corpus(&dir.path().join("missing.csv")).is_err());
    }
}
