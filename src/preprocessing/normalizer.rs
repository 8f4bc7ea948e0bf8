use std::collections::HashSet;
use std::sync::Arc;

use super::stopwords::default_stopwords;

/// Lower-cases text, strips ASCII punctuation and drops stopwords.
///
/// Normalization is pure and idempotent: running it on its own output
/// returns the same string.
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    stopwords: Arc<HashSet<String>>,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self {
            stopwords: default_stopwords(),
        }
    }
}

impl TextNormalizer {
    /// Normalizer with the built-in English stopword list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalizer with a caller-supplied stopword list.
    ///
    /// Entries are lower-cased so they match the case-folded tokens.
    pub fn with_stopwords<I, S>(stopwords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stopwords = stopwords
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self {
            stopwords: Arc::new(stopwords),
        }
    }

    pub fn stopwords(&self) -> &HashSet<String> {
        &self.stopwords
    }

    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }

    /// Surviving tokens of `text`, in order.
    pub fn tokens(&self, text: &str) -> Vec<String> {
        let folded: String = text
            .to_lowercase()
            .chars()
            .filter(|c| !c.is_ascii_punctuation())
            .collect();

        folded
            .split_whitespace()
            .filter(|token| !self.is_stopword(token))
            .map(str::to_string)
            .collect()
    }

    pub fn normalize(&self, text: &str) -> String {
        self.tokens(text).join(" ")
    }

    /// Absent text normalizes to the empty string.
    pub fn normalize_opt(&self, text: Option<&str>) -> String {
        text.map(|t| self.normalize(t)).unwrap_or_default()
    }
}
