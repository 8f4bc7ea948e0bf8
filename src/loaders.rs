//! Loaders for the configuration data behind the normalizer and the scorer.
//!
//! ## Main Types
//!
//! - [`LexiconLoader`] - reads a VADER-format valence lexicon from disk
//! - [`StopwordLoader`] - reads a one-word-per-line stopword list from disk
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use movie_sentiment::loaders::{LexiconLoader, StopwordLoader};
//!
//! let lexicon = LexiconLoader::new("vader_lexicon.txt").load()?;
//! let stopwords = StopwordLoader::new("stopwords/english").load()?;
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! Both loaders are only used while building a pipeline; nothing is read
//! from disk while classifying.

use anyhow::Context;
use std::path::{Path, PathBuf};

use crate::models::Lexicon;

#[derive(Debug, Clone)]
pub struct LexiconLoader {
    pub path: PathBuf,
}

impl LexiconLoader {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn load(&self) -> anyhow::Result<Lexicon> {
        let source = std::fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read lexicon {}", self.path.display()))?;
        let lexicon = Lexicon::parse(&source)
            .with_context(|| format!("failed to parse lexicon {}", self.path.display()))?;
        if lexicon.is_empty() {
            anyhow::bail!("lexicon {} has no entries", self.path.display());
        }
        tracing::debug!(path = %self.path.display(), entries = lexicon.len(), "read lexicon file");
        Ok(lexicon)
    }
}

#[derive(Debug, Clone)]
pub struct StopwordLoader {
    pub path: PathBuf,
}

impl StopwordLoader {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Returns the lower-cased, non-empty lines of the file.
    pub fn load(&self) -> anyhow::Result<Vec<String>> {
        let source = std::fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read stopword list {}", self.path.display()))?;
        let words: Vec<String> = source
            .lines()
            .map(|line| line.trim().to_lowercase())
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .collect();
        tracing::debug!(path = %self.path.display(), words = words.len(), "read stopword file");
        Ok(words)
    }
}
