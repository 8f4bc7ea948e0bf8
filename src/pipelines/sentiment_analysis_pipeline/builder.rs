use std::path::PathBuf;

use super::model::SentimentAnalysisModel;
use super::pipeline::SentimentAnalysisPipeline;
use crate::core::ClassifierConfig;
use crate::loaders::StopwordLoader;
use crate::models::{VaderModel, VaderOptions};
use crate::preprocessing::TextNormalizer;

#[derive(Debug, Clone, Default)]
enum StopwordSource {
    #[default]
    Builtin,
    Words(Vec<String>),
    File(PathBuf),
}

/// Builder for configuring and constructing a [`SentimentAnalysisPipeline`].
///
/// Start with [`SentimentAnalysisPipelineBuilder::vader`] (or `new` with
/// explicit model options), then chain optional settings:
/// - `.thresholds(positive, negative)`: override the label thresholds.
/// - `.stopwords(words)` / `.stopword_file(path)`: replace the English stopword list.
/// - `.lexicon_file(path)` / `.lexicon_entry(token, valence)`: adjust the lexicon.
///
/// Finally, call `.build()`. All files are read during `build`, never while
/// classifying.
#[derive(Debug, Clone)]
pub struct SentimentAnalysisPipelineBuilder<M: SentimentAnalysisModel> {
    options: M::Options,
    config: ClassifierConfig,
    stopwords: StopwordSource,
}

impl<M: SentimentAnalysisModel> SentimentAnalysisPipelineBuilder<M> {
    pub fn new(options: M::Options) -> Self {
        Self {
            options,
            config: ClassifierConfig::default(),
            stopwords: StopwordSource::Builtin,
        }
    }

    pub fn config(mut self, config: ClassifierConfig) -> Self {
        self.config = config;
        self
    }

    /// Scores at or above `positive` are Positive, at or below `negative` Negative.
    pub fn thresholds(mut self, positive: f64, negative: f64) -> Self {
        self.config = ClassifierConfig {
            positive_threshold: positive,
            negative_threshold: negative,
        };
        self
    }

    pub fn stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords = StopwordSource::Words(words.into_iter().map(Into::into).collect());
        self
    }

    /// Reads the stopword list from a one-word-per-line file at build time.
    pub fn stopword_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.stopwords = StopwordSource::File(path.into());
        self
    }

    pub fn build(self) -> anyhow::Result<SentimentAnalysisPipeline<M>> {
        self.config.validate()?;

        let normalizer = match self.stopwords {
            StopwordSource::Builtin => TextNormalizer::new(),
            StopwordSource::Words(words) => TextNormalizer::with_stopwords(words),
            StopwordSource::File(path) => {
                TextNormalizer::with_stopwords(StopwordLoader::new(path).load()?)
            }
        };
        let model = M::new(self.options)?;

        tracing::debug!(
            positive = self.config.positive_threshold,
            negative = self.config.negative_threshold,
            stopwords = normalizer.stopwords().len(),
            "built sentiment analysis pipeline"
        );

        Ok(SentimentAnalysisPipeline {
            model,
            normalizer,
            config: self.config,
        })
    }
}

impl SentimentAnalysisPipelineBuilder<VaderModel> {
    /// Lexicon scorer with the built-in lexicon and English stopwords.
    pub fn vader() -> Self {
        Self::new(VaderOptions::default())
    }

    /// Replaces the built-in lexicon with a VADER-format file.
    pub fn lexicon_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.lexicon_file = Some(path.into());
        self
    }

    /// Adds or overrides a single lexicon entry.
    pub fn lexicon_entry(mut self, token: impl Into<String>, valence: f64) -> Self {
        self.options.extra_entries.push((token.into(), valence));
        self
    }
}
