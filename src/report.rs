//! Aggregation of classified reviews for charts and word clouds.
//!
//! ## Main Items
//!
//! - [`label_counts`] - per-label counts with every label present
//! - [`corpus_text`] - all review bodies joined, the word-cloud source
//! - [`word_frequencies`] - term counts for a word-cloud renderer
//! - [`SentimentReport`] - everything above for one movie

use std::collections::{BTreeMap, HashMap};

use crate::core::{ClassifiedReview, Review, SentimentLabel};
use crate::pipelines::sentiment_analysis_pipeline::{
    SentimentAnalysisModel, SentimentAnalysisPipeline,
};
use crate::preprocessing::TextNormalizer;

/// Anything that may carry review text.
pub trait ReviewText {
    /// The body, or `None` when it is missing or blank.
    fn review_text(&self) -> Option<&str>;
}

impl ReviewText for Review {
    fn review_text(&self) -> Option<&str> {
        self.text()
    }
}

impl ReviewText for ClassifiedReview {
    fn review_text(&self) -> Option<&str> {
        self.review.text()
    }
}

/// Number of reviews per label. All three labels are always present so a
/// bar chart keeps a stable shape.
pub fn label_counts(reviews: &[ClassifiedReview]) -> BTreeMap<SentimentLabel, usize> {
    let mut counts: BTreeMap<SentimentLabel, usize> =
        SentimentLabel::ALL.iter().map(|label| (*label, 0)).collect();
    for review in reviews {
        *counts.entry(review.label).or_default() += 1;
    }
    counts
}

/// Space-joined review bodies in input order; missing and blank bodies are
/// skipped rather than contributing empty strings.
pub fn corpus_text<R: ReviewText>(reviews: &[R]) -> String {
    reviews
        .iter()
        .filter_map(ReviewText::review_text)
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct WordFrequency {
    pub term: String,
    pub count: usize,
}

/// Term counts of `corpus`, most frequent first (ties by term).
///
/// Terms go through `normalizer`; single characters and pure numbers are
/// dropped as they make poor word-cloud entries. `limit` caps the number of
/// terms returned.
pub fn word_frequencies(
    corpus: &str,
    normalizer: &TextNormalizer,
    limit: Option<usize>,
) -> Vec<WordFrequency> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for token in normalizer.tokens(corpus) {
        if token.chars().count() < 2 || token.chars().all(|c| c.is_numeric()) {
            continue;
        }
        *counts.entry(token).or_default() += 1;
    }

    let mut frequencies: Vec<WordFrequency> = counts
        .into_iter()
        .map(|(term, count)| WordFrequency { term, count })
        .collect();
    frequencies.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.term.cmp(&b.term)));
    if let Some(limit) = limit {
        frequencies.truncate(limit);
    }
    frequencies
}

/// Everything the presentation layer needs for one movie: the labelled
/// table, the bar chart data and the word-cloud input.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SentimentReport {
    pub reviews: Vec<ClassifiedReview>,
    pub label_counts: BTreeMap<SentimentLabel, usize>,
    pub corpus: String,
    pub word_frequencies: Vec<WordFrequency>,
    /// Mean compound score, `None` without classified reviews.
    pub mean_score: Option<f64>,
}

impl SentimentReport {
    /// Maximum number of word-cloud terms kept in a report.
    pub const WORD_LIMIT: usize = 200;

    pub fn from_reviews<M>(pipeline: &SentimentAnalysisPipeline<M>, reviews: &[Review]) -> Self
    where
        M: SentimentAnalysisModel + Sync,
    {
        let classified = pipeline.classify_reviews(reviews);
        Self::from_classified(classified, pipeline.normalizer())
    }

    pub fn from_classified(reviews: Vec<ClassifiedReview>, normalizer: &TextNormalizer) -> Self {
        let corpus = corpus_text(&reviews);
        let word_frequencies = word_frequencies(&corpus, normalizer, Some(Self::WORD_LIMIT));
        let mean_score = if reviews.is_empty() {
            None
        } else {
            Some(reviews.iter().map(|r| r.score).sum::<f64>() / reviews.len() as f64)
        };

        Self {
            label_counts: label_counts(&reviews),
            corpus,
            word_frequencies,
            mean_score,
            reviews,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }

    /// Label with the most reviews; ties go to the earlier label in chart order.
    pub fn dominant_label(&self) -> Option<SentimentLabel> {
        if self.is_empty() {
            return None;
        }
        let count = |label: &SentimentLabel| {
            self.label_counts.get(label).copied().unwrap_or(0)
        };
        SentimentLabel::ALL
            .iter()
            .copied()
            .max_by(|a, b| count(a).cmp(&count(b)).then_with(|| b.cmp(a)))
    }
}
