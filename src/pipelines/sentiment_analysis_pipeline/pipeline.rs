use rayon::prelude::*;

use super::model::{PolarityScores, SentimentAnalysisModel};
use crate::core::{ClassifiedReview, ClassifierConfig, Review, SentimentLabel};
use crate::models::VaderModel;
use crate::preprocessing::TextNormalizer;

/// Full result of classifying one text.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Prediction {
    pub label: SentimentLabel,
    /// Compound score in [-1, 1].
    pub score: f64,
    pub scores: PolarityScores,
    /// The text the model actually saw.
    pub normalized: String,
}

/// Normalizes text, scores it and maps the compound score to a label.
///
/// Construct with [`SentimentAnalysisPipelineBuilder`](super::SentimentAnalysisPipelineBuilder).
/// The pipeline holds only immutable data: it can be shared across threads
/// and every call with the same text returns the same result.
///
/// ```rust
/// use movie_sentiment::pipelines::sentiment_analysis_pipeline::*;
///
/// # fn run() -> anyhow::Result<()> {
/// let pipeline = SentimentAnalysisPipelineBuilder::vader().build()?;
///
/// let (label, score) = pipeline.classify("This movie is absolutely wonderful and amazing!");
/// assert_eq!(label, SentimentLabel::Positive);
/// assert!(score > 0.05);
/// # Ok(())
/// # }
/// # run().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct SentimentAnalysisPipeline<M: SentimentAnalysisModel> {
    pub(crate) model: M,
    pub(crate) normalizer: TextNormalizer,
    pub(crate) config: ClassifierConfig,
}

/// The default classifier: lexicon scorer plus English stopwords.
pub type SentimentClassifier = SentimentAnalysisPipeline<VaderModel>;

impl<M: SentimentAnalysisModel> SentimentAnalysisPipeline<M> {
    pub fn predict(&self, text: &str) -> Prediction {
        let normalized = self.normalizer.normalize(text);
        let scores = self.model.polarity_scores(&normalized);
        let label = self.label_for(scores.compound);
        tracing::trace!(%label, score = scores.compound, "classified text");
        Prediction {
            label,
            score: scores.compound,
            scores,
            normalized,
        }
    }

    /// Label and compound score of `text`. Empty text is `(Neutral, 0.0)`.
    pub fn classify(&self, text: &str) -> (SentimentLabel, f64) {
        let prediction = self.predict(text);
        (prediction.label, prediction.score)
    }

    pub fn label_for(&self, score: f64) -> SentimentLabel {
        SentimentLabel::from_score_with(
            score,
            self.config.positive_threshold,
            self.config.negative_threshold,
        )
    }

    pub fn normalize(&self, text: &str) -> String {
        self.normalizer.normalize(text)
    }

    /// Scores un-normalized text, keeping case and punctuation cues.
    pub fn polarity_scores(&self, text: &str) -> PolarityScores {
        self.model.polarity_scores(text)
    }

    /// `None` when the review has no content to classify.
    pub fn classify_review(&self, review: &Review) -> Option<ClassifiedReview> {
        let text = review.text()?;
        let (label, score) = self.classify(text);
        Some(ClassifiedReview {
            review: review.clone(),
            score,
            label,
        })
    }

    /// Classifies reviews in parallel, keeping input order and skipping
    /// reviews without content.
    pub fn classify_reviews(&self, reviews: &[Review]) -> Vec<ClassifiedReview>
    where
        M: Sync,
    {
        let _span = tracing::debug_span!("classify_reviews", reviews = reviews.len()).entered();
        let classified: Vec<ClassifiedReview> = reviews
            .par_iter()
            .filter_map(|review| self.classify_review(review))
            .collect();
        let skipped = reviews.len() - classified.len();
        if skipped > 0 {
            tracing::debug!(skipped, "skipped reviews without content");
        }
        classified
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    pub fn normalizer(&self) -> &TextNormalizer {
        &self.normalizer
    }

    pub fn model(&self) -> &M {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::super::SentimentAnalysisPipelineBuilder;
    use super::*;

    fn classifier() -> SentimentClassifier {
        SentimentAnalysisPipelineBuilder::vader().build().unwrap()
    }

    #[test]
    fn empty_and_blank_text_is_neutral() {
        let classifier = classifier();
        assert_eq!(classifier.classify(""), (SentimentLabel::Neutral, 0.0));
        assert_eq!(classifier.classify("  \n "), (SentimentLabel::Neutral, 0.0));
        // only stopwords and punctuation
        assert_eq!(classifier.classify("the, and... of!"), (SentimentLabel::Neutral, 0.0));
    }

    #[test]
    fn prediction_exposes_normalized_text() {
        let prediction = classifier().predict("The movie was GREAT!!!");
        assert_eq!(prediction.normalized, "movie great");
        assert_eq!(prediction.label, SentimentLabel::Positive);
        assert_eq!(prediction.score, prediction.scores.compound);
    }

    #[test]
    fn custom_thresholds_move_the_boundaries() {
        let strict = SentimentAnalysisPipelineBuilder::vader()
            .thresholds(0.9, -0.9)
            .build()
            .unwrap();
        let (label, score) = strict.classify("a good movie");
        assert!(score > 0.05 && score < 0.9);
        assert_eq!(label, SentimentLabel::Neutral);
    }

    #[test]
    fn reviews_without_content_are_skipped() {
        let reviews = vec![
            Review::new("a", Some("great movie")),
            Review::new("b", None),
            Review::new("c", Some("")),
            Review::new("d", Some("terrible plot")),
        ];
        let classified = classifier().classify_reviews(&reviews);
        let authors: Vec<&str> = classified.iter().map(|c| c.author()).collect();
        assert_eq!(authors, vec!["a", "d"]);
        assert_eq!(classified[0].label, SentimentLabel::Positive);
        assert_eq!(classified[1].label, SentimentLabel::Negative);
    }

    #[test]
    fn parallel_batch_matches_sequential() {
        let classifier = classifier();
        let reviews: Vec<Review> = (0..64)
            .map(|i| {
                let text = match i % 3 {
                    0 => "loved every minute, superb cast",
                    1 => "boring and far too long, a waste",
                    _ => "it runs two hours",
                };
                Review::new(&format!("user{i}"), Some(text))
            })
            .collect();

        let batch = classifier.classify_reviews(&reviews);
        let sequential: Vec<ClassifiedReview> = reviews
            .iter()
            .filter_map(|review| classifier.classify_review(review))
            .collect();
        assert_eq!(batch, sequential);
    }
}
