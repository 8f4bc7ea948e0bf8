pub mod analysis;
pub mod catalog;
pub mod core;
pub mod loaders;
pub mod models;
pub mod pipelines;
pub mod preprocessing;
pub mod report;

// Re-export core types
pub use crate::core::{ClassifiedReview, Review, SentimentLabel};

pub use analysis::{analyze_movie, MovieAnalysis};
pub use pipelines::sentiment_analysis_pipeline::{
    PolarityScores, SentimentAnalysisPipeline, SentimentAnalysisPipelineBuilder,
    SentimentClassifier,
};
pub use preprocessing::normalize;
pub use report::{corpus_text, label_counts, word_frequencies, SentimentReport};
