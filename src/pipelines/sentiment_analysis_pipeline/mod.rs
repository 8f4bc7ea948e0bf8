//! Sentiment analysis pipeline for classifying review text.
//!
//! The pipeline normalizes text (case folding, punctuation and stopword
//! removal), scores it with a lexicon model and labels the compound score:
//! `>= 0.05` is Positive, `<= -0.05` is Negative, anything else Neutral.
//!
//! ## Main Types
//!
//! - [`SentimentAnalysisPipeline`] - High-level interface for sentiment classification
//! - [`SentimentAnalysisPipelineBuilder`] - Builder pattern for pipeline configuration
//! - [`SentimentAnalysisModel`] - Trait for sentiment model implementations
//! - [`SentimentClassifier`] - The pipeline over the built-in lexicon model
//!
//! ## Usage Example
//!
//! ```rust
//! use movie_sentiment::pipelines::sentiment_analysis_pipeline::*;
//!
//! let pipeline = SentimentAnalysisPipelineBuilder::vader().build()?;
//!
//! let (label, score) = pipeline.classify("This movie was a complete disaster, I hated it");
//! println!("Sentiment: {label} (compound: {score:.4})");
//! # anyhow::Ok(())
//! ```

pub mod builder;
pub mod model;
pub mod pipeline;

pub use builder::SentimentAnalysisPipelineBuilder;
pub use model::{PolarityScores, SentimentAnalysisModel};
pub use pipeline::{Prediction, SentimentAnalysisPipeline, SentimentClassifier};

pub use crate::core::{ClassifiedReview, Review, SentimentLabel};
pub use crate::models::VaderModel;

pub use anyhow::Result;
