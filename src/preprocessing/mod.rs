//! Text preprocessing applied before sentiment scoring.
//!
//! ## Main Types
//!
//! - [`TextNormalizer`] - case folding, punctuation stripping and stopword removal
//! - [`normalize`] - convenience wrapper using the built-in English stopwords
//!
//! ```rust
//! use movie_sentiment::preprocessing::normalize;
//!
//! assert_eq!(normalize("The movie, and the plot!"), "movie plot");
//! ```

pub mod normalizer;
pub mod stopwords;

pub use normalizer::TextNormalizer;
pub use stopwords::{default_stopwords, ENGLISH_STOPWORDS};

/// Normalizes `text` with the built-in English stopword list.
pub fn normalize(text: &str) -> String {
    TextNormalizer::new().normalize(text)
}
