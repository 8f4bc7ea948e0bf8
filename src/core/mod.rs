pub mod config;
pub mod error;
pub mod review;

pub use config::{CatalogConfig, ClassifierConfig};
pub use error::CatalogError;
pub use review::{ClassifiedReview, Review, SentimentLabel};
