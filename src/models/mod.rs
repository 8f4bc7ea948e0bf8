//! Sentiment scoring models.

pub mod vader;

pub use vader::{Lexicon, VaderModel, VaderOptions};
