use serde::Deserialize;
use std::time::Duration;

use super::SentimentLabel;

/// Thresholds used to turn a compound score into a [`SentimentLabel`].
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    pub positive_threshold: f64,
    pub negative_threshold: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            positive_threshold: SentimentLabel::POSITIVE_THRESHOLD,
            negative_threshold: SentimentLabel::NEGATIVE_THRESHOLD,
        }
    }
}

impl ClassifierConfig {
    /// Rejects thresholds that would make the labels overlap or are not finite.
    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.positive_threshold.is_finite() || !self.negative_threshold.is_finite() {
            anyhow::bail!("sentiment thresholds must be finite numbers");
        }
        if self.negative_threshold > self.positive_threshold {
            anyhow::bail!(
                "negative threshold {} is above positive threshold {}",
                self.negative_threshold,
                self.positive_threshold
            );
        }
        Ok(())
    }
}

pub const TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Connection settings for the movie catalog.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: TMDB_BASE_URL.to_string(),
            timeout_secs: 10,
        }
    }
}

impl CatalogConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_thresholds_are_rejected() {
        let config = ClassifierConfig {
            positive_threshold: -0.1,
            negative_threshold: 0.1,
        };
        assert!(config.validate().is_err());
        assert!(ClassifierConfig::default().validate().is_ok());
    }

    #[test]
    fn config_fields_default_when_missing() {
        let config: CatalogConfig = serde_json::from_str(r#"{"timeout_secs": 3}"#).unwrap();
        assert_eq!(config.base_url, TMDB_BASE_URL);
        assert_eq!(config.timeout(), Duration::from_secs(3));
    }
}
