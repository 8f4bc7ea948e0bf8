use serde::de::DeserializeOwned;

use super::types::{MovieDetails, MovieSummary, Page};
use crate::core::{CatalogConfig, CatalogError, Review};

/// Source of movie metadata and reviews.
#[allow(async_fn_in_trait)]
pub trait MovieCatalog {
    async fn search_movies(&self, title: &str) -> Result<Vec<MovieSummary>, CatalogError>;

    async fn movie_details(&self, movie_id: u64) -> Result<MovieDetails, CatalogError>;

    async fn movie_reviews(&self, movie_id: u64) -> Result<Vec<Review>, CatalogError>;
}

/// HTTP client for The Movie Database v3 API.
///
/// The API key is passed through as the `api_key` query parameter and is
/// never included in errors, logs or `Debug` output.
#[derive(Clone)]
pub struct TmdbClient {
    http: reqwest::Client,
    api_key: String,
    config: CatalogConfig,
}

impl std::fmt::Debug for TmdbClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TmdbClient")
            .field("api_key", &"<redacted>")
            .field("config", &self.config)
            .finish()
    }
}

impl TmdbClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self, CatalogError> {
        Self::with_config(api_key, CatalogConfig::default())
    }

    pub fn with_config(
        api_key: impl Into<String>,
        config: CatalogConfig,
    ) -> Result<Self, CatalogError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(CatalogError::MissingInput("api key"));
        }
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(Self {
            http,
            api_key,
            config,
        })
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, CatalogError> {
        tracing::debug!(path, "catalog request");
        let response = self
            .http
            .get(self.endpoint(path))
            .query(&[("api_key", self.api_key.as_str())])
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(path, status = status.as_u16(), "catalog request failed");
            return Err(CatalogError::Status {
                endpoint: path.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        decode_body(path, &body)
    }
}

/// Decodes a response body; malformed payloads surface as `CatalogError::Decode`.
fn decode_body<T: DeserializeOwned>(path: &str, body: &str) -> Result<T, CatalogError> {
    serde_json::from_str(body).map_err(|err| {
        tracing::warn!(path, %err, "catalog response did not decode");
        CatalogError::Decode(err)
    })
}

impl MovieCatalog for TmdbClient {
    async fn search_movies(&self, title: &str) -> Result<Vec<MovieSummary>, CatalogError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(CatalogError::MissingInput("title"));
        }
        let page: Page<MovieSummary> = self.get_json("search/movie", &[("query", title)]).await?;
        tracing::info!(title, hits = page.results.len(), "searched movies");
        Ok(page.results)
    }

    async fn movie_details(&self, movie_id: u64) -> Result<MovieDetails, CatalogError> {
        self.get_json(&format!("movie/{movie_id}"), &[]).await
    }

    async fn movie_reviews(&self, movie_id: u64) -> Result<Vec<Review>, CatalogError> {
        let page: Page<Review> = self
            .get_json(&format!("movie/{movie_id}/reviews"), &[])
            .await?;
        tracing::info!(movie_id, reviews = page.results.len(), "fetched reviews");
        Ok(page.results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_api_key_is_rejected() {
        let err = TmdbClient::new("  ").unwrap_err();
        assert!(matches!(err, CatalogError::MissingInput("api key")));
    }

    #[test]
    fn endpoint_joins_without_double_slashes() {
        let client = TmdbClient::with_config(
            "key",
            CatalogConfig {
                base_url: "http://localhost:9000/3/".to_string(),
                timeout_secs: 1,
            },
        )
        .unwrap();
        assert_eq!(client.endpoint("/movie/11"), "http://localhost:9000/3/movie/11");
        assert_eq!(client.endpoint("search/movie"), "http://localhost:9000/3/search/movie");
    }

    #[test]
    fn debug_output_hides_the_key() {
        let client = TmdbClient::new("s3cr3t").unwrap();
        let debug = format!("{client:?}");
        assert!(!debug.contains("s3cr3t"));
        assert!(debug.contains("redacted"));
    }

    #[test]
    fn malformed_bodies_are_decode_errors() {
        let page: Page<MovieSummary> = decode_body("search/movie", r#"{"results": []}"#).unwrap();
        assert!(page.results.is_empty());

        let err = decode_body::<MovieDetails>("movie/11", "<html>busy</html>").unwrap_err();
        assert!(matches!(err, CatalogError::Decode(_)), "{err}");
    }

    #[tokio::test]
    async fn empty_title_fails_before_any_request() {
        let client = TmdbClient::new("key").unwrap();
        let err = client.search_movies("   ").await.unwrap_err();
        assert!(matches!(err, CatalogError::MissingInput("title")));
    }

    #[tokio::test]
    async fn unreachable_catalog_is_an_http_error() {
        let client = TmdbClient::with_config(
            "key",
            CatalogConfig {
                base_url: "http://127.0.0.1:1".to_string(),
                timeout_secs: 2,
            },
        )
        .unwrap();
        let err = client.movie_details(11).await.unwrap_err();
        assert!(matches!(err, CatalogError::Http(_)), "{err}");
    }
}
