use thiserror::Error;

/// Error returned by movie catalog lookups.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A required input (title, API key) was empty.
    #[error("missing input: {0}")]
    MissingInput(&'static str),

    /// The catalog answered with a non-success status code.
    #[error("catalog request to {endpoint} failed with status {status}")]
    Status { endpoint: String, status: u16 },

    /// The request never produced a response (DNS, TLS, timeout, ...).
    #[error("catalog request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body was not the JSON we expected.
    #[error("could not decode catalog response: {0}")]
    Decode(#[from] serde_json::Error),
}
