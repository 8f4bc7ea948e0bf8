//! Boundary to the remote movie catalog (The Movie Database).
//!
//! ## Main Types
//!
//! - [`MovieCatalog`] - search, details and reviews lookups
//! - [`TmdbClient`] - HTTPS implementation against the TMDB v3 API
//! - [`MovieSummary`], [`MovieDetails`] - the metadata we read

pub mod client;
pub mod types;

pub use client::{MovieCatalog, TmdbClient};
pub use types::{MovieDetails, MovieSummary};
