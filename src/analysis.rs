//! One user action end to end: details, reviews, classification, report.

use crate::catalog::{MovieCatalog, MovieDetails};
use crate::core::CatalogError;
use crate::pipelines::sentiment_analysis_pipeline::{
    SentimentAnalysisModel, SentimentAnalysisPipeline,
};
use crate::report::SentimentReport;

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct MovieAnalysis {
    pub details: MovieDetails,
    pub report: SentimentReport,
}

/// Fetches a movie and its reviews and classifies every review with content.
///
/// A movie without reviews is not an error: the report is empty and every
/// label count is zero.
pub async fn analyze_movie<C, M>(
    catalog: &C,
    pipeline: &SentimentAnalysisPipeline<M>,
    movie_id: u64,
) -> Result<MovieAnalysis, CatalogError>
where
    C: MovieCatalog,
    M: SentimentAnalysisModel + Sync,
{
    let details = catalog.movie_details(movie_id).await?;
    let reviews = catalog.movie_reviews(movie_id).await?;

    let report = SentimentReport::from_reviews(pipeline, &reviews);
    if report.is_empty() {
        tracing::warn!(movie_id, "no reviews available");
    } else {
        tracing::info!(
            movie_id,
            reviews = report.reviews.len(),
            mean_score = report.mean_score.unwrap_or_default(),
            "analyzed reviews"
        );
    }

    Ok(MovieAnalysis { details, report })
}
