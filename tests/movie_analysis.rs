use movie_sentiment::analyze_movie;
use movie_sentiment::catalog::{MovieCatalog, MovieDetails, MovieSummary};
use movie_sentiment::core::CatalogError;
use movie_sentiment::pipelines::sentiment_analysis_pipeline::*;

fn fixture(name: &str) -> String {
    let path = format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"));
    std::fs::read_to_string(path).expect("fixture is readable")
}

#[derive(serde::Deserialize)]
struct Page<T> {
    results: Vec<T>,
}

/// Serves recorded catalog responses.
struct RecordedCatalog {
    reviews: Option<String>,
}

impl MovieCatalog for RecordedCatalog {
    async fn search_movies(&self, title: &str) -> Result<Vec<MovieSummary>, CatalogError> {
        if title.trim().is_empty() {
            return Err(CatalogError::MissingInput("title"));
        }
        let page: Page<MovieSummary> = serde_json::from_str(&fixture("search_results.json"))?;
        Ok(page.results)
    }

    async fn movie_details(&self, movie_id: u64) -> Result<MovieDetails, CatalogError> {
        if movie_id != 550 {
            return Err(CatalogError::Status {
                endpoint: format!("movie/{movie_id}"),
                status: 404,
            });
        }
        Ok(serde_json::from_str(&fixture("movie_details.json"))?)
    }

    async fn movie_reviews(&self, _movie_id: u64) -> Result<Vec<Review>, CatalogError> {
        match &self.reviews {
            Some(body) => {
                let page: Page<Review> = serde_json::from_str(body)?;
                Ok(page.results)
            }
            None => Ok(Vec::new()),
        }
    }
}

#[tokio::test]
async fn search_then_analyze() -> anyhow::Result<()> {
    let catalog = RecordedCatalog {
        reviews: Some(fixture("movie_reviews.json")),
    };
    let pipeline = SentimentAnalysisPipelineBuilder::vader().build()?;

    let hits = catalog.search_movies("fight club").await?;
    let labels: Vec<String> = hits.iter().map(MovieSummary::option_label).collect();
    assert_eq!(labels, vec!["Fight Club (1999)", "Fight Club Redux (N/A)"]);

    let analysis = analyze_movie(&catalog, &pipeline, hits[0].id).await?;
    assert_eq!(analysis.details.original_title.as_deref(), Some("Fight Club"));
    assert_eq!(analysis.details.vote_count, Some(26280));

    let report = &analysis.report;
    // the review without content is not classified
    assert_eq!(report.reviews.len(), 3);
    let authors: Vec<&str> = report.reviews.iter().map(|r| r.author()).collect();
    assert_eq!(authors, vec!["Goddard", "dank", "timetraveller"]);

    let labels: Vec<SentimentLabel> = report.reviews.iter().map(|r| r.label).collect();
    assert_eq!(
        labels,
        vec![
            SentimentLabel::Positive,
            SentimentLabel::Negative,
            SentimentLabel::Neutral
        ]
    );
    assert_eq!(report.label_counts[&SentimentLabel::Positive], 1);
    assert_eq!(report.label_counts[&SentimentLabel::Negative], 1);
    assert_eq!(report.label_counts[&SentimentLabel::Neutral], 1);

    assert!(report.corpus.starts_with("Pretty awesome movie."));
    assert!(report.corpus.ends_with("The movie started at 8pm."));
    assert_eq!(report.word_frequencies[0].term, "movie");
    assert_eq!(report.word_frequencies[0].count, 3);

    // author metadata passes through untouched
    assert_eq!(report.reviews[0].review.author_details["rating"], 10.0);
    Ok(())
}

#[tokio::test]
async fn movie_without_reviews_gives_an_empty_report() -> anyhow::Result<()> {
    let catalog = RecordedCatalog { reviews: None };
    let pipeline = SentimentAnalysisPipelineBuilder::vader().build()?;

    let analysis = analyze_movie(&catalog, &pipeline, 550).await?;
    assert!(analysis.report.is_empty());
    assert_eq!(analysis.report.corpus, "");
    assert!(analysis.report.label_counts.values().all(|count| *count == 0));
    Ok(())
}

#[tokio::test]
async fn catalog_errors_propagate() -> anyhow::Result<()> {
    let catalog = RecordedCatalog { reviews: None };
    let pipeline = SentimentAnalysisPipelineBuilder::vader().build()?;

    let err = analyze_movie(&catalog, &pipeline, 1).await.unwrap_err();
    assert!(matches!(err, CatalogError::Status { status: 404, .. }));
    assert_eq!(err.to_string(), "catalog request to movie/1 failed with status 404");

    let err = catalog.search_movies("").await.unwrap_err();
    assert!(matches!(err, CatalogError::MissingInput("title")));
    Ok(())
}

#[test]
fn report_serializes_for_the_presentation_layer() -> anyhow::Result<()> {
    let pipeline = SentimentAnalysisPipelineBuilder::vader().build()?;
    let reviews = vec![Review::new("a", Some("great movie")), Review::new("b", None)];
    let report = movie_sentiment::SentimentReport::from_reviews(&pipeline, &reviews);

    let json = serde_json::to_value(&report)?;
    assert_eq!(json["label_counts"]["Positive"], 1);
    assert_eq!(json["label_counts"]["Negative"], 0);
    assert_eq!(json["label_counts"]["Neutral"], 0);
    assert_eq!(json["reviews"][0]["label"], "Positive");
    assert_eq!(json["corpus"], "great movie");
    Ok(())
}
