//! Search TMDB for a title, analyze the first hit and print the report.
//!
//! ```text
//! TMDB_API_KEY=... cargo run --example movie_report -- "fight club"
//! ```

use anyhow::{Context, Result};
use movie_sentiment::analyze_movie;
use movie_sentiment::catalog::{MovieCatalog, TmdbClient};
use movie_sentiment::pipelines::sentiment_analysis_pipeline::*;
use tracing_subscriber::EnvFilter;

fn or_na<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "N/A".to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let title = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    if title.trim().is_empty() {
        anyhow::bail!("usage: movie_report <movie title>");
    }
    let api_key = std::env::var("TMDB_API_KEY").context("TMDB_API_KEY must be set")?;

    let catalog = TmdbClient::new(api_key)?;
    let pipeline = SentimentAnalysisPipelineBuilder::vader().build()?;

    let hits = catalog.search_movies(&title).await?;
    if hits.is_empty() {
        println!("No movies found for \"{title}\".");
        return Ok(());
    }

    println!("=== Matches ===");
    for (index, movie) in hits.iter().enumerate() {
        println!("{index:>3}. {}", movie.option_label());
    }

    let selected = &hits[0];
    let analysis = analyze_movie(&catalog, &pipeline, selected.id).await?;
    let details = &analysis.details;

    println!("\n=== Movie Details ===");
    println!("Original title: {}", or_na(details.original_title.as_deref()));
    println!("Overview: {}", or_na(details.overview.as_deref()));
    println!("Release date: {}", or_na(details.release_date.as_deref()));
    println!("Popularity: {}", or_na(details.popularity));
    println!(
        "Average rating: {} (based on {} votes)",
        or_na(details.vote_average),
        details.vote_count.unwrap_or(0)
    );

    let report = &analysis.report;
    if report.is_empty() {
        println!("\nNo reviews available for this movie.");
        return Ok(());
    }

    println!("\n=== Reviews ===");
    for review in &report.reviews {
        let preview: String = review.content().chars().take(60).collect();
        println!(
            "{:<20} {:<8} {:+.4}  {}",
            review.author(),
            review.label,
            review.score,
            preview.replace('\n', " ")
        );
    }

    println!("\n=== Label Counts ===");
    for (label, count) in &report.label_counts {
        println!("{:<8} {:>3} {}", label, count, "#".repeat(*count));
    }

    println!("\n=== Word Cloud Terms ===");
    let terms: Vec<String> = report
        .word_frequencies
        .iter()
        .take(20)
        .map(|w| format!("{}×{}", w.term, w.count))
        .collect();
    println!("{}", terms.join(", "));

    Ok(())
}
