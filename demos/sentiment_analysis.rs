use anyhow::Result;
use movie_sentiment::pipelines::sentiment_analysis_pipeline::*;
use movie_sentiment::report::SentimentReport;

fn main() -> Result<()> {
    println!("Building pipeline...");

    let pipeline = SentimentAnalysisPipelineBuilder::vader().build()?;

    println!("Pipeline built successfully.");

    let text = "This movie is absolutely wonderful and amazing!";

    let prediction = pipeline.predict(text);

    println!("\n=== Sentiment Analysis Result ===");
    println!("Text: \"{}\"", text);
    println!("Normalized: \"{}\"", prediction.normalized);
    println!(
        "Sentiment: {} (compound: {:.4}, pos: {:.3}, neu: {:.3}, neg: {:.3})",
        prediction.label,
        prediction.score,
        prediction.scores.pos,
        prediction.scores.neu,
        prediction.scores.neg
    );

    println!("\n=== Batch Classification ===");
    let reviews = vec![
        Review::new("ana", Some("Great cast, superb score, loved every minute.")),
        Review::new("bo", Some("This movie was a complete disaster, I hated it")),
        Review::new("cy", None),
        Review::new("di", Some("The movie started at 8pm")),
    ];

    let report = SentimentReport::from_reviews(&pipeline, &reviews);
    for review in &report.reviews {
        println!("{:>4} → {} ({:.4})", review.author(), review.label, review.score);
    }

    println!("\nLabel counts:");
    for (label, count) in &report.label_counts {
        println!("  {:<8} {}", label, "#".repeat(*count));
    }

    println!("\nTop words:");
    for word in report.word_frequencies.iter().take(5) {
        println!("  {} ({})", word.term, word.count);
    }

    Ok(())
}
