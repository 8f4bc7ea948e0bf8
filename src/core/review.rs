/// Discrete sentiment of a piece of text.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub enum SentimentLabel {
    /// Compound score at or above the positive threshold.
    Positive,
    /// Compound score at or below the negative threshold.
    Negative,
    /// Everything in between, including empty text.
    Neutral,
}

impl SentimentLabel {
    /// All labels in chart order.
    pub const ALL: [SentimentLabel; 3] = [
        SentimentLabel::Positive,
        SentimentLabel::Negative,
        SentimentLabel::Neutral,
    ];

    /// Lowest compound score labelled positive.
    pub const POSITIVE_THRESHOLD: f64 = 0.05;
    /// Highest compound score labelled negative.
    pub const NEGATIVE_THRESHOLD: f64 = -0.05;

    /// Maps a compound score to a label using the standard thresholds.
    ///
    /// Both bounds are inclusive: `0.05` is positive and `-0.05` is negative.
    pub fn from_score(score: f64) -> Self {
        Self::from_score_with(score, Self::POSITIVE_THRESHOLD, Self::NEGATIVE_THRESHOLD)
    }

    /// Maps a compound score to a label with caller-supplied thresholds.
    pub fn from_score_with(score: f64, positive: f64, negative: f64) -> Self {
        if score >= positive {
            SentimentLabel::Positive
        } else if score <= negative {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    /// Returns the string representation of the label.
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
/// A review as returned by the movie catalog.
///
/// `content` may be missing or empty; such reviews are skipped by
/// classification and by the word-cloud corpus.
pub struct Review {
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    /// Catalog-specific author metadata, passed through untouched.
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub author_details: serde_json::Value,
}

/// Treats an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + serde::Deserialize<'de>,
{
    let value: Option<T> = serde::Deserialize::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

impl Review {
    /// Create a review with only an author and optional content.
    pub fn new(author: &str, content: Option<&str>) -> Self {
        Self {
            author: author.to_string(),
            content: content.map(str::to_string),
            id: None,
            url: None,
            created_at: None,
            author_details: serde_json::Value::Null,
        }
    }

    /// The review body when it is present and not blank.
    pub fn text(&self) -> Option<&str> {
        self.content
            .as_deref()
            .filter(|content| !content.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
/// A review paired with its compound score and label.
pub struct ClassifiedReview {
    pub review: Review,
    pub score: f64,
    pub label: SentimentLabel,
}

impl ClassifiedReview {
    pub fn author(&self) -> &str {
        &self.review.author
    }

    pub fn content(&self) -> &str {
        self.review.content.as_deref().unwrap_or_default()
    }
}
