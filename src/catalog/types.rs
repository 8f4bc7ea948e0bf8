use serde::{Deserialize, Serialize};

/// A search hit from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub original_title: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub popularity: Option<f64>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub vote_count: Option<u64>,
}

impl MovieSummary {
    /// First four characters of the release date, if there is one.
    pub fn release_year(&self) -> Option<String> {
        release_year(self.release_date.as_deref())
    }

    /// Label used when offering the movie in a selection list, e.g.
    /// `"Alien (1979)"`, or `"Alien (N/A)"` without a release date.
    pub fn option_label(&self) -> String {
        let year = self.release_year().unwrap_or_else(|| "N/A".to_string());
        format!("{} ({})", self.title, year)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetails {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub original_title: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub popularity: Option<f64>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub vote_count: Option<u64>,
}

impl MovieDetails {
    pub fn release_year(&self) -> Option<String> {
        release_year(self.release_date.as_deref())
    }
}

fn release_year(date: Option<&str>) -> Option<String> {
    let date = date?.trim();
    if date.is_empty() {
        return None;
    }
    Some(date.chars().take(4).collect())
}

/// One page of a paginated catalog listing.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: serde::de::DeserializeOwned"))]
pub(crate) struct Page<T> {
    #[serde(default)]
    pub results: Vec<T>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Review;

    #[test]
    fn option_label_falls_back_without_a_date() {
        let mut movie: MovieSummary =
            serde_json::from_str(r#"{"id": 348, "title": "Alien", "release_date": "1979-05-25"}"#)
                .unwrap();
        assert_eq!(movie.option_label(), "Alien (1979)");

        movie.release_date = Some(String::new());
        assert_eq!(movie.option_label(), "Alien (N/A)");
        movie.release_date = None;
        assert_eq!(movie.option_label(), "Alien (N/A)");
    }

    #[test]
    fn page_without_results_is_empty() {
        let page: Page<Review> = serde_json::from_str(r#"{"page": 1}"#).unwrap();
        assert!(page.results.is_empty());
    }

    #[test]
    fn search_page_decodes_recorded_results() {
        let body = include_str!("../../tests/fixtures/search_results.json");
        let page: Page<MovieSummary> = serde_json::from_str(body).unwrap();
        assert!(!page.results.is_empty());
        assert!(page.results.iter().all(|movie| !movie.title.is_empty()));
    }

    #[test]
    fn review_page_decodes_recorded_results() {
        let body = include_str!("../../tests/fixtures/movie_reviews.json");
        let page: Page<Review> = serde_json::from_str(body).unwrap();
        assert_eq!(page.results.len(), 4);
    }
}
