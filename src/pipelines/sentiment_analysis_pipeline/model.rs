/// Raw output of a sentiment model.
///
/// `neg`, `neu` and `pos` are the shares of negative, neutral and positive
/// valence in the text and add up to roughly one. `compound` is the
/// normalized overall polarity in [-1, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PolarityScores {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
}

pub trait SentimentAnalysisModel {
    type Options: std::fmt::Debug + Clone;

    fn new(options: Self::Options) -> anyhow::Result<Self>
    where
        Self: Sized;

    /// Scores text exactly as given. Must be deterministic and must not
    /// fail for any input.
    fn polarity_scores(&self, text: &str) -> PolarityScores;
}
