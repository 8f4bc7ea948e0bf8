use std::path::PathBuf;
use std::sync::Arc;

use super::constants::{
    booster, is_negation, special_idiom, C_INCR, EXCLAMATION_INCR, MAX_EXCLAMATIONS,
    NORMALIZATION_ALPHA, N_SCALAR, QUESTION_INCR, QUESTION_MAX,
};
use super::lexicon::Lexicon;
use crate::loaders::LexiconLoader;
use crate::pipelines::sentiment_analysis_pipeline::{PolarityScores, SentimentAnalysisModel};

/// Where the scorer takes its lexicon from.
#[derive(Debug, Clone, Default)]
pub struct VaderOptions {
    /// VADER-format lexicon file replacing the built-in table.
    pub lexicon_file: Option<PathBuf>,
    /// Entries added on top of the chosen lexicon.
    pub extra_entries: Vec<(String, f64)>,
}

/// Rule-based compound sentiment scorer.
///
/// Scores tokens with a valence lexicon and adjusts them for boosters,
/// negation, capitalization, contrast ("but") and punctuation emphasis.
/// The model holds only immutable data, so clones are cheap and calls
/// never influence each other.
#[derive(Debug, Clone)]
pub struct VaderModel {
    lexicon: Arc<Lexicon>,
}

impl Default for VaderModel {
    fn default() -> Self {
        Self::with_lexicon(Lexicon::builtin())
    }
}

impl VaderModel {
    pub fn with_lexicon(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Scores `text` as-is, without any normalization.
    pub fn polarity_scores(&self, text: &str) -> PolarityScores {
        let sentitext = SentiText::new(text);
        let lower = &sentitext.lower;

        let mut sentiments = Vec::with_capacity(lower.len());
        for (i, word) in lower.iter().enumerate() {
            let kind_of = word == "kind" && lower.get(i + 1).is_some_and(|next| next == "of");
            if booster(word).is_some() || kind_of {
                sentiments.push(0.0);
                continue;
            }
            sentiments.push(self.sentiment_valence(&sentitext, i));
        }

        but_check(lower, &mut sentiments);
        score_valence(&sentiments, text)
    }

    fn sentiment_valence(&self, sentitext: &SentiText, i: usize) -> f64 {
        let words = &sentitext.words;
        let lower = &sentitext.lower;
        let item = lower[i].as_str();

        let Some(base) = self.lexicon.get(item) else {
            return 0.0;
        };
        let mut valence = base;

        // "no" directly before another lexicon word only negates it
        if item == "no" && lower.get(i + 1).is_some_and(|next| self.lexicon.contains(next)) {
            valence = 0.0;
        }
        if (i > 0 && lower[i - 1] == "no")
            || (i > 1 && lower[i - 2] == "no")
            || (i > 2 && lower[i - 3] == "no" && (lower[i - 1] == "or" || lower[i - 1] == "nor"))
        {
            valence = base * N_SCALAR;
        }

        if sentitext.is_cap_diff && is_all_caps(&words[i]) {
            valence += if valence > 0.0 { C_INCR } else { -C_INCR };
        }

        for start_i in 0..3 {
            if i <= start_i {
                break;
            }
            let preceding = i - (start_i + 1);
            if self.lexicon.contains(&lower[preceding]) {
                continue;
            }

            let mut scalar = scalar_inc_dec(&words[preceding], valence, sentitext.is_cap_diff);
            if start_i == 1 && scalar != 0.0 {
                scalar *= 0.95;
            }
            if start_i == 2 && scalar != 0.0 {
                scalar *= 0.9;
            }
            valence += scalar;
            valence = negation_check(valence, lower, start_i, i);
            if start_i == 2 {
                valence = special_idioms_check(valence, lower, i);
            }
        }

        least_check(valence, lower, i, &self.lexicon)
    }
}

impl SentimentAnalysisModel for VaderModel {
    type Options = VaderOptions;

    fn new(options: Self::Options) -> anyhow::Result<Self> {
        let mut lexicon = match &options.lexicon_file {
            Some(path) => Arc::new(LexiconLoader::new(path).load()?),
            None => Lexicon::builtin(),
        };
        if !options.extra_entries.is_empty() {
            let lexicon = Arc::make_mut(&mut lexicon);
            for (token, valence) in &options.extra_entries {
                if !valence.is_finite() {
                    anyhow::bail!("valence for {token:?} is not finite");
                }
                lexicon.insert(token, *valence);
            }
        }
        tracing::debug!(entries = lexicon.len(), "loaded sentiment lexicon");
        Ok(Self::with_lexicon(lexicon))
    }

    fn polarity_scores(&self, text: &str) -> PolarityScores {
        VaderModel::polarity_scores(self, text)
    }
}

/// Whitespace tokens with surrounding punctuation removed.
struct SentiText {
    words: Vec<String>,
    lower: Vec<String>,
    /// True when some, but not all, tokens are ALL CAPS.
    is_cap_diff: bool,
}

impl SentiText {
    fn new(text: &str) -> Self {
        let words: Vec<String> = text.split_whitespace().map(strip_punc_if_word).collect();
        let lower = words.iter().map(|w| w.to_lowercase()).collect();

        let all_caps = words.iter().filter(|w| is_all_caps(w)).count();
        let is_cap_diff = all_caps > 0 && all_caps < words.len();

        Self {
            words,
            lower,
            is_cap_diff,
        }
    }
}

/// Keeps short tokens such as emoticons (":)") intact.
fn strip_punc_if_word(token: &str) -> String {
    let stripped = token.trim_matches(|c: char| c.is_ascii_punctuation());
    if stripped.chars().count() <= 2 {
        token.to_string()
    } else {
        stripped.to_string()
    }
}

fn is_all_caps(word: &str) -> bool {
    word.chars().any(char::is_uppercase) && !word.chars().any(char::is_lowercase)
}

fn scalar_inc_dec(word: &str, valence: f64, is_cap_diff: bool) -> f64 {
    let Some(weight) = booster(&word.to_lowercase()) else {
        return 0.0;
    };
    let mut scalar = if valence < 0.0 { -weight } else { weight };
    if is_cap_diff && is_all_caps(word) {
        scalar += if valence > 0.0 { C_INCR } else { -C_INCR };
    }
    scalar
}

fn negation_check(valence: f64, lower: &[String], start_i: usize, i: usize) -> f64 {
    let at = |offset: usize| lower[i - offset].as_str();
    match start_i {
        0 => {
            if is_negation(at(1)) {
                return valence * N_SCALAR;
            }
        }
        1 => {
            if at(2) == "never" && (at(1) == "so" || at(1) == "this") {
                return valence * 1.25;
            }
            if at(2) == "without" && at(1) == "doubt" {
                return valence;
            }
            if is_negation(at(2)) {
                return valence * N_SCALAR;
            }
        }
        _ => {
            if (at(3) == "never" && (at(2) == "so" || at(2) == "this"))
                || (at(1) == "so" || at(1) == "this")
            {
                return valence * 1.25;
            }
            if at(3) == "without" && (at(2) == "doubt" || at(1) == "doubt") {
                return valence;
            }
            if is_negation(at(3)) {
                return valence * N_SCALAR;
            }
        }
    }
    valence
}

fn special_idioms_check(mut valence: f64, lower: &[String], i: usize) -> f64 {
    let w = |index: usize| lower[index].as_str();
    let onezero = format!("{} {}", w(i - 1), w(i));
    let twoonezero = format!("{} {} {}", w(i - 2), w(i - 1), w(i));
    let twoone = format!("{} {}", w(i - 2), w(i - 1));
    let threetwoone = format!("{} {} {}", w(i - 3), w(i - 2), w(i - 1));
    let threetwo = format!("{} {}", w(i - 3), w(i - 2));

    for sequence in [&onezero, &twoonezero, &twoone, &threetwoone, &threetwo] {
        if let Some(idiom) = special_idiom(sequence) {
            valence = idiom;
            break;
        }
    }

    if lower.len() > i + 1 {
        if let Some(idiom) = special_idiom(&format!("{} {}", w(i), w(i + 1))) {
            valence = idiom;
        }
    }
    if lower.len() > i + 2 {
        if let Some(idiom) = special_idiom(&format!("{} {} {}", w(i), w(i + 1), w(i + 2))) {
            valence = idiom;
        }
    }

    // multi-word boosters such as "kind of" and "sort of"
    for n_gram in [&threetwoone, &threetwo, &twoone] {
        if let Some(weight) = booster(n_gram) {
            valence += weight;
        }
    }
    valence
}

fn least_check(valence: f64, lower: &[String], i: usize, lexicon: &Lexicon) -> f64 {
    if i > 0 && lower[i - 1] == "least" && !lexicon.contains("least") {
        if i == 1 || (lower[i - 2] != "at" && lower[i - 2] != "very") {
            return valence * N_SCALAR;
        }
    }
    valence
}

/// Words before the first "but" count half, words after it one and a half.
fn but_check(lower: &[String], sentiments: &mut [f64]) {
    let Some(but) = lower.iter().position(|w| w == "but") else {
        return;
    };
    for (index, sentiment) in sentiments.iter_mut().enumerate() {
        if index < but {
            *sentiment *= 0.5;
        } else if index > but {
            *sentiment *= 1.5;
        }
    }
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(MAX_EXCLAMATIONS);
    let questions = text.matches('?').count();
    let question_amplifier = match questions {
        0 | 1 => 0.0,
        2 | 3 => questions as f64 * QUESTION_INCR,
        _ => QUESTION_MAX,
    };
    exclamations as f64 * EXCLAMATION_INCR + question_amplifier
}

/// Maps an unbounded valence sum into [-1, 1].
pub fn normalize_score(score: f64) -> f64 {
    let normalized = score / (score * score + NORMALIZATION_ALPHA).sqrt();
    normalized.clamp(-1.0, 1.0)
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

fn score_valence(sentiments: &[f64], text: &str) -> PolarityScores {
    if sentiments.is_empty() {
        return PolarityScores::default();
    }

    let emphasis = punctuation_emphasis(text);
    let mut sum: f64 = sentiments.iter().sum();
    if sum > 0.0 {
        sum += emphasis;
    } else if sum < 0.0 {
        sum -= emphasis;
    }
    let compound = normalize_score(sum);

    let (mut pos_sum, mut neg_sum, mut neu_count) = (0.0_f64, 0.0_f64, 0.0_f64);
    for &sentiment in sentiments {
        if sentiment > 0.0 {
            pos_sum += sentiment + 1.0;
        } else if sentiment < 0.0 {
            neg_sum += sentiment - 1.0;
        } else {
            neu_count += 1.0;
        }
    }
    if pos_sum > neg_sum.abs() {
        pos_sum += emphasis;
    } else if pos_sum < neg_sum.abs() {
        neg_sum -= emphasis;
    }

    let total = pos_sum + neg_sum.abs() + neu_count;
    PolarityScores {
        neg: round_to((neg_sum / total).abs(), 3),
        neu: round_to((neu_count / total).abs(), 3),
        pos: round_to((pos_sum / total).abs(), 3),
        compound: round_to(compound, 4),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compound(text: &str) -> f64 {
        VaderModel::default().polarity_scores(text).compound
    }

    #[test]
    fn matches_published_reference_compounds() {
        let cases = [
            ("VADER is smart, handsome, and funny.", 0.8316),
            ("VADER is smart, handsome, and funny!", 0.8439),
            ("VADER is very smart, handsome, and funny.", 0.8545),
            ("VADER is not smart, handsome, nor funny.", -0.7424),
            ("The book was good.", 0.4404),
            ("At least it isn't a horrible book.", 0.431),
            ("Today SUX!", -0.5461),
        ];
        for (text, expected) in cases {
            assert_eq!(compound(text), expected, "text: {text:?}");
        }
    }

    #[test]
    fn empty_text_scores_zero() {
        assert_eq!(VaderModel::default().polarity_scores(""), PolarityScores::default());
        assert_eq!(compound("   \n\t"), 0.0);
    }

    #[test]
    fn single_word_matches_normalization() {
        // great = 3.1 -> 3.1 / sqrt(3.1^2 + 15)
        assert_eq!(compound("great"), round_to(normalize_score(3.1), 4));
        assert!((compound("great") - 0.6249).abs() < 1e-4);
    }

    #[test]
    fn boosters_increase_intensity() {
        assert!(compound("very good") > compound("good"));
        assert!(compound("slightly good") < compound("good"));
        assert!(compound("very bad") < compound("bad"));
        // the booster itself carries no valence
        assert_eq!(compound("very"), 0.0);
    }

    #[test]
    fn negation_flips_polarity() {
        assert!(compound("good") > 0.0);
        assert!(compound("not good") < 0.0);
        assert!(compound("isn't good") < 0.0);
        assert!(compound("the plot is not good") < -0.05);
        // negation three words back still applies
        assert!(compound("never was it good") < 0.0);
    }

    #[test]
    fn caps_emphasis_needs_mixed_case() {
        assert!(compound("The movie was GREAT") > compound("The movie was great"));
        assert_eq!(compound("GREAT"), compound("great"));
    }

    #[test]
    fn exclamations_amplify_up_to_four() {
        assert!(compound("great!") > compound("great"));
        assert!(compound("great!!!!") > compound("great!!"));
        assert_eq!(compound("great!!!!"), compound("great!!!!!!!"));
    }

    #[test]
    fn but_shifts_weight_to_the_second_clause() {
        assert!(compound("the acting was good but the plot was terrible") < 0.0);
        assert!(compound("the acting was terrible but the plot was good") > 0.0);
    }

    #[test]
    fn kind_of_is_not_scored_as_kind() {
        assert_eq!(compound("kind of"), 0.0);
        assert!(compound("kind") > 0.0);
    }

    #[test]
    fn least_negates() {
        assert!(compound("the least funny movie") < 0.0);
        assert!(compound("at least funny") > 0.0);
    }

    #[test]
    fn no_before_a_lexicon_word() {
        assert!(compound("no good") < 0.0);
        assert!(compound("no") < 0.0);
    }

    #[test]
    fn proportions_sum_to_one() {
        let scores = VaderModel::default().polarity_scores("good movie, bad ending, fine cast");
        let total = scores.neg + scores.neu + scores.pos;
        assert!((total - 1.0).abs() < 0.01, "{scores:?}");
    }

    #[test]
    fn compound_stays_bounded() {
        let text = "great ".repeat(200);
        let value = compound(&text);
        assert!(value <= 1.0 && value > 0.99);
        let text = "horrible ".repeat(200);
        assert!(compound(&text) >= -1.0);
    }
}
