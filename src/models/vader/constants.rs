//! Rule constants of the compound scorer.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Valence added by an intensifier ("very good").
pub const B_INCR: f64 = 0.293;
/// Valence removed by a dampener ("slightly good").
pub const B_DECR: f64 = -0.293;
/// Valence added to an ALL-CAPS word in mixed-case text.
pub const C_INCR: f64 = 0.733;
/// Multiplier applied to negated valence.
pub const N_SCALAR: f64 = -0.74;

/// Amplifier per exclamation mark, capped at [`MAX_EXCLAMATIONS`].
pub const EXCLAMATION_INCR: f64 = 0.292;
pub const MAX_EXCLAMATIONS: usize = 4;
/// Amplifier per question mark when there are two or three of them.
pub const QUESTION_INCR: f64 = 0.18;
/// Amplifier used once there are more than three question marks.
pub const QUESTION_MAX: f64 = 0.96;

/// Constant of the `x / sqrt(x² + alpha)` normalization.
pub const NORMALIZATION_ALPHA: f64 = 15.0;

pub const NEGATE: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt", "ain't",
    "aren't", "can't", "couldn't", "daren't", "didn't", "doesn't", "dont", "hadnt", "hasnt",
    "havent", "isnt", "mightnt", "mustnt", "neither", "don't", "hadn't", "hasn't", "haven't",
    "isn't", "mightn't", "mustn't", "neednt", "needn't", "never", "none", "nope", "nor", "not",
    "nothing", "nowhere", "oughtnt", "shant", "shouldnt", "uhuh", "wasnt", "werent", "oughtn't",
    "shan't", "shouldn't", "uh-uh", "wasn't", "weren't", "without", "wont", "wouldnt", "won't",
    "wouldn't", "rarely", "seldom", "despite",
];

const INCREMENTS: &[&str] = &[
    "absolutely", "amazingly", "awfully", "completely", "considerable", "considerably",
    "decidedly", "deeply", "effing", "enormous", "enormously", "entirely", "especially",
    "exceptional", "exceptionally", "extreme", "extremely", "fabulously", "flipping", "flippin",
    "frackin", "fracking", "fricking", "frickin", "frigging", "friggin", "fully", "fuckin",
    "fucking", "fuggin", "fugging", "greatly", "hella", "highly", "hugely", "incredible",
    "incredibly", "intensely", "major", "majorly", "more", "most", "particularly", "purely",
    "quite", "really", "remarkably", "so", "substantially", "thoroughly", "total", "totally",
    "tremendous", "tremendously", "uber", "unbelievably", "unusually", "utter", "utterly",
    "very",
];

const DECREMENTS: &[&str] = &[
    "almost", "barely", "hardly", "just enough", "kind of", "kinda", "kindof", "kind-of", "less",
    "little", "marginal", "marginally", "occasional", "occasionally", "partly", "scarce",
    "scarcely", "slight", "slightly", "somewhat", "sort of", "sorta", "sortof", "sort-of",
];

static BOOSTERS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    INCREMENTS
        .iter()
        .map(|w| (*w, B_INCR))
        .chain(DECREMENTS.iter().map(|w| (*w, B_DECR)))
        .collect()
});

static SPECIAL_CASE_IDIOMS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([
        ("the shit", 3.0),
        ("the bomb", 3.0),
        ("bad ass", 1.5),
        ("badass", 1.5),
        ("yeah right", -2.0),
        ("kiss of death", -1.5),
        ("to die for", 3.0),
        ("cut the mustard", 2.0),
        ("hand to mouth", -2.0),
    ])
});

/// Booster or dampener weight of a lower-case word or bigram.
pub fn booster(word: &str) -> Option<f64> {
    BOOSTERS.get(word).copied()
}

/// Fixed valence of a lower-case idiom.
pub fn special_idiom(phrase: &str) -> Option<f64> {
    SPECIAL_CASE_IDIOMS.get(phrase).copied()
}

/// Whether a lower-case token negates what follows it.
pub fn is_negation(word: &str) -> bool {
    NEGATE.contains(&word) || word.contains("n't")
}
