//! Lexicon and rule-based compound sentiment scorer.
//!
//! Tokens are scored from a valence lexicon and adjusted for boosters
//! ("very"), dampeners ("slightly"), negation ("not", "n't"), ALL-CAPS
//! emphasis, contrast ("but"), a handful of idioms and trailing `!`/`?`
//! emphasis. The summed valence is mapped into [-1, 1] as the compound score.

pub mod constants;
pub mod lexicon;
pub mod scorer;

pub use lexicon::Lexicon;
pub use scorer::{normalize_score, VaderModel, VaderOptions};
