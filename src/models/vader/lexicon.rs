use anyhow::Context;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Arc;

/// VADER-format valence table compiled into the crate.
const BUILTIN_SOURCE: &str = include_str!("vader_lexicon.txt");

static BUILTIN: Lazy<Arc<Lexicon>> = Lazy::new(|| {
    let lexicon = Lexicon::parse(BUILTIN_SOURCE).unwrap_or_else(|err| {
        tracing::error!(%err, "built-in lexicon failed to parse");
        Lexicon::default()
    });
    tracing::debug!(entries = lexicon.len(), "loaded built-in lexicon");
    Arc::new(lexicon)
});

/// Token to valence table used by the compound scorer.
///
/// Lookups are by lower-case token. A lexicon is never mutated once a
/// model holds it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lexicon {
    valences: HashMap<String, f64>,
}

impl Lexicon {
    /// Shared handle to the built-in lexicon.
    pub fn builtin() -> Arc<Lexicon> {
        Arc::clone(&BUILTIN)
    }

    /// Parses a VADER-format lexicon.
    ///
    /// Each non-empty line is `token<TAB>mean` optionally followed by more
    /// tab-separated columns (standard deviation, raw ratings) that are
    /// ignored. Lines starting with `#` are comments.
    pub fn parse(source: &str) -> anyhow::Result<Self> {
        let mut valences = HashMap::new();
        for (index, line) in source.lines().enumerate() {
            let line_no = index + 1;
            let line = line.trim_end();
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }

            let mut fields = line.split('\t');
            let token = fields.next().unwrap_or_default().trim();
            if token.is_empty() {
                anyhow::bail!("line {line_no}: missing token");
            }
            let raw = fields
                .next()
                .with_context(|| format!("line {line_no}: missing valence for {token:?}"))?;
            let valence: f64 = raw
                .trim()
                .parse()
                .with_context(|| format!("line {line_no}: invalid valence {raw:?}"))?;
            if !valence.is_finite() {
                anyhow::bail!("line {line_no}: valence for {token:?} is not finite");
            }

            valences.insert(token.to_lowercase(), valence);
        }
        Ok(Self { valences })
    }

    pub fn get(&self, token: &str) -> Option<f64> {
        self.valences.get(token).copied()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.valences.contains_key(token)
    }

    /// Adds or overrides an entry.
    pub fn insert(&mut self, token: &str, valence: f64) {
        self.valences.insert(token.to_lowercase(), valence);
    }

    pub fn len(&self) -> usize {
        self.valences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.valences.is_empty()
    }
}
