//! Window-level sentiment scoring against an injected polarity lexicon.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::schema::graph::SentimentScore;

/// Word-polarity lookup, e.g. a SentiWordNet-style resource. An
/// implementation returns every sense it knows for a lemma, most common
/// first; the scorer uses only the first sense. Injected so tests can
/// supply a hand-built table.
pub trait SentimentLexicon {
    /// All senses for a lemma, or `None` if the lexicon has no entry.
    fn senses(&self, lemma: &str) -> Option<&[SentimentScore]>;
}

/// Score one context window: the elementwise sum, over all recognized
/// lemmas, of the first sense's polarity. Unknown lemmas contribute
/// nothing. Note this is a sum across lemmas, not a per-lemma average;
/// richer windows carry more polarity mass before the cross-window
/// average evens them out.
pub fn score_window<L>(lexicon: &L, lemmas: &[&str]) -> SentimentScore
where
    L: SentimentLexicon + ?Sized,
{
    let mut score = SentimentScore::default();
    for lemma in lemmas {
        if let Some(first) = lexicon.senses(lemma).and_then(|senses| senses.first()) {
            score += *first;
        }
    }
    score
}

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// A polarity lexicon loaded from a RON file mapping lemma → senses:
///
/// ```text
/// {
///     "good": [(pos: 0.75, neg: 0.0, obj: 0.25)],
///     "grim": [(pos: 0.0, neg: 0.625, obj: 0.375)],
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RonLexicon {
    entries: FxHashMap<String, Vec<SentimentScore>>,
}

impl RonLexicon {
    pub fn parse_ron(contents: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(contents)
    }

    pub fn load_from_ron(path: &Path) -> Result<Self, LexiconError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(Self::parse_ron(&contents)?)
    }

    pub fn insert(&mut self, lemma: &str, senses: Vec<SentimentScore>) {
        self.entries.insert(lemma.to_string(), senses);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SentimentLexicon for RonLexicon {
    fn senses(&self, lemma: &str) -> Option<&[SentimentScore]> {
        self.entries.get(lemma).map(Vec::as_slice)
    }
}
