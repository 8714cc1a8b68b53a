use serde::{Deserialize, Serialize};

/// Newtype wrapper for character ids: a dense, 0-based index into the
/// character roster.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct CharacterId(pub usize);

/// One token of the annotated text, as emitted by the upstream
/// co-reference pipeline. The pipeline only reads tokens; it never
/// produces or mutates them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    /// The character this token was resolved to, if any.
    pub character: Option<CharacterId>,
    /// Dictionary base form of the token's word, the key for all
    /// lexicon lookups.
    pub lemma: String,
    pub sentence_id: u32,
    pub paragraph_id: u32,
}

impl Token {
    /// Convenience constructor for a token with no character reference.
    pub fn plain(lemma: &str, sentence_id: u32, paragraph_id: u32) -> Self {
        Self {
            character: None,
            lemma: lemma.to_string(),
            sentence_id,
            paragraph_id,
        }
    }

    /// Convenience constructor for a token resolved to a character.
    pub fn mention(character: CharacterId, lemma: &str, sentence_id: u32, paragraph_id: u32) -> Self {
        Self {
            character: Some(character),
            lemma: lemma.to_string(),
            sentence_id,
            paragraph_id,
        }
    }
}
