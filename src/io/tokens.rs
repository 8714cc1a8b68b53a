//! Parser for the tab-separated token table produced by the upstream
//! co-reference pipeline (bookNLP token output). Columns are located by
//! header name; any extra columns are ignored.

use std::path::Path;

use crate::io::IngestError;
use crate::schema::token::{CharacterId, Token};

const CHARACTER_ID: &str = "characterId";
const LEMMA: &str = "lemma";
const SENTENCE_ID: &str = "sentenceID";
const PARAGRAPH_ID: &str = "paragraphId";

pub fn load_tokens(path: &Path) -> Result<Vec<Token>, IngestError> {
    let contents = std::fs::read_to_string(path)?;
    parse_tokens(&contents)
}

/// Parse a token table. The first line must be a header naming at least
/// the `characterId`, `lemma`, `sentenceID`, and `paragraphId` columns.
/// A negative character id means the token belongs to no character.
pub fn parse_tokens(input: &str) -> Result<Vec<Token>, IngestError> {
    let mut lines = input.lines().enumerate();
    let (_, header) = lines.next().ok_or(IngestError::MissingHeader)?;
    let columns: Vec<&str> = header.split('\t').collect();

    let find = |name: &'static str| {
        columns
            .iter()
            .position(|column| *column == name)
            .ok_or(IngestError::MissingColumn(name))
    };
    let character_col = find(CHARACTER_ID)?;
    let lemma_col = find(LEMMA)?;
    let sentence_col = find(SENTENCE_ID)?;
    let paragraph_col = find(PARAGRAPH_ID)?;
    let width = 1 + character_col.max(lemma_col).max(sentence_col).max(paragraph_col);

    let mut tokens = Vec::new();
    for (index, line) in lines {
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < width {
            return Err(IngestError::ShortRow {
                line: index + 1,
                expected: width,
                found: fields.len(),
            });
        }
        tokens.push(Token {
            character: parse_character_ref(fields[character_col], index + 1)?,
            lemma: fields[lemma_col].to_string(),
            sentence_id: parse_id(fields[sentence_col], SENTENCE_ID, index + 1)?,
            paragraph_id: parse_id(fields[paragraph_col], PARAGRAPH_ID, index + 1)?,
        });
    }
    Ok(tokens)
}

/// Reject tokens referencing characters outside the roster. Run this
/// after parsing both inputs and before extraction; the core assumes
/// refs are in bounds.
pub fn validate_character_refs(tokens: &[Token], roster_len: usize) -> Result<(), IngestError> {
    for (index, token) in tokens.iter().enumerate() {
        if let Some(CharacterId(id)) = token.character {
            if id >= roster_len {
                return Err(IngestError::CharacterOutOfRange {
                    index,
                    id,
                    roster_len,
                });
            }
        }
    }
    Ok(())
}

fn parse_character_ref(field: &str, line: usize) -> Result<Option<CharacterId>, IngestError> {
    let raw: i64 = field.parse().map_err(|_| IngestError::BadField {
        line,
        column: CHARACTER_ID,
        value: field.to_string(),
    })?;
    if raw < 0 {
        Ok(None)
    } else {
        Ok(Some(CharacterId(raw as usize)))
    }
}

fn parse_id(field: &str, column: &'static str, line: usize) -> Result<u32, IngestError> {
    field.parse().map_err(|_| IngestError::BadField {
        line,
        column,
        value: field.to_string(),
    })
}
