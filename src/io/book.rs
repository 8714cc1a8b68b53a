//! Parser for the JSON character document produced by the upstream
//! co-reference pipeline (the bookNLP `.book` file).

use serde::Deserialize;
use std::path::Path;

use crate::io::IngestError;
use crate::schema::character::{CharacterRecord, Gender};

#[derive(Debug, Deserialize)]
struct BookFile {
    characters: Vec<BookCharacter>,
}

#[derive(Debug, Deserialize)]
struct BookCharacter {
    #[serde(default)]
    names: Vec<NameCandidate>,
    /// Gender code, when the upstream pipeline assigned one.
    #[serde(default)]
    g: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NameCandidate {
    n: String,
    /// How many mentions resolved to this name candidate.
    #[serde(default)]
    c: u32,
}

pub fn load_book(path: &Path) -> Result<Vec<CharacterRecord>, IngestError> {
    let contents = std::fs::read_to_string(path)?;
    parse_book(&contents)
}

/// Parse a character document into the roster. Array order is preserved;
/// it fixes the vertex ids. A character's mention count is the sum of its
/// name-candidate counts.
pub fn parse_book(input: &str) -> Result<Vec<CharacterRecord>, IngestError> {
    let book: BookFile = serde_json::from_str(input)?;
    Ok(book.characters.into_iter().map(to_record).collect())
}

fn to_record(character: BookCharacter) -> CharacterRecord {
    let mention_count = character.names.iter().map(|name| name.c).sum();
    CharacterRecord {
        gender: parse_gender(character.g.as_deref()),
        names: character.names.into_iter().map(|name| name.n).collect(),
        mention_count,
    }
}

fn parse_gender(code: Option<&str>) -> Gender {
    match code {
        Some("m") | Some("M") | Some("male") => Gender::Male,
        Some("f") | Some("F") | Some("female") => Gender::Female,
        // Anything else is an unreliable code.
        _ => Gender::Unknown,
    }
}
