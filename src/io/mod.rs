//! Adapters around the core: input parsing for the upstream pipeline's
//! file formats, and flat-file/graph export of the finished network.

pub mod book;
pub mod export;
pub mod tokens;

use thiserror::Error;

/// Input-shape errors. All of these are fatal and raised before the
/// aggregation pipeline runs; lexicon misses and degenerate (empty)
/// inputs are not errors.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("token table has no header row")]
    MissingHeader,
    #[error("token table header is missing the {0:?} column")]
    MissingColumn(&'static str),
    #[error("line {line}: expected at least {expected} fields, found {found}")]
    ShortRow {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("line {line}: invalid {column} value {value:?}")]
    BadField {
        line: usize,
        column: &'static str,
        value: String,
    },
    #[error("token {index} references character {id}, but the roster has {roster_len} entries")]
    CharacterOutOfRange {
        index: usize,
        id: usize,
        roster_len: usize,
    },
}
