use serde::{Deserialize, Serialize};

/// Sentinel label for characters with no known name candidate.
pub const UNKNOWN_LABEL: &str = "UNK";

/// Gender attribute of a character vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    Unknown,
    Male,
    Female,
}

impl Gender {
    /// Display form used by the flat-file exporters.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "UNK",
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

/// One entry of the character roster: the name candidates the upstream
/// pipeline collected for a character, its gender code, and how often the
/// character was mentioned. Roster order fixes vertex ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterRecord {
    /// Name candidates, best first. May be empty.
    pub names: Vec<String>,
    /// Gender code from the upstream pipeline. `Unknown` means the code
    /// is unreliable and lexical inference may apply.
    pub gender: Gender,
    pub mention_count: u32,
}

impl CharacterRecord {
    /// The vertex label: the first name candidate, or [`UNKNOWN_LABEL`].
    pub fn label(&self) -> &str {
        self.names.first().map(String::as_str).unwrap_or(UNKNOWN_LABEL)
    }
}
