//! Pipeline wiring: roster + token stream → `CharacterNetwork`.

use tracing::debug;

use crate::core::aggregate::aggregate_edges;
use crate::core::gender::GenderLexicon;
use crate::core::grouper::{group_windows, GroupingStrategy};
use crate::core::network::CharacterNetwork;
use crate::core::sentiment::SentimentLexicon;
use crate::schema::character::{CharacterRecord, Gender};
use crate::schema::graph::Vertex;
use crate::schema::token::{CharacterId, Token};

/// Configures and runs the extraction pipeline.
///
/// Extraction is a pure function of the configuration and its inputs:
/// the same tokens and roster always produce the same network, vertex
/// and edge order included. Inputs are assumed validated (character refs
/// within roster bounds); see `io::tokens::validate_character_refs`.
pub struct NetworkExtractor {
    strategy: GroupingStrategy,
    sentiment: Option<Box<dyn SentimentLexicon>>,
    gender_fallback: bool,
    gender_lexicon: GenderLexicon,
}

impl Default for NetworkExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl NetworkExtractor {
    /// Default configuration: sentence windows, sentiment off, gender
    /// fallback on with the built-in pronoun/title lexicon.
    pub fn new() -> Self {
        Self {
            strategy: GroupingStrategy::Sentence,
            sentiment: None,
            gender_fallback: true,
            gender_lexicon: GenderLexicon::default(),
        }
    }

    pub fn strategy(mut self, strategy: GroupingStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Enable sentiment mode with the given polarity lexicon. Adds one
    /// lexicon lookup per lemma per qualifying window.
    pub fn sentiment(mut self, lexicon: impl SentimentLexicon + 'static) -> Self {
        self.sentiment = Some(Box::new(lexicon));
        self
    }

    /// Enable or disable lexical gender inference for roster entries
    /// whose gender code is `Unknown`. On by default.
    pub fn gender_fallback(mut self, enabled: bool) -> Self {
        self.gender_fallback = enabled;
        self
    }

    /// Replace the gender-inference lexicon.
    pub fn gender_lexicon(mut self, lexicon: GenderLexicon) -> Self {
        self.gender_lexicon = lexicon;
        self
    }

    /// Run the pipeline and assemble the network.
    pub fn extract(&self, tokens: &[Token], roster: &[CharacterRecord]) -> CharacterNetwork {
        let vertices = self.build_vertices(tokens, roster);
        let windows = group_windows(tokens, self.strategy);
        let edges = aggregate_edges(windows, self.sentiment.as_deref());
        debug!(
            vertices = vertices.len(),
            edges = edges.len(),
            strategy = ?self.strategy,
            sentiment = self.sentiment.is_some(),
            "network extracted"
        );
        CharacterNetwork::new(vertices, edges, self.sentiment.is_some())
    }

    /// One vertex per roster entry, at the entry's index, whether or not
    /// the character ever appears in the token stream.
    fn build_vertices(&self, tokens: &[Token], roster: &[CharacterRecord]) -> Vec<Vertex> {
        roster
            .iter()
            .enumerate()
            .map(|(index, record)| {
                let id = CharacterId(index);
                let gender = match record.gender {
                    Gender::Unknown if self.gender_fallback => self.infer_gender(tokens, id),
                    reliable => reliable,
                };
                Vertex {
                    id,
                    label: record.label().to_string(),
                    gender,
                    mention_count: record.mention_count,
                }
            })
            .collect()
    }

    fn infer_gender(&self, tokens: &[Token], id: CharacterId) -> Gender {
        self.gender_lexicon.infer(
            tokens
                .iter()
                .filter(|token| token.character == Some(id))
                .map(|token| token.lemma.as_str()),
        )
    }
}
