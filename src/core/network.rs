//! The assembled character network.

use serde::{Deserialize, Serialize};

use crate::schema::graph::{Edge, Vertex};

/// The finished social network: one vertex per roster entry, one edge per
/// observed co-occurring pair. Immutable once built; export adapters read
/// it through the accessors and never mutate it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterNetwork {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    sentiment: bool,
}

impl CharacterNetwork {
    pub(crate) fn new(vertices: Vec<Vertex>, edges: Vec<Edge>, sentiment: bool) -> Self {
        Self {
            vertices,
            edges,
            sentiment,
        }
    }

    /// All vertices, ordered by id (= roster order).
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// All edges, ordered by canonical endpoint pair.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Whether the network was extracted in sentiment mode; when true,
    /// every edge carries a sentiment average.
    pub fn has_sentiment(&self) -> bool {
        self.sentiment
    }
}
