use serde::{Deserialize, Serialize};
use std::ops::{AddAssign, Div};

use super::character::Gender;
use super::token::CharacterId;

/// A `(positive, negative, objective)` polarity triple. Used both for a
/// single lexicon sense and for sums/averages of senses.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SentimentScore {
    pub pos: f64,
    pub neg: f64,
    pub obj: f64,
}

impl SentimentScore {
    pub fn new(pos: f64, neg: f64, obj: f64) -> Self {
        Self { pos, neg, obj }
    }
}

impl AddAssign for SentimentScore {
    fn add_assign(&mut self, rhs: Self) {
        self.pos += rhs.pos;
        self.neg += rhs.neg;
        self.obj += rhs.obj;
    }
}

impl Div<f64> for SentimentScore {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self {
            pos: self.pos / rhs,
            neg: self.neg / rhs,
            obj: self.obj / rhs,
        }
    }
}

/// One character vertex. Ids are dense: exactly `0..roster_len`, one
/// vertex per roster entry even for characters never seen in the text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub id: CharacterId,
    pub label: String,
    pub gender: Gender,
    pub mention_count: u32,
}

/// One undirected interaction edge. `source < target` always; there are
/// no self-loops and no two edges share an endpoint pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub source: CharacterId,
    pub target: CharacterId,
    /// Number of context windows in which both endpoints appeared.
    pub weight: u32,
    /// Mean window polarity across the contributing windows. `None` when
    /// sentiment mode is off.
    pub sentiment: Option<SentimentScore>,
}

impl Edge {
    /// The canonical endpoint pair `(source, target)`.
    pub fn endpoints(&self) -> (CharacterId, CharacterId) {
        (self.source, self.target)
    }
}
