//! Edge accumulation over the context-window sequence.

use rustc_hash::FxHashMap;

use crate::core::grouper::ContextWindow;
use crate::core::sentiment::{score_window, SentimentLexicon};
use crate::schema::graph::{Edge, SentimentScore};
use crate::schema::token::CharacterId;

#[derive(Debug, Default)]
struct EdgeAccum {
    count: u32,
    sentiment: SentimentScore,
}

/// Accumulate co-occurrence edges over a window sequence.
///
/// Each window contributes exactly 1 to the weight of every unordered
/// pair of its distinct characters, plus (when a lexicon is supplied) the
/// window's polarity sum, scored once per window and shared by all of its
/// pairs. Sentiment sums are divided by weight only once, at the end, and
/// only observed pairs are materialized.
pub fn aggregate_edges<'a, I>(windows: I, lexicon: Option<&dyn SentimentLexicon>) -> Vec<Edge>
where
    I: IntoIterator<Item = ContextWindow<'a>>,
{
    let mut interactions: FxHashMap<(CharacterId, CharacterId), EdgeAccum> = FxHashMap::default();

    for window in windows {
        let score = lexicon.map(|lex| score_window(lex, &window.lemmas));
        for (i, &a) in window.characters.iter().enumerate() {
            for &b in &window.characters[i + 1..] {
                let key = if a < b { (a, b) } else { (b, a) };
                let accum = interactions.entry(key).or_default();
                accum.count += 1;
                if let Some(score) = score {
                    accum.sentiment += score;
                }
            }
        }
    }

    let mut edges: Vec<Edge> = interactions
        .into_iter()
        .map(|((source, target), accum)| Edge {
            source,
            target,
            weight: accum.count,
            sentiment: lexicon.map(|_| accum.sentiment / f64::from(accum.count)),
        })
        .collect();
    // Hash-map order is arbitrary; the edge sequence is part of the
    // output contract.
    edges.sort_unstable_by_key(Edge::endpoints);
    edges
}
