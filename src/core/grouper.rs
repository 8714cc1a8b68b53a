//! Partitioning the token stream into context windows.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::schema::token::{CharacterId, Token};

/// Which token field delimits a context window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GroupingStrategy {
    #[default]
    Sentence,
    Paragraph,
}

impl GroupingStrategy {
    fn key(&self, token: &Token) -> u32 {
        match self {
            Self::Sentence => token.sentence_id,
            Self::Paragraph => token.paragraph_id,
        }
    }
}

/// One context window: a sentence's or paragraph's worth of tokens,
/// reduced to the distinct characters present and the lemmas used.
#[derive(Debug)]
pub struct ContextWindow<'a> {
    pub id: u32,
    /// Distinct characters, in order of first appearance. Duplicate
    /// mentions within the window collapse here, which is what makes
    /// co-occurrence presence-based.
    pub characters: Vec<CharacterId>,
    pub lemmas: Vec<&'a str>,
}

/// Group the token stream into context windows, ascending by window id.
/// Windows with fewer than two distinct characters can never contribute
/// an edge and are dropped here, which also spares the sentiment lexicon
/// their lookups.
pub fn group_windows(
    tokens: &[Token],
    strategy: GroupingStrategy,
) -> impl Iterator<Item = ContextWindow<'_>> {
    let mut windows: BTreeMap<u32, ContextWindow<'_>> = BTreeMap::new();
    for token in tokens {
        let id = strategy.key(token);
        let window = windows.entry(id).or_insert_with(|| ContextWindow {
            id,
            characters: Vec::new(),
            lemmas: Vec::new(),
        });
        window.lemmas.push(token.lemma.as_str());
        if let Some(character) = token.character {
            if !window.characters.contains(&character) {
                window.characters.push(character);
            }
        }
    }
    windows
        .into_values()
        .filter(|window| window.characters.len() >= 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: CharacterId = CharacterId(0);
    const B: CharacterId = CharacterId(1);

    fn two_sentence_stream() -> Vec<Token> {
        vec![
            Token::mention(A, "Elizabeth", 0, 0),
            Token::plain("smile", 0, 0),
            Token::mention(B, "Darcy", 0, 0),
            Token::mention(A, "she", 1, 0),
            Token::plain("walk", 1, 0),
            Token::plain("alone", 2, 1),
        ]
    }

    #[test]
    fn groups_by_sentence_and_skips_small_windows() {
        let tokens = two_sentence_stream();
        let windows: Vec<_> = group_windows(&tokens, GroupingStrategy::Sentence).collect();
        // Sentences 1 and 2 have fewer than two characters.
        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].id, 0);
        assert_eq!(windows[0].characters, vec![A, B]);
        assert_eq!(windows[0].lemmas, vec!["Elizabeth", "smile", "Darcy"]);
    }

    #[test]
    fn paragraph_strategy_widens_the_window() {
        let tokens = two_sentence_stream();
        let windows: Vec<_> = group_windows(&tokens, GroupingStrategy::Paragraph).collect();
        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].id, 0);
        // Paragraph 0 spans sentences 0 and 1.
        assert_eq!(windows[0].lemmas.len(), 5);
    }

    #[test]
    fn duplicate_mentions_collapse_to_one_entry() {
        let tokens = vec![
            Token::mention(A, "Elizabeth", 7, 2),
            Token::mention(A, "she", 7, 2),
            Token::mention(A, "her", 7, 2),
            Token::mention(B, "Jane", 7, 2),
        ];
        let windows: Vec<_> = group_windows(&tokens, GroupingStrategy::Sentence).collect();
        assert_eq!(windows[0].characters, vec![A, B]);
    }

    #[test]
    fn windows_ascend_by_id() {
        let mut tokens = Vec::new();
        for sentence in [9, 3, 6] {
            tokens.push(Token::mention(A, "a", sentence, 0));
            tokens.push(Token::mention(B, "b", sentence, 0));
        }
        let ids: Vec<u32> = group_windows(&tokens, GroupingStrategy::Sentence)
            .map(|w| w.id)
            .collect();
        assert_eq!(ids, vec![3, 6, 9]);
    }

    #[test]
    fn empty_stream_yields_no_windows() {
        let windows: Vec<_> = group_windows(&[], GroupingStrategy::Sentence).collect();
        assert!(windows.is_empty());
    }
}
