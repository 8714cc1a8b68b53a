/// End-to-end properties of the aggregation pipeline on synthetic
/// token streams.
use charnet::core::extractor::NetworkExtractor;
use charnet::core::grouper::GroupingStrategy;
use charnet::core::sentiment::RonLexicon;
use charnet::schema::character::{CharacterRecord, Gender};
use charnet::schema::graph::SentimentScore;
use charnet::schema::token::{CharacterId, Token};

const A: CharacterId = CharacterId(0);
const B: CharacterId = CharacterId(1);
const C: CharacterId = CharacterId(2);

fn roster(size: usize) -> Vec<CharacterRecord> {
    (0..size)
        .map(|i| CharacterRecord {
            names: vec![format!("Character {}", i)],
            gender: Gender::Unknown,
            mention_count: 0,
        })
        .collect()
}

#[test]
fn pipeline_is_deterministic() {
    let tokens = vec![
        Token::mention(A, "a", 0, 0),
        Token::mention(B, "b", 0, 0),
        Token::mention(C, "c", 1, 0),
        Token::mention(A, "a", 1, 0),
        Token::mention(B, "b", 2, 1),
        Token::mention(C, "c", 2, 1),
    ];
    let roster = roster(3);
    let first = NetworkExtractor::new().extract(&tokens, &roster);
    let second = NetworkExtractor::new().extract(&tokens, &roster);
    assert_eq!(first, second);
}

#[test]
fn vertex_count_matches_roster_size() {
    for size in [0, 1, 5] {
        let network = NetworkExtractor::new().extract(&[], &roster(size));
        assert_eq!(network.vertices().len(), size);
    }
}

#[test]
fn vertex_ids_are_dense_and_ordered() {
    let network = NetworkExtractor::new().extract(&[], &roster(4));
    let ids: Vec<usize> = network.vertices().iter().map(|v| v.id.0).collect();
    assert_eq!(ids, vec![0, 1, 2, 3]);
}

#[test]
fn no_self_loops_and_no_parallel_edges() {
    // Three characters tangled across several windows, mentioned in
    // both orders.
    let tokens = vec![
        Token::mention(B, "b", 0, 0),
        Token::mention(A, "a", 0, 0),
        Token::mention(A, "a", 1, 0),
        Token::mention(B, "b", 1, 0),
        Token::mention(C, "c", 1, 0),
        Token::mention(C, "c", 2, 0),
        Token::mention(A, "a", 2, 0),
    ];
    let network = NetworkExtractor::new().extract(&tokens, &roster(3));
    for edge in network.edges() {
        assert!(edge.source < edge.target);
    }
    let mut pairs: Vec<_> = network.edges().iter().map(|e| e.endpoints()).collect();
    pairs.dedup();
    assert_eq!(pairs.len(), network.edges().len());
}

#[test]
fn single_window_triple_yields_each_pair_once() {
    let tokens = vec![
        Token::mention(A, "a", 0, 0),
        Token::mention(B, "b", 0, 0),
        Token::mention(C, "c", 0, 0),
    ];
    let network = NetworkExtractor::new().extract(&tokens, &roster(3));
    let summary: Vec<_> = network
        .edges()
        .iter()
        .map(|e| (e.source, e.target, e.weight))
        .collect();
    assert_eq!(summary, vec![(A, B, 1), (A, C, 1), (B, C, 1)]);
}

#[test]
fn repeated_mentions_in_one_window_count_once() {
    let tokens = vec![
        Token::mention(A, "a", 0, 0),
        Token::mention(A, "she", 0, 0),
        Token::mention(A, "her", 0, 0),
        Token::mention(B, "b", 0, 0),
    ];
    let network = NetworkExtractor::new().extract(&tokens, &roster(2));
    assert_eq!(network.edges().len(), 1);
    assert_eq!(network.edges()[0].weight, 1);
}

#[test]
fn sentiment_averages_over_contributing_windows() {
    let mut lexicon = RonLexicon::default();
    lexicon.insert("bright", vec![SentimentScore::new(0.5, 0.0, 0.5)]);
    lexicon.insert("bleak", vec![SentimentScore::new(0.1, 0.2, 0.7)]);

    let tokens = vec![
        Token::mention(A, "a", 0, 0),
        Token::mention(B, "b", 0, 0),
        Token::plain("bright", 0, 0),
        Token::mention(A, "a", 1, 0),
        Token::mention(B, "b", 1, 0),
        Token::plain("bleak", 1, 0),
    ];
    let network = NetworkExtractor::new()
        .sentiment(lexicon)
        .extract(&tokens, &roster(2));

    assert!(network.has_sentiment());
    assert_eq!(network.edges().len(), 1);
    let edge = &network.edges()[0];
    assert_eq!(edge.weight, 2);
    let sentiment = edge.sentiment.unwrap();
    assert!((sentiment.pos - 0.3).abs() < 1e-12);
    assert!((sentiment.neg - 0.1).abs() < 1e-12);
    assert!((sentiment.obj - 0.6).abs() < 1e-12);
}

#[test]
fn sentiment_off_leaves_edges_bare() {
    let tokens = vec![Token::mention(A, "a", 0, 0), Token::mention(B, "b", 0, 0)];
    let network = NetworkExtractor::new().extract(&tokens, &roster(2));
    assert!(!network.has_sentiment());
    assert!(network.edges()[0].sentiment.is_none());
}

#[test]
fn gender_stays_unknown_without_gendered_lemmas() {
    let tokens = vec![
        Token::mention(A, "walk", 0, 0),
        Token::mention(A, "garden", 1, 0),
    ];
    let network = NetworkExtractor::new().extract(&tokens, &roster(1));
    assert_eq!(network.vertices()[0].gender, Gender::Unknown);
}

#[test]
fn grouping_strategy_never_changes_the_vertex_set() {
    let tokens = vec![
        Token::mention(A, "he", 0, 0),
        Token::mention(B, "she", 1, 0),
        Token::mention(C, "c", 2, 1),
    ];
    let roster = roster(3);
    let by_sentence = NetworkExtractor::new().extract(&tokens, &roster);
    let by_paragraph = NetworkExtractor::new()
        .strategy(GroupingStrategy::Paragraph)
        .extract(&tokens, &roster);

    assert_eq!(by_sentence.vertices(), by_paragraph.vertices());
    // Edges do change: A and B only share a paragraph.
    assert!(by_sentence.edges().is_empty());
    assert_eq!(by_paragraph.edges().len(), 1);
}
