// Unit tests for the similarity scoring engine.
//
// Tests isolated pure functions: similarity identity and decay, the worked
// billing example, score map shape, first-wins tie-breaking, and the
// monotonicity property over arbitrary embeddings.

use mailsort::features::{FeatureMap, FeatureValue};
use mailsort::models::{StoredEmail, TopicEntry};
use mailsort::scoring::{
    best_match, score_emails, score_topics, similarity, text_embedding, ScoreMap,
    EMBEDDING_FEATURE, SIMILARITY_SCALE,
};
use mailsort::store::Records;
use proptest::prelude::*;

fn features(embedding: f64) -> FeatureMap {
    FeatureMap::from([(
        EMBEDDING_FEATURE.to_string(),
        FeatureValue::Number(embedding),
    )])
}

fn topic(description: &str) -> TopicEntry {
    TopicEntry {
        description: description.to_string(),
    }
}

fn stored(topic: &str) -> StoredEmail {
    StoredEmail {
        topic: topic.to_string(),
        subject: String::new(),
    }
}

// ============================================================
// similarity: identity, decay, range
// ============================================================

#[test]
fn scale_is_fifty() {
    assert_eq!(SIMILARITY_SCALE, 50.0);
}

#[test]
fn text_embedding_counts_characters() {
    assert_eq!(text_embedding(""), 0.0);
    assert_eq!(text_embedding("invoice and payment issues"), 26.0);
    assert_eq!(text_embedding("naïve"), 5.0);
}

#[test]
fn similarity_is_symmetric() {
    assert_eq!(similarity(10.0, 70.0), similarity(70.0, 10.0));
}

// ============================================================
// score_topics: worked example
// ============================================================

#[test]
fn billing_exact_length_scores_one() {
    let description = "invoice and payment issues.";
    assert_eq!(description.chars().count(), 27);
    let topics = Records::from([("billing".to_string(), topic(description))]);

    let scores = score_topics(&features(27.0), &topics);
    assert_eq!(scores.len(), 1);
    assert_eq!(scores["billing"], 1.0);
}

#[test]
fn billing_fifty_chars_away_scores_inverse_e() {
    let topics = Records::from([("billing".to_string(), topic("invoice and payment issues."))]);

    let scores = score_topics(&features(77.0), &topics);
    let expected = (-1.0f64).exp();
    assert!(
        (scores["billing"] - expected).abs() < 1e-12,
        "Expected ~0.3679, got {}",
        scores["billing"]
    );
}

#[test]
fn score_topics_has_one_entry_per_topic_in_order() {
    let topics = Records::from([
        ("work".to_string(), topic("project updates and reports")),
        ("billing".to_string(), topic("invoices")),
        ("social".to_string(), topic("parties")),
    ]);
    let scores = score_topics(&features(12.0), &topics);
    let keys: Vec<&str> = scores.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["work", "billing", "social"]);
}

#[test]
fn missing_embedding_scores_against_zero() {
    let topics = Records::from([
        ("empty-ish".to_string(), topic("a")),
        ("long".to_string(), topic(&"x".repeat(100))),
    ]);
    let scores = score_topics(&FeatureMap::new(), &topics);
    assert!((scores["empty-ish"] - (-1.0f64 / 50.0).exp()).abs() < 1e-12);
    assert!((scores["long"] - (-2.0f64).exp()).abs() < 1e-12);
}

#[test]
fn score_emails_uses_body_length() {
    let corpus = Records::from([
        ("eleven char".to_string(), stored("a")),
        ("x".repeat(60), stored("b")),
    ]);
    let scores = score_emails(&features(11.0), &corpus);
    assert_eq!(scores["eleven char"], 1.0);
    assert!((scores[&"x".repeat(60)] - (-49.0f64 / 50.0).exp()).abs() < 1e-12);
}

#[test]
fn score_emails_empty_corpus_is_empty() {
    assert!(score_emails(&features(10.0), &Records::new()).is_empty());
}

// ============================================================
// best_match: tie-breaking
// ============================================================

#[test]
fn equal_length_descriptions_first_topic_wins() {
    let topics = Records::from([
        ("first".to_string(), topic("same length")),
        ("second".to_string(), topic("same-length")),
    ]);
    let scores = score_topics(&features(4.0), &topics);
    assert_eq!(best_match(&scores).map(|(k, _)| k), Some("first"));
}

#[test]
fn later_strictly_higher_score_wins() {
    let scores = ScoreMap::from([("a".to_string(), 0.2), ("b".to_string(), 0.7)]);
    assert_eq!(best_match(&scores), Some(("b", 0.7)));
}

// ============================================================
// Properties
// ============================================================

proptest! {
    #[test]
    fn similarity_of_equal_embeddings_is_one(x in -1.0e6f64..1.0e6) {
        prop_assert_eq!(similarity(x, x), 1.0);
    }

    #[test]
    fn similarity_in_unit_interval(q in -1.0e4f64..1.0e4, c in 0.0f64..1.0e4) {
        let s = similarity(q, c);
        prop_assert!(s > 0.0 && s <= 1.0);
    }

    #[test]
    fn similarity_non_increasing_in_distance(
        query in 0.0f64..500.0,
        near in 0.0f64..300.0,
        extra in 0.0f64..300.0,
    ) {
        // Two candidates on the same side of the query, one further away
        let closer = similarity(query, query + near);
        let farther = similarity(query, query + near + extra);
        prop_assert!(farther <= closer);
    }

    #[test]
    fn text_lengths_are_non_negative(text in ".{0,64}") {
        prop_assert!(text_embedding(&text) >= 0.0);
    }
}
