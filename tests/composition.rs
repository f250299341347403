// Composition tests: the full pipeline from raw email to classification.
//
// These tests exercise the data flow between modules:
//   Features -> Scores -> Prediction, plus store mutations in between
// using JSON stores in a temp directory, exactly as the binary does.

use mailsort::config::Config;
use mailsort::error::ClassifierError;
use mailsort::features::FeatureGeneratorFactory;
use mailsort::models::{Email, MutationOutcome, StoredEmail, Strategy, TopicEntry};
use mailsort::pipeline::{InferenceService, TopicPolicy};
use mailsort::scoring::{predict_topic, score_topics};
use mailsort::store::{EmailCorpus, MemoryStore, TopicStore};

fn service_in(dir: &std::path::Path) -> InferenceService {
    InferenceService::from_config(&Config::in_dir(dir)).unwrap()
}

fn seeded_service(dir: &std::path::Path) -> InferenceService {
    let svc = service_in(dir);
    svc.add_topic("billing", "invoice and payment issues").unwrap();
    svc.add_topic(
        "work",
        "Project updates, deadlines, meetings, and status reports from the team",
    )
    .unwrap();
    svc
}

// ============================================================
// Topic strategy
// ============================================================

#[test]
fn classify_reports_scores_for_every_topic() {
    let dir = tempfile::tempdir().unwrap();
    let svc = seeded_service(dir.path());

    let result = svc
        .classify(
            &Email::new("Invoice", "Your invoice is attached, payment due"),
            Strategy::Topic,
        )
        .unwrap();

    assert_eq!(result.available_topics, vec!["billing", "work"]);
    let keys: Vec<&String> = result.topic_scores.keys().collect();
    assert_eq!(keys, vec!["billing", "work"]);
    assert!(result.email_scores.is_none());
    assert!(result.matched_email.is_none());
    assert_eq!(result.strategy_used, Strategy::Topic);
    assert!(result
        .features
        .contains_key("email_embeddings_average_embedding"));
}

#[test]
fn email_matching_description_length_scores_one() {
    let dir = tempfile::tempdir().unwrap();
    let svc = seeded_service(dir.path());

    // Subject and body both 26 chars: embedding 26 == description length
    let body = "a".repeat(26);
    let result = svc
        .classify(&Email::new("b".repeat(26), body), Strategy::Topic)
        .unwrap();

    assert_eq!(result.predicted_topic, "billing");
    assert_eq!(result.topic_scores["billing"], 1.0);
}

#[test]
fn added_topic_is_immediately_scored() {
    let dir = tempfile::tempdir().unwrap();
    let svc = seeded_service(dir.path());
    let email = Email::new("Party", "Drinks on Friday at six, everyone welcome");

    let before = svc.classify(&email, Strategy::Topic).unwrap();
    assert_eq!(before.topic_scores.len(), 2);

    assert_eq!(
        svc.add_topic("social", "Events and parties").unwrap(),
        MutationOutcome::TopicAdded
    );
    let after = svc.classify(&email, Strategy::Topic).unwrap();
    assert_eq!(after.topic_scores.len(), 3);
    assert!(after.topic_scores.contains_key("social"));
    assert_eq!(after.available_topics.last().map(String::as_str), Some("social"));
}

#[test]
fn duplicate_topic_is_non_fatal_and_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let svc = seeded_service(dir.path());

    let outcome = svc.add_topic("billing", "completely different").unwrap();
    assert_eq!(outcome, MutationOutcome::TopicAlreadyExists);
    assert_eq!(outcome.message(), "Topic already exists");

    let info = svc.get_pipeline_info();
    assert_eq!(info.available_topics.len(), 2);
    assert_eq!(
        info.topics_with_descriptions["billing"],
        "invoice and payment issues"
    );
}

#[test]
fn empty_body_fails_classification_as_internal_error() {
    let dir = tempfile::tempdir().unwrap();
    let svc = seeded_service(dir.path());

    let err = svc
        .classify(&Email::new("Subject", ""), Strategy::Topic)
        .unwrap_err();
    assert!(matches!(err, ClassifierError::FeatureGeneration { .. }));
    assert!(err.is_internal());
}

// ============================================================
// Email strategy
// ============================================================

#[test]
fn empty_corpus_falls_back_to_topic_prediction() {
    let dir = tempfile::tempdir().unwrap();
    let svc = seeded_service(dir.path());
    let email = Email::new("Invoice", "Your invoice is attached, payment due");

    let by_topic = svc.classify(&email, Strategy::Topic).unwrap();
    let by_email = svc.classify(&email, Strategy::Email).unwrap();

    assert_eq!(by_email.predicted_topic, by_topic.predicted_topic);
    assert_eq!(by_email.topic_scores, by_topic.topic_scores);
    assert_eq!(by_email.strategy_used, Strategy::Topic);
    assert_eq!(by_email.email_scores.as_ref().map(|s| s.len()), Some(0));

    // Same answer as calling topic prediction directly with the same features
    let topics = svc.topics().load();
    let direct = predict_topic(&by_email.features, &topics).unwrap();
    assert_eq!(direct.topic, by_email.predicted_topic);
    assert_eq!(score_topics(&by_email.features, &topics), by_email.topic_scores);
}

#[test]
fn nearest_stored_email_decides_topic() {
    let dir = tempfile::tempdir().unwrap();
    let svc = seeded_service(dir.path());

    svc.store_email("Lunch", "Pizza at noon?", "social").unwrap();
    let long_body = "The quarterly report draft is ready for review. Please add your \
                     section by Thursday so we can send it to leadership on Monday.";
    svc.store_email("Report", long_body, "work").unwrap();

    let result = svc
        .classify(
            &Email::new(
                "Draft ready",
                "The planning document draft is ready for your review. Please send \
                 comments by Wednesday so the team can finalise it before the offsite. \
                 I have attached the latest figures and the revised timeline for the \
                 second quarter.",
            ),
            Strategy::Email,
        )
        .unwrap();

    assert_eq!(result.strategy_used, Strategy::Email);
    assert_eq!(result.predicted_topic, "work");
    assert_eq!(result.matched_email.as_deref(), Some(long_body));
    let email_scores = result.email_scores.as_ref().unwrap();
    assert_eq!(email_scores.len(), 2);
    // Topic scores are still reported alongside
    assert_eq!(result.topic_scores.len(), 2);
}

#[test]
fn stored_email_overwrite_keeps_corpus_size() {
    let dir = tempfile::tempdir().unwrap();
    let svc = seeded_service(dir.path());

    assert_eq!(
        svc.store_email("A", "same body", "billing").unwrap(),
        MutationOutcome::EmailAdded
    );
    svc.store_email("B", "same body", "work").unwrap();
    assert_eq!(svc.corpus().len(), 1);
    assert_eq!(svc.corpus().list_emails()[0].topic, "work");

    svc.store_email("C", "another body", "work").unwrap();
    assert_eq!(svc.corpus().len(), 2);
}

// ============================================================
// Persistence across service instances
// ============================================================

#[test]
fn state_survives_a_new_service() {
    let dir = tempfile::tempdir().unwrap();
    {
        let svc = seeded_service(dir.path());
        svc.store_email("Hi", "hello world", "work").unwrap();
    }

    let svc = service_in(dir.path());
    assert_eq!(svc.get_pipeline_info().available_topics, vec!["billing", "work"]);
    assert_eq!(svc.corpus().len(), 1);
}

#[test]
fn strict_policy_with_memory_stores() {
    let svc = InferenceService::new(
        FeatureGeneratorFactory::default(),
        TopicStore::open(Box::new(MemoryStore::<TopicEntry>::new())).unwrap(),
        EmailCorpus::open(Box::new(MemoryStore::<StoredEmail>::new())).unwrap(),
        TopicPolicy::RequireKnownTopic,
    );
    let err = svc.store_email("Hi", "hello", "unknown").unwrap_err();
    assert!(matches!(err, ClassifierError::UnknownTopic(ref t) if t == "unknown"));
    assert!(!err.is_internal());
}

#[test]
fn classification_result_serializes() {
    let dir = tempfile::tempdir().unwrap();
    let svc = seeded_service(dir.path());
    let result = svc
        .classify(&Email::new("Invoice", "Payment overdue"), Strategy::Topic)
        .unwrap();

    let json = serde_json::to_value(&result).unwrap();
    assert!(json["predicted_topic"].is_string());
    assert!(json["topic_scores"]["billing"].is_f64());
    assert_eq!(json["strategy_used"], "topic");
    assert!(json.get("email_scores").is_none());
    assert_eq!(json["available_topics"], serde_json::json!(["billing", "work"]));
}
