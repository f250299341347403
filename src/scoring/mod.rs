// Similarity scoring: compares an email's embedding with topic descriptions
// and stored emails, and picks the best match.

pub mod similarity;
pub mod prediction;

pub use prediction::{
    predict_from_email_scores, predict_from_topic_scores, predict_similar_email, predict_topic,
    Prediction,
};
pub use similarity::{
    best_match, query_embedding, score_emails, score_topics, similarity, text_embedding,
    ScoreMap, EMBEDDING_FEATURE, SIMILARITY_SCALE,
};
