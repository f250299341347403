// Mailsort: email topic classification by embedding similarity
//
// This is the library root. Each module corresponds to one stage of the
// classification pipeline: features in, scores and a predicted topic out,
// with two small stores holding the topics and labelled emails.

pub mod config;
pub mod error;
pub mod features;
pub mod models;
pub mod output;
pub mod pipeline;
pub mod scoring;
pub mod store;
