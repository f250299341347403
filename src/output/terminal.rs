// Colored terminal output for classification results and pipeline info.
//
// This module handles all terminal-specific formatting. The main.rs
// subcommands delegate here when `--json` isn't requested.

use colored::Colorize;

use crate::features::{FeatureValue, GeneratorInfo};
use crate::models::{ClassificationResult, MutationOutcome, PipelineInfo, Strategy, TopicRecord};
use crate::scoring::ScoreMap;

/// How many stored emails to list under the email strategy.
const MAX_EMAIL_ROWS: usize = 10;

/// Display a classification result.
pub fn display_classification(result: &ClassificationResult, requested: Strategy) {
    println!(
        "\n{} {}",
        "Predicted topic:".bold(),
        result.predicted_topic.green().bold()
    );

    if requested != result.strategy_used {
        println!(
            "  {}",
            format!(
                "No stored emails yet: fell back from {requested} to {} strategy",
                result.strategy_used
            )
            .yellow()
        );
    } else {
        println!("  Strategy: {}", result.strategy_used);
    }

    println!("\n{}", "=== Topic Scores ===".bold());
    display_score_rows(&result.topic_scores, Some(result.predicted_topic.as_str()), 32);

    if let Some(email_scores) = &result.email_scores {
        println!(
            "\n{}",
            format!("=== Stored Email Scores ({} emails) ===", email_scores.len()).bold()
        );

        // Highest first; stable sort keeps corpus order among ties
        let mut ranked: Vec<(&String, &f64)> = email_scores.iter().collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(a.1).unwrap_or(std::cmp::Ordering::Equal));

        for (body, score) in ranked.into_iter().take(MAX_EMAIL_ROWS) {
            let preview = super::truncate_chars(&super::single_line(body), 48);
            let marker = if result.matched_email.as_deref() == Some(body.as_str()) {
                "*".green().bold().to_string()
            } else {
                " ".to_string()
            };
            println!(
                "  {marker} {} {}",
                padded(&preview, 52).dimmed(),
                colorize_score(*score)
            );
        }
    }

    println!("\n{}", "=== Features ===".bold());
    for (name, value) in &result.features {
        println!("  {} {}", padded(name, 40).dimmed(), format_feature(value));
    }
    println!();
}

/// Display the outcome of add-topic / store-email.
pub fn display_outcome(outcome: MutationOutcome) {
    if outcome.is_added() {
        println!("{}", outcome.message().green());
    } else {
        println!("{}", outcome.message().yellow());
    }
}

/// Display topic names with a one-line description preview.
pub fn display_topics(topics: &[TopicRecord]) {
    if topics.is_empty() {
        println!("No topics yet. Run `mailsort add-topic` to create one.");
        return;
    }
    for topic in topics {
        println!(
            "  {} {}",
            padded(&topic.name, 24).bold(),
            super::truncate_chars(&super::single_line(&topic.description), 60).dimmed()
        );
    }
}

/// Display topics with their descriptions.
pub fn display_pipeline_info(info: &PipelineInfo) {
    println!(
        "\n{}",
        format!("=== Topics ({}) ===", info.available_topics.len()).bold()
    );
    if info.topics_with_descriptions.is_empty() {
        println!("  none");
    }
    for (topic, description) in &info.topics_with_descriptions {
        println!(
            "  {} {} {}",
            padded(topic, 24).bold(),
            super::truncate_chars(description, 80),
            format!("({} chars)", description.chars().count()).dimmed()
        );
    }
    println!();
}

/// Display the registered feature generators.
pub fn display_generators(generators: &[GeneratorInfo]) {
    println!(
        "\n{}",
        format!("=== Feature Generators ({}) ===", generators.len()).bold()
    );
    for generator in generators {
        println!(
            "  {} {}",
            padded(&generator.name, 20).bold(),
            generator.features.join(", ").dimmed()
        );
    }
    println!();
}

fn display_score_rows(scores: &ScoreMap, highlight: Option<&str>, width: usize) {
    if scores.is_empty() {
        println!("  none");
        return;
    }
    for (key, score) in scores {
        println!(
            "  {} {}",
            score_label(key, highlight == Some(key.as_str()), width),
            colorize_score(*score)
        );
    }
}

/// Left-align `text` in `width` columns. Pad before colorizing: escape codes
/// would otherwise count toward the width.
fn padded(text: &str, width: usize) -> String {
    format!("{text:<width$}")
}

fn score_label(key: &str, highlighted: bool, width: usize) -> String {
    let label = padded(key, width);
    if highlighted {
        label.green().bold().to_string()
    } else {
        label
    }
}

fn format_feature(value: &FeatureValue) -> String {
    match value {
        FeatureValue::Flag(b) => b.to_string(),
        FeatureValue::Integer(n) => n.to_string(),
        FeatureValue::Number(x) => format!("{x:.3}"),
        FeatureValue::Text(s) => format!("\"{}\"", super::truncate_chars(&super::single_line(s), 60)),
        FeatureValue::Terms(terms) => format!("[{}]", terms.join(", ")),
    }
}

/// Colorize a similarity score.
fn colorize_score(score: f64) -> colored::ColoredString {
    let text = format!("{score:.4}");
    if score >= 0.8 {
        text.green()
    } else if score >= 0.4 {
        text.yellow()
    } else {
        text.dimmed()
    }
}
