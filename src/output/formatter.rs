use std::io::IsTerminal;

use owo_colors::OwoColorize;

use crate::engine::BatchResults;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a score in compact notation (1.5k, 2.3M, 847, 9.4)
pub fn format_score(score: f64) -> String {
    let formatted = if score >= 1_000_000.0 {
        format!("{:.1}M", score / 1_000_000.0)
    } else if score >= 1_000.0 {
        format!("{:.1}k", score / 1_000.0)
    } else if score == score.trunc() {
        format!("{:.0}", score)
    } else {
        format!("{:.3}", score)
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    };

    // Trim trailing .0 (e.g., "1.0k" -> "1k")
    formatted.replace(".0M", "M").replace(".0k", "k")
}

/// Format batch results as a table with columns: Index, Entity, Score.
/// Scored entities come first, highest score on top; failed entities follow
/// with their failure reason. No headers, one row per entity.
pub fn format_batch_table(results: &BatchResults, use_colors: bool) -> String {
    if results.is_empty() {
        return "No entities to score.".to_string();
    }

    let mut scored: Vec<(&str, f64)> = Vec::new();
    let mut failed: Vec<(&str, String)> = Vec::new();
    for (entity_id, outcome) in results {
        match outcome {
            Ok(score) => scored.push((entity_id, *score)),
            Err(e) => failed.push((entity_id, e.to_string())),
        }
    }
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let entity_width = results.keys().map(|id| id.len()).max().unwrap_or(0);

    let mut lines = Vec::with_capacity(results.len());
    for (idx, (entity_id, score)) in scored.iter().enumerate() {
        let index_str = format!("{:>2}.", idx + 1);
        // Pad before styling so ANSI codes don't skew the column width
        let entity_padded = format!("{:<entity_width$}", entity_id);
        let score_str = format_score(*score);
        if use_colors {
            lines.push(format!(
                "{} {}  {}",
                index_str,
                entity_padded.bold(),
                score_str.cyan(),
            ));
        } else {
            lines.push(format!("{} {}  {}", index_str, entity_padded, score_str));
        }
    }
    for (entity_id, reason) in &failed {
        let entity_padded = format!("{:<entity_width$}", entity_id);
        if use_colors {
            lines.push(format!("  ! {}  {}", entity_padded.bold(), reason.red()));
        } else {
            lines.push(format!("  ! {}  {}", entity_padded, reason));
        }
    }

    lines.join("\n")
}
