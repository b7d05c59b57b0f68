//! Human-readable text formatter.

use std::collections::HashSet;

use crate::result::{ResultRecord, Severity, Warning};

/// Renders invalid options, deprecations, then one section per source with
/// warnings. Returns an empty string when there is nothing to report.
pub fn format_string(results: &[ResultRecord]) -> String {
    let mut output = String::new();
    output.push_str(&format_invalid_options(results));
    output.push_str(&format_deprecations(results));

    for result in results {
        output.push_str(&format_source(&result.warnings, &result.source));
    }

    let trimmed = output.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("\n{}\n\n", trimmed)
    }
}

fn format_invalid_options(results: &[ResultRecord]) -> String {
    let mut seen = HashSet::new();
    let mut output = String::new();

    for warning in results.iter().flat_map(|r| &r.invalid_option_warnings) {
        if seen.insert(warning.text.as_str()) {
            output.push_str(&format!("Invalid Option: {}\n", warning.text));
        }
    }

    output
}

fn format_deprecations(results: &[ResultRecord]) -> String {
    let mut seen = HashSet::new();
    let mut output = String::new();

    for deprecation in results.iter().flat_map(|r| &r.deprecations) {
        if !seen.insert(deprecation.text.as_str()) {
            continue;
        }
        output.push_str(&format!("Deprecation Warning: {}", deprecation.text));
        if let Some(reference) = &deprecation.reference {
            output.push_str(&format!(" See: {}", reference));
        }
        output.push('\n');
    }

    output
}

fn format_source(warnings: &[Warning], source: &str) -> String {
    if warnings.is_empty() {
        return String::new();
    }

    let mut ordered: Vec<&Warning> = warnings.iter().collect();
    ordered.sort_by_key(|w| (w.line, w.column));

    let rows: Vec<(String, &str, String, &str)> = ordered
        .iter()
        .map(|w| {
            let symbol = match w.severity {
                Severity::Error => "✖",
                Severity::Warning => "⚠",
            };
            (
                format!("{}:{}", w.line, w.column),
                symbol,
                strip_rule_suffix(&w.message, &w.rule_id),
                w.rule_id.as_str(),
            )
        })
        .collect();

    let position_width = rows.iter().map(|r| r.0.chars().count()).max().unwrap_or(0);
    let text_width = rows.iter().map(|r| r.2.chars().count()).max().unwrap_or(0);

    let mut output = format!("\n{}\n", source);
    for (position, symbol, text, rule) in rows {
        let line = format!(
            "  {:<pw$}  {}  {:<tw$}  {}",
            position,
            symbol,
            text,
            rule,
            pw = position_width,
            tw = text_width
        );
        output.push_str(line.trim_end());
        output.push('\n');
    }

    output
}

/// Drops a trailing ` (rule)` from a message; the rule is its own column.
fn strip_rule_suffix(message: &str, rule_id: &str) -> String {
    let suffix = format!("({})", rule_id);
    message
        .strip_suffix(&suffix)
        .unwrap_or(message)
        .trim_end()
        .to_string()
}
