//! Verbose text formatter: the string report plus a summary.

use super::string::format_string;
use crate::result::ResultRecord;

pub fn format_verbose(results: &[ResultRecord]) -> String {
    let mut output = format_string(results);
    if output.is_empty() {
        output.push('\n');
    }

    output.push_str(&format!(
        "{} {} checked\n",
        results.len(),
        plural(results.len(), "source", "sources")
    ));
    for result in results {
        output.push_str(&format!(" {}\n", result.source));
    }

    let warnings: Vec<_> = results.iter().flat_map(|r| &r.warnings).collect();
    output.push_str(&format!(
        "\n{} {} found\n",
        warnings.len(),
        plural(warnings.len(), "problem", "problems")
    ));

    // Grouped in first-seen order.
    let mut by_severity: Vec<(&str, Vec<(&str, usize)>, usize)> = Vec::new();
    for warning in warnings {
        let severity = warning.severity.as_str();
        let index = match by_severity.iter().position(|(s, _, _)| *s == severity) {
            Some(index) => index,
            None => {
                by_severity.push((severity, Vec::new(), 0));
                by_severity.len() - 1
            }
        };

        let (_, rules, total) = &mut by_severity[index];
        *total += 1;
        match rules.iter_mut().find(|(rule, _)| *rule == warning.rule_id) {
            Some((_, count)) => *count += 1,
            None => rules.push((warning.rule_id.as_str(), 1)),
        }
    }

    for (severity, rules, total) in by_severity {
        output.push_str(&format!(" severity level \"{}\": {}\n", severity, total));
        for (rule, count) in rules {
            output.push_str(&format!("  {}: {}\n", rule, count));
        }
    }

    output.push('\n');
    output
}

fn plural<'a>(n: usize, one: &'a str, many: &'a str) -> &'a str {
    if n == 1 { one } else { many }
}
