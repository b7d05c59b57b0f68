//! Needless disables text output

use stylint_core::NeedlessDisableReport;

/// Lists the needless ranges per source. Sources without any are skipped.
pub fn format_needless_disables(reports: &[NeedlessDisableReport]) -> String {
    let mut output = String::new();

    for report in reports.iter().filter(|r| !r.ranges.is_empty()) {
        output.push_str(&format!("\n{}\n", report.source));
        for range in &report.ranges {
            output.push_str(&format!(
                "unused rule: {}, start line: {}",
                range.rule, range.start
            ));
            if let Some(end) = range.end {
                output.push_str(&format!(", end line: {}", end));
            }
            output.push('\n');
        }
    }

    output
}
