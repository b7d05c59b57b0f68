//! Needless disable analysis.
//!
//! A disable comment is needless when it suppressed nothing: no warning of
//! the disabled rule was reported inside its line span.

use serde::Serialize;

use crate::result::{DisabledRange, ResultRecord};

/// Needless disabled ranges found in one source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NeedlessDisableReport {
    pub source: String,
    pub ranges: Vec<DisabledRange>,
}

/// Computes one report per record, in record order.
///
/// Records without needless ranges still get a report with empty `ranges`.
pub fn needless_disables(results: &[ResultRecord]) -> Vec<NeedlessDisableReport> {
    results
        .iter()
        .map(|record| NeedlessDisableReport {
            source: record.source.clone(),
            ranges: record
                .disabled_ranges
                .iter()
                .filter(|range| {
                    !record
                        .disabled_warnings
                        .iter()
                        .any(|w| range.covers(&w.rule_id, w.line))
                })
                .cloned()
                .collect(),
        })
        .collect()
}
