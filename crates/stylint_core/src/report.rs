//! Report aggregation.

use serde::Serialize;
use tracing::debug;

use crate::LinterError;
use crate::formatters::Formatter;
use crate::needless::{NeedlessDisableReport, needless_disables};
use crate::result::ResultRecord;

/// The outcome of one lint invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// True iff any record is errored.
    pub errored: bool,
    /// The formatter's rendering of `results`.
    pub output: String,
    /// One record per input, in input order.
    pub results: Vec<ResultRecord>,
    /// Present only when the analysis was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub needless_disables: Option<Vec<NeedlessDisableReport>>,
}

/// Folds the ordered records into a [`Report`].
pub fn aggregate(
    results: Vec<ResultRecord>,
    formatter: &Formatter,
    report_needless_disables: bool,
) -> Result<Report, LinterError> {
    let errored = results.iter().any(|r| r.errored);
    let output = formatter.format(&results)?;
    let needless_disables = report_needless_disables.then(|| needless_disables(&results));

    debug!(
        "Aggregated {} results (errored: {}, output: {} bytes)",
        results.len(),
        errored,
        output.len()
    );

    Ok(Report {
        errored,
        output,
        results,
        needless_disables,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::RawOutcome;
    use crate::formatters::BuiltinFormatter;
    use crate::result::{DisabledRange, Severity, Warning};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::sync::Arc;

    fn clean(source: &str) -> ResultRecord {
        ResultRecord::from_outcome(RawOutcome::new(source))
    }

    fn failing(source: &str) -> ResultRecord {
        ResultRecord::from_outcome(
            RawOutcome::new(source)
                .with_warning(Warning::new("block-no-empty", "Unexpected empty block", 1, 1)),
        )
    }

    fn json() -> Formatter {
        Formatter::Builtin(BuiltinFormatter::Json)
    }

    #[rstest]
    #[case(vec![], false)]
    #[case(vec![clean("a.css"), clean("b.css")], false)]
    #[case(vec![clean("a.css"), failing("b.css")], true)]
    #[case(vec![failing("a.css"), failing("b.css")], true)]
    fn test_errored_is_any_record_errored(#[case] results: Vec<ResultRecord>, #[case] expected: bool) {
        assert_eq!(aggregate(results, &json(), false).unwrap().errored, expected);
    }

    #[test]
    fn test_warning_severity_does_not_error_report() {
        let results = vec![ResultRecord::from_outcome(
            RawOutcome::new("a.css").with_warning(
                Warning::new("block-no-empty", "Unexpected empty block", 1, 1)
                    .with_severity(Severity::Warning),
            ),
        )];
        assert!(!aggregate(results, &json(), false).unwrap().errored);
    }

    #[test]
    fn test_output_comes_from_formatter() {
        let formatter = Formatter::Custom(Arc::new(|results: &[ResultRecord]| {
            results
                .iter()
                .map(|r| r.source.as_str())
                .collect::<Vec<_>>()
                .join(",")
        }));
        let report = aggregate(vec![clean("a.css"), clean("b.css")], &formatter, false).unwrap();

        assert_eq!(report.output, "a.css,b.css");
        assert_eq!(report.results.len(), 2);
    }

    #[test]
    fn test_needless_disables_absent_unless_requested() {
        let report = aggregate(vec![clean("a.css")], &json(), false).unwrap();
        assert!(report.needless_disables.is_none());

        let value = serde_json::to_value(&report).unwrap();
        assert!(value.get("needlessDisables").is_none());
    }

    #[test]
    fn test_needless_disables_present_when_requested() {
        let results = vec![ResultRecord::from_outcome(
            RawOutcome::new("a.css").with_disabled_range(DisabledRange::new("block-no-empty", 4, Some(4))),
        )];
        let report = aggregate(results, &json(), true).unwrap();

        let reports = report.needless_disables.as_ref().unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].ranges, vec![DisabledRange::new("block-no-empty", 4, Some(4))]);

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(
            value["needlessDisables"],
            serde_json::json!([{
                "source": "a.css",
                "ranges": [{ "rule": "block-no-empty", "start": 4, "end": 4 }]
            }])
        );
    }

    #[test]
    fn test_needless_disables_requested_on_clean_batch_is_empty_list() {
        let report = aggregate(vec![], &json(), true).unwrap();
        assert_eq!(report.needless_disables, Some(vec![]));
    }
}
