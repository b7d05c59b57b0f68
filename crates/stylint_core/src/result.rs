//! Lint result types.

use serde::{Deserialize, Serialize};

use crate::INLINE_SOURCE;
use crate::engine::RawOutcome;
use crate::error::SyntaxError;

/// Rule name used by disable comments that apply to every rule.
pub const ALL_RULES: &str = "all";

/// Severity level for warnings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Error - fails the run.
    #[default]
    Error,
    /// Warning - reported but does not fail the run.
    Warning,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

/// A problem found in one input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Warning {
    /// 1-based line.
    pub line: u32,
    /// 1-based column.
    pub column: u32,
    /// The rule that produced this warning.
    #[serde(rename = "rule")]
    pub rule_id: String,
    /// Severity level.
    #[serde(default)]
    pub severity: Severity,
    /// The warning message.
    #[serde(rename = "text")]
    pub message: String,
}

impl Warning {
    /// Creates a new error-level warning.
    pub fn new(
        rule_id: impl Into<String>,
        message: impl Into<String>,
        line: u32,
        column: u32,
    ) -> Self {
        Self {
            line,
            column,
            rule_id: rule_id.into(),
            severity: Severity::Error,
            message: message.into(),
        }
    }

    /// Sets the severity level.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

/// A deprecation notice emitted by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deprecation {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

/// A notice about an invalid rule option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidOptionWarning {
    pub text: String,
}

/// A line range in which a disable comment was in effect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisabledRange {
    /// The disabled rule, or [`ALL_RULES`].
    pub rule: String,
    /// First disabled line.
    pub start: u32,
    /// Last disabled line; `None` runs to end of input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<u32>,
}

impl DisabledRange {
    pub fn new(rule: impl Into<String>, start: u32, end: Option<u32>) -> Self {
        Self {
            rule: rule.into(),
            start,
            end,
        }
    }

    /// Returns true if the range covers `line` for `rule_id`.
    pub fn covers(&self, rule_id: &str, line: u32) -> bool {
        (self.rule == ALL_RULES || self.rule == rule_id)
            && line >= self.start
            && self.end.is_none_or(|end| line <= end)
    }
}

/// Result of linting a single input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRecord {
    /// Display path, or `<input css 1>` for anonymous inline code.
    pub source: String,
    pub warnings: Vec<Warning>,
    pub deprecations: Vec<Deprecation>,
    pub invalid_option_warnings: Vec<InvalidOptionWarning>,
    /// True iff a warning has error severity or the engine failed the input.
    pub errored: bool,
    /// Disable comments seen while linting.
    #[serde(skip)]
    pub disabled_ranges: Vec<DisabledRange>,
    /// Warnings suppressed by disable comments.
    #[serde(skip)]
    pub disabled_warnings: Vec<Warning>,
}

impl ResultRecord {
    /// Normalizes an engine outcome into a result record.
    pub fn from_outcome(outcome: RawOutcome) -> Self {
        let errored = outcome.failed
            || outcome
                .warnings
                .iter()
                .any(|w| w.severity == Severity::Error);

        Self {
            source: outcome.source,
            warnings: outcome.warnings,
            deprecations: outcome.deprecations,
            invalid_option_warnings: outcome.invalid_option_warnings,
            errored,
            disabled_ranges: outcome.disabled_ranges,
            disabled_warnings: outcome.disabled_warnings,
        }
    }

    /// Builds the errored record reported in place of an unparsable input.
    pub fn from_syntax_error(error: SyntaxError) -> Self {
        let warning = Warning::new(
            error.name.clone(),
            format!("{} ({})", error.reason, error.name),
            error.line,
            error.column,
        );

        Self {
            source: error.file.unwrap_or_else(|| INLINE_SOURCE.to_string()),
            warnings: vec![warning],
            deprecations: Vec::new(),
            invalid_option_warnings: Vec::new(),
            errored: true,
            disabled_ranges: Vec::new(),
            disabled_warnings: Vec::new(),
        }
    }

    /// Returns the number of warnings with the given severity.
    pub fn count(&self, severity: Severity) -> usize {
        self.warnings
            .iter()
            .filter(|w| w.severity == severity)
            .count()
    }
}
