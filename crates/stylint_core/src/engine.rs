//! Lint engine contract.
//!
//! The engine evaluates rules against one input. The core only drives it:
//! it never inspects source text itself.

use std::future::Future;

use crate::LinterError;
use crate::input::LintInput;
use crate::result::{DisabledRange, Deprecation, InvalidOptionWarning, Warning};

/// Evaluates lint rules against a single input.
///
/// Implementations return [`LinterError::Syntax`] for inputs that cannot be
/// parsed; the batch executor reports those as errored records. Any other
/// error aborts the whole batch.
pub trait LintEngine {
    fn lint(&self, input: &LintInput) -> impl Future<Output = Result<RawOutcome, LinterError>>;
}

/// Engine-specific outcome for one input, before normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawOutcome {
    /// Display path of the input.
    pub source: String,
    /// Reported warnings, after disable comments were applied.
    pub warnings: Vec<Warning>,
    pub deprecations: Vec<Deprecation>,
    pub invalid_option_warnings: Vec<InvalidOptionWarning>,
    /// Disable comments seen in the input.
    pub disabled_ranges: Vec<DisabledRange>,
    /// Warnings suppressed by disable comments.
    pub disabled_warnings: Vec<Warning>,
    /// Set when the engine failed the input regardless of warnings.
    pub failed: bool,
}

impl RawOutcome {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            ..Self::default()
        }
    }

    pub fn with_warning(mut self, warning: Warning) -> Self {
        self.warnings.push(warning);
        self
    }

    pub fn with_deprecation(mut self, deprecation: Deprecation) -> Self {
        self.deprecations.push(deprecation);
        self
    }

    pub fn with_invalid_option(mut self, text: impl Into<String>) -> Self {
        self.invalid_option_warnings
            .push(InvalidOptionWarning { text: text.into() });
        self
    }

    pub fn with_disabled_range(mut self, range: DisabledRange) -> Self {
        self.disabled_ranges.push(range);
        self
    }

    pub fn with_disabled_warning(mut self, warning: Warning) -> Self {
        self.disabled_warnings.push(warning);
        self
    }

    /// Marks the input as failed.
    pub fn failed(mut self) -> Self {
        self.failed = true;
        self
    }
}
