//! A small built-in lint engine for plain CSS.
//!
//! Ships two rules, `block-no-empty` and `color-no-invalid-hex`, and honors
//! `stylint-*` disable comments. Structural errors are reported as
//! `CssSyntaxError`.

mod disables;
mod rules;
mod scanner;

use tracing::debug;

pub use rules::{BLOCK_NO_EMPTY, COLOR_NO_INVALID_HEX, RULE_NAMES, RuleSet};
pub use scanner::SYNTAX_ERROR_NAME;

use crate::LinterError;
use crate::engine::{LintEngine, RawOutcome};
use crate::input::LintInput;
use crate::options::EngineOptions;
use crate::result::{Deprecation, Severity, Warning};

/// Syntax understood by the engine.
const CSS_SYNTAX: &str = "css";

/// Reference [`LintEngine`] for plain CSS.
#[derive(Debug, Clone)]
pub struct BasicEngine {
    rules: RuleSet,
    invalid_options: Vec<String>,
    deprecations: Vec<Deprecation>,
    ignore_disables: bool,
}

impl Default for BasicEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl BasicEngine {
    /// Creates an engine with every rule at error severity.
    pub fn new() -> Self {
        Self {
            rules: RuleSet::all(Severity::Error),
            invalid_options: Vec::new(),
            deprecations: Vec::new(),
            ignore_disables: false,
        }
    }

    /// Creates an engine from the pass-through engine options.
    ///
    /// Fails if a syntax other than CSS is requested.
    pub fn from_options(options: &EngineOptions) -> Result<Self, LinterError> {
        if let Some(custom) = &options.custom_syntax {
            return Err(LinterError::config(format!(
                "Custom syntax '{}' is not supported; only CSS can be linted",
                custom
            )));
        }

        let mut deprecations = Vec::new();
        match options.syntax.as_deref() {
            None => {}
            Some(CSS_SYNTAX) => deprecations.push(Deprecation {
                text: "'syntax' option is deprecated; CSS is always assumed".to_string(),
                reference: None,
            }),
            Some(other) => {
                return Err(LinterError::config(format!(
                    "Unsupported syntax '{}'; only '{}' can be linted",
                    other, CSS_SYNTAX
                )));
            }
        }

        let (rules, invalid_options) = RuleSet::from_options(options)?;
        debug!(
            "Basic engine configured ({} invalid options, ignore disables: {})",
            invalid_options.len(),
            options.ignore_disables
        );

        Ok(Self {
            rules,
            invalid_options,
            deprecations,
            ignore_disables: options.ignore_disables,
        })
    }

    /// Lints `code` and reports it under `source`.
    ///
    /// `named` attaches `source` to syntax errors; anonymous inline code
    /// leaves the file unset.
    pub fn check(&self, code: &str, source: &str, named: bool) -> Result<RawOutcome, LinterError> {
        let scan = scanner::scan(code).map_err(|e| if named { e.with_file(source) } else { e })?;

        let mut warnings = Vec::new();
        if let Some(severity) = self.rules.severity(BLOCK_NO_EMPTY) {
            warnings.extend(scan.empty_blocks.iter().map(|pos| {
                Warning::new(
                    BLOCK_NO_EMPTY,
                    format!("Unexpected empty block ({})", BLOCK_NO_EMPTY),
                    pos.line,
                    pos.column,
                )
                .with_severity(severity)
            }));
        }
        if let Some(severity) = self.rules.severity(COLOR_NO_INVALID_HEX) {
            warnings.extend(
                scan.hex_tokens
                    .iter()
                    .filter(|token| !is_valid_hex(&token.value))
                    .map(|token| {
                        Warning::new(
                            COLOR_NO_INVALID_HEX,
                            format!(
                                "Unexpected invalid hex color \"{}\" ({})",
                                token.value, COLOR_NO_INVALID_HEX
                            ),
                            token.position.line,
                            token.position.column,
                        )
                        .with_severity(severity)
                    }),
            );
        }
        warnings.sort_by_key(|w| (w.line, w.column));

        let ranges = if self.ignore_disables {
            Vec::new()
        } else {
            disables::disabled_ranges(&scan.comments)
        };

        let (disabled_warnings, warnings): (Vec<Warning>, Vec<Warning>) = warnings
            .into_iter()
            .partition(|w| ranges.iter().any(|r| r.covers(&w.rule_id, w.line)));

        debug!(
            "{}: {} warnings, {} suppressed",
            source,
            warnings.len(),
            disabled_warnings.len()
        );

        let mut outcome = RawOutcome::new(source);
        outcome.warnings = warnings;
        outcome.disabled_warnings = disabled_warnings;
        outcome.disabled_ranges = ranges;
        outcome.deprecations = self.deprecations.clone();
        for text in &self.invalid_options {
            outcome = outcome.with_invalid_option(text.as_str());
        }

        Ok(outcome)
    }
}

impl LintEngine for BasicEngine {
    async fn lint(&self, input: &LintInput) -> Result<RawOutcome, LinterError> {
        let source = input.display_name();

        match input {
            LintInput::Inline { code, filename } => self.check(code, &source, filename.is_some()),
            LintInput::File { path, .. } => {
                let code = tokio::fs::read_to_string(path).await.map_err(|e| {
                    LinterError::file(format!("Failed to read {}: {}", path.display(), e))
                })?;
                self.check(&code, &source, true)
            }
        }
    }
}

fn is_valid_hex(value: &str) -> bool {
    let digits = value.trim_start_matches('#');
    matches!(digits.len(), 3 | 4 | 6 | 8) && digits.chars().all(|c| c.is_ascii_hexdigit())
}
