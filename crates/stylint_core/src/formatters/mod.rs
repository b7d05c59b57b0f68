//! Report formatters.
//!
//! A formatter turns the ordered result records into the report's `output`
//! string. Callers pick a built-in formatter by name or supply a function.

mod json;
mod sarif;
mod string;
mod verbose;

use std::fmt;

pub use json::format_json;
pub use sarif::generate_sarif;
pub use string::format_string;
pub use verbose::format_verbose;

use crate::LinterError;
use crate::options::{FormatFn, FormatterOption};
use crate::result::ResultRecord;

/// Formatters available by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinFormatter {
    Json,
    String,
    Verbose,
    Sarif,
}

impl BuiltinFormatter {
    /// Names accepted by [`BuiltinFormatter::from_name`].
    pub const NAMES: &'static [&'static str] = &["json", "string", "verbose", "sarif"];

    /// Looks up a built-in formatter.
    pub fn from_name(name: &str) -> Result<Self, LinterError> {
        match name {
            "json" => Ok(Self::Json),
            "string" => Ok(Self::String),
            "verbose" => Ok(Self::Verbose),
            "sarif" => Ok(Self::Sarif),
            _ => Err(LinterError::config(format!(
                "Unknown formatter '{}'. You must use a valid formatter option: {}, or a function",
                name,
                Self::NAMES
                    .iter()
                    .map(|n| format!("'{}'", n))
                    .collect::<Vec<_>>()
                    .join(", ")
            ))),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::String => "string",
            Self::Verbose => "verbose",
            Self::Sarif => "sarif",
        }
    }
}

/// A resolved formatter.
#[derive(Clone)]
pub enum Formatter {
    Builtin(BuiltinFormatter),
    Custom(FormatFn),
}

impl Formatter {
    /// Resolves the formatter option, failing on unknown names.
    pub fn resolve(option: &FormatterOption) -> Result<Self, LinterError> {
        match option {
            FormatterOption::Named(name) => BuiltinFormatter::from_name(name).map(Self::Builtin),
            FormatterOption::Custom(f) => Ok(Self::Custom(f.clone())),
        }
    }

    /// Renders the records.
    pub fn format(&self, results: &[ResultRecord]) -> Result<String, LinterError> {
        match self {
            Self::Builtin(BuiltinFormatter::Json) => format_json(results),
            Self::Builtin(BuiltinFormatter::String) => Ok(format_string(results)),
            Self::Builtin(BuiltinFormatter::Verbose) => Ok(format_verbose(results)),
            Self::Builtin(BuiltinFormatter::Sarif) => generate_sarif(results)
                .map_err(|e| LinterError::Internal(format!("Failed to render SARIF: {}", e))),
            Self::Custom(f) => Ok(f(results)),
        }
    }
}

impl fmt::Debug for Formatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin(builtin) => f.debug_tuple("Builtin").field(builtin).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::engine::RawOutcome;
    use crate::result::{Deprecation, ResultRecord, Severity, Warning};

    /// Two sources: one with an error and a warning, one clean.
    pub fn sample_results() -> Vec<ResultRecord> {
        vec![
            ResultRecord::from_outcome(
                RawOutcome::new("src/app.css")
                    .with_warning(
                        Warning::new("color-no-invalid-hex", "Unexpected invalid hex color \"#ff\" (color-no-invalid-hex)", 12, 10),
                    )
                    .with_warning(
                        Warning::new("block-no-empty", "Unexpected empty block (block-no-empty)", 3, 5)
                            .with_severity(Severity::Warning),
                    ),
            ),
            ResultRecord::from_outcome(RawOutcome::new("src/clean.css")),
        ]
    }

    pub fn with_notices() -> Vec<ResultRecord> {
        vec![ResultRecord::from_outcome(
            RawOutcome::new("a.css")
                .with_deprecation(Deprecation {
                    text: "'syntax' option is deprecated".to_string(),
                    reference: Some("https://example.com/syntax".to_string()),
                })
                .with_invalid_option("Invalid option value \"maybe\" for rule \"block-no-empty\""),
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::Arc;

    #[rstest]
    #[case("json", BuiltinFormatter::Json)]
    #[case("string", BuiltinFormatter::String)]
    #[case("verbose", BuiltinFormatter::Verbose)]
    #[case("sarif", BuiltinFormatter::Sarif)]
    fn test_builtin_names(#[case] name: &str, #[case] expected: BuiltinFormatter) {
        let formatter = BuiltinFormatter::from_name(name).unwrap();
        assert_eq!(formatter, expected);
        assert_eq!(formatter.name(), name);
    }

    #[test]
    fn test_unknown_name_lists_valid_names() {
        let err = BuiltinFormatter::from_name("not-a-real-formatter").unwrap_err();
        let message = err.to_string();
        assert!(matches!(err, LinterError::Config(_)));
        assert!(message.contains("not-a-real-formatter"));
        assert!(message.contains("'json', 'string', 'verbose', 'sarif'"));
    }

    #[test]
    fn test_resolve_custom() {
        let option = FormatterOption::Custom(Arc::new(|results: &[ResultRecord]| {
            format!("{} results", results.len())
        }));
        let formatter = Formatter::resolve(&option).unwrap();

        assert_eq!(
            formatter.format(&fixtures::sample_results()).unwrap(),
            "2 results"
        );
    }

    #[test]
    fn test_resolve_named_default_is_json() {
        let formatter = Formatter::resolve(&FormatterOption::default()).unwrap();
        assert!(matches!(
            formatter,
            Formatter::Builtin(BuiltinFormatter::Json)
        ));
    }
}
