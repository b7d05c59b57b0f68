//! Invocation options.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize};

use crate::result::ResultRecord;

/// Formatter function supplied by the caller.
pub type FormatFn = Arc<dyn Fn(&[ResultRecord]) -> String + Send + Sync>;

/// Options for one lint invocation.
///
/// Exactly one of `files` and `code` must be set.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LintOptions {
    /// Glob pattern(s) selecting the files to lint.
    pub files: Option<FilePatterns>,
    /// Inline source to lint.
    pub code: Option<String>,
    /// Display filename for inline source.
    pub code_filename: Option<PathBuf>,
    /// Ignore file path. Default: `.stylintignore` in the working directory.
    pub ignore_path: Option<PathBuf>,
    /// Skips the built-in `node_modules`/`bower_components` exclusions.
    pub disable_default_ignores: bool,
    /// Extra ignore rules applied after the ignore file's rules.
    pub ignore_pattern: Vec<String>,
    /// Formatter used to render the report. Default: `json`.
    pub formatter: FormatterOption,
    /// Attaches the needless-disable analysis to the report.
    pub report_needless_disables: bool,
    /// Upper bound on inputs linted at once. Default: unbounded.
    pub max_concurrency: Option<usize>,
    /// Options passed through to the engine untouched.
    #[serde(flatten)]
    pub engine: EngineOptions,
}

impl LintOptions {
    /// Creates options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the file pattern(s).
    pub fn files(mut self, files: impl Into<FilePatterns>) -> Self {
        self.files = Some(files.into());
        self
    }

    /// Sets inline source code.
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Sets the display filename for inline source code.
    pub fn code_filename(mut self, filename: impl Into<PathBuf>) -> Self {
        self.code_filename = Some(filename.into());
        self
    }

    /// Sets the ignore file path.
    pub fn ignore_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.ignore_path = Some(path.into());
        self
    }

    /// Enables or disables the built-in exclusions.
    pub fn disable_default_ignores(mut self, yes: bool) -> Self {
        self.disable_default_ignores = yes;
        self
    }

    /// Adds an extra ignore rule.
    pub fn ignore_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.ignore_pattern.push(pattern.into());
        self
    }

    /// Selects a built-in formatter by name.
    pub fn formatter(mut self, name: impl Into<String>) -> Self {
        self.formatter = FormatterOption::Named(name.into());
        self
    }

    /// Uses a caller-supplied formatter.
    pub fn custom_formatter(
        mut self,
        f: impl Fn(&[ResultRecord]) -> String + Send + Sync + 'static,
    ) -> Self {
        self.formatter = FormatterOption::Custom(Arc::new(f));
        self
    }

    /// Enables or disables the needless-disable analysis.
    pub fn report_needless_disables(mut self, yes: bool) -> Self {
        self.report_needless_disables = yes;
        self
    }

    /// Bounds the number of inputs linted at once.
    pub fn max_concurrency(mut self, n: usize) -> Self {
        self.max_concurrency = Some(n);
        self
    }

    /// Sets the engine configuration object.
    pub fn config(mut self, config: serde_json::Value) -> Self {
        self.engine.config = Some(config);
        self
    }

    /// Sets configuration overrides merged over the engine configuration.
    pub fn config_overrides(mut self, overrides: serde_json::Value) -> Self {
        self.engine.config_overrides = Some(overrides);
        self
    }

    /// Makes the engine ignore disable comments.
    pub fn ignore_disables(mut self, yes: bool) -> Self {
        self.engine.ignore_disables = yes;
        self
    }

    /// Sets the source syntax.
    pub fn syntax(mut self, syntax: impl Into<String>) -> Self {
        self.engine.syntax = Some(syntax.into());
        self
    }
}

/// One pattern or a list of patterns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilePatterns {
    One(String),
    Many(Vec<String>),
}

impl FilePatterns {
    /// Normalizes to a list of patterns.
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            FilePatterns::One(pattern) => vec![pattern.clone()],
            FilePatterns::Many(patterns) => patterns.clone(),
        }
    }
}

impl From<&str> for FilePatterns {
    fn from(pattern: &str) -> Self {
        Self::One(pattern.to_string())
    }
}

impl From<String> for FilePatterns {
    fn from(pattern: String) -> Self {
        Self::One(pattern)
    }
}

impl From<Vec<String>> for FilePatterns {
    fn from(patterns: Vec<String>) -> Self {
        Self::Many(patterns)
    }
}

impl From<&[&str]> for FilePatterns {
    fn from(patterns: &[&str]) -> Self {
        Self::Many(patterns.iter().map(|p| p.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for FilePatterns {
    fn from(patterns: [&str; N]) -> Self {
        Self::Many(patterns.iter().map(|p| p.to_string()).collect())
    }
}

/// Formatter selection: a built-in name or a caller-supplied function.
#[derive(Clone)]
pub enum FormatterOption {
    Named(String),
    Custom(FormatFn),
}

impl Default for FormatterOption {
    fn default() -> Self {
        Self::Named("json".to_string())
    }
}

impl fmt::Debug for FormatterOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.debug_tuple("Named").field(name).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl<'de> Deserialize<'de> for FormatterOption {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::Named)
    }
}

/// Options consumed only by the lint engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineOptions {
    /// Configuration object. Takes precedence over `config_file`.
    pub config: Option<serde_json::Value>,
    /// Path the configuration was loaded from.
    pub config_file: Option<PathBuf>,
    /// Directory relative paths in the configuration resolve against.
    pub config_basedir: Option<PathBuf>,
    /// Merged over the configuration.
    pub config_overrides: Option<serde_json::Value>,
    /// Report warnings even where disable comments suppress them.
    pub ignore_disables: bool,
    /// Source syntax name.
    pub syntax: Option<String>,
    /// Custom syntax module name.
    pub custom_syntax: Option<String>,
}
