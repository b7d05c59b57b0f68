//! Lint orchestration.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::LinterError;
use crate::batch::BatchExecutor;
use crate::engine::LintEngine;
use crate::formatters::Formatter;
use crate::ignore_file::IgnoreMatcher;
use crate::input::{InputMode, InputResolver, LintInput};
use crate::options::LintOptions;
use crate::report::{Report, aggregate};

/// Runs one lint invocation end to end.
///
/// Resolves the formatter, picks the input mode, resolves the inputs, lints
/// them with the engine and aggregates the records into a [`Report`].
/// Configuration errors surface before any filesystem or engine work.
pub struct Linter<E> {
    engine: E,
    cwd: PathBuf,
    default_ignores: Option<Vec<String>>,
}

impl<E: LintEngine> Linter<E> {
    /// Creates a linter rooted at the process working directory.
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            cwd: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            default_ignores: None,
        }
    }

    /// Sets the directory patterns and the ignore file resolve against.
    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = cwd.into();
        self
    }

    /// Replaces the built-in exclusion globs.
    pub fn with_default_ignores(mut self, ignores: Vec<String>) -> Self {
        self.default_ignores = Some(ignores);
        self
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Lints according to `options`.
    ///
    /// Resolves to a report, possibly errored, or rejects with the first
    /// fatal error. There is no partial result.
    pub async fn lint(&self, options: &LintOptions) -> Result<Report, LinterError> {
        let formatter = Formatter::resolve(&options.formatter)?;
        debug!("Using formatter {:?}", formatter);

        let mode = InputMode::from_options(options)?;
        let inputs = self.resolve_inputs(mode, options)?;
        info!("Linting {} inputs", inputs.len());

        let results = BatchExecutor::new()
            .with_max_concurrency(options.max_concurrency)
            .run(&inputs, &self.engine)
            .await?;

        let report = aggregate(results, &formatter, options.report_needless_disables)?;
        debug!("Lint finished (errored: {})", report.errored);
        Ok(report)
    }

    fn resolve_inputs(
        &self,
        mode: InputMode<'_>,
        options: &LintOptions,
    ) -> Result<Vec<LintInput>, LinterError> {
        let mut resolver = InputResolver::new(&self.cwd);
        if let Some(ignores) = &self.default_ignores {
            resolver = resolver.with_default_ignores(ignores.clone());
        }

        match mode {
            InputMode::Inline { code, filename } => {
                debug!("Inline mode");
                Ok(vec![resolver.resolve_inline(code, filename)])
            }
            InputMode::Files(patterns) => {
                debug!("File mode with {} patterns", patterns.len());
                let matcher = IgnoreMatcher::build(
                    options.ignore_path.as_deref(),
                    &options.ignore_pattern,
                    &self.cwd,
                )?;
                resolver.resolve_files(&patterns, options.disable_default_ignores, &matcher)
            }
        }
    }
}
