//! # stylint_core
//!
//! Orchestration core for the Stylint stylesheet linter.
//!
//! This crate provides:
//! - The `Linter` orchestrator
//! - Input resolution (inline code or glob patterns, ignore files)
//! - Concurrent batch linting over a pluggable `LintEngine`
//! - Report aggregation, formatters and needless-disable analysis
//! - `BasicEngine`, a small built-in engine for plain CSS
//!
//! ## Example
//!
//! ```rust,ignore
//! use stylint_core::{BasicEngine, Linter, LintOptions};
//!
//! let linter = Linter::new(BasicEngine::new());
//! let report = linter
//!     .lint(&LintOptions::new().files("src/**/*.css").formatter("string"))
//!     .await?;
//!
//! print!("{}", report.output);
//! ```

pub mod basic_engine;
pub mod batch;
pub mod engine;
mod error;
pub mod formatters;
pub mod ignore_file;
pub mod input;
mod linter;
pub mod needless;
mod options;
mod report;
mod result;

/// Source name reported for inline code without a filename.
pub const INLINE_SOURCE: &str = "<input css 1>";

pub use basic_engine::BasicEngine;
pub use batch::BatchExecutor;
pub use engine::{LintEngine, RawOutcome};
pub use error::{LinterError, SyntaxError};
pub use formatters::{BuiltinFormatter, Formatter};
pub use ignore_file::{DEFAULT_IGNORE_FILE, IgnoreMatcher};
pub use input::{DEFAULT_IGNORES, InputMode, InputResolver, LintInput};
pub use linter::Linter;
pub use needless::{NeedlessDisableReport, needless_disables};
pub use options::{EngineOptions, FilePatterns, FormatFn, FormatterOption, LintOptions};
pub use report::{Report, aggregate};
pub use result::{
    ALL_RULES, Deprecation, DisabledRange, InvalidOptionWarning, ResultRecord, Severity, Warning,
};
