//! CLI argument definitions

use std::path::PathBuf;

use clap::Parser;

/// Stylint - stylesheet linter
#[derive(Debug, Parser)]
#[command(name = "stylint")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// File glob patterns to lint
    #[arg(value_name = "FILES")]
    pub files: Vec<String>,

    /// Read the code to lint from standard input
    #[arg(long)]
    pub stdin: bool,

    /// Filename reported for code read from standard input
    #[arg(long, value_name = "PATH", requires = "stdin")]
    pub stdin_filename: Option<PathBuf>,

    /// Configuration file path (JSON or JSONC)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory relative paths in the configuration resolve against
    #[arg(long, value_name = "PATH")]
    pub config_basedir: Option<PathBuf>,

    /// Ignore file path (default: .stylintignore)
    #[arg(long, value_name = "PATH")]
    pub ignore_path: Option<PathBuf>,

    /// Additional ignore pattern, in ignore file syntax
    #[arg(long = "ignore-pattern", value_name = "PATTERN")]
    pub ignore_patterns: Vec<String>,

    /// Lint files under node_modules and bower_components too
    #[arg(long)]
    pub disable_default_ignores: bool,

    /// Output formatter (json, string, verbose, sarif)
    #[arg(short, long, default_value = "string")]
    pub formatter: String,

    /// Report disable comments that suppressed nothing
    #[arg(long)]
    pub report_needless_disables: bool,

    /// Ignore disable comments
    #[arg(long)]
    pub ignore_disables: bool,

    /// Source syntax
    #[arg(long)]
    pub syntax: Option<String>,

    /// Custom syntax module
    #[arg(long)]
    pub custom_syntax: Option<String>,

    /// Maximum number of files linted at once
    #[arg(long, value_name = "N")]
    pub max_concurrency: Option<usize>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
