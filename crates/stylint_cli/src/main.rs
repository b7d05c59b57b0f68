//! Stylint CLI
//!
//! Stylesheet linter front end.

mod cli;
mod config;
mod output;

use std::io::Read;
use std::process::ExitCode;

use clap::Parser;
use miette::{IntoDiagnostic, Result};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use stylint_core::{BasicEngine, BuiltinFormatter, InputMode, Linter, LintOptions};

use crate::cli::Cli;
use crate::config::load_config;
use crate::output::print_report;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(false) => ExitCode::SUCCESS,
        Ok(true) => ExitCode::from(2),
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(1)
        }
    }
}

/// Lints and prints the report. Returns whether the report is errored.
fn run(cli: &Cli) -> Result<bool> {
    let options = build_options(cli)?;
    let engine = BasicEngine::from_options(&options.engine).into_diagnostic()?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .into_diagnostic()?;

    let linter = Linter::new(engine);
    let report = runtime
        .block_on(linter.lint(&options))
        .into_diagnostic()?;

    print_report(&report);
    Ok(report.errored)
}

/// Builds the lint options. Invalid formatter names and input modes are
/// rejected before stdin or the config file is read.
fn build_options(cli: &Cli) -> Result<LintOptions> {
    let formatter = BuiltinFormatter::from_name(&cli.formatter).into_diagnostic()?;

    let mut options = LintOptions::new()
        .formatter(formatter.name())
        .disable_default_ignores(cli.disable_default_ignores)
        .report_needless_disables(cli.report_needless_disables)
        .ignore_disables(cli.ignore_disables);

    if !cli.files.is_empty() {
        options = options.files(cli.files.clone());
    }

    if cli.stdin {
        options = options.code(String::new());
    }
    InputMode::from_options(&options).into_diagnostic()?;

    if cli.stdin {
        let mut code = String::new();
        std::io::stdin()
            .read_to_string(&mut code)
            .into_diagnostic()?;
        debug!("Read {} bytes from stdin", code.len());
        options = options.code(code);
    }

    if let Some(filename) = &cli.stdin_filename {
        options = options.code_filename(filename);
    }
    if let Some(path) = &cli.ignore_path {
        options = options.ignore_path(path);
    }
    for pattern in &cli.ignore_patterns {
        options = options.ignore_pattern(pattern.as_str());
    }
    if let Some(n) = cli.max_concurrency {
        options = options.max_concurrency(n);
    }
    if let Some(syntax) = &cli.syntax {
        options = options.syntax(syntax.as_str());
    }

    if let Some(path) = &cli.config {
        options = options.config(load_config(path)?);
        options.engine.config_file = Some(path.clone());
    }
    options.engine.config_basedir = cli.config_basedir.clone();
    options.engine.custom_syntax = cli.custom_syntax.clone();

    Ok(options)
}
