//! Input resolution.
//!
//! Turns the invocation options into the concrete list of inputs to lint:
//! one inline snippet, or every file matched by the glob patterns that
//! survives the default exclusions and the ignore file.

use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

use globset::{Glob, GlobBuilder, GlobMatcher, GlobSet, GlobSetBuilder};
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::ignore_file::IgnoreMatcher;
use crate::options::LintOptions;
use crate::{INLINE_SOURCE, LinterError};

/// Globs excluded from every file-mode run unless default ignores are disabled.
pub const DEFAULT_IGNORES: &[&str] = &["**/node_modules/**", "**/bower_components/**"];

/// A single thing to lint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LintInput {
    /// Literal source text.
    Inline {
        code: String,
        /// Absolute display filename, if one was given.
        filename: Option<PathBuf>,
    },
    /// A file on disk.
    File {
        /// Absolute path used for reading.
        path: PathBuf,
        /// Working-directory-relative path used for reporting.
        display: String,
    },
}

impl LintInput {
    /// Name used as the `source` of the input's result.
    pub fn display_name(&self) -> String {
        match self {
            LintInput::Inline {
                filename: Some(filename),
                ..
            } => filename.to_string_lossy().to_string(),
            LintInput::Inline { filename: None, .. } => INLINE_SOURCE.to_string(),
            LintInput::File { display, .. } => display.clone(),
        }
    }
}

/// Which kind of input an invocation lints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode<'a> {
    Inline {
        code: &'a str,
        filename: Option<&'a Path>,
    },
    Files(Vec<String>),
}

impl<'a> InputMode<'a> {
    /// Picks the input mode, rejecting option sets with both or neither of
    /// `code` and `files`.
    pub fn from_options(options: &'a LintOptions) -> Result<Self, LinterError> {
        match (&options.code, &options.files) {
            (Some(code), None) => Ok(Self::Inline {
                code,
                filename: options.code_filename.as_deref(),
            }),
            (None, Some(files)) => Ok(Self::Files(files.to_vec())),
            _ => Err(LinterError::config(
                "You must pass a `files` glob or a `code` string, though not both",
            )),
        }
    }
}

/// Resolves inputs relative to a working directory.
#[derive(Debug, Clone)]
pub struct InputResolver {
    cwd: PathBuf,
    default_ignores: Vec<String>,
}

impl InputResolver {
    /// Creates a resolver using [`DEFAULT_IGNORES`].
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            default_ignores: DEFAULT_IGNORES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Replaces the default exclusion globs.
    pub fn with_default_ignores(mut self, ignores: Vec<String>) -> Self {
        self.default_ignores = ignores;
        self
    }

    /// Builds the single input for inline mode.
    pub fn resolve_inline(&self, code: &str, filename: Option<&Path>) -> LintInput {
        LintInput::Inline {
            code: code.to_string(),
            filename: filename.map(|f| self.cwd.join(f)),
        }
    }

    /// Expands the patterns and builds one input per surviving file.
    ///
    /// The default exclusions are appended as negated globs unless
    /// `disable_default_ignores` is set.
    pub fn resolve_files(
        &self,
        patterns: &[String],
        disable_default_ignores: bool,
        matcher: &IgnoreMatcher,
    ) -> Result<Vec<LintInput>, LinterError> {
        let mut patterns = patterns.to_vec();
        if !disable_default_ignores {
            patterns.extend(self.default_ignores.iter().map(|glob| format!("!{}", glob)));
        }

        let matched = expand_patterns(&patterns, &self.cwd)?;
        debug!("Patterns matched {} files", matched.len());

        let relative: Vec<PathBuf> = matched
            .into_iter()
            .map(|path| match path.strip_prefix(&self.cwd) {
                Ok(rel) => rel.to_path_buf(),
                Err(_) => path,
            })
            .collect();

        let inputs: Vec<LintInput> = matcher
            .filter(relative)
            .into_iter()
            .map(|rel| LintInput::File {
                path: self.cwd.join(&rel),
                display: rel.to_string_lossy().to_string(),
            })
            .collect();

        info!("Discovered {} files to lint", inputs.len());
        Ok(inputs)
    }
}

/// Expands glob patterns against the filesystem.
///
/// A pattern prefixed with `!` excludes matches of the positive patterns
/// listed before it. Each positive pattern contributes its matches in
/// lexical order; a path matched by several patterns is kept at its first
/// position. Relative patterns yield paths relative to `cwd`, absolute
/// patterns yield absolute paths. Symlinked files and directories are followed.
pub fn expand_patterns(patterns: &[String], cwd: &Path) -> Result<Vec<PathBuf>, LinterError> {
    let patterns: Vec<String> = patterns.iter().map(|p| normalize_pattern(p)).collect();

    let mut seen = HashSet::new();
    let mut files = Vec::new();

    for (position, pattern) in patterns.iter().enumerate() {
        if pattern.starts_with('!') {
            continue;
        }

        let later_negations = patterns[position + 1..]
            .iter()
            .filter_map(|p| p.strip_prefix('!'));
        let exclude = build_globset(later_negations)?;
        let matcher = compile_glob(pattern)?;
        let absolute = Path::new(pattern).has_root();
        let base = cwd.join(static_prefix(pattern));

        if !base.exists() {
            debug!("Pattern '{}' has no existing base directory", pattern);
            continue;
        }

        for entry in WalkDir::new(&base)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            if !entry.file_type().is_file() {
                continue;
            }

            let candidate = if absolute {
                entry.path().to_path_buf()
            } else {
                match entry.path().strip_prefix(cwd) {
                    Ok(rel) => rel.to_path_buf(),
                    Err(_) => continue,
                }
            };

            if !matcher.is_match(&candidate) || exclude.is_match(&candidate) {
                continue;
            }

            if seen.insert(candidate.clone()) {
                files.push(candidate);
            }
        }
    }

    Ok(files)
}

fn normalize_pattern(pattern: &str) -> String {
    match pattern.strip_prefix('!') {
        Some(rest) => format!("!{}", rest.strip_prefix("./").unwrap_or(rest)),
        None => pattern.strip_prefix("./").unwrap_or(pattern).to_string(),
    }
}

fn glob(pattern: &str) -> Result<Glob, LinterError> {
    GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map_err(|e| LinterError::config(format!("Invalid pattern '{}': {}", pattern, e)))
}

fn compile_glob(pattern: &str) -> Result<GlobMatcher, LinterError> {
    Ok(glob(pattern)?.compile_matcher())
}

fn build_globset<'a>(patterns: impl Iterator<Item = &'a str>) -> Result<GlobSet, LinterError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(glob(pattern)?);
    }

    builder
        .build()
        .map_err(|e| LinterError::config(format!("Failed to build globset: {}", e)))
}

/// Leading path components free of glob metacharacters.
fn static_prefix(pattern: &str) -> PathBuf {
    let mut prefix = PathBuf::new();
    for component in Path::new(pattern).components() {
        if let Component::Normal(part) = component
            && part
                .to_string_lossy()
                .contains(['*', '?', '[', '{'])
        {
            break;
        }
        prefix.push(component);
    }
    prefix
}
