//! Ignore file loading and path filtering.
//!
//! The ignore file uses `.gitignore` syntax. Rules are rooted at the working
//! directory, so paths are matched relative to it.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use tracing::debug;

use crate::LinterError;

/// Ignore file looked up when no path is given.
pub const DEFAULT_IGNORE_FILE: &str = ".stylintignore";

/// Excludes paths matched by the rules of an ignore file.
#[derive(Debug, Clone)]
pub struct IgnoreMatcher {
    root: PathBuf,
    gitignore: Gitignore,
}

impl IgnoreMatcher {
    /// Loads the ignore file at `ignore_path` (default `.stylintignore`) and
    /// appends `patterns` as extra rules.
    ///
    /// A relative path resolves against `cwd`. A missing file contributes no
    /// rules; any other read failure is returned as
    /// [`LinterError::IgnoreFile`].
    pub fn build(
        ignore_path: Option<&Path>,
        patterns: &[String],
        cwd: &Path,
    ) -> Result<Self, LinterError> {
        let path = cwd.join(ignore_path.unwrap_or(Path::new(DEFAULT_IGNORE_FILE)));

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No ignore file at {}", path.display());
                String::new()
            }
            Err(source) => return Err(LinterError::IgnoreFile { path, source }),
        };

        let lines = content.lines().chain(patterns.iter().map(String::as_str));
        Self::from_lines(lines, cwd)
    }

    /// Builds a matcher from ignore file content.
    pub fn from_content(content: &str, cwd: &Path) -> Result<Self, LinterError> {
        Self::from_lines(content.lines(), cwd)
    }

    fn from_lines<'a>(
        lines: impl IntoIterator<Item = &'a str>,
        cwd: &Path,
    ) -> Result<Self, LinterError> {
        let mut builder = GitignoreBuilder::new(cwd);
        for line in lines {
            builder.add_line(None, line).map_err(|e| {
                LinterError::config(format!("Invalid ignore pattern '{}': {}", line, e))
            })?;
        }

        let gitignore = builder
            .build()
            .map_err(|e| LinterError::config(format!("Failed to build ignore rules: {}", e)))?;

        debug!("Loaded {} ignore rules", gitignore.num_ignores());

        Ok(Self {
            root: cwd.to_path_buf(),
            gitignore,
        })
    }

    /// Creates a matcher that ignores nothing.
    pub fn empty(cwd: &Path) -> Self {
        Self {
            root: cwd.to_path_buf(),
            gitignore: Gitignore::empty(),
        }
    }

    /// Returns true if `path` or one of its parent directories is ignored.
    pub fn is_ignored(&self, path: &Path) -> bool {
        if path.has_root() && !path.starts_with(&self.root) {
            return self.gitignore.matched(path, false).is_ignore();
        }

        self.gitignore
            .matched_path_or_any_parents(path, false)
            .is_ignore()
    }

    /// Returns the paths that are not ignored, in their original order.
    pub fn filter(&self, paths: Vec<PathBuf>) -> Vec<PathBuf> {
        paths
            .into_iter()
            .filter(|path| !self.is_ignored(path))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use tempfile::tempdir;

    fn paths(items: &[&str]) -> Vec<PathBuf> {
        items.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn test_missing_ignore_file_filters_nothing() {
        let temp_dir = tempdir().unwrap();
        let matcher = IgnoreMatcher::build(None, &[], temp_dir.path()).unwrap();

        let input = paths(&["a.css", "b/c.css", "node_modules/x.css"]);
        assert_eq!(matcher.filter(input.clone()), input);
    }

    #[test]
    fn test_default_ignore_file_is_loaded() {
        let temp_dir = tempdir().unwrap();
        fs::write(temp_dir.path().join(".stylintignore"), "b.css\n").unwrap();

        let matcher = IgnoreMatcher::build(None, &[], temp_dir.path()).unwrap();
        assert_eq!(
            matcher.filter(paths(&["a.css", "b.css"])),
            paths(&["a.css"])
        );
    }

    #[test]
    fn test_custom_relative_ignore_path() {
        let temp_dir = tempdir().unwrap();
        fs::create_dir(temp_dir.path().join("conf")).unwrap();
        fs::write(temp_dir.path().join("conf/ignore"), "vendor/\n").unwrap();

        let matcher =
            IgnoreMatcher::build(Some(Path::new("conf/ignore")), &[], temp_dir.path()).unwrap();
        assert_eq!(
            matcher.filter(paths(&["vendor/lib.css", "src/app.css"])),
            paths(&["src/app.css"])
        );
    }

    #[test]
    fn test_unreadable_ignore_file_is_fatal() {
        let temp_dir = tempdir().unwrap();
        // A directory cannot be read as a file.
        fs::create_dir(temp_dir.path().join(".stylintignore")).unwrap();

        let result = IgnoreMatcher::build(None, &[], temp_dir.path());
        assert!(matches!(result, Err(LinterError::IgnoreFile { .. })));
    }

    #[test]
    fn test_extra_patterns_are_appended() {
        let temp_dir = tempdir().unwrap();
        fs::write(temp_dir.path().join(".stylintignore"), "a.css\n").unwrap();

        let matcher =
            IgnoreMatcher::build(None, &["c.css".to_string()], temp_dir.path()).unwrap();
        assert_eq!(
            matcher.filter(paths(&["a.css", "b.css", "c.css"])),
            paths(&["b.css"])
        );
    }

    #[test]
    fn test_crlf_line_endings() {
        let cwd = Path::new("/project");
        let matcher = IgnoreMatcher::from_content("a.css\r\nb.css\r\n", cwd).unwrap();

        assert_eq!(
            matcher.filter(paths(&["a.css", "b.css", "c.css"])),
            paths(&["c.css"])
        );
    }

    #[rstest]
    #[case("*.min.css", "dist/app.min.css", true)]
    #[case("*.min.css", "dist/app.css", false)]
    #[case("build/", "build/out/app.css", true)]
    #[case("/top.css", "top.css", true)]
    #[case("/top.css", "nested/top.css", false)]
    #[case("# comment", "# comment", false)]
    fn test_gitignore_semantics(#[case] rule: &str, #[case] path: &str, #[case] ignored: bool) {
        let matcher = IgnoreMatcher::from_content(rule, Path::new("/project")).unwrap();
        assert_eq!(matcher.is_ignored(Path::new(path)), ignored);
    }

    #[test]
    fn test_negation_reincludes() {
        let matcher =
            IgnoreMatcher::from_content("*.css\n!keep.css\n", Path::new("/project")).unwrap();
        assert_eq!(
            matcher.filter(paths(&["drop.css", "keep.css"])),
            paths(&["keep.css"])
        );
    }

    #[test]
    fn test_absolute_paths_under_root() {
        let matcher = IgnoreMatcher::from_content("b.css", Path::new("/project")).unwrap();
        assert!(matcher.is_ignored(Path::new("/project/b.css")));
        assert!(!matcher.is_ignored(Path::new("/elsewhere/a.css")));
    }

    #[test]
    fn test_empty_matcher() {
        let matcher = IgnoreMatcher::empty(Path::new("/project"));
        let input = paths(&["a.css", "node_modules/b.css"]);
        assert_eq!(matcher.filter(input.clone()), input);
    }
}
