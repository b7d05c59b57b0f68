//! Integration tests for linting a fixture project
//!
//! Runs the built `stylint` binary against `fixtures/project`, which carries
//! a JSONC config, an ignore file and files under a default-ignored directory.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

fn project_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/project")
}

fn stylint_cmd() -> Command {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let target_dir = std::env::var_os("CARGO_TARGET_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            manifest_dir
                .parent()
                .and_then(|p| p.parent())
                .expect("Failed to find workspace root")
                .join("target")
        });
    let mut cmd = Command::new(target_dir.join("debug/stylint"));
    cmd.current_dir(project_dir());
    cmd
}

fn lint_json(args: &[&str]) -> serde_json::Value {
    let output = stylint_cmd()
        .args(args)
        .args(["--config", "stylint.jsonc", "--formatter", "json"])
        .output()
        .expect("Failed to run stylint");
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

fn sources(results: &serde_json::Value) -> Vec<String> {
    results
        .as_array()
        .expect("results array")
        .iter()
        .map(|r| r["source"].as_str().unwrap_or_default().to_string())
        .collect()
}

mod discovery {
    use super::*;

    #[test]
    fn skips_ignore_file_entries_and_dependency_directories() {
        let results = lint_json(&["**/*.css"]);
        assert_eq!(sources(&results), vec!["src/main.css", "src/theme.css"]);
    }

    #[test]
    fn disable_default_ignores_includes_dependency_directories() {
        let results = lint_json(&["**/*.css", "--disable-default-ignores"]);
        assert_eq!(
            sources(&results),
            vec!["bower_components/pkg/dep.css", "src/main.css", "src/theme.css"]
        );
    }

    #[test]
    fn custom_ignore_path_replaces_the_default_file() {
        let results = lint_json(&["**/*.css", "--ignore-path", "../empty-ignore"]);
        assert_eq!(
            sources(&results),
            vec!["legacy/old.css", "src/main.css", "src/theme.css"]
        );
        assert_eq!(results[0]["errored"], true);
        assert_eq!(results[0]["warnings"][0]["rule"], "CssSyntaxError");
    }

    #[test]
    fn negated_patterns_exclude_matches() {
        let results = lint_json(&["src/*.css", "!src/theme.css"]);
        assert_eq!(sources(&results), vec!["src/main.css"]);
    }
}

mod configuration {
    use super::*;

    #[test]
    fn config_sets_rule_severities() {
        let results = lint_json(&["src/theme.css"]);
        let warnings = results[0]["warnings"].as_array().unwrap();

        assert_eq!(warnings.len(), 2);
        assert_eq!(warnings[0]["rule"], "block-no-empty");
        assert_eq!(warnings[0]["severity"], "warning");
        assert_eq!(warnings[1]["rule"], "color-no-invalid-hex");
        assert_eq!(warnings[1]["severity"], "error");
        assert_eq!(warnings[1]["line"], 4);
    }

    #[test]
    fn disable_comments_suppress_warnings() {
        let results = lint_json(&["src/main.css"]);
        assert_eq!(results[0]["warnings"], serde_json::json!([]));
        assert_eq!(results[0]["errored"], false);
    }

    #[test]
    fn ignore_disables_reports_suppressed_warnings() {
        let results = lint_json(&["src/main.css", "--ignore-disables"]);
        assert_eq!(results[0]["warnings"][0]["rule"], "color-no-invalid-hex");
        assert_eq!(results[0]["warnings"][0]["line"], 2);
    }

    #[test]
    fn exits_two_when_any_file_errors() {
        stylint_cmd()
            .args(["src/*.css", "--config", "stylint.jsonc"])
            .assert()
            .code(2);

        stylint_cmd()
            .args(["src/main.css", "--config", "stylint.jsonc"])
            .assert()
            .code(0);
    }

    #[test]
    fn missing_config_is_fatal() {
        stylint_cmd()
            .args(["src/*.css", "--config", "missing.jsonc"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("missing.jsonc"));
    }
}

mod reporting {
    use super::*;

    #[test]
    fn reports_needless_disables() {
        stylint_cmd()
            .args(["src/*.css", "--config", "stylint.jsonc", "--report-needless-disables"])
            .assert()
            .code(2)
            .stdout(predicate::str::contains(
                "src/theme.css\nunused rule: block-no-empty, start line: 6, end line: 6",
            ))
            .stdout(predicate::str::contains("unused rule: color-no-invalid-hex").not());
    }

    #[test]
    fn verbose_formatter_prints_summary() {
        stylint_cmd()
            .args(["src/*.css", "--config", "stylint.jsonc", "-f", "verbose"])
            .assert()
            .code(2)
            .stdout(predicate::str::contains("2 sources checked"))
            .stdout(predicate::str::contains("severity level \"error\": 1"))
            .stdout(predicate::str::contains("severity level \"warning\": 1"));
    }

    #[test]
    fn sarif_formatter_emits_one_result_per_warning() {
        let output = stylint_cmd()
            .args(["src/*.css", "--config", "stylint.jsonc", "-f", "sarif"])
            .output()
            .expect("Failed to run stylint");
        let sarif: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

        assert_eq!(sarif["version"], "2.1.0");
        assert_eq!(sarif["runs"][0]["results"].as_array().unwrap().len(), 2);
        assert_eq!(
            sarif["runs"][0]["results"][0]["locations"][0]["physicalLocation"]["artifactLocation"]["uri"],
            "src/theme.css"
        );
    }
}
