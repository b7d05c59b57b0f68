//! SARIF (Static Analysis Results Interchange Format) output formatter.
//!
//! Implements SARIF 2.1.0 format for integration with GitHub Advanced Security
//! and other CI/CD tools.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::result::{ResultRecord, Severity, Warning};

/// SARIF version constant
const SARIF_VERSION: &str = "2.1.0";

/// Tool information for SARIF
const TOOL_NAME: &str = "stylint";

/// Generates SARIF output from result records
pub fn generate_sarif(results: &[ResultRecord]) -> Result<String, serde_json::Error> {
    let sarif_log = SarifLog::from_results(results);
    serde_json::to_string_pretty(&sarif_log)
}

/// Root SARIF log structure
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifLog {
    #[serde(rename = "$schema")]
    schema: String,
    version: String,
    runs: Vec<Run>,
}

impl SarifLog {
    fn from_results(results: &[ResultRecord]) -> Self {
        Self {
            schema: "https://raw.githubusercontent.com/oasis-tcs/sarif-spec/master/Schemata/sarif-schema-2.1.0.json".to_string(),
            version: SARIF_VERSION.to_string(),
            runs: vec![Run::from_results(results)],
        }
    }
}

/// A single run of the tool
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct Run {
    tool: Tool,
    results: Vec<SarifResult>,
}

impl Run {
    fn from_results(records: &[ResultRecord]) -> Self {
        let mut results = Vec::new();
        // Sorted by rule id for stable output.
        let mut rules: BTreeMap<String, ReportingDescriptor> = BTreeMap::new();

        for record in records {
            for warning in &record.warnings {
                results.push(SarifResult::from_warning(warning, &record.source));
                rules
                    .entry(warning.rule_id.clone())
                    .or_insert_with(|| ReportingDescriptor::new(&warning.rule_id));
            }
        }

        Self {
            tool: Tool {
                driver: ToolComponent {
                    name: TOOL_NAME.to_string(),
                    version: option_env!("CARGO_PKG_VERSION").map(|s| s.to_string()),
                    rules: rules.into_values().collect(),
                },
            },
            results,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct Tool {
    driver: ToolComponent,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct ToolComponent {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    rules: Vec<ReportingDescriptor>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReportingDescriptor {
    id: String,
    name: String,
}

impl ReportingDescriptor {
    fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            name: id.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct Message {
    text: String,
}

/// A single result (warning)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifResult {
    rule_id: String,
    level: String,
    message: Message,
    locations: Vec<Location>,
}

impl SarifResult {
    fn from_warning(warning: &Warning, source: &str) -> Self {
        let level = match warning.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };

        Self {
            rule_id: warning.rule_id.clone(),
            level: level.to_string(),
            message: Message {
                text: warning.message.clone(),
            },
            locations: vec![Location {
                physical_location: PhysicalLocation {
                    artifact_location: ArtifactLocation {
                        uri: source.to_string(),
                    },
                    region: Region {
                        start_line: warning.line,
                        start_column: warning.column,
                    },
                },
            }],
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct Location {
    physical_location: PhysicalLocation,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct PhysicalLocation {
    artifact_location: ArtifactLocation,
    region: Region,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct ArtifactLocation {
    uri: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct Region {
    start_line: u32,
    start_column: u32,
}
