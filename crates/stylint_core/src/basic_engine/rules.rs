//! Rule configuration for the basic engine.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::LinterError;
use crate::options::EngineOptions;
use crate::result::Severity;

pub const BLOCK_NO_EMPTY: &str = "block-no-empty";
pub const COLOR_NO_INVALID_HEX: &str = "color-no-invalid-hex";

/// Rules the basic engine knows.
pub const RULE_NAMES: &[&str] = &[BLOCK_NO_EMPTY, COLOR_NO_INVALID_HEX];

/// Setting for a single rule.
///
/// `true` and `"error"` enable at error, `"warning"` at warning; `false`,
/// `null` and `"off"` disable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RuleSetting {
    Off,
    On(Severity),
}

impl RuleSetting {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(true) => Some(Self::On(Severity::Error)),
            Value::Bool(false) | Value::Null => Some(Self::Off),
            Value::String(s) => match s.as_str() {
                "error" => Some(Self::On(Severity::Error)),
                "warning" => Some(Self::On(Severity::Warning)),
                "off" => Some(Self::Off),
                _ => None,
            },
            _ => None,
        }
    }
}

/// Enabled rules and their severities.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    severities: BTreeMap<String, Severity>,
}

impl RuleSet {
    /// Every known rule at `severity`.
    pub fn all(severity: Severity) -> Self {
        Self {
            severities: RULE_NAMES
                .iter()
                .map(|name| (name.to_string(), severity))
                .collect(),
        }
    }

    /// Resolves the rules from the engine options.
    ///
    /// Returns the rule set together with the texts of the invalid-option
    /// warnings raised along the way.
    pub fn from_options(options: &EngineOptions) -> Result<(Self, Vec<String>), LinterError> {
        let mut rules = match &options.config {
            Some(config) => rules_object(config, "config")?,
            None => RULE_NAMES
                .iter()
                .map(|name| (name.to_string(), Value::Bool(true)))
                .collect(),
        };

        if let Some(overrides) = &options.config_overrides {
            rules.extend(rules_object(overrides, "configOverrides")?);
        }

        let mut set = Self::default();
        let mut invalid = Vec::new();

        for (name, value) in &rules {
            if !RULE_NAMES.contains(&name.as_str()) {
                invalid.push(format!("Unknown rule \"{}\"", name));
                continue;
            }

            match RuleSetting::from_value(value) {
                Some(RuleSetting::On(severity)) => {
                    set.severities.insert(name.clone(), severity);
                }
                Some(RuleSetting::Off) => {}
                None => invalid.push(format!(
                    "Invalid option value {} for rule \"{}\"",
                    value, name
                )),
            }
        }

        Ok((set, invalid))
    }

    /// Severity of `rule`, or `None` if it is off.
    pub fn severity(&self, rule: &str) -> Option<Severity> {
        self.severities.get(rule).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.severities.is_empty()
    }
}

fn rules_object(config: &Value, label: &str) -> Result<Map<String, Value>, LinterError> {
    let Some(config) = config.as_object() else {
        return Err(LinterError::config(format!("`{}` must be an object", label)));
    };

    match config.get("rules") {
        None => Ok(Map::new()),
        Some(Value::Object(rules)) => Ok(rules.clone()),
        Some(_) => Err(LinterError::config(format!(
            "`rules` in `{}` must be an object",
            label
        ))),
    }
}
