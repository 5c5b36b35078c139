//! Configuration types for api-lint.

use crate::types::Severity;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Top-level configuration for a lint run.
///
/// Severity-valued fields (`fail_on`, per-rule `severity`) are kept as raw
/// strings and parsed when the engine starts: an invalid value degrades to a
/// diagnostic and the default applies, instead of failing the whole config
/// parse.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Severity threshold for run failure (default: "must").
    #[serde(default)]
    pub fail_on: Option<String>,

    /// Per-rule configurations keyed by rule name.
    #[serde(default)]
    pub rules: HashMap<String, RuleConfig>,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Checks if a rule is enabled. Absent entries default to enabled.
    #[must_use]
    pub fn is_rule_enabled(&self, rule_name: &str) -> bool {
        self.rules
            .get(rule_name)
            .map_or(true, |c| c.enabled.unwrap_or(true))
    }

    /// Gets the raw severity override string for a rule.
    #[must_use]
    pub fn severity_override(&self, rule_name: &str) -> Option<&str> {
        self.rules.get(rule_name).and_then(|c| c.severity.as_deref())
    }

    /// The severity at or above which a run counts as failed.
    ///
    /// Falls back to [`Severity::Must`] when `fail_on` is absent or does not
    /// parse; the engine reports the invalid value as a diagnostic.
    #[must_use]
    pub fn fail_threshold(&self) -> Severity {
        self.fail_on
            .as_deref()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(Severity::Must)
    }
}

/// Per-rule configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Whether this rule is enabled.
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Severity override for this rule ("must", "should", "may", "hint").
    #[serde(default)]
    pub severity: Option<String>,

    /// Rule-specific options as key-value pairs.
    #[serde(flatten)]
    pub options: HashMap<String, toml::Value>,
}

impl RuleConfig {
    /// Gets a boolean option with a default value.
    #[must_use]
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.options
            .get(key)
            .and_then(toml::Value::as_bool)
            .unwrap_or(default)
    }

    /// Gets an integer option with a default value.
    #[must_use]
    pub fn get_int(&self, key: &str, default: i64) -> i64 {
        self.options
            .get(key)
            .and_then(toml::Value::as_integer)
            .unwrap_or(default)
    }

    /// Gets a string option with a default value.
    #[must_use]
    pub fn get_str<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.options
            .get(key)
            .and_then(|v| v.as_str())
            .unwrap_or(default)
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_enables_everything() {
        let config = Config::default();
        assert!(config.is_rule_enabled("avoid-trailing-slash"));
        assert!(config.severity_override("avoid-trailing-slash").is_none());
        assert_eq!(config.fail_threshold(), Severity::Must);
    }

    #[test]
    fn parses_rule_entries_with_options() {
        let toml = r#"
fail_on = "should"

[rules.every-second-path-level-parameter]
enabled = true
severity = "hint"
allow_trailing_action = false

[rules.limit-resource-count]
max_resources = 12
"#;
        let config = Config::parse(toml).expect("config parses");
        assert_eq!(config.fail_threshold(), Severity::Should);
        assert_eq!(
            config.severity_override("every-second-path-level-parameter"),
            Some("hint")
        );

        let rule = &config.rules["every-second-path-level-parameter"];
        assert!(!rule.get_bool("allow_trailing_action", true));
        assert_eq!(config.rules["limit-resource-count"].get_int("max_resources", 8), 12);
    }

    #[test]
    fn disabled_rule_is_reported_disabled() {
        let toml = r#"
[rules.avoid-trailing-slash]
enabled = false
"#;
        let config = Config::parse(toml).expect("config parses");
        assert!(!config.is_rule_enabled("avoid-trailing-slash"));
        assert!(config.is_rule_enabled("some-other-rule"));
    }

    #[test]
    fn invalid_fail_on_falls_back_to_must() {
        let config = Config {
            fail_on: Some("blocker".to_string()),
            rules: HashMap::new(),
        };
        assert_eq!(config.fail_threshold(), Severity::Must);
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let err = Config::parse("rules = nonsense").expect_err("must fail");
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
