//! Rule engine orchestrating lint execution over a document.

use crate::config::Config;
use crate::document::ApiDocument;
use crate::rule::{Rule, RuleBox};
use crate::types::{Diagnostic, LintReport, Severity, Violation};

use std::collections::{HashMap, HashSet};
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, info, warn};

/// Builder for configuring a [`RuleEngine`].
///
/// Rule registration order is significant: it is the secondary sort key of
/// the final report.
#[derive(Default)]
pub struct RuleEngineBuilder {
    rules: Vec<RuleBox>,
    config: Option<Config>,
}

impl RuleEngineBuilder {
    /// Creates a new builder with no rules and default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a rule.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Registers a boxed rule.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Registers several boxed rules, preserving their order.
    #[must_use]
    pub fn rules<I>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = RuleBox>,
    {
        self.rules.extend(rules);
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the engine.
    #[must_use]
    pub fn build(self) -> RuleEngine {
        RuleEngine {
            rules: self.rules,
            config: self.config.unwrap_or_default(),
        }
    }
}

/// Runs a registered rule set over immutable documents.
///
/// Rules execute sequentially in registration order; each rule only reads
/// the shared document, so results never depend on evaluation interleaving.
/// A faulting rule is isolated: it contributes zero violations and one
/// [`Diagnostic`], and the remaining rules still run.
pub struct RuleEngine {
    rules: Vec<RuleBox>,
    config: Config,
}

impl RuleEngine {
    /// Creates a new builder.
    #[must_use]
    pub fn builder() -> RuleEngineBuilder {
        RuleEngineBuilder::new()
    }

    /// Number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// The engine's configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Runs every enabled rule over the document and aggregates the report.
    ///
    /// Violations are deduplicated within each rule's output on
    /// `(title, severity, locations)` and ordered by severity, then rule
    /// registration order, then first location. Running twice on the same
    /// document and configuration yields an identical report.
    #[must_use]
    pub fn run(&self, doc: &ApiDocument) -> LintReport {
        info!(
            rules = self.rules.len(),
            paths = doc.paths.len(),
            "starting lint run"
        );

        let mut report = LintReport::new();
        report.diagnostics = self.validate_config();
        let overrides = self.severity_overrides();

        for rule in &self.rules {
            if !self.config.is_rule_enabled(rule.name()) {
                debug!(rule = rule.name(), "skipping disabled rule");
                continue;
            }

            match panic::catch_unwind(AssertUnwindSafe(|| rule.check(doc))) {
                Ok(mut violations) => {
                    if let Some(severity) = overrides.get(rule.name()) {
                        for violation in &mut violations {
                            violation.severity = *severity;
                        }
                    }
                    let mut violations = dedup_violations(violations);
                    violations.sort_by(|a, b| a.first_location().cmp(&b.first_location()));
                    debug!(rule = rule.name(), count = violations.len(), "rule evaluated");
                    report.violations.extend(violations);
                }
                Err(payload) => {
                    let message = panic_message(payload.as_ref());
                    warn!(rule = rule.name(), cause = %message, "rule faulted, isolating");
                    report
                        .diagnostics
                        .push(Diagnostic::rule_fault(rule.name(), message));
                }
            }
        }

        // Stable sort: registration order is preserved within a severity.
        report.violations.sort_by_key(|v| v.severity);

        info!(
            violations = report.violations.len(),
            diagnostics = report.diagnostics.len(),
            "lint run complete"
        );
        report
    }

    /// Validates configuration against the registered rule set.
    ///
    /// Unknown rule names, unparseable severity overrides, and an
    /// unparseable `fail_on` each yield one diagnostic; the run then
    /// proceeds with defaults for the offending entries.
    fn validate_config(&self) -> Vec<Diagnostic> {
        let known: HashSet<&str> = self.rules.iter().map(|r| r.name()).collect();
        let mut diagnostics = Vec::new();

        if let Some(raw) = self.config.fail_on.as_deref() {
            if raw.parse::<Severity>().is_err() {
                diagnostics.push(Diagnostic::config_invalid(format!(
                    "invalid fail_on severity '{raw}', using 'must'"
                )));
            }
        }

        let mut names: Vec<&String> = self.config.rules.keys().collect();
        names.sort();
        for name in names {
            if !known.contains(name.as_str()) {
                diagnostics.push(Diagnostic::config_invalid(format!(
                    "configuration references unknown rule '{name}'"
                )));
                continue;
            }
            if let Some(raw) = self.config.severity_override(name) {
                if raw.parse::<Severity>().is_err() {
                    diagnostics.push(
                        Diagnostic::config_invalid(format!(
                            "invalid severity override '{raw}', keeping rule default"
                        ))
                        .for_rule(name.clone()),
                    );
                }
            }
        }

        diagnostics
    }

    /// Resolves the valid severity overrides into a lookup table.
    fn severity_overrides(&self) -> HashMap<&str, Severity> {
        self.rules
            .iter()
            .filter_map(|rule| {
                self.config
                    .severity_override(rule.name())
                    .and_then(|raw| raw.parse().ok())
                    .map(|severity| (rule.name(), severity))
            })
            .collect()
    }
}

/// Drops exact duplicates from a single rule's output, preserving order.
fn dedup_violations(violations: Vec<Violation>) -> Vec<Violation> {
    let mut seen = HashSet::new();
    violations
        .into_iter()
        .filter(|v| seen.insert(v.dedup_key()))
        .collect()
}

/// Extracts a printable message from a panic payload.
fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "rule panicked".to_string()
    }
}
