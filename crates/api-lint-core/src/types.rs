//! Core types for lint violations, diagnostics, and results.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Severity of a lint violation.
///
/// The four levels mirror RFC 2119 requirement keywords. Ordering is part of
/// the reporting contract: `Must` sorts before `Should`, `Should` before
/// `May`, `May` before `Hint`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Hard requirement; presence usually fails a build.
    Must,
    /// Strong recommendation.
    Should,
    /// Optional recommendation.
    May,
    /// Informational note.
    Hint,
}

impl Severity {
    /// All severities, most severe first.
    pub const ALL: [Self; 4] = [Self::Must, Self::Should, Self::May, Self::Hint];

    /// Explicit precedence table, 0 = most severe.
    ///
    /// The total order is defined here rather than by variant declaration
    /// order so the contract survives refactors of the enum.
    #[must_use]
    pub fn precedence(self) -> u8 {
        match self {
            Self::Must => 0,
            Self::Should => 1,
            Self::May => 2,
            Self::Hint => 3,
        }
    }

    /// Returns `true` if `self` is at least as severe as `threshold`.
    #[must_use]
    pub fn is_at_least(self, threshold: Self) -> bool {
        self.precedence() <= threshold.precedence()
    }
}

impl Ord for Severity {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.precedence().cmp(&other.precedence())
    }
}

impl PartialOrd for Severity {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Must => write!(f, "must"),
            Self::Should => write!(f, "should"),
            Self::May => write!(f, "may"),
            Self::Hint => write!(f, "hint"),
        }
    }
}

/// Error returned when parsing a severity from a string fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown severity '{0}', expected one of: must, should, may, hint")]
pub struct ParseSeverityError(pub String);

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "must" => Ok(Self::Must),
            "should" => Ok(Self::Should),
            "may" => Ok(Self::May),
            "hint" => Ok(Self::Hint),
            _ => Err(ParseSeverityError(s.to_string())),
        }
    }
}

/// A reference into the linted document: a path template plus an optional
/// pointer into one of its operations.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Location {
    /// Path template string, e.g. `/users/{id}`.
    pub path: String,
    /// Pointer below the path item, e.g. `get/responses/200/headers/Link`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pointer: Option<String>,
}

impl Location {
    /// Creates a location referencing a whole path item.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            pointer: None,
        }
    }

    /// Narrows the location with a pointer into the path item.
    #[must_use]
    pub fn with_pointer(mut self, pointer: impl Into<String>) -> Self {
        self.pointer = Some(pointer.into());
        self
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.pointer {
            Some(pointer) => write!(f, "{}#{pointer}", self.path),
            None => write!(f, "{}", self.path),
        }
    }
}

/// A single style finding reported by a rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Rule code (e.g. "AP001").
    pub code: String,
    /// Rule name (e.g. "avoid-trailing-slash").
    pub rule: String,
    /// Fixed human-readable title of the convention.
    pub title: String,
    /// Explanation of this particular finding.
    pub description: String,
    /// Severity, possibly overridden by configuration.
    pub severity: Severity,
    /// Ordered document locations this finding refers to.
    pub locations: Vec<Location>,
}

impl Violation {
    /// Creates a violation with no locations.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        rule: impl Into<String>,
        severity: Severity,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            rule: rule.into(),
            title: title.into(),
            description: description.into(),
            severity,
            locations: Vec::new(),
        }
    }

    /// Appends a location.
    #[must_use]
    pub fn with_location(mut self, location: Location) -> Self {
        self.locations.push(location);
        self
    }

    /// Replaces the location list.
    #[must_use]
    pub fn with_locations(mut self, locations: Vec<Location>) -> Self {
        self.locations = locations;
        self
    }

    /// The first location, used as the tertiary report sort key.
    #[must_use]
    pub fn first_location(&self) -> Option<&Location> {
        self.locations.first()
    }

    /// Identity under deduplication: two violations with equal title,
    /// severity, and location list are the same finding.
    #[must_use]
    pub fn dedup_key(&self) -> (String, Severity, Vec<Location>) {
        (self.title.clone(), self.severity, self.locations.clone())
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.severity, self.code, self.title)?;
        if let Some(location) = self.first_location() {
            write!(f, " at {location}")?;
        }
        Ok(())
    }
}

/// Kind of a run-health diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticKind {
    /// A rule failed during evaluation and was isolated.
    RuleFault,
    /// A configuration entry was invalid and a default was used instead.
    ConfigInvalid,
}

/// A tool/run-health finding, kept separate from the violation stream.
///
/// Diagnostics describe problems with the lint run itself, never with the
/// document under analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// What went wrong.
    pub kind: DiagnosticKind,
    /// Rule the diagnostic concerns, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
    /// Human-readable message.
    pub message: String,
}

impl Diagnostic {
    /// Records an isolated rule failure.
    #[must_use]
    pub fn rule_fault(rule: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: DiagnosticKind::RuleFault,
            rule: Some(rule.into()),
            message: message.into(),
        }
    }

    /// Records an invalid configuration entry.
    #[must_use]
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self {
            kind: DiagnosticKind::ConfigInvalid,
            rule: None,
            message: message.into(),
        }
    }

    /// Attaches the rule this diagnostic concerns.
    #[must_use]
    pub fn for_rule(mut self, rule: impl Into<String>) -> Self {
        self.rule = Some(rule.into());
        self
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self.kind {
            DiagnosticKind::RuleFault => "rule fault",
            DiagnosticKind::ConfigInvalid => "invalid config",
        };
        match &self.rule {
            Some(rule) => write!(f, "{kind} ({rule}): {}", self.message),
            None => write!(f, "{kind}: {}", self.message),
        }
    }
}

/// Violation counts broken down by severity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityCounts {
    /// Number of `must` violations.
    pub must: usize,
    /// Number of `should` violations.
    pub should: usize,
    /// Number of `may` violations.
    pub may: usize,
    /// Number of `hint` violations.
    pub hint: usize,
}

impl SeverityCounts {
    /// Sum across all severities.
    #[must_use]
    pub fn total(&self) -> usize {
        self.must + self.should + self.may + self.hint
    }
}

/// Result of a lint run: the ordered violation stream plus the diagnostics
/// stream.
///
/// Violations are ordered by severity, then rule registration order, then
/// first location. The two streams are intentionally separate: violations
/// describe the document, diagnostics describe the run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintReport {
    /// Ordered style findings.
    pub violations: Vec<Violation>,
    /// Run-health findings (rule faults, invalid configuration).
    pub diagnostics: Vec<Diagnostic>,
}

impl LintReport {
    /// Creates an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of violations.
    #[must_use]
    pub fn total(&self) -> usize {
        self.violations.len()
    }

    /// Counts violations per severity.
    #[must_use]
    pub fn count_by_severity(&self) -> SeverityCounts {
        let mut counts = SeverityCounts::default();
        for violation in &self.violations {
            match violation.severity {
                Severity::Must => counts.must += 1,
                Severity::Should => counts.should += 1,
                Severity::May => counts.may += 1,
                Severity::Hint => counts.hint += 1,
            }
        }
        counts
    }

    /// Returns `true` if any violation is at least as severe as `threshold`.
    #[must_use]
    pub fn has_violations_at(&self, threshold: Severity) -> bool {
        self.violations
            .iter()
            .any(|v| v.severity.is_at_least(threshold))
    }

    /// Number of `must` violations, the default build-failure gate.
    #[must_use]
    pub fn must_count(&self) -> usize {
        self.count_by_severity().must
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_violation(severity: Severity, path: &str) -> Violation {
        Violation::new(
            "AP002",
            "avoid-trailing-slash",
            severity,
            "Avoid Trailing Slashes",
            "path ends with a slash",
        )
        .with_location(Location::new(path))
    }

    #[test]
    fn severity_orders_must_first() {
        let mut severities = vec![Severity::Hint, Severity::Must, Severity::May, Severity::Should];
        severities.sort();
        assert_eq!(
            severities,
            vec![Severity::Must, Severity::Should, Severity::May, Severity::Hint]
        );
    }

    #[test]
    fn severity_is_at_least_is_reflexive_and_directional() {
        assert!(Severity::Must.is_at_least(Severity::Must));
        assert!(Severity::Must.is_at_least(Severity::Hint));
        assert!(!Severity::Hint.is_at_least(Severity::Must));
        assert!(Severity::Should.is_at_least(Severity::May));
    }

    #[test]
    fn severity_parses_case_insensitively() {
        assert_eq!("MUST".parse::<Severity>(), Ok(Severity::Must));
        assert_eq!("should".parse::<Severity>(), Ok(Severity::Should));
        assert_eq!("May".parse::<Severity>(), Ok(Severity::May));
        assert_eq!("hint".parse::<Severity>(), Ok(Severity::Hint));
        assert!("critical".parse::<Severity>().is_err());
    }

    #[test]
    fn severity_display_round_trips() {
        for severity in Severity::ALL {
            assert_eq!(severity.to_string().parse::<Severity>(), Ok(severity));
        }
    }

    #[test]
    fn location_display_with_and_without_pointer() {
        insta::assert_snapshot!(Location::new("/users/{id}").to_string(), @"/users/{id}");
        insta::assert_snapshot!(
            Location::new("/users/{id}").with_pointer("get/responses/200").to_string(),
            @"/users/{id}#get/responses/200"
        );
    }

    #[test]
    fn violation_display_includes_first_location() {
        let v = make_violation(Severity::Must, "/users/");
        insta::assert_snapshot!(v.to_string(), @"must [AP002] Avoid Trailing Slashes at /users/");
    }

    #[test]
    fn dedup_key_ignores_description() {
        let a = make_violation(Severity::Must, "/users/");
        let mut b = make_violation(Severity::Must, "/users/");
        b.description = "different explanation".to_string();
        assert_eq!(a.dedup_key(), b.dedup_key());
    }

    #[test]
    fn dedup_key_distinguishes_severity_and_locations() {
        let a = make_violation(Severity::Must, "/users/");
        let b = make_violation(Severity::Should, "/users/");
        let c = make_violation(Severity::Must, "/orders/");
        assert_ne!(a.dedup_key(), b.dedup_key());
        assert_ne!(a.dedup_key(), c.dedup_key());
    }

    #[test]
    fn report_counts_by_severity() {
        let report = LintReport {
            violations: vec![
                make_violation(Severity::Must, "/a/"),
                make_violation(Severity::Must, "/b/"),
                make_violation(Severity::Hint, "/c/"),
            ],
            diagnostics: Vec::new(),
        };
        let counts = report.count_by_severity();
        assert_eq!(counts.must, 2);
        assert_eq!(counts.hint, 1);
        assert_eq!(counts.should, 0);
        assert_eq!(counts.total(), 3);
        assert_eq!(report.total(), 3);
        assert_eq!(report.must_count(), 2);
    }

    #[test]
    fn report_threshold_check() {
        let report = LintReport {
            violations: vec![make_violation(Severity::Should, "/a/")],
            diagnostics: Vec::new(),
        };
        assert!(!report.has_violations_at(Severity::Must));
        assert!(report.has_violations_at(Severity::Should));
        assert!(report.has_violations_at(Severity::Hint));
    }

    #[test]
    fn diagnostic_display() {
        let d = Diagnostic::rule_fault("avoid-trailing-slash", "boom");
        insta::assert_snapshot!(d.to_string(), @"rule fault (avoid-trailing-slash): boom");
        let d = Diagnostic::config_invalid("unknown rule 'no-such-rule'");
        insta::assert_snapshot!(d.to_string(), @"invalid config: unknown rule 'no-such-rule'");
    }
}
