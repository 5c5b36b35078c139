//! Rule enforcing the collection/identifier alternation of path levels.
//!
//! # Rationale
//!
//! Resource paths read naturally when literal collection names alternate
//! with parameter identifiers: `/users/{id}/orders/{orderId}`. Two literals
//! or two parameters in a row usually indicate a misplaced sub-resource or a
//! missing identifier.
//!
//! # Configuration
//!
//! - `allow_trailing_action`: tolerate one final literal segment that breaks
//!   the alternation, e.g. the action suffix in `/users/{id}/activate`
//!   (default: true)
//!
//! Emits one violation per offending path, each carrying a single location.

use api_lint_core::{ApiDocument, Location, PathTemplate, Rule, Segment, Severity, Violation};

/// Rule code for every-second-path-level-parameter.
pub const CODE: &str = "AP001";

/// Rule name for every-second-path-level-parameter.
pub const NAME: &str = "every-second-path-level-parameter";

/// Violation title for every-second-path-level-parameter.
pub const TITLE: &str = "Every Second Path Level To Be Parameter";

/// Requires literal collection names at even path levels and parameters at
/// odd path levels.
#[derive(Debug, Clone)]
pub struct EverySecondPathLevelParameter {
    /// Tolerate a final literal action segment.
    pub allow_trailing_action: bool,
    /// Custom severity.
    pub severity: Severity,
}

impl Default for EverySecondPathLevelParameter {
    fn default() -> Self {
        Self::new()
    }
}

impl EverySecondPathLevelParameter {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            allow_trailing_action: true,
            severity: Severity::Must,
        }
    }

    /// Sets whether a final literal action segment is tolerated.
    #[must_use]
    pub fn allow_trailing_action(mut self, allow: bool) -> Self {
        self.allow_trailing_action = allow;
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Finds the first segment breaking the alternation, if any.
    fn first_offending<'a>(&self, segments: &'a [Segment]) -> Option<(usize, &'a Segment)> {
        for (idx, segment) in segments.iter().enumerate() {
            let expects_parameter = idx % 2 == 1;
            if segment.is_parameter() == expects_parameter {
                continue;
            }
            let trailing_literal = segment.is_literal() && idx + 1 == segments.len();
            if expects_parameter && trailing_literal && self.allow_trailing_action {
                continue;
            }
            return Some((idx, segment));
        }
        None
    }
}

impl Rule for EverySecondPathLevelParameter {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn title(&self) -> &'static str {
        TITLE
    }

    fn description(&self) -> &'static str {
        "Requires resource paths to alternate literal collection names and path parameters"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, doc: &ApiDocument) -> Vec<Violation> {
        let mut violations = Vec::new();
        for (path, _) in doc.paths() {
            let template = PathTemplate::parse(path);
            if let Some((idx, segment)) = self.first_offending(template.segments()) {
                let expected = if idx % 2 == 1 {
                    "a path parameter"
                } else {
                    "a literal resource name"
                };
                violations.push(
                    Violation::new(
                        CODE,
                        NAME,
                        self.severity,
                        TITLE,
                        format!(
                            "path level {} ('{}') should be {expected}",
                            idx + 1,
                            segment.text()
                        ),
                    )
                    .with_location(Location::new(path)),
                );
            }
        }
        violations
    }
}
