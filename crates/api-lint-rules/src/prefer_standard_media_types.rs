//! Rule preferring standard JSON media types in `produces` lists.
//!
//! Accepted: `application/json`, `application/problem+json`, and custom
//! media types carrying a versioning suffix (`application/x.foo+json;v=2`).
//! Emits one violation per offending media type declaration.

use api_lint_core::{pattern, ApiDocument, Location, Rule, Severity, Violation};

/// Rule code for prefer-standard-media-types.
pub const CODE: &str = "AP007";

/// Rule name for prefer-standard-media-types.
pub const NAME: &str = "prefer-standard-media-types";

/// Violation title for prefer-standard-media-types.
pub const TITLE: &str = "Prefer Standard Media Types";

/// Requires response media types to be standard JSON or versioned custom
/// types.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreferStandardMediaTypes;

impl PreferStandardMediaTypes {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn is_acceptable(media_type: &str) -> bool {
    pattern::is_application_json_or_problem_json(media_type)
        || pattern::is_custom_media_type_with_versioning(media_type)
}

impl Rule for PreferStandardMediaTypes {
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
        "Requires produced media types to be application/json, problem+json, or versioned custom types"
    }

    fn default_severity(&self) -> Severity {
        Severity::Should
    }

    fn check(&self, doc: &ApiDocument) -> Vec<Violation> {
        let mut violations = Vec::new();
        for (path, item) in doc.paths() {
            for (method, operation) in item.operations() {
                for media_type in operation.produces.iter().filter(|m| !is_acceptable(m)) {
                    violations.push(
                        Violation::new(
                            CODE,
                            NAME,
                            self.default_severity(),
                            TITLE,
                            format!("media type '{media_type}' is not a standard JSON type"),
                        )
                        .with_location(
                            Location::new(path).with_pointer(format!("{method}/produces")),
                        ),
                    );
                }
            }
        }
        violations
    }
}
