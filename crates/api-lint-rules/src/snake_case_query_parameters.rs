//! Rule requiring snake_case query parameter names.
//!
//! Emits one violation per offending parameter declaration, pointing at the
//! operation that declares it.

use api_lint_core::{pattern, ApiDocument, Location, ParameterLocation, Rule, Severity, Violation};

/// Rule code for snake-case-query-parameters.
pub const CODE: &str = "AP006";

/// Rule name for snake-case-query-parameters.
pub const NAME: &str = "snake-case-query-parameters";

/// Violation title for snake-case-query-parameters.
pub const TITLE: &str = "Use snake_case For Query Parameters";

/// Requires query parameter names to be snake_case.
#[derive(Debug, Clone, Copy, Default)]
pub struct SnakeCaseQueryParameters;

impl SnakeCaseQueryParameters {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for SnakeCaseQueryParameters {
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
        "Requires query parameter names to use snake_case"
    }

    fn default_severity(&self) -> Severity {
        Severity::Should
    }

    fn check(&self, doc: &ApiDocument) -> Vec<Violation> {
        let mut violations = Vec::new();
        for (path, item) in doc.paths() {
            for (method, operation) in item.operations() {
                for param in &operation.parameters {
                    if param.location != ParameterLocation::Query {
                        continue;
                    }
                    if pattern::is_snake_case(&param.name) {
                        continue;
                    }
                    violations.push(
                        Violation::new(
                            CODE,
                            NAME,
                            self.default_severity(),
                            TITLE,
                            format!("query parameter '{}' is not snake_case", param.name),
                        )
                        .with_location(
                            Location::new(path)
                                .with_pointer(format!("{method}/parameters/{}", param.name)),
                        ),
                    );
                }
            }
        }
        violations
    }
}
