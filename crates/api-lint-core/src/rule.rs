//! Rule trait for defining API style rules.

use crate::document::ApiDocument;
use crate::types::{Severity, Violation};

/// An independent unit of convention-checking logic over a document.
///
/// Implementations are stateless or configuration-only and must tolerate a
/// document with zero matching constructs by returning an empty vector.
/// `check` must not panic in normal operation; a panic is treated as a rule
/// fault by the engine and isolated from other rules.
///
/// # Example
///
/// ```ignore
/// use api_lint_core::{ApiDocument, Location, Rule, Severity, Violation};
///
/// pub struct AvoidTrailingSlash;
///
/// impl Rule for AvoidTrailingSlash {
///     fn name(&self) -> &'static str { "avoid-trailing-slash" }
///     fn code(&self) -> &'static str { "AP002" }
///     fn title(&self) -> &'static str { "Avoid Trailing Slashes" }
///
///     fn check(&self, doc: &ApiDocument) -> Vec<Violation> {
///         let locations: Vec<Location> = doc
///             .paths()
///             .filter(|(path, _)| path.ends_with('/'))
///             .map(|(path, _)| Location::new(path))
///             .collect();
///         if locations.is_empty() {
///             return Vec::new();
///         }
///         vec![Violation::new(
///             self.code(),
///             self.name(),
///             self.default_severity(),
///             self.title(),
///             "Paths must not end with a slash",
///         )
///         .with_locations(locations)]
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g. "avoid-trailing-slash").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g. "AP002").
    fn code(&self) -> &'static str;

    /// Returns the fixed violation title this rule reports.
    fn title(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Must
    }

    /// Checks a document and returns any violations found.
    ///
    /// Must return an empty vector, never fail, for documents with nothing
    /// to flag (including documents with zero paths).
    fn check(&self, doc: &ApiDocument) -> Vec<Violation>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Location;

    struct TestRule;

    impl Rule for TestRule {
        fn name(&self) -> &'static str {
            "test-rule"
        }
        fn code(&self) -> &'static str {
            "TEST001"
        }
        fn title(&self) -> &'static str {
            "Test Rule"
        }
        fn description(&self) -> &'static str {
            "A test rule"
        }

        fn check(&self, _doc: &ApiDocument) -> Vec<Violation> {
            vec![Violation::new(
                self.code(),
                self.name(),
                self.default_severity(),
                self.title(),
                "test violation",
            )
            .with_location(Location::new("/test"))]
        }
    }

    #[test]
    fn rule_trait_defaults() {
        let rule = TestRule;
        assert_eq!(rule.name(), "test-rule");
        assert_eq!(rule.code(), "TEST001");
        assert_eq!(rule.default_severity(), Severity::Must);
        assert_eq!(rule.check(&ApiDocument::default()).len(), 1);
    }
}
