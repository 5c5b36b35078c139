//! Rule keeping the number of path templates in one definition bounded.
//!
//! # Rationale
//!
//! A definition that keeps growing paths usually wants to be split into
//! several APIs with their own lifecycles.
//!
//! # Configuration
//!
//! - `max_resources`: number of path templates tolerated (default: 8)
//!
//! Emits at most one violation, aggregating one location per path beyond the
//! limit.

use api_lint_core::{ApiDocument, Location, Rule, Severity, Violation};

/// Rule code for limit-resource-count.
pub const CODE: &str = "AP008";

/// Rule name for limit-resource-count.
pub const NAME: &str = "limit-resource-count";

/// Violation title for limit-resource-count.
pub const TITLE: &str = "Limit Number Of Resources";

/// Flags definitions declaring more path templates than the configured limit.
#[derive(Debug, Clone)]
pub struct LimitResourceCount {
    /// Number of path templates tolerated.
    pub max_resources: usize,
}

impl Default for LimitResourceCount {
    fn default() -> Self {
        Self::new()
    }
}

impl LimitResourceCount {
    /// Creates a new rule with the default limit.
    #[must_use]
    pub fn new() -> Self {
        Self { max_resources: 8 }
    }

    /// Sets the tolerated number of path templates.
    #[must_use]
    pub fn max_resources(mut self, max: usize) -> Self {
        self.max_resources = max;
        self
    }
}

impl Rule for LimitResourceCount {
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
        "Flags definitions declaring more path templates than the configured limit"
    }

    fn default_severity(&self) -> Severity {
        Severity::May
    }

    fn check(&self, doc: &ApiDocument) -> Vec<Violation> {
        let count = doc.paths.len();
        if count <= self.max_resources {
            return Vec::new();
        }

        let locations: Vec<Location> = doc
            .paths()
            .skip(self.max_resources)
            .map(|(path, _)| Location::new(path))
            .collect();

        vec![Violation::new(
            CODE,
            NAME,
            self.default_severity(),
            TITLE,
            format!(
                "definition declares {count} path templates, {} more than the limit of {}",
                count - self.max_resources,
                self.max_resources
            ),
        )
        .with_locations(locations)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api_lint_core::PathItem;

    fn doc_with_n_paths(n: usize) -> ApiDocument {
        let mut doc = ApiDocument::default();
        for i in 0..n {
            doc.paths.insert(format!("/resource-{i:02}"), PathItem::default());
        }
        doc
    }

    #[test]
    fn within_limit_is_clean() {
        let rule = LimitResourceCount::new();
        assert!(rule.check(&doc_with_n_paths(8)).is_empty());
        assert!(rule.check(&ApiDocument::default()).is_empty());
    }

    #[test]
    fn excess_paths_aggregate_into_one_violation() {
        let violations = LimitResourceCount::new().check(&doc_with_n_paths(10));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].severity, Severity::May);
        assert_eq!(violations[0].locations.len(), 2);
        assert_eq!(violations[0].locations[0].path, "/resource-08");
        assert!(violations[0].description.contains("10 path templates"));
    }

    #[test]
    fn limit_is_configurable() {
        let violations = LimitResourceCount::new()
            .max_resources(2)
            .check(&doc_with_n_paths(3));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].locations.len(), 1);
    }
}
