//! Rule against version numbers in URIs.
//!
//! # Rationale
//!
//! Versioning belongs in media types or headers; a `v1` path segment forces
//! clients to rewrite every URI on a version bump.
//!
//! Emits one violation per offending place: the base path or an individual
//! path template.

use api_lint_core::{pattern, ApiDocument, Location, PathTemplate, Rule, Violation};

/// Rule code for no-version-in-uri.
pub const CODE: &str = "AP005";

/// Rule name for no-version-in-uri.
pub const NAME: &str = "no-version-in-uri";

/// Violation title for no-version-in-uri.
pub const TITLE: &str = "Do Not Use URI Versioning";

/// Forbids version-shaped literals (`v1`, `V2`, ...) in the base path and in
/// path templates.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoVersionInUri;

impl NoVersionInUri {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn has_version_segment(path: &str) -> bool {
    PathTemplate::parse(path)
        .segments()
        .iter()
        .any(|segment| segment.is_literal() && pattern::is_version_segment(segment.text()))
}

impl Rule for NoVersionInUri {
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
        "Forbids version numbers in the base path and path templates"
    }

    fn check(&self, doc: &ApiDocument) -> Vec<Violation> {
        let mut violations = Vec::new();

        if let Some(base_path) = doc.base_path.as_deref() {
            if has_version_segment(base_path) {
                violations.push(
                    Violation::new(
                        CODE,
                        NAME,
                        self.default_severity(),
                        TITLE,
                        "base path contains a version number",
                    )
                    .with_location(Location::new(base_path)),
                );
            }
        }

        for (path, _) in doc.paths() {
            if has_version_segment(path) {
                violations.push(
                    Violation::new(
                        CODE,
                        NAME,
                        self.default_severity(),
                        TITLE,
                        "path template contains a version number",
                    )
                    .with_location(Location::new(path)),
                );
            }
        }

        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api_lint_core::PathItem;

    fn doc_with(base_path: Option<&str>, paths: &[&str]) -> ApiDocument {
        let mut doc = ApiDocument {
            base_path: base_path.map(String::from),
            ..ApiDocument::default()
        };
        for path in paths {
            doc.paths.insert((*path).to_string(), PathItem::default());
        }
        doc
    }

    #[test]
    fn unversioned_uris_are_clean() {
        let doc = doc_with(Some("/api"), &["/users", "/users/{id}"]);
        assert!(NoVersionInUri::new().check(&doc).is_empty());
    }

    #[test]
    fn versioned_base_path_is_flagged() {
        let doc = doc_with(Some("/api/v1"), &["/users"]);
        let violations = NoVersionInUri::new().check(&doc);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].locations[0].path, "/api/v1");
    }

    #[test]
    fn versioned_path_template_is_flagged() {
        let doc = doc_with(None, &["/v2/users", "/users"]);
        let violations = NoVersionInUri::new().check(&doc);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].locations[0].path, "/v2/users");
    }

    #[test]
    fn uppercase_version_is_flagged() {
        let doc = doc_with(None, &["/V3/users"]);
        assert_eq!(NoVersionInUri::new().check(&doc).len(), 1);
    }

    #[test]
    fn version_like_parameter_is_fine() {
        let doc = doc_with(None, &["/versions/{v1}"]);
        assert!(NoVersionInUri::new().check(&doc).is_empty());
    }

    #[test]
    fn version_substring_in_word_is_fine() {
        let doc = doc_with(None, &["/invoices", "/travel2"]);
        assert!(NoVersionInUri::new().check(&doc).is_empty());
    }
}
