//! Rule requiring lowercase hyphenated words in literal path segments.
//!
//! Parameter segments are exempt (their naming is a parameter concern), and
//! so are empty segments, which `avoid-trailing-slash` owns. Emits one
//! violation per offending path naming the first bad segment.

use api_lint_core::{pattern, ApiDocument, Location, PathTemplate, Rule, Violation};

/// Rule code for kebab-case-path-segments.
pub const CODE: &str = "AP004";

/// Rule name for kebab-case-path-segments.
pub const NAME: &str = "kebab-case-path-segments";

/// Violation title for kebab-case-path-segments.
pub const TITLE: &str = "Lowercase Words With Hyphens For Path Segments";

/// Requires literal path segments to be lowercase words separated by hyphens.
#[derive(Debug, Clone, Copy, Default)]
pub struct KebabCasePathSegments;

impl KebabCasePathSegments {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for KebabCasePathSegments {
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
        "Requires literal path segments to use lowercase words separated by hyphens"
    }

    fn check(&self, doc: &ApiDocument) -> Vec<Violation> {
        let mut violations = Vec::new();
        for (path, _) in doc.paths() {
            let template = PathTemplate::parse(path);
            let offending = template.segments().iter().find(|segment| {
                segment.is_literal()
                    && !segment.text().is_empty()
                    && !pattern::is_kebab_case(segment.text())
            });
            if let Some(segment) = offending {
                violations.push(
                    Violation::new(
                        CODE,
                        NAME,
                        self.default_severity(),
                        TITLE,
                        format!("segment '{}' is not lowercase-hyphenated", segment.text()),
                    )
                    .with_location(Location::new(path)),
                );
            }
        }
        violations
    }
}
