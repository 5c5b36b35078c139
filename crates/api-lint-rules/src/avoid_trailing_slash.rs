//! Rule against trailing slashes in path templates.
//!
//! `/users/` and `/users` would name the same resource; keeping both spellings
//! out of a definition avoids routing ambiguity. Emits a single violation
//! aggregating every offending path.

use api_lint_core::{pattern, ApiDocument, Location, Rule, Severity, Violation};

/// Rule code for avoid-trailing-slash.
pub const CODE: &str = "AP002";

/// Rule name for avoid-trailing-slash.
pub const NAME: &str = "avoid-trailing-slash";

/// Violation title for avoid-trailing-slash.
pub const TITLE: &str = "Avoid Trailing Slashes";

/// Forbids path templates ending in `/`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AvoidTrailingSlash;

impl AvoidTrailingSlash {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for AvoidTrailingSlash {
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
        "Forbids path templates that end with a slash"
    }

    fn check(&self, doc: &ApiDocument) -> Vec<Violation> {
        let locations: Vec<Location> = doc
            .paths()
            .filter(|(path, _)| pattern::has_trailing_slash(path))
            .map(|(path, _)| Location::new(path))
            .collect();

        if locations.is_empty() {
            return Vec::new();
        }
        vec![Violation::new(
            CODE,
            NAME,
            self.default_severity(),
            TITLE,
            "path templates must not end with a slash",
        )
        .with_locations(locations)]
    }
}
