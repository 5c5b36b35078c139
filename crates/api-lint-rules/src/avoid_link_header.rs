//! Rule against `Link` headers for pagination or relations.
//!
//! # Rationale
//!
//! Relation links belong in the response body where clients can consume them
//! uniformly; a `Link` header hides hypermedia from schema-driven tooling.
//!
//! Emits one violation per occurrence: a declared `Link` response header or a
//! declared `Link` header parameter.

use api_lint_core::{ApiDocument, Location, Parameter, ParameterLocation, Rule, Violation};

/// Rule code for avoid-link-header.
pub const CODE: &str = "AP003";

/// Rule name for avoid-link-header.
pub const NAME: &str = "avoid-link-header";

/// Violation title for avoid-link-header.
pub const TITLE: &str = "Avoid Link Headers";

/// Forbids declaring the HTTP `Link` header on operations and responses.
#[derive(Debug, Clone, Copy, Default)]
pub struct AvoidLinkHeader;

impl AvoidLinkHeader {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn is_link(name: &str) -> bool {
    name.eq_ignore_ascii_case("link")
}

fn is_link_header_param(param: &Parameter) -> bool {
    param.location == ParameterLocation::Header && is_link(&param.name)
}

impl Rule for AvoidLinkHeader {
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
        "Forbids Link headers on operations and responses"
    }

    fn check(&self, doc: &ApiDocument) -> Vec<Violation> {
        let mut violations = Vec::new();
        for (path, item) in doc.paths() {
            for (method, operation) in item.operations() {
                for param in operation.parameters.iter().filter(|p| is_link_header_param(p)) {
                    violations.push(self.flag(
                        path,
                        format!("{method}/parameters/{}", param.name),
                        "request header parameter",
                    ));
                }
                for (status, response) in &operation.responses {
                    for header in response.headers.keys().filter(|h| is_link(h)) {
                        violations.push(self.flag(
                            path,
                            format!("{method}/responses/{status}/headers/{header}"),
                            "response header",
                        ));
                    }
                }
            }
        }
        violations
    }
}

impl AvoidLinkHeader {
    fn flag(&self, path: &str, pointer: String, what: &str) -> Violation {
        Violation::new(
            CODE,
            NAME,
            self.default_severity(),
            TITLE,
            format!("Link declared as {what}, use body links instead"),
        )
        .with_location(Location::new(path).with_pointer(pointer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api_lint_core::Severity;

    fn doc(raw: serde_json::Value) -> ApiDocument {
        serde_json::from_value(raw).expect("valid document")
    }

    #[test]
    fn empty_document_is_clean() {
        assert!(AvoidLinkHeader::new().check(&ApiDocument::default()).is_empty());
    }

    #[test]
    fn plain_responses_are_clean() {
        let doc = doc(serde_json::json!({
            "paths": {
                "/users": {
                    "get": {"responses": {"200": {"description": "ok"}}}
                }
            }
        }));
        assert!(AvoidLinkHeader::new().check(&doc).is_empty());
    }

    #[test]
    fn link_response_header_is_flagged() {
        let doc = doc(serde_json::json!({
            "paths": {
                "/users": {
                    "get": {
                        "responses": {
                            "200": {"headers": {"Link": {"type": "string"}}}
                        }
                    }
                }
            }
        }));
        let violations = AvoidLinkHeader::new().check(&doc);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].severity, Severity::Must);
        assert_eq!(
            violations[0].locations[0].pointer.as_deref(),
            Some("get/responses/200/headers/Link")
        );
    }

    #[test]
    fn link_header_parameter_is_flagged_case_insensitively() {
        let doc = doc(serde_json::json!({
            "paths": {
                "/users": {
                    "post": {
                        "parameters": [{"name": "LINK", "in": "header"}],
                        "responses": {}
                    }
                }
            }
        }));
        let violations = AvoidLinkHeader::new().check(&doc);
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].locations[0].pointer.as_deref(),
            Some("post/parameters/LINK")
        );
    }

    #[test]
    fn link_named_query_parameter_is_fine() {
        let doc = doc(serde_json::json!({
            "paths": {
                "/users": {
                    "get": {
                        "parameters": [{"name": "link", "in": "query"}],
                        "responses": {}
                    }
                }
            }
        }));
        assert!(AvoidLinkHeader::new().check(&doc).is_empty());
    }
}
