//! End-to-end lint runs: the built-in catalog through the engine.

use api_lint_core::{
    ApiDocument, Config, DiagnosticKind, Location, Rule, RuleEngine, Severity, Violation,
};
use api_lint_rules::{all_rules, configured_rules, EverySecondPathLevelParameter};

fn doc(raw: serde_json::Value) -> ApiDocument {
    serde_json::from_value(raw).expect("valid document")
}

/// A document that satisfies every built-in rule.
fn clean_document() -> ApiDocument {
    doc(serde_json::json!({
        "basePath": "/api",
        "paths": {
            "/users": {
                "get": {
                    "parameters": [{"name": "page_size", "in": "query"}],
                    "produces": ["application/json"],
                    "responses": {"200": {"description": "ok"}}
                }
            },
            "/users/{id}": {
                "get": {
                    "produces": ["application/json"],
                    "responses": {"200": {"description": "ok"}}
                }
            },
            "/users/{id}/orders/{orderId}": {
                "get": {"responses": {"200": {"description": "ok"}}}
            }
        }
    }))
}

#[test]
fn clean_document_reports_nothing() {
    let engine = RuleEngine::builder().rules(all_rules()).build();
    let report = engine.run(&clean_document());
    assert_eq!(report.total(), 0, "unexpected: {:?}", report.violations);
    assert!(report.diagnostics.is_empty());
}

#[test]
fn alternating_rule_accepts_nested_resources() {
    let document = doc(serde_json::json!({
        "paths": {
            "/users/{id}": {},
            "/users/{id}/orders/{orderId}": {}
        }
    }));
    let engine = RuleEngine::builder()
        .rule(EverySecondPathLevelParameter::new())
        .build();
    assert_eq!(engine.run(&document).total(), 0);
}

#[test]
fn two_broken_paths_give_two_must_violations() {
    // One path with two literals in a row, one with two parameters in a row.
    let document = doc(serde_json::json!({
        "paths": {
            "/users/items/{id}": {},
            "/shops/{shopId}/{branchId}": {}
        }
    }));
    let engine = RuleEngine::builder()
        .rule(EverySecondPathLevelParameter::new())
        .build();
    let report = engine.run(&document);

    assert_eq!(report.total(), 2);
    assert!(report
        .violations
        .iter()
        .all(|v| v.severity == Severity::Must));
    assert!(report
        .violations
        .iter()
        .all(|v| v.title == "Every Second Path Level To Be Parameter"));
}

#[test]
fn empty_document_is_clean_for_the_whole_catalog() {
    let engine = RuleEngine::builder().rules(all_rules()).build();
    let report = engine.run(&ApiDocument::default());
    assert_eq!(report.total(), 0);
}

#[test]
fn report_orders_must_before_lower_severities() {
    let document = doc(serde_json::json!({
        "paths": {
            // Breaks alternation (must) and snake_case query naming (should).
            "/users/items/{id}": {
                "get": {
                    "parameters": [{"name": "pageSize", "in": "query"}],
                    "responses": {}
                }
            }
        }
    }));
    let engine = RuleEngine::builder().rules(all_rules()).build();
    let report = engine.run(&document);

    assert!(report.total() >= 2);
    let severities: Vec<Severity> = report.violations.iter().map(|v| v.severity).collect();
    let mut sorted = severities.clone();
    sorted.sort();
    assert_eq!(severities, sorted);
    assert_eq!(report.violations[0].severity, Severity::Must);
}

#[test]
fn disabling_a_rule_suppresses_its_findings() {
    let document = doc(serde_json::json!({
        "paths": {"/users/items/{id}": {}}
    }));
    let config =
        Config::parse("[rules.every-second-path-level-parameter]\nenabled = false\n")
            .expect("config parses");
    let engine = RuleEngine::builder()
        .rules(configured_rules(&config))
        .config(config)
        .build();
    let report = engine.run(&document);
    assert!(report
        .violations
        .iter()
        .all(|v| v.rule != "every-second-path-level-parameter"));
    assert_eq!(report.total(), 0);
}

#[test]
fn severity_override_downgrades_findings() {
    let document = doc(serde_json::json!({
        "paths": {"/users/items/{id}": {}}
    }));
    let config = Config::parse("[rules.every-second-path-level-parameter]\nseverity = \"hint\"\n")
        .expect("config parses");
    let engine = RuleEngine::builder()
        .rules(configured_rules(&config))
        .config(config)
        .build();
    let report = engine.run(&document);
    assert_eq!(report.total(), 1);
    assert_eq!(report.violations[0].severity, Severity::Hint);
    assert!(!report.has_violations_at(Severity::Must));
}

#[test]
fn rule_options_flow_from_configuration() {
    let document = doc(serde_json::json!({
        "paths": {"/users/{id}/activate": {}}
    }));

    let default_engine = RuleEngine::builder()
        .rules(configured_rules(&Config::default()))
        .build();
    assert_eq!(default_engine.run(&document).total(), 0);

    let config = Config::parse(
        "[rules.every-second-path-level-parameter]\nallow_trailing_action = false\n",
    )
    .expect("config parses");
    let strict_engine = RuleEngine::builder()
        .rules(configured_rules(&config))
        .config(config)
        .build();
    assert_eq!(strict_engine.run(&document).total(), 1);
}

struct FaultyRule;

impl Rule for FaultyRule {
    fn name(&self) -> &'static str {
        "faulty-rule"
    }
    fn code(&self) -> &'static str {
        "TEST001"
    }
    fn title(&self) -> &'static str {
        "Faulty Rule"
    }

    fn check(&self, doc: &ApiDocument) -> Vec<Violation> {
        let _ = doc;
        panic!("fixture fault");
    }
}

#[test]
fn faulting_rule_does_not_disturb_catalog_findings() {
    let document = doc(serde_json::json!({
        "paths": {"/users/items/{id}": {}}
    }));
    let engine = RuleEngine::builder()
        .rule(FaultyRule)
        .rules(all_rules())
        .build();
    let report = engine.run(&document);

    assert_eq!(report.total(), 1);
    assert_eq!(report.violations[0].rule, "every-second-path-level-parameter");
    assert_eq!(report.diagnostics.len(), 1);
    assert_eq!(report.diagnostics[0].kind, DiagnosticKind::RuleFault);
    assert!(report
        .violations
        .iter()
        .all(|v| v.rule != "faulty-rule"));
}

#[test]
fn repeated_runs_are_identical() {
    let document = doc(serde_json::json!({
        "basePath": "/api/v1",
        "paths": {
            "/users/items/{id}": {},
            "/shipmentOrders/": {}
        }
    }));
    let engine = RuleEngine::builder().rules(all_rules()).build();
    assert_eq!(engine.run(&document), engine.run(&document));
}

#[test]
fn aggregate_rules_carry_multiple_locations() {
    let document = doc(serde_json::json!({
        "paths": {"/users/": {}, "/orders/": {}}
    }));
    let engine = RuleEngine::builder().rules(all_rules()).build();
    let report = engine.run(&document);

    let trailing: Vec<&Violation> = report
        .violations
        .iter()
        .filter(|v| v.rule == "avoid-trailing-slash")
        .collect();
    assert_eq!(trailing.len(), 1);
    assert_eq!(
        trailing[0].locations,
        vec![Location::new("/orders/"), Location::new("/users/")]
    );
}
