//! Lint command implementation.

use anyhow::{Context, Result};
use api_lint_core::{Config, RuleBox, RuleEngine};
use api_lint_rules::{
    configured_rules, AvoidLinkHeader, AvoidTrailingSlash, EverySecondPathLevelParameter,
    KebabCasePathSegments, LimitResourceCount, NoVersionInUri, PreferStandardMediaTypes,
    SnakeCaseQueryParameters,
};
use std::path::Path;

use super::output;
use crate::{config_resolver, loader, OutputFormat};

/// Runs the lint command.
///
/// Exits with a non-zero status when any violation at or above the
/// configured `fail_on` threshold (default: must) is present.
pub fn run(
    file: &Path,
    format: OutputFormat,
    rules_filter: Option<String>,
    explicit_config: Option<&Path>,
) -> Result<()> {
    let working_dir = std::env::current_dir().context("failed to resolve working directory")?;
    let source = config_resolver::resolve(&working_dir, explicit_config);
    let config = match source.path() {
        None => Config::default(),
        Some(p) => Config::from_file(p)
            .with_context(|| format!("failed to load config: {}", p.display()))?,
    };

    let rules = if let Some(filter) = rules_filter {
        let names: Vec<&str> = filter.split(',').map(str::trim).collect();
        filter_rules(&names)
    } else {
        configured_rules(&config)
    };

    let fail_threshold = config.fail_threshold();
    let engine = RuleEngine::builder().rules(rules).config(config).build();

    tracing::info!(
        file = %file.display(),
        rules = engine.rule_count(),
        "linting API definition"
    );

    let document = loader::load_document(file)
        .with_context(|| format!("failed to load API definition: {}", file.display()))?;

    let report = engine.run(&document);

    output::print(&report, format)?;

    if report.has_violations_at(fail_threshold) {
        std::process::exit(1);
    }

    Ok(())
}

fn filter_rules(names: &[&str]) -> Vec<RuleBox> {
    let mut rules: Vec<RuleBox> = Vec::new();

    for name in names {
        match *name {
            "every-second-path-level-parameter" | "AP001" => {
                rules.push(Box::new(EverySecondPathLevelParameter::new()));
            }
            "avoid-trailing-slash" | "AP002" => rules.push(Box::new(AvoidTrailingSlash::new())),
            "avoid-link-header" | "AP003" => rules.push(Box::new(AvoidLinkHeader::new())),
            "kebab-case-path-segments" | "AP004" => {
                rules.push(Box::new(KebabCasePathSegments::new()));
            }
            "no-version-in-uri" | "AP005" => rules.push(Box::new(NoVersionInUri::new())),
            "snake-case-query-parameters" | "AP006" => {
                rules.push(Box::new(SnakeCaseQueryParameters::new()));
            }
            "prefer-standard-media-types" | "AP007" => {
                rules.push(Box::new(PreferStandardMediaTypes::new()));
            }
            "limit-resource-count" | "AP008" => rules.push(Box::new(LimitResourceCount::new())),
            _ => tracing::warn!("unknown rule: {}", name),
        }
    }

    rules
}
