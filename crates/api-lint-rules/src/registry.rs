//! Rule registry: the built-in catalog in registration order.

use crate::{
    every_second_path_level_parameter, limit_resource_count, AvoidLinkHeader, AvoidTrailingSlash,
    EverySecondPathLevelParameter, KebabCasePathSegments, LimitResourceCount, NoVersionInUri,
    PreferStandardMediaTypes, SnakeCaseQueryParameters,
};
use api_lint_core::{Config, RuleBox, RuleConfig};

/// Returns every built-in rule with default settings, in code order.
///
/// The order is the registration order handed to the engine, and therefore
/// the secondary sort key of reports.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    vec![
        Box::new(EverySecondPathLevelParameter::new()),
        Box::new(AvoidTrailingSlash::new()),
        Box::new(AvoidLinkHeader::new()),
        Box::new(KebabCasePathSegments::new()),
        Box::new(NoVersionInUri::new()),
        Box::new(SnakeCaseQueryParameters::new()),
        Box::new(PreferStandardMediaTypes::new()),
        Box::new(LimitResourceCount::new()),
    ]
}

/// Returns every built-in rule with rule-specific options applied from the
/// configuration.
///
/// Enabling/disabling and severity overrides stay with the engine; only
/// construction-time options (e.g. `allow_trailing_action`, `max_resources`)
/// are resolved here.
#[must_use]
pub fn configured_rules(config: &Config) -> Vec<RuleBox> {
    fn options<'a>(config: &'a Config, defaults: &'a RuleConfig, name: &str) -> &'a RuleConfig {
        config.rules.get(name).unwrap_or(defaults)
    }

    let defaults = RuleConfig::default();
    let every_second = options(config, &defaults, every_second_path_level_parameter::NAME);
    let limit = options(config, &defaults, limit_resource_count::NAME);
    tracing::debug!(
        allow_trailing_action = every_second.get_bool("allow_trailing_action", true),
        max_resources = limit.get_int("max_resources", 8),
        "building configured rule catalog"
    );

    vec![
        Box::new(
            EverySecondPathLevelParameter::new()
                .allow_trailing_action(every_second.get_bool("allow_trailing_action", true)),
        ),
        Box::new(AvoidTrailingSlash::new()),
        Box::new(AvoidLinkHeader::new()),
        Box::new(KebabCasePathSegments::new()),
        Box::new(NoVersionInUri::new()),
        Box::new(SnakeCaseQueryParameters::new()),
        Box::new(PreferStandardMediaTypes::new()),
        Box::new(LimitResourceCount::new().max_resources(
            usize::try_from(limit.get_int("max_resources", 8)).unwrap_or(8),
        )),
    ]
}
