//! Predicates for naming and media-type patterns shared by rules.

#![allow(clippy::unwrap_used)]

use regex::Regex;
use std::sync::LazyLock;

static CAMEL_CASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]+(?:[A-Z][a-z]+)*$").unwrap());

static PASCAL_CASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][a-z]+(?:[A-Z][a-z]+)*$").unwrap());

static KEBAB_CASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9]*(?:-[a-z0-9]+)*$").unwrap());

static SNAKE_CASE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9_]*$").unwrap());

static PATH_PARAMETER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\{.+}$").unwrap());

static VERSION_SEGMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[vV]\d+$").unwrap());

static APPLICATION_PROBLEM_JSON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^application/(problem\+)?json$").unwrap());

static CUSTOM_WITH_VERSIONING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\w+/[-+.\w]+;v(ersion)?=\d+$").unwrap());

/// Returns `true` if the input, ignoring surrounding whitespace, ends in `/`.
#[must_use]
pub fn has_trailing_slash(input: &str) -> bool {
    input.trim().ends_with('/')
}

/// Returns `true` for a `{name}` path parameter placeholder.
#[must_use]
pub fn is_path_parameter(input: &str) -> bool {
    PATH_PARAMETER.is_match(input)
}

/// Returns `true` for camelCase words.
#[must_use]
pub fn is_camel_case(input: &str) -> bool {
    CAMEL_CASE.is_match(input)
}

/// Returns `true` for PascalCase words.
#[must_use]
pub fn is_pascal_case(input: &str) -> bool {
    PASCAL_CASE.is_match(input)
}

/// Returns `true` for lowercase words separated by hyphens.
#[must_use]
pub fn is_kebab_case(input: &str) -> bool {
    KEBAB_CASE.is_match(input)
}

/// Returns `true` for snake_case identifiers.
#[must_use]
pub fn is_snake_case(input: &str) -> bool {
    SNAKE_CASE.is_match(input)
}

/// Returns `true` for version-shaped segments such as `v1` or `V42`.
#[must_use]
pub fn is_version_segment(input: &str) -> bool {
    VERSION_SEGMENT.is_match(input)
}

/// Returns `true` for `application/json` or `application/problem+json`.
#[must_use]
pub fn is_application_json_or_problem_json(media_type: &str) -> bool {
    APPLICATION_PROBLEM_JSON.is_match(media_type)
}

/// Returns `true` for custom media types carrying a versioning suffix,
/// e.g. `application/x.zalando.contract+json;v=2`.
#[must_use]
pub fn is_custom_media_type_with_versioning(media_type: &str) -> bool {
    CUSTOM_WITH_VERSIONING.is_match(media_type)
}
