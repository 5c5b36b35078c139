//! # api-lint-rules
//!
//! Built-in API design rules for api-lint.
//!
//! Each rule is an independent [`api_lint_core::Rule`] implementation over
//! the parsed document model:
//!
//! - `every-second-path-level-parameter` (AP001) - collection/identifier path alternation
//! - `avoid-trailing-slash` (AP002) - no trailing slashes in path templates
//! - `avoid-link-header` (AP003) - no Link headers on operations/responses
//! - `kebab-case-path-segments` (AP004) - lowercase-hyphenated literal segments
//! - `no-version-in-uri` (AP005) - no version numbers in URIs
//! - `snake-case-query-parameters` (AP006) - snake_case query parameter names
//! - `prefer-standard-media-types` (AP007) - standard JSON media types
//! - `limit-resource-count` (AP008) - bounded number of path templates

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod avoid_link_header;
pub mod avoid_trailing_slash;
pub mod every_second_path_level_parameter;
pub mod kebab_case_path_segments;
pub mod limit_resource_count;
pub mod no_version_in_uri;
pub mod prefer_standard_media_types;
mod registry;
pub mod snake_case_query_parameters;

pub use avoid_link_header::AvoidLinkHeader;
pub use avoid_trailing_slash::AvoidTrailingSlash;
pub use every_second_path_level_parameter::EverySecondPathLevelParameter;
pub use kebab_case_path_segments::KebabCasePathSegments;
pub use limit_resource_count::LimitResourceCount;
pub use no_version_in_uri::NoVersionInUri;
pub use prefer_standard_media_types::PreferStandardMediaTypes;
pub use registry::{all_rules, configured_rules};
pub use snake_case_query_parameters::SnakeCaseQueryParameters;
