//! # api-lint-core
//!
//! Core framework for linting HTTP API descriptions against style rules.
//!
//! This crate provides the foundational traits and types for building API
//! style linters. It includes:
//!
//! - [`Rule`] trait for convention checks over a parsed document
//! - [`ApiDocument`] read-only document model
//! - [`PathTemplate`] structural analysis of path strings
//! - [`RuleEngine`] for orchestrating lint execution
//! - [`Violation`] and [`LintReport`] for representing findings
//!
//! ## Example
//!
//! ```ignore
//! use api_lint_core::RuleEngine;
//!
//! let engine = RuleEngine::builder()
//!     .rule(MyRule::new())
//!     .config(config)
//!     .build();
//!
//! let report = engine.run(&document);
//! for violation in &report.violations {
//!     println!("{violation}");
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod document;
mod engine;
mod path_template;
mod rule;
mod types;

/// Naming and media-type predicates shared by rule implementations.
pub mod pattern;

pub use config::{Config, ConfigError, RuleConfig};
pub use document::{
    ApiDocument, Header, HttpMethod, Operation, Parameter, ParameterLocation, PathItem, Response,
};
pub use engine::{RuleEngine, RuleEngineBuilder};
pub use path_template::{PathTemplate, Segment};
pub use rule::{Rule, RuleBox};
pub use types::{
    Diagnostic, DiagnosticKind, LintReport, Location, ParseSeverityError, Severity, SeverityCounts,
    Violation,
};
