//! Read-only document model for a parsed API description.
//!
//! Rules receive a shared [`ApiDocument`] and never mutate it. The model
//! derives `serde::Deserialize` so loaders stay plain serde; the engine
//! itself never parses raw API description text. Fields that no rule reads
//! are simply absent from the model and ignored during deserialization.

use serde::Deserialize;
use std::collections::BTreeMap;

/// A parsed API description: the paths tree plus the metadata rules read.
///
/// Path templates are unique by construction (map keys) and iterate in
/// lexical order, which keeps rule output deterministic.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiDocument {
    /// Base path prefix applied to all paths, e.g. `/api/v1`.
    #[serde(default, rename = "basePath")]
    pub base_path: Option<String>,
    /// Path templates mapped to their operations.
    #[serde(default)]
    pub paths: BTreeMap<String, PathItem>,
}

impl ApiDocument {
    /// Returns `true` if the document declares no paths.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Iterates over `(template, operations)` pairs in lexical order.
    pub fn paths(&self) -> impl Iterator<Item = (&str, &PathItem)> {
        self.paths.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// The operations declared under one path template.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathItem {
    /// GET operation.
    #[serde(default)]
    pub get: Option<Operation>,
    /// PUT operation.
    #[serde(default)]
    pub put: Option<Operation>,
    /// POST operation.
    #[serde(default)]
    pub post: Option<Operation>,
    /// DELETE operation.
    #[serde(default)]
    pub delete: Option<Operation>,
    /// OPTIONS operation.
    #[serde(default)]
    pub options: Option<Operation>,
    /// HEAD operation.
    #[serde(default)]
    pub head: Option<Operation>,
    /// PATCH operation.
    #[serde(default)]
    pub patch: Option<Operation>,
}

impl PathItem {
    /// Iterates over declared operations in fixed method order.
    pub fn operations(&self) -> impl Iterator<Item = (HttpMethod, &Operation)> {
        [
            (HttpMethod::Get, self.get.as_ref()),
            (HttpMethod::Put, self.put.as_ref()),
            (HttpMethod::Post, self.post.as_ref()),
            (HttpMethod::Delete, self.delete.as_ref()),
            (HttpMethod::Options, self.options.as_ref()),
            (HttpMethod::Head, self.head.as_ref()),
            (HttpMethod::Patch, self.patch.as_ref()),
        ]
        .into_iter()
        .filter_map(|(method, op)| op.map(|op| (method, op)))
    }
}

/// HTTP methods a path item can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HttpMethod {
    /// GET
    Get,
    /// PUT
    Put,
    /// POST
    Post,
    /// DELETE
    Delete,
    /// OPTIONS
    Options,
    /// HEAD
    Head,
    /// PATCH
    Patch,
}

impl HttpMethod {
    /// Lowercase method name as it appears in the document, e.g. `get`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Put => "put",
            Self::Post => "post",
            Self::Delete => "delete",
            Self::Options => "options",
            Self::Head => "head",
            Self::Patch => "patch",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single operation (method + metadata) on a path.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Operation {
    /// One-line summary.
    #[serde(default)]
    pub summary: Option<String>,
    /// Longer description.
    #[serde(default)]
    pub description: Option<String>,
    /// Declared parameters.
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    /// Response media types the operation can produce.
    #[serde(default)]
    pub produces: Vec<String>,
    /// Responses keyed by status code (or `default`).
    #[serde(default)]
    pub responses: BTreeMap<String, Response>,
}

/// A declared operation parameter.
#[derive(Debug, Clone, Deserialize)]
pub struct Parameter {
    /// Parameter name.
    pub name: String,
    /// Where the parameter lives.
    #[serde(rename = "in")]
    pub location: ParameterLocation,
}

/// Where a parameter is carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParameterLocation {
    /// Query string.
    Query,
    /// Request header.
    Header,
    /// Path template substitution.
    Path,
    /// Request body.
    Body,
    /// Form data.
    FormData,
}

/// A declared response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Response {
    /// Response description.
    #[serde(default)]
    pub description: Option<String>,
    /// Declared response headers keyed by header name.
    #[serde(default)]
    pub headers: BTreeMap<String, Header>,
}

/// A declared response header.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Header {
    /// Header description.
    #[serde(default)]
    pub description: Option<String>,
    /// Declared value type.
    #[serde(default, rename = "type")]
    pub data_type: Option<String>,
}
