//! Loading API definition files into the document model.
//!
//! The reader is selected by file extension: `.yml`/`.yaml` parse as YAML,
//! everything else as JSON. Both routes go through a `serde_json::Value`
//! intermediate so the document model deserializes identically either way.

use api_lint_core::ApiDocument;
use std::path::Path;

/// Errors turning a definition file into a document.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: std::path::PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The content is not valid JSON or YAML.
    #[error("failed to parse {format}: {message}")]
    Syntax {
        /// Format that was attempted ("JSON" or "YAML").
        format: &'static str,
        /// Parser error message.
        message: String,
    },

    /// The definition root is not an object.
    #[error("API definition root must be an object")]
    NotAnObject,

    /// The content does not match the document model.
    #[error("unexpected document shape: {0}")]
    Shape(#[from] serde_json::Error),
}

/// Loads an API definition from disk, picking the parser by extension.
pub fn load_document(path: &Path) -> Result<ApiDocument, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    if is_yaml_path(path) {
        parse_yaml(&content)
    } else {
        parse_json(&content)
    }
}

/// Parses a JSON API definition.
pub fn parse_json(content: &str) -> Result<ApiDocument, LoadError> {
    let value: serde_json::Value =
        serde_json::from_str(content).map_err(|e| LoadError::Syntax {
            format: "JSON",
            message: e.to_string(),
        })?;
    document_from_value(value)
}

/// Parses a YAML API definition through a JSON value intermediate.
pub fn parse_yaml(content: &str) -> Result<ApiDocument, LoadError> {
    let value: serde_json::Value =
        serde_saphyr::from_str(content).map_err(|e| LoadError::Syntax {
            format: "YAML",
            message: e.to_string(),
        })?;
    document_from_value(value)
}

fn document_from_value(value: serde_json::Value) -> Result<ApiDocument, LoadError> {
    if !value.is_object() {
        return Err(LoadError::NotAnObject);
    }
    Ok(serde_json::from_value(value)?)
}

fn is_yaml_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            let ext = ext.to_ascii_lowercase();
            ext == "yml" || ext == "yaml"
        })
}
