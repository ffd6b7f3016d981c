//! Error types for the swaggen-core crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a generation run.
///
/// Unsupported composition schemas and operations without a success response
/// are not errors: they are logged and degraded instead.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GenerateError {
    /// The source document could not be read.
    #[error("failed to read API document: {}", path.display())]
    Read {
        /// Path of the document.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The document is neither valid JSON nor valid YAML.
    #[error("failed to parse API document: {0}")]
    Parse(String),

    /// The document has no `swagger` or `openapi` version marker.
    #[error("document has no `swagger` or `openapi` version marker")]
    MissingVersion,

    /// The version marker names a dialect other than 2.x or 3.x.
    #[error("unsupported document version: {0}")]
    UnsupportedVersion(String),

    /// The dialect's model definitions map is absent.
    #[error("document has no model definitions (`definitions` or `components.schemas`)")]
    MissingDefinitions,

    /// A section of the document does not have the expected shape.
    #[error("malformed document: {0}")]
    MalformedDocument(String),

    /// A parameter, request body or response `$ref` does not point at a
    /// declared reusable object.
    #[error("unresolved reference: {0}")]
    UnresolvedReference(String),

    /// The destination directory could not be created.
    #[error("failed to create output directory: {}", path.display())]
    CreateDir {
        /// Directory that was being created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A generated file could not be written.
    #[error("failed to write generated file: {}", path.display())]
    Write {
        /// File that was being written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Result alias used throughout the crate.
pub type Result<T, E = GenerateError> = std::result::Result<T, E>;
