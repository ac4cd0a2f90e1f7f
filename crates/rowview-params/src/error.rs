//! Error types for document validation and loading.

use crate::path::DocumentPath;
use std::path::PathBuf;
use thiserror::Error;

/// Errors returned while validating or loading documents.
#[derive(Debug, Error)]
pub enum ParamsError {
    /// The document does not satisfy its schema.
    #[error("{message} (path: {path})")]
    Schema { message: String, path: DocumentPath },
    /// Reading a document file failed.
    #[error("failed to read document: {0}")]
    Read(#[from] std::io::Error),
    /// Parsing document text failed.
    #[error("failed to parse document: {0}")]
    Parse(#[from] json5::Error),
    /// Loading a document from disk failed.
    #[error("{kind} document {}: {source}", path.display())]
    Document {
        kind: &'static str,
        path: PathBuf,
        source: Box<ParamsError>,
    },
}

impl ParamsError {
    pub(crate) fn schema(message: impl Into<String>, path: DocumentPath) -> Self {
        Self::Schema {
            message: message.into(),
            path,
        }
    }

    /// Wrap an error with the kind and location of the document it came from.
    pub(crate) fn in_document(self, kind: &'static str, path: impl Into<PathBuf>) -> Self {
        Self::Document {
            kind,
            path: path.into(),
            source: Box::new(self),
        }
    }

    /// Structural path of the schema violation, if this error is one.
    pub fn violation_path(&self) -> Option<&DocumentPath> {
        match self {
            Self::Schema { path, .. } => Some(path),
            Self::Document { source, .. } => source.violation_path(),
            Self::Read(_) | Self::Parse(_) => None,
        }
    }

    /// Violation message without the rendered path.
    pub fn violation_message(&self) -> Option<&str> {
        match self {
            Self::Schema { message, .. } => Some(message),
            Self::Document { source, .. } => source.violation_message(),
            Self::Read(_) | Self::Parse(_) => None,
        }
    }
}
