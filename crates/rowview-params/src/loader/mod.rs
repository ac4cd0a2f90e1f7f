//! Loading documents from JSON5 text and content directories.
//!
//! A content directory holds one file per document kind
//! (`properties.json5`, `messages.json5`, `data.json5`). Files are parsed with
//! `json5` into `serde_json::Value` and handed to the matching view, so JSON
//! and JSON5 (comments, trailing commas, unquoted keys) are both accepted.


use crate::{Data, Document, Messages, ParamsError, Properties};
use directories::UserDirs;
use log::{debug, info};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Layout settings file name inside a content directory.
pub const PROPERTIES_FILE: &str = "properties.json5";
/// UI strings file name inside a content directory.
pub const MESSAGES_FILE: &str = "messages.json5";
/// Grouped data file name inside a content directory.
pub const DATA_FILE: &str = "data.json5";
/// Default content directory under the home directory.
const DEFAULT_CONTENT_DIR: &str = ".rowview";

/// All three documents of a content directory, validated.
#[derive(Debug, Clone)]
pub struct ContentSet {
    pub properties: Properties,
    pub messages: Messages,
    pub data: Data,
}

impl ContentSet {
    /// Load and validate every document in `dir`.
    ///
    /// Fails on the first document that cannot be read, parsed or validated.
    pub fn load_from_dir(dir: impl AsRef<Path>) -> Result<Self, ParamsError> {
        let dir = dir.as_ref();
        info!("loading content from directory: {}", dir.display());
        let properties = Properties::load_from_path(dir.join(PROPERTIES_FILE))?;
        let messages = Messages::load_from_path(dir.join(MESSAGES_FILE))?;
        let data = Data::load_from_path(dir.join(DATA_FILE))?;
        info!("content loaded (groups={})", data.len());
        Ok(Self {
            properties,
            messages,
            data,
        })
    }
}

/// Parse JSON5 text into an untyped document.
pub fn parse_str(contents: &str) -> Result<Value, ParamsError> {
    debug!("parsing document from raw contents (len={})", contents.len());
    Ok(json5::from_str(contents)?)
}

/// Read and parse a JSON5 file into an untyped document.
pub fn read_path(path: impl AsRef<Path>) -> Result<Value, ParamsError> {
    let contents = fs::read_to_string(path)?;
    parse_str(&contents)
}

/// Read, parse and validate a single document file.
///
/// Errors are wrapped with the document kind and file path.
pub(crate) fn load_document<D: Document>(path: &Path) -> Result<D, ParamsError> {
    info!("loading {} document from path: {}", D::KIND, path.display());
    read_path(path)
        .and_then(D::from_value)
        .map_err(|err| err.in_document(D::KIND, path))
}

/// Default content directory (`~/.rowview`), if a home directory is known.
pub fn default_content_dir() -> Option<PathBuf> {
    UserDirs::new().map(|dirs| dirs.home_dir().join(DEFAULT_CONTENT_DIR))
}
