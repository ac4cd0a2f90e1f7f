//! Validated, read-only views over rowview content documents.
//!
//! Three document kinds are supported: layout [`Properties`], UI
//! [`Messages`] and grouped display [`Data`]. Each view validates its
//! backing `serde_json::Value` against a fixed schema once, at construction,
//! and afterwards reads fields straight out of the document.

mod document;
mod error;
mod path;

pub mod data;
pub mod loader;
pub mod messages;
pub mod properties;
pub mod schema;

/// Document kinds that can be validated, wrapped and loaded.
pub use document::{Document, Validated};
/// Public error type returned by validation and loading APIs.
pub use error::ParamsError;
/// Structural paths used in schema diagnostics.
pub use path::{DocumentPath, PathStep};

pub use data::{Data, DataGroup, DataItem, Groups, Items};
pub use loader::{ContentSet, default_content_dir};
pub use messages::{MessageKey, Messages, UnknownMessageKey};
pub use properties::{LayoutMode, Properties};
pub use schema::{Schema, validate};
