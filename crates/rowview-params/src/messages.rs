//! Localized UI strings view.

use crate::ParamsError;
use crate::document::{self, Document, Validated};
use crate::schema::{MESSAGES_SCHEMA, Schema};
use serde_json::Value;
use std::fmt;
use std::ops::Index;
use std::str::FromStr;
use thiserror::Error;

/// Identifier of a message declared by the messages schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    MainWindowCaption,
}

impl MessageKey {
    /// Every declared message key.
    pub const ALL: &'static [MessageKey] = &[MessageKey::MainWindowCaption];

    /// Key as it appears in the document.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MainWindowCaption => "main_window_caption",
        }
    }

    fn pointer(self) -> String {
        format!("/{}", self.as_str())
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing a key the messages schema does not declare.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown message key {0:?}")]
pub struct UnknownMessageKey(pub String);

impl FromStr for MessageKey {
    type Err = UnknownMessageKey;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|candidate| candidate.as_str() == key)
            .ok_or_else(|| UnknownMessageKey(key.to_string()))
    }
}

/// Validated UI strings document.
#[derive(Debug, Clone, PartialEq)]
pub struct Messages {
    document: Value,
}

impl Messages {
    /// Validate `document` against the messages schema.
    pub fn new(document: Value) -> Result<Self, ParamsError> {
        Self::from_value(document)
    }

    pub fn get(&self, key: MessageKey) -> &str {
        document::field_str(&self.document, &key.pointer())
    }

    /// Look up a message by its document key.
    ///
    /// Only keys declared by the schema resolve; anything else is `None`.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        key.parse().ok().map(|key| self.get(key))
    }

    pub fn main_window_caption(&self) -> &str {
        self.get(MessageKey::MainWindowCaption)
    }

    pub fn as_value(&self) -> &Value {
        &self.document
    }

    pub fn into_value(self) -> Value {
        self.document
    }
}

impl Index<MessageKey> for Messages {
    type Output = str;

    fn index(&self, key: MessageKey) -> &str {
        self.get(key)
    }
}

impl Document for Messages {
    const KIND: &'static str = "messages";

    fn schema() -> &'static Schema {
        &MESSAGES_SCHEMA
    }

    fn from_validated(document: Validated<Self>) -> Self {
        Self {
            document: document.into_value(),
        }
    }
}

impl TryFrom<Value> for Messages {
    type Error = ParamsError;

    fn try_from(document: Value) -> Result<Self, Self::Error> {
        Self::new(document)
    }
}
