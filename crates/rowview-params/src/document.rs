//! Shared plumbing for the document views.

use crate::schema::{self, Schema};
use crate::{ParamsError, loader};
use log::debug;
use serde_json::Value;
use std::fmt;
use std::marker::PhantomData;
use std::path::Path;

/// A document that passed the schema of `D`.
///
/// Only [`Document::from_value`] can produce one, so a view cannot be built
/// around a document that skipped validation:
///
/// ```compile_fail
/// use rowview_params::{Document, Properties, Validated};
/// use serde_json::json;
///
/// let document = Validated::<Properties>(json!({ "mode": "diagonal" }), Default::default());
/// let props = Properties::from_validated(document);
/// ```
pub struct Validated<D>(Value, PhantomData<fn() -> D>);

impl<D> Validated<D> {
    pub(crate) fn into_value(self) -> Value {
        self.0
    }
}

impl<D> fmt::Debug for Validated<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Validated").field(&self.0).finish()
    }
}

/// A document kind with a fixed schema and a typed view over it.
pub trait Document: Sized {
    /// Name used in logs and load errors.
    const KIND: &'static str;

    /// Schema every document of this kind must satisfy.
    fn schema() -> &'static Schema;

    /// Wrap a validated document without further checks.
    fn from_validated(document: Validated<Self>) -> Self;

    /// Validate `document` and wrap it.
    fn from_value(document: Value) -> Result<Self, ParamsError> {
        debug!("validating {} document", Self::KIND);
        schema::validate(&document, Self::schema())?;
        Ok(Self::from_validated(Validated(document, PhantomData)))
    }

    /// Parse JSON5 text and validate it.
    fn load_from_str(contents: &str) -> Result<Self, ParamsError> {
        Self::from_value(loader::parse_str(contents)?)
    }

    /// Read a JSON5 file and validate it.
    fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ParamsError> {
        loader::load_document(path.as_ref())
    }
}

/// Look up a field the schema guarantees to be present.
pub(crate) fn field<'a>(document: &'a Value, pointer: &str) -> &'a Value {
    document
        .pointer(pointer)
        .unwrap_or_else(|| panic!("validated document is missing {pointer}"))
}

pub(crate) fn field_u64(document: &Value, pointer: &str) -> u64 {
    whole_number(field(document, pointer))
        .unwrap_or_else(|| panic!("validated field {pointer} is not a positive integer"))
}

/// Read a non-negative integral number, including floats such as `2.0`.
pub(crate) fn whole_number(value: &Value) -> Option<u64> {
    value.as_u64().or_else(|| {
        value
            .as_f64()
            .filter(|number| number.fract() == 0.0 && (0.0..=u64::MAX as f64).contains(number))
            .map(|number| number as u64)
    })
}

pub(crate) fn field_str<'a>(document: &'a Value, pointer: &str) -> &'a str {
    field(document, pointer)
        .as_str()
        .unwrap_or_else(|| panic!("validated field {pointer} is not a string"))
}

pub(crate) fn field_array<'a>(document: &'a Value, pointer: &str) -> &'a [Value] {
    match field(document, pointer) {
        Value::Array(elements) => elements,
        _ => panic!("validated field {pointer} is not an array"),
    }
}
