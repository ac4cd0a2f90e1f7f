//! Grouped display data view.
//!
//! [`Data`] owns the validated document. [`DataGroup`] and [`DataItem`] are
//! `Copy` handles borrowing a fragment of it; they are created on every
//! index or iteration step and never cached.

use crate::ParamsError;
use crate::document::{self, Document, Validated};
use crate::schema::{DATA_SCHEMA, Schema};
use serde_json::Value;
use std::iter::FusedIterator;
use std::slice;

/// Validated grouped data document.
#[derive(Debug, Clone, PartialEq)]
pub struct Data {
    document: Value,
}

impl Data {
    /// Validate `document` against the data schema.
    pub fn new(document: Value) -> Result<Self, ParamsError> {
        Self::from_value(document)
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups().len()
    }

    /// Always false for validated data.
    pub fn is_empty(&self) -> bool {
        self.groups().is_empty()
    }

    pub fn get(&self, index: usize) -> Option<DataGroup<'_>> {
        self.groups().get(index).map(DataGroup::new)
    }

    /// Iterate groups in document order; every call starts from the first.
    pub fn iter(&self) -> Groups<'_> {
        Fragments::new(self.groups(), DataGroup::new)
    }

    pub fn as_value(&self) -> &Value {
        &self.document
    }

    pub fn into_value(self) -> Value {
        self.document
    }

    fn groups(&self) -> &[Value] {
        document::field_array(&self.document, "")
    }
}

impl Document for Data {
    const KIND: &'static str = "data";

    fn schema() -> &'static Schema {
        &DATA_SCHEMA
    }

    fn from_validated(document: Validated<Self>) -> Self {
        Self {
            document: document.into_value(),
        }
    }
}

impl TryFrom<Value> for Data {
    type Error = ParamsError;

    fn try_from(document: Value) -> Result<Self, Self::Error> {
        Self::new(document)
    }
}

impl<'a> IntoIterator for &'a Data {
    type Item = DataGroup<'a>;
    type IntoIter = Groups<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A named group of items inside [`Data`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataGroup<'a> {
    fragment: &'a Value,
}

impl<'a> DataGroup<'a> {
    fn new(fragment: &'a Value) -> Self {
        Self { fragment }
    }

    pub fn name(&self) -> &'a str {
        document::field_str(self.fragment, "/name")
    }

    /// Number of items in the group.
    pub fn len(&self) -> usize {
        self.items().len()
    }

    /// Always false for validated data.
    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    pub fn get(&self, index: usize) -> Option<DataItem<'a>> {
        self.items().get(index).map(DataItem::new)
    }

    /// Iterate items in document order; every call starts from the first.
    pub fn iter(&self) -> Items<'a> {
        Fragments::new(self.items(), DataItem::new)
    }

    fn items(&self) -> &'a [Value] {
        document::field_array(self.fragment, "/data")
    }
}

impl<'a> IntoIterator for DataGroup<'a> {
    type Item = DataItem<'a>;
    type IntoIter = Items<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A single name/value entry of a [`DataGroup`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataItem<'a> {
    fragment: &'a Value,
}

impl<'a> DataItem<'a> {
    fn new(fragment: &'a Value) -> Self {
        Self { fragment }
    }

    pub fn name(&self) -> &'a str {
        document::field_str(self.fragment, "/name")
    }

    pub fn value(&self) -> &'a str {
        document::field_str(self.fragment, "/value")
    }
}

/// Lazily wraps each element of a validated array as it is reached.
#[derive(Debug, Clone)]
pub struct Fragments<'a, V> {
    inner: slice::Iter<'a, Value>,
    wrap: fn(&'a Value) -> V,
}

/// Iterator over the groups of [`Data`].
pub type Groups<'a> = Fragments<'a, DataGroup<'a>>;
/// Iterator over the items of a [`DataGroup`].
pub type Items<'a> = Fragments<'a, DataItem<'a>>;

impl<'a, V> Fragments<'a, V> {
    fn new(elements: &'a [Value], wrap: fn(&'a Value) -> V) -> Self {
        Self {
            inner: elements.iter(),
            wrap,
        }
    }
}

impl<'a, V> Iterator for Fragments<'a, V> {
    type Item = V;

    fn next(&mut self) -> Option<V> {
        self.inner.next().map(self.wrap)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    fn nth(&mut self, n: usize) -> Option<V> {
        self.inner.nth(n).map(self.wrap)
    }
}

impl<V> DoubleEndedIterator for Fragments<'_, V> {
    fn next_back(&mut self) -> Option<V> {
        self.inner.next_back().map(self.wrap)
    }
}

impl<V> ExactSizeIterator for Fragments<'_, V> {}

impl<V> FusedIterator for Fragments<'_, V> {}
