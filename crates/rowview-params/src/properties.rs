//! Layout settings view.

use crate::ParamsError;
use crate::document::{self, Document, Validated};
use crate::schema::{PROPERTIES_SCHEMA, Schema};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// How groups are laid out on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    Columns,
    Rows,
}

impl LayoutMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Columns => "columns",
            Self::Rows => "rows",
        }
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated layout settings document.
#[derive(Debug, Clone, PartialEq)]
pub struct Properties {
    document: Value,
}

impl Properties {
    /// Validate `document` against the properties schema.
    pub fn new(document: Value) -> Result<Self, ParamsError> {
        Self::from_value(document)
    }

    /// Height of a single row.
    pub fn row_height(&self) -> u64 {
        document::field_u64(&self.document, "/rows/height")
    }

    /// Gap between adjacent rows.
    pub fn rows_spacing(&self) -> u64 {
        document::field_u64(&self.document, "/rows/spacing")
    }

    /// Size of the critical value marker, when configured.
    pub fn critical_value_size(&self) -> Option<u64> {
        self.document
            .pointer("/rows/critical_value_size")
            .and_then(document::whole_number)
    }

    pub fn font_size(&self) -> u64 {
        document::field_u64(&self.document, "/font/size")
    }

    /// Layout mode exactly as written in the document.
    pub fn mode(&self) -> &str {
        document::field_str(&self.document, "/mode")
    }

    pub fn layout_mode(&self) -> LayoutMode {
        match self.mode() {
            "columns" => LayoutMode::Columns,
            "rows" => LayoutMode::Rows,
            other => unreachable!("validated layout mode {other:?}"),
        }
    }

    /// The underlying document.
    pub fn as_value(&self) -> &Value {
        &self.document
    }

    pub fn into_value(self) -> Value {
        self.document
    }
}

impl Document for Properties {
    const KIND: &'static str = "properties";

    fn schema() -> &'static Schema {
        &PROPERTIES_SCHEMA
    }

    fn from_validated(document: Validated<Self>) -> Self {
        Self {
            document: document.into_value(),
        }
    }
}

impl TryFrom<Value> for Properties {
    type Error = ParamsError;

    fn try_from(document: Value) -> Result<Self, Self::Error> {
        Self::new(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::LAYOUT_MODES;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn reads_every_field() {
        let props = Properties::new(json!({
            "rows": { "height": 10, "spacing": 2 },
            "font": { "size": 12 },
            "mode": "rows"
        }))
        .expect("properties");
        assert_eq!(props.row_height(), 10);
        assert_eq!(props.rows_spacing(), 2);
        assert_eq!(props.critical_value_size(), None);
        assert_eq!(props.font_size(), 12);
        assert_eq!(props.mode(), "rows");
        assert_eq!(props.layout_mode(), LayoutMode::Rows);
    }

    #[test]
    fn reads_optional_critical_value_size() {
        let props = Properties::new(json!({
            "rows": { "height": 24, "spacing": 4, "critical_value_size": 3 },
            "font": { "size": 14 },
            "mode": "columns"
        }))
        .expect("properties");
        assert_eq!(props.critical_value_size(), Some(3));
        assert_eq!(props.layout_mode(), LayoutMode::Columns);
    }

    #[test]
    fn rejects_height_below_minimum() {
        let err = Properties::new(json!({
            "rows": { "height": 0, "spacing": 2 },
            "font": { "size": 12 },
            "mode": "rows"
        }))
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"0 is less than the minimum of 1 (path: ["rows"]["height"])"#
        );
    }

    #[test]
    fn reads_integral_floats() {
        let props = Properties::new(json!({
            "rows": { "height": 2.0, "spacing": 1, "critical_value_size": 3.0 },
            "font": { "size": 12.0 },
            "mode": "rows"
        }))
        .expect("integral floats are integers");
        assert_eq!(props.row_height(), 2);
        assert_eq!(props.critical_value_size(), Some(3));
        assert_eq!(props.font_size(), 12);
    }

    #[test]
    fn rejects_fractional_height() {
        let err = Properties::new(json!({
            "rows": { "height": 2.5, "spacing": 1 },
            "font": { "size": 12 },
            "mode": "rows"
        }))
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"2.5 is not of type 'integer' (path: ["rows"]["height"])"#
        );
    }

    #[test]
    fn keeps_document_unchanged() {
        let document = json!({
            "rows": { "height": 10, "spacing": 2 },
            "font": { "size": 12 },
            "mode": "rows"
        });
        let props = Properties::try_from(document.clone()).expect("properties");
        assert_eq!(props.as_value(), &document);
        assert_eq!(props.into_value(), document);
    }

    #[test]
    fn layout_mode_names_match_schema() {
        let names: Vec<&str> = [LayoutMode::Columns, LayoutMode::Rows]
            .into_iter()
            .map(LayoutMode::as_str)
            .collect();
        assert_eq!(names, LAYOUT_MODES);
        assert_eq!(
            serde_json::to_value(LayoutMode::Columns).expect("serialize"),
            json!("columns")
        );
    }
}
