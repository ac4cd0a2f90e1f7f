//! Declarative document schemas and the validator that checks them.
//!
//! Schemas are closed: an object accepts exactly the properties it declares.
//! Validation stops at the first violation and reports it together with the
//! structural path of the offending node.
//!
//! Per node the checks run in this order:
//! - type;
//! - objects: required keys (declared order), undeclared keys (map order),
//!   then each present property (declared order);
//! - arrays: minimum length, then each item (index order);
//! - integers: minimum; strings: allowed values.
//!
//! This is a depth-first order, so a nested violation in an early property
//! is reported before a shallow one in a later property. jsonschema's
//! `best_match` would prefer the shallower one instead.
//!
//! Integral floats such as `2.0` satisfy an integer schema.

mod builtin;
mod repr;


pub use builtin::{DATA_SCHEMA, LAYOUT_MODES, MESSAGES_SCHEMA, PROPERTIES_SCHEMA};

use crate::ParamsError;
use crate::path::{DocumentPath, PathStep};
use log::debug;
use repr::{Repr, quoted};
use serde_json::{Number, Value};

/// Expected shape of a document node.
#[derive(Debug)]
pub enum Schema {
    /// Closed object: only `properties` may appear, `required` must appear.
    Object {
        properties: &'static [(&'static str, Schema)],
        required: &'static [&'static str],
    },
    /// Array whose every item matches `items`.
    Array {
        items: &'static Schema,
        min_items: usize,
    },
    /// Integral number with an optional inclusive lower bound.
    Integer { minimum: Option<i64> },
    /// String, optionally restricted to a fixed set of values.
    String { one_of: Option<&'static [&'static str]> },
}

impl Schema {
    /// JSON type name used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Object { .. } => "object",
            Self::Array { .. } => "array",
            Self::Integer { .. } => "integer",
            Self::String { .. } => "string",
        }
    }

    /// Schema of a declared object property.
    pub fn property(&self, name: &str) -> Option<&Schema> {
        match self {
            Self::Object { properties, .. } => properties
                .iter()
                .find(|(declared, _)| *declared == name)
                .map(|(_, schema)| schema),
            _ => None,
        }
    }
}

/// Check `document` against `schema`, reporting the first violation.
pub fn validate(document: &Value, schema: &Schema) -> Result<(), ParamsError> {
    let mut walker = Walker { path: Vec::new() };
    walker.check(document, schema).inspect_err(|err| {
        debug!("schema violation: {err}");
    })
}

/// Recursive descent over a document, tracking the current path.
struct Walker {
    path: Vec<PathStep>,
}

impl Walker {
    fn check(&mut self, value: &Value, schema: &Schema) -> Result<(), ParamsError> {
        match schema {
            Schema::Object {
                properties,
                required,
            } => {
                let Value::Object(map) = value else {
                    return Err(self.type_mismatch(value, schema));
                };
                for key in *required {
                    if !map.contains_key(*key) {
                        let message = format!("{} is a required property", quoted(key));
                        return Err(self.violation(message));
                    }
                }
                let unexpected: Vec<String> = map
                    .keys()
                    .filter(|key| schema.property(key).is_none())
                    .map(|key| quoted(key))
                    .collect();
                if !unexpected.is_empty() {
                    let verb = if unexpected.len() == 1 { "was" } else { "were" };
                    return Err(self.violation(format!(
                        "Additional properties are not allowed ({} {verb} unexpected)",
                        unexpected.join(", ")
                    )));
                }
                for (name, property) in *properties {
                    if let Some(child) = map.get(*name) {
                        self.descend(PathStep::from(*name), child, property)?;
                    }
                }
                Ok(())
            }
            Schema::Array { items, min_items } => {
                let Value::Array(elements) = value else {
                    return Err(self.type_mismatch(value, schema));
                };
                if elements.len() < *min_items {
                    return Err(self.violation(format!("{} is too short", Repr(value))));
                }
                for (idx, element) in elements.iter().enumerate() {
                    self.descend(PathStep::Index(idx), element, items)?;
                }
                Ok(())
            }
            Schema::Integer { minimum } => {
                let Value::Number(number) = value else {
                    return Err(self.type_mismatch(value, schema));
                };
                if !is_integral(number) {
                    return Err(self.type_mismatch(value, schema));
                }
                if let Some(minimum) = minimum {
                    if is_below(number, *minimum) {
                        return Err(self.violation(format!(
                            "{} is less than the minimum of {minimum}",
                            Repr(value)
                        )));
                    }
                }
                Ok(())
            }
            Schema::String { one_of } => {
                let Value::String(text) = value else {
                    return Err(self.type_mismatch(value, schema));
                };
                if let Some(allowed) = one_of {
                    if !allowed.contains(&text.as_str()) {
                        let names: Vec<String> = allowed.iter().map(|name| quoted(name)).collect();
                        return Err(self.violation(format!(
                            "{} is not one of [{}]",
                            Repr(value),
                            names.join(", ")
                        )));
                    }
                }
                Ok(())
            }
        }
    }

    fn descend(
        &mut self,
        step: PathStep,
        value: &Value,
        schema: &Schema,
    ) -> Result<(), ParamsError> {
        self.path.push(step);
        let result = self.check(value, schema);
        self.path.pop();
        result
    }

    fn type_mismatch(&self, value: &Value, schema: &Schema) -> ParamsError {
        self.violation(format!(
            "{} is not of type {}",
            Repr(value),
            quoted(schema.type_name())
        ))
    }

    fn violation(&self, message: String) -> ParamsError {
        ParamsError::schema(message, DocumentPath::from(self.path.clone()))
    }
}

/// Integers, and floats without a fractional part such as `2.0`.
fn is_integral(number: &Number) -> bool {
    number.is_i64() || number.is_u64() || number.as_f64().is_some_and(|n| n.fract() == 0.0)
}

fn is_below(number: &Number, minimum: i64) -> bool {
    if let Some(actual) = number.as_i64() {
        actual < minimum
    } else if number.is_u64() {
        false
    } else {
        number.as_f64().is_some_and(|actual| actual < minimum as f64)
    }
}
