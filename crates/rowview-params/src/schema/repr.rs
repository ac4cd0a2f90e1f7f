//! Rendering of document values inside violation messages.
//!
//! Values are shown the way jsonschema diagnostics show them: strings in
//! single quotes, `True`/`False`/`None` for literals, `, ` between elements.

use serde_json::Value;
use std::fmt::{self, Write};

/// Display adapter for a value quoted in a violation message.
pub(crate) struct Repr<'a>(pub &'a Value);

impl fmt::Display for Repr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Value::Null => f.write_str("None"),
            Value::Bool(true) => f.write_str("True"),
            Value::Bool(false) => f.write_str("False"),
            Value::Number(number) => write!(f, "{number}"),
            Value::String(text) => write_str_literal(f, text),
            Value::Array(elements) => {
                f.write_char('[')?;
                for (idx, element) in elements.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", Repr(element))?;
                }
                f.write_char(']')
            }
            Value::Object(map) => {
                f.write_char('{')?;
                for (idx, (key, element)) in map.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write_str_literal(f, key)?;
                    write!(f, ": {}", Repr(element))?;
                }
                f.write_char('}')
            }
        }
    }
}

/// Quote a bare string the same way.
pub(crate) fn quoted(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    let _ = write_str_literal(&mut out, text);
    out
}

fn write_str_literal(out: &mut impl Write, text: &str) -> fmt::Result {
    // Double quotes only when that avoids escaping.
    let quote = if text.contains('\'') && !text.contains('"') {
        '"'
    } else {
        '\''
    };
    out.write_char(quote)?;
    for ch in text.chars() {
        match ch {
            '\\' => out.write_str("\\\\")?,
            '\n' => out.write_str("\\n")?,
            '\r' => out.write_str("\\r")?,
            '\t' => out.write_str("\\t")?,
            ch if ch == quote => write!(out, "\\{ch}")?,
            ch if ch.is_control() && (ch as u32) < 0x100 => write!(out, "\\x{:02x}", ch as u32)?,
            ch => out.write_char(ch)?,
        }
    }
    out.write_char(quote)
}
