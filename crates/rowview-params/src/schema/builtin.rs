//! Embedded schemas for the three document kinds.

use super::Schema;

/// Values accepted for the `mode` layout property.
pub const LAYOUT_MODES: &[&str] = &["columns", "rows"];

const POSITIVE_INTEGER: Schema = Schema::Integer { minimum: Some(1) };
const STRING: Schema = Schema::String { one_of: None };

/// Layout settings: row geometry, font and layout mode.
pub static PROPERTIES_SCHEMA: Schema = Schema::Object {
    properties: &[
        (
            "rows",
            Schema::Object {
                properties: &[
                    ("height", POSITIVE_INTEGER),
                    ("spacing", POSITIVE_INTEGER),
                    ("critical_value_size", POSITIVE_INTEGER),
                ],
                required: &["height", "spacing"],
            },
        ),
        (
            "font",
            Schema::Object {
                properties: &[("size", POSITIVE_INTEGER)],
                required: &["size"],
            },
        ),
        (
            "mode",
            Schema::String {
                one_of: Some(LAYOUT_MODES),
            },
        ),
    ],
    required: &["rows", "font", "mode"],
};

/// Localized UI strings.
pub static MESSAGES_SCHEMA: Schema = Schema::Object {
    properties: &[("main_window_caption", STRING)],
    required: &["main_window_caption"],
};

const DATA_ITEM: Schema = Schema::Object {
    properties: &[("name", STRING), ("value", STRING)],
    required: &["name", "value"],
};

const DATA_GROUP: Schema = Schema::Object {
    properties: &[
        ("name", STRING),
        (
            "data",
            Schema::Array {
                items: &DATA_ITEM,
                min_items: 1,
            },
        ),
    ],
    required: &["name", "data"],
};

/// Non-empty list of named groups, each holding non-empty name/value items.
pub static DATA_SCHEMA: Schema = Schema::Array {
    items: &DATA_GROUP,
    min_items: 1,
};
