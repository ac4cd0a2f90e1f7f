//! Printable summary of a loaded content directory.

use rowview_params::{ContentSet, LayoutMode};
use serde::Serialize;
use std::fmt::Write;

/// Borrowed snapshot of a content set, ready for text or JSON output.
#[derive(Debug, Serialize)]
pub struct ContentReport<'a> {
    pub caption: &'a str,
    pub layout: LayoutReport,
    pub groups: Vec<GroupReport<'a>>,
}

/// Layout settings as shown in a report.
#[derive(Debug, Serialize)]
pub struct LayoutReport {
    pub mode: LayoutMode,
    pub row_height: u64,
    pub rows_spacing: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub critical_value_size: Option<u64>,
    pub font_size: u64,
}

#[derive(Debug, Serialize)]
pub struct GroupReport<'a> {
    pub name: &'a str,
    pub items: Vec<ItemReport<'a>>,
}

#[derive(Debug, Serialize)]
pub struct ItemReport<'a> {
    pub name: &'a str,
    pub value: &'a str,
}

impl<'a> ContentReport<'a> {
    pub fn new(content: &'a ContentSet) -> Self {
        let props = &content.properties;
        Self {
            caption: content.messages.main_window_caption(),
            layout: LayoutReport {
                mode: props.layout_mode(),
                row_height: props.row_height(),
                rows_spacing: props.rows_spacing(),
                critical_value_size: props.critical_value_size(),
                font_size: props.font_size(),
            },
            groups: content
                .data
                .iter()
                .map(|group| GroupReport {
                    name: group.name(),
                    items: group
                        .iter()
                        .map(|item| ItemReport {
                            name: item.name(),
                            value: item.value(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }

    /// Human-readable rendering, one line per group and item.
    pub fn render_text(&self) -> String {
        let layout = &self.layout;
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.caption);
        let _ = writeln!(
            out,
            "layout: {} (row height {}, spacing {}, font size {})",
            layout.mode, layout.row_height, layout.rows_spacing, layout.font_size
        );
        if let Some(size) = layout.critical_value_size {
            let _ = writeln!(out, "critical value size: {size}");
        }
        for group in &self.groups {
            let _ = writeln!(out, "{} ({} items)", group.name, group.items.len());
            for item in &group.items {
                let _ = writeln!(out, "  {} = {}", item.name, item.value);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rowview_params::{Data, Messages, Properties};
    use serde_json::json;

    fn content() -> ContentSet {
        ContentSet {
            properties: Properties::new(json!({
                "rows": { "height": 20, "spacing": 3 },
                "font": { "size": 10 },
                "mode": "columns"
            }))
            .expect("properties"),
            messages: Messages::new(json!({ "main_window_caption": "Station 4" }))
                .expect("messages"),
            data: Data::new(json!([
                { "name": "air", "data": [
                    { "name": "humidity", "value": "40%" },
                    { "name": "pressure", "value": "1013 hPa" }
                ] }
            ]))
            .expect("data"),
        }
    }

    #[test]
    fn renders_text_tree() {
        let content = content();
        let text = ContentReport::new(&content).render_text();
        assert_eq!(
            text,
            "Station 4\n\
             layout: columns (row height 20, spacing 3, font size 10)\n\
             air (2 items)\n  humidity = 40%\n  pressure = 1013 hPa\n"
        );
    }

    #[test]
    fn serializes_to_json() {
        let content = content();
        let value = serde_json::to_value(ContentReport::new(&content)).expect("json");
        assert_eq!(
            value,
            json!({
                "caption": "Station 4",
                "layout": {
                    "mode": "columns",
                    "row_height": 20,
                    "rows_spacing": 3,
                    "font_size": 10
                },
                "groups": [{
                    "name": "air",
                    "items": [
                        { "name": "humidity", "value": "40%" },
                        { "name": "pressure", "value": "1013 hPa" }
                    ]
                }]
            })
        );
    }
}
