//! Key/value detail view for `show` commands.
//!
//! Renders one entity as a two-column Property/Value table, suppressing
//! hyperlink-style fields the way the original gateway clients do.

use comfy_table::{presets, Attribute, Cell, ContentArrangement, Table};
use serde_json::Value;

/// True for fields that carry hypermedia links rather than entity data.
fn is_link_field(key: &str) -> bool {
    key == "links" || key.ends_with("_links")
}

/// Render a JSON value as a plain cell string.
fn value_cell(value: &Value) -> String {
    match value {
        Value::Null => "-".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Render a serialized entity as a Property/Value table, link fields
/// suppressed. Non-object values render as a single `value` row.
pub fn detail_table(entity: &Value) -> String {
    let mut table = Table::new();
    table
        .load_preset(presets::ASCII_MARKDOWN)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Property").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

    match entity {
        Value::Object(map) => {
            for (key, value) in map {
                if is_link_field(key) {
                    continue;
                }
                table.add_row(vec![Cell::new(key), Cell::new(value_cell(value))]);
            }
        }
        other => {
            table.add_row(vec![Cell::new("value"), Cell::new(value_cell(other))]);
        }
    }

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn suppresses_link_fields() {
        let entity = json!({
            "id": "u-1",
            "name": "alice",
            "links": [{"rel": "self"}],
            "user_links": [{"rel": "bookmark"}],
        });
        let rendered = detail_table(&entity);
        assert!(rendered.contains("alice"));
        assert!(!rendered.contains("links"));
        assert!(!rendered.contains("bookmark"));
    }

    #[test]
    fn renders_null_as_dash() {
        let entity = json!({"description": null});
        let rendered = detail_table(&entity);
        assert!(rendered.contains('-'));
    }
}
