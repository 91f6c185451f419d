// src/model/row.rs
//! One row of a Notion database, as returned by a database query.

use super::property::RawProperty;
use indexmap::IndexMap;
use serde::Deserialize;

/// A database row: page-level metadata plus its named property values.
///
/// Properties keep the API's map order via `IndexMap`; the table layer
/// sorts column names itself, so this order never leaks into output,
/// but it keeps debugging output faithful to the response.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct DatabaseRow {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub created_time: String,
    #[serde(default)]
    pub last_edited_time: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub properties: IndexMap<String, RawProperty>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_row_with_properties() {
        let json = r#"{
            "id": "row-1",
            "created_time": "2024-01-01T00:00:00.000Z",
            "last_edited_time": "2024-01-02T00:00:00.000Z",
            "url": "https://www.notion.so/row-1",
            "properties": {
                "Name": { "type": "title", "title": [{ "plain_text": "First" }] },
                "Done": { "type": "checkbox", "checkbox": true }
            }
        }"#;

        let row: DatabaseRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.id, "row-1");
        assert_eq!(row.properties.len(), 2);
        assert_eq!(row.properties["Done"], RawProperty::Checkbox(true));
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let row: DatabaseRow = serde_json::from_str(r#"{ "id": "row-2" }"#).unwrap();
        assert_eq!(row.url, "");
        assert!(row.properties.is_empty());
    }
}
