// src/model/block.rs
//! The content block union keyed by Notion's `type` discriminator.
//!
//! Blocks arrive from `blocks/{id}/children` as a flat sequence. Like
//! properties, each block keys its payload under its own type name, and
//! unrecognized types land in [`BlockPayload::Unknown`] rather than
//! failing deserialization. The raw type string is kept on the block
//! either way because it becomes the table's type column verbatim.

use super::property::RichTextRun;
use serde::Deserialize;
use serde_json::Value;

/// One content block from a page.
#[derive(Debug, Clone, PartialEq)]
pub struct RawBlock {
    pub id: String,
    /// The raw `type` discriminator, preserved even for unknown types.
    pub block_type: String,
    pub created_time: String,
    pub last_edited_time: String,
    pub payload: BlockPayload,
}

/// The type-specific payload of a block.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockPayload {
    /// Plain text-bearing blocks: paragraph, heading_1/2/3, quote,
    /// callout, bulleted_list_item, numbered_list_item.
    Text { rich_text: Vec<RichTextRun> },
    ToDo {
        rich_text: Vec<RichTextRun>,
        checked: bool,
    },
    Code {
        rich_text: Vec<RichTextRun>,
        language: String,
    },
    /// A table container. Its rows arrive as separate sibling
    /// `table_row` blocks in the same flat sequence, not nested here.
    Table,
    TableRow { cells: Vec<Vec<RichTextRun>> },
    Unknown,
}

impl RawBlock {
    /// Builds a block from its raw JSON object.
    pub fn from_value(value: Value) -> Self {
        let id = str_field(&value, "id");
        let block_type = str_field(&value, "type");
        let created_time = str_field(&value, "created_time");
        let last_edited_time = str_field(&value, "last_edited_time");
        let payload = Self::payload_from(&value, &block_type);

        Self {
            id,
            block_type,
            created_time,
            last_edited_time,
            payload,
        }
    }

    fn payload_from(value: &Value, block_type: &str) -> BlockPayload {
        let data = value.get(block_type).cloned().unwrap_or(Value::Null);

        match block_type {
            "paragraph" | "heading_1" | "heading_2" | "heading_3" | "quote" | "callout"
            | "bulleted_list_item" | "numbered_list_item" => BlockPayload::Text {
                rich_text: runs_field(&data, "rich_text"),
            },
            "to_do" => BlockPayload::ToDo {
                rich_text: runs_field(&data, "rich_text"),
                checked: data
                    .get("checked")
                    .and_then(Value::as_bool)
                    .unwrap_or(false),
            },
            "code" => BlockPayload::Code {
                rich_text: runs_field(&data, "rich_text"),
                language: str_field(&data, "language"),
            },
            "table" => BlockPayload::Table,
            "table_row" => BlockPayload::TableRow {
                cells: data
                    .get("cells")
                    .cloned()
                    .map(|cells| serde_json::from_value(cells).unwrap_or_default())
                    .unwrap_or_default(),
            },
            _ => BlockPayload::Unknown,
        }
    }
}

impl<'de> Deserialize<'de> for RawBlock {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(RawBlock::from_value(value))
    }
}

fn str_field(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn runs_field(value: &Value, key: &str) -> Vec<RichTextRun> {
    value
        .get(key)
        .cloned()
        .map(|runs| serde_json::from_value(runs).unwrap_or_default())
        .unwrap_or_default()
}
