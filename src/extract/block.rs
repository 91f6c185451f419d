// src/extract/block.rs
//! Flattens one content block to its table content string.

use super::rich_text::concat_rich_text;
use crate::model::{BlockPayload, RawBlock};

/// Extracts the single content-column value for one block.
///
/// Unrecognized block types yield the empty string; their type name
/// still appears in the table's type column, so nothing silently
/// disappears from the row set.
pub fn extract_block_content(block: &RawBlock) -> String {
    match &block.payload {
        BlockPayload::Text { rich_text } => concat_rich_text(rich_text),
        BlockPayload::ToDo { rich_text, checked } => {
            let mark = if *checked { "x" } else { " " };
            format!("[{}] {}", mark, concat_rich_text(rich_text))
        }
        BlockPayload::Code {
            rich_text,
            language,
        } => format!("```{}\n{}\n```", language, concat_rich_text(rich_text)),
        // Rows arrive as flat siblings, so the container is a placeholder.
        BlockPayload::Table => "[table]".to_string(),
        BlockPayload::TableRow { cells } => cells
            .iter()
            .map(|cell| concat_rich_text(cell))
            .collect::<Vec<_>>()
            .join(" | "),
        BlockPayload::Unknown => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RichTextRun;
    use serde_json::json;

    fn text_block(kind: &str, text: &str) -> RawBlock {
        RawBlock::from_value(json!({
            "id": "blk",
            "type": kind,
            kind: { "rich_text": [{ "plain_text": text }] }
        }))
    }

    #[test]
    fn text_bearing_blocks_concatenate_rich_text() {
        for kind in [
            "paragraph",
            "heading_1",
            "heading_2",
            "heading_3",
            "quote",
            "callout",
            "bulleted_list_item",
            "numbered_list_item",
        ] {
            let block = text_block(kind, "some content");
            assert_eq!(extract_block_content(&block), "some content", "{}", kind);
        }
    }

    #[test]
    fn to_do_renders_checkbox_marker() {
        let unchecked = RawBlock {
            id: "b".to_string(),
            block_type: "to_do".to_string(),
            created_time: String::new(),
            last_edited_time: String::new(),
            payload: BlockPayload::ToDo {
                rich_text: vec![RichTextRun::plain("buy milk")],
                checked: false,
            },
        };
        assert_eq!(extract_block_content(&unchecked), "[ ] buy milk");

        let checked = RawBlock {
            payload: BlockPayload::ToDo {
                rich_text: vec![RichTextRun::plain("buy milk")],
                checked: true,
            },
            ..unchecked
        };
        assert_eq!(extract_block_content(&checked), "[x] buy milk");
    }

    #[test]
    fn code_renders_fenced_with_language() {
        let block = RawBlock::from_value(json!({
            "id": "blk",
            "type": "code",
            "code": {
                "rich_text": [{ "plain_text": "fn main() {}" }],
                "language": "rust"
            }
        }));
        assert_eq!(extract_block_content(&block), "```rust\nfn main() {}\n```");
    }

    #[test]
    fn table_container_is_placeholder() {
        let block = RawBlock::from_value(json!({ "id": "blk", "type": "table", "table": {} }));
        assert_eq!(extract_block_content(&block), "[table]");
    }

    #[test]
    fn table_row_joins_cells_with_pipes() {
        let block = RawBlock::from_value(json!({
            "id": "blk",
            "type": "table_row",
            "table_row": {
                "cells": [
                    [{ "plain_text": "name" }],
                    [{ "plain_text": "count" }],
                    []
                ]
            }
        }));
        assert_eq!(extract_block_content(&block), "name | count | ");
    }

    #[test]
    fn unknown_block_extracts_to_empty() {
        let block =
            RawBlock::from_value(json!({ "id": "blk", "type": "divider", "divider": {} }));
        assert_eq!(extract_block_content(&block), "");
    }
}
