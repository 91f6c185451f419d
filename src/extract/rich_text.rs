// src/extract/rich_text.rs
//! The shared rich-text concatenation primitive.

use crate::model::RichTextRun;

/// Concatenates a rich-text run sequence into plain text.
///
/// For each run, `plain_text` wins when present, else `text.content`;
/// runs carrying neither contribute nothing. No separator is inserted
/// and input order is preserved — concatenation order is part of the
/// content, not a presentation choice.
pub fn concat_rich_text(runs: &[RichTextRun]) -> String {
    let mut out = String::new();
    for run in runs {
        if let Some(plain) = &run.plain_text {
            out.push_str(plain);
        } else if let Some(text) = &run.text {
            out.push_str(&text.content);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TextContent;

    #[test]
    fn concatenates_in_input_order() {
        let runs = vec![
            RichTextRun {
                plain_text: Some("A".to_string()),
                text: None,
            },
            RichTextRun {
                plain_text: None,
                text: Some(TextContent {
                    content: "B".to_string(),
                }),
            },
        ];
        assert_eq!(concat_rich_text(&runs), "AB");
    }

    #[test]
    fn plain_text_wins_over_text_content() {
        let runs = vec![RichTextRun {
            plain_text: Some("rendered".to_string()),
            text: Some(TextContent {
                content: "authored".to_string(),
            }),
        }];
        assert_eq!(concat_rich_text(&runs), "rendered");
    }

    #[test]
    fn empty_input_yields_empty_string() {
        assert_eq!(concat_rich_text(&[]), "");
        assert_eq!(concat_rich_text(&[RichTextRun::default()]), "");
    }
}
