// src/table/summary.rs
//! Textual data summary for AI prompt construction.
//!
//! The output shape is a contract: the prompt builders downstream embed
//! this block verbatim, so the line structure (overview, then one
//! indented section per column) is part of the interface.

use super::UniformTable;
use std::fmt::Write;

/// Renders the row/column overview plus per-column detail.
pub fn render_summary(table: &UniformTable) -> String {
    if table.is_empty() {
        return "Data overview:\n- rows: 0\n- columns: 0\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(out, "Data overview:");
    let _ = writeln!(out, "- rows: {}", table.row_count());
    let _ = writeln!(out, "- columns: {}", table.column_count());
    let _ = writeln!(out, "- column names: {}", table.columns().join(", "));
    let _ = writeln!(out);
    let _ = writeln!(out, "Per-column detail:");

    for column in table.columns() {
        let Some(stats) = table.column_stats(column) else {
            continue;
        };
        let _ = writeln!(out, "- {}:", column);
        let _ = writeln!(out, "  - dtype: {}", stats.dtype.as_str());
        let _ = writeln!(
            out,
            "  - non-null: {}/{} ({:.1}%)",
            stats.non_null,
            table.row_count(),
            stats.non_null as f64 / table.row_count() as f64 * 100.0
        );
        let _ = writeln!(out, "  - unique: {}", stats.unique);

        if let Some(numeric) = table.numeric_stats(column) {
            let _ = writeln!(
                out,
                "  - stats: mean={:.2}, median={:.2}, std={:.2}",
                numeric.mean, numeric.median, numeric.std
            );
            let _ = writeln!(
                out,
                "  - range: min={:.2}, max={:.2}",
                numeric.min, numeric.max
            );
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::build_from_database_rows;
    use serde_json::json;

    #[test]
    fn summary_lists_counts_and_columns() {
        let rows: Vec<crate::model::DatabaseRow> = (0..3)
            .map(|i| {
                serde_json::from_value(json!({
                    "id": format!("r{}", i),
                    "properties": {
                        "Score": { "type": "number", "number": i as f64 }
                    }
                }))
                .unwrap()
            })
            .collect();
        let table = build_from_database_rows(&rows);
        let summary = render_summary(&table);

        assert!(summary.contains("- rows: 3"));
        assert!(summary.contains("- columns: 5"));
        assert!(summary.contains("- Score:"));
        assert!(summary.contains("dtype: number"));
        assert!(summary.contains("mean=1.00"));
    }

    #[test]
    fn empty_table_summarizes_to_zero_counts() {
        let summary = render_summary(&UniformTable::default());
        assert!(summary.contains("rows: 0"));
    }
}
