// src/table/mod.rs
//! The uniform, rectangular record set built from raw Notion data.
//!
//! Both builders are total: empty input yields an empty table, never an
//! error. The two invariants everything downstream leans on:
//!
//! - **Rectangularity** — every record carries exactly the same column
//!   set, in the same order; a missing property is an empty cell, never
//!   an absent key.
//! - **Row order equals input order** — the API's natural order is
//!   preserved verbatim. Only columns are sorted (database case), so
//!   the column sequence is stable no matter how the API ordered rows.

mod stats;
mod summary;

pub use stats::{ColumnDtype, ColumnStats, NumericStats};
pub use summary::render_summary;

use crate::constants::{
    COLUMN_CONTENT, COLUMN_CREATED, COLUMN_EDITED, COLUMN_ID, COLUMN_TYPE, COLUMN_URL,
};
use crate::extract::{extract_block_content, extract_property, Scalar};
use crate::model::{DatabaseRow, RawBlock};
use indexmap::IndexMap;
use std::collections::BTreeSet;

/// One flattened record: column name to scalar, in column order.
pub type NormalizedRecord = IndexMap<String, Scalar>;

/// An ordered, rectangular record set with a stable column sequence.
///
/// This is the only artifact that outlives a fetch. Each fetch builds a
/// fresh table and the caller replaces its previous one wholesale —
/// there is no incremental mutation, so no stale rows can survive a
/// refetch. Column statistics are computed on demand, never cached.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UniformTable {
    columns: Vec<String>,
    records: Vec<NormalizedRecord>,
}

impl UniformTable {
    /// Assembles a table from pre-normalized parts. The caller is
    /// responsible for rectangularity; the builders below are the usual
    /// entry points.
    pub fn from_parts(columns: Vec<String>, records: Vec<NormalizedRecord>) -> Self {
        Self { columns, records }
    }

    /// The column sequence shared by every record.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn records(&self) -> &[NormalizedRecord] {
        &self.records
    }

    pub fn row_count(&self) -> usize {
        self.records.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The first `n` rows as a new table (all rows when `n` exceeds the
    /// row count). Prefix-taking is the sampling primitive: deterministic
    /// and order-preserving.
    pub fn head(&self, n: usize) -> UniformTable {
        UniformTable {
            columns: self.columns.clone(),
            records: self.records.iter().take(n).cloned().collect(),
        }
    }

    /// All values of one column, in row order. Empty when the column
    /// does not exist.
    pub fn column_values(&self, name: &str) -> Vec<&Scalar> {
        self.records
            .iter()
            .filter_map(|record| record.get(name))
            .collect()
    }

    /// Per-column statistics, computed on demand.
    pub fn column_stats(&self, name: &str) -> Option<ColumnStats> {
        if !self.columns.iter().any(|c| c == name) {
            return None;
        }
        Some(stats::compute_column_stats(&self.column_values(name)))
    }

    /// Numeric summary for a column, when its dtype is numeric.
    pub fn numeric_stats(&self, name: &str) -> Option<NumericStats> {
        stats::compute_numeric_stats(&self.column_values(name))
    }

    /// Renders the table as aligned plain text, headers first — the
    /// form embedded into AI prompts.
    pub fn to_display_string(&self) -> String {
        if self.columns.is_empty() {
            return String::new();
        }

        let mut widths: Vec<usize> = self
            .columns
            .iter()
            .map(|c| c.chars().count())
            .collect();
        let rendered: Vec<Vec<String>> = self
            .records
            .iter()
            .map(|record| {
                self.columns
                    .iter()
                    .map(|col| record.get(col).map(Scalar::to_string).unwrap_or_default())
                    .collect()
            })
            .collect();
        for row in &rendered {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }

        let mut out = String::new();
        let mut push_row = |cells: &[String], out: &mut String| {
            let line = cells
                .iter()
                .enumerate()
                .map(|(i, cell)| format!("{:<width$}", cell, width = widths[i]))
                .collect::<Vec<_>>()
                .join("  ");
            out.push_str(line.trim_end());
            out.push('\n');
        };

        push_row(&self.columns, &mut out);
        for row in &rendered {
            push_row(row, &mut out);
        }
        out
    }
}

/// Builds a table from database rows.
///
/// Columns are the reserved metadata set followed by the alphabetically
/// sorted union of every property name seen across all rows. Sorting is
/// deliberate: it makes the column sequence a function of the row *set*,
/// independent of the order the API happened to return rows in.
pub fn build_from_database_rows(rows: &[DatabaseRow]) -> UniformTable {
    if rows.is_empty() {
        return UniformTable::default();
    }

    let reserved = [COLUMN_ID, COLUMN_CREATED, COLUMN_EDITED, COLUMN_URL];
    let property_names: BTreeSet<&str> = rows
        .iter()
        .flat_map(|row| row.properties.keys().map(String::as_str))
        .collect();

    // A property may share a reserved name ("URL" is a popular choice).
    // The column appears once, in its reserved position, and the
    // property value overwrites the metadata on rows that carry it.
    let mut columns: Vec<String> = reserved.iter().map(|c| c.to_string()).collect();
    columns.extend(
        property_names
            .iter()
            .filter(|name| !reserved.contains(name))
            .map(|name| name.to_string()),
    );

    let records = rows
        .iter()
        .map(|row| {
            let mut record = NormalizedRecord::with_capacity(columns.len());
            record.insert(COLUMN_ID.to_string(), Scalar::text(row.id.clone()));
            record.insert(
                COLUMN_CREATED.to_string(),
                Scalar::text(row.created_time.clone()),
            );
            record.insert(
                COLUMN_EDITED.to_string(),
                Scalar::text(row.last_edited_time.clone()),
            );
            record.insert(COLUMN_URL.to_string(), Scalar::text(row.url.clone()));
            for name in &property_names {
                match row.properties.get(*name) {
                    Some(value) => {
                        record.insert(name.to_string(), extract_property(value));
                    }
                    None => {
                        // keeps the metadata value on a reserved-name column
                        record.entry(name.to_string()).or_insert(Scalar::Empty);
                    }
                }
            }
            record
        })
        .collect();

    UniformTable { columns, records }
}

/// Builds a table from page content blocks.
///
/// The column set is fixed, not discovered: every block contributes the
/// same five columns regardless of its type.
pub fn build_from_blocks(blocks: &[RawBlock]) -> UniformTable {
    if blocks.is_empty() {
        return UniformTable::default();
    }

    let columns: Vec<String> = [
        COLUMN_ID,
        COLUMN_TYPE,
        COLUMN_CONTENT,
        COLUMN_CREATED,
        COLUMN_EDITED,
    ]
    .iter()
    .map(|c| c.to_string())
    .collect();

    let records = blocks
        .iter()
        .map(|block| {
            let mut record = NormalizedRecord::with_capacity(columns.len());
            record.insert(COLUMN_ID.to_string(), Scalar::text(block.id.clone()));
            record.insert(
                COLUMN_TYPE.to_string(),
                Scalar::text(block.block_type.clone()),
            );
            record.insert(
                COLUMN_CONTENT.to_string(),
                Scalar::text(extract_block_content(block)),
            );
            record.insert(
                COLUMN_CREATED.to_string(),
                Scalar::text(block.created_time.clone()),
            );
            record.insert(
                COLUMN_EDITED.to_string(),
                Scalar::text(block.last_edited_time.clone()),
            );
            record
        })
        .collect();

    UniformTable { columns, records }
}
