// src/sample.rs
//! Size-adaptive sampling for AI prompt construction.
//!
//! Each purpose carries its own thresholds because the operations have
//! different prompt-size budgets: an infographic prompt also has to fit
//! a large HTML response in the completion window, so it sends less.
//!
//! The sample is always a prefix of the table, never random or
//! stratified — deterministic and reproducible given the same table.
//! The cost is that a prompt only ever sees the head of the data; if
//! the source is sorted adversarially this biases the analysis. That is
//! a known limitation of the policy.

use crate::constants::{
    ANALYSIS_FULL_THRESHOLD, ANALYSIS_LARGE_SAMPLE, ANALYSIS_MEDIUM_SAMPLE,
    ANALYSIS_MEDIUM_THRESHOLD, INFOGRAPHIC_FULL_THRESHOLD, INFOGRAPHIC_LARGE_SAMPLE,
    INFOGRAPHIC_MEDIUM_SAMPLE, INFOGRAPHIC_MEDIUM_THRESHOLD,
};
use crate::table::UniformTable;

/// What the sampled rows will be used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamplingPurpose {
    /// Free-form natural-language analysis of the data.
    Analysis,
    /// Automatic insight generation (same budget as analysis).
    Insight,
    /// HTML infographic generation (tighter budget).
    Infographic,
}

/// A sampled prefix plus the human-readable label describing it,
/// embedded in prompts so the model knows what slice it is seeing.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSelection {
    pub rows: UniformTable,
    pub label: String,
}

/// Selects the prompt-bound sample for a table under the given purpose.
pub fn select_sample(table: &UniformTable, purpose: SamplingPurpose) -> SampleSelection {
    let (full_threshold, medium_threshold, medium_sample, large_sample) = match purpose {
        SamplingPurpose::Analysis | SamplingPurpose::Insight => (
            ANALYSIS_FULL_THRESHOLD,
            ANALYSIS_MEDIUM_THRESHOLD,
            ANALYSIS_MEDIUM_SAMPLE,
            ANALYSIS_LARGE_SAMPLE,
        ),
        SamplingPurpose::Infographic => (
            INFOGRAPHIC_FULL_THRESHOLD,
            INFOGRAPHIC_MEDIUM_THRESHOLD,
            INFOGRAPHIC_MEDIUM_SAMPLE,
            INFOGRAPHIC_LARGE_SAMPLE,
        ),
    };

    let total = table.row_count();
    if total <= full_threshold {
        SampleSelection {
            rows: table.clone(),
            label: "data sample (all rows)".to_string(),
        }
    } else if total <= medium_threshold {
        SampleSelection {
            rows: table.head(medium_sample),
            label: format!("data sample (first {} rows)", medium_sample),
        }
    } else {
        SampleSelection {
            rows: table.head(large_sample),
            label: format!("data sample (first {} rows)", large_sample),
        }
    }
}
