// src/table/stats.rs
//! On-demand per-column statistics.
//!
//! Nothing here is cached: statistics are a pure function of the current
//! table, so a refetch can never serve stale numbers.

use crate::extract::Scalar;
use std::collections::HashSet;

/// The inferred value type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnDtype {
    /// Every non-empty value is numeric.
    Number,
    /// Every non-empty value is boolean.
    Boolean,
    /// Mixed or textual values (also the dtype of an all-empty column).
    Text,
}

impl ColumnDtype {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Text => "text",
        }
    }
}

/// Basic statistics for one column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnStats {
    pub dtype: ColumnDtype,
    /// Count of cells that are not the empty scalar.
    pub non_null: usize,
    /// Count of distinct non-empty values, compared by display form.
    pub unique: usize,
}

/// Summary statistics for a numeric column.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericStats {
    pub mean: f64,
    pub median: f64,
    pub std: f64,
    pub min: f64,
    pub max: f64,
}

pub(super) fn compute_column_stats(values: &[&Scalar]) -> ColumnStats {
    let non_empty: Vec<&Scalar> = values.iter().copied().filter(|v| !v.is_empty()).collect();

    let dtype = if non_empty.is_empty() {
        ColumnDtype::Text
    } else if non_empty.iter().all(|v| matches!(v, Scalar::Number(_))) {
        ColumnDtype::Number
    } else if non_empty.iter().all(|v| matches!(v, Scalar::Bool(_))) {
        ColumnDtype::Boolean
    } else {
        ColumnDtype::Text
    };

    let unique: HashSet<String> = non_empty.iter().map(|v| v.to_string()).collect();

    ColumnStats {
        dtype,
        non_null: non_empty.len(),
        unique: unique.len(),
    }
}

/// Computes numeric summary statistics, or `None` when the column has
/// no numeric values. Uses sample standard deviation (n - 1), matching
/// the conventions of the tabular tools this output gets compared to.
pub(super) fn compute_numeric_stats(values: &[&Scalar]) -> Option<NumericStats> {
    let mut numbers: Vec<f64> = values
        .iter()
        .filter_map(|v| match v {
            Scalar::Number(n) => Some(*n),
            _ => None,
        })
        .collect();
    if numbers.is_empty() {
        return None;
    }

    numbers.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let n = numbers.len() as f64;
    let mean = numbers.iter().sum::<f64>() / n;
    let median = if numbers.len() % 2 == 1 {
        numbers[numbers.len() / 2]
    } else {
        (numbers[numbers.len() / 2 - 1] + numbers[numbers.len() / 2]) / 2.0
    };
    let std = if numbers.len() < 2 {
        0.0
    } else {
        let variance = numbers.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0);
        variance.sqrt()
    };

    Some(NumericStats {
        mean,
        median,
        std,
        min: numbers[0],
        max: numbers[numbers.len() - 1],
    })
}
