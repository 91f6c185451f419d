// src/extract/mod.rs
//! Pure extraction: raw Notion shapes down to flat scalar values.
//!
//! Every function in this layer is total. Malformed or unrecognized
//! input resolves to [`Scalar::Empty`], never to an error — the schema
//! these shapes come from is controlled by an external, evolving
//! service, and silent degradation beats hard failure for a tool whose
//! job is "show me whatever is there".

mod block;
mod property;
mod rich_text;

pub use block::extract_block_content;
pub use property::extract_property;
pub use rich_text::concat_rich_text;

use std::fmt;

/// A single flat cell value.
///
/// Most extractions produce text; numbers and booleans keep their
/// semantics up to the table-assembly boundary so column dtype and
/// numeric statistics stay meaningful. `Empty` is distinct from
/// `Text("")` only in intent — both display as the empty string.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl Scalar {
    /// Wraps a string, mapping the empty string to `Empty`.
    pub fn text(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.is_empty() {
            Self::Empty
        } else {
            Self::Text(value)
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Text(s) => write!(f, "{}", s),
            Self::Number(n) => write!(f, "{}", n),
            Self::Bool(b) => write!(f, "{}", b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_collapses_to_empty() {
        assert_eq!(Scalar::text(""), Scalar::Empty);
        assert_eq!(Scalar::text("x"), Scalar::Text("x".to_string()));
    }

    #[test]
    fn display_round_trips_semantics() {
        assert_eq!(Scalar::Empty.to_string(), "");
        assert_eq!(Scalar::Number(42.0).to_string(), "42");
        assert_eq!(Scalar::Number(3.5).to_string(), "3.5");
        assert_eq!(Scalar::Bool(false).to_string(), "false");
    }
}
