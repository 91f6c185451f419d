// src/types/mod.rs
//! Domain value types shared across the crate.

mod ids;

pub use ids::NotionId;

use thiserror::Error;

/// Validation failures for user-supplied input.
///
/// These are distinct from [`crate::error::AppError`]: a `ValidationError`
/// means the input never reached the network, so the remediation is always
/// "fix the input", never "retry".
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid Notion ID: {0}")]
    InvalidId(String),

    #[error("Invalid API token: {0}")]
    InvalidApiKey(String),

    #[error("Invalid row limit: {0} (minimum is 1)")]
    InvalidRowLimit(usize),
}

/// Bearer credential for the Notion API.
///
/// Opaque to this crate — it is only ever forwarded to the HTTP layer.
/// The `Debug` impl redacts the value so a token never lands in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wraps a token string, rejecting blank input.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(ValidationError::InvalidApiKey(
                "token must not be empty".to_string(),
            ));
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ApiKey(***)")
    }
}

/// How many database rows or page blocks a fetch may accumulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowLimit {
    /// Fetch everything the API will return.
    Unbounded,
    /// Stop once this many items have been accumulated.
    Limit(usize),
}

impl RowLimit {
    /// Builds a limit from a user-supplied count, rejecting zero.
    pub fn custom(count: usize) -> Result<Self, ValidationError> {
        if count == 0 {
            return Err(ValidationError::InvalidRowLimit(count));
        }
        Ok(Self::Limit(count))
    }

    /// The numeric ceiling, if any.
    pub fn ceiling(&self) -> Option<usize> {
        match self {
            Self::Unbounded => None,
            Self::Limit(n) => Some(*n),
        }
    }

    /// Whether `accumulated` items already satisfy this limit.
    pub fn reached(&self, accumulated: usize) -> bool {
        matches!(self, Self::Limit(n) if accumulated >= *n)
    }
}

impl std::fmt::Display for RowLimit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unbounded => write!(f, "unbounded"),
            Self::Limit(n) => write!(f, "{}", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_rejects_blank_input() {
        assert!(ApiKey::new("").is_err());
        assert!(ApiKey::new("   ").is_err());
        assert!(ApiKey::new("secret_abc").is_ok());
    }

    #[test]
    fn api_key_debug_redacts_token() {
        let key = ApiKey::new("secret_abc").unwrap();
        assert_eq!(format!("{:?}", key), "ApiKey(***)");
    }

    #[test]
    fn row_limit_rejects_zero() {
        assert!(RowLimit::custom(0).is_err());
        assert_eq!(RowLimit::custom(1).unwrap(), RowLimit::Limit(1));
    }

    #[test]
    fn row_limit_reached() {
        assert!(!RowLimit::Unbounded.reached(usize::MAX));
        assert!(RowLimit::Limit(10).reached(10));
        assert!(!RowLimit::Limit(10).reached(9));
    }
}
