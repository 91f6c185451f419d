// src/error.rs
//! Application error types with structured error handling.
//!
//! Extraction-layer code never produces errors: malformed property and
//! block shapes degrade to empty scalars, because the upstream schema
//! evolves faster than this crate should need to track. The types
//! here cover the one layer where precise differentiation matters: the
//! fetch/validation boundary, where "not found", "access denied", and
//! "no credential configured" each drive a different user remediation.

use std::fmt;
use thiserror::Error;

/// Notion API error codes as a typed vocabulary.
///
/// Instead of matching against magic strings like `"object_not_found"`,
/// the API's failure vocabulary is encoded in the type system so recovery
/// logic can pattern-match without stringly-typed dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotionErrorCode {
    /// API rate limit exceeded — back off and retry
    RateLimited,
    /// The requested object does not exist or is inaccessible
    ObjectNotFound,
    /// API key is invalid or expired
    Unauthorized,
    /// API key lacks permission for this resource
    RestrictedResource,
    /// Request parameters failed Notion's validation
    ValidationFailed,
    /// Notion internal server error
    InternalError,
    /// Notion is temporarily unavailable
    ServiceUnavailable,
    /// HTTP status code fallback when the error body is unparseable
    HttpStatus(u16),
    /// An error code this client doesn't recognize yet
    Unknown(String),
}

impl NotionErrorCode {
    /// Parses a Notion API error code string into the typed vocabulary.
    pub fn from_api_response(code: &str) -> Self {
        match code {
            "rate_limited" => Self::RateLimited,
            "object_not_found" => Self::ObjectNotFound,
            "unauthorized" => Self::Unauthorized,
            "restricted_resource" => Self::RestrictedResource,
            "validation_error" => Self::ValidationFailed,
            "internal_server_error" => Self::InternalError,
            "service_unavailable" => Self::ServiceUnavailable,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Creates a code from a bare HTTP status when the body is unparseable.
    pub fn from_http_status(status: u16) -> Self {
        match status {
            404 => Self::ObjectNotFound,
            401 => Self::Unauthorized,
            403 => Self::RestrictedResource,
            429 => Self::RateLimited,
            other => Self::HttpStatus(other),
        }
    }

    /// Whether this error means the resource simply doesn't exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ObjectNotFound | Self::HttpStatus(404))
    }

    /// Whether this error is a permission problem rather than absence.
    pub fn is_access_denied(&self) -> bool {
        matches!(
            self,
            Self::Unauthorized | Self::RestrictedResource | Self::HttpStatus(401 | 403)
        )
    }
}

impl fmt::Display for NotionErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RateLimited => write!(f, "rate_limited"),
            Self::ObjectNotFound => write!(f, "object_not_found"),
            Self::Unauthorized => write!(f, "unauthorized"),
            Self::RestrictedResource => write!(f, "restricted_resource"),
            Self::ValidationFailed => write!(f, "validation_error"),
            Self::InternalError => write!(f, "internal_server_error"),
            Self::ServiceUnavailable => write!(f, "service_unavailable"),
            Self::HttpStatus(code) => write!(f, "http_{}", code),
            Self::Unknown(code) => write!(f, "{}", code),
        }
    }
}

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    #[error("Network failure: {0}")]
    NetworkFailure(#[from] reqwest::Error),

    #[error("Notion API returned an error ({code}): {message}")]
    NotionService {
        code: NotionErrorCode,
        message: String,
        status: reqwest::StatusCode,
    },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Resource unavailable: {0}")]
    ResourceUnavailable(String),

    #[error("Fetch cancelled after {items_fetched} items")]
    Cancelled { items_fetched: usize },

    #[error("Filesystem IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Text completion failed: {0}")]
    Completion(String),

    #[error(transparent)]
    Validation(#[from] crate::types::ValidationError),

    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

// Allow converting from anyhow::Error, preserving the message
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal {
            message: err.to_string(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedResponse(err.to_string())
    }
}

/// Domain vocabulary for why a fetch or resource lookup failed.
///
/// This is not an error type — it's a classification of the failure
/// reason, because each variant drives a very different user remediation:
/// fix the ID, share the page with the integration, configure a token,
/// or just retry later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchFailure {
    /// The page or database does not exist.
    NotFound,
    /// The resource exists but the integration cannot read it.
    AccessDenied { reason: String },
    /// No credential was configured, so no request was attempted.
    ClientNotReady,
    /// Some other API or transport failure.
    Other { cause: String },
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "the page or database does not exist"),
            Self::AccessDenied { reason } => write!(f, "access denied: {}", reason),
            Self::ClientNotReady => write!(f, "API client is not configured with a token"),
            Self::Other { cause } => write!(f, "{}", cause),
        }
    }
}

/// Classifies an [`AppError`] into the remediation-oriented vocabulary.
pub fn classify_fetch_failure(error: &AppError) -> FetchFailure {
    match error {
        AppError::MissingConfiguration(_) => FetchFailure::ClientNotReady,
        AppError::NotionService { code, message, .. } => {
            if code.is_not_found() {
                FetchFailure::NotFound
            } else if code.is_access_denied() {
                FetchFailure::AccessDenied {
                    reason: message.clone(),
                }
            } else {
                FetchFailure::Other {
                    cause: error.to_string(),
                }
            }
        }
        _ => FetchFailure::Other {
            cause: error.to_string(),
        },
    }
}

/// Result type alias for convenience
pub type Result<T, E = AppError> = std::result::Result<T, E>;
