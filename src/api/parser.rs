// src/api/parser.rs
//! Turns raw API response text into typed values or structured errors.
//!
//! Success bodies deserialize into the caller's target type; error
//! bodies map onto the typed [`NotionErrorCode`] vocabulary so callers
//! can classify failures without string matching.

use super::client::ApiResponse;
use crate::error::{AppError, NotionErrorCode};
use reqwest::StatusCode;
use serde::Deserialize;

/// Generic paginated response envelope from the Notion API.
#[derive(Debug, Clone, Deserialize)]
pub struct PaginatedResponse<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    #[serde(default)]
    pub next_cursor: Option<String>,
    #[serde(default)]
    pub has_more: bool,
}

/// Error response body from the Notion API.
#[derive(Debug, Clone, Deserialize)]
struct NotionApiErrorResponse {
    code: String,
    message: String,
}

/// Parses any Notion API response into the target type.
pub fn parse_api_response<T>(result: ApiResponse<String>) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    if result.status.is_success() {
        parse_success(&result.data, &result.url)
    } else {
        Err(parse_error(&result.data, result.status, &result.url))
    }
}

/// Parses a paginated envelope of `T`.
pub fn parse_paginated<T>(result: ApiResponse<String>) -> Result<PaginatedResponse<T>, AppError>
where
    T: serde::de::DeserializeOwned,
{
    parse_api_response(result)
}

/// Parses a success body, logging a bounded preview on failure.
fn parse_success<T>(body: &str, url: &str) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(body).map_err(|e| {
        log::error!("Failed to parse response from {}: {}", url, e);
        let preview: String = body.chars().take(500).collect();
        AppError::MalformedResponse(format!("{} (body: {})", e, preview))
    })
}

/// Parses an error body into the typed error vocabulary.
fn parse_error(body: &str, status: StatusCode, url: &str) -> AppError {
    if let Ok(api_error) = serde_json::from_str::<NotionApiErrorResponse>(body) {
        return AppError::NotionService {
            code: NotionErrorCode::from_api_response(&api_error.code),
            message: api_error.message,
            status,
        };
    }

    // Fallback when the error body is unparseable
    AppError::NotionService {
        code: NotionErrorCode::from_http_status(status.as_u16()),
        message: format!("HTTP {} from {}", status, url),
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DatabaseRow;

    fn response(body: &str, status: StatusCode) -> ApiResponse<String> {
        ApiResponse {
            data: body.to_string(),
            status,
            url: "https://api.notion.com/v1/test".to_string(),
        }
    }

    #[test]
    fn parses_paginated_rows() {
        let body = r#"{
            "results": [
                { "id": "r1", "properties": {} },
                { "id": "r2", "properties": {} }
            ],
            "next_cursor": "cursor-1",
            "has_more": true
        }"#;
        let page: PaginatedResponse<DatabaseRow> =
            parse_paginated(response(body, StatusCode::OK)).unwrap();
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.next_cursor.as_deref(), Some("cursor-1"));
        assert!(page.has_more);
    }

    #[test]
    fn missing_envelope_fields_default() {
        let page: PaginatedResponse<DatabaseRow> =
            parse_paginated(response(r#"{ "results": [] }"#, StatusCode::OK)).unwrap();
        assert!(!page.has_more);
        assert!(page.next_cursor.is_none());
    }

    #[test]
    fn maps_api_error_body_to_typed_code() {
        let body = r#"{
            "object": "error",
            "status": 404,
            "code": "object_not_found",
            "message": "Could not find database."
        }"#;
        let err = parse_paginated::<DatabaseRow>(response(body, StatusCode::NOT_FOUND))
            .unwrap_err();
        match err {
            AppError::NotionService { code, message, .. } => {
                assert_eq!(code, NotionErrorCode::ObjectNotFound);
                assert_eq!(message, "Could not find database.");
            }
            other => panic!("expected NotionService, got {:?}", other),
        }
    }

    #[test]
    fn unparseable_error_body_falls_back_to_status() {
        let err = parse_paginated::<DatabaseRow>(response(
            "<html>gateway timeout</html>",
            StatusCode::BAD_GATEWAY,
        ))
        .unwrap_err();
        match err {
            AppError::NotionService { code, .. } => {
                assert_eq!(code, NotionErrorCode::HttpStatus(502));
            }
            other => panic!("expected NotionService, got {:?}", other),
        }
    }
}
