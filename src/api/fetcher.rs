// src/api/fetcher.rs
//! High-level fetch operations: database row queries, page block
//! listings, and resource validation.
//!
//! An ID alone doesn't say whether it names a page or a database — only
//! the API knows. The probing pattern here (try one endpoint, fall back
//! to the other, classify the combined failures) mirrors how the
//! official clients behave.

use super::client::{extract_response_text, ApiResponse, NotionHttpClient};
use super::pagination::{fetch_all_pages, CancelToken};
use super::parser::{parse_api_response, parse_paginated};
use crate::error::{classify_fetch_failure, AppError, FetchFailure};
use crate::extract::concat_rich_text;
use crate::model::{DatabaseRow, RawBlock, RichTextRun};
use crate::types::{NotionId, RowLimit};
use chrono::{DateTime, Utc};
use serde_json::Value;

/// What kind of object an ID turned out to address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Page,
    Database,
    Unknown,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Page => "page",
            Self::Database => "database",
            Self::Unknown => "unknown",
        }
    }
}

/// Structured outcome of probing an ID against the API.
///
/// `exists` and `accessible` are distinct on purpose: a 403 means the
/// object is there but not shared with the integration, which calls
/// for a very different user action than a 404.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceCheck {
    pub valid: bool,
    pub exists: bool,
    pub accessible: bool,
    pub kind: ResourceKind,
    pub message: String,
    pub failure: Option<FetchFailure>,
}

/// Basic metadata for a page or database.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceInfo {
    pub id: String,
    pub title: String,
    pub kind: ResourceKind,
    pub url: String,
    pub created_time: Option<DateTime<Utc>>,
    pub last_edited_time: Option<DateTime<Utc>>,
}

/// High-level Notion fetch operations over the HTTP client.
pub struct NotionFetcher {
    client: NotionHttpClient,
}

impl NotionFetcher {
    pub fn new(client: NotionHttpClient) -> Self {
        Self { client }
    }

    /// Queries all rows of a database, paginating with the cursor.
    ///
    /// The database query endpoint honors `page_size`, so a row limit
    /// also shrinks the final page request server-side.
    pub async fn query_database_rows(
        &self,
        id: &NotionId,
        limit: RowLimit,
        cancel: &CancelToken,
        progress: impl FnMut(&str),
    ) -> Result<Vec<DatabaseRow>, AppError> {
        let endpoint = format!("databases/{}/query", id.to_hyphenated());
        let client = self.client.clone();

        let rows = fetch_all_pages(
            |page_size, cursor| {
                let client = client.clone();
                let endpoint = endpoint.clone();
                async move {
                    let mut query = serde_json::json!({ "page_size": page_size });
                    if let Some(cursor) = cursor {
                        query["start_cursor"] = serde_json::json!(cursor);
                    }
                    let response = client.post(&endpoint, &query).await?;
                    parse_paginated(extract_response_text(response).await?)
                }
            },
            limit,
            cancel,
            progress,
        )
        .await?;

        log::info!("Fetched {} database rows for {}", rows.len(), id);
        Ok(rows)
    }

    /// Lists all content blocks of a page, paginating with the cursor.
    ///
    /// The children endpoint has no server-side row limit worth
    /// relying on; the limit is enforced client-side by truncation
    /// inside the pagination loop.
    pub async fn list_page_blocks(
        &self,
        id: &NotionId,
        limit: RowLimit,
        cancel: &CancelToken,
        progress: impl FnMut(&str),
    ) -> Result<Vec<RawBlock>, AppError> {
        let base = format!("blocks/{}/children", id.to_hyphenated());
        let client = self.client.clone();

        let blocks = fetch_all_pages(
            |page_size, cursor| {
                let client = client.clone();
                let mut endpoint = format!("{}?page_size={}", base, page_size);
                if let Some(cursor) = cursor {
                    endpoint = format!("{}&start_cursor={}", endpoint, cursor);
                }
                async move {
                    let response = client.get(&endpoint).await?;
                    parse_paginated(extract_response_text(response).await?)
                }
            },
            limit,
            cancel,
            progress,
        )
        .await?;

        log::info!("Fetched {} blocks for {}", blocks.len(), id);
        Ok(blocks)
    }

    /// Probes an ID as a page, then as a database, and classifies the
    /// outcome. Never returns an error — failure is part of the answer.
    pub async fn validate_resource(&self, id: &NotionId) -> ResourceCheck {
        match self.retrieve_object(id, ResourceKind::Page).await {
            Ok(_) => return ResourceCheck::found(ResourceKind::Page),
            Err(page_err) => match self.retrieve_object(id, ResourceKind::Database).await {
                Ok(_) => return ResourceCheck::found(ResourceKind::Database),
                Err(db_err) => ResourceCheck::from_failures(&page_err, &db_err),
            },
        }
    }

    /// Retrieves title and metadata for a page or database.
    pub async fn resource_info(&self, id: &NotionId) -> Result<ResourceInfo, AppError> {
        match self.retrieve_object(id, ResourceKind::Page).await {
            Ok(value) => Ok(resource_info_from(&value, ResourceKind::Page)),
            Err(page_err) => match self.retrieve_object(id, ResourceKind::Database).await {
                Ok(value) => Ok(resource_info_from(&value, ResourceKind::Database)),
                Err(_) => Err(page_err),
            },
        }
    }

    /// Whether the ID addresses a database (database probe first, so a
    /// database ID costs one request).
    pub async fn is_database(&self, id: &NotionId) -> Result<bool, AppError> {
        match self.retrieve_object(id, ResourceKind::Database).await {
            Ok(_) => Ok(true),
            Err(db_err) => match self.retrieve_object(id, ResourceKind::Page).await {
                Ok(_) => Ok(false),
                Err(_) => Err(db_err),
            },
        }
    }

    /// Smoke-tests the credential with `GET /users/me`.
    pub async fn test_connection(&self) -> bool {
        let result: Result<Value, AppError> = async {
            let response = self.client.get("users/me").await?;
            parse_api_response(extract_response_text(response).await?)
        }
        .await;

        match result {
            Ok(_) => {
                log::info!("Notion API connection test succeeded");
                true
            }
            Err(e) => {
                log::error!("Notion API connection test failed: {}", e);
                false
            }
        }
    }

    async fn retrieve_object(&self, id: &NotionId, kind: ResourceKind) -> Result<Value, AppError> {
        let endpoint = match kind {
            ResourceKind::Page => format!("pages/{}", id.to_hyphenated()),
            ResourceKind::Database => format!("databases/{}", id.to_hyphenated()),
            ResourceKind::Unknown => {
                return Err(AppError::Internal {
                    message: "cannot retrieve an object of unknown kind".to_string(),
                    source: None,
                })
            }
        };
        let response = self.client.get(&endpoint).await?;
        let result: ApiResponse<String> = extract_response_text(response).await?;
        parse_api_response(result)
    }
}

impl ResourceCheck {
    fn found(kind: ResourceKind) -> Self {
        Self {
            valid: true,
            exists: true,
            accessible: true,
            kind,
            message: format!("{} found", kind.as_str()),
            failure: None,
        }
    }

    /// Classifies the pair of probe failures into one verdict.
    ///
    /// Both probes 404ing means the object is gone; either probe
    /// 403ing means it exists but is not shared with the integration.
    fn from_failures(page_err: &AppError, db_err: &AppError) -> Self {
        let page_failure = classify_fetch_failure(page_err);
        let db_failure = classify_fetch_failure(db_err);

        if page_failure == FetchFailure::NotFound && db_failure == FetchFailure::NotFound {
            return Self {
                valid: false,
                exists: false,
                accessible: false,
                kind: ResourceKind::Unknown,
                message: "the specified page or database does not exist".to_string(),
                failure: Some(FetchFailure::NotFound),
            };
        }

        for failure in [&page_failure, &db_failure] {
            if let FetchFailure::AccessDenied { .. } = failure {
                return Self {
                    valid: false,
                    exists: true,
                    accessible: false,
                    kind: ResourceKind::Unknown,
                    message: "no permission to access the page or database".to_string(),
                    failure: Some(failure.clone()),
                };
            }
        }

        Self {
            valid: false,
            exists: false,
            accessible: false,
            kind: ResourceKind::Unknown,
            message: format!("validation failed: {}", page_err),
            failure: Some(page_failure),
        }
    }
}

/// Builds resource metadata from a retrieved object body.
fn resource_info_from(value: &Value, kind: ResourceKind) -> ResourceInfo {
    ResourceInfo {
        id: value
            .get("id")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        title: match kind {
            ResourceKind::Page => page_title(value),
            _ => database_title(value),
        },
        kind,
        url: value
            .get("url")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        created_time: timestamp_field(value, "created_time"),
        last_edited_time: timestamp_field(value, "last_edited_time"),
    }
}

/// A page's title lives in whichever property has type `title`.
fn page_title(value: &Value) -> String {
    value
        .get("properties")
        .and_then(Value::as_object)
        .and_then(|props| {
            props
                .values()
                .find(|prop| prop.get("type").and_then(Value::as_str) == Some("title"))
        })
        .and_then(|prop| prop.get("title"))
        .map(title_text)
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| "Untitled".to_string())
}

/// A database's title is a top-level rich-text array.
fn database_title(value: &Value) -> String {
    value
        .get("title")
        .map(title_text)
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| "Untitled database".to_string())
}

/// Renders a raw rich-text array with the same rule the extraction
/// layer uses (`plain_text`, else `text.content`, in order).
fn title_text(runs: &Value) -> String {
    let runs: Vec<RichTextRun> = serde_json::from_value(runs.clone()).unwrap_or_default();
    concat_rich_text(&runs)
}

fn timestamp_field(value: &Value, key: &str) -> Option<DateTime<Utc>> {
    value
        .get(key)
        .and_then(Value::as_str)
        .and_then(|ts| ts.parse::<DateTime<Utc>>().ok())
}
