// src/lib.rs
//! notion-tabular library — pulls Notion databases and pages into
//! uniform tables for analysis, export, and AI prompt construction.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling** — `AppError`, `ValidationError`, `FetchFailure`
//! - **Configuration** — `SessionConfig`, `CsvEncoding`
//! - **Domain model** — `DatabaseRow`, `RawProperty`, `RawBlock`, etc.
//! - **Domain types** — `NotionId`, `ApiKey`, `RowLimit`
//! - **API client** — `NotionFetcher`, `NotionHttpClient`, pagination
//! - **Table** — `UniformTable`, builders, stats, summary rendering
//! - **AI surface** — sampling, prompt builders, `TextCompletion`

// Internal modules — must match what's in main.rs
mod api;
mod config;
mod constants;
mod error;
mod export;
mod extract;
mod model;
mod prompt;
mod sample;
mod table;
mod types;

// --- Error Handling ---
pub use crate::error::{classify_fetch_failure, AppError, FetchFailure, NotionErrorCode, Result};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{CommandLineInput, CsvEncoding, SessionConfig};

// --- Domain Model ---
pub use crate::model::{
    BlockPayload, DatabaseRow, DateValue, FormulaResult, RawBlock, RawProperty, RelationRef,
    RichTextRun, RollupResult, SelectOption, TextContent, UserRef,
};

// --- Domain Types ---
pub use crate::types::{ApiKey, NotionId, RowLimit};

// --- API Client ---
pub use crate::api::{
    client::ApiResponse,
    fetch_all_pages,
    parser::{parse_api_response, parse_paginated},
    CancelToken, NotionFetcher, NotionHttpClient, PaginatedResponse, ResourceCheck, ResourceInfo,
    ResourceKind,
};

// --- Extraction ---
pub use crate::extract::{concat_rich_text, extract_block_content, extract_property, Scalar};

// --- Table ---
pub use crate::table::{
    build_from_blocks, build_from_database_rows, render_summary, ColumnDtype, ColumnStats,
    NormalizedRecord, NumericStats, UniformTable,
};

// --- Sampling ---
pub use crate::sample::{select_sample, SampleSelection, SamplingPurpose};

// --- Prompts ---
pub use crate::prompt::{
    build_analysis_prompt, build_infographic_prompt, build_insight_prompt, run_analysis,
    run_infographic, run_insights, TextCompletion,
};

// --- Export ---
pub use crate::export::{to_csv, to_spreadsheet};
