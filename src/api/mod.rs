// src/api/mod.rs
//! Notion API access: HTTP transport, response parsing, cursor
//! pagination, and the high-level fetcher.

pub mod client;
pub mod fetcher;
pub mod pagination;
pub mod parser;

pub use client::NotionHttpClient;
pub use fetcher::{NotionFetcher, ResourceCheck, ResourceInfo, ResourceKind};
pub use pagination::{fetch_all_pages, CancelToken};
pub use parser::PaginatedResponse;
