// src/constants.rs
//! Domain constants that define the operational boundaries of the system.
//!
//! Each constant is named for the domain concept it constrains. Reading
//! these should tell you how the system operates: how big a fetch page is,
//! how politely it paces the API, and how much data an AI prompt may carry.

// ---------------------------------------------------------------------------
// Notion API boundaries
// ---------------------------------------------------------------------------

/// How many objects the Notion API returns per page of results.
///
/// The Notion API maximum is 100. We use the maximum to minimize
/// round-trips while paginating.
pub const NOTION_API_PAGE_SIZE: usize = 100;

/// Courtesy delay between consecutive page requests, in milliseconds.
///
/// Notion rate-limits integrations to roughly three requests per second;
/// a fixed pause between pages keeps a long fetch well under that ceiling.
pub const PAGE_FETCH_DELAY_MS: u64 = 100;

/// Canonical length of a Notion object ID once hyphens are stripped.
pub const NOTION_ID_LENGTH: usize = 32;

// ---------------------------------------------------------------------------
// Reserved table columns
// ---------------------------------------------------------------------------
//
// The metadata columns are labeled in Japanese and downstream consumers
// (CSV headers, AI prompts) depend on those exact strings, so they are
// part of the table contract.

/// Object ID column, present in both database and block tables.
pub const COLUMN_ID: &str = "ID";

/// Created-time column (作成日時).
pub const COLUMN_CREATED: &str = "作成日時";

/// Last-edited-time column (最終更新日時).
pub const COLUMN_EDITED: &str = "最終更新日時";

/// Page URL column, database tables only.
pub const COLUMN_URL: &str = "URL";

/// Block type column (タイプ), block tables only.
pub const COLUMN_TYPE: &str = "タイプ";

/// Block content column (コンテンツ), block tables only.
pub const COLUMN_CONTENT: &str = "コンテンツ";

// ---------------------------------------------------------------------------
// Sampling tiers
// ---------------------------------------------------------------------------
//
// Prompt-size budgets for the downstream language model. Analysis and
// insight generation share one tier set; infographic generation produces
// much larger responses and gets a tighter budget.

/// Tables at or under this row count are sent whole for analysis/insights.
pub const ANALYSIS_FULL_THRESHOLD: usize = 100;

/// Tables at or under this row count send a medium prefix for analysis/insights.
pub const ANALYSIS_MEDIUM_THRESHOLD: usize = 1000;

/// Prefix length for medium-sized tables under the analysis policy.
pub const ANALYSIS_MEDIUM_SAMPLE: usize = 100;

/// Prefix length for large tables under the analysis policy.
pub const ANALYSIS_LARGE_SAMPLE: usize = 200;

/// Tables at or under this row count are sent whole for infographics.
pub const INFOGRAPHIC_FULL_THRESHOLD: usize = 50;

/// Tables at or under this row count send a medium prefix for infographics.
pub const INFOGRAPHIC_MEDIUM_THRESHOLD: usize = 200;

/// Prefix length for medium-sized tables under the infographic policy.
pub const INFOGRAPHIC_MEDIUM_SAMPLE: usize = 50;

/// Prefix length for large tables under the infographic policy.
pub const INFOGRAPHIC_LARGE_SAMPLE: usize = 100;

// ---------------------------------------------------------------------------
// Row-limit presets
// ---------------------------------------------------------------------------

/// Row-limit choices offered by the settings surface, smallest first.
pub const ROW_LIMIT_PRESETS: [usize; 4] = [100, 500, 1000, 5000];
