// src/config.rs
use crate::constants::ROW_LIMIT_PRESETS;
use crate::error::AppError;
use crate::types::{ApiKey, NotionId, RowLimit};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Help text for `--limit`, listing the preset row counts.
fn limit_help() -> String {
    let presets = ROW_LIMIT_PRESETS.map(|n| n.to_string()).join(", ");
    format!(
        "Maximum number of rows or blocks to fetch (presets: {}; omit for no limit)",
        presets
    )
}

/// Character encoding for CSV export.
///
/// Shift_JIS exists for spreadsheet tools that still assume it for
/// Japanese text; UTF-8 with BOM is the compromise that keeps Excel
/// happy without leaving Unicode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CsvEncoding {
    /// Plain UTF-8, no byte-order mark
    Utf8,
    /// UTF-8 with a byte-order mark prefix
    #[default]
    Utf8Bom,
    /// Shift_JIS (legacy Japanese spreadsheet tools)
    ShiftJis,
}

impl CsvEncoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Utf8Bom => "utf-8-bom",
            Self::ShiftJis => "shift_jis",
        }
    }
}

impl std::fmt::Display for CsvEncoding {
    // clap's value names, so --help shows a parseable default
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Utf8 => "utf8",
            Self::Utf8Bom => "utf8-bom",
            Self::ShiftJis => "shift-jis",
        };
        write!(f, "{}", name)
    }
}

/// Parsed and validated command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// Notion page/database URL or ID (e.g., "https://www.notion.so/...")
    pub notion_input: String,

    /// Write the normalized table as CSV to this path
    #[arg(short = 'o', long)]
    pub csv_output: Option<String>,

    /// Write the normalized table as an Excel workbook to this path
    #[arg(short = 'x', long)]
    pub xlsx_output: Option<String>,

    /// Character encoding for CSV output
    #[arg(long, value_enum, default_value_t = CsvEncoding::Utf8Bom)]
    pub encoding: CsvEncoding,

    #[arg(short = 'l', long, help = limit_help())]
    pub limit: Option<usize>,

    /// Print the per-column summary after fetching
    #[arg(short = 's', long, default_value_t = false)]
    pub summary: bool,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Resolved session configuration — validated and ready to drive a fetch.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub notion_id: NotionId,
    pub api_key: ApiKey,
    pub row_limit: RowLimit,
    pub csv_output: Option<PathBuf>,
    pub xlsx_output: Option<PathBuf>,
    pub encoding: CsvEncoding,
    pub summary: bool,
    #[allow(dead_code)] // Used by bin crate
    pub verbose: bool,
    /// The raw URL/input string — preserved for diagnostics.
    pub raw_input: String,
}

impl SessionConfig {
    /// Resolves a complete session configuration from CLI input and environment.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        let api_key_str = std::env::var("NOTION_API_KEY").map_err(|_| {
            AppError::MissingConfiguration(
                "NOTION_API_KEY environment variable not set".to_string(),
            )
        })?;
        Self::resolve_with_key(cli, api_key_str)
    }

    /// Resolves with an explicit API key, bypassing the environment.
    pub fn resolve_with_key(cli: CommandLineInput, api_key_str: String) -> Result<Self, AppError> {
        let api_key = ApiKey::new(api_key_str)?;
        let notion_id = NotionId::parse(&cli.notion_input)?;

        let row_limit = match cli.limit {
            Some(n) => RowLimit::custom(n)?,
            None => RowLimit::Unbounded,
        };

        Ok(SessionConfig {
            notion_id,
            api_key,
            row_limit,
            csv_output: cli.csv_output.map(PathBuf::from),
            xlsx_output: cli.xlsx_output.map(PathBuf::from),
            encoding: cli.encoding,
            summary: cli.summary,
            verbose: cli.verbose,
            raw_input: cli.notion_input,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(input: &str) -> CommandLineInput {
        CommandLineInput {
            notion_input: input.to_string(),
            csv_output: None,
            xlsx_output: None,
            encoding: CsvEncoding::Utf8Bom,
            limit: None,
            summary: false,
            verbose: false,
        }
    }

    #[test]
    fn blank_api_key_is_rejected() {
        let err = SessionConfig::resolve_with_key(
            cli("12345678123456781234567812345678"),
            "   ".to_string(),
        )
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn zero_limit_is_rejected() {
        let mut input = cli("12345678123456781234567812345678");
        input.limit = Some(0);
        assert!(SessionConfig::resolve_with_key(input, "secret_test_key".to_string()).is_err());
    }

    #[test]
    fn resolve_parses_id_and_limit() {
        let mut input = cli("12345678123456781234567812345678");
        input.limit = Some(500);
        let config =
            SessionConfig::resolve_with_key(input, "secret_test_key".to_string()).unwrap();
        assert_eq!(config.notion_id.as_str(), "12345678123456781234567812345678");
        assert_eq!(config.row_limit, RowLimit::Limit(500));
    }

    #[test]
    fn limit_help_lists_every_preset() {
        let help = limit_help();
        for preset in ROW_LIMIT_PRESETS {
            assert!(help.contains(&preset.to_string()), "{}", preset);
        }
    }

    #[test]
    fn encoding_names_are_stable() {
        assert_eq!(CsvEncoding::Utf8.as_str(), "utf-8");
        assert_eq!(CsvEncoding::Utf8Bom.as_str(), "utf-8-bom");
        assert_eq!(CsvEncoding::ShiftJis.as_str(), "shift_jis");
    }
}
