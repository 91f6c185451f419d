// src/main.rs

// Modules defined in the crate
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

use crate::api::{CancelToken, NotionFetcher, NotionHttpClient, ResourceKind};
use crate::config::{CommandLineInput, SessionConfig};
use crate::error::{AppError, FetchFailure};
use crate::table::{build_from_blocks, build_from_database_rows, render_summary, UniformTable};
use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::ConsoleAppender,
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use std::fs;

/// Sets up logging configuration.
fn setup_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let log_file_path = std::env::temp_dir().join("notion_tabular.log");
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    let stdout_appender = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("stdout")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    log::info!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

/// What the user should do about a failed fetch, by failure class.
fn remediation_hint(failure: &FetchFailure) -> &'static str {
    match failure {
        FetchFailure::NotFound => "Check the URL or ID — the page or database does not exist.",
        FetchFailure::AccessDenied { .. } => {
            "Share the page or database with your integration in Notion, then retry."
        }
        FetchFailure::ClientNotReady => "Set the NOTION_API_KEY environment variable and retry.",
        FetchFailure::Other { .. } => "Check your network connection and the Notion service status.",
    }
}

/// Fetches the resource and normalizes it into a table: database rows
/// when the ID names a database, content blocks when it names a page.
async fn fetch_table(fetcher: &NotionFetcher, config: &SessionConfig) -> Result<UniformTable, AppError> {
    let check = fetcher.validate_resource(&config.notion_id).await;
    if !check.valid {
        if let Some(failure) = &check.failure {
            eprintln!("⚠️  {}", remediation_hint(failure));
        }
        return Err(AppError::ResourceUnavailable(check.message));
    }

    let info = fetcher.resource_info(&config.notion_id).await?;
    println!("📄 {} \"{}\"", info.kind.as_str(), info.title);

    let cancel = CancelToken::new();
    let progress = |status: &str| log::info!("{}", status);

    match check.kind {
        ResourceKind::Database => {
            let rows = fetcher
                .query_database_rows(&config.notion_id, config.row_limit, &cancel, progress)
                .await?;
            Ok(build_from_database_rows(&rows))
        }
        _ => {
            let blocks = fetcher
                .list_page_blocks(&config.notion_id, config.row_limit, &cancel, progress)
                .await?;
            Ok(build_from_blocks(&blocks))
        }
    }
}

/// Executes one session: validate → fetch → normalize → report → export.
async fn execute_session(config: &SessionConfig) -> Result<(), AppError> {
    let client = NotionHttpClient::new(&config.api_key)?;
    let fetcher = NotionFetcher::new(client);

    let table = fetch_table(&fetcher, config).await?;
    println!(
        "✓ Fetched {} rows × {} columns",
        table.row_count(),
        table.column_count()
    );

    if config.summary {
        println!("\n{}", render_summary(&table));
    }

    if let Some(path) = &config.csv_output {
        if export::to_csv(&table, path, config.encoding) {
            println!("✓ CSV saved to {}", path.display());
        } else {
            eprintln!("⚠️  CSV export to {} failed (see log)", path.display());
        }
    }

    if let Some(path) = &config.xlsx_output {
        if export::to_spreadsheet(&table, path) {
            println!("✓ Workbook saved to {}", path.display());
        } else {
            eprintln!("⚠️  Workbook export to {} failed (see log)", path.display());
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose)?;

    let config = SessionConfig::resolve(cli)?;

    execute_session(&config).await?;

    Ok(())
}
