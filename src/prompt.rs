// src/prompt.rs
//! Prompt construction and execution for the AI-backed operations.
//!
//! Prompt text is assembled here, deterministically, from the table
//! summary and a size-adaptive sample; the actual model call lives
//! behind [`TextCompletion`] so the core stays testable without a
//! network or a vendor SDK.

use crate::error::AppError;
use crate::sample::{select_sample, SamplingPurpose};
use crate::table::{render_summary, UniformTable};
use async_trait::async_trait;

/// The seam to a text-completion backend.
///
/// Implementations translate their own failure modes into
/// [`AppError::Completion`]; callers see one error shape regardless of
/// vendor.
#[async_trait]
pub trait TextCompletion: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, AppError>;
}

/// Builds the free-form analysis prompt: the user's request verbatim,
/// then the sampled data. Deliberately minimal — anything more was
/// found to fight the user's own instructions.
pub fn build_analysis_prompt(table: &UniformTable, request: &str) -> String {
    let sample = select_sample(table, SamplingPurpose::Analysis);
    format!("{}\n\nData:\n{}", request, sample.rows.to_display_string())
}

/// Builds the automatic-insight prompt: summary, labelled sample, and
/// a fixed set of analysis perspectives.
pub fn build_insight_prompt(table: &UniformTable) -> String {
    let sample = select_sample(table, SamplingPurpose::Insight);
    format!(
        "Extract the important insights from the following Notion data.\n\n\
         {}\n\n\
         {}:\n{}\n\n\
         Analyze from these perspectives:\n\
         1. Overall trends in the data\n\
         2. Notable values and outliers\n\
         3. Data quality and completeness\n\
         4. Potential improvements\n\
         5. Business implications\n",
        render_summary(table),
        sample.label,
        sample.rows.to_display_string()
    )
}

/// Builds the HTML-infographic prompt: summary, labelled sample, the
/// optional user request, and the output requirements.
pub fn build_infographic_prompt(table: &UniformTable, user_request: Option<&str>) -> String {
    let sample = select_sample(table, SamplingPurpose::Infographic);
    let extra = match user_request {
        Some(request) if !request.trim().is_empty() => {
            format!("Special instructions: {}\n\n", request)
        }
        _ => String::new(),
    };
    format!(
        "Create a polished HTML infographic from the following data.\n\n\
         {}\n\n\
         {}:\n{}\n\n\
         {}\
         Requirements:\n\
         1. A complete HTML document, <!DOCTYPE html> through </html>\n\
         2. Responsive layout for mobile and desktop\n\
         3. Modern CSS only (flexbox/grid), embedded in a <style> tag\n\
         4. Key statistics shown as cards\n\
         5. Simple charts built with HTML/CSS, no external libraries\n\
         6. A print stylesheet via @media print\n\n\
         Return only the complete HTML code, with no surrounding explanation.\n",
        render_summary(table),
        sample.label,
        sample.rows.to_display_string(),
        extra
    )
}

/// Runs a free-form analysis of the table against the backend.
pub async fn run_analysis(
    backend: &dyn TextCompletion,
    table: &UniformTable,
    request: &str,
) -> Result<String, AppError> {
    let result = backend.complete(&build_analysis_prompt(table, request)).await?;
    log::info!("Analysis completed ({} chars)", result.len());
    Ok(result)
}

/// Runs automatic insight generation against the backend.
pub async fn run_insights(
    backend: &dyn TextCompletion,
    table: &UniformTable,
) -> Result<String, AppError> {
    let result = backend.complete(&build_insight_prompt(table)).await?;
    log::info!("Insight generation completed ({} chars)", result.len());
    Ok(result)
}

/// Runs HTML infographic generation against the backend.
pub async fn run_infographic(
    backend: &dyn TextCompletion,
    table: &UniformTable,
    user_request: Option<&str>,
) -> Result<String, AppError> {
    let result = backend
        .complete(&build_infographic_prompt(table, user_request))
        .await?;
    log::info!("Infographic generation completed ({} chars)", result.len());
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DatabaseRow;
    use crate::table::build_from_database_rows;

    fn small_table() -> UniformTable {
        let rows: Vec<DatabaseRow> = (0..3)
            .map(|i| DatabaseRow {
                id: format!("r{}", i),
                ..Default::default()
            })
            .collect();
        build_from_database_rows(&rows)
    }

    struct EchoBackend;

    #[async_trait]
    impl TextCompletion for EchoBackend {
        async fn complete(&self, prompt: &str) -> Result<String, AppError> {
            Ok(format!("echo:{}", prompt.len()))
        }
    }

    struct FailingBackend;

    #[async_trait]
    impl TextCompletion for FailingBackend {
        async fn complete(&self, _prompt: &str) -> Result<String, AppError> {
            Err(AppError::Completion("backend unavailable".to_string()))
        }
    }

    #[test]
    fn analysis_prompt_puts_request_first() {
        let prompt = build_analysis_prompt(&small_table(), "How many rows?");
        assert!(prompt.starts_with("How many rows?\n\nData:\n"));
    }

    #[test]
    fn insight_prompt_embeds_summary_and_label() {
        let prompt = build_insight_prompt(&small_table());
        assert!(prompt.contains("Data overview:"));
        assert!(prompt.contains("data sample (all rows):"));
        assert!(prompt.contains("Business implications"));
    }

    #[test]
    fn infographic_prompt_includes_user_request_only_when_present() {
        let with = build_infographic_prompt(&small_table(), Some("use blue"));
        assert!(with.contains("Special instructions: use blue"));

        let without = build_infographic_prompt(&small_table(), None);
        assert!(!without.contains("Special instructions"));

        let blank = build_infographic_prompt(&small_table(), Some("   "));
        assert!(!blank.contains("Special instructions"));
    }

    #[tokio::test]
    async fn run_analysis_delegates_to_backend() {
        let result = run_analysis(&EchoBackend, &small_table(), "count")
            .await
            .unwrap();
        assert!(result.starts_with("echo:"));
    }

    #[tokio::test]
    async fn backend_failure_propagates_as_completion_error() {
        let err = run_insights(&FailingBackend, &small_table())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Completion(_)));
    }
}
