// src/api/pagination.rs
//! Cursor pagination: one logical collection from many page requests.
//!
//! Pages are fetched strictly in server order and appended in order —
//! the continuation cursor makes concurrent fan-out unsafe, so there is
//! none. Failure is a failure: any transport or API error aborts the
//! whole fetch and surfaces as `Err`, never as a silently empty
//! collection.

use super::parser::PaginatedResponse;
use crate::constants::{NOTION_API_PAGE_SIZE, PAGE_FETCH_DELAY_MS};
use crate::error::AppError;
use crate::types::RowLimit;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Cooperative cancellation flag, checked between page fetches.
///
/// Cancellation never interrupts an in-flight request; it takes effect
/// at the next page boundary, so the ordering guarantee is unaffected.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Fetches every page of a cursor-paginated collection.
///
/// `fetch_page` is called once per iteration with the requested page
/// size and the continuation cursor from the previous response. The
/// loop stops when the API reports no more pages, when `limit` is
/// satisfied, or when `cancel` fires; the accumulated items are
/// truncated to the limit before returning, so a source that cannot
/// honor a server-side page size still yields exactly the first N
/// items in original order.
///
/// A fixed courtesy delay separates consecutive page requests.
pub async fn fetch_all_pages<T, F, Fut>(
    mut fetch_page: F,
    limit: RowLimit,
    cancel: &CancelToken,
    mut progress: impl FnMut(&str),
) -> Result<Vec<T>, AppError>
where
    F: FnMut(usize, Option<String>) -> Fut,
    Fut: std::future::Future<Output = Result<PaginatedResponse<T>, AppError>>,
{
    let mut all_items: Vec<T> = Vec::new();
    let mut cursor: Option<String> = None;

    loop {
        if cancel.is_cancelled() {
            log::info!("Fetch cancelled after {} items", all_items.len());
            return Err(AppError::Cancelled {
                items_fetched: all_items.len(),
            });
        }

        // Ask for no more than the limit still needs; sources that
        // ignore the hint are handled by the final truncation.
        let page_size = match limit.ceiling() {
            Some(ceiling) => NOTION_API_PAGE_SIZE.min(ceiling - all_items.len()),
            None => NOTION_API_PAGE_SIZE,
        };

        let response = fetch_page(page_size, cursor).await?;

        let has_more = response.has_more;
        cursor = response.next_cursor;
        all_items.extend(response.results);

        progress(&format!("Fetching... ({} items so far)", all_items.len()));

        if !has_more || cursor.is_none() || limit.reached(all_items.len()) {
            break;
        }

        tokio::time::sleep(Duration::from_millis(PAGE_FETCH_DELAY_MS)).await;
    }

    if let Some(ceiling) = limit.ceiling() {
        // Truncation, not sampling: keep the head, drop the tail.
        all_items.truncate(ceiling);
    }

    Ok(all_items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    /// A fake paginated source: three pages of ten items each.
    fn fake_source(
        pages_served: Arc<AtomicUsize>,
    ) -> impl FnMut(
        usize,
        Option<String>,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<PaginatedResponse<u32>, AppError>> + Send>,
    > {
        move |_page_size, cursor| {
            let pages_served = pages_served.clone();
            Box::pin(async move {
                let page_index: u32 = cursor.map(|c| c.parse().unwrap()).unwrap_or(0);
                pages_served.fetch_add(1, Ordering::SeqCst);
                let start = page_index * 10;
                Ok(PaginatedResponse {
                    results: (start..start + 10).collect(),
                    next_cursor: Some((page_index + 1).to_string()),
                    has_more: page_index < 2,
                })
            })
        }
    }

    #[tokio::test(start_paused = true)]
    async fn fetches_all_pages_in_order() {
        let pages = Arc::new(AtomicUsize::new(0));
        let items = fetch_all_pages(
            fake_source(pages.clone()),
            RowLimit::Unbounded,
            &CancelToken::new(),
            |_| {},
        )
        .await
        .unwrap();

        assert_eq!(items, (0..30).collect::<Vec<u32>>());
        assert_eq!(pages.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn row_limit_truncates_to_exact_head() {
        let pages = Arc::new(AtomicUsize::new(0));
        let items = fetch_all_pages(
            fake_source(pages.clone()),
            RowLimit::Limit(15),
            &CancelToken::new(),
            |_| {},
        )
        .await
        .unwrap();

        assert_eq!(items, (0..15).collect::<Vec<u32>>());
        // the source ignores the page-size hint, so the second page
        // overshoots and the loop must stop there
        assert_eq!(pages.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn progress_reports_after_each_page() {
        let mut statuses = Vec::new();
        fetch_all_pages(
            fake_source(Arc::new(AtomicUsize::new(0))),
            RowLimit::Unbounded,
            &CancelToken::new(),
            |status| statuses.push(status.to_string()),
        )
        .await
        .unwrap();

        assert_eq!(statuses.len(), 3);
        assert!(statuses[0].contains("10 items"));
        assert!(statuses[2].contains("30 items"));
    }

    #[tokio::test(start_paused = true)]
    async fn cancellation_takes_effect_before_first_page() {
        let cancel = CancelToken::new();
        cancel.cancel();
        let err = fetch_all_pages(
            fake_source(Arc::new(AtomicUsize::new(0))),
            RowLimit::Unbounded,
            &cancel,
            |_| {},
        )
        .await
        .unwrap_err();

        assert!(matches!(err, AppError::Cancelled { items_fetched: 0 }));
    }

    #[tokio::test(start_paused = true)]
    async fn error_aborts_with_no_partial_results() {
        let result: Result<Vec<u32>, AppError> = fetch_all_pages(
            |_, cursor: Option<String>| async move {
                if cursor.is_none() {
                    Ok(PaginatedResponse {
                        results: vec![1, 2, 3],
                        next_cursor: Some("next".to_string()),
                        has_more: true,
                    })
                } else {
                    Err(AppError::MalformedResponse("boom".to_string()))
                }
            },
            RowLimit::Unbounded,
            &CancelToken::new(),
            |_| {},
        )
        .await;

        assert!(result.is_err());
    }
}
