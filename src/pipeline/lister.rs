//! Drains the paginated stack resource inventory.

use async_trait::async_trait;
use tracing::debug;

use crate::error::LookupError;
use crate::model::{ResourcePage, StackResourceSummary};

/// Page-by-page access to a stack's resource inventory. The production
/// implementation talks to CloudFormation; tests use in-memory page sources.
#[async_trait]
pub trait ResourcePages: Send + Sync {
    /// Fetches one page. `continuation` is the token returned by the
    /// previous page, or `None` for the first request.
    async fn fetch_page(
        &self,
        stack_name: &str,
        continuation: Option<String>,
    ) -> Result<ResourcePage, LookupError>;
}

/// Fully drains the listing, strictly sequentially (each request depends on
/// the previous page's token), keeping only settled resources. Any page
/// failure aborts the whole listing; no partial result is returned.
pub async fn list_settled_resources(
    pages: &dyn ResourcePages,
    stack_name: &str,
) -> Result<Vec<StackResourceSummary>, LookupError> {
    let mut resources = Vec::new();
    let mut continuation = None;
    let mut page_count = 0u32;

    loop {
        let page = pages.fetch_page(stack_name, continuation).await?;
        page_count += 1;

        for summary in page.summaries {
            if summary.status.is_settled() {
                resources.push(summary);
            } else {
                debug!(
                    logical_id = %summary.logical_id,
                    status = ?summary.status,
                    "excluding non-settled resource"
                );
            }
        }

        match page.continuation {
            Some(token) => continuation = Some(token),
            None => break,
        }
    }

    debug!(
        stack = %stack_name,
        pages = page_count,
        resources = resources.len(),
        "stack resource listing drained"
    );
    Ok(resources)
}
