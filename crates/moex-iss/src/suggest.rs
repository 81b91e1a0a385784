//! Suggestion-loading operations.
//!
//! Two entry points feed a [`SuggestionSink`]:
//!
//! - [`run_search`] performs one free-text lookup.
//! - [`run_bulk_load`] walks every [`SecurityGroup`] page by page until the
//!   catalog returns an empty page.
//!
//! Both operations are infallible from the caller's view: a failed fetch is
//! logged and treated as an empty page, so the sink simply gains no entries
//! for it. Requests are issued strictly one at a time; within a bulk load
//! entries reach the sink in group order, then page order, then catalog row
//! order.

use tracing::warn;

use crate::client::CatalogClient;
use crate::models::{QueryPage, SecurityGroup};
use crate::sink::SuggestionSink;

/// Rows requested per group page.
pub const PAGE_SIZE: u32 = 100;

/// Upper bound on the row offset within one group.
///
/// Bounds runaway paging if the catalog never returns an empty page; with
/// [`PAGE_SIZE`] this caps a group at 1000 fetches. Not an expected
/// termination path.
pub const GROUP_OFFSET_LIMIT: u32 = 100_000;

/// Search securities by name fragment and append matches to the sink.
///
/// Each row with both name and isin present becomes one
/// `"<name> (<isin>)"` entry, in catalog order. Rows missing either field
/// are dropped. A failed fetch appends nothing.
pub async fn run_search(
    client: &impl CatalogClient,
    fragment: &str,
    sink: &mut impl SuggestionSink,
) {
    let page = match client.search_by_text(fragment).await {
        Ok(page) => page,
        Err(e) => {
            warn!("text search for '{}' failed: {}", fragment, e);
            QueryPage::new()
        }
    };

    append_page(page, sink);
}

/// Load every security of every known group into the sink.
///
/// Groups are walked in [`SecurityGroup::ALL`] order, one page at a time,
/// waiting for each response before requesting the next. An empty page ends
/// the group; so does a failed fetch, which silently truncates that group's
/// results without affecting the groups after it.
pub async fn run_bulk_load(client: &impl CatalogClient, sink: &mut impl SuggestionSink) {
    for group in SecurityGroup::ALL {
        let mut page_start = 0;

        while page_start < GROUP_OFFSET_LIMIT {
            let page = match client.search_by_group_page(group, page_start).await {
                Ok(page) => page,
                Err(e) => {
                    warn!(
                        "group {} page at offset {} failed, truncating group: {}",
                        group, page_start, e
                    );
                    break;
                }
            };

            if page.is_empty() {
                break;
            }

            append_page(page, sink);
            page_start += PAGE_SIZE;
        }
    }
}

fn append_page(page: QueryPage, sink: &mut impl SuggestionSink) {
    for row in page {
        if let Some(entry) = row.suggestion() {
            sink.append(entry);
        }
    }
}
