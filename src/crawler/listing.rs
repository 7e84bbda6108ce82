//! Listing harvester
//!
//! Paginates the listing endpoint starting at page 1, extracts detail-page
//! URLs from each page and appends them to the shared queue. The run ends
//! when the page carries no anchor for the next page number, or when the
//! configured page cap is reached.
//!
//! The pagination cursor is in-memory only: a crashed run restarts from
//! page 1 on the next schedule, and already-queued URLs may be re-queued.
//! The harvester has no view of persisted records and does not deduplicate
//! against them.

use crate::crawler::fetcher::fetch_page;
use crate::crawler::parser::{extract_listing_links, has_next_page};
use crate::queue::UrlQueue;
use crate::Result;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::info;
use url::Url;

/// Returns the fetch URL for a listing page. Page 1 is the bare base URL.
pub fn listing_page_url(base_url: &Url, page: u32) -> String {
    if page <= 1 {
        base_url.to_string()
    } else {
        format!("{}?page={}", base_url, page)
    }
}

/// Summary of one harvester run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HarvestSummary {
    /// Listing pages fetched
    pub pages: u32,
    /// Detail-page URLs appended to the queue (duplicates included)
    pub urls_enqueued: usize,
}

/// One full paginated sweep of the listing endpoint.
pub struct ListingHarvester {
    client: Client,
    base_url: Url,
    queue: Arc<dyn UrlQueue>,
    page_delay: Duration,
    max_pages: Option<u32>,
}

impl ListingHarvester {
    pub fn new(
        client: Client,
        base_url: Url,
        queue: Arc<dyn UrlQueue>,
        page_delay: Duration,
        max_pages: Option<u32>,
    ) -> Self {
        Self {
            client,
            base_url,
            queue,
            page_delay,
            max_pages,
        }
    }

    /// Runs the sweep. A listing fetch or queue failure ends the run; URLs
    /// enqueued from earlier pages are kept.
    pub async fn run(&self) -> Result<HarvestSummary> {
        let mut summary = HarvestSummary {
            pages: 0,
            urls_enqueued: 0,
        };
        let mut page: u32 = 1;

        loop {
            let page_url = listing_page_url(&self.base_url, page);
            let html = fetch_page(&self.client, &page_url).await?;

            let links = extract_listing_links(&html, &self.base_url);
            self.queue.enqueue(&links).await?;
            info!("saved {} links from page {}", links.len(), page);

            summary.pages = page;
            summary.urls_enqueued += links.len();

            if let Some(max_pages) = self.max_pages {
                if page >= max_pages {
                    break;
                }
            }
            if !has_next_page(&html, &self.base_url, page + 1) {
                break;
            }

            page += 1;
            sleep(self.page_delay).await;
        }

        info!(
            "harvest finished: {} urls from {} pages",
            summary.urls_enqueued, summary.pages
        );
        Ok(summary)
    }
}
