//! Detail scraper
//!
//! Drains the shared queue and processes each URL sequentially under a fixed
//! per-request delay: fetch, extract, persist. Per-item failures are typed,
//! logged and skipped; the batch always runs to the end and the queue is
//! cleared afterwards as a single coarse completion marker. If the process
//! dies mid-batch the clear never happens and the same URLs are redelivered
//! on the next run.

use crate::crawler::fetcher::fetch_page;
use crate::crawler::parser::parse_advert;
use crate::queue::UrlQueue;
use crate::storage::AdvertStore;
use crate::Result;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, warn};

/// Outcome of processing a single queued URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemOutcome {
    Saved,
    FetchFailed(String),
    PersistFailed(String),
}

/// Summary of one scraper run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrapeSummary {
    /// URLs returned by the drain
    pub drained: usize,
    /// URLs actually processed (bounded by the item cap)
    pub processed: usize,
    pub saved: usize,
    pub fetch_failed: usize,
    pub persist_failed: usize,
}

/// One drain of the queue against the persistence sink.
pub struct DetailScraper {
    client: Client,
    queue: Arc<dyn UrlQueue>,
    store: Arc<dyn AdvertStore>,
    request_delay: Duration,
    max_items: Option<usize>,
}

impl DetailScraper {
    pub fn new(
        client: Client,
        queue: Arc<dyn UrlQueue>,
        store: Arc<dyn AdvertStore>,
        request_delay: Duration,
        max_items: Option<usize>,
    ) -> Self {
        Self {
            client,
            queue,
            store,
            request_delay,
            max_items,
        }
    }

    /// Drains the queue, processes the batch and clears the queue.
    ///
    /// Only queue failures abort the run; fetch and persist failures are
    /// per-item and the batch continues with the next URL.
    pub async fn run(&self) -> Result<ScrapeSummary> {
        let urls = self.queue.drain_all().await?;
        let limit = self.max_items.unwrap_or(urls.len());

        let mut summary = ScrapeSummary {
            drained: urls.len(),
            ..ScrapeSummary::default()
        };

        for url in urls.iter().take(limit) {
            sleep(self.request_delay).await;
            summary.processed += 1;

            match self.process_url(url).await {
                ItemOutcome::Saved => {
                    info!("saved advertisement from {}", url);
                    summary.saved += 1;
                }
                ItemOutcome::FetchFailed(reason) => {
                    warn!("fetch failed for {}: {}", url, reason);
                    summary.fetch_failed += 1;
                }
                ItemOutcome::PersistFailed(reason) => {
                    warn!("failed to persist {}: {}", url, reason);
                    summary.persist_failed += 1;
                }
            }
        }

        // Coarse acknowledgment for the whole batch, regardless of per-item
        // failures. Failed URLs are lost at this point; there is no retry or
        // dead-letter path.
        self.queue.clear().await?;

        info!(
            "scrape finished: drained {}, processed {}, saved {}, fetch failures {}, persist failures {}",
            summary.drained,
            summary.processed,
            summary.saved,
            summary.fetch_failed,
            summary.persist_failed
        );
        Ok(summary)
    }

    async fn process_url(&self, url: &str) -> ItemOutcome {
        let html = match fetch_page(&self.client, url).await {
            Ok(html) => html,
            Err(err) => return ItemOutcome::FetchFailed(err.to_string()),
        };

        let advert = parse_advert(&html, url);
        match self.store.insert(&advert).await {
            Ok(()) => ItemOutcome::Saved,
            Err(err) => ItemOutcome::PersistFailed(err.to_string()),
        }
    }
}
