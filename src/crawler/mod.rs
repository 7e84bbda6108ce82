//! Crawler module
//!
//! Two sequential stages coordinated through the shared URL queue:
//! - the listing harvester paginates the listing endpoint and enqueues
//!   detail-page URLs;
//! - the detail scraper drains the queue, extracts fields from each detail
//!   page and hands records to the persistence sink.
//!
//! Fetches within a run are sequential and throttled; concurrency would
//! defeat the rate-limit contract with the source site.

mod detail;
mod fetcher;
mod listing;
mod parser;

pub use detail::{DetailScraper, ItemOutcome, ScrapeSummary};
pub use fetcher::{build_http_client, fetch_page};
pub use listing::{listing_page_url, HarvestSummary, ListingHarvester};
pub use parser::{extract_listing_links, has_next_page, parse_advert};

use crate::config::Config;
use crate::queue::UrlQueue;
use crate::storage::AdvertStore;
use crate::Result;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Combined report for one scheduled scrape run.
#[derive(Debug)]
pub struct ScrapeRunReport {
    pub harvest: HarvestSummary,
    pub scrape: ScrapeSummary,
}

/// Runs one full scrape cycle: a harvester sweep of the listing endpoint
/// followed by a scraper drain of the resulting queue.
pub async fn run_scrape_cycle(
    client: &Client,
    config: &Config,
    queue: Arc<dyn UrlQueue>,
    store: Arc<dyn AdvertStore>,
) -> Result<ScrapeRunReport> {
    let base_url = Url::parse(&config.source.base_url)?;

    let harvester = ListingHarvester::new(
        client.clone(),
        base_url,
        Arc::clone(&queue),
        Duration::from_millis(config.scraper.page_delay_ms),
        config.scraper.max_pages,
    );
    let harvest = harvester.run().await?;

    let scraper = DetailScraper::new(
        client.clone(),
        queue,
        store,
        Duration::from_millis(config.scraper.request_delay_ms),
        config.scraper.max_items,
    );
    let scrape = scraper.run().await?;

    Ok(ScrapeRunReport { harvest, scrape })
}
