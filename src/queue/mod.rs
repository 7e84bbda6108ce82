//! Shared URL queue
//!
//! The harvester and the detail scraper communicate through a single named
//! bag of pending detail-page URLs that survives process restarts. Draining
//! is non-destructive; `clear` is the coarse acknowledgment issued after a
//! full batch has been processed. If a run crashes between drain and clear,
//! the same URLs are redelivered on the next run (at-least-once).
//!
//! No per-URL uniqueness is enforced: the same URL can appear twice when two
//! harvester runs complete before a scraper drain.

mod memory;
mod redis_queue;

pub use memory::MemoryUrlQueue;
pub use redis_queue::RedisUrlQueue;

use crate::Result;
use async_trait::async_trait;

/// Trait for the shared pending-URL bag.
///
/// Implementations must be safe to call from independent worker tasks;
/// `enqueue` is a read-modify-write merge, so non-overlapping runs are
/// assumed to be guaranteed by the scheduler's own serialization.
#[async_trait]
pub trait UrlQueue: Send + Sync {
    /// Merges a batch of URLs into the existing bag.
    async fn enqueue(&self, urls: &[String]) -> Result<()>;

    /// Returns the full current bag without removing it.
    async fn drain_all(&self) -> Result<Vec<String>>;

    /// Deletes the bag. Called once after a batch completes.
    async fn clear(&self) -> Result<()>;
}

/// Encodes a URL bag as the JSON array stored under the queue key.
pub(crate) fn encode_urls(urls: &[String]) -> Result<String> {
    Ok(serde_json::to_string(urls)?)
}

/// Decodes the JSON payload stored under the queue key.
///
/// A missing key decodes to an empty bag.
pub(crate) fn decode_urls(payload: Option<&str>) -> Result<Vec<String>> {
    match payload {
        Some(raw) => Ok(serde_json::from_str(raw)?),
        None => Ok(Vec::new()),
    }
}
