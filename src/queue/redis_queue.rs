//! Redis-backed URL queue
//!
//! The bag lives under one named key holding a JSON-encoded array of URL
//! strings, with no TTL. `enqueue` is read-modify-write: fetch the current
//! payload, concatenate, overwrite.

use crate::queue::{decode_urls, encode_urls, UrlQueue};
use crate::Result;
use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;

/// URL queue stored in a single Redis key.
pub struct RedisUrlQueue {
    connection: MultiplexedConnection,
    key: String,
}

impl RedisUrlQueue {
    /// Connects to Redis and binds the queue to the given key.
    pub async fn connect(redis_url: &str, key: &str) -> Result<Self> {
        let client = redis::Client::open(redis_url)?;
        let connection = client.get_multiplexed_async_connection().await?;
        Ok(Self {
            connection,
            key: key.to_string(),
        })
    }

    async fn read_bag(&self) -> Result<Vec<String>> {
        let mut conn = self.connection.clone();
        let payload: Option<String> = conn.get(&self.key).await?;
        decode_urls(payload.as_deref())
    }
}

#[async_trait]
impl UrlQueue for RedisUrlQueue {
    async fn enqueue(&self, urls: &[String]) -> Result<()> {
        if urls.is_empty() {
            return Ok(());
        }

        let mut bag = self.read_bag().await?;
        bag.extend_from_slice(urls);

        let mut conn = self.connection.clone();
        let _: () = conn.set(&self.key, encode_urls(&bag)?).await?;
        Ok(())
    }

    async fn drain_all(&self) -> Result<Vec<String>> {
        self.read_bag().await
    }

    async fn clear(&self) -> Result<()> {
        let mut conn = self.connection.clone();
        let _: () = conn.del(&self.key).await?;
        Ok(())
    }
}
