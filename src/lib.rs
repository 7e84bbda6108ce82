//! Autoria-Scraper: advertisement ingestion pipeline
//!
//! This crate implements a two-stage crawler for a paginated used-car listing
//! site: a listing harvester that collects detail-page URLs into a shared
//! Redis-backed queue, and a detail scraper that drains the queue, extracts
//! structured fields and persists advertisement records to Postgres. Both
//! stages run on independent cron schedules alongside a retention sweep that
//! prunes stale records.

pub mod advert;
pub mod config;
pub mod crawler;
pub mod normalize;
pub mod queue;
pub mod schedule;
pub mod storage;

use thiserror::Error;

/// Main error type for scraper operations
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Unexpected status {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Queue error: {0}")]
    Queue(#[from] redis::RedisError),

    #[error("Queue payload error: {0}")]
    QueuePayload(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Scheduler error: {0}")]
    Scheduler(#[from] tokio_cron_scheduler::JobSchedulerError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for scraper operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use advert::NewAdvert;
pub use config::Config;
pub use queue::UrlQueue;
pub use storage::AdvertStore;
