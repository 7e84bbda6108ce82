use serde::Deserialize;

/// Main configuration structure for the scraper
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub source: SourceConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    pub scraper: ScraperConfig,
    pub queue: QueueConfig,
    pub database: DatabaseConfig,
    pub schedule: ScheduleConfig,
}

/// Listing source configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    /// Base listing URL; page N > 1 is fetched as `{base-url}?page=N`
    #[serde(rename = "base-url")]
    pub base_url: String,
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// URL with information about the crawler
    #[serde(rename = "contact-url")]
    pub contact_url: String,

    /// Email address for crawler-related contact
    #[serde(rename = "contact-email")]
    pub contact_email: String,
}

/// Crawl pacing and batch limits
#[derive(Debug, Clone, Deserialize)]
pub struct ScraperConfig {
    /// Delay between listing page fetches (milliseconds)
    #[serde(rename = "page-delay-ms")]
    pub page_delay_ms: u64,

    /// Delay before each detail page fetch (milliseconds)
    #[serde(rename = "request-delay-ms")]
    pub request_delay_ms: u64,

    /// Cap on listing pages per harvester run (debug/limited mode)
    #[serde(rename = "max-pages", default)]
    pub max_pages: Option<u32>,

    /// Cap on detail pages per scraper run (debug/limited mode)
    #[serde(rename = "max-items", default)]
    pub max_items: Option<usize>,
}

/// Shared URL queue configuration
#[derive(Debug, Clone, Deserialize)]
pub struct QueueConfig {
    #[serde(rename = "redis-url")]
    pub redis_url: String,

    /// Name of the key holding the pending-URL bag
    #[serde(default = "default_queue_key")]
    pub key: String,
}

fn default_queue_key() -> String {
    "adv_urls".to_string()
}

/// Relational store configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Postgres DSN
    pub url: String,

    #[serde(rename = "max-connections", default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_max_connections() -> u32 {
    5
}

/// Cron trigger configuration for the two periodic jobs
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleConfig {
    /// Hour (0-23) at which the scrape job fires
    #[serde(rename = "scrape-hour")]
    pub scrape_hour: u8,

    /// Minute (0-59) at which the scrape job fires
    #[serde(rename = "scrape-minute", default)]
    pub scrape_minute: u8,

    /// Hour (0-23) at which the retention sweep fires
    #[serde(rename = "clean-hour")]
    pub clean_hour: u8,

    /// Minute (0-59) at which the retention sweep fires
    #[serde(rename = "clean-minute", default)]
    pub clean_minute: u8,

    /// Records with `created_at` older than this many days are swept
    #[serde(rename = "retention-days", default = "default_retention_days")]
    pub retention_days: i64,
}

fn default_retention_days() -> i64 {
    1
}
