//! Configuration validation
//!
//! Checks that a parsed configuration is internally consistent before any
//! component is constructed from it.

use crate::config::types::Config;
use crate::ConfigError;
use url::Url;

/// Validates a parsed configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_base_url(&config.source.base_url)?;
    validate_schedule(config)?;

    if config.queue.key.trim().is_empty() {
        return Err(ConfigError::Validation(
            "queue.key must not be empty".to_string(),
        ));
    }

    if config.database.max_connections == 0 {
        return Err(ConfigError::Validation(
            "database.max-connections must be at least 1".to_string(),
        ));
    }

    if config.schedule.retention_days < 1 {
        return Err(ConfigError::Validation(
            "schedule.retention-days must be at least 1".to_string(),
        ));
    }

    if let Some(0) = config.scraper.max_pages {
        return Err(ConfigError::Validation(
            "scraper.max-pages must be at least 1 when set".to_string(),
        ));
    }

    Ok(())
}

fn validate_base_url(base_url: &str) -> Result<(), ConfigError> {
    let url =
        Url::parse(base_url).map_err(|_| ConfigError::InvalidUrl(base_url.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(base_url.to_string()));
    }

    Ok(())
}

fn validate_schedule(config: &Config) -> Result<(), ConfigError> {
    let schedule = &config.schedule;
    for (field, hour) in [
        ("scrape-hour", schedule.scrape_hour),
        ("clean-hour", schedule.clean_hour),
    ] {
        if hour > 23 {
            return Err(ConfigError::Validation(format!(
                "schedule.{} must be in 0-23, got {}",
                field, hour
            )));
        }
    }
    for (field, minute) in [
        ("scrape-minute", schedule.scrape_minute),
        ("clean-minute", schedule.clean_minute),
    ] {
        if minute > 59 {
            return Err(ConfigError::Validation(format!(
                "schedule.{} must be in 0-59, got {}",
                field, minute
            )));
        }
    }
    Ok(())
}
