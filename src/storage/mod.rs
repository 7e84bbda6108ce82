//! Persistence sink for advertisement records
//!
//! Wraps the relational store behind a trait so the scraper can be exercised
//! against a fake in tests. Each insert commits independently; there is no
//! cross-record transaction, so a batch can persist partially.

mod postgres;
pub mod schema;

pub use postgres::PgAdvertStore;

use crate::advert::NewAdvert;
use crate::Result;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

/// Trait for the advertisement store.
#[async_trait]
pub trait AdvertStore: Send + Sync {
    /// Inserts one normalized advertisement. `created_at` is assigned by the
    /// store at insert time.
    async fn insert(&self, advert: &NewAdvert) -> Result<()>;

    /// Deletes all records with `created_at <= cutoff`; returns the number of
    /// rows removed. Used only by the retention sweep.
    async fn delete_older_than(&self, cutoff: DateTime<Utc>) -> Result<u64>;
}

/// Computes the retention cutoff: records created at or before this instant
/// are swept.
pub fn retention_cutoff(now: DateTime<Utc>, retention_days: i64) -> DateTime<Utc> {
    now - Duration::days(retention_days)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retention_cutoff_selects_stale_records() {
        let now = Utc::now();
        let cutoff = retention_cutoff(now, 1);

        let ages_hours = [(48, true), (25, true), (23, false), (1, false)];
        for (age, expect_swept) in ages_hours {
            let created_at = now - Duration::hours(age);
            assert_eq!(
                created_at <= cutoff,
                expect_swept,
                "record aged {}h should{} be swept",
                age,
                if expect_swept { "" } else { " not" }
            );
        }
    }

    #[test]
    fn test_retention_cutoff_respects_configured_days() {
        let now = Utc::now();
        let cutoff = retention_cutoff(now, 7);
        assert_eq!(now - cutoff, Duration::days(7));
    }
}
