//! Periodic job scheduling
//!
//! Registers two independent cron triggers on a `tokio-cron-scheduler`
//! instance: the `scrape` job (harvester run chained with a scraper run) and
//! the `clean_db` job (retention sweep). Each job catches and logs its own
//! failure so a bad run never prevents the next trigger from firing.

use crate::config::Config;
use crate::crawler::run_scrape_cycle;
use crate::queue::UrlQueue;
use crate::storage::{retention_cutoff, AdvertStore};
use crate::Result;
use chrono::Utc;
use reqwest::Client;
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};
use tracing::{error, info};

/// Stable identifier of the scrape job, used for dispatch and log correlation.
pub const SCRAPE_JOB: &str = "scrape";

/// Stable identifier of the retention sweep job.
pub const CLEAN_JOB: &str = "clean_db";

/// Builds a daily cron expression firing at the given hour and minute.
///
/// The scheduler uses six-field expressions with a leading seconds column.
pub fn cron_expr(hour: u8, minute: u8) -> String {
    format!("0 {} {} * * *", minute, hour)
}

/// Runs one retention sweep: deletes records older than the configured
/// retention window.
pub async fn run_retention_sweep(store: &dyn AdvertStore, retention_days: i64) -> Result<u64> {
    let cutoff = retention_cutoff(Utc::now(), retention_days);
    let deleted = store.delete_older_than(cutoff).await?;
    info!(
        job = CLEAN_JOB,
        "retention sweep deleted {} records older than {}", deleted, cutoff
    );
    Ok(deleted)
}

/// Builds the scheduler with both periodic jobs registered.
///
/// The returned scheduler is not started; the caller decides when the
/// triggers go live.
pub async fn build_scheduler(
    config: Arc<Config>,
    client: Client,
    queue: Arc<dyn UrlQueue>,
    store: Arc<dyn AdvertStore>,
) -> Result<JobScheduler> {
    let scheduler = JobScheduler::new().await?;

    let scrape_schedule = cron_expr(config.schedule.scrape_hour, config.schedule.scrape_minute);
    let clean_schedule = cron_expr(config.schedule.clean_hour, config.schedule.clean_minute);

    let scrape_config = Arc::clone(&config);
    let scrape_queue = Arc::clone(&queue);
    let scrape_store = Arc::clone(&store);
    let scrape_job = Job::new_async(scrape_schedule.as_str(), move |_uuid, _lock| {
        let config = Arc::clone(&scrape_config);
        let queue = Arc::clone(&scrape_queue);
        let store = Arc::clone(&scrape_store);
        let client = client.clone();
        Box::pin(async move {
            info!(job = SCRAPE_JOB, "starting scheduled scrape run");
            match run_scrape_cycle(&client, &config, queue, store).await {
                Ok(report) => info!(
                    job = SCRAPE_JOB,
                    "scrape run finished: {} urls harvested, {} records saved",
                    report.harvest.urls_enqueued,
                    report.scrape.saved
                ),
                Err(err) => error!(job = SCRAPE_JOB, "scrape run failed: {}", err),
            }
        })
    })?;
    scheduler.add(scrape_job).await?;

    let clean_config = Arc::clone(&config);
    let clean_store = Arc::clone(&store);
    let clean_job = Job::new_async(clean_schedule.as_str(), move |_uuid, _lock| {
        let config = Arc::clone(&clean_config);
        let store = Arc::clone(&clean_store);
        Box::pin(async move {
            info!(job = CLEAN_JOB, "starting scheduled retention sweep");
            if let Err(err) = run_retention_sweep(&*store, config.schedule.retention_days).await {
                error!(job = CLEAN_JOB, "retention sweep failed: {}", err);
            }
        })
    })?;
    scheduler.add(clean_job).await?;

    info!(
        "registered jobs: {} at {}, {} at {}",
        SCRAPE_JOB, scrape_schedule, CLEAN_JOB, clean_schedule
    );
    Ok(scheduler)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cron_expr_format() {
        assert_eq!(cron_expr(7, 0), "0 0 7 * * *");
        assert_eq!(cron_expr(6, 30), "0 30 6 * * *");
        assert_eq!(cron_expr(23, 59), "0 59 23 * * *");
    }
}
