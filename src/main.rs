//! Autoria-Scraper entry point
//!
//! Command-line interface for the advertisement ingestion pipeline. The
//! default mode starts the cron scheduler and parks until interrupted;
//! one-shot modes run a single scrape cycle or retention sweep and exit.

use anyhow::Context;
use autoria_scraper::config::load_config_with_hash;
use autoria_scraper::crawler::{build_http_client, run_scrape_cycle};
use autoria_scraper::queue::{RedisUrlQueue, UrlQueue};
use autoria_scraper::schedule::{build_scheduler, run_retention_sweep};
use autoria_scraper::storage::{AdvertStore, PgAdvertStore};
use autoria_scraper::Config;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Autoria-Scraper: used-car advertisement ingestion pipeline
///
/// Harvests detail-page URLs from a paginated listing endpoint into a shared
/// Redis queue, scrapes each detail page into a normalized record, persists
/// records to Postgres and prunes stale ones on a schedule.
#[derive(Parser, Debug)]
#[command(name = "autoria-scraper")]
#[command(version = "1.0.0")]
#[command(about = "Used-car advertisement ingestion pipeline", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Run one scrape cycle (harvest + drain) and exit
    #[arg(long, conflicts_with_all = ["clean_once", "dry_run"])]
    scrape_once: bool,

    /// Run one retention sweep and exit
    #[arg(long, conflicts_with_all = ["scrape_once", "dry_run"])]
    clean_once: bool,

    /// Validate config and show what would run without touching the network
    #[arg(long, conflicts_with_all = ["scrape_once", "clean_once"])]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (config, config_hash) =
        load_config_with_hash(&cli.config).context("failed to load configuration")?;
    tracing::info!("Configuration loaded (hash: {})", config_hash);

    if cli.dry_run {
        print_dry_run(&config);
        return Ok(());
    }

    let client =
        build_http_client(&config.user_agent).context("failed to build HTTP client")?;

    let queue: Arc<dyn UrlQueue> = Arc::new(
        RedisUrlQueue::connect(&config.queue.redis_url, &config.queue.key)
            .await
            .context("failed to connect to Redis")?,
    );
    let store: Arc<dyn AdvertStore> = Arc::new(
        PgAdvertStore::connect(&config.database.url, config.database.max_connections)
            .await
            .context("failed to connect to Postgres")?,
    );

    if cli.scrape_once {
        let report = run_scrape_cycle(&client, &config, queue, store).await?;
        tracing::info!(
            "scrape cycle finished: {} urls harvested from {} pages, {} records saved",
            report.harvest.urls_enqueued,
            report.harvest.pages,
            report.scrape.saved
        );
        return Ok(());
    }

    if cli.clean_once {
        let deleted = run_retention_sweep(&*store, config.schedule.retention_days).await?;
        tracing::info!("retention sweep finished: {} records deleted", deleted);
        return Ok(());
    }

    let config = Arc::new(config);
    let scheduler = build_scheduler(Arc::clone(&config), client, queue, store)
        .await
        .context("failed to build scheduler")?;
    scheduler.start().await.context("failed to start scheduler")?;
    tracing::info!("scheduler started; waiting for triggers (Ctrl-C to stop)");

    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for shutdown signal")?;
    tracing::info!("shutting down");

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("autoria_scraper=info,warn"),
            1 => EnvFilter::new("autoria_scraper=debug,info"),
            2 => EnvFilter::new("autoria_scraper=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Prints the validated configuration without running anything
fn print_dry_run(config: &Config) {
    println!("=== Autoria-Scraper Dry Run ===\n");

    println!("Source:");
    println!("  Base URL: {}", config.source.base_url);

    println!("\nScraper:");
    println!("  Page delay: {}ms", config.scraper.page_delay_ms);
    println!("  Request delay: {}ms", config.scraper.request_delay_ms);
    match config.scraper.max_pages {
        Some(max_pages) => println!("  Max pages: {}", max_pages),
        None => println!("  Max pages: unlimited"),
    }
    match config.scraper.max_items {
        Some(max_items) => println!("  Max items: {}", max_items),
        None => println!("  Max items: unlimited"),
    }

    println!("\nQueue:");
    println!("  Redis URL: {}", config.queue.redis_url);
    println!("  Key: {}", config.queue.key);

    println!("\nSchedule:");
    println!(
        "  scrape: daily at {:02}:{:02}",
        config.schedule.scrape_hour, config.schedule.scrape_minute
    );
    println!(
        "  clean_db: daily at {:02}:{:02} (retention: {} days)",
        config.schedule.clean_hour, config.schedule.clean_minute, config.schedule.retention_days
    );

    println!("\n✓ Configuration is valid");
}
