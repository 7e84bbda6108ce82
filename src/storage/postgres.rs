//! Postgres implementation of the advertisement store

use crate::advert::NewAdvert;
use crate::storage::{schema, AdvertStore};
use crate::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Advertisement store backed by a Postgres connection pool.
pub struct PgAdvertStore {
    pool: PgPool,
}

impl PgAdvertStore {
    /// Connects to Postgres and applies the idempotent schema bootstrap.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        let store = Self { pool };
        store.ensure_schema().await?;
        Ok(store)
    }

    /// Wraps an existing pool without touching the schema.
    pub fn with_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn ensure_schema(&self) -> Result<()> {
        for statement in schema::SCHEMA_SQL.split(';') {
            let statement = statement.trim();
            if !statement.is_empty() {
                sqlx::query(statement).execute(&self.pool).await?;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl AdvertStore for PgAdvertStore {
    async fn insert(&self, advert: &NewAdvert) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO advertisements
                (url, name, model, price, region, run, color, salon, seller, adv_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(&advert.url)
        .bind(&advert.name)
        .bind(&advert.model)
        .bind(advert.price)
        .bind(&advert.region)
        .bind(advert.run)
        .bind(&advert.color)
        .bind(&advert.salon)
        .bind(&advert.seller)
        .bind(advert.adv_date)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_older_than(&self, cutoff: DateTime<Utc>) -> Result<u64> {
        let result = sqlx::query("DELETE FROM advertisements WHERE created_at <= $1")
            .bind(cutoff)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
