//! Advertisement record types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A normalized advertisement ready for insertion.
///
/// `created_at` is assigned server-side at insert time; `adv_date` is the
/// date the source listing was posted or updated and may be the sentinel
/// date when the source text failed to parse. No uniqueness is enforced on
/// `url` — re-harvested listings may produce duplicate rows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewAdvert {
    pub url: String,
    pub name: String,
    pub model: String,
    pub price: i64,
    pub region: String,
    pub run: i64,
    pub color: String,
    pub salon: String,
    pub seller: String,
    pub adv_date: NaiveDate,
}

/// A persisted advertisement row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Advert {
    pub id: i64,
    pub url: String,
    pub name: String,
    pub model: String,
    pub price: i64,
    pub region: String,
    pub run: i64,
    pub color: String,
    pub salon: String,
    pub seller: String,
    pub adv_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}
