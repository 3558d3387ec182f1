//! Remote seed-data seam.
//!
//! # Responsibility
//! - Define the record shape the remote fallback source returns.
//! - Define the one-shot fetch contract used on first run.
//!
//! # Invariants
//! - Seed data is consulted only when durable storage holds no collection.
//! - Record order from the source is preserved into the collection.

use crate::model::todo::TodoItem;
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod http;

pub use http::HttpSeedSource;

pub type SeedResult<T> = Result<T, SeedError>;

/// One record from the remote fallback source.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedRecord {
    /// Numeric identity at the source; becomes the item `id` in string form.
    pub id: u64,
    pub title: String,
    pub done: bool,
}

impl From<SeedRecord> for TodoItem {
    fn from(record: SeedRecord) -> Self {
        Self {
            id: record.id.to_string(),
            text: record.title,
            completed: record.done,
        }
    }
}

/// Seed fetch error. There is no retry logic; one failure fails the fetch.
#[derive(Debug)]
pub enum SeedError {
    /// Transport-level failure (connect, timeout, body read).
    Http(reqwest::Error),
    /// Non-success HTTP status from the source.
    Status(reqwest::StatusCode),
    /// Body was not the expected JSON record array.
    Malformed(serde_json::Error),
}

impl Display for SeedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Http(err) => write!(f, "seed fetch failed: {err}"),
            Self::Status(status) => write!(f, "seed fetch returned status {status}"),
            Self::Malformed(err) => write!(f, "malformed seed body: {err}"),
        }
    }
}

impl Error for SeedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Http(err) => Some(err),
            Self::Status(_) => None,
            Self::Malformed(err) => Some(err),
        }
    }
}

impl From<reqwest::Error> for SeedError {
    fn from(value: reqwest::Error) -> Self {
        Self::Http(value)
    }
}

/// One-shot retrievable source of fallback todo records.
pub trait SeedSource {
    fn fetch(&self) -> SeedResult<Vec<SeedRecord>>;
}
