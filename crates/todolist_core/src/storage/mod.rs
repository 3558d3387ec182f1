//! Durable storage seam and implementations.
//!
//! # Responsibility
//! - Define the key-value blob contract the store persists through.
//! - Isolate SQLite details from store/business orchestration.
//!
//! # Invariants
//! - `set` fully replaces the previous value for a key.
//! - Implementations return semantic errors instead of panicking.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod memory;
pub mod sqlite;

pub use memory::MemoryBlobStore;
pub use sqlite::SqliteBlobStore;

pub type StorageResult<T> = Result<T, StorageError>;

/// Storage-layer error for blob get/set and bootstrap operations.
#[derive(Debug)]
pub enum StorageError {
    Sqlite(rusqlite::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "storage schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Key-value string store the todo collection is mirrored into.
///
/// The store treats storage as a derived mirror: values are whole serialized
/// collections, never partial updates.
pub trait BlobStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

// Borrowed backends work too, so a caller can keep reading the blob store
// it handed to the store.
impl<B: BlobStore + ?Sized> BlobStore for &B {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }
}
