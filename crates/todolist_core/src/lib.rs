//! Core state management for the todo list.
//! This crate is the single source of truth for task-list invariants.

pub mod logging;
pub mod model;
pub mod seed;
pub mod storage;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::todo::TodoItem;
pub use seed::{HttpSeedSource, SeedError, SeedRecord, SeedResult, SeedSource};
pub use storage::{BlobStore, MemoryBlobStore, SqliteBlobStore, StorageError, StorageResult};
pub use store::todo_store::{StoreError, StoreResult, TodoStore, TODOS_KEY};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
