//! SQLite-backed blob store.
//!
//! # Responsibility
//! - Open and configure SQLite connections for durable todo storage.
//! - Apply schema migrations in deterministic order.
//! - Implement the `BlobStore` contract over a single key-value table.
//!
//! # Invariants
//! - Migration version is tracked via `PRAGMA user_version`.
//! - No blob is read or written before migrations succeed.
//! - A database with a newer schema version than this binary is rejected.

use super::{BlobStore, StorageError, StorageResult};
use log::{error, info};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
struct Migration {
    version: u32,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    sql: "CREATE TABLE IF NOT EXISTS kv_blobs (
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );",
}];

/// Returns the latest migration version known by this binary.
pub fn latest_version() -> u32 {
    MIGRATIONS.last().map_or(0, |migration| migration.version)
}

/// Durable blob store persisting into a `kv_blobs` table.
#[derive(Debug)]
pub struct SqliteBlobStore {
    conn: Connection,
}

impl SqliteBlobStore {
    /// Opens a database file and applies all pending migrations.
    ///
    /// # Side effects
    /// - Emits `storage_open` logging events with duration and status.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let started_at = Instant::now();
        info!("event=storage_open module=storage status=start mode=file");
        let conn = Connection::open(path);
        Self::finish_open(conn, "file", started_at)
    }

    /// Opens an in-memory database and applies all pending migrations.
    pub fn open_in_memory() -> StorageResult<Self> {
        let started_at = Instant::now();
        info!("event=storage_open module=storage status=start mode=memory");
        let conn = Connection::open_in_memory();
        Self::finish_open(conn, "memory", started_at)
    }

    fn finish_open(
        conn: Result<Connection, rusqlite::Error>,
        mode: &str,
        started_at: Instant,
    ) -> StorageResult<Self> {
        let mut conn = match conn {
            Ok(conn) => conn,
            Err(err) => {
                error!(
                    "event=storage_open module=storage status=error mode={mode} duration_ms={} error={err}",
                    started_at.elapsed().as_millis()
                );
                return Err(err.into());
            }
        };

        match bootstrap_connection(&mut conn) {
            Ok(()) => {
                info!(
                    "event=storage_open module=storage status=ok mode={mode} duration_ms={}",
                    started_at.elapsed().as_millis()
                );
                Ok(Self { conn })
            }
            Err(err) => {
                error!(
                    "event=storage_open module=storage status=error mode={mode} duration_ms={} error={err}",
                    started_at.elapsed().as_millis()
                );
                Err(err)
            }
        }
    }
}

impl BlobStore for SqliteBlobStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_blobs WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.conn.execute(
            "INSERT INTO kv_blobs (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
            params![key, value],
        )?;
        Ok(())
    }
}

fn bootstrap_connection(conn: &mut Connection) -> StorageResult<()> {
    conn.busy_timeout(Duration::from_secs(5))?;
    apply_migrations(conn)?;
    Ok(())
}

/// Applies all pending migrations on the provided connection.
pub fn apply_migrations(conn: &mut Connection) -> StorageResult<()> {
    let current_version = current_user_version(conn)?;
    let latest = latest_version();

    if current_version > latest {
        return Err(StorageError::UnsupportedSchemaVersion {
            db_version: current_version,
            latest_supported: latest,
        });
    }

    if current_version == latest {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for migration in MIGRATIONS {
        if migration.version <= current_version {
            continue;
        }

        tx.execute_batch(migration.sql)?;
        tx.execute_batch(&format!("PRAGMA user_version = {};", migration.version))?;
    }
    tx.commit()?;

    Ok(())
}

fn current_user_version(conn: &Connection) -> StorageResult<u32> {
    let version = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    Ok(version)
}
