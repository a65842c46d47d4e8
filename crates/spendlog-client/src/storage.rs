use std::collections::HashMap;
use std::path::{Path, PathBuf};

use rusqlite::{Connection, OptionalExtension, params};

use crate::LedgerResult;
use crate::setup::{ensure_initialized, ensure_initialized_at};
use crate::state::{map_sqlite_error, open_connection};

/// Synchronous string-keyed storage for the serialized ledger payload.
/// Implementations must be durable across `get`/`set` pairs but are free to
/// fail on `set`; callers treat writes as best-effort.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> LedgerResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> LedgerResult<()>;
}

pub struct SqliteStore {
    connection: Connection,
    db_path: PathBuf,
}

impl SqliteStore {
    pub fn open_default() -> LedgerResult<Self> {
        let setup = ensure_initialized()?;
        Self::from_db_path(PathBuf::from(setup.db_path))
    }

    pub fn open_at(home: &Path) -> LedgerResult<Self> {
        let setup = ensure_initialized_at(home)?;
        Self::from_db_path(PathBuf::from(setup.db_path))
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    fn from_db_path(db_path: PathBuf) -> LedgerResult<Self> {
        let connection = open_connection(&db_path)?;
        Ok(Self {
            connection,
            db_path,
        })
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> LedgerResult<Option<String>> {
        self.connection
            .query_row(
                "SELECT value FROM kv_entries WHERE key = ?1 LIMIT 1",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()
            .map_err(|error| map_sqlite_error(&self.db_path, &error))
    }

    fn set(&mut self, key: &str, value: &str) -> LedgerResult<()> {
        self.connection
            .execute(
                "INSERT INTO kv_entries (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                params![key, value],
            )
            .map_err(|error| map_sqlite_error(&self.db_path, &error))?;
        Ok(())
    }
}

/// Ephemeral store for sessions that should not touch disk.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> LedgerResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> LedgerResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
