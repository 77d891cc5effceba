//! Persistence backends for the target exam date.
//!
//! The controller only sees the `TargetDateStore` trait, so tests can swap
//! in an in-memory or mocked store and the app can choose between the JSON
//! file and the SQLite database.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rusqlite::{Connection, OptionalExtension};

/// Durable key-value store collaborator. `get` returns the serialized
/// instant previously stored under `key`, or `None` if never set.
#[cfg_attr(test, mockall::automock)]
pub trait TargetDateStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// JSON key-value file on disk, one object mapping keys to strings.
pub struct FileTargetDateStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileTargetDateStore {
    /// Open the store at `path`, loading any existing entries. A missing
    /// file is an empty store, not an error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = if path.exists() {
            let data = fs::read_to_string(&path)
                .with_context(|| format!("failed to read store from {}", path.display()))?;
            serde_json::from_str(&data)
                .with_context(|| format!("failed to deserialize store from {}", path.display()))?
        } else {
            BTreeMap::new()
        };
        Ok(Self { path, entries })
    }

    fn write_entries(path: &Path, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create dir {}", parent.display()))?;
        }
        let data = serde_json::to_string_pretty(entries)?;
        fs::write(path, data)
            .with_context(|| format!("failed to write store to {}", path.display()))?;
        Ok(())
    }
}

impl TargetDateStore for FileTargetDateStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        // Write the updated snapshot first so a failed write leaves the
        // cached entries matching what is actually on disk.
        let mut updated = self.entries.clone();
        updated.insert(key.to_string(), value.to_string());
        Self::write_entries(&self.path, &updated)?;
        self.entries = updated;
        Ok(())
    }
}

/// Key-value table in the app's SQLite database.
pub struct SqliteTargetDateStore {
    conn: Connection,
}

impl SqliteTargetDateStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path.as_ref()).with_context(|| {
            format!("failed to open database at {}", path.as_ref().display())
        })?;
        Self::from_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )
        .context("Failed to initialize kv table")?;
        Ok(Self { conn })
    }
}

impl TargetDateStore for SqliteTargetDateStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()
            .context("Failed to load value")?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.conn
            .execute(
                "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
                [key, value],
            )
            .context("Failed to store value")?;
        Ok(())
    }
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Default, Clone)]
pub struct MemoryTargetDateStore {
    entries: BTreeMap<String, String>,
}

impl MemoryTargetDateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-seeded with one entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::default();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }
}

impl TargetDateStore for MemoryTargetDateStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
