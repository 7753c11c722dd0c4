use super::entry::Entry;
use anyhow::{bail, Context, Result};
use rusqlite::{params, Connection, OptionalExtension};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    Created,
    AlreadyExists,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    Removed,
    NotFound,
}

/// Keys may contain any characters, whitespace included, but never be empty.
pub fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        bail!("Key must not be empty");
    }
    Ok(())
}

fn get_connection(path: &Path) -> Result<Connection> {
    let conn = Connection::open(path)
        .with_context(|| format!("Failed to open store at {path:?}"))?;
    // Each autocommit write must reach disk before we report success.
    conn.execute_batch("PRAGMA synchronous = FULL;")
        .with_context(|| format!("Failed to configure store at {path:?}"))?;
    Ok(conn)
}

fn create_schema(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS entries (
            key TEXT PRIMARY KEY NOT NULL,
            content TEXT NOT NULL
        )",
        [],
    )?;
    Ok(())
}

/// Key to content mapping persisted in a single SQLite file.
pub struct Store {
    conn: Connection,
    path: PathBuf,
}

impl Store {
    /// Create an empty store file at `path` unless one is already there.
    pub fn initialize(path: &Path) -> Result<InitOutcome> {
        if path.exists() {
            return Ok(InitOutcome::AlreadyExists);
        }

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {parent:?}"))?;
        }

        let conn = get_connection(path)?;
        create_schema(&conn)
            .with_context(|| format!("Failed to create store at {path:?}"))?;

        Ok(InitOutcome::Created)
    }

    pub fn open(path: &Path) -> Result<Self> {
        let outcome = Self::initialize(path)?;
        debug!(path = %path.display(), ?outcome, "Store initialized");

        let conn = get_connection(path)?;
        create_schema(&conn)
            .with_context(|| format!("Failed to read store at {path:?}"))?;

        Ok(Self {
            conn,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Insert or overwrite. A single statement, so a failure leaves the
    /// previous value in place.
    pub fn put(&mut self, key: &str, content: &str) -> Result<()> {
        validate_key(key)?;

        self.conn
            .execute(
                "INSERT INTO entries (key, content) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET content = excluded.content",
                params![key, content],
            )
            .with_context(|| format!("Failed to save entry {key:?}"))?;

        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let content = self
            .conn
            .query_row(
                "SELECT content FROM entries WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()
            .with_context(|| format!("Failed to read entry {key:?}"))?;

        Ok(content)
    }

    pub fn remove(&mut self, key: &str) -> Result<Removal> {
        let count = self
            .conn
            .execute("DELETE FROM entries WHERE key = ?1", [key])
            .with_context(|| format!("Failed to delete entry {key:?}"))?;

        Ok(if count == 0 {
            Removal::NotFound
        } else {
            Removal::Removed
        })
    }

    pub fn keys(&self) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare("SELECT key FROM entries ORDER BY key ASC")?;
        let rows = stmt.query_map([], |row| row.get(0))?;

        let mut result = Vec::new();
        for key in rows {
            result.push(key?);
        }

        Ok(result)
    }

    pub fn entries(&self) -> Result<Vec<Entry>> {
        let mut stmt = self
            .conn
            .prepare("SELECT key, content FROM entries ORDER BY key ASC")?;
        let rows = stmt.query_map([], |row| {
            Ok(Entry::new(
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
            ))
        })?;

        let mut result = Vec::new();
        for entry in rows {
            result.push(entry?);
        }

        Ok(result)
    }

    /// Delete every entry, returning how many there were.
    pub fn clear(&mut self) -> Result<usize> {
        let count = self
            .conn
            .execute("DELETE FROM entries", [])
            .context("Failed to clear store")?;
        Ok(count)
    }

    pub fn len(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM entries", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}
