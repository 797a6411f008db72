//! SQLite-backed durable status store.
//!
//! One table, `steps (name TEXT PRIMARY KEY, status TEXT)`. Unknown
//! statuses are represented by row absence. The connection is opened on
//! first access and reused; every mutation runs in its own transaction.

use std::collections::BTreeMap;

use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

use crate::error::Result;

use super::{StatusStore, StepStatus, StoreIdentity};

const TABLE_NAME: &str = "steps";

/// Durable status store in an embedded SQLite database.
#[derive(Debug)]
pub struct SqliteStatusStore {
    identity: StoreIdentity,
    connection: Option<Connection>,
}

impl SqliteStatusStore {
    /// Create a store for the given identity. Nothing is opened yet.
    pub fn new(identity: impl Into<StoreIdentity>) -> Self {
        Self {
            identity: identity.into(),
            connection: None,
        }
    }

    pub fn identity(&self) -> &StoreIdentity {
        &self.identity
    }

    /// Whether the underlying database has been opened.
    pub fn is_open(&self) -> bool {
        self.connection.is_some()
    }

    fn connection(&mut self) -> Result<&mut Connection> {
        let conn = match self.connection.take() {
            Some(conn) => conn,
            None => Self::open(&self.identity)?,
        };
        Ok(self.connection.insert(conn))
    }

    fn open(identity: &StoreIdentity) -> Result<Connection> {
        debug!("Opening status store {}", identity);
        let conn = match identity {
            StoreIdentity::Memory => Connection::open_in_memory()?,
            StoreIdentity::Path(path) => Connection::open(path)?,
        };
        Self::ensure_schema(&conn)?;
        Ok(conn)
    }

    fn ensure_schema(conn: &Connection) -> Result<()> {
        let existing: Option<String> = conn
            .query_row(
                "SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?1",
                params![TABLE_NAME],
                |row| row.get(0),
            )
            .optional()?;

        if existing.is_none() {
            debug!("Creating status table '{}'", TABLE_NAME);
            conn.execute(
                &format!(
                    "CREATE TABLE {} (name TEXT PRIMARY KEY, status TEXT NOT NULL)",
                    TABLE_NAME
                ),
                [],
            )?;
        }
        Ok(())
    }
}

impl StatusStore for SqliteStatusStore {
    fn get_status(&mut self, step: &str) -> Result<StepStatus> {
        let conn = self.connection()?;
        let status: Option<String> = conn
            .query_row(
                &format!("SELECT status FROM {} WHERE name = ?1", TABLE_NAME),
                params![step],
                |row| row.get(0),
            )
            .optional()?;

        match status {
            Some(text) => text.parse(),
            None => Ok(StepStatus::Unknown),
        }
    }

    fn update_status(&mut self, step: &str, status: StepStatus) -> Result<()> {
        let conn = self.connection()?;
        // Dropping an uncommitted transaction rolls it back.
        let tx = conn.transaction()?;
        match status {
            StepStatus::Unknown => {
                tx.execute(
                    &format!("DELETE FROM {} WHERE name = ?1", TABLE_NAME),
                    params![step],
                )?;
            }
            _ => {
                tx.execute(
                    &format!(
                        "INSERT INTO {} (name, status) VALUES (?1, ?2) \
                         ON CONFLICT(name) DO UPDATE SET status = excluded.status",
                        TABLE_NAME
                    ),
                    params![step, status.as_str()],
                )?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn get_known_statuses(&mut self) -> Result<BTreeMap<String, StepStatus>> {
        let conn = self.connection()?;
        let mut stmt = conn.prepare(&format!("SELECT name, status FROM {}", TABLE_NAME))?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut known = BTreeMap::new();
        for row in rows {
            let (name, status) = row?;
            known.insert(name, status.parse()?);
        }
        Ok(known)
    }
}
