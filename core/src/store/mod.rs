//! SQLite persistence layer.
//!
//! RULE: Only the store talks to the database.
//! Query operations and the seeder call store methods; they never hold a
//! connection of their own across calls.
//!
//! Every read opens a fresh connection, runs exactly one bound statement,
//! collects all rows and drops the connection before returning.

use crate::{
    config::DatabaseConfig,
    error::{LedgerError, LedgerResult},
    records::FromRow,
};
use rusqlite::{types::FromSql, Connection, OpenFlags, Params};
use std::path::PathBuf;
use uuid::Uuid;

mod people;
mod transactions;

pub(crate) use people::insert_person_with;

const MIGRATIONS: &[(&str, &str)] = &[
    (
        "001_people_transactions",
        include_str!("../../../migrations/001_people_transactions.sql"),
    ),
    (
        "002_transaction_indexes",
        include_str!("../../../migrations/002_transaction_indexes.sql"),
    ),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreLocation {
    File(PathBuf),
    Memory,
}

pub struct LedgerStore {
    location: StoreLocation,
    uri: String,
    // Keeps a shared-cache in-memory database alive between operations.
    _anchor: Option<Connection>,
}

impl LedgerStore {
    pub fn new(location: StoreLocation) -> LedgerResult<Self> {
        match location {
            StoreLocation::File(path) => Ok(Self::at_path(path)),
            StoreLocation::Memory => Self::in_memory(),
        }
    }

    /// A store backed by the SQLite file at `path`. Nothing is opened
    /// until the first operation.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            uri: path.to_string_lossy().into_owned(),
            location: StoreLocation::File(path),
            _anchor: None,
        }
    }

    /// A private in-memory store. Each call yields an isolated database.
    pub fn in_memory() -> LedgerResult<Self> {
        let uri = format!("file:finquery-{}?mode=memory&cache=shared", Uuid::new_v4());
        let anchor = open(&uri, memory_flags())?;
        Ok(Self {
            location: StoreLocation::Memory,
            uri,
            _anchor: Some(anchor),
        })
    }

    pub fn from_config(config: &DatabaseConfig) -> LedgerResult<Self> {
        if config.is_memory() {
            Self::in_memory()
        } else {
            Ok(Self::at_path(&config.path))
        }
    }

    pub fn location(&self) -> &StoreLocation {
        &self.location
    }

    /// Apply all schema migrations in order. Safe to re-run.
    pub fn migrate(&self) -> LedgerResult<()> {
        let conn = self.write_connection()?;
        for (name, sql) in MIGRATIONS {
            conn.execute_batch(sql)?;
            log::info!("Applied migration {name}");
        }
        Ok(())
    }

    // ── Connections ────────────────────────────────────────────

    fn read_flags(&self) -> OpenFlags {
        match self.location {
            StoreLocation::File(_) => OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_URI,
            StoreLocation::Memory => memory_flags(),
        }
    }

    fn write_flags(&self) -> OpenFlags {
        match self.location {
            StoreLocation::File(_) => {
                OpenFlags::SQLITE_OPEN_READ_WRITE
                    | OpenFlags::SQLITE_OPEN_CREATE
                    | OpenFlags::SQLITE_OPEN_URI
            }
            StoreLocation::Memory => memory_flags(),
        }
    }

    /// A connection that refuses writes. A missing store file is an error,
    /// never silently created.
    fn read_connection(&self) -> LedgerResult<Connection> {
        let conn = open(&self.uri, self.read_flags())?;
        conn.execute_batch("PRAGMA query_only=ON;")?;
        Ok(conn)
    }

    pub(crate) fn write_connection(&self) -> LedgerResult<Connection> {
        let conn = open(&self.uri, self.write_flags())?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(conn)
    }

    /// Run `f` against a read-only connection scoped to this call.
    fn with_read_connection<T>(
        &self,
        f: impl FnOnce(&Connection) -> LedgerResult<T>,
    ) -> LedgerResult<T> {
        let conn = self.read_connection()?;
        log::debug!("Opened read connection to {}", self.uri);
        let result = f(&conn);
        drop(conn);
        log::debug!("Released read connection to {}", self.uri);
        result
    }

    /// Execute one bound statement and map every row by column name.
    pub(crate) fn query_records<T: FromRow, P: Params>(
        &self,
        sql: &str,
        params: P,
    ) -> LedgerResult<Vec<T>> {
        self.with_read_connection(|conn| {
            let mut stmt = conn.prepare(sql)?;
            let records = stmt
                .query_map(params, |row| T::from_row(row))?
                .collect::<Result<Vec<_>, _>>()?;
            log::debug!("Statement returned {} rows", records.len());
            Ok(records)
        })
    }

    /// Execute one bound statement that yields exactly one row and return
    /// its first column.
    pub(crate) fn query_value<T: FromSql, P: Params>(&self, sql: &str, params: P) -> LedgerResult<T> {
        self.with_read_connection(|conn| Ok(conn.query_row(sql, params, |row| row.get(0))?))
    }
}

fn memory_flags() -> OpenFlags {
    OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_CREATE | OpenFlags::SQLITE_OPEN_URI
}

fn open(uri: &str, flags: OpenFlags) -> LedgerResult<Connection> {
    Connection::open_with_flags(uri, flags).map_err(|source| LedgerError::StoreUnavailable {
        location: uri.to_string(),
        source,
    })
}
