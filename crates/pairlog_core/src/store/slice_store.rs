//! Slice-store contract and SQLite implementation.
//!
//! # Responsibility
//! - Read/write one JSON payload per named slice.
//! - Classify write failures into quota-style (non-fatal, keep going) and
//!   everything else (logged as error, still non-fatal).
//!
//! # Invariants
//! - `save`/`load` never panic and never return an error to the caller.
//! - The SQLite implementation refuses unmigrated connections.

use crate::db::migrations::latest_version;
use log::{debug, error, warn};
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Named application-state slices, each persisted independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SliceKey {
    Periods,
    Messages,
    Conflicts,
    Todos,
    Memories,
    Albums,
    CoverImage,
    CameraIcon,
}

impl SliceKey {
    /// Stable storage key for this slice.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Periods => "periods",
            Self::Messages => "messages",
            Self::Conflicts => "conflicts",
            Self::Todos => "todos",
            Self::Memories => "memories",
            Self::Albums => "albums",
            Self::CoverImage => "cover_image",
            Self::CameraIcon => "camera_icon",
        }
    }
}

impl Display for SliceKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Slice persistence and query errors.
#[derive(Debug)]
pub enum StoreError {
    Sqlite(rusqlite::Error),
    Serde(serde_json::Error),
    /// Connection has not been migrated by `db::open_db`.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Schema version is current but the slices table is absent.
    MissingSlicesTable,
}

impl StoreError {
    /// True for storage-full conditions: logged at warn, session continues
    /// with the in-memory state as the source of truth.
    pub fn is_quota_exceeded(&self) -> bool {
        matches!(
            self,
            Self::Sqlite(rusqlite::Error::SqliteFailure(err, _))
                if err.code == rusqlite::ErrorCode::DiskFull
        )
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::Serde(err) => write!(f, "{err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection not migrated: user_version {actual_version}, expected {expected_version}"
            ),
            Self::MissingSlicesTable => write!(f, "required table `slices` is missing"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::Serde(err) => Some(err),
            _ => None,
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value)
    }
}

/// Storage contract for named JSON slices.
pub trait SliceStore {
    fn write_slice(&self, key: SliceKey, value: &str) -> StoreResult<()>;
    fn read_slice(&self, key: SliceKey) -> StoreResult<Option<String>>;

    /// Serializes and writes one slice after a state transition.
    ///
    /// Never returns an error: quota-style failures log at warn and the
    /// session continues on the in-memory copy, anything else logs at error.
    fn save<T: Serialize>(&self, key: SliceKey, value: &T) {
        let payload = match serde_json::to_string(value) {
            Ok(payload) => payload,
            Err(err) => {
                error!("event=slice_save module=store status=error key={key} error_code=serialize_failed error={err}");
                return;
            }
        };
        match self.write_slice(key, &payload) {
            Ok(()) => {
                debug!(
                    "event=slice_save module=store status=ok key={key} bytes={}",
                    payload.len()
                );
            }
            Err(err) if err.is_quota_exceeded() => {
                warn!("event=slice_save module=store status=quota key={key} error={err}");
            }
            Err(err) => {
                error!("event=slice_save module=store status=error key={key} error={err}");
            }
        }
    }

    /// Reads one slice back as typed JSON.
    ///
    /// Returns `None` (logged) for a missing key, unreadable storage, or an
    /// unparsable payload; there is no payload versioning.
    fn load<T: DeserializeOwned>(&self, key: SliceKey) -> Option<T> {
        let payload = match self.read_slice(key) {
            Ok(Some(payload)) => payload,
            Ok(None) => return None,
            Err(err) => {
                error!("event=slice_load module=store status=error key={key} error={err}");
                return None;
            }
        };
        match serde_json::from_str(&payload) {
            Ok(value) => Some(value),
            Err(err) => {
                error!("event=slice_load module=store status=error key={key} error_code=parse_failed error={err}");
                None
            }
        }
    }
}

/// SQLite-backed slice store.
#[derive(Debug, Clone, Copy)]
pub struct SqliteSliceStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSliceStore<'conn> {
    /// Wraps a migrated connection.
    ///
    /// # Errors
    /// - `UninitializedConnection` when `PRAGMA user_version` is 0.
    /// - `MissingSlicesTable` when the schema lacks the slices table.
    pub fn try_new(conn: &'conn Connection) -> StoreResult<Self> {
        let actual_version =
            conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
        if actual_version == 0 {
            return Err(StoreError::UninitializedConnection {
                expected_version: latest_version(),
                actual_version,
            });
        }

        let table_count: u32 = conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'slices';",
            [],
            |row| row.get(0),
        )?;
        if table_count == 0 {
            return Err(StoreError::MissingSlicesTable);
        }

        Ok(Self { conn })
    }
}

impl SliceStore for SqliteSliceStore<'_> {
    fn write_slice(&self, key: SliceKey, value: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO slices (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key.as_str(), value],
        )?;
        Ok(())
    }

    fn read_slice(&self, key: SliceKey) -> StoreResult<Option<String>> {
        let payload = self
            .conn
            .query_row(
                "SELECT value FROM slices WHERE key = ?1;",
                [key.as_str()],
                |row| row.get(0),
            )
            .optional()?;
        Ok(payload)
    }
}
