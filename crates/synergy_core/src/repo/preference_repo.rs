//! Display preference store contracts and implementations.
//!
//! # Responsibility
//! - Persist and restore the single `DisplayPreference` value.
//!
//! # Invariants
//! - `load()` returns `DisplayPreference::Light` when nothing valid is stored.
//! - `save()` overwrites the previous value; repeating it is a no-op.
//! - The SQLite row is keyed by `PREFERENCE_KEY_MODE`.

use crate::db::DbError;
use crate::model::preference::DisplayPreference;
use log::{info, warn};
use rusqlite::{params, Connection, OptionalExtension};
use std::cell::Cell;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage key for the display mode row.
pub const PREFERENCE_KEY_MODE: &str = "mode";

pub type RepoResult<T> = Result<T, RepoError>;

/// Preference persistence failure.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Persistence surface for the display preference.
pub trait PreferenceStore {
    /// Returns the stored preference, or the default when unset or unreadable.
    fn load(&self) -> DisplayPreference;
    /// Durably stores exactly `preference`.
    fn save(&self, preference: DisplayPreference) -> RepoResult<()>;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for &T {
    fn load(&self) -> DisplayPreference {
        (**self).load()
    }

    fn save(&self, preference: DisplayPreference) -> RepoResult<()> {
        (**self).save(preference)
    }
}

/// SQLite-backed preference store.
pub struct SqlitePreferenceStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePreferenceStore<'conn> {
    /// Wraps a connection returned by `db::open_db*` (migrations applied).
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn read_raw(&self) -> RepoResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM preferences WHERE key = ?1;",
                [PREFERENCE_KEY_MODE],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }
}

impl PreferenceStore for SqlitePreferenceStore<'_> {
    fn load(&self) -> DisplayPreference {
        match self.read_raw() {
            Ok(Some(raw)) => DisplayPreference::parse(&raw).unwrap_or_else(|| {
                warn!(
                    "event=preference_load module=repo status=fallback reason=corrupt_value key={PREFERENCE_KEY_MODE}"
                );
                DisplayPreference::default()
            }),
            Ok(None) => DisplayPreference::default(),
            Err(err) => {
                warn!(
                    "event=preference_load module=repo status=fallback reason=read_failed key={PREFERENCE_KEY_MODE} error={err}"
                );
                DisplayPreference::default()
            }
        }
    }

    fn save(&self, preference: DisplayPreference) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO preferences (key, value)
             VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![PREFERENCE_KEY_MODE, preference.as_str()],
        )?;
        info!(
            "event=preference_save module=repo status=ok key={PREFERENCE_KEY_MODE} value={}",
            preference.as_str()
        );
        Ok(())
    }
}

/// Process-local store for headless callers and tests.
#[derive(Debug, Default)]
pub struct InMemoryPreferenceStore {
    value: Cell<Option<DisplayPreference>>,
}

impl InMemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for InMemoryPreferenceStore {
    fn load(&self) -> DisplayPreference {
        self.value.get().unwrap_or_default()
    }

    fn save(&self, preference: DisplayPreference) -> RepoResult<()> {
        self.value.set(Some(preference));
        Ok(())
    }
}
