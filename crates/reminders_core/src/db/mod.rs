//! Storage backing for [`crate::RemindersLocalRepository`].
//!
//! A reminder store is one SQLite file (or an in-memory database in tests)
//! holding the `reminders` table. [`open_db`] and [`open_db_in_memory`] hand
//! back connections whose schema is already at the version this build
//! writes, so DAO code never checks it again.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

/// Failure while opening or querying the reminder store.
#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    /// The file was last migrated by a build that knows more schema
    /// versions than this one. It is left untouched.
    StoreFromNewerBuild { found: u32, supported: u32 },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "reminder store: {err}"),
            Self::StoreFromNewerBuild { found, supported } => write!(
                f,
                "reminder store schema v{found} was written by a newer build (this build reads up to v{supported})"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::StoreFromNewerBuild { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
