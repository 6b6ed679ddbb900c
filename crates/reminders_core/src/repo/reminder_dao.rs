//! Reminder table access contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide raw CRUD over the `reminders` table.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Writes replace on `id` conflict; no other uniqueness rule exists.
//! - Rows come back in insertion order (`rowid`).
//! - Rows are returned exactly as stored; no field is rewritten.
//! - Coordinates round-trip bit-for-bit, including `-0.0` and NaN payloads.

use crate::db::DbError;
use crate::model::reminder::Reminder;
use rusqlite::{params, Connection, Row};

const REMINDER_SELECT_SQL: &str = "SELECT
    id,
    title,
    description,
    location,
    latitude_bits,
    longitude_bits
FROM reminders";

pub type DaoResult<T> = Result<T, DbError>;

/// Table-level access used by the local reminder repository.
pub trait ReminderDao {
    fn list_reminders(&self) -> DaoResult<Vec<Reminder>>;
    fn find_reminder_by_id(&self, id: &str) -> DaoResult<Option<Reminder>>;
    /// Inserts or replaces the row keyed by `reminder.id`.
    fn upsert_reminder(&self, reminder: &Reminder) -> DaoResult<()>;
    /// Removes every row and returns how many were deleted.
    fn delete_all_reminders(&self) -> DaoResult<usize>;
}

/// SQLite-backed reminder DAO.
pub struct SqliteReminderDao<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteReminderDao<'conn> {
    /// Wraps a connection returned by `open_db`/`open_db_in_memory`.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ReminderDao for SqliteReminderDao<'_> {
    fn list_reminders(&self) -> DaoResult<Vec<Reminder>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{REMINDER_SELECT_SQL} ORDER BY rowid ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut reminders = Vec::new();

        while let Some(row) = rows.next()? {
            reminders.push(parse_reminder_row(row)?);
        }

        Ok(reminders)
    }

    fn find_reminder_by_id(&self, id: &str) -> DaoResult<Option<Reminder>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{REMINDER_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_reminder_row(row)?));
        }

        Ok(None)
    }

    fn upsert_reminder(&self, reminder: &Reminder) -> DaoResult<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO reminders (
                id,
                title,
                description,
                location,
                latitude_bits,
                longitude_bits
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                reminder.id.as_str(),
                reminder.title.as_str(),
                reminder.description.as_deref(),
                reminder.location.as_str(),
                reminder.latitude.map(coordinate_to_db),
                reminder.longitude.map(coordinate_to_db),
            ],
        )?;

        Ok(())
    }

    fn delete_all_reminders(&self) -> DaoResult<usize> {
        let deleted = self.conn.execute("DELETE FROM reminders;", [])?;
        Ok(deleted)
    }
}

fn parse_reminder_row(row: &Row<'_>) -> DaoResult<Reminder> {
    Ok(Reminder {
        id: row.get("id")?,
        title: row.get("title")?,
        description: row.get("description")?,
        location: row.get("location")?,
        latitude: row
            .get::<_, Option<i64>>("latitude_bits")?
            .map(coordinate_from_db),
        longitude: row
            .get::<_, Option<i64>>("longitude_bits")?
            .map(coordinate_from_db),
    })
}

// SQLite REAL folds -0.0 into 0.0 and NaN into NULL, so coordinates are kept
// as their bit pattern.
fn coordinate_to_db(value: f64) -> i64 {
    value.to_bits() as i64
}

fn coordinate_from_db(bits: i64) -> f64 {
    f64::from_bits(bits as u64)
}
