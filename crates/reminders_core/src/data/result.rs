//! Store-level read result.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Message returned when a lookup by id finds nothing.
pub const REMINDER_NOT_FOUND_MESSAGE: &str = "Reminder not found!";
/// Message returned by the in-memory store when reads are forced to fail.
pub const GET_REMINDERS_ERROR_MESSAGE: &str = "Error getting reminders";

/// Outcome of a store read: `Ok(payload)` or `Err(DataError)`.
pub type DataResult<T> = Result<T, DataError>;

/// Failure of a store read, carrying only a human-readable message.
///
/// Missing records and storage faults share this shape and differ only by
/// message text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataError {
    message: String,
}

impl DataError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn not_found() -> Self {
        Self::new(REMINDER_NOT_FOUND_MESSAGE)
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for DataError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for DataError {}
