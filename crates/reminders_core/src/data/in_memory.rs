//! In-memory reminder store with read-fault injection.
//!
//! # Responsibility
//! - Provide a `ReminderDataSource` that needs no database, for controller
//!   tests and ephemeral sessions.
//! - Let callers force every read to fail via `set_return_error`.
//!
//! # Invariants
//! - Saving an existing `id` replaces the prior record and moves it to the
//!   end of the list, matching the SQLite store's ordering.
//! - While the fault flag is set, every `get_reminders` and `get_reminder`
//!   call fails, whether or not the record exists.

use crate::data::data_source::ReminderDataSource;
use crate::data::result::{DataError, DataResult, GET_REMINDERS_ERROR_MESSAGE};
use crate::model::reminder::Reminder;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Reminder store kept in process memory.
#[derive(Debug, Default)]
pub struct InMemoryReminderDataSource {
    reminders: Mutex<Vec<Reminder>>,
    should_return_error: AtomicBool,
}

impl InMemoryReminderDataSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with `reminders`, applying replace-on-conflict.
    pub fn with_reminders(reminders: impl IntoIterator<Item = Reminder>) -> Self {
        let store = Self::new();
        for reminder in reminders {
            store.save_reminder(&reminder);
        }
        store
    }

    /// Forces every subsequent read to fail while `value` is `true`.
    pub fn set_return_error(&self, value: bool) {
        self.should_return_error.store(value, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn should_fail(&self) -> bool {
        self.should_return_error.load(Ordering::SeqCst)
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Reminder>> {
        // The vector is never left half-updated, so a poisoned guard is usable.
        self.reminders
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl ReminderDataSource for InMemoryReminderDataSource {
    fn get_reminders(&self) -> DataResult<Vec<Reminder>> {
        if self.should_fail() {
            return Err(DataError::new(GET_REMINDERS_ERROR_MESSAGE));
        }
        Ok(self.lock().clone())
    }

    fn save_reminder(&self, reminder: &Reminder) {
        let mut reminders = self.lock();
        reminders.retain(|existing| existing.id != reminder.id);
        reminders.push(reminder.clone());
    }

    fn get_reminder(&self, id: &str) -> DataResult<Reminder> {
        if self.should_fail() {
            return Err(DataError::not_found());
        }
        self.lock()
            .iter()
            .find(|reminder| reminder.id == id)
            .cloned()
            .ok_or_else(DataError::not_found)
    }

    fn delete_all_reminders(&self) {
        self.lock().clear();
    }
}
