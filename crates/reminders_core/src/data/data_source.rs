//! Reminder store contract.
//!
//! # Responsibility
//! - Define the CRUD surface every controller consumes.
//! - Let handles (`&S`, `Arc<S>`, boxed trait objects) stand in for a store
//!   so one instance can be shared by several consumers.
//!
//! # Invariants
//! - Reads never panic for expected conditions; they return `DataError`.
//! - Writes have no modeled failure path.

use crate::data::result::DataResult;
use crate::model::reminder::Reminder;
use std::sync::Arc;

/// Durable collection of reminders keyed by `id`.
pub trait ReminderDataSource {
    /// Returns every stored reminder; the list may be empty.
    fn get_reminders(&self) -> DataResult<Vec<Reminder>>;
    /// Inserts or replaces the record keyed by `reminder.id`.
    fn save_reminder(&self, reminder: &Reminder);
    /// Returns the record with the given id, or a not-found error.
    fn get_reminder(&self, id: &str) -> DataResult<Reminder>;
    /// Clears the whole collection.
    fn delete_all_reminders(&self);
}

impl<S: ReminderDataSource + ?Sized> ReminderDataSource for &S {
    fn get_reminders(&self) -> DataResult<Vec<Reminder>> {
        (**self).get_reminders()
    }

    fn save_reminder(&self, reminder: &Reminder) {
        (**self).save_reminder(reminder)
    }

    fn get_reminder(&self, id: &str) -> DataResult<Reminder> {
        (**self).get_reminder(id)
    }

    fn delete_all_reminders(&self) {
        (**self).delete_all_reminders()
    }
}

impl<S: ReminderDataSource + ?Sized> ReminderDataSource for Arc<S> {
    fn get_reminders(&self) -> DataResult<Vec<Reminder>> {
        (**self).get_reminders()
    }

    fn save_reminder(&self, reminder: &Reminder) {
        (**self).save_reminder(reminder)
    }

    fn get_reminder(&self, id: &str) -> DataResult<Reminder> {
        (**self).get_reminder(id)
    }

    fn delete_all_reminders(&self) {
        (**self).delete_all_reminders()
    }
}

impl<S: ReminderDataSource + ?Sized> ReminderDataSource for Box<S> {
    fn get_reminders(&self) -> DataResult<Vec<Reminder>> {
        (**self).get_reminders()
    }

    fn save_reminder(&self, reminder: &Reminder) {
        (**self).save_reminder(reminder)
    }

    fn get_reminder(&self, id: &str) -> DataResult<Reminder> {
        (**self).get_reminder(id)
    }

    fn delete_all_reminders(&self) {
        (**self).delete_all_reminders()
    }
}
