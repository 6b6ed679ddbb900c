//! Production reminder store backed by the `reminders` table.
//!
//! # Responsibility
//! - Implement `ReminderDataSource` on top of a `ReminderDao`.
//! - Convert DAO faults into `DataError` for reads.
//!
//! # Invariants
//! - Read faults are logged once and surfaced as `DataError`.
//! - Write faults are logged and swallowed; the contract has no write error.

use crate::data::data_source::ReminderDataSource;
use crate::data::result::{DataError, DataResult};
use crate::model::reminder::Reminder;
use crate::repo::reminder_dao::ReminderDao;
use log::{debug, error};

/// Reminder store delegating to a table DAO.
pub struct RemindersLocalRepository<D: ReminderDao> {
    dao: D,
}

impl<D: ReminderDao> RemindersLocalRepository<D> {
    pub fn new(dao: D) -> Self {
        Self { dao }
    }
}

impl<D: ReminderDao> ReminderDataSource for RemindersLocalRepository<D> {
    fn get_reminders(&self) -> DataResult<Vec<Reminder>> {
        match self.dao.list_reminders() {
            Ok(reminders) => {
                debug!(
                    "event=reminders_get module=data status=ok count={}",
                    reminders.len()
                );
                Ok(reminders)
            }
            Err(err) => {
                error!(
                    "event=reminders_get module=data status=error error_code=dao_failed error={}",
                    err
                );
                Err(DataError::new(err.to_string()))
            }
        }
    }

    fn save_reminder(&self, reminder: &Reminder) {
        match self.dao.upsert_reminder(reminder) {
            Ok(()) => debug!(
                "event=reminder_save module=data status=ok id={}",
                reminder.id
            ),
            Err(err) => error!(
                "event=reminder_save module=data status=error id={} error_code=dao_failed error={}",
                reminder.id, err
            ),
        }
    }

    fn get_reminder(&self, id: &str) -> DataResult<Reminder> {
        match self.dao.find_reminder_by_id(id) {
            Ok(Some(reminder)) => Ok(reminder),
            Ok(None) => Err(DataError::not_found()),
            Err(err) => {
                error!(
                    "event=reminder_get module=data status=error id={} error_code=dao_failed error={}",
                    id, err
                );
                Err(DataError::new(err.to_string()))
            }
        }
    }

    fn delete_all_reminders(&self) {
        match self.dao.delete_all_reminders() {
            Ok(deleted) => debug!(
                "event=reminders_delete_all module=data status=ok deleted={}",
                deleted
            ),
            Err(err) => error!(
                "event=reminders_delete_all module=data status=error error_code=dao_failed error={}",
                err
            ),
        }
    }
}
