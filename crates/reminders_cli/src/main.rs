//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `reminders_core` linkage without the mobile shell.
//! - Run one save/list round trip against a throwaway SQLite store.

use reminders_core::db::open_db_in_memory;
use reminders_core::{
    ReminderDataItem, RemindersListService, RemindersLocalRepository, SaveReminderService,
    SqliteReminderDao,
};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    println!("reminders_core ping={}", reminders_core::ping());
    println!("reminders_core version={}", reminders_core::core_version());

    let conn = open_db_in_memory()?;
    let store = RemindersLocalRepository::new(SqliteReminderDao::new(&conn));

    let item = ReminderDataItem::new(
        Some("smoke".to_string()),
        None,
        Some("smoke location".to_string()),
        Some(0.0),
        Some(0.0),
    );
    let outcome = SaveReminderService::new(&store).validate_and_save_reminder(&item)?;
    println!("reminders_core save={}", outcome.message);

    let mut list = RemindersListService::new(&store);
    let state = list.load_reminders();
    if let Some(message) = &state.snackbar {
        return Err(message.clone().into());
    }
    println!("reminders_core list_count={}", state.items.len());
    Ok(())
}
