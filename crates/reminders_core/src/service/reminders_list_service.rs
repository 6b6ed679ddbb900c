//! Reminder list use-case service.
//!
//! # Responsibility
//! - Load reminders from the store and map them into display items.
//! - Translate read errors into a snackbar message.
//!
//! # Invariants
//! - A failed load keeps the previously displayed items.
//! - `show_no_data` always reflects the items after the latest load.

use crate::data::data_source::ReminderDataSource;
use crate::model::reminder::ReminderDataItem;
use log::{info, warn};

/// Display state computed by the latest load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReminderListState {
    pub items: Vec<ReminderDataItem>,
    /// Error message to surface, set only by a failed load.
    pub snackbar: Option<String>,
    /// Whether the empty-state indicator should be shown.
    pub show_no_data: bool,
}

/// List controller over any reminder store handle.
pub struct RemindersListService<S: ReminderDataSource> {
    store: S,
    state: ReminderListState,
}

impl<S: ReminderDataSource> RemindersListService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            state: ReminderListState {
                show_no_data: true,
                ..ReminderListState::default()
            },
        }
    }

    /// Reloads reminders from the store and returns the new display state.
    pub fn load_reminders(&mut self) -> &ReminderListState {
        match self.store.get_reminders() {
            Ok(reminders) => {
                info!(
                    "event=reminders_load module=service status=ok count={}",
                    reminders.len()
                );
                self.state.items = reminders.into_iter().map(ReminderDataItem::from).collect();
                self.state.snackbar = None;
            }
            Err(err) => {
                warn!("event=reminders_load module=service status=error");
                self.state.snackbar = Some(err.message().to_string());
            }
        }
        self.state.show_no_data = self.state.items.is_empty();
        &self.state
    }

    pub fn state(&self) -> &ReminderListState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::RemindersListService;
    use crate::data::in_memory::InMemoryReminderDataSource;
    use crate::data::data_source::ReminderDataSource;
    use crate::model::reminder::Reminder;

    #[test]
    fn initial_state_shows_no_data() {
        let store = InMemoryReminderDataSource::new();
        let service = RemindersListService::new(&store);
        assert!(service.state().show_no_data);
        assert!(service.state().items.is_empty());
    }

    #[test]
    fn failed_load_keeps_previous_items() {
        let store = InMemoryReminderDataSource::new();
        store.save_reminder(&Reminder::with_id("1", "t", None, "l", None, None));
        let mut service = RemindersListService::new(&store);
        assert_eq!(service.load_reminders().items.len(), 1);

        store.set_return_error(true);
        let state = service.load_reminders();
        assert_eq!(state.items.len(), 1);
        assert!(!state.show_no_data);
        assert!(state.snackbar.is_some());
    }
}
