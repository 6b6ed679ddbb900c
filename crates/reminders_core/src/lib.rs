//! Core data layer for location reminders.
//! This crate owns the reminder store and the use-cases built on it.

pub mod data;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use data::data_source::ReminderDataSource;
pub use data::in_memory::InMemoryReminderDataSource;
pub use data::local_repository::RemindersLocalRepository;
pub use data::result::{
    DataError, DataResult, GET_REMINDERS_ERROR_MESSAGE, REMINDER_NOT_FOUND_MESSAGE,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::geofence::{GeofenceRequest, GeofenceTransition, GEOFENCE_RADIUS_METERS};
pub use model::reminder::{Reminder, ReminderDataItem, ReminderId};
pub use repo::reminder_dao::{DaoResult, ReminderDao, SqliteReminderDao};
pub use service::geofence_service::{GeofenceTriggerService, ReminderNotification};
pub use service::reminders_list_service::{ReminderListState, RemindersListService};
pub use service::save_reminder_service::{
    ReminderForm, SaveOutcome, SaveReminderService, ValidationError, REMINDER_SAVED_MESSAGE,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
