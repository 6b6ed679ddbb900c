//! FFI use-case API for the mobile UI shell.
//!
//! # Responsibility
//! - Expose reminder list/save/lookup/clear and geofence calls to Dart via FRB.
//! - Keep error semantics simple: every call returns an envelope.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Every call opens the configured database; no connection is cached.

use reminders_core::db::open_db;
use reminders_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    GeofenceRequest, GeofenceTriggerService, ReminderDataItem, ReminderDataSource,
    ReminderNotification, RemindersListService, RemindersLocalRepository, SaveReminderService,
    SqliteReminderDao,
};
use std::path::PathBuf;
use std::sync::OnceLock;

const REMINDERS_DB_FILE_NAME: &str = "location_reminders.sqlite3";
const REMINDERS_DB_PATH_ENV: &str = "LOCATION_REMINDERS_DB_PATH";
static REMINDERS_DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Returns an empty string on success and the error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Reminder as shown by the UI shell.
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderItem {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub location: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// List screen response.
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderListResponse {
    pub items: Vec<ReminderItem>,
    /// Error text for a snackbar; empty on success.
    pub message: String,
    pub show_no_data: bool,
}

/// Single-reminder lookup response.
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderGetResponse {
    pub item: Option<ReminderItem>,
    pub message: String,
}

/// Generic action response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderActionResponse {
    pub ok: bool,
    pub reminder_id: Option<String>,
    /// Human-readable message for a toast or field error.
    pub message: String,
}

impl ReminderActionResponse {
    fn success(message: impl Into<String>, reminder_id: Option<String>) -> Self {
        Self {
            ok: true,
            reminder_id,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            reminder_id: None,
            message: message.into(),
        }
    }
}

/// Region the UI shell registers with the OS geofencing API.
#[derive(Debug, Clone, PartialEq)]
pub struct GeofenceItem {
    pub request_id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub radius_meters: f64,
}

/// Notification payload for one entered geofence.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationItem {
    pub reminder_id: String,
    pub title: String,
    pub description: Option<String>,
    pub location: String,
}

/// Loads all reminders for the list screen.
#[flutter_rust_bridge::frb(sync)]
pub fn reminders_list() -> ReminderListResponse {
    let result = with_store(|store| {
        let mut service = RemindersListService::new(store);
        service.load_reminders().clone()
    });
    match result {
        Ok(state) => ReminderListResponse {
            items: state.items.into_iter().map(to_reminder_item).collect(),
            message: state.snackbar.unwrap_or_default(),
            show_no_data: state.show_no_data,
        },
        Err(err) => ReminderListResponse {
            items: Vec::new(),
            message: err,
            show_no_data: true,
        },
    }
}

/// Looks one reminder up by its exact id.
#[flutter_rust_bridge::frb(sync)]
pub fn reminder_get(reminder_id: String) -> ReminderGetResponse {
    match with_store(|store| store.get_reminder(&reminder_id)) {
        Ok(Ok(reminder)) => ReminderGetResponse {
            item: Some(to_reminder_item(ReminderDataItem::from(reminder))),
            message: String::new(),
        },
        Ok(Err(err)) => ReminderGetResponse {
            item: None,
            message: err.to_string(),
        },
        Err(err) => ReminderGetResponse {
            item: None,
            message: err,
        },
    }
}

/// Validates and saves a reminder from the save screen fields.
///
/// Returns the generated reminder id on success and the field message on
/// validation failure.
#[flutter_rust_bridge::frb(sync)]
pub fn reminder_save(
    title: Option<String>,
    description: Option<String>,
    location: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
) -> ReminderActionResponse {
    let item = ReminderDataItem::new(
        title.map(|value| value.trim().to_string()),
        description,
        location.map(|value| value.trim().to_string()),
        latitude,
        longitude,
    );
    let result = with_store(|store| {
        SaveReminderService::new(store)
            .validate_and_save_reminder(&item)
            .map(|outcome| (outcome.reminder.id, outcome.message))
    });
    match result {
        Ok(Ok((reminder_id, message))) => {
            ReminderActionResponse::success(message, Some(reminder_id))
        }
        Ok(Err(err)) => ReminderActionResponse::failure(err.message()),
        Err(err) => ReminderActionResponse::failure(err),
    }
}

/// Removes every stored reminder.
#[flutter_rust_bridge::frb(sync)]
pub fn reminders_clear() -> ReminderActionResponse {
    match with_store(|store| store.delete_all_reminders()) {
        Ok(()) => ReminderActionResponse::success("Reminders cleared.", None),
        Err(err) => ReminderActionResponse::failure(err),
    }
}

/// Returns the geofence to register for a reminder, if it has coordinates.
#[flutter_rust_bridge::frb(sync)]
pub fn reminder_geofence(reminder_id: String) -> Option<GeofenceItem> {
    with_store(|store| GeofenceTriggerService::new(store).geofence_for(&reminder_id))
        .ok()
        .and_then(Result::ok)
        .flatten()
        .map(to_geofence_item)
}

/// Resolves geofence ids from an enter transition into notifications.
#[flutter_rust_bridge::frb(sync)]
pub fn geofence_entered(request_ids: Vec<String>) -> Vec<NotificationItem> {
    with_store(|store| GeofenceTriggerService::new(store).on_geofences_entered(&request_ids))
        .map(|notifications| notifications.into_iter().map(to_notification_item).collect())
        .unwrap_or_default()
}

fn resolve_reminders_db_path() -> PathBuf {
    REMINDERS_DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var(REMINDERS_DB_PATH_ENV) {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(REMINDERS_DB_FILE_NAME)
        })
        .clone()
}

fn with_store<T>(
    f: impl FnOnce(&RemindersLocalRepository<SqliteReminderDao<'_>>) -> T,
) -> Result<T, String> {
    let db_path = resolve_reminders_db_path();
    let conn = open_db(&db_path).map_err(|err| format!("reminders DB open failed: {err}"))?;
    let store = RemindersLocalRepository::new(SqliteReminderDao::new(&conn));
    Ok(f(&store))
}

fn to_reminder_item(item: ReminderDataItem) -> ReminderItem {
    ReminderItem {
        id: item.id,
        title: item.title.unwrap_or_default(),
        description: item.description,
        location: item.location.unwrap_or_default(),
        latitude: item.latitude,
        longitude: item.longitude,
    }
}

fn to_geofence_item(request: GeofenceRequest) -> GeofenceItem {
    GeofenceItem {
        request_id: request.request_id,
        latitude: request.latitude,
        longitude: request.longitude,
        radius_meters: request.radius_meters,
    }
}

fn to_notification_item(notification: ReminderNotification) -> NotificationItem {
    NotificationItem {
        reminder_id: notification.reminder_id,
        title: notification.title,
        description: notification.description,
        location: notification.location,
    }
}
