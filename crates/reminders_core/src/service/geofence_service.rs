//! Geofence trigger handling.
//!
//! # Responsibility
//! - Build geofence requests for stored reminders.
//! - Resolve triggered geofence ids into reminder notifications.
//!
//! # Invariants
//! - A triggered id that does not resolve is skipped, never fatal.
//! - Notification order follows the triggered id order.

use crate::data::data_source::ReminderDataSource;
use crate::data::result::DataResult;
use crate::model::geofence::GeofenceRequest;
use crate::model::reminder::Reminder;
use log::{info, warn};
use serde::{Deserialize, Serialize};

/// Payload a host shell turns into a user notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReminderNotification {
    pub reminder_id: String,
    pub title: String,
    pub description: Option<String>,
    pub location: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl From<Reminder> for ReminderNotification {
    fn from(value: Reminder) -> Self {
        Self {
            reminder_id: value.id,
            title: value.title,
            description: value.description,
            location: value.location,
            latitude: value.latitude,
            longitude: value.longitude,
        }
    }
}

/// Geofence controller over any reminder store handle.
pub struct GeofenceTriggerService<S: ReminderDataSource> {
    store: S,
}

impl<S: ReminderDataSource> GeofenceTriggerService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the geofence request for a stored reminder.
    ///
    /// `Ok(None)` when the reminder has no coordinates yet.
    pub fn geofence_for(&self, reminder_id: &str) -> DataResult<Option<GeofenceRequest>> {
        let reminder = self.store.get_reminder(reminder_id)?;
        Ok(GeofenceRequest::for_reminder(&reminder))
    }

    /// Returns geofence requests for every stored reminder with coordinates.
    pub fn active_geofences(&self) -> DataResult<Vec<GeofenceRequest>> {
        let reminders = self.store.get_reminders()?;
        Ok(reminders
            .iter()
            .filter_map(GeofenceRequest::for_reminder)
            .collect())
    }

    /// Resolves ids reported by an enter transition into notifications.
    pub fn on_geofences_entered(&self, request_ids: &[String]) -> Vec<ReminderNotification> {
        let mut notifications = Vec::with_capacity(request_ids.len());
        for request_id in request_ids {
            match self.store.get_reminder(request_id) {
                Ok(reminder) => notifications.push(ReminderNotification::from(reminder)),
                Err(err) => warn!(
                    "event=geofence_enter module=service status=skipped id={} error={}",
                    request_id, err
                ),
            }
        }
        info!(
            "event=geofence_enter module=service status=ok triggered={} notified={}",
            request_ids.len(),
            notifications.len()
        );
        notifications
    }
}
