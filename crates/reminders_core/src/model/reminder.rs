//! Reminder domain model.
//!
//! # Responsibility
//! - Define the stored reminder record and the UI-facing draft/list item.
//! - Convert between the two shapes without touching field values.
//!
//! # Invariants
//! - `id` is caller-supplied and never rewritten by storage.
//! - Coordinates are carried as-is; no rounding or normalization.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of a reminder, also used as its geofence request id.
pub type ReminderId = String;

/// Stored reminder record.
///
/// Title and location may be empty here; field validation happens upstream
/// in the save flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: ReminderId,
    pub title: String,
    pub description: Option<String>,
    /// Human-readable place name or address.
    pub location: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Reminder {
    /// Creates a record with a freshly generated id.
    pub fn new(
        title: impl Into<String>,
        description: Option<String>,
        location: impl Into<String>,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Self {
        Self::with_id(
            Uuid::new_v4().to_string(),
            title,
            description,
            location,
            latitude,
            longitude,
        )
    }

    /// Creates a record with a caller-provided id.
    pub fn with_id(
        id: impl Into<ReminderId>,
        title: impl Into<String>,
        description: Option<String>,
        location: impl Into<String>,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description,
            location: location.into(),
            latitude,
            longitude,
        }
    }

    /// Returns `(latitude, longitude)` when both are set.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }
}

/// Reminder as collected from form fields or shown in the list.
///
/// Text fields stay optional until the save flow validates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReminderDataItem {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub id: ReminderId,
}

impl ReminderDataItem {
    /// Creates a draft item with a generated id.
    pub fn new(
        title: Option<String>,
        description: Option<String>,
        location: Option<String>,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Self {
        Self {
            title,
            description,
            location,
            latitude,
            longitude,
            id: Uuid::new_v4().to_string(),
        }
    }

    /// Converts into a storage record. Missing text fields become empty.
    pub fn to_reminder(&self) -> Reminder {
        Reminder {
            id: self.id.clone(),
            title: self.title.clone().unwrap_or_default(),
            description: self.description.clone(),
            location: self.location.clone().unwrap_or_default(),
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

impl From<Reminder> for ReminderDataItem {
    fn from(value: Reminder) -> Self {
        Self {
            title: Some(value.title),
            description: value.description,
            location: Some(value.location),
            latitude: value.latitude,
            longitude: value.longitude,
            id: value.id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Reminder, ReminderDataItem};

    #[test]
    fn new_generates_distinct_ids() {
        let first = Reminder::new("a", None, "here", None, None);
        let second = Reminder::new("a", None, "here", None, None);
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn coordinates_require_both_values() {
        let mut reminder = Reminder::with_id("1", "t", None, "l", Some(1.0), None);
        assert_eq!(reminder.coordinates(), None);
        reminder.longitude = Some(2.0);
        assert_eq!(reminder.coordinates(), Some((1.0, 2.0)));
    }

    #[test]
    fn data_item_conversion_keeps_id_and_fields() {
        let reminder = Reminder::with_id(
            "1",
            "reminder",
            Some("Description1".to_string()),
            "Location1",
            Some(30.151351165),
            Some(29.351531),
        );
        let item = ReminderDataItem::from(reminder.clone());
        assert_eq!(item.id, "1");
        assert_eq!(item.title.as_deref(), Some("reminder"));
        assert_eq!(item.to_reminder(), reminder);
    }

    #[test]
    fn data_item_with_missing_text_converts_to_empty_strings() {
        let item = ReminderDataItem::new(None, None, None, None, None);
        let reminder = item.to_reminder();
        assert_eq!(reminder.id, item.id);
        assert!(reminder.title.is_empty());
        assert!(reminder.location.is_empty());
    }
}
