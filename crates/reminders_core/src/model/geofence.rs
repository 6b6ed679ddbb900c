//! Geofence request model for reminder locations.
//!
//! # Responsibility
//! - Describe the circular region a host shell registers with the OS for a
//!   reminder.
//! - Answer whether a point lies inside that region.
//!
//! # Invariants
//! - `request_id` equals the reminder id, so triggered ids map back to
//!   stored reminders.
//! - Regions are only built for reminders with both coordinates set.

use crate::model::reminder::{Reminder, ReminderId};
use serde::{Deserialize, Serialize};

/// Radius of every reminder geofence, in meters.
pub const GEOFENCE_RADIUS_METERS: f64 = 100.0;
/// Mean Earth radius used for distance checks, in meters.
const EARTH_RADIUS_METERS: f64 = 6_371_008.8;

/// Transition that fires a reminder geofence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeofenceTransition {
    Enter,
    Exit,
    Dwell,
}

/// Circular region handed to the OS geofencing API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeofenceRequest {
    pub request_id: ReminderId,
    pub latitude: f64,
    pub longitude: f64,
    pub radius_meters: f64,
    /// `None` means the geofence never expires.
    pub expiration_ms: Option<i64>,
    pub transition: GeofenceTransition,
    /// Fire immediately when the device is already inside on registration.
    pub initial_trigger_on_enter: bool,
}

impl GeofenceRequest {
    /// Builds the enter-geofence for a reminder, or `None` without coordinates.
    pub fn for_reminder(reminder: &Reminder) -> Option<Self> {
        let (latitude, longitude) = reminder.coordinates()?;
        Some(Self {
            request_id: reminder.id.clone(),
            latitude,
            longitude,
            radius_meters: GEOFENCE_RADIUS_METERS,
            expiration_ms: None,
            transition: GeofenceTransition::Enter,
            initial_trigger_on_enter: true,
        })
    }

    /// Great-circle distance from the region center, in meters.
    pub fn distance_meters(&self, latitude: f64, longitude: f64) -> f64 {
        haversine_meters(self.latitude, self.longitude, latitude, longitude)
    }

    /// Whether the point lies on or inside the region boundary.
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        self.distance_meters(latitude, longitude) <= self.radius_meters
    }
}

fn haversine_meters(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let delta_phi = (lat2 - lat1).to_radians();
    let delta_lambda = (lon2 - lon1).to_radians();

    let a = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_METERS * c
}

#[cfg(test)]
mod tests {
    use super::{GeofenceRequest, GeofenceTransition, GEOFENCE_RADIUS_METERS};
    use crate::model::reminder::Reminder;

    fn reminder_at(latitude: Option<f64>, longitude: Option<f64>) -> Reminder {
        Reminder::with_id("1", "reminder", None, "Location1", latitude, longitude)
    }

    #[test]
    fn for_reminder_uses_id_and_default_region() {
        let request =
            GeofenceRequest::for_reminder(&reminder_at(Some(30.151351165), Some(29.351531)))
                .unwrap();
        assert_eq!(request.request_id, "1");
        assert_eq!(request.radius_meters, GEOFENCE_RADIUS_METERS);
        assert_eq!(request.transition, GeofenceTransition::Enter);
        assert_eq!(request.expiration_ms, None);
        assert!(request.initial_trigger_on_enter);
    }

    #[test]
    fn for_reminder_requires_both_coordinates() {
        assert!(GeofenceRequest::for_reminder(&reminder_at(None, Some(1.0))).is_none());
        assert!(GeofenceRequest::for_reminder(&reminder_at(Some(1.0), None)).is_none());
    }

    #[test]
    fn contains_center_and_rejects_far_points() {
        let request = GeofenceRequest::for_reminder(&reminder_at(Some(30.0), Some(31.0))).unwrap();
        assert!(request.contains(30.0, 31.0));
        // ~55 m north
        assert!(request.contains(30.0005, 31.0));
        // ~111 m north
        assert!(!request.contains(30.001, 31.0));
    }

    #[test]
    fn distance_matches_one_degree_of_latitude() {
        let request = GeofenceRequest::for_reminder(&reminder_at(Some(0.0), Some(0.0))).unwrap();
        let distance = request.distance_meters(1.0, 0.0);
        assert!((distance - 111_195.0).abs() < 10.0, "distance={distance}");
    }
}
