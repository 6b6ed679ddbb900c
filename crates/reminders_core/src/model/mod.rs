//! Reminder domain model.
//!
//! # Responsibility
//! - Define the data structures shared by storage, controllers and FFI.
//!
//! # Invariants
//! - Every reminder is identified by a caller-supplied `ReminderId`.
//! - The collection is flat; reminders never reference each other.

pub mod geofence;
pub mod reminder;
