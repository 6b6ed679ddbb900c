//! Use-case services consuming the reminder store.
//!
//! # Responsibility
//! - Orchestrate store calls into list, save and geofence use-cases.
//! - Keep UI/FFI layers decoupled from storage details.
//!
//! # Invariants
//! - Services receive their store handle at construction; there is no
//!   global registry.

pub mod geofence_service;
pub mod reminders_list_service;
pub mod save_reminder_service;
