//! Flutter-facing bindings for the location reminders core.

pub mod api;
