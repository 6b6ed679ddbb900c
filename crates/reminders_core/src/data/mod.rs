//! Reminder store: contract, result type and implementations.
//!
//! # Responsibility
//! - Expose one `ReminderDataSource` trait consumed by every controller.
//! - Ship a SQLite-backed store and an in-memory store behind that trait.
//!
//! # Invariants
//! - Reads return `DataResult`; expected failures never panic.
//! - Both implementations share replace-on-conflict and ordering semantics.

pub mod data_source;
pub mod in_memory;
pub mod local_repository;
pub mod result;
