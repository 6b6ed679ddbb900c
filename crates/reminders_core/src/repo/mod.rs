//! Persistence layer for reminder rows.
//!
//! # Responsibility
//! - Isolate SQLite query details from the reminder store contract.
//!
//! # Invariants
//! - DAO APIs surface transport errors as-is; conversion into store-level
//!   results happens in `data`.

pub mod reminder_dao;
