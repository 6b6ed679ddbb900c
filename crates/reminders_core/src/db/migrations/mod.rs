//! Reminder table schema history.
//!
//! Each step is an embedded SQL file. The highest step applied to a store is
//! recorded in `PRAGMA user_version`; a fresh file starts at 0.

use crate::db::{DbError, DbResult};
use log::{debug, info};
use rusqlite::Connection;

struct SchemaStep {
    version: u32,
    name: &'static str,
    sql: &'static str,
}

const SCHEMA_STEPS: &[SchemaStep] = &[SchemaStep {
    version: 1,
    name: "reminders_table",
    sql: include_str!("0001_init.sql"),
}];

/// Schema version a reminder store has after [`apply_migrations`].
pub fn latest_version() -> u32 {
    SCHEMA_STEPS.last().map_or(0, |step| step.version)
}

/// Reads the schema version recorded in a reminder store.
pub fn reminder_schema_version(conn: &Connection) -> DbResult<u32> {
    Ok(conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?)
}

/// Brings a reminder store up to [`latest_version`].
///
/// All missing steps run in one transaction, so a failed step leaves the
/// store at its previous version. Stores from a newer build are rejected.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let found = reminder_schema_version(conn)?;
    let supported = latest_version();
    if found > supported {
        return Err(DbError::StoreFromNewerBuild { found, supported });
    }

    let pending = pending_steps(found);
    if pending.is_empty() {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for step in pending {
        debug!(
            "event=db_migrate_step module=db version={} name={}",
            step.version, step.name
        );
        tx.execute_batch(step.sql)?;
        tx.pragma_update(None, "user_version", step.version)?;
    }
    tx.commit()?;

    info!(
        "event=db_migrate module=db status=ok from_version={found} to_version={supported}"
    );
    Ok(())
}

fn pending_steps(found: u32) -> &'static [SchemaStep] {
    let first_missing = SCHEMA_STEPS
        .iter()
        .position(|step| step.version > found)
        .unwrap_or(SCHEMA_STEPS.len());
    &SCHEMA_STEPS[first_missing..]
}
