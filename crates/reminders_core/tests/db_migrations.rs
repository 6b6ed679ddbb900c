use reminders_core::db::migrations::{latest_version, reminder_schema_version};
use reminders_core::db::{open_db, open_db_in_memory, DbError};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(reminder_schema_version(&conn).unwrap(), latest_version());
    assert_table_exists(&conn, "reminders");
}

#[test]
fn reopening_file_database_keeps_schema_and_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reminders.db");

    let conn_first = open_db(&path).unwrap();
    conn_first
        .execute(
            "INSERT INTO reminders (id, title, location) VALUES ('1', 'reminder', 'Location1');",
            [],
        )
        .unwrap();
    drop(conn_first);

    let conn_second = open_db(&path).unwrap();
    assert_eq!(reminder_schema_version(&conn_second).unwrap(), latest_version());
    let count: i64 = conn_second
        .query_row("SELECT COUNT(*) FROM reminders;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn inserted_rows_get_created_at_timestamp() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO reminders (id, title, location) VALUES ('1', 'reminder', 'Location1');",
        [],
    )
    .unwrap();

    let created_at: i64 = conn
        .query_row("SELECT created_at FROM reminders WHERE id = '1';", [], |row| {
            row.get(0)
        })
        .unwrap();
    assert!(created_at > 0);
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    match &err {
        DbError::StoreFromNewerBuild { found, supported } => {
            assert_eq!(*found, 999);
            assert_eq!(*supported, latest_version());
            assert_eq!(
                err.to_string(),
                format!(
                    "reminder store schema v999 was written by a newer build (this build reads up to v{})",
                    latest_version()
                )
            );
        }
        other => panic!("unexpected error: {other}"),
    }

    // The newer file is left as it was.
    let conn = Connection::open(&path).unwrap();
    assert_eq!(reminder_schema_version(&conn).unwrap(), 999);
}

#[test]
fn coordinate_columns_hold_bit_patterns() {
    let conn = open_db_in_memory().unwrap();
    let mut stmt = conn
        .prepare("SELECT name, type FROM pragma_table_info('reminders') WHERE name LIKE '%itude_bits';")
        .unwrap();
    let columns = stmt
        .query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)))
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();

    assert_eq!(
        columns,
        vec![
            ("latitude_bits".to_string(), "INTEGER".to_string()),
            ("longitude_bits".to_string(), "INTEGER".to_string()),
        ]
    );
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
