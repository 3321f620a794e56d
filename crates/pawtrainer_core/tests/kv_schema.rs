use pawtrainer_core::db::migrations::{latest_version, schema_version};
use pawtrainer_core::db::{open_db, open_db_in_memory, DbError};
use pawtrainer_core::{KeyValueStore, SqliteKeyValueStore, STORAGE_KEY};
use rusqlite::{params, Connection};
use std::thread::sleep;
use std::time::Duration;

fn updated_at(conn: &Connection, key: &str) -> i64 {
    conn.query_row(
        "SELECT updated_at FROM kv_store WHERE key = ?1;",
        [key],
        |row| row.get(0),
    )
    .unwrap()
}

#[test]
fn duplicate_raw_insert_violates_primary_key() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3);",
        params![STORAGE_KEY, "{}", 1_i64],
    )
    .unwrap();

    let err = conn
        .execute(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3);",
            params![STORAGE_KEY, "{}", 2_i64],
        )
        .unwrap_err();
    assert!(
        err.to_string().contains("UNIQUE constraint failed"),
        "unexpected error: {err}"
    );
}

#[test]
fn store_writes_stamp_updated_at_and_restamp_on_overwrite() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteKeyValueStore::new(&conn);

    store.set(STORAGE_KEY, "first").unwrap();
    let first_write = updated_at(&conn, STORAGE_KEY);
    assert!(first_write > 0);

    sleep(Duration::from_millis(5));
    store.set(STORAGE_KEY, "second").unwrap();
    let second_write = updated_at(&conn, STORAGE_KEY);

    assert!(second_write > first_write);
    assert_eq!(store.get(STORAGE_KEY).unwrap().as_deref(), Some("second"));
}

#[test]
fn reopened_file_keeps_version_and_stored_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pawtrainer.sqlite3");

    {
        let conn = open_db(&path).unwrap();
        SqliteKeyValueStore::new(&conn).set("k", "v").unwrap();
    }

    let conn = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn).unwrap(), latest_version());
    assert_eq!(
        SqliteKeyValueStore::new(&conn).get("k").unwrap().as_deref(),
        Some("v")
    );
}

#[test]
fn database_from_newer_build_is_rejected_without_changes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.sqlite3");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 42;").unwrap();
    drop(conn);

    match open_db(&path).unwrap_err() {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 42);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }

    let conn = Connection::open(&path).unwrap();
    let tables: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table';",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(tables, 0);
}
