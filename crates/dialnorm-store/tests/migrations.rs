use dialnorm_store::error::StoreError;
use dialnorm_store::Store;

#[test]
fn migrations_apply_once() {
    let store = Store::open_in_memory().expect("open in memory");
    store.migrate().expect("migrate");
    store.migrate().expect("migrate again");

    let version: i64 = store
        .connection()
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .expect("schema version");
    assert_eq!(version, 1);
    let tables: i64 = store
        .connection()
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'phone_numbers';",
            [],
            |row| row.get(0),
        )
        .expect("table lookup");
    assert_eq!(tables, 1);
    assert_eq!(store.schema_version().expect("schema version"), 1);
}

#[test]
fn schema_version_is_zero_before_migrating() {
    let store = Store::open_in_memory().expect("open in memory");
    assert_eq!(store.schema_version().expect("schema version"), 0);
}

#[test]
fn migrations_reject_newer_database() {
    let store = Store::open_in_memory().expect("open in memory");
    store.migrate().expect("migrate");
    store
        .connection()
        .pragma_update(None, "user_version", 99)
        .expect("bump version");

    let err = store.migrate().expect_err("newer schema should fail");
    assert!(matches!(err, StoreError::Migration(_)));
}

#[test]
fn ping_succeeds_on_open_store() {
    let store = Store::open_in_memory().expect("open in memory");
    store.ping().expect("ping");
}
